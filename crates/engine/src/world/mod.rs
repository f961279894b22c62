mod components;
mod entity;
mod geometry;
mod manager;

pub use components::{Input, Lifespan, Rgba, Shape, Transform};
pub use entity::{tags, Entity, EntityId, EntityIdAllocator};
pub use geometry::{Aabb, Vec2};
pub use manager::EntityManager;
