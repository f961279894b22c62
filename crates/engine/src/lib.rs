pub mod app;
pub mod collision;
pub mod config;
pub mod spawn;
pub mod world;

pub use app::{
    run_app, AppError, InputAction, InputSnapshot, LoopConfig, LoopMetricsSnapshot, Renderer,
    Scene, TickClock,
};
pub use collision::{
    detect_out_of_bounds, enforce_controlled_bounds, enforce_hazard_bounds, overlaps, Boundary,
    BoundaryFlags, CollisionError,
};
pub use config::{ConfigError, GameConfig, ShapeConfig, CONFIG_ENV_VAR};
pub use spawn::{spawn_hazard, HazardTemplate, SpawnOutcome, MAX_SPAWN_ATTEMPTS};
pub use world::{
    tags, Aabb, Entity, EntityId, EntityIdAllocator, EntityManager, Input, Lifespan, Rgba, Shape,
    Transform, Vec2,
};
