use std::fmt;

use super::{Aabb, Input, Lifespan, Shape, Transform};
use crate::collision::CollisionError;

pub mod tags {
    pub const PLAYER: &str = "player";
    pub const ENEMY: &str = "enemy";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct EntityIdAllocator {
    next: u64,
}

impl EntityIdAllocator {
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    tag: String,
    active: bool,
    pub transform: Option<Transform>,
    pub shape: Option<Shape>,
    pub input: Option<Input>,
    pub lifespan: Option<Lifespan>,
}

impl Entity {
    pub(crate) fn new(id: EntityId, tag: &str) -> Self {
        Self {
            id,
            tag: tag.to_string(),
            active: true,
            transform: None,
            shape: None,
            input: None,
            lifespan: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Logical destruction; the manager drops the entity on its next update.
    pub fn destroy(&mut self) {
        self.active = false;
    }

    pub fn is_player(&self) -> bool {
        self.tag == tags::PLAYER
    }

    /// World-space box built from the transform and shape.
    pub fn bounds(&self) -> Result<Aabb, CollisionError> {
        let transform = self
            .transform
            .as_ref()
            .ok_or_else(|| self.missing("transform"))?;
        let shape = self.shape.as_ref().ok_or_else(|| self.missing("shape"))?;
        Ok(Aabb::new(transform.position, shape.size()))
    }

    /// Error describing a component this entity was expected to carry.
    pub fn missing(&self, component: &'static str) -> CollisionError {
        CollisionError::MissingComponent {
            component,
            tag: self.tag.clone(),
            id: self.id,
        }
    }
}
