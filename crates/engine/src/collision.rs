use thiserror::Error;

use crate::world::{Aabb, Entity, EntityId, Vec2};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error("entity {tag} with id {id} lacks a {component} component")]
    MissingComponent {
        component: &'static str,
        tag: String,
        id: EntityId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    Top,
    Bottom,
    Left,
    Right,
}

impl Boundary {
    pub const ALL: [Boundary; 4] = [
        Boundary::Top,
        Boundary::Bottom,
        Boundary::Left,
        Boundary::Right,
    ];

    const fn bit(self) -> u8 {
        match self {
            Boundary::Top => 1 << 0,
            Boundary::Bottom => 1 << 1,
            Boundary::Left => 1 << 2,
            Boundary::Right => 1 << 3,
        }
    }
}

/// Set of window edges an entity touches or crosses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryFlags(u8);

impl BoundaryFlags {
    pub const NONE: BoundaryFlags = BoundaryFlags(0);

    pub fn with(mut self, boundary: Boundary, hit: bool) -> Self {
        if hit {
            self.0 |= boundary.bit();
        } else {
            self.0 &= !boundary.bit();
        }
        self
    }

    pub fn contains(self, boundary: Boundary) -> bool {
        self.0 & boundary.bit() != 0
    }

    pub fn any(self) -> bool {
        self.0 != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Boundary> {
        Boundary::ALL
            .into_iter()
            .filter(move |boundary| self.contains(*boundary))
    }
}

pub(crate) fn boundary_flags(bounds: &Aabb, window_size: Vec2) -> BoundaryFlags {
    BoundaryFlags::NONE
        .with(Boundary::Top, bounds.position.y <= 0.0)
        .with(Boundary::Bottom, bounds.bottom() >= window_size.y)
        .with(Boundary::Left, bounds.position.x <= 0.0)
        .with(Boundary::Right, bounds.right() >= window_size.x)
}

/// Window coordinates are top-left origin with `y` growing downward; an edge
/// counts as hit when the entity reaches it, not only when it crosses.
pub fn detect_out_of_bounds(
    entity: &Entity,
    window_size: Vec2,
) -> Result<BoundaryFlags, CollisionError> {
    let bounds = entity.bounds()?;
    Ok(boundary_flags(&bounds, window_size))
}

/// Clamps the entity back inside the window on every flagged edge.
pub fn enforce_controlled_bounds(
    entity: &mut Entity,
    flags: BoundaryFlags,
    window_size: Vec2,
) -> Result<(), CollisionError> {
    clamp_to_window(entity, flags, window_size, false)
}

/// Clamps like [`enforce_controlled_bounds`] and also reflects the velocity
/// component normal to each flagged edge. Leaves the player untouched.
pub fn enforce_hazard_bounds(
    entity: &mut Entity,
    flags: BoundaryFlags,
    window_size: Vec2,
) -> Result<(), CollisionError> {
    entity.bounds()?;
    if entity.is_player() {
        return Ok(());
    }
    clamp_to_window(entity, flags, window_size, true)
}

fn clamp_to_window(
    entity: &mut Entity,
    flags: BoundaryFlags,
    window_size: Vec2,
    reflect: bool,
) -> Result<(), CollisionError> {
    let size = entity.bounds()?.size;
    let Some(transform) = entity.transform.as_mut() else {
        return Err(entity.missing("transform"));
    };

    for boundary in flags.iter() {
        match boundary {
            Boundary::Top => transform.position.y = 0.0,
            Boundary::Bottom => transform.position.y = window_size.y - size.y,
            Boundary::Left => transform.position.x = 0.0,
            Boundary::Right => transform.position.x = window_size.x - size.x,
        }
        if reflect {
            match boundary {
                Boundary::Top | Boundary::Bottom => transform.velocity.y = -transform.velocity.y,
                Boundary::Left | Boundary::Right => transform.velocity.x = -transform.velocity.x,
            }
        }
    }
    Ok(())
}

/// Inclusive box test; rectangles that share only an edge collide.
pub fn overlaps(a: &Entity, b: &Entity) -> Result<bool, CollisionError> {
    let a = a.bounds()?;
    let b = b.bounds()?;
    Ok(a.touches(&b))
}
