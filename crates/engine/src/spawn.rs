use rand::Rng;
use tracing::{debug, info};

use crate::collision::{boundary_flags, CollisionError};
use crate::world::{Aabb, EntityId, EntityManager, Lifespan, Shape, Transform, Vec2};

pub const MAX_SPAWN_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone)]
pub struct HazardTemplate {
    pub tag: String,
    pub shape: Shape,
    pub lifespan_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnOutcome {
    pub id: EntityId,
    pub attempts: u32,
    pub placed: bool,
}

/// Creates a hazard at a uniformly random spot that touches neither a window
/// edge nor any live entity, redrawing up to [`MAX_SPAWN_ATTEMPTS`] times.
/// When every draw is rejected the hazard is destroyed instead, so it is
/// pruned on the next update without ever being seen by other systems.
///
/// Only entities already committed to the manager are considered; hazards
/// still pending from this tick are not.
pub fn spawn_hazard<R: Rng + ?Sized>(
    manager: &mut EntityManager,
    rng: &mut R,
    window_size: Vec2,
    template: &HazardTemplate,
    now_ms: u64,
) -> Result<SpawnOutcome, CollisionError> {
    let occupied = manager
        .entities()
        .iter()
        .filter(|entity| entity.is_active())
        .map(|entity| entity.bounds())
        .collect::<Result<Vec<_>, _>>()?;

    let size = template.shape.size();
    let mut candidate = Aabb::new(random_position(rng, window_size), size);
    let mut attempts = 1;
    let mut placed = is_clear(&candidate, &occupied, window_size);
    while !placed && attempts < MAX_SPAWN_ATTEMPTS {
        candidate.position = random_position(rng, window_size);
        attempts += 1;
        placed = is_clear(&candidate, &occupied, window_size);
    }

    let id = manager.create_entity(&template.tag);
    if let Some(hazard) = manager.find_entity_mut(id) {
        hazard.transform = Some(Transform::at(candidate.position));
        hazard.shape = Some(template.shape);
        hazard.lifespan = Some(Lifespan::new(now_ms, template.lifespan_ms));
        if !placed {
            hazard.destroy();
        }
    }

    if placed {
        debug!(
            entity_id = id.0,
            x = candidate.position.x,
            y = candidate.position.y,
            attempts,
            "hazard_spawned"
        );
    } else {
        info!(
            entity_id = id.0,
            attempts = MAX_SPAWN_ATTEMPTS,
            "hazard_spawn_exhausted"
        );
    }

    Ok(SpawnOutcome {
        id,
        attempts,
        placed,
    })
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, window_size: Vec2) -> Vec2 {
    Vec2::new(
        random_coordinate(rng, window_size.x),
        random_coordinate(rng, window_size.y),
    )
}

// Whole pixels in [0, extent).
fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    let upper = extent.max(1.0) as u32;
    rng.gen_range(0..upper) as f32
}

fn is_clear(candidate: &Aabb, occupied: &[Aabb], window_size: Vec2) -> bool {
    !boundary_flags(candidate, window_size).any()
        && !occupied.iter().any(|other| other.touches(candidate))
}
