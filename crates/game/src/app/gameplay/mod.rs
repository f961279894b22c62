use engine::{
    detect_out_of_bounds, enforce_controlled_bounds, overlaps, spawn_hazard, tags,
    CollisionError, EntityId, EntityManager, GameConfig, HazardTemplate, Input, InputAction,
    InputSnapshot, Scene, Shape, TickClock, Transform, Vec2,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

const GAMEPLAY_SYSTEM_ORDER_TEXT: &str = "ApplyInput>Movement>Collision>Spawner>Lifespan>Flush";

include!("types.rs");
include!("systems.rs");
include!("scene_impl.rs");

pub(crate) fn build_scene(config: &GameConfig) -> Box<dyn Scene> {
    let seed = config.spawn_seed.unwrap_or_else(rand::random);
    info!(seed, "spawn_rng_seeded");
    Box::new(ArcadeScene::new(GameplayTuning::from_config(config), seed))
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
