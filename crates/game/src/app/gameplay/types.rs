/// Per-session state folded out of the scene so systems receive it
/// explicitly instead of reaching for globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionState {
    score: u32,
    running: bool,
    paused: bool,
    last_spawn_ms: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            score: 0,
            running: true,
            paused: false,
            last_spawn_ms: 0,
        }
    }
}

/// Immutable gameplay parameters resolved from [`GameConfig`] at startup.
#[derive(Debug, Clone)]
struct GameplayTuning {
    window_title: String,
    window_size: Vec2,
    player_spawn: Vec2,
    player_shape: Shape,
    player_speed: f32,
    hazard: HazardTemplate,
    spawn_interval_ms: u64,
}

impl GameplayTuning {
    fn from_config(config: &GameConfig) -> Self {
        Self {
            window_title: config.window_title.clone(),
            window_size: config.window_size(),
            player_spawn: config.player_spawn(),
            player_shape: config.player_shape.shape(),
            player_speed: config.player_speed,
            hazard: config.hazard_template(),
            spawn_interval_ms: config.spawn_interval_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameplaySystemId {
    ApplyInput,
    Movement,
    Collision,
    Spawner,
    Lifespan,
    Flush,
}

impl GameplaySystemId {
    #[cfg(test)]
    fn name(self) -> &'static str {
        match self {
            Self::ApplyInput => "ApplyInput",
            Self::Movement => "Movement",
            Self::Collision => "Collision",
            Self::Spawner => "Spawner",
            Self::Lifespan => "Lifespan",
            Self::Flush => "Flush",
        }
    }
}

const GAMEPLAY_SYSTEM_ORDER: [GameplaySystemId; 6] = [
    GameplaySystemId::ApplyInput,
    GameplaySystemId::Movement,
    GameplaySystemId::Collision,
    GameplaySystemId::Spawner,
    GameplaySystemId::Lifespan,
    GameplaySystemId::Flush,
];
