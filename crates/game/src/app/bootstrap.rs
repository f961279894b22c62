use std::process::ExitCode;

use engine::{GameConfig, LoopConfig, Scene};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, ExitCode> {
    init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "startup");

    let (game_config, source) = GameConfig::load_from_env().map_err(|err| {
        error!(error = %err, "config_failed");
        ExitCode::FAILURE
    })?;
    info!(
        source = source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "defaults".to_string()),
        window_width = game_config.window_width,
        window_height = game_config.window_height,
        target_tps = game_config.target_tps,
        spawn_interval_ms = game_config.spawn_interval_ms,
        "config_loaded"
    );

    Ok(AppWiring {
        config: game_config.loop_config(),
        scene: gameplay::build_scene(&game_config),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
