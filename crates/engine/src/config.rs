use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::app::LoopConfig;
use crate::spawn::HazardTemplate;
use crate::world::{tags, Rgba, Shape, Vec2};

pub const CONFIG_ENV_VAR: &str = "ARCADE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: std::env::VarError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path} at `{field}`: {message}")]
    Parse {
        path: PathBuf,
        field: String,
        message: String,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeConfig {
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
}

impl ShapeConfig {
    pub fn shape(&self) -> Shape {
        Shape::new(self.width, self.height, self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
    pub player_spawn: [f32; 2],
    pub player_shape: ShapeConfig,
    /// Pixels moved per tick while a direction is held.
    pub player_speed: f32,
    pub hazard_shape: ShapeConfig,
    pub hazard_lifespan_ms: u64,
    pub spawn_interval_ms: u64,
    pub spawn_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Arcade".to_string(),
            window_width: 1366,
            window_height: 768,
            target_tps: 60,
            player_spawn: [0.0, 0.0],
            player_shape: ShapeConfig {
                width: 40.0,
                height: 40.0,
                color: Rgba::WHITE,
            },
            player_speed: 2.0,
            hazard_shape: ShapeConfig {
                width: 40.0,
                height: 40.0,
                color: Rgba::RED,
            },
            hazard_lifespan_ms: 30_000,
            spawn_interval_ms: 2_500,
            spawn_seed: None,
        }
    }
}

impl GameConfig {
    /// Reads the file named by [`CONFIG_ENV_VAR`], or returns the defaults
    /// when the variable is unset.
    pub fn load_from_env() -> Result<(Self, Option<PathBuf>), ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(value) => {
                let path = PathBuf::from(value);
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            Err(std::env::VarError::NotPresent) => Ok((Self::default(), None)),
            Err(source) => Err(ConfigError::EnvVar {
                var: CONFIG_ENV_VAR,
                source,
            }),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let config: GameConfig =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    field: error.path().to_string(),
                    message: error.inner().to_string(),
                }
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid {
                field: "window_width/window_height",
                reason: format!("{}x{} has no area", self.window_width, self.window_height),
            });
        }
        if self.target_tps == 0 {
            return Err(ConfigError::Invalid {
                field: "target_tps",
                reason: "must be at least 1".to_string(),
            });
        }
        validate_shape("player_shape", &self.player_shape)?;
        validate_shape("hazard_shape", &self.hazard_shape)?;
        if self.hazard_shape.width >= self.window_width as f32
            || self.hazard_shape.height >= self.window_height as f32
        {
            return Err(ConfigError::Invalid {
                field: "hazard_shape",
                reason: "hazards must fit strictly inside the window".to_string(),
            });
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "player_speed",
                reason: format!("{} is not a non-negative number", self.player_speed),
            });
        }
        Ok(())
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.player_spawn[0], self.player_spawn[1])
    }

    pub fn hazard_template(&self) -> HazardTemplate {
        HazardTemplate {
            tag: tags::ENEMY.to_string(),
            shape: self.hazard_shape.shape(),
            lifespan_ms: self.hazard_lifespan_ms,
        }
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            window_title: self.window_title.clone(),
            window_width: self.window_width,
            window_height: self.window_height,
            target_tps: self.target_tps,
            max_frame_delta: Duration::from_millis(250),
            ..LoopConfig::default()
        }
    }
}

fn validate_shape(field: &'static str, shape: &ShapeConfig) -> Result<(), ConfigError> {
    let valid = |value: f32| value.is_finite() && value > 0.0;
    if valid(shape.width) && valid(shape.height) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("extent {}x{} must be positive", shape.width, shape.height),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(raw: &str) -> Result<GameConfig, ConfigError> {
        GameConfig::parse(raw, Path::new("test.json"))
    }

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.window_size(), Vec2::new(1366.0, 768.0));
        assert_eq!(config.hazard_template().lifespan_ms, 30_000);
        assert_eq!(config.hazard_template().tag, tags::ENEMY);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config = parse(r#"{ "window_title": "Dodge", "spawn_seed": 42 }"#).expect("config");
        assert_eq!(config.window_title, "Dodge");
        assert_eq!(config.spawn_seed, Some(42));
        assert_eq!(config.window_width, 1366);
        assert_eq!(config.loop_config().window_title, "Dodge");
    }

    #[test]
    fn parse_error_names_the_field_path() {
        let raw = r#"{ "player_shape": { "width": "wide", "height": 1, "color": [0,0,0,0] } }"#;
        let error = parse(raw).expect_err("bad width");
        match error {
            ConfigError::Parse { field, .. } => assert_eq!(field, "player_shape.width"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shape_color_parses_as_rgba() {
        let raw = r#"{ "hazard_shape": { "width": 12, "height": 8, "color": [0,128,255,255] } }"#;
        let config = parse(raw).expect("config");
        assert_eq!(
            config.hazard_template().shape,
            Shape::new(12.0, 8.0, Rgba([0, 128, 255, 255]))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = parse(r#"{ "window_colour": 3 }"#).expect_err("unknown field");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn hazard_larger_than_window_is_rejected() {
        let error = parse(
            r#"{ "window_width": 30, "window_height": 30,
                 "player_shape": { "width": 10, "height": 10, "color": [255,255,255,255] } }"#,
        )
        .expect_err("hazard does not fit");
        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "hazard_shape",
                ..
            }
        ));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let error = parse(r#"{ "target_tps": 0 }"#).expect_err("zero tps");
        assert!(error.to_string().contains("target_tps"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "spawn_interval_ms": 1000, "player_speed": 3.5 }}"#).expect("write");

        let config = GameConfig::load(file.path()).expect("load");
        assert_eq!(config.spawn_interval_ms, 1000);
        assert_eq!(config.player_speed, 3.5);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = GameConfig::load(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
