//! Configuration file loading for lumen.
//!
//! Settings live in `config.toml` under the platform config directory, or
//! at the path in `LUMEN_CONFIG`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lumen_core::{AnimationKind, AnimationSettings};
use serde::Deserialize;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LUMEN_CONFIG";

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("frame_rate must be at least 1")]
    InvalidFrameRate,
    #[error("cell size must be positive, got {width}x{height}")]
    InvalidCellSize { width: f32, height: f32 },
    #[error("animation.{field} must be {expected}, got {value}")]
    InvalidDecay {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

/// How terminal cells map onto the logical drawing surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Logical pixels per terminal column.
    pub cell_width: f32,
    /// Logical pixels per terminal row.
    pub cell_height: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ticks per second.
    pub frame_rate: u32,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Animation to start immediately instead of waiting for a trigger.
    pub start: Option<AnimationKind>,
    /// Where to write logs; logging is off when unset.
    pub log_file: Option<PathBuf>,
    pub surface: SurfaceConfig,
    pub animation: AnimationSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            seed: None,
            start: None,
            log_file: None,
            surface: SurfaceConfig::default(),
            animation: AnimationSettings::default(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "lumen").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `LUMEN_CONFIG` or the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path);
        match path {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        let SurfaceConfig {
            cell_width,
            cell_height,
        } = self.surface;
        if !(cell_width > 0.0 && cell_height > 0.0) {
            return Err(ConfigError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        self.validate_decay()
    }

    /// Decay factors lie strictly between 0 and 1 and removal thresholds are
    /// positive, so every spark and fragment is eventually removed.
    fn validate_decay(&self) -> Result<(), ConfigError> {
        let animation = &self.animation;
        let factors = [
            ("fade_speed", animation.fade_speed),
            ("vortex_shrink", animation.vortex_shrink),
        ];
        for (field, value) in factors {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::InvalidDecay {
                    field,
                    value,
                    expected: "between 0 and 1 (exclusive)",
                });
            }
        }
        let thresholds = [
            ("firework_min_life", animation.firework_min_life),
            ("vortex_min_size", animation.vortex_min_size),
        ];
        for (field, value) in thresholds {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidDecay {
                    field,
                    value,
                    expected: "positive",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lumen-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("lumen-config-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_file(
            "partial.toml",
            r#"
            frame_rate = 30
            seed = 42
            start = "bouncingBall"

            [animation]
            network_particles = 40
            "#,
        );
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.start, Some(AnimationKind::BouncingBall));
        assert_eq!(config.animation.network_particles, 40);
        assert_eq!(config.animation.connection_distance, 120.0);
        assert_eq!(config.surface, SurfaceConfig::default());
    }

    #[test]
    fn test_unknown_start_kind_is_parse_error() {
        let path = temp_file("bad-kind.toml", r#"start = "sparkles""#);
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let path = temp_file("zero-rate.toml", "frame_rate = 0");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidFrameRate)
        ));
    }

    #[test]
    fn test_non_decaying_fade_rejected() {
        let path = temp_file("fade.toml", "[animation]\nfade_speed = 1.0");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidDecay {
                field: "fade_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_non_decaying_shrink_rejected() {
        let path = temp_file("shrink.toml", "[animation]\nvortex_shrink = 1.5");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidDecay {
                field: "vortex_shrink",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_removal_threshold_rejected() {
        let path = temp_file("min-life.toml", "[animation]\nfirework_min_life = 0.0");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDecay {
                field: "firework_min_life",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "animation.firework_min_life must be positive, got 0"
        );

        let path = temp_file("min-size.toml", "[animation]\nvortex_min_size = -0.1");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidDecay {
                field: "vortex_min_size",
                ..
            })
        ));
    }

    #[test]
    fn test_default_decay_accepted() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_bad_cell_size_rejected() {
        let path = temp_file("cells.toml", "[surface]\ncell_width = 0.0");
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidCellSize { .. })
        ));
    }
}
