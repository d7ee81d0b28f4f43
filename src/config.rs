//! Runtime configuration read from the environment.
//!
//! | Variable               | Meaning                                   | Default      |
//! |------------------------|-------------------------------------------|--------------|
//! | `GRID_TETRIS_SEED`     | u64 seed for the piece randomizer         | OS entropy   |
//! | `GRID_TETRIS_SPEED`    | gravity interval at level 1, in ticks     | 50 (min 10)  |
//! | `GRID_TETRIS_LOG`      | `error`, `warn`, `info`, `debug`, `trace` | `info`       |
//! | `GRID_TETRIS_LOG_PATH` | log file; logging is off when unset       | unset        |

use std::path::PathBuf;

use log::LevelFilter;

use crate::core::GameConfig;
use crate::types::{INITIAL_SPEED, MIN_SPEED};

pub const SEED_VAR: &str = "GRID_TETRIS_SEED";
pub const SPEED_VAR: &str = "GRID_TETRIS_SPEED";
pub const LOG_VAR: &str = "GRID_TETRIS_LOG";
pub const LOG_PATH_VAR: &str = "GRID_TETRIS_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub initial_speed: u32,
    pub log_level: LevelFilter,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_speed: INITIAL_SPEED,
            log_level: LevelFilter::Info,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var(SEED_VAR).and_then(|s| s.parse().ok());
        let initial_speed = var(SPEED_VAR)
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(INITIAL_SPEED)
            .max(MIN_SPEED);
        let log_level = var(LOG_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Info);
        let log_path = var(LOG_PATH_VAR).map(PathBuf::from);

        Self {
            seed,
            initial_speed,
            log_level,
            log_path,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            initial_speed: self.initial_speed,
        }
    }
}
