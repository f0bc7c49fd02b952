//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

/// Default high score file, in the working directory.
pub const DEFAULT_HIGHSCORE_PATH: &str = "tetris_highscore.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub highscore_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub seed: Option<u32>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset, empty, or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let highscore_path = non_empty("BLOCKS_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_PATH));

        let log_path = non_empty("BLOCKS_LOG_PATH").map(PathBuf::from);

        let log_level = non_empty("BLOCKS_LOG_LEVEL")
            .and_then(|s| LevelFilter::from_str(&s).ok())
            .unwrap_or(LevelFilter::Info);

        let seed = non_empty("BLOCKS_SEED").and_then(|s| s.parse().ok());

        Self {
            highscore_path,
            log_path,
            log_level,
            seed,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
