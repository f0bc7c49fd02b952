//! Host-side adapters around the pure engine.
//!
//! The core crate never touches files, clocks, or the environment. This crate
//! supplies those pieces for the terminal binary:
//!
//! - [`store::FileScoreStore`]: high score as a single integer in a text file
//! - [`clock::FallClock`]: monotonic time since the last fall step
//! - [`config::AppConfig`]: settings read from environment variables
//! - [`logging::init_log`]: file logging (the terminal is busy drawing the game)
//!
//! # Environment Variables
//!
//! - `BLOCKS_HIGHSCORE_PATH`: high score file (default: `tetris_highscore.txt`)
//! - `BLOCKS_LOG_PATH`: log file; logging is off when unset or empty
//! - `BLOCKS_LOG_LEVEL`: `error`, `warn`, `info`, `debug`, `trace` (default: `info`)
//! - `BLOCKS_SEED`: fixed RNG seed; random when unset

pub mod clock;
pub mod config;
pub mod logging;
pub mod store;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use clock::FallClock;
pub use config::AppConfig;
pub use logging::init_log;
pub use store::FileScoreStore;
