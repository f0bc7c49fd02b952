//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminals, keyboards, clocks, or files, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the tick path
//!
//! # Module Structure
//!
//! - [`board`]: 14x26 game board with collision detection and line clearing
//! - [`game_state`]: Active piece, score, fall interval, and the spawn/lock cycle
//! - [`pieces`]: Tetromino occupancy matrices and clockwise rotation
//! - [`rng`]: Uniform random piece and color generation
//! - [`snapshot`]: Read-only per-tick view for renderers
//! - [`store`]: High score persistence boundary
//!
//! # Game Rules
//!
//! - **Uniform Randomizer**: Kind and color are drawn independently each spawn
//! - **Plain Rotation**: Clockwise only, no wall kicks; a blocked rotation is discarded
//! - **Immediate Lock**: A piece locks on the first fall step that cannot move it down
//! - **Scoring**: 100 points per cleared row, nothing else
//! - **Game Over**: A newly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_blocks_core::GameState;
//! use tui_blocks_types::GameCommand;
//!
//! let mut game = GameState::seeded(12345);
//!
//! // Not enough time for a fall step; only the command is applied.
//! let report = game.tick(Duration::from_millis(16), Some(GameCommand::MoveLeft));
//! assert!(!report.fall_timer_reset);
//!
//! // A full fall interval moves the piece down one row.
//! let y = game.active().y;
//! let report = game.tick(game.fall_interval(), None);
//! assert!(report.fell);
//! assert_eq!(game.active().y, y + 1);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod store;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GamePhase, GameState, TickReport};
pub use pieces::{rotate, shape_of, Piece, Shape};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use store::{MemoryScoreStore, NullScoreStore, ScoreStore};
