//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`] and polls the
//! terminal for at most one command per tick. Physical bindings live here so
//! the engine only ever sees logical commands.

pub mod map;
pub mod poll;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::poll_command;
