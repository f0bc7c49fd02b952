//! Terminal falling-block puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches can write `tui_blocks::core::GameState`.

pub use tui_blocks_adapter as adapter;
pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
