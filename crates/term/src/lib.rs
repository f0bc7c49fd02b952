//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the snapshot is drawn into a plain
//! framebuffer, and the framebuffer is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw each board cell two characters wide to offset glyph aspect ratio
//! - Only rewrite rows that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_of, GameView, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
