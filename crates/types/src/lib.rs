//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! The well is a single fixed size:
//!
//! - **Width**: 14 columns (indexed 0-13)
//! - **Height**: 26 rows (indexed 0-25)
//!
//! Pieces spawn horizontally centered on row 0. Rows above the board (negative
//! `y`) are reachable by a piece but never stored.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host tick cadence (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 555 | Game-time between automatic one-row falls |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Cell, ColorTag, GameCommand, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert!(GameCommand::ALL.contains(&GameCommand::RotateCw));
//!
//! let tag = ColorTag::new(3).unwrap();
//! assert!(Cell::Filled(tag).is_filled());
//!
//! assert_eq!(BOARD_WIDTH, 14);
//! assert_eq!(BOARD_HEIGHT, 26);
//! ```

/// Board width in cells (14 columns)
pub const BOARD_WIDTH: u8 = 14;

/// Board height in cells (26 rows)
pub const BOARD_HEIGHT: u8 = 26;

/// Host tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default game-time between automatic one-row falls
pub const FALL_INTERVAL_MS: u32 = 555;

/// Flat bonus awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Number of distinct color tags (tags are 1..=PALETTE_SIZE)
pub const PALETTE_SIZE: u8 = 7;


/// The seven tetromino piece kinds
///
/// Kinds only select geometry. A piece's color is drawn separately, so an `I`
/// may be any color in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Color identifier for a filled cell, always in `1..=PALETTE_SIZE`
///
/// The tag carries no meaning beyond "which palette entry to draw with".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorTag(u8);

impl ColorTag {
    /// Build a tag, rejecting 0 and anything past the palette.
    pub const fn new(tag: u8) -> Option<Self> {
        if tag >= 1 && tag <= PALETTE_SIZE {
            Some(Self(tag))
        } else {
            None
        }
    }

    /// Build a tag from a zero-based palette index, wrapping into range.
    pub const fn from_index(index: u8) -> Self {
        Self(index % PALETTE_SIZE + 1)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based palette index.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(ColorTag),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub const fn tag(self) -> Option<ColorTag> {
        match self {
            Cell::Empty => None,
            Cell::Filled(tag) => Some(tag),
        }
    }
}

/// Logical commands accepted by the engine, at most one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    Quit,
}

impl GameCommand {
    pub const ALL: [GameCommand; 5] = [
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::RotateCw,
        GameCommand::Quit,
    ];
}
