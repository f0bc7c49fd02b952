use arrayvec::ArrayVec;

use crate::game_state::ActivePiece;
use crate::types::{Cell, ColorTag, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Most cells a catalog piece occupies
pub const PIECE_CELLS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: ColorTag,
    pub x: i8,
    pub y: i8,
    /// Absolute board coordinates `(x, y)` of every occupied cell.
    /// `y` is negative for cells still above the board.
    pub cells: ArrayVec<(i8, i8), PIECE_CELLS>,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.piece.kind,
            color: value.piece.color,
            x: value.x,
            y: value.y,
            cells: value.absolute_cells().collect(),
        }
    }
}

impl ActiveSnapshot {
    pub fn covers(&self, x: i8, y: i8) -> bool {
        self.cells.iter().any(|&(cx, cy)| cx == x && cy == y)
    }
}

/// Read-only view of one tick's state, handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Board cell with the active piece drawn over it.
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        if let Some(active) = &self.active {
            if active.covers(x, y) {
                return Cell::Filled(active.color);
            }
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return Cell::Empty;
        }
        self.board[y as usize][x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            high_score: 0,
            game_over: false,
        }
    }
}
