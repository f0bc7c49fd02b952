//! Board module - manages the game grid
//!
//! The board is a 14x26 grid where each cell is empty or holds a color tag.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..13 (left to right), y ranges 0..25 (top to bottom).
//!
//! Placement checks bound columns on both sides and rows only at the bottom:
//! a piece may hang above row 0, which is how pieces spawn and rotate near the top.

use arrayvec::ArrayVec;
use log::debug;

use crate::pieces::Shape;
use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of rows, as a capacity for row lists
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Rows removed by one [`Board::clear_full_rows`] call, top to bottom
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 14 columns x 26 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `shape` fits with its top-left corner at (x, y).
    ///
    /// Every occupied cell must land in a column within `0..WIDTH`, in a row
    /// below `HEIGHT`, and on an empty board cell. Rows above the board
    /// (`y < 0`) are accepted and not checked against anything.
    pub fn is_valid(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().all(|(dx, dy)| {
            let col = x as i16 + dx as i16;
            let row = y as i16 + dy as i16;
            if col < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
                return false;
            }
            if row < 0 {
                return true;
            }
            self.cells[(row as usize) * (BOARD_WIDTH as usize) + (col as usize)].is_empty()
        })
    }

    /// Write `color` into every in-bounds cell covered by `shape` at (x, y).
    ///
    /// No validity check: callers lock only placements `is_valid` accepted.
    /// Cells still above the board are dropped.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8, color: ColorTag) {
        for (dx, dy) in shape.cells() {
            let (px, py) = (x.saturating_add(dx), y.saturating_add(dy));
            if !self.set(px, py, Cell::Filled(color)) {
                debug!("lock: dropped off-board cell ({}, {})", px, py);
            }
        }
    }

    /// Check if a row has no empty cells
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_filled())
    }

    /// Remove every full row and refill the top with empty rows.
    ///
    /// Surviving rows keep their relative order. Returns the removed row
    /// indices (as they were before compaction), top to bottom.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Bottom-up two-pointer pass: surviving rows slide down over full ones.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);

        cleared.reverse();
        cleared
    }

    /// Row-major view of the board
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Fill row `y` completely, leaving the listed columns empty.
    pub fn fill_row_except(&mut self, y: i8, holes: &[i8], color: ColorTag) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) {
                Cell::Empty
            } else {
                Cell::Filled(color)
            };
            self.set(x, y, cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{shape_of, Shape};
    use crate::types::PieceKind;

    fn tag(n: u8) -> ColorTag {
        ColorTag::new(n).unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(13, 0), Some(13));
        assert_eq!(Board::index(0, 1), Some(14));
        assert_eq!(Board::index(13, 25), Some(363));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(14, 0), None);
        assert_eq!(Board::index(0, 26), None);
    }

    #[test]
    fn test_is_valid_allows_rows_above_board() {
        let board = Board::new();
        let i = shape_of(PieceKind::I);
        let vertical = crate::pieces::rotate(&i);

        assert!(board.is_valid(&vertical, 0, -3));
        assert!(board.is_valid(&vertical, 0, -100));
        // Columns are still hard-bounded while above the board.
        assert!(!board.is_valid(&vertical, -1, -3));
        assert!(!board.is_valid(&vertical, 14, -3));
    }

    #[test]
    fn test_is_valid_ignores_empty_matrix_cells() {
        let mut board = Board::new();
        // T's top-left corner is empty; an occupied cell there does not collide.
        board.set(0, 0, Cell::Filled(tag(1)));
        assert!(board.is_valid(&shape_of(PieceKind::T), 0, 0));
        board.set(1, 0, Cell::Filled(tag(1)));
        assert!(!board.is_valid(&shape_of(PieceKind::T), 0, 0));
    }

    #[test]
    fn test_lock_skips_cells_above_board() {
        let mut board = Board::new();
        let square = Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap();
        board.lock(&square, 4, -1, tag(3));

        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.get(4, 0), Some(Cell::Filled(tag(3))));
        assert_eq!(board.get(5, 0), Some(Cell::Filled(tag(3))));
    }

    #[test]
    fn test_clear_full_rows_refills_top() {
        let mut board = Board::new();
        board.fill_row_except(25, &[], tag(1));
        board.fill_row_except(0, &[], tag(2));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0, 25]);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_clear_full_rows_whole_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            board.fill_row_except(y, &[], tag(6));
        }
        assert_eq!(board.clear_full_rows().len(), BOARD_ROWS);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_rows_view() {
        let board = Board::new();
        assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
        assert!(board.rows().all(|r| r.len() == BOARD_WIDTH as usize));
    }
}
