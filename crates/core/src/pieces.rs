//! Pieces module - tetromino occupancy matrices and clockwise rotation
//!
//! Every piece is a small occupancy matrix. Rotation builds a new matrix by
//! reversing the row order and then reading columns as rows; there is no
//! wall-kick search, so a rotation either fits in place or is discarded.

use crate::types::{ColorTag, PieceKind};

/// Largest matrix side any catalog shape can reach (the I piece, either way up)
pub const MAX_SHAPE_SIDE: usize = 4;

/// Occupancy matrix of a piece.
///
/// Cells outside `rows x cols` are always `false`, so derived equality is
/// occupancy equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for an empty, ragged, or oversized matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::pieces::Shape;
    ///
    /// let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert_eq!(t.cell_count(), 4);
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return None;
        }

        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (j, &v) in row.iter().enumerate() {
                bits[i][j] = v != 0;
            }
        }

        Some(Self {
            rows: height as u8,
            cols: width as u8,
            bits,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// Occupied cells as `(dx, dy)` offsets from the matrix's top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |i| {
            (0..self.cols as usize)
                .filter(move |&j| self.bits[i][j])
                .map(move |j| (j as i8, i as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

const fn shape(rows: u8, cols: u8, bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Shape {
    Shape { rows, cols, bits }
}

const X: bool = true;
const O: bool = false;

const I_SHAPE: Shape = shape(1, 4, [[X, X, X, X], [O; 4], [O; 4], [O; 4]]);
const O_SHAPE: Shape = shape(2, 2, [[X, X, O, O], [X, X, O, O], [O; 4], [O; 4]]);
const T_SHAPE: Shape = shape(2, 3, [[O, X, O, O], [X, X, X, O], [O; 4], [O; 4]]);
const J_SHAPE: Shape = shape(2, 3, [[X, O, O, O], [X, X, X, O], [O; 4], [O; 4]]);
const L_SHAPE: Shape = shape(2, 3, [[O, O, X, O], [X, X, X, O], [O; 4], [O; 4]]);
const S_SHAPE: Shape = shape(2, 3, [[O, X, X, O], [X, X, O, O], [O; 4], [O; 4]]);
const Z_SHAPE: Shape = shape(2, 3, [[X, X, O, O], [O, X, X, O], [O; 4], [O; 4]]);

/// Spawn-orientation matrix for a piece kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Rotate 90° clockwise: reverse the rows, then take columns as rows.
///
/// `new[i][j] = old[rows - 1 - j][i]`. Four rotations give back the input.
pub fn rotate(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];

    for (i, out_row) in bits.iter_mut().enumerate().take(cols) {
        for (j, out) in out_row.iter_mut().enumerate().take(rows) {
            *out = shape.bits[rows - 1 - j][i];
        }
    }

    Shape {
        rows: shape.cols,
        cols: shape.rows,
        bits,
    }
}

/// A piece instance: immutable geometry choice plus the color it keeps for life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: ColorTag,
}

impl Piece {
    /// A fresh piece in spawn orientation.
    pub fn new(kind: PieceKind, color: ColorTag) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            color,
        }
    }

    /// Same piece with a rotated matrix; the receiver is left untouched.
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate(&self.shape),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_matches_catalog() {
        assert_eq!(Shape::from_rows(&[&[1, 1, 1, 1]]), Some(I_SHAPE));
        assert_eq!(Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]), Some(S_SHAPE));
        assert_eq!(Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]), Some(Z_SHAPE));
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(Shape::from_rows(&[]), None);
        assert_eq!(Shape::from_rows(&[&[]]), None);
        assert_eq!(Shape::from_rows(&[&[1, 1], &[1]]), None);
        assert_eq!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]), None);
    }

    #[test]
    fn rotate_i_goes_vertical() {
        let v = rotate(&I_SHAPE);
        assert_eq!((v.rows(), v.cols()), (4, 1));
        assert_eq!(v.cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn rotate_t_points_right() {
        // 010      10
        // 111  ->  11
        //          10
        let r = rotate(&T_SHAPE);
        assert_eq!(r, Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]).unwrap());
    }

    #[test]
    fn piece_rotated_keeps_color() {
        let tag = ColorTag::new(4).unwrap();
        let p = Piece::new(PieceKind::L, tag);
        let r = p.rotated();
        assert_eq!(r.color, tag);
        assert_eq!(r.kind, PieceKind::L);
        assert_ne!(r.shape, p.shape);
    }
}
