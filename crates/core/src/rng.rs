//! RNG module - uniform random piece generation
//!
//! Each spawn draws a kind uniformly from the seven catalog shapes and,
//! independently, a color uniformly from the palette. There is no bag or
//! history: the same kind may come up any number of times in a row.
//!
//! Also provides a simple LCG so a given seed always replays the same game.

use crate::pieces::Piece;
use crate::types::{ColorTag, PieceKind, PALETTE_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Where new pieces come from
///
/// The game asks for exactly one piece per spawn.
pub trait PieceSource {
    fn next_piece(&mut self) -> Piece;
}

/// Uniformly random kinds and colors from a seeded [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a kind and a color, each uniform and independent.
    pub fn random_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let color = ColorTag::from_index(self.rng.next_range(PALETTE_SIZE as u32) as u8);
        Piece::new(kind, color)
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> Piece {
        self.random_piece()
    }
}

/// Replays a fixed cycle of pieces, for deterministic setups
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    script: Vec<Piece>,
    cursor: usize,
}

impl ScriptedPieces {
    /// Cycle through `script` forever.
    ///
    /// An empty script falls back to a single O piece with the first color.
    pub fn new(script: Vec<Piece>) -> Self {
        let script = if script.is_empty() {
            vec![Piece::new(PieceKind::O, ColorTag::from_index(0))]
        } else {
            script
        };
        Self { script, cursor: 0 }
    }

    /// Every piece is `kind` in color `color`.
    pub fn repeat(kind: PieceKind, color: ColorTag) -> Self {
        Self::new(vec![Piece::new(kind, color)])
    }

    /// Cycle through `kinds`, all drawn in `color`.
    pub fn kinds(kinds: &[PieceKind], color: ColorTag) -> Self {
        Self::new(kinds.iter().map(|&k| Piece::new(k, color)).collect())
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> Piece {
        let piece = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_pieces_cover_catalog_and_palette() {
        let mut pieces = RandomPieces::new(2024);
        let mut kinds_seen = [false; 7];
        let mut colors_seen = [false; PALETTE_SIZE as usize];

        for _ in 0..500 {
            let p = pieces.random_piece();
            let k = PieceKind::ALL.iter().position(|&k| k == p.kind).unwrap();
            kinds_seen[k] = true;
            colors_seen[p.color.index()] = true;
        }

        assert!(kinds_seen.iter().all(|&s| s), "kinds: {:?}", kinds_seen);
        assert!(colors_seen.iter().all(|&s| s), "colors: {:?}", colors_seen);
    }

    #[test]
    fn test_random_pieces_same_seed_same_sequence() {
        let mut a = RandomPieces::new(7);
        let mut b = RandomPieces::new(7);
        for _ in 0..50 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_scripted_pieces_cycle() {
        let color = ColorTag::new(2).unwrap();
        let mut s = ScriptedPieces::kinds(&[PieceKind::I, PieceKind::O], color);
        assert_eq!(s.next_piece().kind, PieceKind::I);
        assert_eq!(s.next_piece().kind, PieceKind::O);
        assert_eq!(s.next_piece().kind, PieceKind::I);
    }

    #[test]
    fn test_scripted_pieces_empty_script() {
        let mut s = ScriptedPieces::new(Vec::new());
        assert_eq!(s.next_piece().kind, PieceKind::O);
    }
}
