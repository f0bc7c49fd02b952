//! Score store - where the persisted high score lives
//!
//! The game loads once at construction and saves whenever the score passes the
//! stored high score. Both calls are best-effort: a failed load counts as 0 and
//! a failed save is logged and forgotten.

use std::io;

/// Persistence boundary for the high score
pub trait ScoreStore {
    /// Stored high score, `Ok(None)` if nothing has been saved yet.
    fn load(&mut self) -> io::Result<Option<u32>>;

    /// Replace the stored high score.
    fn save(&mut self, high_score: u32) -> io::Result<()>;
}

/// In-memory store, for tests and headless runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    value: Option<u32>,
    saves: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Number of successful `save` calls so far
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> io::Result<Option<u32>> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: u32) -> io::Result<()> {
        self.value = Some(high_score);
        self.saves += 1;
        Ok(())
    }
}

/// Stores nothing and reports nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScoreStore;

impl ScoreStore for NullScoreStore {
    fn load(&mut self) -> io::Result<Option<u32>> {
        Ok(None)
    }

    fn save(&mut self, _high_score: u32) -> io::Result<()> {
        Ok(())
    }
}
