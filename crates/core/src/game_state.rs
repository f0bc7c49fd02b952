//! Game state module - manages the complete game state
//!
//! This module ties together the board, the piece source, and the score store.
//! It runs the spawn → fall → lock → clear → respawn cycle, applies player
//! commands, and detects game over when a fresh piece cannot be placed.
//!
//! The engine never reads a clock. The host measures time since the last fall
//! and passes it to [`GameState::tick`]; the returned [`TickReport`] says when
//! that measurement has to restart.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::store::{NullScoreStore, ScoreStore};
use crate::types::{GameCommand, BOARD_WIDTH, FALL_INTERVAL_MS, LINE_CLEAR_POINTS};

/// Falling piece plus the board position of its matrix's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place `piece` horizontally centered on the top row.
    pub fn spawn(piece: Piece) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (piece.shape.cols() / 2) as i8;
        Self { piece, x, y: 0 }
    }

    /// Check the piece against the board at its current position
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid(&self.piece.shape, self.x, self.y)
    }

    /// Occupied cells in absolute board coordinates
    pub fn absolute_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.piece
            .shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Where the state machine is in the spawn/fall/lock cycle.
///
/// `Locking`, `Clearing`, and `Spawning` only exist inside a fall step; between
/// calls the phase is `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

/// What one [`GameState::tick`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The fall step moved the piece down one row.
    pub fell: bool,
    /// The fall step was blocked and the piece was locked.
    pub locked: bool,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Set when this tick raised the high score.
    pub new_high_score: Option<u32>,
    /// The fall step ran; the host must restart its fall clock.
    pub fall_timer_reset: bool,
    /// The tick's command changed the piece.
    pub command_applied: bool,
    pub game_over: bool,
    pub quit: bool,
}

/// Complete game state
pub struct GameState<S: ScoreStore = NullScoreStore> {
    board: Board,
    active: ActivePiece,
    pieces: Box<dyn PieceSource>,
    store: S,
    score: u32,
    high_score: u32,
    lines: u32,
    /// Number of pieces spawned, including one that failed to fit.
    pieces_spawned: u32,
    fall_interval: Duration,
    phase: GamePhase,
    quit_requested: bool,
}

impl<S: ScoreStore> GameState<S> {
    /// Create a new game with uniformly random pieces from `seed`
    pub fn new(seed: u32, store: S) -> Self {
        Self::with_pieces(RandomPieces::new(seed), store)
    }

    /// Create a new game on an empty board
    pub fn with_pieces(pieces: impl PieceSource + 'static, store: S) -> Self {
        Self::with_board(Board::new(), pieces, store)
    }

    /// Create a new game on a prepared board.
    ///
    /// Loads the high score once and spawns the first piece; if that piece
    /// does not fit the game starts over.
    pub fn with_board(board: Board, pieces: impl PieceSource + 'static, mut store: S) -> Self {
        let high_score = match store.load() {
            Ok(Some(v)) => v,
            Ok(None) => 0,
            Err(e) => {
                warn!("high score unavailable, starting from 0: {}", e);
                0
            }
        };

        let mut pieces: Box<dyn PieceSource> = Box::new(pieces);
        let first = pieces.next_piece();

        let mut state = Self {
            board,
            active: ActivePiece::spawn(first),
            pieces,
            store,
            score: 0,
            high_score,
            lines: 0,
            pieces_spawned: 0,
            fall_interval: Duration::from_millis(FALL_INTERVAL_MS as u64),
            phase: GamePhase::Spawning,
            quit_requested: false,
        };
        state.place_spawned(state.active);
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Change the game-time between automatic falls.
    pub fn set_fall_interval(&mut self, interval: Duration) {
        self.fall_interval = interval;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }

        out.active = if self.game_over() {
            None
        } else {
            Some(ActiveSnapshot::from(self.active))
        };
        out.score = self.score;
        out.high_score = self.high_score;
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one host tick.
    ///
    /// Runs the fall step when `since_last_fall` has reached the fall
    /// interval, then applies `command` (if any). Only `Quit` is honored once
    /// the game is over.
    pub fn tick(&mut self, since_last_fall: Duration, command: Option<GameCommand>) -> TickReport {
        let mut report = TickReport::default();

        if !self.game_over() && since_last_fall >= self.fall_interval {
            self.fall_step(&mut report);
        }

        if let Some(command) = command {
            report.command_applied = self.apply_command(command);
        }

        report.game_over = self.game_over();
        report.quit = self.quit_requested;
        report
    }

    /// Apply a player command.
    ///
    /// Returns false when the command was ignored: a blocked move or rotation,
    /// or any command other than `Quit` after game over.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Quit => {
                self.quit_requested = true;
                true
            }
            _ if self.game_over() => false,
            GameCommand::MoveLeft => self.try_move(-1, 0),
            GameCommand::MoveRight => self.try_move(1, 0),
            GameCommand::SoftDrop => self.try_move(0, 1),
            GameCommand::RotateCw => self.try_rotate(),
        }
    }

    /// Check if the active piece can shift by (dx, dy)
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        self.board.is_valid(
            &self.active.piece.shape,
            self.active.x + dx,
            self.active.y + dy,
        )
    }

    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.can_move(dx, dy) {
            return false;
        }
        self.active.x += dx;
        self.active.y += dy;
        true
    }

    /// Rotate clockwise in place; no kicks, a blocked rotation is dropped.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = self.active.piece.rotated();
        if !self
            .board
            .is_valid(&rotated.shape, self.active.x, self.active.y)
        {
            return false;
        }
        self.active.piece = rotated;
        true
    }

    fn fall_step(&mut self, report: &mut TickReport) {
        report.fall_timer_reset = true;

        if self.try_move(0, 1) {
            report.fell = true;
            return;
        }

        self.lock_active(report);
        self.spawn_piece();
    }

    /// Transfer the active piece into the board, then clear and score rows.
    fn lock_active(&mut self, report: &mut TickReport) {
        self.phase = GamePhase::Locking;
        let ActivePiece { piece, x, y } = self.active;
        self.board.lock(&piece.shape, x, y, piece.color);
        report.locked = true;
        debug!("locked {:?} at ({}, {})", piece.kind, x, y);

        self.phase = GamePhase::Clearing;
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared == 0 {
            return;
        }

        let delta = cleared * LINE_CLEAR_POINTS;
        self.score = self.score.saturating_add(delta);
        self.lines += cleared;
        report.lines_cleared = cleared;
        report.score_delta = delta;
        debug!("cleared {} row(s), score {}", cleared, self.score);

        if self.score > self.high_score {
            self.high_score = self.score;
            report.new_high_score = Some(self.high_score);
            if let Err(e) = self.store.save(self.high_score) {
                warn!("failed to save high score {}: {}", self.high_score, e);
            }
        }
    }

    /// Draw the next piece and put it at the top; game over if it does not fit.
    fn spawn_piece(&mut self) -> bool {
        self.phase = GamePhase::Spawning;
        let candidate = ActivePiece::spawn(self.pieces.next_piece());
        self.place_spawned(candidate)
    }

    fn place_spawned(&mut self, candidate: ActivePiece) -> bool {
        self.active = candidate;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if candidate.is_valid(&self.board) {
            self.phase = GamePhase::Falling;
            debug!(
                "spawned {:?} at ({}, {})",
                candidate.piece.kind, candidate.x, candidate.y
            );
            true
        } else {
            self.phase = GamePhase::GameOver;
            info!(
                "game over after {} piece(s), score {}",
                self.pieces_spawned, self.score
            );
            false
        }
    }
}

impl GameState<NullScoreStore> {
    /// Random pieces from `seed`, no persisted high score
    pub fn seeded(seed: u32) -> Self {
        Self::new(seed, NullScoreStore)
    }
}

impl Default for GameState<NullScoreStore> {
    fn default() -> Self {
        Self::seeded(1)
    }
}

impl<S: ScoreStore + fmt::Debug> fmt::Debug for GameState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("active", &self.active)
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("lines", &self.lines)
            .field("phase", &self.phase)
            .field("fall_interval", &self.fall_interval)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
