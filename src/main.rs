//! Terminal runner (default binary).
//!
//! Fixed-cadence loop: wait for one key press until the next tick, tick the
//! engine with the fall clock's reading, draw the snapshot.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};

use tui_blocks::adapter::{init_log, AppConfig, FallClock, FileScoreStore};
use tui_blocks::core::{GameSnapshot, GameState, ScoreStore};
use tui_blocks::input::poll_command;
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        init_log(config.log_level, path)?;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("starting, seed {}, high score file {}", seed, config.highscore_path.display());

    let game = GameState::new(seed, FileScoreStore::new(&config.highscore_path));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {}", e);
    }
    result
}

fn run<S: ScoreStore>(term: &mut TerminalRenderer, mut game: GameState<S>) -> Result<()> {
    let view = GameView::default();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut clock = FallClock::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let tick_start = Instant::now();
        let command = poll_command(tick)?;

        let report = game.tick(clock.elapsed(), command);
        if report.fall_timer_reset {
            clock.reset();
        }
        if let Some(high) = report.new_high_score {
            info!("new high score {}", high);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if report.quit {
            info!("quit with score {}", game.score());
            return Ok(());
        }

        // A key press ends the poll early; sleep off the rest of the tick.
        if let Some(rest) = tick.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
