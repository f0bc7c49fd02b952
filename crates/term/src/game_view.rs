//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH, PALETTE_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Foreground colors for tags 1..=7: cyan, yellow, magenta, blue, green, red, white.
pub const PALETTE: [Rgb; PALETTE_SIZE as usize] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(235, 235, 235),
];

const WELL_BG: Rgb = Rgb::new(20, 20, 28);
const BORDER: CellStyle = CellStyle::fg(Rgb::new(80, 220, 220)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

pub fn color_of(tag: ColorTag) -> Rgb {
    PALETTE[tag.index()]
}

/// Draws the well, the active piece, the score panel and the game-over overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// The well is anchored at the top-left corner, like the classic curses
    /// layout; the panel sits to its right when there is room.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size();
        self.draw_border(fb, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.cell_at(x, y) {
                    Cell::Filled(tag) => self.draw_block(fb, x as u16, y as u16, tag),
                    Cell::Empty => self.draw_empty(fb, x as u16, y as u16),
                }
            }
        }

        self.draw_side_panel(fb, snap, frame_w + 3);

        if snap.game_over {
            self.draw_game_over(fb, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        fb.put_char(0, 0, '╔', BORDER);
        fb.put_char(w - 1, 0, '╗', BORDER);
        fb.put_char(0, h - 1, '╚', BORDER);
        fb.put_char(w - 1, h - 1, '╝', BORDER);
        for x in 1..w - 1 {
            fb.put_char(x, 0, '═', BORDER);
            fb.put_char(x, h - 1, '═', BORDER);
        }
        for y in 1..h - 1 {
            fb.put_char(0, y, '║', BORDER);
            fb.put_char(w - 1, y, '║', BORDER);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, tag: ColorTag) {
        let style = CellStyle::fg(color_of(tag)).on(WELL_BG);
        fb.fill_rect(1 + x * self.cell_w, 1 + y, self.cell_w, 1, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::fg(Rgb::new(70, 70, 80)).on(WELL_BG);
        let px = 1 + x * self.cell_w;
        fb.fill_rect(px, 1 + y, self.cell_w, 1, ' ', style);
        fb.put_char(px, 1 + y, '·', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16) {
        if panel_x.saturating_add(12) > fb.width() {
            return;
        }

        fb.put_str(panel_x, 2, "SCORE:", LABEL);
        fb.put_u32(panel_x + 7, 2, snap.score, VALUE);
        fb.put_str(panel_x, 3, "HIGH :", LABEL);
        fb.put_u32(panel_x + 7, 3, snap.high_score, VALUE);

        let dim = CellStyle::fg(Rgb::new(120, 120, 130));
        for (i, line) in ["A/D  move", "S    drop", "W    rotate", "Q    quit"]
            .iter()
            .enumerate()
        {
            fb.put_str(panel_x, 6 + i as u16, line, dim);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame_w: u16, frame_h: u16) {
        let mid = frame_h / 2;
        for (dy, text) in [(0u16, "GAME OVER"), (2, "Press Q to Exit")] {
            let x = frame_w.saturating_sub(text.chars().count() as u16) / 2;
            fb.put_str(x, mid - 1 + dy, text, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
        }
    }
}
