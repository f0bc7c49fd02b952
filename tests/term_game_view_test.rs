use tui_blocks::core::{GameState, MemoryScoreStore, Piece, ScriptedPieces};
use tui_blocks::term::{color_of, GameView, Viewport};
use tui_blocks::types::{ColorTag, PieceKind};

fn t_game(high: u32) -> GameState<MemoryScoreStore> {
    let tag = ColorTag::new(5).unwrap();
    GameState::with_pieces(
        ScriptedPieces::new(vec![Piece::new(PieceKind::T, tag)]),
        MemoryScoreStore::with_value(high),
    )
}

fn line(text: &str, y: usize) -> String {
    text.lines().nth(y).unwrap_or_default().to_string()
}

#[test]
fn border_wraps_the_well() {
    let view = GameView::default();
    let fb = view.render(&t_game(0).snapshot(), Viewport::new(60, 30));
    let (w, h) = view.frame_size();

    assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '╗');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '╚');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '╝');
    assert_eq!(fb.get(0, 5).unwrap().ch, '║');
    assert_eq!(fb.get(4, 0).unwrap().ch, '═');
}

#[test]
fn active_piece_is_drawn_two_columns_wide() {
    let fb = GameView::default().render(&t_game(0).snapshot(), Viewport::new(60, 30));

    // T spawns at x = 6; its top cell is board (7, 0).
    let left = fb.get(1 + 7 * 2, 1).unwrap();
    let right = fb.get(2 + 7 * 2, 1).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, color_of(ColorTag::new(5).unwrap()));

    // Board (6, 0) is empty.
    assert_eq!(fb.get(1 + 6 * 2, 1).unwrap().ch, '·');
}

#[test]
fn side_panel_shows_scores() {
    let fb = GameView::default().render(&t_game(4200).snapshot(), Viewport::new(60, 30));
    let text = fb.to_text();

    assert!(line(&text, 2).contains("SCORE: 0"));
    assert!(line(&text, 3).contains("HIGH : 4200"));
}

#[test]
fn narrow_viewport_skips_panel() {
    let view = GameView::default();
    let (w, h) = view.frame_size();
    let fb = view.render(&t_game(4200).snapshot(), Viewport::new(w, h));
    assert!(!fb.to_text().contains("SCORE"));
}

#[test]
fn game_over_overlay() {
    let mut game = t_game(0);
    while !game.game_over() {
        let interval = game.fall_interval();
        game.tick(interval, None);
    }

    let snap = game.snapshot();
    let text = GameView::default().render(&snap, Viewport::new(60, 30)).to_text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Press Q to Exit"));
}
