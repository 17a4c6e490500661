use blockfall::core::{FieldConfig, GameState};
use blockfall::term::{AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::{Intent, PieceKind};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::with_seed(FieldConfig::default(), 1);
    let snap = state.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_border_follows_configured_size() {
    let config = FieldConfig::new(8, 12, 1000).unwrap();
    let state = GameState::with_seed(config, 1);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(18, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(17, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut snap = GameState::with_seed(FieldConfig::default(), 1).snapshot();
    // Put a settled I block at bottom-left.
    snap.board[19 * 10] = Some(PieceKind::I);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let mut state = GameState::with_seed(FieldConfig::default(), 1);
    state.apply_intent(Intent::Start);
    let snap = state.snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 22));

    let active = snap.active.unwrap();
    let ghost_y = snap.ghost_y.unwrap();
    let (dx, dy) = active.shape.cells()[0];
    let col = 1 + ((active.x + dx) as u16) * 2;
    assert_eq!(fb.get(col, 1 + (active.y + dy) as u16).unwrap().ch, '█');
    assert_eq!(fb.get(col, 1 + (ghost_y + dy) as u16).unwrap().ch, '░');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::with_seed(FieldConfig::default(), 1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.hold = Some(PieceKind::T);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(70, 24));

    let all = all_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("HOLD"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("10x20"));
    assert!(all.contains("1000ms"));
}

#[test]
fn term_view_shows_coach_line() {
    let gs = GameState::with_seed(FieldConfig::default(), 1);
    let fb = GameView::default().render_with_coach(
        &gs.snapshot(),
        Some("Keep stacking, the coach is warming up."),
        Viewport::new(80, 26),
    );
    assert!(all_text(&fb).contains("Keep stacking"));
}
