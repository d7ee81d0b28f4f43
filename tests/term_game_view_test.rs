//! Rendering a live game through the framebuffer canvas

use grid_tetris::core::{GameConfig, GameSnapshot, GameState, Tetromino};
use grid_tetris::term::{
    color_rgb, encode_full_into, palette, Canvas, CellStyle, FrameCanvas, GameView, Image,
    MAX_IMAGES,
};
use grid_tetris::types::{Color, GameAction, TetrominoKind};

fn screen(canvas: &FrameCanvas) -> String {
    let fb = canvas.framebuffer();
    (0..fb.height() as i32)
        .map(|row| fb.row_text(row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snapshot_refresh_reuses_buffers() {
    let mut state = GameState::new(GameConfig::seeded(2));
    state.start();
    let mut canvas = FrameCanvas::new(64, 22);
    let view = GameView::new(&mut canvas).unwrap();
    let mut snap = GameSnapshot::default();

    for _ in 0..120 {
        state.tick();
        state.snapshot_into(&mut snap);
        view.render(&mut canvas, &snap).unwrap();
    }
    assert_eq!(snap, state.snapshot());

    let mut bytes = Vec::new();
    encode_full_into(canvas.framebuffer(), &mut bytes).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn test_score_panel_updates_after_clear() {
    let mut state = GameState::new(GameConfig::seeded(2));
    state.start();

    let field = state.field_mut();
    field.clear();
    let bottom = field.height() - 1;
    for col in 1..field.width() {
        field.set(col, bottom, Some(Color::Orange));
    }
    state.spawn(Tetromino::spawn(TetrominoKind::I));
    while state.apply_action(GameAction::MoveLeft) {}
    while state.apply_action(GameAction::MoveDown) {}
    state.gravity();
    assert_eq!(state.score(), 40);

    let mut canvas = FrameCanvas::new(64, 22);
    let view = GameView::new(&mut canvas).unwrap();
    view.render(&mut canvas, &state.snapshot()).unwrap();

    let text = screen(&canvas);
    let score_line = text.lines().find(|l| l.contains("SCORE")).unwrap();
    assert!(score_line.trim_end().ends_with("40"), "{:?}", score_line);
    let lines_line = text.lines().find(|l| l.contains("LINES")).unwrap();
    assert!(lines_line.trim_end().ends_with('1'), "{:?}", lines_line);
}

#[test]
fn test_failed_spawn_is_drawn_in_failure_color() {
    let mut state = GameState::new(GameConfig::seeded(2));
    state.start();
    state.field_mut().fill_row(1, Color::Blue);
    state.spawn(Tetromino::spawn(TetrominoKind::I));
    assert!(!state.running());

    let mut canvas = FrameCanvas::new(64, 22);
    let view = GameView::new(&mut canvas).unwrap();
    view.render(&mut canvas, &state.snapshot()).unwrap();

    // The I's top block sits in grid column 6, row 0: terminal column 14, row 1.
    let cell = canvas.framebuffer().get(14, 1).unwrap();
    assert_eq!(cell.style.bg, color_rgb(Color::FAILURE));
    assert!(screen(&canvas).contains("GAME OVER"));
}

#[test]
fn test_view_counts_against_image_capacity() {
    let mut canvas = FrameCanvas::new(10, 2);
    canvas.clear(palette::BACKGROUND);
    GameView::new(&mut canvas).unwrap();
    for _ in 1..MAX_IMAGES {
        canvas
            .load_image(Image::from_rows(&["x"], CellStyle::default()))
            .unwrap();
    }
    assert!(GameView::new(&mut canvas).is_err());
}
