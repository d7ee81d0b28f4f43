//! Integration tests for the game state machine

use grid_tetris::core::{calculate_line_score, ActivePiece, GameConfig, GameState, GameStatus, Tetromino};
use grid_tetris::types::{
    Color, GameAction, TetrominoKind, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, INITIAL_SPEED,
    PIECES_PER_LEVEL,
};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(GameConfig::seeded(seed));
    state.start();
    state
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(GameConfig::seeded(12345));
    assert_eq!(state.status(), GameStatus::Spawning);
    assert!(state.active().is_none());

    state.start();
    assert_eq!(state.status(), GameStatus::Falling);
    assert!(state.running());
    assert!(state.active().is_some());
}

#[test]
fn test_same_seed_same_game() {
    let mut a = started(777);
    let mut b = started(777);
    for i in 0..3000 {
        if i % 7 == 0 {
            a.apply_action(GameAction::MoveLeft);
            b.apply_action(GameAction::MoveLeft);
        }
        if i % 11 == 0 {
            a.apply_action(GameAction::RotateCw);
            b.apply_action(GameAction::RotateCw);
        }
        a.tick();
        b.tick();
    }
    assert_eq!(a.snapshot(), b.snapshot());
    assert!(a.pieces() > 0);
}

#[test]
fn test_spawn_overlap_ends_game_without_touching_grid() {
    let mut state = started(3);
    let field = state.field_mut();
    field.clear();
    // Block the spawn area: T at spawn covers columns 5..=6 on rows 0..=2.
    for row in 0..3 {
        field.set(6, row, Some(Color::Green));
    }
    let grid_before = state.field().clone();

    assert!(!state.spawn(Tetromino::spawn(TetrominoKind::T)));
    assert!(!state.running());
    assert_eq!(state.field(), &grid_before);
    assert_eq!(state.active().unwrap().color, Color::FAILURE);

    // Nothing moves after game over.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.tick());
    assert_eq!(state.field(), &grid_before);
}

#[test]
fn test_drop_then_gravity_commits_matrix_cells() {
    let mut state = started(21);
    state.spawn(Tetromino::spawn(TetrominoKind::S));

    while state.apply_action(GameAction::MoveDown) {}
    let landed: ActivePiece = *state.active().unwrap();
    assert_eq!(state.field().filled_count(), 0);

    state.gravity();

    let field = state.field();
    let mut expected = Vec::new();
    for (row, col) in landed.shape.cells() {
        let x = landed.x + col as i32 * CELL_SIZE;
        let y = landed.y + row as i32 * CELL_SIZE;
        expected.push(field.cell_at_pixel(x, y).unwrap());
    }
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            let want = expected.contains(&(col, row)).then_some(landed.color);
            assert_eq!(field.get(col, row), Some(want), "cell ({}, {})", col, row);
        }
    }
    assert_eq!(state.pieces(), 1);
}

/// Fill the bottom `n` rows except column 0 and drop a vertical I into the gap.
fn clear_rows(state: &mut GameState, n: usize) -> u32 {
    let bottom = GRID_HEIGHT - 1;
    let field = state.field_mut();
    field.clear();
    for row in bottom + 1 - n..=bottom {
        for col in 1..GRID_WIDTH {
            field.set(col, row, Some(Color::Orange));
        }
    }

    state.spawn(Tetromino::spawn(TetrominoKind::I));
    // Spawn column is 4 and the I's blocks are in matrix column 2: six steps left.
    for _ in 0..6 {
        assert!(state.apply_action(GameAction::MoveLeft));
    }
    assert!(!state.apply_action(GameAction::MoveLeft));
    while state.apply_action(GameAction::MoveDown) {}

    let before = state.score();
    state.gravity();
    let event = state.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, n);
    state.score() - before
}

#[test]
fn test_scores_at_level_one() {
    for (rows, points) in [(1, 40), (2, 100), (3, 300), (4, 1200)] {
        let mut state = started(8);
        assert_eq!(state.level(), 1);
        assert_eq!(clear_rows(&mut state, rows), points);
        assert_eq!(state.lines(), rows as u32);
    }
}

#[test]
fn test_scores_at_level_two() {
    for (rows, points) in [(1, 80), (2, 200), (3, 600), (4, 2400)] {
        let mut state = started(8);
        for _ in 0..PIECES_PER_LEVEL {
            state.field_mut().clear();
            while state.apply_action(GameAction::MoveDown) {}
            state.gravity();
        }
        assert_eq!(state.level(), 2);
        assert_eq!(clear_rows(&mut state, rows), points);
        assert_eq!(points, calculate_line_score(rows, 2));
    }
}

#[test]
fn test_gravity_timing_follows_speed() {
    let mut state = started(5);
    let y = state.active().unwrap().y;
    let mut fired = 0;
    for _ in 0..INITIAL_SPEED * 3 {
        if state.tick() {
            fired += 1;
        }
    }
    assert_eq!(fired, 3);
    assert_eq!(state.active().unwrap().y, y + 3 * CELL_SIZE);
}

#[test]
fn test_restart_resets_everything() {
    let mut state = started(5);
    state.field_mut().fill_row(GRID_HEIGHT - 1, Color::Blue);
    for _ in 0..200 {
        state.tick();
    }

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.score(), 0);
    assert_eq!(state.pieces(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.field().filled_count(), 0);
    assert_eq!(state.status(), GameStatus::Falling);
}
