//! Scoring module - classic line rewards and the gravity/level curve
//!
//! Levels are 1-based and derived from the gravity interval:
//! `level = (initial_speed - speed) / SPEED_STEP + 1`.

use crate::types::{LINE_SCORES, MIN_SPEED, SPEED_STEP};

/// Points for clearing `rows` rows in one commit at `level`.
///
/// ```
/// use grid_tetris_core::calculate_line_score;
///
/// assert_eq!(calculate_line_score(1, 1), 40);
/// assert_eq!(calculate_line_score(4, 2), 2400);
/// ```
pub fn calculate_line_score(rows: usize, level: u32) -> u32 {
    match LINE_SCORES.get(rows) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level implied by the current gravity interval
pub fn level_for_speed(initial_speed: u32, speed: u32) -> u32 {
    initial_speed.saturating_sub(speed) / SPEED_STEP + 1
}

/// Gravity interval after one level-up, floored at [`MIN_SPEED`]
pub fn next_speed(speed: u32) -> u32 {
    speed.saturating_sub(SPEED_STEP).max(MIN_SPEED)
}
