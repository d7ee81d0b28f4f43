//! Rotation engine - in-place quarter turns of a square occupancy matrix
//!
//! The transforms are fixed because they define how pieces look on screen:
//!
//! - 90°: transpose, then reverse each row
//! - 180°: reverse each row, then reverse the row order
//! - 270°: reverse each row, then transpose
//!
//! Shapes facing [`Direction::None`] are never touched.

use crate::tetromino::Tetromino;
use crate::types::{Direction, Rotation, MATRIX_SIZE};

/// Row-major occupancy matrix (`matrix[row][col]`)
pub type Matrix = [[bool; MATRIX_SIZE]; MATRIX_SIZE];

/// Swap the matrix across its main diagonal
fn transpose(matrix: &mut Matrix) {
    for y in 0..MATRIX_SIZE {
        for x in (y + 1)..MATRIX_SIZE {
            let tmp = matrix[y][x];
            matrix[y][x] = matrix[x][y];
            matrix[x][y] = tmp;
        }
    }
}

/// Mirror every row left-to-right
fn reverse_rows(matrix: &mut Matrix) {
    for row in matrix.iter_mut() {
        row.reverse();
    }
}

/// Mirror the row order top-to-bottom
fn reverse_cols(matrix: &mut Matrix) {
    matrix.reverse();
}

/// Rotate a bare matrix clockwise by `rotation`.
pub fn rotate_matrix(matrix: &mut Matrix, rotation: Rotation) {
    match rotation {
        Rotation::Ninety => {
            transpose(matrix);
            reverse_rows(matrix);
        }
        Rotation::OneEighty => {
            reverse_rows(matrix);
            reverse_cols(matrix);
        }
        Rotation::TwoSeventy => {
            reverse_rows(matrix);
            transpose(matrix);
        }
    }
}

/// Rotate a tetromino in place and track its facing.
///
/// No-op for unrotatable shapes. Returns whether anything changed.
pub fn rotate(tetromino: &mut Tetromino, rotation: Rotation) -> bool {
    if tetromino.direction == Direction::None {
        return false;
    }

    rotate_matrix(&mut tetromino.matrix, rotation);
    tetromino.direction = tetromino.direction.turned(rotation);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: Matrix = [
        [false, true, false, false],
        [false, true, false, false],
        [false, true, true, false],
        [false, false, false, false],
    ];

    #[test]
    fn ninety_turns_clockwise() {
        let mut m = L;
        rotate_matrix(&mut m, Rotation::Ninety);
        assert_eq!(
            m,
            [
                [false, false, false, false],
                [false, true, true, true],
                [false, true, false, false],
                [false, false, false, false],
            ]
        );
    }

    #[test]
    fn one_eighty_flips_both_axes() {
        let mut m = L;
        rotate_matrix(&mut m, Rotation::OneEighty);
        assert_eq!(
            m,
            [
                [false, false, false, false],
                [false, true, true, false],
                [false, false, true, false],
                [false, false, true, false],
            ]
        );
    }

    #[test]
    fn two_seventy_matches_three_quarter_turns() {
        let mut once = L;
        rotate_matrix(&mut once, Rotation::TwoSeventy);

        let mut thrice = L;
        for _ in 0..3 {
            rotate_matrix(&mut thrice, Rotation::Ninety);
        }
        assert_eq!(once, thrice);
    }

    #[test]
    fn inverse_rotation_restores_matrix() {
        for rotation in [Rotation::Ninety, Rotation::OneEighty, Rotation::TwoSeventy] {
            let mut m = L;
            rotate_matrix(&mut m, rotation);
            rotate_matrix(&mut m, rotation.inverse());
            assert_eq!(m, L, "{:?} then inverse", rotation);
        }
    }
}
