//! Tetromino catalog - the seven shapes in their spawn orientation
//!
//! The catalog is immutable. Callers get their own copy through
//! [`Tetromino::spawn`] and rotate that copy, so the templates can never be
//! aliased by an active piece.

use crate::rotation::{self, Matrix};
use crate::types::{Direction, Rotation, TetrominoKind, MATRIX_SIZE};

/// A shape matrix plus the direction it currently faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: TetrominoKind,
    pub matrix: Matrix,
    pub direction: Direction,
}

const X: bool = true;
const O: bool = false;

static CATALOG: [Tetromino; 7] = [
    Tetromino {
        kind: TetrominoKind::I,
        matrix: [[O, O, X, O], [O, O, X, O], [O, O, X, O], [O, O, X, O]],
        direction: Direction::Up,
    },
    Tetromino {
        kind: TetrominoKind::O,
        matrix: [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
        direction: Direction::None,
    },
    Tetromino {
        kind: TetrominoKind::T,
        matrix: [[O, O, X, O], [O, X, X, O], [O, O, X, O], [O, O, O, O]],
        direction: Direction::Up,
    },
    Tetromino {
        kind: TetrominoKind::S,
        matrix: [[O, X, O, O], [O, X, X, O], [O, O, X, O], [O, O, O, O]],
        direction: Direction::Up,
    },
    Tetromino {
        kind: TetrominoKind::Z,
        matrix: [[O, O, X, O], [O, X, X, O], [O, X, O, O], [O, O, O, O]],
        direction: Direction::Up,
    },
    Tetromino {
        kind: TetrominoKind::J,
        matrix: [[O, O, X, O], [O, O, X, O], [O, X, X, O], [O, O, O, O]],
        direction: Direction::Up,
    },
    Tetromino {
        kind: TetrominoKind::L,
        matrix: [[O, X, O, O], [O, X, O, O], [O, X, X, O], [O, O, O, O]],
        direction: Direction::Up,
    },
];

/// Catalog entry for `kind`
pub fn template(kind: TetrominoKind) -> &'static Tetromino {
    let index = match kind {
        TetrominoKind::I => 0,
        TetrominoKind::O => 1,
        TetrominoKind::T => 2,
        TetrominoKind::S => 3,
        TetrominoKind::Z => 4,
        TetrominoKind::J => 5,
        TetrominoKind::L => 6,
    };
    &CATALOG[index]
}

impl Tetromino {
    /// Fresh working copy of a catalog shape in spawn orientation
    pub fn spawn(kind: TetrominoKind) -> Self {
        *template(kind)
    }

    /// Rotate clockwise in place (no-op for unrotatable shapes).
    pub fn rotate(&mut self, rotation: Rotation) -> bool {
        rotation::rotate(self, rotation)
    }

    pub fn is_rotatable(&self) -> bool {
        self.direction.is_rotatable()
    }

    /// Occupied `(row, col)` positions inside the matrix, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..MATRIX_SIZE).flat_map(move |row| {
            (0..MATRIX_SIZE)
                .filter(move |&col| self.matrix[row][col])
                .map(move |col| (row, col))
        })
    }
}
