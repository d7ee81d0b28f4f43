use crate::game_state::GameStatus;
use crate::piece::ActivePiece;
use crate::rotation::Matrix;
use crate::types::{Color, CELL_SIZE, FIELD_ORIGIN, MATRIX_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub matrix: Matrix,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            matrix: value.shape.matrix,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Pixel positions of each occupied block
    pub fn block_positions(&self, cell_size: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..MATRIX_SIZE).flat_map(move |row| {
            (0..MATRIX_SIZE)
                .filter(move |&col| self.matrix[row][col])
                .map(move |col| (self.x + col as i32 * cell_size, self.y + row as i32 * cell_size))
        })
    }
}

/// Render-ready copy of a game, refreshed in place every frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Cell ids, row-major (0 = empty)
    pub board: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Pixel position of the grid's top-left corner
    pub origin: (i32, i32),
    pub cell_size: i32,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub running: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
}

impl GameSnapshot {
    /// Color at (col, row), if occupied
    pub fn cell(&self, col: usize, row: usize) -> Option<Color> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.board
            .get(row * self.width + col)
            .copied()
            .and_then(Color::from_id)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Vec::new(),
            width: 0,
            height: 0,
            origin: FIELD_ORIGIN,
            cell_size: CELL_SIZE,
            active: None,
            status: GameStatus::Spawning,
            running: true,
            score: 0,
            level: 1,
            lines: 0,
            pieces: 0,
        }
    }
}
