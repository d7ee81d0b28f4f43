//! Active piece controller
//!
//! Holds the falling piece's working matrix, color and pixel anchor, and
//! applies move/rotate commands only when the collision check accepts the
//! result. Rejected commands are simply dropped: bumping into a wall, the
//! floor or the stack is not an error.

use crate::collision::is_position_valid;
use crate::playfield::Playfield;
use crate::tetromino::Tetromino;
use crate::types::{Color, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Tetromino,
    pub color: Color,
    /// Pixel x of the matrix's top-left corner
    pub x: i32,
    /// Pixel y of the matrix's top-left corner
    pub y: i32,
}

impl ActivePiece {
    /// Place a shape at the playfield's spawn position, in its own color
    pub fn spawn(shape: Tetromino, field: &Playfield) -> Self {
        let (x, y) = field.spawn_position();
        Self {
            shape,
            color: shape.kind.color(),
            x,
            y,
        }
    }

    /// Pixel positions of each occupied block
    pub fn block_positions(&self, cell_size: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(row, col)| (self.x + col as i32 * cell_size, self.y + row as i32 * cell_size))
    }

    /// Check whether the piece fits where it currently is
    pub fn is_valid(&self, field: &Playfield) -> bool {
        is_position_valid(&self.shape.matrix, self.x, self.y, field)
    }

    /// Check whether the piece would fit `dx`/`dy` cells away
    pub fn can_move(&self, dx: i32, dy: i32, field: &Playfield) -> bool {
        let cell = field.cell_size();
        is_position_valid(
            &self.shape.matrix,
            self.x + dx * cell,
            self.y + dy * cell,
            field,
        )
    }

    /// Move by whole cells if the target is free. Returns whether it moved
    pub fn try_move(&mut self, dx: i32, dy: i32, field: &Playfield) -> bool {
        if !self.can_move(dx, dy, field) {
            return false;
        }
        let cell = field.cell_size();
        self.x += dx * cell;
        self.y += dy * cell;
        true
    }

    /// Rotate in place, undoing the rotation if the result does not fit.
    ///
    /// No lateral kicks are attempted: the piece either turns where it is or
    /// stays as it was. Returns whether the piece ended up rotated.
    pub fn try_rotate(&mut self, rotation: Rotation, field: &Playfield) -> bool {
        if !self.shape.rotate(rotation) {
            return false;
        }
        if self.is_valid(field) {
            return true;
        }
        self.shape.rotate(rotation.inverse());
        false
    }
}
