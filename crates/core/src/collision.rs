//! Collision checking for a piece at a candidate pixel position.
//!
//! Read-only over the playfield, so it can be used speculatively before a
//! move or rotation is committed.

use crate::playfield::Playfield;
use crate::rotation::Matrix;

/// Whether a matrix anchored at pixel `(x, y)` fits on the playfield.
///
/// Every occupied block must lie inside the left, right and bottom pixel
/// bounds and must not cover an occupied grid cell. The top edge is open:
/// blocks above the grid collide with nothing.
pub fn is_position_valid(matrix: &Matrix, x: i32, y: i32, field: &Playfield) -> bool {
    let cell = field.cell_size();
    let (left, top) = field.origin();
    let right = left + field.pixel_width();
    let bottom = top + field.pixel_height();

    for (i, row) in matrix.iter().enumerate() {
        for (j, &occupied) in row.iter().enumerate() {
            if !occupied {
                continue;
            }

            let draw_x = x + j as i32 * cell;
            let draw_y = y + i as i32 * cell;
            if draw_x < left || draw_x + cell > right || draw_y + cell > bottom {
                return false;
            }

            if let Some((col, grid_row)) = field.cell_at_pixel(draw_x, draw_y) {
                if field.is_occupied(col, grid_row) {
                    return false;
                }
            }
        }
    }

    true
}
