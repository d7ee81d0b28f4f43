//! Playfield module - the grid locked pieces are written into
//!
//! The grid is `width` x `height` cells (12x18 by default) stored row-major in a
//! flat vector. Each cell is empty or holds the color of the piece that
//! locked there.
//!
//! The playfield also owns its screen geometry: an origin in pixels and a
//! cell size. Active pieces are positioned in pixels, so converting between
//! the two lives here.
//!
//! Cells only change through [`Playfield::commit_piece`] and row clearing.

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{cell_id, Cell, Color, CELL_SIZE, FIELD_ORIGIN, GRID_HEIGHT, GRID_WIDTH, MATRIX_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    width: usize,
    height: usize,
    origin_x: i32,
    origin_y: i32,
    cell_size: i32,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an empty playfield with the default geometry.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "playfield must have at least one cell");
        Self {
            width,
            height,
            origin_x: FIELD_ORIGIN.0,
            origin_y: FIELD_ORIGIN.1,
            cell_size: CELL_SIZE,
            cells: vec![None; width * height],
        }
    }

    /// Place the playfield at a different pixel origin / cell size.
    pub fn with_geometry(mut self, origin_x: i32, origin_y: i32, cell_size: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self.cell_size = cell_size;
        self
    }

    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Pixel width of the whole grid
    pub fn pixel_width(&self) -> i32 {
        self.width as i32 * self.cell_size
    }

    /// Pixel height of the whole grid
    pub fn pixel_height(&self) -> i32 {
        self.height as i32 * self.cell_size
    }

    /// Get cell at (col, row); `None` when out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if out of bounds
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Grid (col, row) containing the pixel, if it lies on the grid
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if dx < 0 || dy < 0 {
            return None;
        }
        let col = (dx / self.cell_size) as usize;
        let row = (dy / self.cell_size) as usize;
        self.index(col, row).map(|_| (col, row))
    }

    /// Top-left pixel of a grid cell
    pub fn cell_origin(&self, col: usize, row: usize) -> (i32, i32) {
        (
            self.origin_x + col as i32 * self.cell_size,
            self.origin_y + row as i32 * self.cell_size,
        )
    }

    /// Pixel position where a piece appears: centered horizontally on the top row
    pub fn spawn_position(&self) -> (i32, i32) {
        let col = self.width.saturating_sub(MATRIX_SIZE) / 2;
        self.cell_origin(col, 0)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove a row: every row above moves down by one and the top row
    /// becomes empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.height {
            return;
        }

        let width = self.width;
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }
        self.cells[..width].fill(None);
    }

    /// Write a piece into the grid and clear any rows it completed.
    ///
    /// Only the rows the piece touched are inspected, top to bottom; a
    /// cleared row is replaced by the row above it before the next touched
    /// row is checked. Returns how many rows were cleared (0..=4).
    pub fn commit_piece(&mut self, piece: &ActivePiece) -> usize {
        let mut touched: ArrayVec<usize, MATRIX_SIZE> = ArrayVec::new();

        for (x, y) in piece.block_positions(self.cell_size) {
            let Some((col, row)) = self.cell_at_pixel(x, y) else {
                debug_assert!(false, "block at ({}, {}) lies outside the grid", x, y);
                continue;
            };
            self.set(col, row, Some(piece.color));
            if !touched.contains(&row) {
                touched.push(row);
            }
        }

        touched.sort_unstable();

        let mut cleared = 0;
        for &row in &touched {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Count of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write cell ids (0 = empty) into `out`, reusing its allocation.
    pub fn write_ids(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&cell| cell_id(cell)));
    }

    /// Fill an entire row with `color`
    pub fn fill_row(&mut self, row: usize, color: Color) {
        for col in 0..self.width {
            self.set(col, row, Some(color));
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::Tetromino;
    use crate::types::TetrominoKind;

    #[test]
    fn test_index_calculation() {
        let field = Playfield::default();
        assert_eq!(field.index(0, 0), Some(0));
        assert_eq!(field.index(11, 0), Some(11));
        assert_eq!(field.index(0, 1), Some(12));
        assert_eq!(field.index(11, 17), Some(215));
        assert_eq!(field.index(12, 0), None);
        assert_eq!(field.index(0, 18), None);
    }

    #[test]
    fn test_pixel_conversion() {
        let field = Playfield::default();
        assert_eq!(field.cell_at_pixel(25, 25), Some((0, 0)));
        assert_eq!(field.cell_at_pixel(49, 49), Some((0, 0)));
        assert_eq!(field.cell_at_pixel(50, 75), Some((1, 2)));
        assert_eq!(field.cell_at_pixel(24, 25), None);
        assert_eq!(field.cell_at_pixel(25 + 12 * 25, 25), None);
        assert_eq!(field.cell_origin(3, 2), (100, 75));
    }

    #[test]
    fn test_spawn_position_is_centered() {
        let field = Playfield::default();
        assert_eq!(field.spawn_position(), field.cell_origin(4, 0));
    }

    #[test]
    fn test_clear_row_shifts_down() {
        let mut field = Playfield::new(3, 4);
        field.set(0, 0, Some(Color::Cyan));
        field.set(1, 1, Some(Color::Blue));
        field.fill_row(2, Color::Green);
        field.set(2, 3, Some(Color::Pink));

        field.clear_row(2);

        assert_eq!(field.get(0, 0), Some(None));
        assert_eq!(field.get(0, 1), Some(Some(Color::Cyan)));
        assert_eq!(field.get(1, 2), Some(Some(Color::Blue)));
        assert_eq!(field.get(2, 3), Some(Some(Color::Pink)));
        assert!(!field.is_row_full(2));
    }

    #[test]
    fn test_write_ids() {
        let mut field = Playfield::new(2, 2);
        field.set(1, 1, Some(Color::Red));
        let mut out = Vec::new();
        field.write_ids(&mut out);
        assert_eq!(out, vec![0, 0, 0, 8]);
    }

    #[test]
    fn test_custom_geometry_commit() {
        let mut field = Playfield::new(4, 3).with_geometry(0, 0, 10);
        let piece = ActivePiece {
            shape: Tetromino::spawn(TetrominoKind::O),
            color: Color::Yellow,
            x: -10,
            y: 10,
        };
        assert!(piece.is_valid(&field));

        // O covers matrix columns 1..=2, rows 0..=1: grid columns 0..=1, rows 1..=2.
        assert_eq!(field.commit_piece(&piece), 0);
        assert_eq!(field.get(0, 1), Some(Some(Color::Yellow)));
        assert_eq!(field.get(1, 2), Some(Some(Color::Yellow)));
        assert_eq!(field.filled_count(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the grid")]
    fn test_commit_rejects_blocks_above_the_grid() {
        let mut field = Playfield::default();
        let mut piece = ActivePiece::spawn(Tetromino::spawn(TetrominoKind::O), &field);
        piece.y -= field.cell_size();
        // The open top edge lets this through the validity check.
        assert!(piece.is_valid(&field));
        field.commit_piece(&piece);
    }
}
