//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `0xRRGGBB` literal
    pub const fn hex(v: u32) -> Self {
        Self {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::hex(0xECEFF4), Rgb::hex(0x2E3440))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// 2D grid of styled character cells, addressed by (column, row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are undefined
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index for signed coordinates; `None` when off-screen
    #[inline(always)]
    fn idx(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// Write a cell; off-screen writes are clipped.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(i) = self.idx(col, row) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_str(&mut self, col: i32, row: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.set(col + i as i32, row, Cell::new(ch, style));
        }
    }

    pub fn fill(&mut self, col: i32, row: i32, w: i32, h: i32, cell: Cell) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(col + dx, row + dy, cell);
            }
        }
    }

    /// Single-line box outline covering `w` x `h` cells
    pub fn draw_box(&mut self, col: i32, row: i32, w: i32, h: i32, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (col + w - 1, row + h - 1);

        for x in col + 1..right {
            self.set(x, row, Cell::new('─', style));
            self.set(x, bottom, Cell::new('─', style));
        }
        for y in row + 1..bottom {
            self.set(col, y, Cell::new('│', style));
            self.set(right, y, Cell::new('│', style));
        }
        self.set(col, row, Cell::new('┌', style));
        self.set(right, row, Cell::new('┐', style));
        self.set(col, bottom, Cell::new('└', style));
        self.set(right, bottom, Cell::new('┘', style));
    }

    /// Read back a row as text (tests and debugging)
    pub fn row_text(&self, row: i32) -> String {
        (0..self.width as i32)
            .filter_map(|col| self.get(col, row))
            .map(|cell| cell.ch)
            .collect()
    }
}
