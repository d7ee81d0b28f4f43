//! Pixel-addressed drawing surface.
//!
//! The game speaks in pixels (25 px per grid cell). [`FrameCanvas`] maps that
//! space onto a [`FrameBuffer`] at a fixed scale: one grid cell becomes two
//! terminal columns by one row, so blocks come out roughly square.

use anyhow::{anyhow, Result};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::image::{Image, ImageHandle, ImageStore};
use crate::types::{Color, CELL_SIZE};

/// Terminal columns per grid cell.
pub const COLS_PER_CELL: i32 = 2;

/// Axis-aligned rectangle. Pixels on a canvas, image cells for sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Grow by `by` on every side.
    pub const fn expand(self, by: i32) -> Self {
        Self::new(self.x - by, self.y - by, self.w + 2 * by, self.h + 2 * by)
    }
}

pub mod palette {
    use crate::fb::Rgb;

    pub const BACKGROUND: Rgb = Rgb::hex(0x2E3440);
    pub const FIELD: Rgb = Rgb::hex(0x3B4252);
    pub const FRAME: Rgb = Rgb::hex(0x4C566A);
    pub const TEXT: Rgb = Rgb::hex(0xECEFF4);
    pub const MUTED: Rgb = Rgb::hex(0xD8DEE9);
}

/// Display color of a game color identifier.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::hex(0x88C0D0),
        Color::Yellow => Rgb::hex(0xEBCB8B),
        Color::Purple => Rgb::hex(0xB48EAD),
        Color::Green => Rgb::hex(0xA3BE8C),
        Color::Pink => Rgb::hex(0xE3A1C8),
        Color::Blue => Rgb::hex(0x5E81AC),
        Color::Orange => Rgb::hex(0xD08770),
        Color::Red => Rgb::hex(0xBF616A),
    }
}

/// Drawing capabilities the game view needs from its platform.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn outline_rect(&mut self, rect: Rect, color: Rgb);

    /// Horizontal separator `width` pixels long.
    fn draw_line(&mut self, x: i32, y: i32, width: i32, color: Rgb);

    /// Single-line text label.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb);

    /// Register an image for later drawing.
    fn load_image(&mut self, image: Image) -> Result<ImageHandle>;

    /// Draw a registered image, or the `sprite` sub-rectangle of it.
    fn draw_image(
        &mut self,
        handle: ImageHandle,
        x: i32,
        y: i32,
        sprite: Option<Rect>,
    ) -> Result<()>;
}

/// [`Canvas`] backed by a terminal framebuffer.
#[derive(Debug)]
pub struct FrameCanvas {
    fb: FrameBuffer,
    images: ImageStore,
    background: Rgb,
}

impl FrameCanvas {
    /// Canvas of `cols` x `rows` terminal cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            fb: FrameBuffer::new(cols, rows),
            images: ImageStore::new(),
            background: palette::BACKGROUND,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.fb.resize(cols, rows);
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Terminal column containing pixel `x`.
    pub fn col(x: i32) -> i32 {
        (x * COLS_PER_CELL).div_euclid(CELL_SIZE)
    }

    /// Terminal row containing pixel `y`.
    pub fn row(y: i32) -> i32 {
        y.div_euclid(CELL_SIZE)
    }

    /// Terminal span `(col, row, cols, rows)` covered by a pixel rect.
    fn span(rect: Rect) -> (i32, i32, i32, i32) {
        let (c0, r0) = (Self::col(rect.x), Self::row(rect.y));
        let (c1, r1) = (Self::col(rect.x + rect.w), Self::row(rect.y + rect.h));
        (c0, r0, c1 - c0, r1 - r0)
    }

    fn bg_at(&self, col: i32, row: i32) -> Rgb {
        self.fb
            .get(col, row)
            .map_or(self.background, |cell| cell.style.bg)
    }
}

impl Canvas for FrameCanvas {
    fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.fb.clear(Cell::new(' ', CellStyle::new(palette::TEXT, color)));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (col, row, w, h) = Self::span(rect);
        self.fb
            .fill(col, row, w, h, Cell::new(' ', CellStyle::new(color, color)));
    }

    fn outline_rect(&mut self, rect: Rect, color: Rgb) {
        let (col, row, w, h) = Self::span(rect);
        let style = CellStyle::new(color, self.bg_at(col, row));
        self.fb.draw_box(col, row, w, h, style);
    }

    fn draw_line(&mut self, x: i32, y: i32, width: i32, color: Rgb) {
        let (col, row) = (Self::col(x), Self::row(y));
        for c in col..Self::col(x + width) {
            let style = CellStyle::new(color, self.bg_at(c, row));
            self.fb.set(c, row, Cell::new('─', style));
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb) {
        let (col, row) = (Self::col(x), Self::row(y));
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            let style = CellStyle::new(color, self.bg_at(c, row));
            self.fb.set(c, row, Cell::new(ch, style));
        }
    }

    fn load_image(&mut self, image: Image) -> Result<ImageHandle> {
        self.images.load(image)
    }

    fn draw_image(
        &mut self,
        handle: ImageHandle,
        x: i32,
        y: i32,
        sprite: Option<Rect>,
    ) -> Result<()> {
        let image = self
            .images
            .get(handle)
            .ok_or_else(|| anyhow!("unknown image handle {:?}", handle))?;
        let src = sprite.unwrap_or(Rect::new(
            0,
            0,
            image.width() as i32,
            image.height() as i32,
        ));
        let (col, row) = (Self::col(x), Self::row(y));

        for dy in 0..src.h.max(0) {
            for dx in 0..src.w.max(0) {
                let (sx, sy) = (src.x + dx, src.y + dy);
                if sx < 0 || sy < 0 {
                    continue;
                }
                if let Some(cell) = image.get(sx as u16, sy as u16) {
                    self.fb.set(col + dx, row + dy, cell);
                }
            }
        }
        Ok(())
    }
}
