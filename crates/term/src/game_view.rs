//! GameView: draws a `GameSnapshot` through a [`Canvas`].
//!
//! Pure drawing, no I/O, so it can be exercised against a [`FrameCanvas`]
//! in tests.
//!
//! [`FrameCanvas`]: crate::canvas::FrameCanvas

use anyhow::Result;

use crate::canvas::{color_rgb, palette, Canvas, Rect, COLS_PER_CELL};
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, Rgb};
use crate::image::{Image, ImageHandle};
use crate::types::Color;

const SHEET_ROWS: [&str; 2] = ["GRID TETRIS", "  GAME OVER  "];
const TITLE_SPRITE: Rect = Rect::new(0, 0, 11, 1);
const BANNER_SPRITE: Rect = Rect::new(0, 1, 13, 1);

const CONTROLS: [&str; 6] = [
    "←→ a d  move",
    "↓  s    down",
    "↑  x    rotate",
    "   z    rotate ccw",
    "   r    restart",
    "   q    quit",
];

fn sprite_sheet() -> Image {
    let title = CellStyle::new(color_rgb(Color::Cyan), palette::BACKGROUND).bold();
    let banner = CellStyle::new(palette::TEXT, color_rgb(Color::Red)).bold();
    Image::from_rows(&SHEET_ROWS, title).with_row_style(1, banner)
}

/// Renders game snapshots; owns the handles of the images it registered.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    sheet: ImageHandle,
}

impl GameView {
    /// Register the view's sprite sheet on `canvas`.
    pub fn new(canvas: &mut impl Canvas) -> Result<Self> {
        let sheet = canvas.load_image(sprite_sheet())?;
        Ok(Self { sheet })
    }

    /// Draw one complete frame.
    pub fn render(&self, canvas: &mut impl Canvas, snap: &GameSnapshot) -> Result<()> {
        let cs = snap.cell_size;
        let (ox, oy) = snap.origin;
        let field = Rect::new(ox, oy, snap.width as i32 * cs, snap.height as i32 * cs);

        canvas.clear(palette::BACKGROUND);
        canvas.outline_rect(field.expand(cs), palette::FRAME);
        canvas.fill_rect(field, palette::FIELD);

        for row in 0..snap.height {
            for col in 0..snap.width {
                if let Some(color) = snap.cell(col, row) {
                    let x = ox + col as i32 * cs;
                    let y = oy + row as i32 * cs;
                    canvas.fill_rect(Rect::new(x, y, cs, cs), color_rgb(color));
                }
            }
        }

        if let Some(active) = &snap.active {
            let rgb = color_rgb(active.color);
            for (x, y) in active.block_positions(cs) {
                // Blocks above the field are hidden.
                if y >= oy {
                    canvas.fill_rect(Rect::new(x, y, cs, cs), rgb);
                }
            }
        }

        self.render_panel(canvas, snap, field)?;

        if !snap.running {
            let banner_w = BANNER_SPRITE.w * cs / COLS_PER_CELL;
            let x = field.x + (field.w - banner_w) / 2;
            let y = field.y + field.h / 2 - cs;
            canvas.draw_image(self.sheet, x, y, Some(BANNER_SPRITE))?;
            canvas.draw_text(x, y + cs, "press r to restart", palette::TEXT);
        }
        Ok(())
    }

    fn render_panel(&self, canvas: &mut impl Canvas, snap: &GameSnapshot, field: Rect) -> Result<()> {
        let cs = snap.cell_size;
        let x = field.x + field.w + 2 * cs;
        let width = 10 * cs;
        let mut y = field.y;

        canvas.draw_image(self.sheet, x, y, Some(TITLE_SPRITE))?;
        y += cs;
        canvas.draw_line(x, y, width, palette::FRAME);
        y += cs;

        let stats = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("PIECES", snap.pieces),
        ];
        for (label, value) in stats {
            canvas.draw_text(x, y, label, palette::MUTED);
            draw_value(canvas, x + 4 * cs, y, value, palette::TEXT);
            y += cs;
        }

        canvas.draw_line(x, y, width, palette::FRAME);
        y += cs;
        for line in CONTROLS {
            canvas.draw_text(x, y, line, palette::MUTED);
            y += cs;
        }
        Ok(())
    }
}

/// Right-aligned number in a 9 character column.
fn draw_value(canvas: &mut impl Canvas, x: i32, y: i32, value: u32, color: Rgb) {
    canvas.draw_text(x, y, &format!("{:>9}", value), color);
}
