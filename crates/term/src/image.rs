//! Pre-loaded images and sprite sheets.
//!
//! Images are small grids of styled characters, registered once at startup
//! and drawn by handle. Padding past the end of a short row is transparent.

use anyhow::{bail, Result};

use crate::fb::{Cell, CellStyle};

/// Maximum number of images a canvas can hold.
pub const MAX_IMAGES: usize = 5;

/// Opaque reference to a registered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
}

impl Image {
    /// Build an image from text rows. Short rows are padded transparent.
    pub fn from_rows(rows: &[&str], style: CellStyle) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut cells = vec![None; width * rows.len()];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                cells[y * width + x] = Some(Cell::new(ch, style));
            }
        }
        Self {
            width: width as u16,
            height: rows.len() as u16,
            cells,
        }
    }

    /// Restyle every opaque cell of one row.
    pub fn with_row_style(mut self, row: u16, style: CellStyle) -> Self {
        if row < self.height {
            let w = self.width as usize;
            let start = row as usize * w;
            for cell in self.cells[start..start + w].iter_mut().flatten() {
                cell.style = style;
            }
        }
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell at (x, y); `None` when transparent or out of range.
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

/// Fixed-capacity image registry.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: Vec<Image>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self {
            images: Vec::with_capacity(MAX_IMAGES),
        }
    }

    pub fn load(&mut self, image: Image) -> Result<ImageHandle> {
        if self.images.len() >= MAX_IMAGES {
            bail!("image store is full ({} images)", MAX_IMAGES);
        }
        self.images.push(image);
        Ok(ImageHandle(self.images.len() - 1))
    }

    pub fn get(&self, handle: ImageHandle) -> Option<&Image> {
        self.images.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
