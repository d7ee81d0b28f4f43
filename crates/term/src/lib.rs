//! Terminal rendering for the game.
//!
//! The game view draws in pixel space through the [`Canvas`] trait. The
//! terminal implementation rasterizes into a character [`FrameBuffer`]
//! (two columns per grid cell to compensate for glyph aspect ratio), and
//! [`TerminalRenderer`] presents finished frames, writing only what changed.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod image;
pub mod renderer;

pub use grid_tetris_core as core;
pub use grid_tetris_types as types;

pub use canvas::{color_rgb, palette, Canvas, FrameCanvas, Rect, COLS_PER_CELL};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use image::{Image, ImageHandle, ImageStore, MAX_IMAGES};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
