//! Grid Tetris (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `grid_tetris::{core,input,term,types}` and adds the
//! pieces only the binary needs: environment configuration and file logging.

pub mod config;
pub mod logging;

pub use grid_tetris_core as core;
pub use grid_tetris_input as input;
pub use grid_tetris_term as term;
pub use grid_tetris_types as types;
