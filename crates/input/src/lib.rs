//! Terminal input module.
//!
//! Maps `crossterm` key presses onto discrete [`InputEvent`]s and polls the
//! terminal for them with a deadline. The game only ever sees
//! [`crate::types::GameAction`]s and a quit signal, never raw key codes.

pub mod map;
pub mod poll;

pub use grid_tetris_types as types;

pub use map::{map_key_event, InputEvent};
pub use poll::poll_input;
