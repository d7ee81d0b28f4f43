//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the piece/grid engine. It has no dependencies on the
//! terminal, input devices or timing, so it can be driven headless by tests
//! and benchmarks exactly the way the frame loop drives it.
//!
//! # Module Structure
//!
//! - [`tetromino`]: the seven catalog shapes as 4x4 occupancy matrices
//! - [`rotation`]: in-place 90/180/270 degree matrix rotation
//! - [`playfield`]: 12x18 grid with commit and row clearing
//! - [`collision`]: pixel-space validity check for a candidate position
//! - [`piece`]: the active piece and its move/rotate commands
//! - [`scoring`]: line-clear rewards and the speed/level curve
//! - [`rng`]: uniform random draws from the catalog
//! - [`game_state`]: gravity, locking, spawning and game over
//! - [`snapshot`]: a render-ready copy of the game state
//!
//! # Example
//!
//! ```
//! use grid_tetris_core::{GameConfig, GameState};
//! use grid_tetris_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::seeded(7));
//! game.start();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//!
//! // Gravity fires every `speed` ticks.
//! let y = game.active().unwrap().y;
//! for _ in 0..game.speed() {
//!     game.tick();
//! }
//! assert_eq!(game.active().unwrap().y, y + game.field().cell_size());
//!
//! // Drop to the floor; the next gravity step locks the piece.
//! while game.apply_action(GameAction::MoveDown) {}
//! game.gravity();
//! assert_eq!(game.pieces(), 1);
//! ```

pub mod collision;
pub mod game_state;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use grid_tetris_types as types;

pub use collision::is_position_valid;
pub use game_state::{GameConfig, GameState, GameStatus, LockEvent};
pub use piece::ActivePiece;
pub use playfield::Playfield;
pub use rng::{get_random_tetromino, Randomizer};
pub use rotation::{rotate, rotate_matrix, Matrix};
pub use scoring::{calculate_line_score, level_for_speed, next_speed};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::{template, Tetromino};
