//! Shared types and constants for the grid engine.
//!
//! Everything here is plain data with no dependencies, so the core, the
//! renderer and the input layer can all agree on the same vocabulary.
//!
//! # Playfield
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 12 | Columns in the canonical playfield |
//! | `GRID_HEIGHT` | 18 | Rows in the canonical playfield |
//! | `MATRIX_SIZE` | 4 | Side of every tetromino occupancy matrix |
//! | `CELL_SIZE` | 25 | Pixels per grid cell |
//!
//! # Gravity
//!
//! Gravity is measured in simulation ticks (one tick per rendered frame,
//! `TICK_MS` apart). The interval starts at `INITIAL_SPEED` ticks, shrinks by
//! `SPEED_STEP` every `PIECES_PER_LEVEL` locked pieces and never drops below
//! `MIN_SPEED`.
//!
//! # Examples
//!
//! ```
//! use grid_tetris_types::{Direction, Rotation, TetrominoKind};
//!
//! let kind = TetrominoKind::from_str("t").unwrap();
//! assert_eq!(kind, TetrominoKind::T);
//!
//! assert_eq!(Direction::Up.turned(Rotation::Ninety), Direction::Right);
//! assert_eq!(Direction::None.turned(Rotation::OneEighty), Direction::None);
//! ```

/// Playfield width in cells (12 columns)
pub const GRID_WIDTH: usize = 12;

/// Playfield height in cells (18 rows)
pub const GRID_HEIGHT: usize = 18;

/// Side length of a tetromino occupancy matrix
pub const MATRIX_SIZE: usize = 4;

/// Size of one grid cell in pixels
pub const CELL_SIZE: i32 = 25;

/// Pixel offset of the playfield's top-left corner on screen
pub const FIELD_ORIGIN: (i32, i32) = (25, 25);

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1, in ticks
pub const INITIAL_SPEED: u32 = 50;

/// Gravity interval reduction per level, in ticks
pub const SPEED_STEP: u32 = 10;

/// Fastest allowed gravity interval, in ticks
pub const MIN_SPEED: u32 = 10;

/// Locked pieces between level increases
pub const PIECES_PER_LEVEL: u32 = 10;

/// Line clear reward table, indexed by rows cleared in one commit.
///
/// Multiplied by the current (1-based) level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven catalog shapes, named after the letter they resemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl TetrominoKind {
    /// Every kind, in catalog order.
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::S,
        TetrominoKind::Z,
        TetrominoKind::J,
        TetrominoKind::L,
    ];

    /// Parse from a one-letter name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "o" => Some(TetrominoKind::O),
            "t" => Some(TetrominoKind::T),
            "s" => Some(TetrominoKind::S),
            "z" => Some(TetrominoKind::Z),
            "j" => Some(TetrominoKind::J),
            "l" => Some(TetrominoKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "i",
            TetrominoKind::O => "o",
            TetrominoKind::T => "t",
            TetrominoKind::S => "s",
            TetrominoKind::Z => "z",
            TetrominoKind::J => "j",
            TetrominoKind::L => "l",
        }
    }

    /// Color a freshly spawned piece of this kind is drawn with
    pub fn color(&self) -> Color {
        match self {
            TetrominoKind::I => Color::Cyan,
            TetrominoKind::O => Color::Yellow,
            TetrominoKind::T => Color::Purple,
            TetrominoKind::S => Color::Green,
            TetrominoKind::Z => Color::Pink,
            TetrominoKind::J => Color::Blue,
            TetrominoKind::L => Color::Orange,
        }
    }
}

/// Facing of a tetromino matrix.
///
/// `None` marks shapes that never rotate (the square). The other four
/// cycle clockwise: Up → Right → Down → Left → Up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    None,
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Facing after turning clockwise by `rotation`.
    ///
    /// `Direction::None` is unaffected by any rotation.
    pub fn turned(self, rotation: Rotation) -> Self {
        let index = match self {
            Direction::None => return Direction::None,
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        };
        match (index + rotation.steps()) % 4 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    pub fn is_rotatable(self) -> bool {
        self != Direction::None
    }
}

/// Clockwise rotation amount applied to a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Rotation {
    /// Quarter turns (1, 2 or 3)
    pub fn steps(self) -> u8 {
        match self {
            Rotation::Ninety => 1,
            Rotation::OneEighty => 2,
            Rotation::TwoSeventy => 3,
        }
    }

    pub fn degrees(self) -> u16 {
        u16::from(self.steps()) * 90
    }

    /// The rotation that undoes this one
    ///
    /// ```
    /// use grid_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::Ninety.inverse(), Rotation::TwoSeventy);
    /// assert_eq!(Rotation::OneEighty.inverse(), Rotation::OneEighty);
    /// ```
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Ninety => Rotation::TwoSeventy,
            Rotation::OneEighty => Rotation::OneEighty,
            Rotation::TwoSeventy => Rotation::Ninety,
        }
    }

    /// Parse a rotation amount, returning `None` unless it is 90, 180 or 270.
    pub fn try_from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            90 => Some(Rotation::Ninety),
            180 => Some(Rotation::OneEighty),
            270 => Some(Rotation::TwoSeventy),
            _ => None,
        }
    }

    /// Parse a rotation amount.
    ///
    /// # Panics
    ///
    /// Panics if `degrees` is not 90, 180 or 270.
    pub fn from_degrees(degrees: u16) -> Self {
        match Self::try_from_degrees(degrees) {
            Some(rotation) => rotation,
            None => panic!("rotation amount must be 90, 180 or 270 degrees, got {degrees}"),
        }
    }
}

/// Color identifiers stored in grid cells.
///
/// Each catalog shape has its own color; `Red` is reserved for the piece
/// whose spawn ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Pink,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// Color used to mark the piece that could not spawn
    pub const FAILURE: Color = Color::Red;

    /// Non-zero id (0 is reserved for empty cells)
    pub fn id(self) -> u8 {
        match self {
            Color::Cyan => 1,
            Color::Yellow => 2,
            Color::Purple => 3,
            Color::Green => 4,
            Color::Pink => 5,
            Color::Blue => 6,
            Color::Orange => 7,
            Color::Red => 8,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Color::Cyan),
            2 => Some(Color::Yellow),
            3 => Some(Color::Purple),
            4 => Some(Color::Green),
            5 => Some(Color::Pink),
            6 => Some(Color::Blue),
            7 => Some(Color::Orange),
            8 => Some(Color::Red),
            _ => None,
        }
    }
}

/// A cell on the playfield
///
/// - `None`: empty
/// - `Some(Color)`: occupied by a block of a locked piece
pub type Cell = Option<Color>;

/// Encode a cell as its u8 id (0 = empty)
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, Color::id)
}

/// Discrete commands accepted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell down (ignored when blocked)
    MoveDown,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise (270° clockwise)
    RotateCcw,
    /// Start a fresh game
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_cycles_through_four_facings() {
        let mut dir = Direction::Up;
        for expected in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            dir = dir.turned(Rotation::Ninety);
            assert_eq!(dir, expected);
        }
        assert_eq!(Direction::Right.turned(Rotation::TwoSeventy), Direction::Up);
        assert_eq!(Direction::Left.turned(Rotation::OneEighty), Direction::Right);
    }

    #[test]
    fn unrotatable_direction_is_fixed() {
        for rotation in [Rotation::Ninety, Rotation::OneEighty, Rotation::TwoSeventy] {
            assert_eq!(Direction::None.turned(rotation), Direction::None);
        }
        assert!(!Direction::None.is_rotatable());
    }

    #[test]
    fn rotation_degrees_parse() {
        assert_eq!(Rotation::from_degrees(90), Rotation::Ninety);
        assert_eq!(Rotation::from_degrees(270).degrees(), 270);
        assert_eq!(Rotation::try_from_degrees(45), None);
        assert_eq!(Rotation::try_from_degrees(360), None);
    }

    #[test]
    #[should_panic(expected = "rotation amount")]
    fn rotation_rejects_out_of_range_amount() {
        let _ = Rotation::from_degrees(45);
    }

    #[test]
    fn color_ids_are_distinct_and_non_zero() {
        for id in 1..=8u8 {
            let color = Color::from_id(id).unwrap();
            assert_eq!(color.id(), id);
        }
        assert_eq!(Color::from_id(0), None);
        assert_eq!(cell_id(None), 0);
        assert_eq!(cell_id(Some(Color::Red)), 8);
    }

    #[test]
    fn failure_color_is_not_a_piece_color() {
        for kind in TetrominoKind::ALL {
            assert_ne!(kind.color(), Color::FAILURE);
            assert_eq!(TetrominoKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
