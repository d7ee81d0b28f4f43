//! Game state module - the state machine driving one game
//!
//! Ties together the playfield, the active piece, the randomizer and the
//! scoring rules. Each call to [`GameState::tick`] is one simulation step;
//! gravity fires once every `speed` ticks and either drops the piece one cell
//! or locks it, clears rows, scores and spawns the next piece. A spawn that
//! does not fit ends the game.

use log::{debug, info, trace};

use crate::piece::ActivePiece;
use crate::playfield::Playfield;
use crate::rng::Randomizer;
use crate::scoring::{calculate_line_score, level_for_speed, next_speed};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::Tetromino;
use crate::types::*;

/// Parameters fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Randomizer seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Gravity interval at level 1, in ticks
    pub initial_speed: u32,
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_speed: INITIAL_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Waiting for the first piece
    Spawning,
    /// A piece is falling
    Falling,
    /// A spawned piece did not fit; input is ignored
    GameOver,
}

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: usize,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    field: Playfield,
    active: Option<ActivePiece>,
    randomizer: Randomizer,
    status: GameStatus,
    score: u32,
    /// Gravity interval in ticks
    speed: u32,
    /// Total simulation ticks while falling
    ticks: u64,
    /// Ticks since gravity last fired
    gravity_ticks: u32,
    /// Pieces locked into the grid
    pieces: u32,
    lines: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let initial_speed = config.initial_speed.max(MIN_SPEED);
        Self {
            config: GameConfig {
                initial_speed,
                ..config
            },
            field: Playfield::default(),
            active: None,
            randomizer: Randomizer::from_seed(config.seed),
            status: GameStatus::Spawning,
            score: 0,
            speed: initial_speed,
            ticks: 0,
            gravity_ticks: 0,
            pieces: 0,
            lines: 0,
            last_event: None,
        }
    }

    /// Spawn the first piece. Does nothing once the game has started.
    pub fn start(&mut self) {
        if self.status != GameStatus::Spawning {
            return;
        }
        self.spawn_next();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True until a spawn collides
    pub fn running(&self) -> bool {
        self.status != GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn level(&self) -> u32 {
        level_for_speed(self.config.initial_speed, self.speed)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    /// Mutable grid access for scripted setups (tests, demos)
    pub fn field_mut(&mut self) -> &mut Playfield {
        &mut self.field
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    fn spawn_next(&mut self) -> bool {
        let shape = self.randomizer.next_tetromino();
        self.spawn(shape)
    }

    /// Make `shape` the active piece at the spawn position.
    ///
    /// If it does not fit the game is over: the piece stays visible in the
    /// failure color and the grid is left untouched. Returns whether the
    /// spawn succeeded.
    pub fn spawn(&mut self, shape: Tetromino) -> bool {
        let mut piece = ActivePiece::spawn(shape, &self.field);
        self.gravity_ticks = 0;

        if !piece.is_valid(&self.field) {
            piece.color = Color::FAILURE;
            self.active = Some(piece);
            self.status = GameStatus::GameOver;
            info!(
                "game over: {} blocked at spawn (score {}, level {}, pieces {})",
                shape.kind.as_str(),
                self.score,
                self.level(),
                self.pieces
            );
            return false;
        }

        debug!("spawned {} at ({}, {})", shape.kind.as_str(), piece.x, piece.y);
        self.active = Some(piece);
        self.status = GameStatus::Falling;
        true
    }

    /// One simulation step. Returns true when gravity fired this tick.
    pub fn tick(&mut self) -> bool {
        if self.status != GameStatus::Falling {
            return false;
        }

        self.ticks = self.ticks.wrapping_add(1);
        self.gravity_ticks += 1;
        if self.gravity_ticks < self.speed {
            return false;
        }

        self.gravity_ticks = 0;
        self.gravity();
        true
    }

    /// Apply the gravity signal: drop one cell, or lock if that is blocked.
    pub fn gravity(&mut self) {
        if self.status != GameStatus::Falling {
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if !active.try_move(0, 1, &self.field) {
            self.lock_piece();
        }
    }

    /// Commit the active piece, score cleared rows, advance the level and
    /// spawn the next piece.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let level = self.level();
        let rows_cleared = self.field.commit_piece(&active);
        let points = calculate_line_score(rows_cleared, level);

        self.score = self.score.saturating_add(points);
        self.lines += rows_cleared as u32;
        self.pieces += 1;
        self.last_event = Some(LockEvent {
            rows_cleared,
            points,
        });
        trace!(
            "locked {} at ({}, {}): {} rows, {} points",
            active.shape.kind.as_str(),
            active.x,
            active.y,
            rows_cleared,
            points
        );

        if self.pieces % PIECES_PER_LEVEL == 0 {
            let speed = next_speed(self.speed);
            if speed != self.speed {
                self.speed = speed;
                info!("level {} (gravity every {} ticks)", self.level(), speed);
            }
        }

        self.spawn_next();
    }

    /// Apply a discrete input command. Returns whether it changed anything.
    ///
    /// Movement and rotation are ignored unless a piece is falling; blocked
    /// moves and rotations are dropped silently.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Restart {
            self.restart();
            return true;
        }
        if self.status != GameStatus::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        match action {
            GameAction::MoveDown => active.try_move(0, 1, &self.field),
            GameAction::MoveLeft => active.try_move(-1, 0, &self.field),
            GameAction::MoveRight => active.try_move(1, 0, &self.field),
            GameAction::RotateCw => active.try_rotate(Rotation::Ninety, &self.field),
            GameAction::RotateCcw => active.try_rotate(Rotation::TwoSeventy, &self.field),
            GameAction::Restart => false,
        }
    }

    /// Throw the current game away and start a new one with the same config.
    pub fn restart(&mut self) {
        info!("restarting (final score {})", self.score);
        *self = Self::new(self.config);
        self.start();
    }

    /// Copy everything a renderer needs into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_ids(&mut out.board);
        out.width = self.field.width();
        out.height = self.field.height();
        out.origin = self.field.origin();
        out.cell_size = self.field.cell_size();
        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.running = self.running();
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.pieces = self.pieces;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
