//! RNG module - uniform draws from the tetromino catalog
//!
//! [`get_random_tetromino`] uses the process-wide thread RNG. Games that
//! need to be replayable (tests, benchmarks, `GRID_TETRIS_SEED`) use a
//! [`Randomizer`] seeded with a fixed value instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tetromino::Tetromino;
use crate::types::TetrominoKind;

/// Pick a catalog shape uniformly at random, in spawn orientation
pub fn get_random_tetromino() -> Tetromino {
    random_tetromino_from(&mut rand::thread_rng())
}

fn random_tetromino_from<R: Rng + ?Sized>(rng: &mut R) -> Tetromino {
    let kind = TetrominoKind::ALL[rng.gen_range(0..TetrominoKind::ALL.len())];
    Tetromino::spawn(kind)
}

/// Owned piece source for one game
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    /// Deterministic sequence for the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sequence seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw the next piece
    pub fn next_tetromino(&mut self) -> Tetromino {
        random_tetromino_from(&mut self.rng)
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::template;
    use crate::types::Direction;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Randomizer::new(12345);
        let mut b = Randomizer::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_tetromino(), b.next_tetromino());
        }
    }

    #[test]
    fn test_draws_cover_the_catalog() {
        let mut rng = Randomizer::new(1);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let t = rng.next_tetromino();
            let idx = TetrominoKind::ALL.iter().position(|&k| k == t.kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_draws_are_in_spawn_orientation() {
        for _ in 0..50 {
            let t = get_random_tetromino();
            assert_eq!(&t, template(t.kind));
            assert!(matches!(t.direction, Direction::Up | Direction::None));
        }
    }
}
