//! Board scrambling
//!
//! Produces solvable boards by walking the blank randomly away from the goal.

use crate::core::{Board, BoardError, Move};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for generating a scrambled board
pub struct ScrambleConfig {
    pub dimension: usize,
    pub moves: usize,
    pub seed: Option<u64>,
}

impl ScrambleConfig {
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self {
            dimension,
            moves: 30,
            seed: None,
        }
    }
}

/// Walk `moves` random steps from the goal, never undoing the previous step
///
/// Every board reached this way is solvable by construction.
///
/// # Errors
/// Returns `BoardError` if `dimension` is not a supported side length.
pub fn scramble<R: Rng + ?Sized>(
    dimension: usize,
    moves: usize,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let mut board = Board::goal(dimension)?;
    let mut last: Option<Move> = None;

    for _ in 0..moves {
        let options: Vec<(Move, Board)> = board
            .successors()
            .into_iter()
            .filter(|(mv, _)| last != Some(mv.opposite()))
            .collect();

        // Every cell has at least two neighbours, so one non-undoing move always remains
        if let Some((mv, next)) = options.choose(rng) {
            last = Some(*mv);
            board = next.clone();
        }
    }

    Ok(board)
}

/// Generate a scrambled board, seeded if the config asks for it
///
/// # Errors
/// Returns `BoardError` if the configured dimension is not supported.
pub fn generate(config: &ScrambleConfig) -> Result<Board, BoardError> {
    match config.seed {
        Some(seed) => scramble(config.dimension, config.moves, &mut StdRng::seed_from_u64(seed)),
        None => scramble(config.dimension, config.moves, &mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_moves_is_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(scramble(3, 0, &mut rng).unwrap().is_goal());
    }

    #[test]
    fn scrambles_are_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        for dimension in 2..=5 {
            for moves in [1, 5, 20, 50] {
                let board = scramble(dimension, moves, &mut rng).unwrap();
                assert_eq!(board.dimension(), dimension);
                assert!(board.is_solvable());
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let a = scramble(4, 40, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = scramble(4, 40, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_honours_seed() {
        let mut config = ScrambleConfig::new(3);
        config.seed = Some(5);
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn invalid_dimension_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scramble(1, 10, &mut rng), Err(BoardError::TooSmall(1)));
    }
}
