//! Seeded Sudoku puzzle generation.
//!
//! [`PuzzleGenerator`] produces playable puzzles in two steps: a randomized
//! backtracking search fills an empty grid into a complete solution, then a
//! carving pass clears uniformly random cells until only the difficulty's
//! clue count remains. Both steps draw from a PRNG keyed by a [`PuzzleSeed`],
//! so a `(seed, difficulty)` pair always reproduces the same puzzle.
//!
//! # Examples
//!
//! ```
//! use ninegrid_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Medium);
//!
//! assert_eq!(puzzle.problem.filled_count(), 40);
//! assert!(puzzle.solution.is_complete_solution());
//! ```
//!
//! # Known limitation
//!
//! Carving does not verify that the puzzle keeps a *unique* solution; at low
//! clue counts a second solution consistent with the givens can exist. The
//! stored [`GeneratedPuzzle::solution`] is always one valid completion of
//! the problem grid.

use ninegrid_core::DigitGrid;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    seed::{ParseSeedError, PuzzleSeed},
};

mod carve;
mod difficulty;
mod seed;
mod solution;

/// A generated puzzle: the playable problem, its solution, and the seed that
/// reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid; filled cells are the givens.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that deterministically reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was carved for.
    pub difficulty: Difficulty,
}

/// Sudoku puzzle generator.
///
/// The generator itself is stateless; all randomness comes from the seed
/// passed to (or drawn by) each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {}

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = solution::fill(&mut rng);
        let problem = carve::carve(&solution, difficulty.clue_count(), &mut rng);
        log::debug!(
            "generated {difficulty} puzzle with {} clues, seed={seed}",
            problem.filled_count(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty,
        }
    }
}
