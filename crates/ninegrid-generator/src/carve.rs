//! Clue removal.

use ninegrid_core::{DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Produces a playable problem grid by clearing `81 - clues` uniformly
/// random cells of a copy of `solution`.
///
/// Removed positions are chosen by shuffling all 81 positions and clearing a
/// prefix; the remaining cells become the givens. No check is made that the
/// carved puzzle keeps a unique solution, and `clues` is not range-checked:
/// a value of 81 returns the solution unchanged, a value of 0 an empty grid.
pub(crate) fn carve<R: Rng + ?Sized>(
    solution: &DigitGrid,
    clues: usize,
    rng: &mut R,
) -> DigitGrid {
    let mut problem = solution.clone();
    let mut positions = Position::ALL;
    positions.shuffle(rng);
    for &pos in positions.iter().take(81usize.saturating_sub(clues)) {
        problem.set(pos, None);
    }
    problem
}
