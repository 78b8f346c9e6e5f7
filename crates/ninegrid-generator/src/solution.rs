//! Randomized backtracking solution fill.

use ninegrid_core::{Digit, DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Fills an empty grid into one complete valid solution.
///
/// Cells are visited in row-major order; at each empty cell the nine digits
/// are tried in a freshly shuffled order, which is the sole source of puzzle
/// variety. A failed branch resets the cell and backtracks. Starting from an
/// empty grid this always succeeds: the search space is finite and a
/// solution always exists.
pub(crate) fn fill<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, 0, rng);
    assert!(filled, "an empty 9x9 grid is always completable");
    grid
}

fn fill_from<R: Rng + ?Sized>(grid: &mut DigitGrid, first: usize, rng: &mut R) -> bool {
    let Some(pos) = (first..81)
        .map(Position::from_index)
        .find(|&pos| grid[pos].is_none())
    else {
        return true;
    };

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_legal(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, pos.index() + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}
