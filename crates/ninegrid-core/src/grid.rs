//! The 9×9 digit grid and its legality predicate.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, DigitSet, Position};

/// A 9×9 grid of optional digits.
///
/// `None` means the cell is empty. Three grids typically coexist per game:
/// the immutable givens, the player-visible current state, and the complete
/// solution.
///
/// The textual form used by [`FromStr`] and [`Display`] is 81 characters in
/// row-major order, digits `1`-`9` for filled cells and `.` for empty ones
/// (`0` is also accepted on input).
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(1, 0)], None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` when the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if placing `digit` at `pos` would violate no
    /// constraint: no other cell in the same row, column, or 3×3 box holds
    /// `digit`.
    ///
    /// The cell at `pos` itself is not examined, so the predicate is also
    /// usable when recomputing candidates for a cell that just changed.
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        pos.peers().all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns the set of digits currently legal at `pos`.
    #[must_use]
    pub fn legal_digits(&self, pos: Position) -> DigitSet {
        let mut digits = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.get(peer) {
                digits.remove(digit);
            }
        }
        digits
    }

    /// Returns `true` if every cell is filled and every row, column, and
    /// box contains each digit exactly once.
    #[must_use]
    pub fn is_complete_solution(&self) -> bool {
        if self.cells.iter().any(Option::is_none) {
            return false;
        }
        for i in 0..9 {
            let row: DigitSet = (0..9).filter_map(|x| self.get(Position::new(x, i))).collect();
            let column: DigitSet = (0..9).filter_map(|y| self.get(Position::new(i, y))).collect();
            let boxed: DigitSet = Position::ALL
                .into_iter()
                .filter(|pos| pos.box_index() == i)
                .filter_map(|pos| self.get(pos))
                .collect();
            if row != DigitSet::FULL || column != DigitSet::FULL || boxed != DigitSet::FULL {
                return false;
            }
        }
        true
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`DigitGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input was not exactly 81 characters long.
    #[display("grid text must be 81 characters, got {len}")]
    BadLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The input contained a character other than `1`-`9`, `0`, or `.`.
    #[display("invalid grid character {ch:?} at offset {offset}")]
    BadCharacter {
        /// The offending character.
        ch: char,
        /// Character offset into the input.
        offset: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, GridParseError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(GridParseError::BadLength { len });
        }
        let mut grid = Self::new();
        for (offset, ch) in s.chars().enumerate() {
            let cell = match ch {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or_default() as u8;
                    Digit::try_from_value(value)
                }
                _ => return Err(GridParseError::BadCharacter { ch, offset }),
            };
            grid.set(Position::from_index(offset), cell);
        }
        Ok(grid)
    }
}
