//! Per-cell state.

use ninegrid_core::{Digit, DigitSet};

/// The state of one board cell.
///
/// A cell either carries a decided digit (a puzzle given or a player fill),
/// a non-empty set of candidate marks, or nothing at all. An empty mark set
/// is never stored: removing the last mark collapses the cell back to
/// [`CellState::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// An immutable clue from the original puzzle.
    Given(Digit),
    /// A digit entered by the player; may be wrong, may be erased.
    Filled(Digit),
    /// An empty cell annotated with candidate (pencil) marks.
    Marked(DigitSet),
    /// An empty cell with no annotations.
    Empty,
}

impl CellState {
    /// Returns the decided digit, if any (given or filled).
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Marked(_) | Self::Empty => None,
        }
    }

    /// Returns `true` when the cell holds no digit (empty or marked).
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        self.as_digit().is_none()
    }

    /// Returns the cell's candidate marks; empty unless the cell is
    /// [`CellState::Marked`].
    #[must_use]
    pub const fn marks(&self) -> DigitSet {
        match self {
            Self::Marked(marks) => *marks,
            _ => DigitSet::EMPTY,
        }
    }

    /// Replaces the cell's marks, normalizing an empty set to
    /// [`CellState::Empty`].
    ///
    /// Only meaningful on vacant cells; callers must not invoke this on a
    /// given or filled cell.
    pub fn set_marks(&mut self, marks: DigitSet) {
        debug_assert!(self.is_vacant());
        *self = if marks.is_empty() {
            Self::Empty
        } else {
            Self::Marked(marks)
        };
    }

    /// Adds a mark on a vacant cell; no-op on given/filled cells.
    pub fn add_mark(&mut self, digit: Digit) {
        let mut marks = self.marks();
        if self.is_vacant() {
            marks.insert(digit);
            self.set_marks(marks);
        }
    }

    /// Removes a mark if present; no-op on given/filled cells.
    pub fn drop_mark(&mut self, digit: Digit) {
        if let Self::Marked(mut marks) = *self {
            marks.remove(digit);
            self.set_marks(marks);
        }
    }

    /// Toggles a mark on a vacant cell; no-op on given/filled cells.
    pub fn toggle_mark(&mut self, digit: Digit) {
        let mut marks = self.marks();
        if self.is_vacant() {
            marks.toggle(digit);
            self.set_marks(marks);
        }
    }
}
