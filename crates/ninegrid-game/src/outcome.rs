//! Mutation outcomes.

/// The result of one mutation call on a board.
///
/// Every precondition miss (no selection, given cell, wrong cell state,
/// finished game) is absorbed into [`NoSelection`](Self::NoSelection) or
/// [`Ignored`](Self::Ignored) rather than surfaced as an error; callers
/// branch on the returned value instead of registering listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlayOutcome {
    /// A placement matched the solution.
    Correct,
    /// A placement did not match the solution. The digit is still written;
    /// the board displays wrong entries rather than rejecting them.
    Mistake,
    /// The move filled the last cell correctly; the game is over and all
    /// further mutations are ignored.
    Completed,
    /// A hint revealed the solution digit for the selected cell. Deliberately
    /// distinct from [`Correct`](Self::Correct): hints carry no scoring
    /// signal.
    Revealed,
    /// A filled cell was cleared.
    Erased,
    /// A candidate mark was toggled.
    Noted,
    /// The call required a selected cell and none was selected.
    NoSelection,
    /// The call was absorbed as a no-op (given cell, wrong cell state,
    /// illegal mark, or finished game).
    Ignored,
}

impl PlayOutcome {
    /// Returns `true` when the move changed the board, i.e. whenever a
    /// display derived from board state (remaining-digit counts, the grid
    /// itself) needs refreshing.
    #[must_use]
    pub const fn changes_board(self) -> bool {
        !matches!(self, Self::NoSelection | Self::Ignored)
    }
}
