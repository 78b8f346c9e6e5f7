//! The in-play board aggregate.

use ninegrid_core::{Digit, DigitGrid, DigitSet, Position};
use ninegrid_generator::{Difficulty, GeneratedPuzzle};

use crate::{CellState, PlayOutcome};

/// A Sudoku board in play.
///
/// Owns everything a game session mutates: the cell states (givens, player
/// fills, and candidate marks), the stored solution, the selection cursor,
/// and the two annotation mode flags. All mutations go through
/// [`place`](Self::place), [`erase`](Self::erase), [`hint`](Self::hint), and
/// [`set_auto_marks`](Self::set_auto_marks), and report what happened as a
/// [`PlayOutcome`] — there is no failure mode beyond "nothing happened".
///
/// Given cells are never mutated: after any sequence of calls, every given
/// position still shows its original clue.
///
/// # Example
///
/// ```
/// use ninegrid_game::Board;
/// use ninegrid_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
/// let mut board = Board::new(puzzle);
///
/// assert!(!board.is_completed());
/// assert!(board.selection().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; 81],
    solution: DigitGrid,
    difficulty: Difficulty,
    selection: Option<Position>,
    mark_mode: bool,
    auto_marks: bool,
    completed: bool,
}

/// A full copy of the persistent parts of a [`Board`].
///
/// The selection cursor is deliberately absent: it is transient UI state and
/// is reset when a board is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// The immutable clues (a restriction of `current`).
    pub given: DigitGrid,
    /// The player-visible grid, givens included.
    pub current: DigitGrid,
    /// The complete solution.
    pub solution: DigitGrid,
    /// Candidate marks per cell, row-major. Marks on decided cells are
    /// dropped on restore.
    pub marks: [DigitSet; 81],
    /// The session difficulty.
    pub difficulty: Difficulty,
    /// Whether the player is entering marks instead of digits.
    pub mark_mode: bool,
    /// Whether the board maintains all candidate marks automatically.
    pub auto_marks: bool,
}

/// Error returned when a [`BoardSnapshot`] does not describe a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A given cell is missing from, or contradicted by, the current grid.
    #[display("a given cell disagrees with the current grid")]
    GivenCellOverwritten,
    /// The solution grid is incomplete or violates the one-per-house rule.
    #[display("the solution grid is not a valid complete solution")]
    InvalidSolution,
}

impl Board {
    /// Creates a board from a freshly generated puzzle.
    ///
    /// Filled cells of the puzzle's problem grid become the immutable
    /// givens; nothing is selected and both annotation modes start off.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        let mut board = Self {
            cells,
            solution: puzzle.solution,
            difficulty: puzzle.difficulty,
            selection: None,
            mark_mode: false,
            auto_marks: false,
            completed: false,
        };
        board.refresh_completed();
        board
    }

    /// Rebuilds a board from a snapshot, e.g. when restoring a saved game.
    ///
    /// The completion flag is re-derived from the grids; the selection is
    /// reset. Marks recorded on decided cells are dropped, and the mode
    /// flags are restored as-is without recomputing marks, so the restored
    /// mark layout is exactly the saved one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSolution`] if the snapshot's solution is
    /// not a valid complete grid, and [`BoardError::GivenCellOverwritten`]
    /// if any given cell's value is absent from the current grid.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, BoardError> {
        if !snapshot.solution.is_complete_solution() {
            return Err(BoardError::InvalidSolution);
        }

        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            cells[pos.index()] = match (snapshot.given[pos], snapshot.current[pos]) {
                (Some(given), current) => {
                    if current != Some(given) {
                        return Err(BoardError::GivenCellOverwritten);
                    }
                    CellState::Given(given)
                }
                (None, Some(filled)) => CellState::Filled(filled),
                (None, None) => {
                    let marks = snapshot.marks[pos.index()];
                    if marks.is_empty() {
                        CellState::Empty
                    } else {
                        CellState::Marked(marks)
                    }
                }
            };
        }

        let mut board = Self {
            cells,
            solution: snapshot.solution.clone(),
            difficulty: snapshot.difficulty,
            selection: None,
            mark_mode: snapshot.mark_mode,
            auto_marks: snapshot.auto_marks,
            completed: false,
        };
        board.refresh_completed();
        Ok(board)
    }

    /// Copies the persistent parts of this board out into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut given = DigitGrid::new();
        let mut current = DigitGrid::new();
        let mut marks = [DigitSet::EMPTY; 81];
        for pos in Position::ALL {
            let cell = &self.cells[pos.index()];
            if let CellState::Given(digit) = cell {
                given.set(pos, Some(*digit));
            }
            current.set(pos, cell.as_digit());
            marks[pos.index()] = cell.marks();
        }
        BoardSnapshot {
            given,
            current,
            solution: self.solution.clone(),
            marks,
            difficulty: self.difficulty,
            mark_mode: self.mark_mode,
            auto_marks: self.auto_marks,
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the candidate marks at `pos` (empty for decided cells).
    #[must_use]
    pub fn marks(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()].marks()
    }

    /// Returns the stored solution.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the session difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Selects the cell at `pos`.
    ///
    /// The selection persists across placements and erasures; only building
    /// a new board clears it.
    pub fn select(&mut self, pos: Position) {
        self.selection = Some(pos);
    }

    /// Returns `true` when the player is entering marks instead of digits.
    #[must_use]
    pub fn mark_mode(&self) -> bool {
        self.mark_mode
    }

    /// Switches manual mark entry on or off.
    pub fn set_mark_mode(&mut self, enabled: bool) {
        self.mark_mode = enabled;
    }

    /// Returns `true` when the board maintains all marks automatically.
    #[must_use]
    pub fn auto_marks(&self) -> bool {
        self.auto_marks
    }

    /// Switches automatic mark maintenance on or off.
    ///
    /// Turning it on recomputes every vacant cell's marks as the full set of
    /// digits currently legal there, overwriting manual marks. Turning it
    /// off clears every mark. Re-asserting the current state does nothing,
    /// so toggling on, off, and on again matches a single on-toggle exactly.
    pub fn set_auto_marks(&mut self, enabled: bool) {
        if self.auto_marks == enabled {
            return;
        }
        self.auto_marks = enabled;
        for pos in Position::ALL {
            if self.cells[pos.index()].is_vacant() {
                let marks = if enabled {
                    self.legal_digits(pos)
                } else {
                    DigitSet::EMPTY
                };
                self.cells[pos.index()].set_marks(marks);
            }
        }
    }

    /// Returns `true` once every cell matches the solution; the board is
    /// then terminal and all further mutations are ignored.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Enters `digit` at the selected cell.
    ///
    /// In mark mode this toggles `digit` in the cell's candidate marks
    /// instead, and only when the digit is currently legal there; mark
    /// entry carries no correctness check. Otherwise the digit is written
    /// even when wrong — the outcome reports [`Correct`](PlayOutcome::Correct)
    /// or [`Mistake`](PlayOutcome::Mistake), and
    /// [`Completed`](PlayOutcome::Completed) when this fill finishes the
    /// puzzle.
    ///
    /// Calls without a selection, on a given or already-filled cell, or
    /// after completion are absorbed as
    /// [`NoSelection`](PlayOutcome::NoSelection) /
    /// [`Ignored`](PlayOutcome::Ignored).
    pub fn place(&mut self, digit: Digit) -> PlayOutcome {
        let Some(pos) = self.selection else {
            return PlayOutcome::NoSelection;
        };
        if self.completed || !self.cells[pos.index()].is_vacant() {
            return PlayOutcome::Ignored;
        }

        if self.mark_mode {
            if !self.is_legal(pos, digit) {
                return PlayOutcome::Ignored;
            }
            self.cells[pos.index()].toggle_mark(digit);
            return PlayOutcome::Noted;
        }

        self.cells[pos.index()] = CellState::Filled(digit);
        if self.auto_marks {
            self.narrow_peer_marks(pos, digit);
        }
        if self.refresh_completed() {
            return PlayOutcome::Completed;
        }
        if self.solution[pos] == Some(digit) {
            PlayOutcome::Correct
        } else {
            PlayOutcome::Mistake
        }
    }

    /// Clears the player-filled digit at the selected cell.
    ///
    /// Only filled cells can be erased; givens, empty cells, and mark-only
    /// cells are left alone ([`Ignored`](PlayOutcome::Ignored)). When
    /// automatic marks are on, the erased cell's candidates are recomputed
    /// from scratch and the erased digit is reinstated in every peer where
    /// it became legal again.
    pub fn erase(&mut self) -> PlayOutcome {
        let Some(pos) = self.selection else {
            return PlayOutcome::NoSelection;
        };
        if self.completed {
            return PlayOutcome::Ignored;
        }
        let CellState::Filled(erased) = self.cells[pos.index()] else {
            return PlayOutcome::Ignored;
        };

        self.cells[pos.index()] = CellState::Empty;
        if self.auto_marks {
            self.widen_marks_after_erase(pos, erased);
        }
        PlayOutcome::Erased
    }

    /// Reveals the solution digit at the selected, vacant cell.
    ///
    /// This is a deliberate no-penalty path: it never reports
    /// [`Correct`](PlayOutcome::Correct) or
    /// [`Mistake`](PlayOutcome::Mistake), only
    /// [`Revealed`](PlayOutcome::Revealed) — or
    /// [`Completed`](PlayOutcome::Completed) when the reveal finishes the
    /// puzzle. Any hint budget is the caller's policy, not enforced here.
    pub fn hint(&mut self) -> PlayOutcome {
        let Some(pos) = self.selection else {
            return PlayOutcome::NoSelection;
        };
        if self.completed || !self.cells[pos.index()].is_vacant() {
            return PlayOutcome::Ignored;
        }

        // The solution grid is validated complete at construction.
        let Some(digit) = self.solution[pos] else {
            return PlayOutcome::Ignored;
        };
        self.cells[pos.index()] = CellState::Filled(digit);
        if self.auto_marks {
            self.narrow_peer_marks(pos, digit);
        }
        if self.refresh_completed() {
            return PlayOutcome::Completed;
        }
        PlayOutcome::Revealed
    }

    /// Returns how many cells still need `digit`: positions where the
    /// solution holds `digit` but the current grid does not.
    ///
    /// Used to grey out exhausted digit buttons.
    #[must_use]
    pub fn remaining_count(&self, digit: Digit) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                self.solution[pos] == Some(digit)
                    && self.cells[pos.index()].as_digit() != Some(digit)
            })
            .count()
    }

    /// Returns the remaining count for every digit, indexed by `value - 1`.
    #[must_use]
    pub fn remaining_counts(&self) -> [usize; 9] {
        let mut counts = [0; 9];
        for (slot, digit) in counts.iter_mut().zip(Digit::ALL) {
            *slot = self.remaining_count(digit);
        }
        counts
    }

    fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()].as_digit()
    }

    fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        pos.peers().all(|peer| self.digit_at(peer) != Some(digit))
    }

    fn legal_digits(&self, pos: Position) -> DigitSet {
        let mut digits = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.digit_at(peer) {
                digits.remove(digit);
            }
        }
        digits
    }

    /// Narrowing half of the mark synchronizer: after `digit` lands at
    /// `pos`, it is no longer legal at any peer, so strip it from their
    /// marks. Never adds candidates.
    fn narrow_peer_marks(&mut self, pos: Position, digit: Digit) {
        for peer in pos.peers() {
            self.cells[peer.index()].drop_mark(digit);
        }
    }

    /// Widening half of the mark synchronizer: after `erased` leaves `pos`,
    /// recompute the vacated cell's marks from scratch, then reinstate
    /// `erased` — and only `erased`, the one digit whose legality changed —
    /// into each vacant peer where it is legal again.
    fn widen_marks_after_erase(&mut self, pos: Position, erased: Digit) {
        let marks = self.legal_digits(pos);
        self.cells[pos.index()].set_marks(marks);
        for peer in pos.peers() {
            if self.cells[peer.index()].is_vacant() && self.is_legal(peer, erased) {
                self.cells[peer.index()].add_mark(erased);
            }
        }
    }

    fn refresh_completed(&mut self) -> bool {
        self.completed = Position::ALL
            .into_iter()
            .all(|pos| self.digit_at(pos) == self.solution[pos]);
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn snapshot_from(given: &str, current: &str) -> BoardSnapshot {
        BoardSnapshot {
            given: given.parse().expect("valid given grid"),
            current: current.parse().expect("valid current grid"),
            solution: SOLVED.parse().expect("valid solution grid"),
            marks: [DigitSet::EMPTY; 81],
            difficulty: Difficulty::Easy,
            mark_mode: false,
            auto_marks: false,
        }
    }

    fn board_from(given: &str, current: &str) -> Board {
        Board::from_snapshot(&snapshot_from(given, current)).expect("consistent snapshot")
    }

    /// One given (the 5 at the top-left corner), everything else open.
    fn corner_board() -> Board {
        let given = format!("5{}", ".".repeat(80));
        board_from(&given, &given)
    }

    #[test]
    fn test_no_selection_is_reported_without_mutation() {
        let mut board = corner_board();
        assert_eq!(board.place(Digit::D1), PlayOutcome::NoSelection);
        assert_eq!(board.erase(), PlayOutcome::NoSelection);
        assert_eq!(board.hint(), PlayOutcome::NoSelection);
        assert_eq!(board, corner_board());
    }

    #[test]
    fn test_place_on_given_cell_is_a_no_op() {
        let mut board = corner_board();
        board.select(Position::new(0, 0));
        assert_eq!(board.place(Digit::D5), PlayOutcome::Ignored);
        assert_eq!(board.cell(Position::new(0, 0)), &CellState::Given(Digit::D5));
        assert_eq!(board.erase(), PlayOutcome::Ignored);
        assert_eq!(board.hint(), PlayOutcome::Ignored);
    }

    #[test]
    fn test_place_reports_correct_and_mistake_but_always_writes() {
        let mut board = corner_board();
        let pos = Position::new(1, 0); // solution digit is 3
        board.select(pos);

        assert_eq!(board.place(Digit::D7), PlayOutcome::Mistake);
        assert_eq!(board.cell(pos), &CellState::Filled(Digit::D7));

        // A filled cell is not a valid placement target; erase first.
        assert_eq!(board.place(Digit::D3), PlayOutcome::Ignored);
        assert_eq!(board.erase(), PlayOutcome::Erased);
        assert_eq!(board.place(Digit::D3), PlayOutcome::Correct);
        assert_eq!(board.cell(pos), &CellState::Filled(Digit::D3));
    }

    #[test]
    fn test_selection_persists_across_moves() {
        let mut board = corner_board();
        let pos = Position::new(1, 0);
        board.select(pos);
        board.place(Digit::D3);
        assert_eq!(board.selection(), Some(pos));
        board.erase();
        assert_eq!(board.selection(), Some(pos));
    }

    #[test]
    fn test_hint_reveals_solution_without_scoring_signal() {
        let mut board = corner_board();
        let pos = Position::new(4, 4); // solution digit is 5
        board.select(pos);
        assert_eq!(board.hint(), PlayOutcome::Revealed);
        assert_eq!(board.cell(pos), &CellState::Filled(Digit::D5));

        // A decided cell no longer accepts hints.
        assert_eq!(board.hint(), PlayOutcome::Ignored);
    }

    #[test]
    fn test_completion_is_terminal() {
        // All but (0, 0) already solved; the last correct fill completes.
        let current = format!(".{}", &SOLVED[1..]);
        let mut board = board_from(&format!(".{}", ".".repeat(80)), &current);
        assert!(!board.is_completed());

        board.select(Position::new(0, 0));
        assert_eq!(board.place(Digit::D5), PlayOutcome::Completed);
        assert!(board.is_completed());

        // Terminal: everything is ignored from here on.
        assert_eq!(board.place(Digit::D1), PlayOutcome::Ignored);
        assert_eq!(board.erase(), PlayOutcome::Ignored);
        assert_eq!(board.hint(), PlayOutcome::Ignored);
    }

    #[test]
    fn test_wrong_final_fill_does_not_complete() {
        let current = format!(".{}", &SOLVED[1..]);
        let mut board = board_from(&format!(".{}", ".".repeat(80)), &current);
        board.select(Position::new(0, 0));
        assert_eq!(board.place(Digit::D6), PlayOutcome::Mistake);
        assert!(!board.is_completed());
    }

    #[test]
    fn test_hint_can_complete_the_board() {
        let current = format!(".{}", &SOLVED[1..]);
        let mut board = board_from(&format!(".{}", ".".repeat(80)), &current);
        board.select(Position::new(0, 0));
        assert_eq!(board.hint(), PlayOutcome::Completed);
        assert!(board.is_completed());
    }

    #[test]
    fn test_mark_mode_toggles_only_legal_digits() {
        let mut board = corner_board();
        board.set_mark_mode(true);
        let pos = Position::new(1, 0);
        board.select(pos);

        // 5 conflicts with the given in the same row; nothing happens.
        assert_eq!(board.place(Digit::D5), PlayOutcome::Ignored);
        assert_eq!(board.cell(pos), &CellState::Empty);

        // Legal digits toggle freely, with no correctness check: 7 is not
        // the solution digit here but marks are advisory.
        assert_eq!(board.place(Digit::D7), PlayOutcome::Noted);
        assert!(board.marks(pos).contains(Digit::D7));
        assert_eq!(board.place(Digit::D7), PlayOutcome::Noted);
        assert_eq!(board.cell(pos), &CellState::Empty);
    }

    #[test]
    fn test_auto_marks_recompute_and_clear() {
        let mut board = corner_board();
        let pos = Position::new(1, 0);

        // A manual mark that auto mode will overwrite.
        board.set_mark_mode(true);
        board.select(pos);
        board.place(Digit::D9);
        board.set_mark_mode(false);

        board.set_auto_marks(true);
        // (1, 0) sees the given 5 in its row and box; everything else goes.
        let marks = board.marks(pos);
        assert!(!marks.contains(Digit::D5));
        assert_eq!(marks.len(), 8);

        let after_first_toggle = board.clone();
        board.set_auto_marks(false);
        for check in Position::ALL {
            assert!(board.marks(check).is_empty());
        }
        board.set_auto_marks(true);
        assert_eq!(board, after_first_toggle);

        // Re-asserting the current state does not re-derive anything.
        board.set_auto_marks(true);
        assert_eq!(board, after_first_toggle);
    }

    #[test]
    fn test_placement_narrows_peer_marks() {
        let mut board = corner_board();
        board.set_auto_marks(true);
        let pos = Position::new(1, 0);
        board.select(pos);
        board.place(Digit::D3);

        // Peers in the row, column, and box lose 3; a non-peer keeps it.
        assert!(!board.marks(Position::new(8, 0)).contains(Digit::D3));
        assert!(!board.marks(Position::new(1, 8)).contains(Digit::D3));
        assert!(!board.marks(Position::new(2, 2)).contains(Digit::D3));
        assert!(board.marks(Position::new(8, 8)).contains(Digit::D3));
    }

    #[test]
    fn test_erase_restores_marks_for_the_freed_digit() {
        let mut board = corner_board();
        board.set_auto_marks(true);
        let pos = Position::new(1, 0); // solution digit is 3
        board.select(pos);

        assert_eq!(board.place(Digit::D7), PlayOutcome::Mistake);
        assert!(!board.marks(Position::new(8, 0)).contains(Digit::D7));

        assert_eq!(board.erase(), PlayOutcome::Erased);
        // The vacated cell's candidates are recomputed from scratch...
        let marks = board.marks(pos);
        assert!(marks.contains(Digit::D7));
        assert!(!marks.contains(Digit::D5)); // still blocked by the given
        // ...and peers regain exactly the freed digit.
        assert!(board.marks(Position::new(8, 0)).contains(Digit::D7));
    }

    #[test]
    fn test_erase_does_not_restore_where_still_blocked() {
        let mut board = corner_board();
        board.set_auto_marks(true);

        // Two 7s in the same row, then erase one: the other still blocks
        // the row, so row peers must not regain 7.
        board.select(Position::new(1, 0));
        board.place(Digit::D7);
        board.select(Position::new(8, 0));
        // 7 is illegal here now, but placement does not reject conflicts.
        board.place(Digit::D7);

        board.select(Position::new(1, 0));
        board.erase();
        assert!(!board.marks(Position::new(4, 0)).contains(Digit::D7));
        // The vacated cell itself also still sees the surviving 7.
        assert!(!board.marks(Position::new(1, 0)).contains(Digit::D7));
    }

    #[test]
    fn test_erase_requires_a_filled_cell() {
        let mut board = corner_board();
        let pos = Position::new(1, 0);
        board.select(pos);
        assert_eq!(board.erase(), PlayOutcome::Ignored);

        board.set_mark_mode(true);
        board.place(Digit::D7);
        // Mark-only cells are not erase targets either.
        assert_eq!(board.erase(), PlayOutcome::Ignored);
        assert!(board.marks(pos).contains(Digit::D7));
    }

    #[test]
    fn test_remaining_counts() {
        let board = corner_board();
        // One 5 is given, eight remain; all nine of every other digit.
        assert_eq!(board.remaining_count(Digit::D5), 8);
        assert_eq!(board.remaining_count(Digit::D1), 9);

        let counts = board.remaining_counts();
        assert_eq!(counts[4], 8);
        assert_eq!(counts.iter().sum::<usize>(), 80);

        // A wrong entry does not consume the digit it mimics.
        let mut board = corner_board();
        board.select(Position::new(1, 0));
        board.place(Digit::D5); // wrong: solution digit is 3
        assert_eq!(board.remaining_count(Digit::D5), 8);
        assert_eq!(board.remaining_count(Digit::D3), 9);
    }

    #[test]
    fn test_givens_never_change() {
        let given = format!("5{}", ".".repeat(80));
        let mut board = corner_board();
        board.set_auto_marks(true);
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            board.select(Position::from_index(i * 7 % 81));
            board.place(digit);
            board.erase();
            board.hint();
        }
        let snapshot = board.snapshot();
        assert_eq!(snapshot.given, given.parse().expect("valid grid"));
        assert_eq!(snapshot.current[Position::new(0, 0)], Some(Digit::D5));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut board = corner_board();
        board.set_auto_marks(true);
        board.select(Position::new(1, 0));
        board.place(Digit::D7);
        board.select(Position::new(4, 4));
        board.place(Digit::D5);
        board.set_mark_mode(true);

        let snapshot = board.snapshot();
        let restored = Board::from_snapshot(&snapshot).expect("round-trip snapshot");

        // Everything but the transient selection survives.
        let mut board = board;
        board.selection = None;
        assert_eq!(restored, board);
    }

    #[test]
    fn test_from_snapshot_rejects_inconsistent_grids() {
        // Given 5 at the corner, but the current grid shows 6 there.
        let given = format!("5{}", ".".repeat(80));
        let mut snapshot = snapshot_from(&given, &given);
        snapshot.current.set(Position::new(0, 0), Some(Digit::D6));
        assert_eq!(
            Board::from_snapshot(&snapshot),
            Err(BoardError::GivenCellOverwritten)
        );

        // A given erased from the current grid is just as inconsistent.
        let mut snapshot = snapshot_from(&given, &given);
        snapshot.current.set(Position::new(0, 0), None);
        assert_eq!(
            Board::from_snapshot(&snapshot),
            Err(BoardError::GivenCellOverwritten)
        );

        // An incomplete solution grid cannot back a board.
        let mut snapshot = snapshot_from(&given, &given);
        snapshot.solution.set(Position::new(8, 8), None);
        assert_eq!(
            Board::from_snapshot(&snapshot),
            Err(BoardError::InvalidSolution)
        );
    }

    #[test]
    fn test_from_snapshot_drops_marks_on_decided_cells() {
        let given = format!("5{}", ".".repeat(80));
        let mut snapshot = snapshot_from(&given, &given);
        snapshot.marks[0] = DigitSet::FULL; // on the given cell
        snapshot.marks[1] = [Digit::D1].into_iter().collect();
        let board = Board::from_snapshot(&snapshot).expect("consistent snapshot");
        assert!(board.marks(Position::new(0, 0)).is_empty());
        assert!(board.marks(Position::new(1, 0)).contains(Digit::D1));
    }
}
