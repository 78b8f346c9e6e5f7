//! Session bookkeeping around a board: score, mistakes, hints, time.

use ninegrid_core::{Digit, Position};
use ninegrid_generator::{Difficulty, GeneratedPuzzle};

use crate::{Board, PlayOutcome};

/// Maximum hints available per session.
pub const MAX_HINTS: u32 = 3;

/// Number of mistakes that ends a session in failure.
pub const MISTAKE_LIMIT: u32 = 3;

/// Whether a session is still playable, and if not, how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    /// The puzzle is still being played.
    InProgress,
    /// The puzzle was finished correctly.
    Completed,
    /// The mistake limit was reached.
    Failed,
}

/// A play session: a [`Board`] plus the bookkeeping around it.
///
/// The session routes all mutations to the board and keeps score, mistake,
/// hint, and elapsed-time counters in step with the outcomes. Once the
/// session leaves [`SessionStatus::InProgress`], every further mutation is
/// ignored.
///
/// Correct placements score by a time-decaying curve that bottoms out at
/// 200 points; hints reveal digits without scoring. An external timer is
/// expected to call [`tick_second`](Self::tick_second) once per second.
///
/// # Example
///
/// ```
/// use ninegrid_game::Session;
/// use ninegrid_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
/// let mut session = Session::new(puzzle);
/// assert!(session.status().is_in_progress());
/// assert_eq!(session.hints_remaining(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    seconds_elapsed: u32,
    score: u32,
    mistakes: u32,
    hints_used: u32,
    status: SessionStatus,
}

impl Session {
    /// Starts a fresh session on a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::from_parts(Board::new(puzzle), 0, 0, 0, 0)
    }

    /// Rebuilds a session from restored state.
    ///
    /// The status is re-derived: a completed board is
    /// [`Completed`](SessionStatus::Completed), a mistake count at or above
    /// [`MISTAKE_LIMIT`] is [`Failed`](SessionStatus::Failed), anything else
    /// is in progress.
    #[must_use]
    pub fn from_parts(
        board: Board,
        seconds_elapsed: u32,
        score: u32,
        mistakes: u32,
        hints_used: u32,
    ) -> Self {
        let status = if board.is_completed() {
            SessionStatus::Completed
        } else if mistakes >= MISTAKE_LIMIT {
            SessionStatus::Failed
        } else {
            SessionStatus::InProgress
        };
        Self {
            board,
            seconds_elapsed,
            score,
            mistakes,
            hints_used,
            status,
        }
    }

    /// Returns the board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of mistakes made so far.
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Returns the number of hints consumed.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns how many hints are still available.
    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        MAX_HINTS.saturating_sub(self.hints_used)
    }

    /// Returns the elapsed play time in seconds.
    #[must_use]
    pub fn seconds_elapsed(&self) -> u32 {
        self.seconds_elapsed
    }

    /// Returns the session difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.board.difficulty()
    }

    /// Advances the play clock by one second. Does nothing once the session
    /// is over.
    pub fn tick_second(&mut self) {
        if self.status.is_in_progress() {
            self.seconds_elapsed += 1;
        }
    }

    /// Selects the cell at `pos`.
    pub fn select(&mut self, pos: Position) {
        self.board.select(pos);
    }

    /// Switches manual mark entry on or off.
    pub fn set_mark_mode(&mut self, enabled: bool) {
        self.board.set_mark_mode(enabled);
    }

    /// Switches automatic mark maintenance on or off.
    pub fn set_auto_marks(&mut self, enabled: bool) {
        self.board.set_auto_marks(enabled);
    }

    /// Enters `digit` at the selected cell, scoring correct placements and
    /// counting mistakes.
    ///
    /// Reaching [`MISTAKE_LIMIT`] fails the session; completing the board
    /// ends it. Both transitions are visible in the returned outcome and in
    /// [`status`](Self::status).
    pub fn place(&mut self, digit: Digit) -> PlayOutcome {
        if !self.status.is_in_progress() {
            return PlayOutcome::Ignored;
        }
        let outcome = self.board.place(digit);
        match outcome {
            PlayOutcome::Correct => {
                self.score += placement_score(self.seconds_elapsed);
            }
            PlayOutcome::Completed => {
                self.score += placement_score(self.seconds_elapsed);
                self.status = SessionStatus::Completed;
            }
            PlayOutcome::Mistake => {
                self.mistakes += 1;
                if self.mistakes >= MISTAKE_LIMIT {
                    self.status = SessionStatus::Failed;
                }
            }
            _ => {}
        }
        outcome
    }

    /// Clears the player-filled digit at the selected cell.
    pub fn erase(&mut self) -> PlayOutcome {
        if !self.status.is_in_progress() {
            return PlayOutcome::Ignored;
        }
        self.board.erase()
    }

    /// Reveals the solution digit at the selected cell, consuming one hint.
    ///
    /// Exhausted budgets and misses (no selection, decided cell) consume
    /// nothing; only a reveal that actually changed the board counts.
    pub fn hint(&mut self) -> PlayOutcome {
        if !self.status.is_in_progress() || self.hints_used >= MAX_HINTS {
            return PlayOutcome::Ignored;
        }
        let outcome = self.board.hint();
        if outcome.changes_board() {
            self.hints_used += 1;
        }
        if outcome.is_completed() {
            self.status = SessionStatus::Completed;
        }
        outcome
    }
}

/// Score awarded for a correct placement after `seconds_elapsed` seconds:
/// `max(200, (6000 - 1000 * ln(1 + t / 10)) / 3)`, truncated toward zero
/// before the floor is applied.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn placement_score(seconds_elapsed: u32) -> u32 {
    let decayed = ((6000.0 - 1000.0 * (f64::from(seconds_elapsed) / 10.0).ln_1p()) / 3.0) as i64;
    decayed.max(200) as u32
}

#[cfg(test)]
mod tests {
    use ninegrid_core::{DigitGrid, DigitSet};

    use crate::BoardSnapshot;

    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    /// A board with a given 5 at the corner and everything else open.
    fn test_session() -> Session {
        let given: DigitGrid = format!("5{}", ".".repeat(80)).parse().expect("valid grid");
        let snapshot = BoardSnapshot {
            given: given.clone(),
            current: given,
            solution: SOLVED.parse().expect("valid grid"),
            marks: [DigitSet::EMPTY; 81],
            difficulty: Difficulty::Medium,
            mark_mode: false,
            auto_marks: false,
        };
        let board = Board::from_snapshot(&snapshot).expect("consistent snapshot");
        Session::from_parts(board, 0, 0, 0, 0)
    }

    #[test]
    fn test_correct_placement_scores() {
        let mut session = test_session();
        session.select(Position::new(1, 0)); // solution digit is 3
        assert_eq!(session.place(Digit::D3), PlayOutcome::Correct);
        assert_eq!(session.score(), 2000);
        assert_eq!(session.mistakes(), 0);
    }

    #[test]
    fn test_score_decays_with_time_and_bottoms_out() {
        assert_eq!(placement_score(0), 2000);
        assert!(placement_score(60) < placement_score(0));
        // Far into a session the curve is clamped at the floor.
        assert_eq!(placement_score(3_000_000), 200);
    }

    #[test]
    fn test_third_mistake_fails_the_session() {
        let mut session = test_session();
        session.select(Position::new(1, 0)); // solution digit is 3
        for expected_mistakes in 1..=2 {
            assert_eq!(session.place(Digit::D9), PlayOutcome::Mistake);
            assert_eq!(session.mistakes(), expected_mistakes);
            assert!(session.status().is_in_progress());
            assert_eq!(session.erase(), PlayOutcome::Erased);
        }
        assert_eq!(session.place(Digit::D9), PlayOutcome::Mistake);
        assert_eq!(session.mistakes(), 3);
        assert!(session.status().is_failed());

        // A failed session absorbs everything.
        assert_eq!(session.erase(), PlayOutcome::Ignored);
        assert_eq!(session.place(Digit::D3), PlayOutcome::Ignored);
        assert_eq!(session.hint(), PlayOutcome::Ignored);
    }

    #[test]
    fn test_hint_budget() {
        let mut session = test_session();
        // Misses consume nothing: no selection yet.
        assert_eq!(session.hint(), PlayOutcome::NoSelection);
        assert_eq!(session.hints_used(), 0);

        for (i, pos) in [Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
            .into_iter()
            .enumerate()
        {
            session.select(pos);
            assert_eq!(session.hint(), PlayOutcome::Revealed);
            assert_eq!(session.hints_used(), u32::try_from(i).unwrap_or_default() + 1);
        }
        assert_eq!(session.hints_remaining(), 0);

        session.select(Position::new(4, 0));
        assert_eq!(session.hint(), PlayOutcome::Ignored);
        assert_eq!(session.hints_used(), MAX_HINTS);
    }

    #[test]
    fn test_hint_scores_nothing() {
        let mut session = test_session();
        session.select(Position::new(1, 0));
        assert_eq!(session.hint(), PlayOutcome::Revealed);
        assert_eq!(session.score(), 0);
        assert_eq!(session.mistakes(), 0);
    }

    #[test]
    fn test_completion_ends_the_session() {
        let given: DigitGrid = ".".repeat(81).parse().expect("valid grid");
        let current: DigitGrid = format!(".{}", &SOLVED[1..]).parse().expect("valid grid");
        let snapshot = BoardSnapshot {
            given,
            current,
            solution: SOLVED.parse().expect("valid grid"),
            marks: [DigitSet::EMPTY; 81],
            difficulty: Difficulty::Easy,
            mark_mode: false,
            auto_marks: false,
        };
        let board = Board::from_snapshot(&snapshot).expect("consistent snapshot");
        let mut session = Session::from_parts(board, 120, 500, 1, 0);

        session.select(Position::new(0, 0));
        assert_eq!(session.place(Digit::D5), PlayOutcome::Completed);
        assert!(session.status().is_completed());
        assert_eq!(session.score(), 500 + placement_score(120));

        // The clock stops with the session.
        session.tick_second();
        assert_eq!(session.seconds_elapsed(), 120);
    }

    #[test]
    fn test_from_parts_derives_status() {
        let session = test_session();
        assert!(session.status().is_in_progress());

        let board = session.board().clone();
        let failed = Session::from_parts(board, 10, 0, MISTAKE_LIMIT, 0);
        assert!(failed.status().is_failed());
    }

    #[test]
    fn test_tick_advances_only_in_progress() {
        let mut session = test_session();
        session.tick_second();
        session.tick_second();
        assert_eq!(session.seconds_elapsed(), 2);
    }
}
