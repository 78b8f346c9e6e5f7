//! Game-play state for Ninegrid Sudoku.
//!
//! [`Board`] is the mutable aggregate a session revolves around: givens,
//! player fills, candidate (pencil) marks, the selection cursor, and the
//! stored solution. Every mutation returns a [`PlayOutcome`] instead of
//! firing callbacks, so frontends branch on plain values. [`Session`] wraps
//! a board with the scoring, mistake-limit, hint-budget, and play-clock
//! bookkeeping.
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::Position;
//! use ninegrid_game::{PlayOutcome, Session};
//! use ninegrid_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
//! let mut session = Session::new(puzzle);
//!
//! // Nothing selected yet, so the move is reported back, not applied.
//! use ninegrid_core::Digit;
//! assert_eq!(session.place(Digit::D1), PlayOutcome::NoSelection);
//!
//! session.select(Position::new(0, 0));
//! let outcome = session.place(Digit::D1);
//! assert!(outcome.changes_board() || outcome.is_ignored());
//! ```

pub use self::{
    board::{Board, BoardError, BoardSnapshot},
    cell::CellState,
    outcome::PlayOutcome,
    session::{MAX_HINTS, MISTAKE_LIMIT, Session, SessionStatus},
};

mod board;
mod cell;
mod outcome;
mod session;
