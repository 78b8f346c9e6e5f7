//! The saved-game codec.
//!
//! One game session persists as a flat set of string fields: three
//! 81-element comma-separated integer lists for the current grid, the
//! givens, and the solution; an 81-element list of 9-character binary
//! strings for the pencil marks; and scalar counters plus mode flags. The
//! `gameExists` sentinel marks a record as present.
//!
//! Loading is all-or-nothing: a missing sentinel, a missing or malformed
//! board list, or an inconsistent board aborts the restore with a
//! [`SaveError`] and touches nothing.

use std::fmt::Write as _;

use ninegrid_core::{Digit, DigitGrid, DigitSet, Position};
use ninegrid_game::{Board, BoardError, BoardSnapshot, Session};
use ninegrid_generator::Difficulty;

use crate::kv::KeyValueStore;

const KEY_CURRENT_BOARD: &str = "currentBoard";
const KEY_INITIAL_BOARD: &str = "initialBoard";
const KEY_SOLUTION: &str = "solution";
const KEY_PENCIL_MARKS: &str = "pencilMarks";
const KEY_SECONDS_ELAPSED: &str = "secondsElapsed";
const KEY_SCORE: &str = "score";
const KEY_MISTAKES: &str = "mistakes";
const KEY_HINTS_USED: &str = "hintsUsed";
const KEY_DIFFICULTY: &str = "difficulty";
const KEY_GAME_MODE: &str = "gameMode";
const KEY_PENCIL_MODE: &str = "pencilMode";
const KEY_FAST_PENCIL_MODE: &str = "fastPencilMode";
const KEY_GAME_EXISTS: &str = "gameExists";

/// Error returned when a saved game cannot be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SaveError {
    /// The store holds no saved game.
    #[display("no saved game")]
    NoSavedGame,
    /// A required field is absent.
    #[display("saved game is missing field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// A field is present but does not decode.
    #[display("saved game field `{field}` is malformed")]
    MalformedField {
        /// Name of the undecodable field.
        field: &'static str,
    },
    /// The decoded grids do not describe a valid board.
    #[display("saved board state is invalid: {_0}")]
    Board(BoardError),
}

impl From<BoardError> for SaveError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

/// Returns `true` when the store holds a saved game.
#[must_use]
pub fn has_saved_game<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store.get(KEY_GAME_EXISTS) == Some("true")
}

/// Writes `session` into the store, replacing any previous saved game.
pub fn save_session<S: KeyValueStore + ?Sized>(session: &Session, store: &mut S) {
    let snapshot = session.board().snapshot();
    store.set(KEY_CURRENT_BOARD, encode_grid(&snapshot.current));
    store.set(KEY_INITIAL_BOARD, encode_grid(&snapshot.given));
    store.set(KEY_SOLUTION, encode_grid(&snapshot.solution));
    store.set(KEY_PENCIL_MARKS, encode_marks(&snapshot.marks));
    store.set(KEY_SECONDS_ELAPSED, session.seconds_elapsed().to_string());
    store.set(KEY_SCORE, session.score().to_string());
    store.set(KEY_MISTAKES, session.mistakes().to_string());
    store.set(KEY_HINTS_USED, session.hints_used().to_string());
    store.set(KEY_DIFFICULTY, snapshot.difficulty.code().to_string());
    store.set(KEY_GAME_MODE, snapshot.difficulty.mode_name().to_owned());
    store.set(KEY_PENCIL_MODE, snapshot.mark_mode.to_string());
    store.set(KEY_FAST_PENCIL_MODE, snapshot.auto_marks.to_string());
    store.set(KEY_GAME_EXISTS, "true".to_owned());
    log::debug!("saved {} game state", snapshot.difficulty);
}

/// Restores the saved session from the store.
///
/// # Errors
///
/// Returns [`SaveError::NoSavedGame`] when no save is present, and a
/// decoding or consistency error otherwise; the store is never mutated.
pub fn load_session<S: KeyValueStore + ?Sized>(store: &S) -> Result<Session, SaveError> {
    if !has_saved_game(store) {
        return Err(SaveError::NoSavedGame);
    }

    let current = decode_grid(require_list(store, KEY_CURRENT_BOARD)?, KEY_CURRENT_BOARD)?;
    let given = decode_grid(require_list(store, KEY_INITIAL_BOARD)?, KEY_INITIAL_BOARD)?;
    let solution = decode_grid(require_list(store, KEY_SOLUTION)?, KEY_SOLUTION)?;
    let marks = decode_marks(store.get(KEY_PENCIL_MARKS));

    let seconds_elapsed = decode_u32(store, KEY_SECONDS_ELAPSED)?;
    let score = decode_u32(store, KEY_SCORE)?;
    let mistakes = decode_u32(store, KEY_MISTAKES)?;
    let hints_used = decode_u32(store, KEY_HINTS_USED)?;

    // The integer `difficulty` field is written for compatibility but the
    // mode name is authoritative; unknown names fall back to Easy.
    let difficulty = store
        .get(KEY_GAME_MODE)
        .and_then(|name| name.parse().ok())
        .unwrap_or(Difficulty::Easy);

    let snapshot = BoardSnapshot {
        given,
        current,
        solution,
        marks,
        difficulty,
        mark_mode: decode_bool(store, KEY_PENCIL_MODE),
        auto_marks: decode_bool(store, KEY_FAST_PENCIL_MODE),
    };
    let board = Board::from_snapshot(&snapshot)?;
    log::debug!("restored {difficulty} game state");
    Ok(Session::from_parts(
        board,
        seconds_elapsed,
        score,
        mistakes,
        hints_used,
    ))
}

/// Removes the saved game, leaving other records (e.g. history) intact.
pub fn clear_saved_game<S: KeyValueStore + ?Sized>(store: &mut S) {
    for key in [
        KEY_CURRENT_BOARD,
        KEY_INITIAL_BOARD,
        KEY_SOLUTION,
        KEY_PENCIL_MARKS,
        KEY_SECONDS_ELAPSED,
        KEY_SCORE,
        KEY_MISTAKES,
        KEY_HINTS_USED,
        KEY_DIFFICULTY,
        KEY_GAME_MODE,
        KEY_PENCIL_MODE,
        KEY_FAST_PENCIL_MODE,
        KEY_GAME_EXISTS,
    ] {
        store.remove(key);
    }
}

fn require_list<'a, S: KeyValueStore + ?Sized>(
    store: &'a S,
    field: &'static str,
) -> Result<&'a str, SaveError> {
    match store.get(field) {
        None => Err(SaveError::MissingField { field }),
        Some(text) if text.is_empty() => Err(SaveError::MalformedField { field }),
        Some(text) => Ok(text),
    }
}

/// 81 comma-separated integers 0-9 in row-major order, `0` meaning empty.
/// A trailing comma is always written and accepted.
fn encode_grid(grid: &DigitGrid) -> String {
    let mut out = String::with_capacity(162);
    for pos in Position::ALL {
        let value = grid[pos].map_or(0, Digit::value);
        let _ = write!(out, "{value},");
    }
    out
}

fn decode_grid(text: &str, field: &'static str) -> Result<DigitGrid, SaveError> {
    let mut grid = DigitGrid::new();
    let mut segments = text.split(',');
    for pos in Position::ALL {
        let cell = segments
            .next()
            .and_then(|segment| segment.trim().parse::<u8>().ok())
            .ok_or(SaveError::MalformedField { field })?;
        match cell {
            0 => grid.set(pos, None),
            1..=9 => grid.set(pos, Digit::try_from_value(cell)),
            _ => return Err(SaveError::MalformedField { field }),
        }
    }
    Ok(grid)
}

/// 81 comma-separated 9-character binary strings; character `k - 1` is `1`
/// exactly when digit `k` is marked.
fn encode_marks(marks: &[DigitSet; 81]) -> String {
    let mut out = String::with_capacity(81 * 10);
    for set in marks {
        for digit in Digit::ALL {
            out.push(if set.contains(digit) { '1' } else { '0' });
        }
        out.push(',');
    }
    out
}

/// Pencil marks are decoded leniently: an absent field, short list, or
/// short cell string just leaves the remaining marks unset.
fn decode_marks(text: Option<&str>) -> [DigitSet; 81] {
    let mut marks = [DigitSet::EMPTY; 81];
    let Some(text) = text else {
        return marks;
    };
    for (slot, segment) in marks.iter_mut().zip(text.split(',')) {
        let mut set = DigitSet::EMPTY;
        for (ch, digit) in segment.chars().zip(Digit::ALL) {
            if ch == '1' {
                set.insert(digit);
            }
        }
        *slot = set;
    }
    marks
}

fn decode_u32<S: KeyValueStore + ?Sized>(store: &S, field: &'static str) -> Result<u32, SaveError> {
    match store.get(field) {
        None => Ok(0),
        Some(text) => text
            .parse()
            .map_err(|_| SaveError::MalformedField { field }),
    }
}

fn decode_bool<S: KeyValueStore + ?Sized>(store: &S, field: &'static str) -> bool {
    store.get(field) == Some("true")
}
