//! The append-only game-history ledger.
//!
//! Every finished or abandoned session appends one [`GameRecord`] line to
//! the ledger. Aggregate statistics (totals, best time per difficulty,
//! highest score) are maintained on append so readers never rescan the
//! record list, mirroring how the record producers only supply values and
//! the ledger owns the aggregation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use ninegrid_generator::Difficulty;

use crate::kv::KeyValueStore;

const KEY_HISTORY_LIST: &str = "history_list";
const KEY_TOTAL_GAMES: &str = "total_games";
const KEY_COMPLETED_GAMES: &str = "completed_games";
const KEY_HIGHEST_SCORE: &str = "highest_score";

const fn best_time_key(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "best_time_easy",
        Difficulty::Medium => "best_time_medium",
        Difficulty::Hard => "best_time_hard",
    }
}

/// One finished or abandoned game session.
///
/// Records serialize as a single pipe-joined line:
/// `timestamp|difficulty|elapsed|score|mistakes|completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// Unix timestamp (seconds) when the session ended.
    pub timestamp: u64,
    /// The session difficulty.
    pub difficulty: Difficulty,
    /// Total play time in seconds.
    pub elapsed_seconds: u32,
    /// Final score.
    pub score: u32,
    /// Mistakes made.
    pub mistakes: u32,
    /// Whether the puzzle was finished correctly.
    pub completed: bool,
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}",
            self.timestamp,
            self.difficulty,
            self.elapsed_seconds,
            self.score,
            self.mistakes,
            self.completed,
        )
    }
}

/// Error returned when a history line does not parse as a [`GameRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("malformed history record")]
pub struct ParseRecordError;

impl FromStr for GameRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, ParseRecordError> {
        let mut parts = s.split('|');
        let mut next = || parts.next().ok_or(ParseRecordError);
        let timestamp = next()?.parse().map_err(|_| ParseRecordError)?;
        let difficulty = next()?.parse().map_err(|_| ParseRecordError)?;
        let elapsed_seconds = next()?.parse().map_err(|_| ParseRecordError)?;
        let score = next()?.parse().map_err(|_| ParseRecordError)?;
        let mistakes = next()?.parse().map_err(|_| ParseRecordError)?;
        let completed = match next()? {
            "true" => true,
            "false" => false,
            _ => return Err(ParseRecordError),
        };
        Ok(Self {
            timestamp,
            difficulty,
            elapsed_seconds,
            score,
            mistakes,
            completed,
        })
    }
}

/// Appends one record and folds it into the aggregates.
pub fn append<S: KeyValueStore + ?Sized>(store: &mut S, record: &GameRecord) {
    let mut list = store.get(KEY_HISTORY_LIST).unwrap_or_default().to_owned();
    if !list.is_empty() {
        list.push('\n');
    }
    list.push_str(&record.to_string());
    store.set(KEY_HISTORY_LIST, list);

    let total = total_games(store) + 1;
    store.set(KEY_TOTAL_GAMES, total.to_string());

    if record.completed {
        let completed = completed_games(store) + 1;
        store.set(KEY_COMPLETED_GAMES, completed.to_string());

        let beats_best =
            best_time(store, record.difficulty).is_none_or(|best| record.elapsed_seconds < best);
        if beats_best {
            store.set(
                best_time_key(record.difficulty),
                record.elapsed_seconds.to_string(),
            );
        }
    }

    if record.score > highest_score(store) {
        store.set(KEY_HIGHEST_SCORE, record.score.to_string());
    }

    log::debug!(
        "recorded {} game: completed={}, {} games total",
        record.difficulty,
        record.completed,
        total,
    );
}

/// Returns every stored record, newest first. Malformed lines are skipped.
#[must_use]
pub fn records<S: KeyValueStore + ?Sized>(store: &S) -> Vec<GameRecord> {
    let mut records: Vec<GameRecord> = store
        .get(KEY_HISTORY_LIST)
        .unwrap_or_default()
        .lines()
        .filter_map(|line| line.parse().ok())
        .collect();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records
}

/// Returns the total number of recorded games.
#[must_use]
pub fn total_games<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    read_u32(store, KEY_TOTAL_GAMES)
}

/// Returns the number of recorded completed games.
#[must_use]
pub fn completed_games<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    read_u32(store, KEY_COMPLETED_GAMES)
}

/// Returns the fastest completion in seconds for `difficulty`, if any game
/// at that difficulty has been completed.
#[must_use]
pub fn best_time<S: KeyValueStore + ?Sized>(store: &S, difficulty: Difficulty) -> Option<u32> {
    store
        .get(best_time_key(difficulty))
        .and_then(|text| text.parse().ok())
}

/// Returns the highest score ever recorded.
#[must_use]
pub fn highest_score<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    read_u32(store, KEY_HIGHEST_SCORE)
}

/// Returns the percentage of recorded games that were completed, 0 when no
/// games are recorded.
#[must_use]
pub fn completion_rate<S: KeyValueStore + ?Sized>(store: &S) -> f64 {
    let total = total_games(store);
    if total == 0 {
        return 0.0;
    }
    f64::from(completed_games(store)) / f64::from(total) * 100.0
}

/// Removes the ledger and its aggregates, leaving unrelated keys (such as a
/// saved game) intact.
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) {
    for key in [
        KEY_HISTORY_LIST,
        KEY_TOTAL_GAMES,
        KEY_COMPLETED_GAMES,
        KEY_HIGHEST_SCORE,
    ] {
        store.remove(key);
    }
    for difficulty in Difficulty::ALL {
        store.remove(best_time_key(difficulty));
    }
}

fn read_u32<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> u32 {
    store
        .get(key)
        .and_then(|text| text.parse().ok())
        .unwrap_or(0)
}
