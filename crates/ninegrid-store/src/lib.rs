//! Persistence for Ninegrid Sudoku: saved games and the history ledger.
//!
//! Everything persists through the [`KeyValueStore`] trait — a flat
//! string-to-string map in the mold of a mobile preferences store — with an
//! in-memory implementation for tests and a JSON-file-backed one for
//! applications. On top of it sit two independent record layouts:
//!
//! - [`save`]: the single saved-game slot (board grids, pencil marks,
//!   counters, and mode flags), restored all-or-nothing.
//! - [`history`]: the append-only ledger of finished sessions plus its
//!   maintained aggregates (totals, best times, highest score).
//!
//! # Examples
//!
//! ```
//! use ninegrid_game::Session;
//! use ninegrid_generator::{Difficulty, PuzzleGenerator};
//! use ninegrid_store::{MemoryStore, load_session, save_session};
//!
//! let session = Session::new(PuzzleGenerator::new().generate(Difficulty::Easy));
//! let mut store = MemoryStore::new();
//!
//! save_session(&session, &mut store);
//! let restored = load_session(&store).expect("a save was just written");
//! assert_eq!(restored.difficulty(), Difficulty::Easy);
//! ```

pub mod history;
pub mod kv;
pub mod save;

pub use self::{
    history::{GameRecord, ParseRecordError},
    kv::{FileStore, KeyValueStore, MemoryStore, StoreError},
    save::{SaveError, clear_saved_game, has_saved_game, load_session, save_session},
};
