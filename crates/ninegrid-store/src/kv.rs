//! Flat string key/value stores.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

/// A flat string-to-string key/value store.
///
/// This is the whole persistence boundary: the save codec and the history
/// ledger read and write plain string fields and never see where they live.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key` and its value, if present.
    fn remove(&mut self, key: &str);
}

/// An in-memory [`KeyValueStore`], for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Error returned when a [`FileStore`] cannot be read or written.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[display("store I/O error: {_0}")]
    Io(io::Error),
    /// The backing file does not contain a valid JSON object of strings.
    #[display("store file is not valid JSON: {_0}")]
    Json(serde_json::Error),
}

/// A [`KeyValueStore`] persisted as a JSON object in a single file.
///
/// Mutations only touch memory; call [`flush`](Self::flush) to write the
/// store back to disk. A missing file opens as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing entries if the file
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or does not
    /// parse as a JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        log::debug!("opened store {} with {} entries", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Writes the current entries back to the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn flush(&self) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
