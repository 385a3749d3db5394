//! Storage backends for the save snapshot.
//!
//! The engine only knows the [`SnapshotStore`] trait: one record that can be
//! read whole and overwritten whole. [`FileStore`] keeps it in
//! `~/.heropath/save.json` (or under `$HEROPATH_HOME`), [`MemoryStore`] keeps
//! it in memory for tests and the simulator.

use crate::core::constants::{DATA_DIR_ENV, DATA_DIR_NAME, SAVE_FILE_NAME};
use crate::error::PersistenceError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A single-record key-value store holding the serialized snapshot.
pub trait SnapshotStore {
    /// Returns the stored record, or `None` if nothing was saved yet.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Replaces the stored record.
    fn write(&mut self, contents: &str) -> Result<(), PersistenceError>;
}

/// Get the data directory, creating it if needed.
///
/// `$HEROPATH_HOME` wins when set; otherwise `~/.heropath`.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .ok_or(PersistenceError::NoHomeDir)?
            .join(DATA_DIR_NAME),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in the data directory.
pub fn data_path(filename: &str) -> Result<PathBuf, PersistenceError> {
    Ok(data_dir()?.join(filename))
}

/// Snapshot kept as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default save location in the data directory.
    pub fn in_data_dir() -> Result<Self, PersistenceError> {
        Ok(Self::new(data_path(SAVE_FILE_NAME)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a sibling temp file and renames it over the save, so a
    /// crash mid-write never leaves a truncated snapshot.
    fn write(&mut self, contents: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryRecord {
    contents: Option<String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory store. Clones share the same record, so a test can keep a
/// handle after giving the store to an engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<MemoryRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut record) = store.record.lock() {
            record.contents = Some(contents.into());
        }
        store
    }

    pub fn contents(&self) -> Option<String> {
        self.record.lock().ok().and_then(|r| r.contents.clone())
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.record.lock().map(|r| r.writes).unwrap_or(0)
    }

    /// Makes every subsequent write fail with `StoreUnavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut record) = self.record.lock() {
            record.fail_writes = fail;
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        let record = self
            .record
            .lock()
            .map_err(|_| PersistenceError::StoreUnavailable)?;
        Ok(record.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), PersistenceError> {
        let mut record = self
            .record
            .lock()
            .map_err(|_| PersistenceError::StoreUnavailable)?;
        if record.fail_writes {
            return Err(PersistenceError::StoreUnavailable);
        }
        record.contents = Some(contents.to_string());
        record.writes += 1;
        Ok(())
    }
}
