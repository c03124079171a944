//! Storage layer for the time log.
//!
//! The full entry sequence is persisted as one versioned JSON document at
//! `<data-dir>/time_entries.json` and rewritten wholesale on every save:
//!
//! ```json
//! { "version": 1, "entries": [ { "start": "...", "end": "...", "label": "..." } ] }
//! ```
//!
//! # Crash safety
//!
//! Saves go through a temp file in the same directory followed by a rename,
//! so a crash mid-write leaves the previous document intact.
//!
//! # Locking
//!
//! Opening a [`Store`] takes an advisory exclusive lock on
//! `<data-dir>/.lock` for the lifetime of the invocation. A second
//! invocation fails fast with [`StoreError::Locked`] instead of racing the
//! whole-file overwrite, where the last writer would silently win.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use tlog_core::TimeEntry;

/// Current on-disk format version.
pub const STORE_VERSION: u32 = 1;

/// File name of the entry store within the data directory.
const ENTRIES_FILE: &str = "time_entries.json";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another invocation holds the data directory lock.
    #[error("the time log data directory is locked by another invocation")]
    Locked,

    /// The persisted document is unreadable or malformed. History is never
    /// silently reset; the file is left as found.
    #[error("stored entries at {} are corrupt", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The persisted document was written by a newer version.
    #[error("stored entries use format version {found}, but only versions up to {supported} are supported")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Entries could not be encoded for writing.
    #[error("failed to encode entries")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// On-disk document shape.
#[derive(Debug, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    entries: Vec<TimeEntry>,
}

/// Serialize-only view so saving borrows the ledger's entries.
#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    version: u32,
    entries: &'a [TimeEntry],
}

/// Exclusive handle on the persisted entry sequence.
///
/// Dropping the store releases the advisory lock.
#[derive(Debug)]
pub struct Store {
    entries_path: PathBuf,
    _lock: File,
}

impl Store {
    /// Opens the store in `data_dir`, creating the directory if missing.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir)?;
        let lock = File::create(data_dir.join(".lock"))?;
        lock.try_lock_exclusive().map_err(|_| StoreError::Locked)?;
        Ok(Self {
            entries_path: data_dir.join(ENTRIES_FILE),
            _lock: lock,
        })
    }

    /// Path of the entries file backing this store.
    pub fn path(&self) -> &Path {
        &self.entries_path
    }

    /// Loads the persisted sequence, or `None` when nothing was saved yet.
    pub fn load(&self) -> Result<Option<Vec<TimeEntry>>, StoreError> {
        let content = match fs::read_to_string(&self.entries_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document: StoreDocument =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.entries_path.clone(),
                source,
            })?;
        if document.version > STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: document.version,
                supported: STORE_VERSION,
            });
        }

        tracing::debug!(
            path = %self.entries_path.display(),
            count = document.entries.len(),
            "loaded entries"
        );
        Ok(Some(document.entries))
    }

    /// Saves the full sequence, replacing the previous document atomically.
    pub fn save(&self, entries: &[TimeEntry]) -> Result<(), StoreError> {
        let document = StoreDocumentRef {
            version: STORE_VERSION,
            entries,
        };
        let json = serde_json::to_string_pretty(&document).map_err(StoreError::Encode)?;

        let dir = self
            .entries_path
            .parent()
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(&self.entries_path)
            .map_err(|e| StoreError::Io(e.error))?;

        tracing::debug!(
            path = %self.entries_path.display(),
            count = entries.len(),
            "saved entries"
        );
        Ok(())
    }
}
