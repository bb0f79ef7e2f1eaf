// SPDX-License-Identifier: MPL-2.0
//! Client-side key/value storage, persisted in CBOR format.
//!
//! This is the counterpart of browser local storage: a flat map of string
//! keys to string values that survives restarts. Every write is flushed to
//! `storage.cbor` in the application data directory. A storage created with
//! [`LocalStorage::in_memory`] never touches the disk.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()` with explicit directory override
//! 2. Set `PORTAL_CLIENT_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalStorage {
    entries: BTreeMap<String, String>,
    /// Backing file; `None` keeps everything in memory.
    path: Option<PathBuf>,
}

impl LocalStorage {
    /// Storage that is never persisted.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads storage from the default location.
    ///
    /// Returns a tuple of (storage, optional_warning). If loading fails, the
    /// storage starts empty and the warning explains what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads storage from a custom directory, falling back to the default
    /// path resolution when `base_dir` is `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::storage_file_path_with_override(base_dir) else {
            return (
                Self::in_memory(),
                Some("data directory could not be determined, storage is not persisted".into()),
            );
        };

        if !path.exists() {
            return (Self::empty_at(path), None);
        }

        match Self::read_entries(&path) {
            Ok(entries) => (
                Self {
                    entries,
                    path: Some(path),
                },
                None,
            ),
            Err(err) => {
                let warning = format!("could not read {}: {err}", path.display());
                (Self::empty_at(path), Some(warning))
            }
        }
    }

    fn empty_at(path: PathBuf) -> Self {
        Self {
            entries: BTreeMap::new(),
            path: Some(path),
        }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    fn storage_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STORAGE_FILE);
            path
        })
    }

    /// Path of the backing file, if persisted.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key` and flushes to disk.
    ///
    /// The in-memory value is updated even when the flush fails.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), value.into());
        self.flush()
    }

    /// Deletes `key` and flushes to disk. Removing a missing key is not an
    /// error.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.entries, writer)?;
        Ok(())
    }
}
