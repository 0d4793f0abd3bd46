//! Key-value persistence backends
//!
//! A board keeps each collection under one key whose value is the whole
//! collection serialized as a JSON array. Writes always replace the full
//! value; there is no delta or append mode.

use crate::error::{CrewboardError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, trace};

/// Directory under the board root holding config and stored keys
pub const BOARD_DIR: &str = ".crewboard";

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// What a store does when a stored collection cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptDataPolicy {
    /// Log a warning and start from the seed collection
    #[default]
    Fallback,
    /// Refuse to load and report the parse failure
    Error,
}

impl FromStr for CorruptDataPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fallback" => Ok(CorruptDataPolicy::Fallback),
            "error" => Ok(CorruptDataPolicy::Error),
            _ => Err(format!(
                "Invalid corrupt data policy: '{}'. Valid policies are: fallback, error",
                s
            )),
        }
    }
}

impl std::fmt::Display for CorruptDataPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorruptDataPolicy::Fallback => f.write_str("fallback"),
            CorruptDataPolicy::Error => f.write_str("error"),
        }
    }
}

/// One `<key>.json` file per key inside `<root>/.crewboard/`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at a board directory (the parent of `.crewboard`).
    pub fn new(root: &Path) -> Self {
        FileStorage {
            dir: root.join(BOARD_DIR),
        }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CrewboardError::Io(e)),
        }
    }

    /// Writes to a temp file in the same directory, then renames into place.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value)?;

        // rename does not overwrite on Windows
        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!(key, bytes = value.len(), "wrote stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                debug!(key, "removed stored value");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CrewboardError::Io(e)),
        }
    }
}

/// In-process storage for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, "memory set");
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
