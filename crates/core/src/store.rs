//! String key-value state storage
//!
//! This module provides:
//! - StateStore trait: the storage surface widgets persist through
//! - StateStoreExt: typed JSON accessors layered over the string surface
//! - MemoryStore: ephemeral in-memory implementation
//! - JsonFileStore: single-file JSON implementation
//!
//! Widgets hold their store by value and persist on every mutation, so a
//! reloaded widget over the same store observes the previous session's state.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// StateStore
// ============================================================================

/// Storage surface for widget state
///
/// Keys and values are plain strings. Typed access goes through
/// [`StateStoreExt`].
pub trait StateStore {
    /// Get the value stored under a key
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key and its value
    ///
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ============================================================================
// StateStoreExt
// ============================================================================

/// Typed JSON accessors for any [`StateStore`]
///
/// Serialization failures surface as [`crate::Error::Serialization`];
/// an absent key reads as `Ok(None)`.
pub trait StateStoreExt: StateStore {
    /// Read and deserialize the value stored under a key
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store a value under a key
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory state store
///
/// Holds nothing across process restarts. Used for tests and for sessions
/// that do not opt into persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// JsonFileStore
// ============================================================================

/// File-backed state store
///
/// The whole key space is one JSON object in one file, rewritten on every
/// mutation. A missing file opens as an empty store; an unreadable file is
/// logged and treated as empty rather than failing the session.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open a store backed by the given file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable state file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(JsonFileStore { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
