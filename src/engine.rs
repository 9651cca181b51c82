//! Key-Value Engine
//!
//! The in-memory map plus the mutation rules that keep it consistent with
//! the journal.
//!
//! ## Responsibilities
//! - Rebuild the map by replaying the journal on startup
//! - Append to the journal before applying any mutation
//! - Reject duplicate inserts and updates of absent keys

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::log::{LogStore, Operation};

/// The key-value engine
///
/// Owns the journal store and the derived in-memory map. The journal is
/// the sole source of truth: the map always equals the result of replaying
/// the journal from an empty state, in order.
///
/// Mutations append to the journal before the map is updated. If the
/// process dies between the two steps, the next startup still replays the
/// entry, so no acknowledged mutation is ever lost.
pub struct Engine {
    /// Durable journal (exclusively owned)
    store: LogStore,

    /// Derived in-memory state
    map: HashMap<String, Value>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("path", &self.store.path())
            .field("keys", &self.map.len())
            .finish()
    }
}

impl Engine {
    /// Open an engine over a ready store, replaying the full journal
    ///
    /// Folds every entry into a fresh map in file order. This is the only
    /// recovery mechanism; there is no snapshotting.
    pub fn open(store: LogStore) -> Result<Self> {
        let entries = store.read_all()?;
        let mut map = HashMap::new();

        for entry in entries {
            match entry.operation {
                Operation::Insert | Operation::Update => {
                    map.insert(entry.key, entry.value);
                }
            }
        }

        info!(keys = map.len(), path = %store.path().display(), "recovered from journal");

        Ok(Self { store, map })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses a default config with the specified journal path.
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().log_path(path).build();
        Self::open(LogStore::open(config)?)
    }

    /// Insert a new key
    ///
    /// Fails with `DuplicateKey` if the key is already present; the journal
    /// and the map are left untouched in that case.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<()> {
        if self.map.contains_key(key) {
            return Err(JournalError::DuplicateKey(key.to_string()));
        }

        self.store.append(Operation::Insert, key, value.clone())?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    /// Overwrite an existing key
    ///
    /// Fails with `MissingKey` if the key is absent; nothing is appended.
    pub fn update(&mut self, key: &str, value: Value) -> Result<()> {
        if !self.map.contains_key(key) {
            return Err(JournalError::MissingKey(key.to_string()));
        }

        self.store.append(Operation::Update, key, value.clone())?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    /// Look up a key in memory
    ///
    /// Never touches the journal; an absent key is `None`, not an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map holds no keys
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Iterate over all key-value pairs (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.map.iter()
    }

    /// Path of the underlying journal file
    pub fn log_path(&self) -> &Path {
        self.store.path()
    }
}
