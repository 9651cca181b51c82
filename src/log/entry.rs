//! Journal entry definitions
//!
//! Defines the structure of individual journal entries.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry in the journal
///
/// Immutable once appended. Entries are totally ordered by their position
/// in the log file, not by the timestamp field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO-8601 wall-clock time at append
    pub timestamp: String,

    /// The mutation that was acknowledged
    pub operation: Operation,

    /// The key the mutation applies to
    pub key: String,

    /// The value that was written
    pub value: Value,
}

/// Mutations that can be journaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    /// First write of a key
    Insert,

    /// Overwrite of an existing key
    Update,
}

impl LogEntry {
    /// Create an entry stamped with the current wall-clock time
    pub fn new(operation: Operation, key: impl Into<String>, value: Value) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            operation,
            key: key.into(),
            value,
        }
    }
}
