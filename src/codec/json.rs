//! JSON line codec
//!
//! The default encoding: one JSON object per line, shaped as
//! `{"timestamp": "...", "operation": "INSERT"|"UPDATE", "key": "...", "value": ...}`.

use super::Codec;
use crate::error::{JournalError, Result};
use crate::log::LogEntry;

/// Encodes entries as single-line JSON objects
///
/// serde_json escapes control characters inside strings, so the encoded
/// text can never contain a raw newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, entry: &LogEntry) -> Result<String> {
        serde_json::to_string(entry).map_err(|e| JournalError::Serialization(e.to_string()))
    }

    fn decode(&self, line: &str) -> Result<LogEntry> {
        serde_json::from_str(line).map_err(|e| JournalError::Decode(e.to_string()))
    }
}
