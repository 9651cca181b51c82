//! Checksummed binary codec
//!
//! Alternative encoding: record fields are serialized with bincode,
//! prefixed with a CRC32 of the payload, and the whole frame is
//! base64-encoded so it still fits the one-entry-per-line framing.
//!
//! ## Frame Layout (before base64)
//! ```text
//! ┌─────────┬──────────────────────┐
//! │ CRC (4) │   bincode payload    │
//! └─────────┴──────────────────────┘
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::Codec;
use crate::error::{JournalError, Result};
use crate::log::{LogEntry, Operation};

/// CRC prefix size in bytes
const CRC_SIZE: usize = 4;

/// Bincode-friendly wire form of a journal entry
///
/// The opaque value travels as its JSON text: `serde_json::Value` cannot
/// be deserialized from a non-self-describing format like bincode.
#[derive(Serialize, Deserialize)]
struct BinaryRecord {
    timestamp: String,
    operation: Operation,
    key: String,
    value_json: String,
}

/// Encodes entries as base64-wrapped, CRC32-checked bincode frames
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn encode(&self, entry: &LogEntry) -> Result<String> {
        let record = BinaryRecord {
            timestamp: entry.timestamp.clone(),
            operation: entry.operation,
            key: entry.key.clone(),
            value_json: serde_json::to_string(&entry.value)
                .map_err(|e| JournalError::Serialization(e.to_string()))?,
        };

        let payload =
            bincode::serialize(&record).map_err(|e| JournalError::Serialization(e.to_string()))?;
        let crc = crc32fast::hash(&payload);

        let mut frame = Vec::with_capacity(CRC_SIZE + payload.len());
        frame.extend_from_slice(&crc.to_be_bytes());
        frame.extend_from_slice(&payload);

        Ok(BASE64.encode(frame))
    }

    fn decode(&self, line: &str) -> Result<LogEntry> {
        let frame = BASE64
            .decode(line)
            .map_err(|e| JournalError::Decode(format!("invalid base64 frame: {}", e)))?;

        if frame.len() < CRC_SIZE {
            return Err(JournalError::Decode(format!(
                "frame too short: {} bytes",
                frame.len()
            )));
        }

        let expected = u32::from_be_bytes([frame[0], frame[1], frame[2], frame[3]]);
        let payload = &frame[CRC_SIZE..];
        let actual = crc32fast::hash(payload);
        if actual != expected {
            return Err(JournalError::Decode(format!(
                "checksum mismatch: expected {:08x}, got {:08x}",
                expected, actual
            )));
        }

        let record: BinaryRecord =
            bincode::deserialize(payload).map_err(|e| JournalError::Decode(e.to_string()))?;
        let value = serde_json::from_str(&record.value_json)
            .map_err(|e| JournalError::Decode(e.to_string()))?;

        Ok(LogEntry {
            timestamp: record.timestamp,
            operation: record.operation,
            key: record.key,
            value,
        })
    }
}
