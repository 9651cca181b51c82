//! Record Codec Module
//!
//! Converts journal entries to and from their durable line representation.
//!
//! ## Responsibilities
//! - Round-trip encoding: `decode(encode(e)) == e` for every entry
//! - Encoded text must never contain a newline (the store frames one
//!   entry per line)
//! - Report malformed input as `JournalError::Decode`
//!
//! The store holds its codec as a trait object, so alternative encodings
//! plug in without touching store or engine logic.

mod json;
mod binary;

pub use json::JsonCodec;
pub use binary::BinaryCodec;

use crate::error::Result;
use crate::log::LogEntry;

/// A reversible, single-line encoding of journal entries
pub trait Codec {
    /// Encode an entry into a single line of text (no embedded newlines)
    fn encode(&self, entry: &LogEntry) -> Result<String>;

    /// Decode one line of text back into an entry
    fn decode(&self, line: &str) -> Result<LogEntry>;
}
