//! Journal Module
//!
//! The append-only log that makes mutations durable.
//!
//! ## Responsibilities
//! - Append one encoded entry per line, in mutation order
//! - Replay every entry in file order for recovery
//! - Own the log file handle and the record codec
//!
//! ## File Format (default JsonCodec)
//! ```text
//! {"timestamp":"2026-08-06T10:15:04.123456Z","operation":"INSERT","key":"a","value":1}
//! {"timestamp":"2026-08-06T10:15:09.552110Z","operation":"UPDATE","key":"a","value":3}
//! ```
//!
//! File position is the total order over entries; the timestamp field is
//! informational only.

mod entry;
mod store;

pub use entry::{LogEntry, Operation};
pub use store::LogStore;
