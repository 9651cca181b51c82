//! # journalkv
//!
//! A minimal durable key-value store with:
//! - An append-only journal for durability
//! - Replay-based crash recovery
//! - A pluggable record codec (JSON lines by default)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                 Engine                  │
//! │    (in-memory map + mutation rules)     │
//! └────────────────────┬────────────────────┘
//!                      │ append / read_all
//! ┌────────────────────▼────────────────────┐
//! │                LogStore                 │
//! │ (append-only file, one entry per line)  │
//! └────────────────────┬────────────────────┘
//!                      │ encode / decode
//! ┌────────────────────▼────────────────────┐
//! │                 Codec                   │
//! │       (JsonCodec | BinaryCodec)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every mutation is appended to the journal before the in-memory map is
//! updated; on startup the engine replays the journal from the beginning to
//! rebuild the map. The journal is the sole source of truth.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod log;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JournalError, Result};
pub use config::{Config, SyncPolicy};
pub use codec::{BinaryCodec, Codec, JsonCodec};
pub use log::{LogEntry, LogStore, Operation};
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of journalkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
