//! Log Store
//!
//! Owns the journal file and the record codec; appends entries durably and
//! replays them in insertion order.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use super::{LogEntry, Operation};
use crate::codec::{Codec, JsonCodec};
use crate::config::{Config, SyncPolicy};
use crate::error::Result;

/// Append-only store for journal entries
///
/// A `LogStore` value is always ready: `open` either yields a store whose
/// file exists on disk or an error. Appends go through an exclusive
/// append-mode handle and take `&mut self`, so there is exactly one writer
/// per store. Reads open the file separately, observing everything that
/// has been flushed.
pub struct LogStore {
    /// Where the journal lives
    path: PathBuf,

    /// Exclusive append-mode handle
    writer: BufWriter<File>,

    /// How far each append is pushed toward stable storage
    sync_policy: SyncPolicy,

    /// Line encoding for entries
    codec: Box<dyn Codec>,
}

impl LogStore {
    /// Open or create the journal at `config.log_path` with the default
    /// JSON codec
    ///
    /// Idempotent: an existing file is opened as-is, never truncated.
    pub fn open(config: Config) -> Result<Self> {
        Self::open_with_codec(config, Box::new(JsonCodec))
    }

    /// Open or create the journal with a caller-chosen codec
    ///
    /// The codec must match whatever wrote the file: `read_all` fails on
    /// lines the codec cannot decode.
    pub fn open_with_codec(config: Config, codec: Box<dyn Codec>) -> Result<Self> {
        let path = config.log_path;
        let created = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        if created {
            info!(path = %path.display(), "initialized empty journal");
        }

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            sync_policy: config.sync_policy,
            codec,
        })
    }

    /// Append one entry for the given mutation
    ///
    /// The entry is stamped with the current wall-clock time, encoded, and
    /// written followed by a single newline. The write is flushed before
    /// returning; `SyncPolicy::EveryWrite` additionally fsyncs. The file
    /// grows by exactly one line.
    pub fn append(&mut self, operation: Operation, key: &str, value: Value) -> Result<()> {
        let entry = LogEntry::new(operation, key, value);
        let line = self.codec.encode(&entry)?;

        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        if self.sync_policy == SyncPolicy::EveryWrite {
            self.writer.get_ref().sync_data()?;
        }

        debug!(?operation, key, "appended journal entry");
        Ok(())
    }

    /// Read every entry in file order
    ///
    /// Returns an empty vec if the file is missing or empty. Any line that
    /// fails to decode aborts the read with `JournalError::Decode`; bad
    /// lines are never skipped or quarantined.
    pub fn read_all(&self) -> Result<Vec<LogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            entries.push(self.codec.decode(&line)?);
        }

        debug!(count = entries.len(), "read journal");
        Ok(entries)
    }

    /// Path of the journal file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
