//! Incremental sink: one record in, one flushed JSONL line out.
//!
//! A crawl can run for hours against a flaky network; buffering records and
//! writing at the end would lose everything on a late failure. Each append
//! is serialized, written as a single line, and flushed before returning,
//! so a crash after N records leaves exactly N well-formed lines.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::FileRecord;

/// Append-only destination for records. A write failure is fatal to the
/// crawl; there is no in-memory fallback.
pub trait RecordSink {
    fn append(&mut self, record: &FileRecord) -> Result<()>;
}

/// File-backed sink: one JSON object per line, opened for append so reruns
/// extend the corpus instead of truncating it.
pub struct JsonlSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl JsonlSink {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open output file {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for JsonlSink {
    fn append(&mut self, record: &FileRecord) -> Result<()> {
        // Serialize fully before touching the file: a serializer error must
        // not leave a partial line behind.
        let mut line = serde_json::to_string(record).context("serialize record")?;
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .with_context(|| format!("write record to {}", self.path.display()))?;
        self.writer
            .flush()
            .with_context(|| format!("flush {}", self.path.display()))?;
        Ok(())
    }
}
