//! Entry writer for the flattened dump.
//!
//! Each entry is `File - <path>: ` followed by the file content and a
//! single newline. Content is written as-is; nothing is escaped.

use crate::models::FileRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Appends entries to an underlying writer.
pub struct EntryWriter<W: Write> {
    inner: W,
    entries: usize,
}

impl EntryWriter<BufWriter<File>> {
    /// Create (or truncate) the output file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        debug!("Opened output file {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EntryWriter<W> {
    /// Wrap an existing writer.
    pub fn new(inner: W) -> Self {
        Self { inner, entries: 0 }
    }

    /// Write one entry.
    pub fn write_entry(&mut self, record: &FileRecord) -> Result<()> {
        write!(self.inner, "{}", header(&record.path)).context("Failed to write entry header")?;
        self.inner
            .write_all(record.content.as_bytes())
            .context("Failed to write entry content")?;
        self.inner
            .write_all(b"\n")
            .context("Failed to write entry separator")?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush().context("Failed to flush output")?;
        Ok(self.inner)
    }
}

/// Header line that precedes an entry's content.
pub fn header(path: &Path) -> String {
    format!("File - {}: ", path.display())
}
