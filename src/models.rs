//! Data models for a collection run.
//!
//! A run produces one `FileOutcome` per discovered file; outcomes are
//! folded into a `RunSummary` as they happen and never stored.

use crate::error::SkipReason;
use std::fmt;
use std::path::PathBuf;

/// A file that was read and decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as discovered (root joined with the relative path).
    pub path: PathBuf,
    /// Decoded UTF-8 content, unmodified.
    pub content: String,
}

/// Result of processing one discovered file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file becomes an entry in the output.
    Appended(FileRecord),
    /// The file is left out of the output.
    Skipped { path: PathBuf, reason: SkipReason },
}

impl FileOutcome {
    /// Path of the file this outcome refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Appended(record) => &record.path,
            FileOutcome::Skipped { path, .. } => path,
        }
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Output file the entries were written to.
    pub output: PathBuf,
    /// Files written as entries.
    pub appended: usize,
    /// Files skipped because they were not valid UTF-8.
    pub skipped_binary: usize,
    /// Files skipped for any other non-error reason.
    pub skipped_other: usize,
    /// Files that failed to read.
    pub errored: usize,
    /// Total content bytes written, headers excluded.
    pub content_bytes: u64,
}

impl RunSummary {
    /// Creates an empty summary for the given output path.
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }

    /// Fold one outcome into the counters.
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Appended(record) => {
                self.appended += 1;
                self.content_bytes += record.content.len() as u64;
            }
            FileOutcome::Skipped { reason, .. } => match reason {
                SkipReason::NotUtf8 => self.skipped_binary += 1,
                SkipReason::Read(_) | SkipReason::PathNotUtf8 => self.errored += 1,
                SkipReason::NotRegularFile | SkipReason::OutputFile => self.skipped_other += 1,
            },
        }
    }

    /// Total number of files seen during the run.
    pub fn total(&self) -> usize {
        self.appended + self.skipped_binary + self.skipped_other + self.errored
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files seen: {} appended, {} binary, {} other skipped, {} errors ({} bytes)",
            self.total(),
            self.appended,
            self.skipped_binary,
            self.skipped_other,
            self.errored,
            self.content_bytes
        )
    }
}
