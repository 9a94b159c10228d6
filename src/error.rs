//! Error types for configuration checks and per-file skips.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration problems, detected before the output is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more root directories do not exist.
    #[error("root directories not found: {}", join_paths(.0))]
    MissingRoots(Vec<PathBuf>),
}

/// Why a discovered file produced no entry.
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("binary/not UTF-8")]
    NotUtf8,

    #[error("not a regular file")]
    NotRegularFile,

    #[error("output file")]
    OutputFile,

    #[error("path is not valid UTF-8")]
    PathNotUtf8,

    #[error("{0}")]
    Read(#[from] io::Error),
}

impl SkipReason {
    /// Read failures are reported as errors, everything else as a plain skip.
    pub fn is_error(&self) -> bool {
        matches!(self, SkipReason::Read(_) | SkipReason::PathNotUtf8)
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("'{}'", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
