//! Recursive traversal of a single root directory.
//!
//! Entries come out in filesystem enumeration order (no sorting), depth
//! first. Directory symlinks are not descended; file symlinks are handed
//! to the reader like regular files.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// What kind of filesystem object a scanned entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file, a symlink to one, or a dangling symlink.
    File,
    /// FIFO, socket, device or other special file.
    Special,
}

/// A file discovered under a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Root joined with the path relative to it.
    pub path: PathBuf,
    /// Kind of object at `path`.
    pub kind: EntryKind,
}

/// Walks one root directory.
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    /// Create a scanner for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root this scanner walks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yield every non-directory entry under the root.
    ///
    /// A root that is not a directory yields nothing. A directory that
    /// cannot be read yields an `Err`; callers treat that as fatal.
    pub fn files(&self) -> impl Iterator<Item = Result<ScannedFile>> + '_ {
        let walk = if self.root.is_dir() {
            debug!("Walking {}", self.root.display());
            Some(WalkDir::new(&self.root).follow_links(false).into_iter())
        } else {
            warn!("Root '{}' is not a directory, nothing to collect", self.root.display());
            None
        };

        walk.into_iter()
            .flatten()
            .filter_map(move |entry| match entry {
                Ok(entry) => classify(&entry).map(Ok),
                Err(e) => Some(Err(anyhow::Error::new(e).context(format!(
                    "Failed to walk directory {}",
                    self.root.display()
                )))),
            })
    }

    /// Collect every file under the root.
    #[cfg(test)]
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        self.files().collect()
    }
}

/// Map a walk entry to a scanned file, or `None` for directories.
fn classify(entry: &DirEntry) -> Option<ScannedFile> {
    let file_type = entry.file_type();
    let path = entry.path().to_path_buf();

    if file_type.is_dir() {
        return None;
    }

    if file_type.is_file() {
        return Some(ScannedFile {
            path,
            kind: EntryKind::File,
        });
    }

    if file_type.is_symlink() {
        return match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                debug!("Not following directory symlink {}", path.display());
                None
            }
            Ok(meta) if meta.is_file() => Some(ScannedFile {
                path,
                kind: EntryKind::File,
            }),
            Ok(_) => Some(ScannedFile {
                path,
                kind: EntryKind::Special,
            }),
            // Dangling: let the read report it.
            Err(_) => Some(ScannedFile {
                path,
                kind: EntryKind::File,
            }),
        };
    }

    Some(ScannedFile {
        path,
        kind: EntryKind::Special,
    })
}
