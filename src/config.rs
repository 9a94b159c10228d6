//! Run configuration.
//!
//! The root list and output path are fixed constants; `Config` carries
//! them explicitly so each run (and each test) owns its own copy.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Directories walked by default, in order.
pub const DEFAULT_ROOTS: [&str; 4] = ["src", "programs", "usr", "tools"];

/// Output file written by default, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "all_files_content.txt";

/// Configuration for a single collection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directories, walked in list order.
    pub roots: Vec<PathBuf>,
    /// Output file, truncated at the start of the run.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Create a configuration with explicit roots and output path.
    pub fn new<I, P>(roots: I, output: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            output: output.into(),
        }
    }

    /// Check that every root exists.
    ///
    /// Only existence is checked; a root that is a plain file passes and
    /// contributes no entries during the walk.
    ///
    /// Every missing root is logged before the error is returned, so a
    /// single run reports all of them at once.
    pub fn validate_roots(&self) -> Result<(), ConfigError> {
        let missing: Vec<PathBuf> = self
            .roots
            .iter()
            .filter(|root| !root.exists())
            .cloned()
            .collect();

        if !missing.is_empty() {
            for root in &missing {
                error!("Error: directory '{}' not found.", root.display());
            }
            return Err(ConfigError::MissingRoots(missing));
        }

        debug!("All {} roots present", self.roots.len());
        Ok(())
    }

    /// Whether `path` refers to the configured output file.
    ///
    /// Falls back to a plain comparison when either side cannot be
    /// canonicalized (e.g. the output has not been created yet).
    pub fn is_output(&self, path: &Path) -> bool {
        if path.file_name() != self.output.file_name() {
            return false;
        }

        match (std::fs::canonicalize(&self.output), std::fs::canonicalize(path)) {
            (Ok(output), Ok(candidate)) => output == candidate,
            _ => self.output == path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.roots,
            vec![
                PathBuf::from("src"),
                PathBuf::from("programs"),
                PathBuf::from("usr"),
                PathBuf::from("tools"),
            ]
        );
        assert_eq!(config.output, PathBuf::from("all_files_content.txt"));
    }

    #[test]
    fn test_validate_roots_ok() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let config = Config::new(
            [temp.path().join("a"), temp.path().join("b")],
            temp.path().join("out.txt"),
        );
        assert!(config.validate_roots().is_ok());
    }

    #[test]
    fn test_validate_roots_reports_all_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();

        let config = Config::new(
            [
                temp.path().join("missing1"),
                temp.path().join("a"),
                temp.path().join("missing2"),
            ],
            temp.path().join("out.txt"),
        );

        match config.validate_roots() {
            Err(ConfigError::MissingRoots(missing)) => assert_eq!(
                missing,
                vec![temp.path().join("missing1"), temp.path().join("missing2")]
            ),
            other => panic!("expected MissingRoots, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_roots_accepts_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let config = Config::new([&file], temp.path().join("out.txt"));
        assert!(config.validate_roots().is_ok());
    }

    #[test]
    fn test_is_output() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.txt");
        let config = Config::new([temp.path()], &output);

        // Not created yet: plain comparison.
        assert!(config.is_output(&output));
        assert!(!config.is_output(&temp.path().join("other.txt")));

        fs::write(&output, "").unwrap();
        assert!(config.is_output(&temp.path().join(".").join("out.txt")));
    }
}
