//! Command-line interface argument parsing.
//!
//! The roots and output path are fixed; the only knobs are how chatty
//! the run is.

use clap::Parser;

/// collectall - flatten source directories into one text file
///
/// Walks `src`, `programs`, `usr` and `tools` (in that order) and writes
/// every UTF-8 file into `all_files_content.txt`, each prefixed with a
/// `File - <path>: ` header. Binary files are skipped.
///
/// Examples:
///   collectall
///   collectall --verbose
///   collectall --quiet
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (only errors and the final result)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
