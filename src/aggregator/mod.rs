//! The aggregator: validates roots, then flattens every file under them
//! into a single output.
//!
//! The output is only created once every root has been validated, so a
//! missing root never truncates an existing dump.

pub mod reader;

use crate::config::Config;
use crate::error::{ConfigError, SkipReason};
use crate::models::{FileOutcome, RunSummary};
use crate::output::EntryWriter;
use crate::scanner::FileScanner;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, warn};

pub use reader::read_file;

/// Runs a collection over the configured roots.
pub struct Aggregator {
    config: Config,
}

impl Aggregator {
    /// Create an aggregator for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration this aggregator runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that every root directory exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate_roots()
    }

    /// Validate the roots, then write every readable file to the output.
    ///
    /// A `ConfigError` is returned (wrapped in `anyhow`) before the output
    /// is touched. Per-file failures are recorded in the summary and never
    /// stop the run; output and walk failures propagate.
    pub fn run(&self) -> Result<RunSummary> {
        self.validate()?;

        let mut writer = EntryWriter::create(&self.config.output)?;
        let summary = self.collect_into(&mut writer)?;
        writer.finish()?;

        debug!("Finished writing {}", self.config.output.display());
        Ok(summary)
    }

    /// Walk every root in order, appending entries to `writer`.
    fn collect_into<W: Write>(&self, writer: &mut EntryWriter<W>) -> Result<RunSummary> {
        let mut summary = RunSummary::new(self.config.output.clone());

        for root in &self.config.roots {
            let scanner = FileScanner::new(root);
            debug!("Collecting files under {}", scanner.root().display());

            for scanned in scanner.files() {
                let scanned = scanned?;

                let outcome = if self.config.is_output(&scanned.path) {
                    FileOutcome::Skipped {
                        path: scanned.path,
                        reason: SkipReason::OutputFile,
                    }
                } else {
                    read_file(scanned)
                };

                if let FileOutcome::Appended(record) = &outcome {
                    writer.write_entry(record)?;
                }

                report(&outcome);
                summary.record(&outcome);
            }
        }

        debug!("Wrote {} entries", writer.entries());
        Ok(summary)
    }
}

/// Emit the per-file notice for an outcome.
fn report(outcome: &FileOutcome) {
    let path = outcome.path().display();

    match outcome {
        FileOutcome::Appended(_) => info!("[+] Appended: {}", path),
        FileOutcome::Skipped { reason, .. } if reason.is_error() => {
            warn!("[!] Error while reading {}: {}", path, reason)
        }
        FileOutcome::Skipped { reason, .. } => warn!("[-] Skipped ({}): {}", reason, path),
    }
}
