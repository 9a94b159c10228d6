//! collectall - flatten a source tree into a single text dump
//!
//! Walks a fixed list of root directories and writes every UTF-8 file
//! into one output file, each entry prefixed with its path.
//!
//! Exit codes:
//!   0 - Success
//!   1 - A root directory is missing, or the output could not be written
//!   2 - Invalid command-line arguments

mod aggregator;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod scanner;

use aggregator::Aggregator;
use anyhow::Result;
use cli::Args;
use config::Config;
use error::ConfigError;
use models::RunSummary;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    init_logging(&args);

    info!("collectall v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_collect(Config::default()) {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            if let Some(config_error) = e.downcast_ref::<ConfigError>() {
                eprintln!("\n❌ {}", config_error);
            } else {
                error!("Collection failed: {:#}", e);
                eprintln!("\n❌ Error: {:#}", e);
            }
            std::process::exit(1);
        }
    }
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run one collection with the given configuration.
fn run_collect(config: Config) -> Result<RunSummary> {
    let aggregator = Aggregator::new(config);
    debug!(
        "Roots: {:?}, output: {}",
        aggregator.config().roots,
        aggregator.config().output.display()
    );
    aggregator.run()
}

fn print_summary(summary: &RunSummary) {
    println!("\n📊 {}", summary);
    println!("\n✅ Success, output saved into {}", summary.output.display());
}
