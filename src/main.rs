//! GnuCash Account CSV Export CLI
//!
//! Reads an account listing and writes it out as a GnuCash account CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv > export.csv
//! cargo run -- --separator ';' accounts.csv > export.csv
//! cargo run -- -s '\t' -o export.tsv accounts.csv
//! ```
//!
//! Malformed listing rows are logged to stderr and skipped. Logs always go to
//! stderr so stdout carries only the export.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid configuration, write failure, etc.)

use gnc_account_export::cli::{self, CliArgs};
use gnc_account_export::io::AccountReader;
use gnc_account_export::{CsvAccountExporter, ExportError};
use std::process;
use tracing::{info, warn};

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), ExportError> {
    let exporter = CsvAccountExporter::new(args.to_export_config())?;

    let mut accounts = Vec::new();
    for result in AccountReader::new(&args.input_file)? {
        match result {
            Ok(account) => accounts.push(account),
            Err(e) => warn!("Skipping account row: {}", e),
        }
    }
    info!(
        accounts = accounts.len(),
        input = %args.input_file.display(),
        "loaded account listing"
    );

    let files = exporter.export_to_destination(&accounts)?;
    for file in files {
        info!(file = %file.display(), "wrote export");
    }

    Ok(())
}
