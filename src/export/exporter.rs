//! Account exporter
//!
//! Binds an `ExportConfig` to a sink and runs the serializer over it.
//!
//! # Design
//!
//! The exporter owns the destination side of an export:
//! - opening the file (or locking stdout)
//! - buffering writes
//! - flushing at the end, reporting a failed flush as a write failure
//! - reporting which files were produced
//!
//! The account sequence and the text layout belong to the caller and the
//! `AccountSerializer` respectively. A failed export leaves any partially
//! written file in place; removing it is up to the caller.

use super::{ExportConfig, ExportDestination};
use crate::io::AccountSerializer;
use crate::types::{AccountRecord, ExportError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// Exporter producing GnuCash account CSV documents
///
/// # Examples
///
/// ```no_run
/// use gnc_account_export::export::{CsvAccountExporter, ExportConfig, ExportDestination};
/// use gnc_account_export::types::{AccountRecord, AccountType};
/// use std::path::PathBuf;
///
/// let config = ExportConfig::new(';', ExportDestination::File(PathBuf::from("accounts.csv")));
/// let exporter = CsvAccountExporter::new(config).unwrap();
///
/// let accounts = vec![AccountRecord::new(AccountType::Bank, "Assets:Checking", "USD")];
/// let files = exporter.export_to_destination(&accounts).unwrap();
/// assert_eq!(files, vec![PathBuf::from("accounts.csv")]);
/// ```
pub struct CsvAccountExporter {
    config: ExportConfig,
    serializer: Box<dyn AccountSerializer>,
}

impl CsvAccountExporter {
    /// Create an exporter using the standard account CSV serializer
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidConfiguration` if `config` does not validate.
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        let serializer = Box::new(config.serializer());
        Self::with_serializer(config, serializer)
    }

    /// Create an exporter with a custom serializer
    pub fn with_serializer(
        config: ExportConfig,
        serializer: Box<dyn AccountSerializer>,
    ) -> Result<Self, ExportError> {
        config.validate()?;
        Ok(Self { config, serializer })
    }

    /// The configuration this exporter was built with
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Serialize `accounts` into `output` and flush it
    pub fn export(
        &self,
        accounts: &[AccountRecord],
        output: &mut dyn Write,
    ) -> Result<(), ExportError> {
        self.serializer.serialize(accounts, output)?;
        output
            .flush()
            .map_err(|e| ExportError::write_failure(&self.config.destination.to_string(), &e))
    }

    /// Serialize `accounts` to the configured destination
    ///
    /// Returns the paths of the files written; exporting to stdout produces
    /// no files.
    pub fn export_to_destination(
        &self,
        accounts: &[AccountRecord],
    ) -> Result<Vec<PathBuf>, ExportError> {
        let destination = &self.config.destination;
        info!(accounts = accounts.len(), %destination, "exporting accounts");

        let result = match destination {
            ExportDestination::Stdout => {
                let stdout = io::stdout();
                let mut output = BufWriter::new(stdout.lock());
                self.export(accounts, &mut output).map(|_| Vec::new())
            }
            ExportDestination::File(path) => File::create(path)
                .map_err(|e| ExportError::write_failure(&destination.to_string(), &e))
                .and_then(|file| {
                    let mut output = BufWriter::new(file);
                    self.export(accounts, &mut output)
                })
                .map(|_| vec![path.clone()]),
        };

        match &result {
            Ok(files) => info!(files = files.len(), %destination, "export finished"),
            Err(e) => error!(error = %e, %destination, "export failed"),
        }

        result
    }
}
