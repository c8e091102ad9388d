//! Export configuration and destination handling
//!
//! The serializer only knows about a separator and a sink. This module supplies
//! the rest of an export: where the document goes (`ExportDestination`), how it
//! is configured (`ExportConfig`), and the `CsvAccountExporter` that binds the
//! two to a serializer.

use crate::io::{AccountCsvSerializer, DEFAULT_SEPARATOR};
use crate::types::ExportError;
use std::fmt;
use std::path::PathBuf;

pub mod exporter;

pub use exporter::CsvAccountExporter;

/// Where an export document is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportDestination {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or truncated by the exporter
    File(PathBuf),
}

impl fmt::Display for ExportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportDestination::Stdout => write!(f, "stdout"),
            ExportDestination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parameters for one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Column separator
    pub separator: char,
    /// Export destination
    pub destination: ExportDestination,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            destination: ExportDestination::Stdout,
        }
    }
}

impl ExportConfig {
    /// Create a configuration with the given separator and destination
    pub fn new(separator: char, destination: ExportDestination) -> Self {
        Self {
            separator,
            destination,
        }
    }

    /// Check that the configuration produces a readable document
    ///
    /// Line breaks cannot be separators since rows are newline-terminated.
    /// A file destination needs a non-empty path.
    pub fn validate(&self) -> Result<(), ExportError> {
        if matches!(self.separator, '\n' | '\r') {
            return Err(ExportError::invalid_configuration(
                "separator must not be a line break",
            ));
        }

        if let ExportDestination::File(path) = &self.destination {
            if path.as_os_str().is_empty() {
                return Err(ExportError::invalid_configuration(
                    "output path must not be empty",
                ));
            }
        }

        Ok(())
    }

    /// Build the serializer for this configuration
    pub fn serializer(&self) -> AccountCsvSerializer {
        AccountCsvSerializer::new(self.separator).with_destination(self.destination.to_string())
    }
}
