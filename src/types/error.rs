//! Error types for the account exporter
//!
//! This module defines all error types that can occur while reading account
//! listings, configuring an export, and writing the export document.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed listing rows, unknown account types
//! - **Write Failures**: The export sink rejected a write or flush
//! - **Configuration Errors**: Unusable separator or destination

use thiserror::Error;

/// Main error type for the account exporter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed row in an account listing
    ///
    /// Recoverable - the reader skips the row and continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown account classification in an account listing
    #[error("Invalid account type '{value}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidAccountType {
        /// The unrecognized type string
        value: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// The export sink rejected a write
    ///
    /// Fatal - the export is aborted and whatever was already written stays
    /// in the sink.
    #[error("Failed to write export to {destination}: {message}")]
    WriteFailure {
        /// The export destination (file path or `stdout`)
        destination: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// Invalid export configuration
    #[error("Invalid export configuration: {message}")]
    InvalidConfiguration {
        /// What is wrong with the configuration
        message: String,
    },
}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ExportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl ExportError {
    /// Create a WriteFailure error for the given destination
    pub fn write_failure(destination: &str, error: &std::io::Error) -> Self {
        ExportError::WriteFailure {
            destination: destination.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InvalidAccountType error
    pub fn invalid_account_type(value: &str, line: Option<u64>) -> Self {
        ExportError::InvalidAccountType {
            value: value.to_string(),
            line,
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        ExportError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ExportError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
