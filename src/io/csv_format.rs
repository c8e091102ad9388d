//! CSV format handling for account exports
//!
//! This module centralizes the export text layout:
//! - the fixed header row
//! - the column mapping from `AccountRecord` to row values
//! - the `AccountCsvSerializer` that writes header and rows to a sink
//!
//! The layout is a loose CSV: no quoting, no escaping, and every column
//! (including the last) is followed by the separator.

use crate::types::{AccountRecord, ExportError};
use std::io::Write;
use tracing::debug;

/// Header columns, in output order
pub const HEADER: [&str; 12] = [
    "type",
    "full_name",
    "name",
    "code",
    "description",
    "color",
    "notes",
    "commoditym",
    "commodityn",
    "hidden",
    "tax",
    "place_holder",
];

/// Commodity namespace written to the `commodityn` column
pub const COMMODITY_NAMESPACE: &str = "CURRENCY";

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = ',';

/// Capability to write a set of accounts to a sink
pub trait AccountSerializer: Send + Sync {
    /// Write `accounts` to `sink`, in order
    ///
    /// # Errors
    ///
    /// Returns `ExportError::WriteFailure` on the first rejected write. Nothing
    /// already written is rolled back.
    fn serialize(&self, accounts: &[AccountRecord], sink: &mut dyn Write)
        -> Result<(), ExportError>;
}

/// Serializer for the GnuCash account CSV layout
///
/// # Examples
///
/// ```
/// use gnc_account_export::io::{AccountCsvSerializer, AccountSerializer};
/// use gnc_account_export::types::{AccountRecord, AccountType};
///
/// let accounts = vec![AccountRecord::new(AccountType::Asset, "Assets:Bank", "USD")];
/// let mut output = Vec::new();
///
/// AccountCsvSerializer::new(';')
///     .serialize(&accounts, &mut output)
///     .unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.ends_with("ASSET;Assets:Bank;Bank;;;;;USD;CURRENCY;F;F;F;\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCsvSerializer {
    separator: char,
    destination: String,
}

impl AccountCsvSerializer {
    /// Create a serializer using `separator` between (and after) columns
    ///
    /// Any character is accepted; validating it is up to the caller.
    pub fn new(separator: char) -> Self {
        AccountCsvSerializer {
            separator,
            destination: "sink".to_string(),
        }
    }

    /// Name the destination reported in write failures
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// The configured column separator
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The destination name used in error messages
    pub fn destination(&self) -> &str {
        &self.destination
    }

    fn write_row(&self, sink: &mut dyn Write, fields: &[&str]) -> Result<(), ExportError> {
        let mut buf = [0u8; 4];
        let separator = self.separator.encode_utf8(&mut buf);

        for field in fields {
            self.write_str(sink, field)?;
            self.write_str(sink, separator)?;
        }
        self.write_str(sink, "\n")
    }

    fn write_str(&self, sink: &mut dyn Write, value: &str) -> Result<(), ExportError> {
        sink.write_all(value.as_bytes())
            .map_err(|e| ExportError::write_failure(&self.destination, &e))
    }
}

impl Default for AccountCsvSerializer {
    fn default() -> Self {
        AccountCsvSerializer::new(DEFAULT_SEPARATOR)
    }
}

impl AccountSerializer for AccountCsvSerializer {
    fn serialize(
        &self,
        accounts: &[AccountRecord],
        sink: &mut dyn Write,
    ) -> Result<(), ExportError> {
        debug!(
            accounts = accounts.len(),
            separator = %self.separator,
            destination = %self.destination,
            "serializing accounts"
        );

        self.write_row(sink, &HEADER)?;

        for account in accounts {
            let account_type = account.account_type.to_string();
            self.write_row(
                sink,
                &[
                    account_type.as_str(),
                    account.full_name.as_str(),
                    account.name.as_str(),
                    "",
                    account.description.as_str(),
                    account.color.as_str(),
                    "",
                    account.commodity_code.as_str(),
                    COMMODITY_NAMESPACE,
                    flag(account.hidden),
                    "F",
                    flag(account.placeholder),
                ],
            )?;
        }

        Ok(())
    }
}

/// Render a boolean column as `T` / `F`
fn flag(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}
