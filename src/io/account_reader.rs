//! Account listing reader with iterator interface
//!
//! Streams `AccountRecord`s out of an account listing CSV with the columns
//! `type,full_name,name,description,color,commodity,hidden,placeholder`.
//! This is the account data provider for the command-line tool; the
//! serializer itself never reads files.
//!
//! ```no_run
//! use gnc_account_export::io::AccountReader;
//! use std::path::Path;
//!
//! let reader = AccountReader::new(Path::new("accounts.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(account) => println!("{}", account.full_name),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Fatal errors (file not found, I/O errors) come from `new()`. Bad rows are
//! yielded as `Err` items with their line number and iteration continues.

use crate::types::{AccountRecord, AccountType, ExportError};
use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// One row of an account listing, before validation
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListingRow {
    #[serde(rename = "type")]
    pub account_type: String,
    pub full_name: String,
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub commodity: String,
    #[serde(default)]
    pub hidden: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

/// Convert a listing row to an `AccountRecord`
///
/// - `type` is parsed case-insensitively
/// - a missing `name` falls back to the last segment of `full_name`
/// - `hidden`/`placeholder` accept `true/false`, `T/F`, `1/0`, `yes/no`;
///   missing or empty means `false`
pub fn convert_listing_row(
    row: ListingRow,
    line: Option<u64>,
) -> Result<AccountRecord, ExportError> {
    let account_type = AccountType::from_str(&row.account_type)
        .map_err(|_| ExportError::invalid_account_type(&row.account_type, line))?;

    let mut account = AccountRecord::new(account_type, &row.full_name, &row.commodity);

    if let Some(name) = row.name.filter(|n| !n.is_empty()) {
        account.name = name;
    }
    account.description = row.description.unwrap_or_default();
    account.color = row.color.unwrap_or_default();
    account.hidden = parse_flag(row.hidden.as_deref(), "hidden", line)?;
    account.placeholder = parse_flag(row.placeholder.as_deref(), "placeholder", line)?;

    Ok(account)
}

fn parse_flag(
    value: Option<&str>,
    column: &str,
    line: Option<u64>,
) -> Result<bool, ExportError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v.trim(),
        _ => return Ok(false),
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err(ExportError::parse_error(
            line,
            format!("Invalid {} flag '{}'", column, value),
        )),
    }
}

/// Streaming reader over an account listing
pub struct AccountReader<R: Read> {
    records: StringRecordsIntoIter<R>,
    headers: csv::StringRecord,
}

impl AccountReader<File> {
    /// Open an account listing file
    ///
    /// The CSV reader trims whitespace from all fields, allows rows with
    /// trailing optional columns left off, and uses an 8KB buffer.
    pub fn new(path: &Path) -> Result<Self, ExportError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExportError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ExportError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Self::from_reader(file)
    }
}

impl<R: Read> AccountReader<R> {
    /// Wrap any reader producing an account listing
    pub fn from_reader(reader: R) -> Result<Self, ExportError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        let headers = reader.headers()?.clone();

        Ok(Self {
            records: reader.into_records(),
            headers,
        })
    }
}

impl<R: Read> Iterator for AccountReader<R> {
    type Item = Result<AccountRecord, ExportError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        let line = record.position().map(|pos| pos.line());

        let row: ListingRow = match record.deserialize(Some(&self.headers)) {
            Ok(row) => row,
            Err(e) => return Some(Err(ExportError::parse_error(line, e.to_string()))),
        };

        Some(convert_listing_row(row, line))
    }
}
