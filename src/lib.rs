//! GnuCash Account CSV Export Library
//! # Overview
//!
//! This library writes ledger accounts as a GnuCash account CSV document: a
//! header row followed by one row per account, with a configurable separator
//! after every column.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (AccountRecord, AccountType, ExportError)
//! - [`io`] - Export layout and the serializer, plus the account listing reader
//!   - [`io::csv_format`] - Column mapping and `AccountCsvSerializer`
//!   - [`io::account_reader`] - Streaming reader for account listing files
//! - [`export`] - Export configuration, destinations and the exporter
//! - [`cli`] - CLI arguments parsing
//!
//! # Output Layout
//!
//! ```text
//! type,full_name,name,code,description,color,notes,commoditym,commodityn,hidden,tax,place_holder,
//! ASSET,Assets:Bank,Bank,,,,,USD,CURRENCY,F,F,F,
//! ```
//!
//! - `code` and `notes` are always empty
//! - `commodityn` is always `CURRENCY`
//! - `tax` is always `F`
//! - `hidden` and `place_holder` are `T` or `F`
//!
//! Values are written verbatim: no quoting and no escaping.

// Module declarations
pub mod cli;
pub mod export;
pub mod io;
pub mod types;

pub use export::{CsvAccountExporter, ExportConfig, ExportDestination};
pub use io::{AccountCsvSerializer, AccountReader, AccountSerializer};
pub use types::{AccountRecord, AccountType, ExportError};
