//! I/O module
//!
//! Handles the export text layout and account listing input.
//!
//! # Components
//!
//! - `csv_format` - Export layout and the `AccountCsvSerializer`
//! - `account_reader` - Account listing reader with iterator interface

pub mod account_reader;
pub mod csv_format;

pub use account_reader::{convert_listing_row, AccountReader, ListingRow};
pub use csv_format::{AccountCsvSerializer, AccountSerializer, DEFAULT_SEPARATOR, HEADER};
