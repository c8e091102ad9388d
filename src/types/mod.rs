//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `account`: Account classification and exportable account snapshot
//! - `error`: Error types for the exporter

pub mod account;
pub mod error;

pub use account::{AccountRecord, AccountType};
pub use error::ExportError;
