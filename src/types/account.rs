//! Account-related types for the account exporter
//!
//! This module defines the account classification enum and the immutable
//! account snapshot handed to the serializer.

use strum::{Display, EnumString};

/// Account classification
///
/// Mirrors the GnuCash account types. The textual form used in exports is the
/// upper-case variant name (`ASSET`, `EXPENSE`, ...). Parsing is
/// case-insensitive so hand-written listings can use `Asset` or `asset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum AccountType {
    Cash,
    Bank,
    Credit,
    Asset,
    Liability,
    Stock,
    Mutual,
    Currency,
    Income,
    Expense,
    Equity,
    Receivable,
    Payable,
    Root,
    Trading,
}

/// Snapshot of one ledger account's exportable attributes
///
/// Records are read-only to the serializer and are expected to be obtained
/// fresh right before each export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Account classification
    pub account_type: AccountType,

    /// Fully qualified hierarchical name, e.g. `Assets:Bank:Checking`
    pub full_name: String,

    /// Leaf account name
    pub name: String,

    /// Free-form description (possibly empty)
    pub description: String,

    /// Color specification such as `#FF0000` (possibly empty)
    pub color: String,

    /// Currency/commodity code, e.g. `USD`
    pub commodity_code: String,

    /// Whether the account is hidden in the account tree
    pub hidden: bool,

    /// Whether the account is an organizational, non-posting account
    pub placeholder: bool,
}

impl AccountRecord {
    /// Create a visible, non-placeholder account with empty description and color
    ///
    /// The leaf name is derived from the last `:`-separated segment of
    /// `full_name`.
    pub fn new(account_type: AccountType, full_name: &str, commodity_code: &str) -> Self {
        let name = full_name.rsplit(':').next().unwrap_or(full_name);

        AccountRecord {
            account_type,
            full_name: full_name.to_string(),
            name: name.to_string(),
            description: String::new(),
            color: String::new(),
            commodity_code: commodity_code.to_string(),
            hidden: false,
            placeholder: false,
        }
    }
}
