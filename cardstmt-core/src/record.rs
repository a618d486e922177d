//! Output data model (issuer-agnostic).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The bank-specific layout convention a statement follows.
///
/// Closed set: adding an issuer means adding a variant here, a keyword
/// row in `detect`, and a rule table in `rules`. `Unknown` carries no
/// extraction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuerFormat {
    Hdfc,
    Icici,
    Sbi,
    Axis,
    Kotak,
    Unknown,
}

impl IssuerFormat {
    /// Bank name as printed in logs and banners.
    pub fn label(&self) -> &'static str {
        match self {
            IssuerFormat::Hdfc => "HDFC Bank",
            IssuerFormat::Icici => "ICICI Bank",
            IssuerFormat::Sbi => "SBI Card",
            IssuerFormat::Axis => "Axis Bank",
            IssuerFormat::Kotak => "Kotak Bank",
            IssuerFormat::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for IssuerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One transaction row recognized in statement text.
///
/// All three parts stay as the text printed them; no date or amount
/// parsing happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLine {
    pub date: String,
    /// Trimmed, inner whitespace collapsed to single spaces.
    pub description: String,
    /// Numeric text with two decimal places, comma grouping kept.
    pub amount: String,
}

impl fmt::Display for TransactionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | ₹{}", self.date, self.description, self.amount)
    }
}

/// Fields extracted from one statement.
///
/// A scalar is `None` when the issuer's pattern did not match — never
/// an empty string, so "not found" stays distinguishable from "found
/// empty". `transactions` may be empty but is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub card_last4: Option<String>,
    pub billing_period: Option<String>,
    pub payment_due_date: Option<String>,
    pub total_amount_due: Option<String>,
    pub transactions: Vec<TransactionLine>,
}
