//! Shared transaction scanner.
//!
//! Transaction rows are laid out far more uniformly across issuers
//! than header fields are, so a single pattern serves every format:
//! a date token (`15-Mar-2024`, `01/04/24`), a description, and an
//! amount with two decimal places, optionally prefixed by a currency
//! marker.

use anyhow::Result;
use regex::RegexBuilder;

use crate::record::TransactionLine;

const TXN_PATTERN: &str = concat!(
    r"(\d{2}[-/](?:[A-Za-z]{3,}|\d{2})[-/]\d{2,4})\s+",
    r"([A-Za-z0-9\s&.,]+?)\s+",
    r"[₹■Rs.\s]*([0-9,]+\.\d{2})",
);

/// Scan text for every non-overlapping transaction-shaped fragment,
/// in document order (not chronological). No deduplication and no
/// amount validation beyond the shape itself.
pub fn scan_transactions(text: &str) -> Result<Vec<TransactionLine>> {
    let re = RegexBuilder::new(TXN_PATTERN).case_insensitive(true).build()?;

    let mut out = Vec::new();
    for caps in re.captures_iter(text) {
        out.push(TransactionLine {
            date: caps[1].to_string(),
            description: collapse_whitespace(&caps[2]),
            amount: caps[3].to_string(),
        });
    }
    Ok(out)
}

/// Trim and squeeze runs of whitespace (OCR likes double spaces and
/// stray line breaks inside descriptions).
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
