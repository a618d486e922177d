//! Field extraction: maps a detected issuer format to its rule table
//! and runs the rules plus the shared transaction scanner.

use anyhow::Result;
use regex::RegexBuilder;
use tracing::info;

use crate::detect::detect_format;
use crate::record::{IssuerFormat, StatementRecord};
use crate::rules::{FieldRule, RuleSet, rule_set};
use crate::transactions::scan_transactions;

/// Applies one issuer's rule table to statement text.
///
/// Construct via [`FieldExtractor::for_format`]; there is no extractor
/// for [`IssuerFormat::Unknown`]. A rule that does not match leaves
/// its field absent — a miss on one field never affects the others.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor {
    rules: &'static RuleSet,
}

impl FieldExtractor {
    pub fn for_format(format: IssuerFormat) -> Option<Self> {
        rule_set(format).map(|rules| Self { rules })
    }

    /// Last 4 digits of the masked card number.
    pub fn extract_card_last4(&self, text: &str) -> Result<Option<String>> {
        apply_rule(&self.rules.card_last4, text)
    }

    pub fn extract_billing_period(&self, text: &str) -> Result<Option<String>> {
        apply_rule(&self.rules.billing_period, text)
    }

    pub fn extract_due_date(&self, text: &str) -> Result<Option<String>> {
        apply_rule(&self.rules.payment_due_date, text)
    }

    pub fn extract_total_due(&self, text: &str) -> Result<Option<String>> {
        apply_rule(&self.rules.total_amount_due, text)
    }

    /// Run all four scalar rules plus the transaction scanner.
    pub fn extract(&self, text: &str) -> Result<StatementRecord> {
        Ok(StatementRecord {
            card_last4: self.extract_card_last4(text)?,
            billing_period: self.extract_billing_period(text)?,
            payment_due_date: self.extract_due_date(text)?,
            total_amount_due: self.extract_total_due(text)?,
            transactions: scan_transactions(text)?,
        })
    }
}

/// First case-insensitive match over the whole text; designated
/// capture group, trimmed. No match is not an error.
fn apply_rule(rule: &FieldRule, text: &str) -> Result<Option<String>> {
    let re = RegexBuilder::new(rule.pattern).case_insensitive(true).build()?;
    Ok(re
        .captures(text)
        .and_then(|caps| caps.get(rule.group))
        .map(|m| m.as_str().trim().to_string()))
}

/// Detect the issuer and extract fields: the full text-side pipeline.
///
/// Unknown issuers (including blank text) yield an empty record
/// without running any rule.
pub fn parse_statement(text: &str) -> Result<StatementRecord> {
    let format = detect_format(text);
    match FieldExtractor::for_format(format) {
        Some(extractor) => {
            info!(issuer = %format, "detected statement format");
            extractor.extract(text)
        }
        None => {
            info!("no issuer keyword matched, returning empty record");
            Ok(StatementRecord::default())
        }
    }
}
