//! Per-issuer field rules, kept as data.
//!
//! Each issuer defines exactly four scalar rules. Keeping them in one
//! table per issuer (instead of inline in extraction code) lets every
//! rule be exercised against fixture strings without touching a
//! document, and lets a new issuer land without edits to existing
//! tables.
//!
//! Pattern conventions shared by all issuers:
//! - applied case-insensitively against the whole document text,
//!   first occurrence only;
//! - card rules expect a label, then exactly three masked `XXXX`
//!   groups (space or hyphen separated), then the captured 4 digits;
//! - period/due-date rules capture free text to end of line;
//! - amount rules tolerate an optional currency marker: the rupee
//!   glyph, `■` (the common OCR garbling of it), or `Rs.`.

use crate::record::IssuerFormat;

/// Logical name of a scalar statement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    CardLast4,
    BillingPeriod,
    PaymentDueDate,
    TotalAmountDue,
}

/// One scalar extraction rule: a pattern plus the capture group that
/// holds the value.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: ScalarField,
    pub pattern: &'static str,
    pub group: usize,
}

/// The four scalar rules an issuer format defines.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub card_last4: FieldRule,
    pub billing_period: FieldRule,
    pub payment_due_date: FieldRule,
    pub total_amount_due: FieldRule,
}

const fn rule(field: ScalarField, pattern: &'static str) -> FieldRule {
    FieldRule { field, pattern, group: 1 }
}

const HDFC: RuleSet = RuleSet {
    card_last4: rule(
        ScalarField::CardLast4,
        r"(?:card number|card no\.?)[\s:]*?(?:XXXX[\s-]*){3}(\d{4})",
    ),
    billing_period: rule(ScalarField::BillingPeriod, r"billing period\s*:?\s*([^\n]+)"),
    payment_due_date: rule(ScalarField::PaymentDueDate, r"payment due date\s*:?\s*([^\n]+)"),
    total_amount_due: rule(
        ScalarField::TotalAmountDue,
        r"total amount due\s*:?\s*[₹■Rs.\s]*([\d,]+\.?\d*)",
    ),
};

const ICICI: RuleSet = RuleSet {
    card_last4: rule(
        ScalarField::CardLast4,
        r"card\s+(?:number|ending|no\.?)\s*:?\s*(?:XXXX[\s-]*){3}(\d{4})",
    ),
    billing_period: rule(
        ScalarField::BillingPeriod,
        r"statement\s+(?:period|date)\s*:?\s*([^\n]+)",
    ),
    payment_due_date: rule(
        ScalarField::PaymentDueDate,
        r"(?:payment\s+)?due\s+date\s*:?\s*([^\n]+)",
    ),
    total_amount_due: rule(
        ScalarField::TotalAmountDue,
        r"(?:total amount due|amount payable)\s*:?\s*[₹■Rs.\s]*([\d,]+\.?\d*)",
    ),
};

const SBI: RuleSet = RuleSet {
    card_last4: rule(
        ScalarField::CardLast4,
        r"card\s+no\.?\s*:?\s*(?:XXXX[\s-]*){3}(\d{4})",
    ),
    billing_period: rule(
        ScalarField::BillingPeriod,
        r"statement\s+(?:period|from)\s*:?\s*([^\n]+)",
    ),
    payment_due_date: rule(
        ScalarField::PaymentDueDate,
        r"(?:payment\s+)?due\s+(?:date|by)\s*:?\s*([^\n]+)",
    ),
    total_amount_due: rule(
        ScalarField::TotalAmountDue,
        r"(?:total amount due|total outstanding)\s*:?\s*[₹■Rs.\s]*([\d,]+\.?\d*)",
    ),
};

const AXIS: RuleSet = RuleSet {
    card_last4: rule(
        ScalarField::CardLast4,
        r"(?:card number|credit card number|card no\.?)\s*:?\s*(?:XXXX[\s-]*){3}(\d{4})",
    ),
    billing_period: rule(
        ScalarField::BillingPeriod,
        r"(?:statement period|billing period)\s*:?\s*([^\n]+)",
    ),
    payment_due_date: rule(ScalarField::PaymentDueDate, r"payment due date\s*:?\s*([^\n]+)"),
    total_amount_due: rule(
        ScalarField::TotalAmountDue,
        r"(?:total amount due|amount due)\s*:?\s*[₹■Rs.\s]*([\d,]+\.?\d*)",
    ),
};

const KOTAK: RuleSet = RuleSet {
    card_last4: rule(
        ScalarField::CardLast4,
        r"card\s+(?:ending with|number)\s*:?\s*(?:XXXX[\s-]*){3}(\d{4})",
    ),
    billing_period: rule(
        ScalarField::BillingPeriod,
        r"(?:billing|statement)\s+(?:period|cycle)\s*:?\s*([^\n]+)",
    ),
    payment_due_date: rule(ScalarField::PaymentDueDate, r"payment due date\s*:?\s*([^\n]+)"),
    total_amount_due: rule(
        ScalarField::TotalAmountDue,
        r"(?:total amount due|amount payable)\s*:?\s*[₹■Rs.\s]*([\d,]+\.?\d*)",
    ),
};

/// Rule table for a detected format; `None` for `Unknown`.
pub fn rule_set(format: IssuerFormat) -> Option<&'static RuleSet> {
    match format {
        IssuerFormat::Hdfc => Some(&HDFC),
        IssuerFormat::Icici => Some(&ICICI),
        IssuerFormat::Sbi => Some(&SBI),
        IssuerFormat::Axis => Some(&AXIS),
        IssuerFormat::Kotak => Some(&KOTAK),
        IssuerFormat::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    #[test]
    fn every_rule_pattern_compiles() {
        for format in [
            IssuerFormat::Hdfc,
            IssuerFormat::Icici,
            IssuerFormat::Sbi,
            IssuerFormat::Axis,
            IssuerFormat::Kotak,
        ] {
            let rules = rule_set(format).unwrap();
            for rule in [
                rules.card_last4,
                rules.billing_period,
                rules.payment_due_date,
                rules.total_amount_due,
            ] {
                RegexBuilder::new(rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("{format} {:?}: {e}", rule.field));
            }
        }
    }

    #[test]
    fn unknown_has_no_rules() {
        assert!(rule_set(IssuerFormat::Unknown).is_none());
    }
}
