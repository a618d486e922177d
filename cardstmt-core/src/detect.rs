//! Issuer format detection from statement text.

use crate::record::IssuerFormat;

/// Keyword rules in priority order; the first matching row wins.
///
/// The order is a tie-break policy, not an accident: a statement that
/// quotes another bank's name in free text still resolves to the
/// earlier-listed issuer. Keep new issuers at the end.
const KEYWORD_RULES: &[(&[&str], IssuerFormat)] = &[
    (&["hdfc"], IssuerFormat::Hdfc),
    (&["icici"], IssuerFormat::Icici),
    (&["state bank", "sbi"], IssuerFormat::Sbi),
    (&["axis"], IssuerFormat::Axis),
    (&["kotak"], IssuerFormat::Kotak),
];

/// Classify statement text by issuer keyword, case-insensitively.
///
/// Blank text short-circuits to [`IssuerFormat::Unknown`] without
/// running any keyword test.
pub fn detect_format(text: &str) -> IssuerFormat {
    if text.trim().is_empty() {
        return IssuerFormat::Unknown;
    }

    let lower = text.to_lowercase();
    for (keywords, format) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *format;
        }
    }
    IssuerFormat::Unknown
}
