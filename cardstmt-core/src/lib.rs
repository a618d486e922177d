//! cardstmt-core: issuer detection and field extraction for credit-card statement text.
//!
//! Pure text in, [`StatementRecord`] out. Acquiring the text (PDF text
//! layer, OCR fallback) lives in `cardstmt-ingest`; nothing in this
//! crate touches a file or an OCR engine.

pub mod detect;
pub mod extract;
pub mod record;
pub mod rules;
pub mod transactions;

pub use detect::detect_format;
pub use extract::{FieldExtractor, parse_statement};
pub use record::{IssuerFormat, StatementRecord, TransactionLine};
pub use rules::{FieldRule, RuleSet, ScalarField};
pub use transactions::scan_transactions;
