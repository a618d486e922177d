//! cardstmt-ingest: statement text acquisition (PDF text layer with OCR fallback).
//!
//! The acquisition pipeline talks to the document and the OCR engine
//! through the traits in [`source`], so everything above the backends
//! is testable without a PDF on disk or tesseract installed.

pub mod acquire;
pub mod ocr;
pub mod pdf;
pub mod source;

pub use acquire::{AcquiredText, AcquisitionPath, TextAcquirer};
pub use ocr::TesseractOcr;
pub use pdf::PdfDocument;
pub use source::{AcquireConfig, DocumentSource, OcrEngine};
