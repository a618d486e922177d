//! Capability traits between the acquisition pipeline and its
//! backends (PDF reader, page renderer, OCR engine).

use anyhow::Result;
use image::DynamicImage;

/// Acquisition tuning.
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// OCR language code, passed through to the engine.
    pub language: String,
    /// Render resolution for the OCR fallback. 300 DPI balances OCR
    /// accuracy against render time.
    pub dpi: f32,
}

impl Default for AcquireConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            dpi: 300.0,
        }
    }
}

/// One loaded document the pipeline can read pages from.
///
/// Opening the document (and failing on a corrupt file) happens before
/// a `DocumentSource` exists; everything here is per-page access.
pub trait DocumentSource {
    /// Machine-readable text across all pages, concatenated in page
    /// order. May legitimately be empty for scanned documents.
    fn text_layer(&self) -> Result<String>;

    fn page_count(&self) -> Result<usize>;

    /// Rasterize one page for OCR.
    fn render_page(&self, index: usize, dpi: f32) -> Result<DynamicImage>;
}

/// Text recognition over a rendered page image.
pub trait OcrEngine {
    fn recognize_text(&self, image: &DynamicImage, language: &str) -> Result<String>;
}
