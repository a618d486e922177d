//! Text acquisition: direct text layer first, OCR fallback when the
//! document has none.

use tracing::{info, warn};

use crate::source::{AcquireConfig, DocumentSource, OcrEngine};

/// Which path produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionPath {
    TextLayer,
    Ocr,
}

/// Best-effort plain-text transcription of one document.
#[derive(Debug, Clone)]
pub struct AcquiredText {
    pub text: String,
    pub source: AcquisitionPath,
}

/// Runs the two-step acquisition: text layer, then OCR.
pub struct TextAcquirer<E> {
    ocr: E,
    config: AcquireConfig,
}

impl<E: OcrEngine> TextAcquirer<E> {
    pub fn new(ocr: E, config: AcquireConfig) -> Self {
        Self { ocr, config }
    }

    /// Return the document's text layer if it has one; otherwise OCR
    /// every page once and concatenate.
    ///
    /// Never fails: render or OCR trouble degrades to empty text for
    /// the affected page, and downstream extraction copes with empty
    /// input. A non-blank text layer means OCR is never invoked.
    pub fn acquire(&self, doc: &dyn DocumentSource) -> AcquiredText {
        match doc.text_layer() {
            Ok(text) if !text.trim().is_empty() => {
                return AcquiredText {
                    text,
                    source: AcquisitionPath::TextLayer,
                };
            }
            Ok(_) => info!("no text layer, falling back to OCR"),
            Err(err) => warn!(error = %err, "text layer unreadable, falling back to OCR"),
        }

        AcquiredText {
            text: self.ocr_all_pages(doc),
            source: AcquisitionPath::Ocr,
        }
    }

    fn ocr_all_pages(&self, doc: &dyn DocumentSource) -> String {
        let pages = match doc.page_count() {
            Ok(n) => n,
            Err(err) => {
                warn!(error = %err, "page count unavailable, no OCR text");
                return String::new();
            }
        };

        let mut out = String::new();
        for index in 0..pages {
            let page_text = self.ocr_page(doc, index).unwrap_or_else(|err| {
                warn!(page = index, error = %err, "OCR failed for page");
                String::new()
            });
            out.push_str(&page_text);
            out.push('\n');
        }
        out
    }

    fn ocr_page(&self, doc: &dyn DocumentSource, index: usize) -> anyhow::Result<String> {
        let image = doc.render_page(index, self.config.dpi)?;
        self.ocr.recognize_text(&image, &self.config.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use image::DynamicImage;
    use std::cell::Cell;

    struct FakeDoc {
        text_layer: Result<String, String>,
        pages: Vec<Result<String, String>>,
    }

    impl FakeDoc {
        fn with_text_layer(text: &str) -> Self {
            Self {
                text_layer: Ok(text.to_string()),
                pages: Vec::new(),
            }
        }

        fn scanned(pages: Vec<Result<String, String>>) -> Self {
            Self {
                text_layer: Ok(String::new()),
                pages,
            }
        }
    }

    impl DocumentSource for FakeDoc {
        fn text_layer(&self) -> Result<String> {
            self.text_layer.clone().map_err(|e| anyhow!(e))
        }

        fn page_count(&self) -> Result<usize> {
            Ok(self.pages.len())
        }

        fn render_page(&self, _index: usize, _dpi: f32) -> Result<DynamicImage> {
            Ok(DynamicImage::new_rgb8(1, 1))
        }
    }

    /// Hands back the fake page text keyed by call order, counting
    /// invocations so tests can assert OCR never ran.
    struct FakeOcr<'a> {
        doc: &'a FakeDoc,
        calls: Cell<usize>,
    }

    impl<'a> FakeOcr<'a> {
        fn new(doc: &'a FakeDoc) -> Self {
            Self {
                doc,
                calls: Cell::new(0),
            }
        }
    }

    impl OcrEngine for &FakeOcr<'_> {
        fn recognize_text(&self, _image: &DynamicImage, _language: &str) -> Result<String> {
            let index = self.calls.get();
            self.calls.set(index + 1);
            self.doc.pages[index].clone().map_err(|e| anyhow!(e))
        }
    }

    #[test]
    fn text_layer_present_skips_ocr() {
        let doc = FakeDoc::with_text_layer("HDFC Bank statement text");
        let ocr = FakeOcr::new(&doc);
        let acquirer = TextAcquirer::new(&ocr, AcquireConfig::default());

        let acquired = acquirer.acquire(&doc);
        assert_eq!(acquired.source, AcquisitionPath::TextLayer);
        assert_eq!(acquired.text, "HDFC Bank statement text");
        assert_eq!(ocr.calls.get(), 0);
    }

    #[test]
    fn blank_text_layer_falls_back_to_per_page_ocr() {
        let doc = FakeDoc::scanned(vec![Ok("page one".to_string()), Ok("page two".to_string())]);
        let ocr = FakeOcr::new(&doc);
        let acquirer = TextAcquirer::new(&ocr, AcquireConfig::default());

        let acquired = acquirer.acquire(&doc);
        assert_eq!(acquired.source, AcquisitionPath::Ocr);
        assert_eq!(acquired.text, "page one\npage two\n");
        assert_eq!(ocr.calls.get(), 2);
    }

    #[test]
    fn ocr_failure_on_one_page_degrades_to_empty_for_that_page() {
        let doc = FakeDoc::scanned(vec![
            Err("engine error".to_string()),
            Ok("page two".to_string()),
        ]);
        let ocr = FakeOcr::new(&doc);
        let acquirer = TextAcquirer::new(&ocr, AcquireConfig::default());

        let acquired = acquirer.acquire(&doc);
        assert_eq!(acquired.text, "\npage two\n");
    }

    #[test]
    fn render_failure_degrades_like_ocr_failure() {
        struct BrokenRender;

        impl DocumentSource for BrokenRender {
            fn text_layer(&self) -> Result<String> {
                Ok(String::new())
            }
            fn page_count(&self) -> Result<usize> {
                Ok(1)
            }
            fn render_page(&self, _index: usize, _dpi: f32) -> Result<DynamicImage> {
                Err(anyhow!("render failed"))
            }
        }

        struct NoOcr;
        impl OcrEngine for NoOcr {
            fn recognize_text(&self, _image: &DynamicImage, _language: &str) -> Result<String> {
                panic!("render failed before OCR could run")
            }
        }

        let acquired = TextAcquirer::new(NoOcr, AcquireConfig::default()).acquire(&BrokenRender);
        assert_eq!(acquired.source, AcquisitionPath::Ocr);
        assert_eq!(acquired.text, "\n");
    }

    #[test]
    fn unreadable_text_layer_still_tries_ocr() {
        let doc = FakeDoc {
            text_layer: Err("bad encoding".to_string()),
            pages: vec![Ok("recovered by ocr".to_string())],
        };
        let ocr = FakeOcr::new(&doc);
        let acquirer = TextAcquirer::new(&ocr, AcquireConfig::default());

        let acquired = acquirer.acquire(&doc);
        assert_eq!(acquired.source, AcquisitionPath::Ocr);
        assert_eq!(acquired.text, "recovered by ocr\n");
    }
}
