//! Tesseract-backed OCR engine.

use anyhow::{Result, anyhow};
use image::DynamicImage;
use rusty_tesseract::{Args, Image};

use crate::source::OcrEngine;

/// OCR via the system tesseract install.
///
/// Language data (tessdata) resolution is the install's concern; this
/// engine only passes the language code through. Errors propagate to
/// the acquirer, which downgrades them to empty page text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TesseractOcr;

impl OcrEngine for TesseractOcr {
    fn recognize_text(&self, image: &DynamicImage, language: &str) -> Result<String> {
        // Tesseract reads grayscale most reliably.
        let gray = DynamicImage::ImageLuma8(image.to_luma8());
        let tess_image = Image::from_dynamic_image(&gray)
            .map_err(|e| anyhow!("preparing page image for OCR: {e:?}"))?;

        let mut args = Args::default();
        args.lang = language.to_string();

        rusty_tesseract::image_to_string(&tess_image, &args)
            .map_err(|e| anyhow!("tesseract: {e:?}"))
    }
}
