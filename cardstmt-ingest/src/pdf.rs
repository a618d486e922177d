//! PDF-backed document source: pdf-extract for the text layer, pdfium
//! for page rasterization.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, ensure};
use image::DynamicImage;
use pdfium_render::prelude::{PdfRenderConfig, Pdfium};

use crate::source::DocumentSource;

/// One statement PDF, held in memory for the lifetime of its pipeline
/// run. Dropping it releases everything; no handles outlive it.
#[derive(Debug)]
pub struct PdfDocument {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl PdfDocument {
    /// Open a statement PDF.
    ///
    /// Fails when the file cannot be read or is not a PDF at all.
    /// That failure is fatal for this document only; batch callers
    /// report it and move on to the next file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes =
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        ensure!(
            bytes.starts_with(b"%PDF-"),
            "{} is not a PDF document",
            path.display()
        );
        Ok(Self { path, bytes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for PdfDocument {
    fn text_layer(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.bytes)
            .with_context(|| format!("extracting text layer from {}", self.path.display()))
    }

    fn page_count(&self) -> Result<usize> {
        let pdfium = bind_pdfium()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(&self.bytes, None)
            .map_err(|e| anyhow!("loading {} with pdfium: {e:?}", self.path.display()))?;
        Ok(doc.pages().len() as usize)
    }

    fn render_page(&self, index: usize, dpi: f32) -> Result<DynamicImage> {
        let pdfium = bind_pdfium()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(&self.bytes, None)
            .map_err(|e| anyhow!("loading {} with pdfium: {e:?}", self.path.display()))?;
        let page = doc
            .pages()
            .get(index as u16)
            .map_err(|e| anyhow!("page {index} of {}: {e:?}", self.path.display()))?;

        // pdfium renders at 72 DPI page units; scale up to the target.
        let config = PdfRenderConfig::new().scale_page_by_factor(dpi / 72.0);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| anyhow!("rendering page {index} of {}: {e:?}", self.path.display()))?;
        Ok(bitmap.as_image())
    }
}

/// Bind to a pdfium library next to the binary first, then fall back
/// to the system install.
fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| anyhow!("loading pdfium library: {e:?}"))?;
    Ok(Pdfium::new(bindings))
}
