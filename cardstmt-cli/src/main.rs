//! cardstmt: extract structured fields from credit-card statement PDFs.
//!
//! Thin driver around `cardstmt-ingest` + `cardstmt-core`: enumerate a
//! folder of PDFs, run each through acquire → detect → extract, print
//! one JSON record per document. One document failing never stops the
//! rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cardstmt_core::parse_statement;
use cardstmt_ingest::{AcquireConfig, AcquisitionPath, PdfDocument, TesseractOcr, TextAcquirer};

#[derive(Parser, Debug)]
#[command(
    name = "cardstmt",
    version,
    about = "Extract card, billing and transaction fields from credit-card statement PDFs"
)]
struct Cli {
    /// Folder containing statement PDFs
    #[arg(default_value = "statements")]
    folder: PathBuf,

    /// OCR language code for scanned statements
    #[arg(long, default_value = "eng")]
    language: String,

    /// Render resolution for the OCR fallback
    #[arg(long, default_value_t = 300.0)]
    dpi: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let acquirer = TextAcquirer::new(
        TesseractOcr,
        AcquireConfig {
            language: cli.language,
            dpi: cli.dpi,
        },
    );

    let files = pdf_files(&cli.folder)?;
    if files.is_empty() {
        println!("No PDF files found in {}", cli.folder.display());
        return Ok(());
    }

    for path in files {
        println!("\n==============================");
        println!("Parsing: {}", path.display());
        println!("==============================");

        if let Err(err) = process(&acquirer, &path) {
            eprintln!("Error parsing {}: {err:#}", path.display());
        }
    }

    Ok(())
}

fn pdf_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)
        .with_context(|| format!("reading {}", folder.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn process(acquirer: &TextAcquirer<TesseractOcr>, path: &Path) -> Result<()> {
    let doc = PdfDocument::open(path)?;
    let acquired = acquirer.acquire(&doc);
    if acquired.source == AcquisitionPath::Ocr {
        println!("(no text layer, used OCR)");
    }

    let record = parse_statement(&acquired.text)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
