pub mod batch;
pub mod extract;

use invex_core::error::InvexError;
use invex_core::extraction::pdftotext::PdftotextExtractor;
use invex_core::extraction::TextExtractor;
use invex_core::ExtractOptions;
use rust_decimal::Decimal;
use std::path::Path;

/// Build engine options from the optional CLI tolerance.
pub fn options_from(tolerance: Option<Decimal>) -> ExtractOptions {
    match tolerance {
        Some(tolerance) => ExtractOptions { tolerance },
        None => ExtractOptions::default(),
    }
}

/// Read one document into raw text: PDFs go through pdftotext, plain text
/// is read as-is.
pub fn read_document(path: &Path) -> Result<String, InvexError> {
    match extension_of(path) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => {
            let bytes = std::fs::read(path)?;
            PdftotextExtractor::new().extract_text(&bytes)
        }
        Some(ext) if ext.eq_ignore_ascii_case("txt") => Ok(std::fs::read_to_string(path)?),
        _ => Err(InvexError::UnsupportedInput(path.display().to_string())),
    }
}

/// True for file types the CLI knows how to read.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension_of(path), Some(ext) if ext.eq_ignore_ascii_case("pdf") || ext.eq_ignore_ascii_case("txt"))
}

/// Label used as the record's source id.
pub fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().into_owned())
}
