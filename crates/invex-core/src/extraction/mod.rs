pub mod pdftotext;

use crate::error::InvexError;

/// Trait for document text extraction backends.
///
/// The engine itself only ever sees text; decoding a PDF (or any other
/// container) into text is the backend's job.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text content of a document.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, InvexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
