pub mod batch;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod validate;

use batch::BatchResult;
use model::InvoiceRecord;
use rust_decimal::Decimal;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Relative discrepancy above which an item or record is flagged.
    pub tolerance: Decimal,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            // 5%
            tolerance: Decimal::new(5, 2),
        }
    }
}

/// Extract one invoice record from raw document text.
///
/// Pure function of its input: never fails, and malformed input yields a
/// record with unset fields and no items. `source_id` labels the record
/// (typically the filename) and plays no part in parsing.
pub fn extract(text: &str, source_id: &str) -> InvoiceRecord {
    extract_with_options(text, source_id, &ExtractOptions::default())
}

/// `extract` with an explicit validation tolerance.
pub fn extract_with_options(
    text: &str,
    source_id: &str,
    options: &ExtractOptions,
) -> InvoiceRecord {
    parsing::parse_document(text, source_id, options)
}

/// Extract a batch of `(text, source_id)` documents.
///
/// One record per input document in input order, regardless of content; a
/// document that yields nothing still contributes an empty record, so one
/// bad input never affects the rest of the batch.
pub fn extract_batch<'a, I>(documents: I) -> BatchResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    extract_batch_with_options(documents, &ExtractOptions::default())
}

/// `extract_batch` with an explicit validation tolerance.
pub fn extract_batch_with_options<'a, I>(documents: I, options: &ExtractOptions) -> BatchResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let records: Vec<InvoiceRecord> = documents
        .into_iter()
        .map(|(text, source_id)| extract_with_options(text, source_id, options))
        .collect();
    let summary = batch::summarize(&records);
    BatchResult { records, summary }
}
