use crate::model::InvoiceRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a batch of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub documents: usize,
    pub items: usize,
    /// Source ids of records whose validation flagged a discrepancy,
    /// in batch order.
    pub flagged: Vec<String>,
    /// Sum of printed item totals across all records.
    pub items_total_sum: Decimal,
    /// Sum of printed item totals plus tax across all records.
    pub items_total_incl_sum: Decimal,
}

/// Records in input order plus the batch summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub records: Vec<InvoiceRecord>,
    pub summary: BatchSummary,
}

/// Build the summary for a sequence of already-extracted records.
pub fn summarize(records: &[InvoiceRecord]) -> BatchSummary {
    BatchSummary {
        documents: records.len(),
        items: records.iter().map(|r| r.items.len()).sum(),
        flagged: records
            .iter()
            .filter(|r| r.check.flagged)
            .map(|r| r.source_id.clone())
            .collect(),
        items_total_sum: records.iter().map(|r| r.check.items_total).sum(),
        items_total_incl_sum: records.iter().map(|r| r.check.items_total_incl).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    #[test]
    fn test_summary_counts_and_sums() {
        let records = vec![
            extract("A100 Diesel 10 18.50 1.85 186.85", "a.pdf"),
            extract("", "b.pdf"),
            extract("PETROL : EL UNLEADED 95 50 21.00 1050.00", "c.pdf"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.documents, 3);
        assert_eq!(summary.items, 2);
        assert!(summary.flagged.is_empty());
        assert_eq!(summary.items_total_sum.to_string(), "1236.85");
        assert_eq!(summary.items_total_incl_sum.to_string(), "1238.70");
    }

    #[test]
    fn test_flagged_records_listed_in_order() {
        // Expected 100, printed 108: inside the tier gate, over the 5%
        // validation tolerance.
        let bad = "B1 Widget 10 10.00 0.00 108.00";
        let records = vec![
            extract(bad, "first.pdf"),
            extract("A100 Diesel 10 18.50 1.85 186.85", "ok.pdf"),
            extract(bad, "second.pdf"),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.flagged, vec!["first.pdf", "second.pdf"]);
    }
}
