pub mod header;
pub mod lines;
pub mod tiers;
pub mod values;

use crate::model::{InvoiceRecord, LineItem};
use crate::validate;
use crate::ExtractOptions;

/// Parse one document's extracted text into an InvoiceRecord.
///
/// Total function: unrecognized lines are skipped, missing header fields
/// stay unset, and empty or garbage input yields an empty record rather
/// than an error. Items keep the order of their source lines.
pub fn parse_document(text: &str, source_id: &str, options: &ExtractOptions) -> InvoiceRecord {
    let header = header::parse_header(text);

    let mut items: Vec<LineItem> = Vec::new();
    for line in lines::lines(text) {
        if let Some(m) = tiers::match_line(line) {
            let check = validate::check_item(m.quantity, m.price, m.tax, m.total, options.tolerance);
            items.push(LineItem {
                item_code: m.item_code,
                description: m.description,
                quantity: m.quantity,
                unit: m.unit,
                price: m.price,
                tax: m.tax,
                total: m.total,
                tier: m.tier,
                check,
            });
        }
    }

    let check = validate::check_record(&items, header.total_excl, header.total_incl, options.tolerance);

    InvoiceRecord {
        source_id: source_id.to_string(),
        date: header.date,
        reference: header.reference,
        total_excl: header.total_excl,
        total_incl: header.total_incl,
        items,
        check,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;
    use rust_decimal_macros::dec;

    const INVOICE: &str = "\
TAX INVOICE
Date: 15-03-2024
Our Reference: INV10234

Item Code   Item Description   Qty   Price   Tax   Total
LSD : EL LOW SULPHUR DIESEL : EL 20,049.00 24.1264 483,710.19
PETROL : E 84217,84216 20,324.00 20.6990 420,686.48

Total (Excl)    904,396.67
Total (Incl)    1,040,056.17
";

    #[test]
    fn test_parse_full_document() {
        let record = parse_document(INVOICE, "mar.pdf", &ExtractOptions::default());
        assert_eq!(record.source_id, "mar.pdf");
        assert_eq!(record.date.as_deref(), Some("15-03-2024"));
        assert_eq!(record.reference.as_deref(), Some("INV10234"));
        assert_eq!(record.total_excl, Some(dec!(904396.67)));
        assert_eq!(record.items.len(), 2);
        assert_eq!(record.items[0].tier, Tier::CompoundStandard);
        assert_eq!(record.items[1].tier, Tier::CompoundAlternate);
        // Items in source order
        assert_eq!(record.items[0].item_code.as_deref(), Some("LSD : EL"));
        assert_eq!(record.items[1].item_code.as_deref(), Some("PETROL : E"));
    }

    #[test]
    fn test_declared_total_consistency() {
        let record = parse_document(INVOICE, "mar.pdf", &ExtractOptions::default());
        // 483,710.19 + 420,686.48 = 904,396.67 = declared Total (Excl)
        assert_eq!(record.check.items_total, dec!(904396.67));
        assert_eq!(record.check.flagged_items, 0);
        assert!(!record.check.flagged);
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        let record = parse_document("", "empty.pdf", &ExtractOptions::default());
        assert!(record.is_empty());
        assert_eq!(record.source_id, "empty.pdf");
        assert!(!record.check.flagged);
    }

    #[test]
    fn test_garbage_input_yields_empty_record() {
        let record = parse_document(
            "%%%% \u{fffd}\u{fffd} binary noise 12 ab ---",
            "noise.pdf",
            &ExtractOptions::default(),
        );
        assert!(record.items.is_empty());
        assert!(record.date.is_none());
    }

    #[test]
    fn test_missing_date_leaves_other_fields() {
        let text = "Our Reference: INV555\nA100 Diesel 10 18.50 1.85 186.85\n";
        let record = parse_document(text, "nodate.pdf", &ExtractOptions::default());
        assert_eq!(record.date, None);
        assert_eq!(record.reference.as_deref(), Some("INV555"));
        assert_eq!(record.items.len(), 1);
    }
}
