use invex_core::batch::BatchResult;
use invex_core::model::InvoiceRecord;

pub fn print_record(record: &InvoiceRecord) {
    println!("=== {} ===\n", record.source_id);

    println!("  Date:          {}", field(&record.date));
    println!("  Reference:     {}", field(&record.reference));
    println!("  Total (Excl):  {}", amount(&record.total_excl));
    println!("  Total (Incl):  {}", amount(&record.total_incl));

    if record.items.is_empty() {
        println!("\n  No line items recognized");
    } else {
        println!("\n  Items:");
        let max_label = record
            .items
            .iter()
            .map(|i| item_label(i).len())
            .max()
            .unwrap_or(10);

        for item in &record.items {
            let marker = if item.check.flagged { "!" } else { " " };
            println!(
                "  {} {:<width$}  qty {}  price {}  tax {}  total {}",
                marker,
                item_label(item),
                item.quantity,
                item.price,
                item.tax,
                item.total,
                width = max_label
            );
            if item.check.flagged {
                println!(
                    "      expected {} (off by {}, {:.1}%)",
                    item.check.total_expected,
                    item.check.discrepancy_abs,
                    item.check.discrepancy_rel * rust_decimal::Decimal::ONE_HUNDRED
                );
            }
        }
    }

    if record.check.flagged {
        println!("\n  ! discrepancy flagged for this document");
    }
    println!();
}

pub fn print_batch(result: &BatchResult) {
    for record in &result.records {
        print_record(record);
    }

    println!("--- Batch summary ---\n");
    println!("  Documents:           {}", result.summary.documents);
    println!("  Items:               {}", result.summary.items);
    println!("  Items total (excl):  {}", result.summary.items_total_sum);
    println!(
        "  Items total (incl):  {}",
        result.summary.items_total_incl_sum
    );
    if result.summary.flagged.is_empty() {
        println!("  Flagged:             none");
    } else {
        println!("  Flagged:             {}", result.summary.flagged.join(", "));
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn amount(value: &Option<rust_decimal::Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

fn item_label(item: &invex_core::model::LineItem) -> String {
    match (&item.item_code, &item.description) {
        (Some(code), Some(desc)) => format!("{code}  {desc}"),
        (Some(code), None) => code.clone(),
        (None, Some(desc)) => desc.clone(),
        (None, None) => "(unnamed)".into(),
    }
}
