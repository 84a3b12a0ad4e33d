use invex_core::batch::BatchResult;
use invex_core::error::InvexError;
use invex_core::model::InvoiceRecord;

pub fn print_record(record: &InvoiceRecord) -> Result<(), InvexError> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

pub fn print_batch(result: &BatchResult) -> Result<(), InvexError> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
