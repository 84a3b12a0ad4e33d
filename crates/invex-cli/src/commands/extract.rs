use invex_core::error::InvexError;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::commands::{options_from, read_document, source_id};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
    tolerance: Option<Decimal>,
) -> Result<(), InvexError> {
    let options = options_from(tolerance);
    let text = read_document(&input_file)?;
    let record = invex_core::extract_with_options(&text, &source_id(&input_file), &options);

    match output_format {
        "json" => output::json::print_record(&record)?,
        _ => output::table::print_record(&record),
    }

    if let Some(path) = out {
        std::fs::write(&path, serde_json::to_vec_pretty(&record)?)?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}
