use invex_core::error::InvexError;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::commands::{is_supported, options_from, read_document, source_id};
use crate::output;

pub fn run(
    dir: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
    tolerance: Option<Decimal>,
) -> Result<(), InvexError> {
    let options = options_from(tolerance);

    // Sorted for a deterministic batch order
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_supported(p))
        .collect();
    paths.sort();

    // An unreadable document degrades to empty text (and so an all-unset
    // record) instead of aborting the rest of the batch.
    let mut documents: Vec<(String, String)> = Vec::with_capacity(paths.len());
    for path in &paths {
        let id = source_id(path);
        match read_document(path) {
            Ok(text) => documents.push((id, text)),
            Err(e) => {
                eprintln!("Warning: {}: {e}", path.display());
                documents.push((id, String::new()));
            }
        }
    }

    let result = invex_core::extract_batch_with_options(
        documents.iter().map(|(id, text)| (text.as_str(), id.as_str())),
        &options,
    );

    match output_format {
        "json" => output::json::print_batch(&result)?,
        _ => output::table::print_batch(&result),
    }

    if let Some(path) = out {
        std::fs::write(&path, serde_json::to_vec_pretty(&result)?)?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}
