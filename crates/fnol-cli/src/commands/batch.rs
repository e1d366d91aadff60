//! Batch command - process a directory of sample documents.
//!
//! Every supported document gets a sibling `<name>.json` result file;
//! documents that fail to decode are skipped with a note rather than
//! aborting the run.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use fnol_extractor::Extractor;
use std::path::{Path, PathBuf};

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Documents processed successfully
    pub processed: Vec<PathBuf>,
    /// Documents skipped, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

/// Process every supported document under `dir`, writing one JSON
/// result per document into `out_dir`.
pub fn run_batch(extractor: &Extractor, dir: &Path, out_dir: &Path) -> Result<BatchSummary> {
    if !dir.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }
    std::fs::create_dir_all(out_dir)?;

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && fnol_decode::is_supported(p))
        .collect();
    entries.sort();

    let mut summary = BatchSummary::default();

    for path in entries {
        match super::route_document(extractor, &path) {
            Ok(result) => {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("result");
                let out_path = out_dir.join(format!("{}.json", stem));
                std::fs::write(&out_path, serde_json::to_string_pretty(&result)?)?;
                summary.processed.push(path);
            }
            Err(e) => {
                summary.skipped.push((path, e.to_string()));
            }
        }
    }

    Ok(summary)
}

/// Execute the batch command.
pub fn execute_batch(args: BatchArgs, extractor: &Extractor) -> Result<()> {
    let out_dir = args.out_dir.as_deref().unwrap_or(&args.dir);
    let summary = run_batch(extractor, &args.dir, out_dir)?;

    for (path, reason) in &summary.skipped {
        eprintln!("Skipped {}: {}", path.display(), reason);
    }
    println!(
        "Processed {} document(s), skipped {}",
        summary.processed.len(),
        summary.skipped.len()
    );

    Ok(())
}
