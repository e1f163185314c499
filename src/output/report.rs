//! Machine-readable run report.

use crate::error::{PdfMergeError, Result};
use crate::merge::MergeResult;

/// Render `result` as pretty-printed JSON.
pub fn to_json(result: &MergeResult) -> Result<String> {
    serde_json::to_string_pretty(result)
        .map_err(|err| PdfMergeError::other(format!("Failed to serialize report: {err}")))
}

/// Print `result` as JSON on stdout.
pub fn print_json(result: &MergeResult) -> Result<()> {
    println!("{}", to_json(result)?);
    Ok(())
}
