//! Resolution of the candidate list: directory scanning and glob expansion.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};
use crate::utils::has_pdf_extension;

/// List the PDF files directly inside `dir`.
///
/// Only immediate entries are considered (no recursion). Entries are kept
/// when their name ends with `.pdf` in any case, and are returned in the
/// order the filesystem enumerates them. Callers that need a stable order
/// should sort afterwards.
///
/// # Errors
///
/// Returns [`PdfMergeError::DirectoryNotFound`] if `dir` is not a directory,
/// or an I/O error if the directory cannot be read.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PdfMergeError::directory_not_found(dir.to_path_buf()));
    }

    let mut pdfs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if has_pdf_extension(&path) {
            pdfs.push(path);
        }
    }

    tracing::debug!(dir = %dir.display(), found = pdfs.len(), "scanned directory");
    Ok(pdfs)
}

/// Expand positional inputs into candidate paths, preserving order.
///
/// An input naming an existing path is taken literally even when its name
/// contains glob metacharacters. Other inputs containing metacharacters are
/// expanded with [`glob::glob`]. Literal paths, malformed patterns, and
/// patterns that match nothing pass through unchanged so the merger can
/// report them as missing instead of silently dropping them.
///
/// # Errors
///
/// Returns an I/O error if checking whether an input exists fails.
pub fn expand_inputs<T>(inputs: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if !is_glob_pattern(input) || Path::new(input).try_exists()? {
            resolved.push(PathBuf::from(input));
            continue;
        }

        let entries = match glob::glob(input) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(pattern = input, error = %err, "malformed glob pattern, using it literally");
                resolved.push(PathBuf::from(input));
                continue;
            }
        };

        let before = resolved.len();
        for entry in entries {
            match entry {
                Ok(path) => resolved.push(path),
                Err(err) => tracing::warn!(pattern = input, error = %err, "unreadable glob entry"),
            }
        }

        if resolved.len() == before {
            resolved.push(PathBuf::from(input));
        }
    }

    Ok(resolved)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}
