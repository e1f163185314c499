//! Utilities for path handling and natural ordering.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Whether the file name ends with `.pdf`, ignoring case.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}

/// Base name of a path for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    /// Lowercased non-digit run.
    Text(String),
    /// Digit run with leading zeros stripped.
    Number(String),
}

impl Chunk {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

/// Split a string into alternating text/digit runs.
///
/// The key always starts with a text run (possibly empty), so runs at the
/// same index in two keys are always of the same kind.
fn natural_key(s: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            if digits.is_empty() {
                chunks.push(Chunk::Text(std::mem::take(&mut text).to_lowercase()));
            }
            digits.push(c);
        } else {
            if !digits.is_empty() {
                chunks.push(Chunk::Number(strip_leading_zeros(&digits)));
                digits.clear();
            }
            text.push(c);
        }
    }

    if digits.is_empty() {
        chunks.push(Chunk::Text(text.to_lowercase()));
    } else {
        chunks.push(Chunk::Number(strip_leading_zeros(&digits)));
        chunks.push(Chunk::Text(String::new()));
    }

    chunks
}

fn strip_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Compare two strings in natural order.
///
/// Digit runs compare by numeric value (of any length), other runs compare
/// case-insensitively, so `file2` sorts before `file10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = natural_key(a);
    let right = natural_key(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = l.compare(r);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len())
}

/// Sort paths in natural order of their full string form.
///
/// The sort is stable: paths that compare equal keep their input order.
pub fn sort_naturally(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
}
