//! Per-file merge outcomes.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::{PdfMergeError, Result};
use crate::io::OpenedPdf;

/// What happened to one candidate during a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum MergeOutcome {
    /// All pages were appended; carries the page count.
    Merged(usize),
    /// The path does not exist.
    SkippedNotFound,
    /// The file name does not end with `.pdf`.
    SkippedNotPdf,
    /// Encrypted, and the empty password did not open it.
    SkippedEncryptedUndecryptable,
    /// Parsed, but has no pages.
    SkippedEmptyOrCorrupt,
    /// Could not be parsed or read; carries the reason.
    SkippedUnexpectedError(String),
}

impl MergeOutcome {
    /// Map the result of opening a candidate to its outcome.
    ///
    /// This is a pure function of the open attempt: every expected failure
    /// already arrives as a typed error, and a document with zero pages is
    /// the only successful open that still gets skipped.
    pub fn classify(attempt: &Result<OpenedPdf>) -> Self {
        match attempt {
            Ok(opened) if opened.page_count == 0 => Self::SkippedEmptyOrCorrupt,
            Ok(opened) => Self::Merged(opened.page_count),
            Err(PdfMergeError::FileNotFound { .. }) => Self::SkippedNotFound,
            Err(PdfMergeError::WrongExtension { .. }) => Self::SkippedNotPdf,
            Err(PdfMergeError::EncryptedUndecryptable { .. }) => {
                Self::SkippedEncryptedUndecryptable
            }
            Err(PdfMergeError::EmptyDocument { .. }) => Self::SkippedEmptyOrCorrupt,
            Err(PdfMergeError::CorruptOrUnreadable { reason, .. }) => {
                Self::SkippedUnexpectedError(reason.clone())
            }
            Err(other) => Self::SkippedUnexpectedError(other.to_string()),
        }
    }

    /// Whether the candidate contributed pages to the output.
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }

    /// Pages contributed to the output.
    pub fn page_count(&self) -> usize {
        match self {
            Self::Merged(pages) => *pages,
            _ => 0,
        }
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merged(pages) => write!(f, "merged ({pages} pages)"),
            Self::SkippedNotFound => write!(f, "skipped: file not found"),
            Self::SkippedNotPdf => write!(f, "skipped: not a PDF"),
            Self::SkippedEncryptedUndecryptable => {
                write!(f, "skipped: encrypted and could not be decrypted")
            }
            Self::SkippedEmptyOrCorrupt => write!(f, "skipped: empty or corrupted (0 pages)"),
            Self::SkippedUnexpectedError(reason) => write!(f, "skipped: {reason}"),
        }
    }
}

/// Outcome recorded for one candidate path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    /// Candidate path as given.
    pub path: PathBuf,
    /// What happened to it.
    pub outcome: MergeOutcome,
}
