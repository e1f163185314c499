//! Opening a single merge candidate.
//!
//! [`PdfReader::open`] runs the per-file checks in a fixed order: existence,
//! `.pdf` suffix, parsing, empty-password decryption, page count. Each
//! expected failure comes back as a typed [`PdfMergeError`] so the merger can
//! classify it without string matching.

use lopdf::{Document, Object};
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};
use crate::utils::has_pdf_extension;

/// A parsed, decrypted candidate ready to be appended.
#[derive(Debug)]
pub struct OpenedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Whether the document had to be decrypted with the empty password.
    pub decrypted: bool,
}

/// Reader for merge candidates.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Open a candidate path.
    ///
    /// A document with zero pages is returned successfully with
    /// `page_count == 0`; deciding whether that counts as a skip belongs to
    /// the caller.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::FileNotFound`] if the path does not exist
    /// - [`PdfMergeError::WrongExtension`] if the name lacks a `.pdf` suffix
    /// - [`PdfMergeError::EncryptedUndecryptable`] if the document is
    ///   encrypted and the empty password does not open it
    /// - [`PdfMergeError::CorruptOrUnreadable`] for any other parse failure
    pub fn open(&self, path: &Path) -> Result<OpenedPdf> {
        if !path.try_exists()? {
            return Err(PdfMergeError::file_not_found(path.to_path_buf()));
        }

        if !has_pdf_extension(path) {
            return Err(PdfMergeError::wrong_extension(path.to_path_buf()));
        }

        let mut document = Document::load(path).map_err(|err| classify_load_error(path, err))?;

        let decrypted = document.is_encrypted();
        if decrypted {
            open_with_empty_password(&mut document)
                .map_err(|err| PdfMergeError::encrypted(path.to_path_buf(), err.to_string()))?;
            tracing::info!(path = %path.display(), "decrypted with empty password");
        }

        let page_count = document.get_pages().len();
        tracing::debug!(path = %path.display(), page_count, version = %document.version, "opened pdf");

        Ok(OpenedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            decrypted,
        })
    }
}

/// Leave an encrypted document in plaintext with no `/Encrypt` entry.
///
/// The loader already decrypts documents that open with the empty password
/// and records an encryption state, but keeps the `/Encrypt` dictionary; a
/// second decryption pass would scramble the plaintext. Without a recorded
/// state the empty password is tried once more.
fn open_with_empty_password(document: &mut Document) -> lopdf::Result<()> {
    if document.encryption_state.is_none() {
        return document.decrypt("");
    }

    if let Some(Object::Reference(id)) = document.trailer.remove(b"Encrypt") {
        document.objects.remove(&id);
    }
    Ok(())
}

/// Tell an encrypted document apart from a corrupt one after a failed load.
///
/// The load may already have tried the empty password; a failure then
/// surfaces as a load error. It counts as encryption when the error says so
/// or when the file declares an `/Encrypt` dictionary.
fn classify_load_error(path: &Path, err: lopdf::Error) -> PdfMergeError {
    let reason = err.to_string();
    let lowered = reason.to_lowercase();

    let mentions_encryption = ["encrypt", "decrypt", "password"]
        .iter()
        .any(|needle| lowered.contains(needle));

    if mentions_encryption || declares_encryption(path) {
        PdfMergeError::encrypted(path.to_path_buf(), reason)
    } else {
        PdfMergeError::corrupt(path.to_path_buf(), reason)
    }
}

fn declares_encryption(path: &Path) -> bool {
    const MARKER: &[u8] = b"/Encrypt";
    std::fs::read(path)
        .map(|bytes| bytes.windows(MARKER.len()).any(|window| window == MARKER))
        .unwrap_or(false)
}
