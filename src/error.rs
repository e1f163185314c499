//! Error types for pdfmerge.
//!
//! Errors fall into two groups:
//!
//! - **Per-file errors** (`FileNotFound`, `WrongExtension`,
//!   `CorruptOrUnreadable`, `EncryptedUndecryptable`, `EmptyDocument`) are
//!   produced while opening a single candidate. The merger turns them into a
//!   skip outcome and moves on to the next file.
//! - **Run errors** (`OutputWriteFailure`, `DirectoryNotFound`,
//!   `NoValidInput`, `InvalidConfig`) end the run with a non-zero exit code.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// Input file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Input file does not carry a `.pdf` suffix.
    #[error("File is not a PDF: {}", path.display())]
    WrongExtension {
        /// Offending path.
        path: PathBuf,
    },

    /// The file could not be parsed as a PDF document.
    #[error("Could not read PDF (possibly corrupted): {}\n  Details: {reason}", path.display())]
    CorruptOrUnreadable {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The document is encrypted and the empty password did not open it.
    #[error("File is encrypted and could not be decrypted: {}\n  Details: {reason}", path.display())]
    EncryptedUndecryptable {
        /// Path to the encrypted file.
        path: PathBuf,
        /// Decryption failure message.
        reason: String,
    },

    /// The document parsed but has no pages.
    #[error("File seems empty or corrupted (0 pages): {}", path.display())]
    EmptyDocument {
        /// Path to the empty document.
        path: PathBuf,
    },

    /// The merged document could not be written.
    #[error("Error writing output file {}: {source}", path.display())]
    OutputWriteFailure {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory source does not exist or is not a directory.
    #[error("Input directory not found: {}", path.display())]
    DirectoryNotFound {
        /// Path given as directory.
        path: PathBuf,
    },

    /// Nothing to merge: no input method, or a directory without PDFs.
    #[error("{message}")]
    NoValidInput {
        /// What was missing.
        message: String,
    },

    /// Arguments could not be turned into a valid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl PdfMergeError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a WrongExtension error.
    pub fn wrong_extension(path: PathBuf) -> Self {
        Self::WrongExtension { path }
    }

    /// Create a CorruptOrUnreadable error.
    pub fn corrupt(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::CorruptOrUnreadable {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedUndecryptable error.
    pub fn encrypted(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::EncryptedUndecryptable {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EmptyDocument error.
    pub fn empty_document(path: PathBuf) -> Self {
        Self::EmptyDocument { path }
    }

    /// Create an OutputWriteFailure error.
    pub fn write_failure(path: PathBuf, source: io::Error) -> Self {
        Self::OutputWriteFailure { path, source }
    }

    /// Create a DirectoryNotFound error.
    pub fn directory_not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    /// Create a NoValidInput error.
    pub fn no_valid_input(message: impl Into<String>) -> Self {
        Self::NoValidInput {
            message: message.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether the merger skips the file and keeps going on this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::WrongExtension { .. }
                | Self::CorruptOrUnreadable { .. }
                | Self::EncryptedUndecryptable { .. }
                | Self::EmptyDocument { .. }
        )
    }

    /// Process exit code for an error that ends the run.
    ///
    /// Every run failure maps to 1; clap uses 2 for usage errors on its own.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
