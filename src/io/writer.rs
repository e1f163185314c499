//! PDF writing and saving operations.
//!
//! The writer compresses the document, serializes it through a buffered
//! writer into a sibling temp file and renames it over the target, so an
//! existing output is only replaced by a complete file.

use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress streams before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF document to `path`, returning the written size in bytes.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::OutputWriteFailure`] if the file cannot be
    /// created, written, flushed or moved into place. No partial temp file
    /// is left behind.
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<u64> {
        if self.options.compress {
            doc.compress();
        }

        let write_path = if self.options.atomic {
            temp_path_for(path)
        } else {
            path.to_path_buf()
        };

        let written = self.write_to(doc, &write_path).and_then(|()| {
            if self.options.atomic {
                std::fs::rename(&write_path, path)?;
            }
            Ok(std::fs::metadata(path).map(|m| m.len()).unwrap_or(0))
        });

        match written {
            Ok(size) => {
                tracing::debug!(path = %path.display(), size, "wrote merged pdf");
                Ok(size)
            }
            Err(err) => {
                if self.options.atomic {
                    let _ = std::fs::remove_file(&write_path);
                }
                Err(PdfMergeError::write_failure(path.to_path_buf(), err))
            }
        }
    }

    fn write_to(&self, doc: &mut Document, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);
        doc.save_to(&mut writer).map_err(std::io::Error::other)?;
        writer.flush()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
