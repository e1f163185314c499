//! Core PDF merging implementation.
//!
//! The run is strictly sequential: candidates are opened one at a time,
//! classified, and either appended to the accumulator or skipped. A single
//! bad file never aborts the run; only writing the output can fail it.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::io::{PdfReader, PdfWriter};
use crate::merge::accumulator::PageAccumulator;
use crate::merge::observer::{MergeObserver, NoopObserver};
use crate::merge::outcome::{FileOutcome, MergeOutcome};
use crate::utils::{display_name, sort_naturally};

/// Result of a merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    /// Pages in the written output; 0 when nothing was written.
    pub total_pages_written: usize,

    /// Base names of merged files, in output order; empty when nothing was
    /// written.
    pub processed_file_names: Vec<String>,

    /// One outcome per candidate, in processing order.
    pub outcomes: Vec<FileOutcome>,

    /// True iff at least one file was merged and the output was written.
    pub success: bool,

    /// Target output path.
    pub output_path: PathBuf,

    /// Why writing the output failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_error: Option<String>,
}

impl MergeResult {
    /// Number of candidates that contributed pages.
    pub fn merged_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_merged()).count()
    }

    /// Number of candidates that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.merged_count()
    }
}

/// PDF merger that concatenates documents in order.
#[derive(Debug, Clone, Default)]
pub struct PdfMerger {
    /// Reader for opening candidates.
    reader: PdfReader,

    /// Writer for the merged output.
    writer: PdfWriter,

    /// Natural-sort the candidates before merging.
    sort: bool,
}

impl PdfMerger {
    /// Create a merger that keeps the input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable natural sorting of candidates.
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Merge `paths` into `output` without progress reporting.
    pub fn merge(&self, paths: Vec<PathBuf>, output: &Path) -> MergeResult {
        self.merge_with_observer(paths, output, &mut NoopObserver)
    }

    /// Merge `paths` into `output`, reporting progress to `observer`.
    ///
    /// Each candidate is checked for existence, `.pdf` suffix, parseability,
    /// encryption (only the empty password is tried) and page count. Usable
    /// candidates have all their pages appended in order; the rest are
    /// recorded as skipped. The output is written only if at least one
    /// candidate was merged, and is replaced only by a complete file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdfmerge::merge::PdfMerger;
    /// use std::path::{Path, PathBuf};
    ///
    /// let result = PdfMerger::new()
    ///     .with_sort(true)
    ///     .merge(vec![PathBuf::from("part10.pdf"), PathBuf::from("part2.pdf")], Path::new("book.pdf"));
    /// assert!(result.success);
    /// ```
    pub fn merge_with_observer(
        &self,
        mut paths: Vec<PathBuf>,
        output: &Path,
        observer: &mut dyn MergeObserver,
    ) -> MergeResult {
        if self.sort {
            sort_naturally(&mut paths);
        }

        observer.on_start(&paths, output);
        tracing::debug!(candidates = paths.len(), output = %output.display(), sort = self.sort, "starting merge");

        let mut accumulator = PageAccumulator::new();
        let mut outcomes = Vec::with_capacity(paths.len());
        let mut merged_names = Vec::new();

        for path in paths {
            let attempt = self.reader.open(&path);
            let outcome = MergeOutcome::classify(&attempt);

            if let Ok(opened) = &attempt
                && opened.decrypted
            {
                observer.on_decrypted(&path);
            }

            if let (Ok(opened), MergeOutcome::Merged(_)) = (attempt, &outcome) {
                accumulator.append(opened.document);
                merged_names.push(display_name(&path));
            } else {
                tracing::debug!(path = %path.display(), %outcome, "skipping candidate");
            }

            observer.on_file_outcome(&path, &outcome);
            outcomes.push(FileOutcome { path, outcome });
        }

        let mut result = MergeResult {
            total_pages_written: 0,
            processed_file_names: Vec::new(),
            outcomes,
            success: false,
            output_path: output.to_path_buf(),
            write_error: None,
        };

        if accumulator.is_empty() {
            tracing::info!("no valid PDF files were processed");
            observer.on_complete(&result);
            return result;
        }

        let total_pages = accumulator.page_count();
        observer.on_write(output, total_pages);

        let mut document = accumulator.into_document();
        match self.writer.save(&mut document, output) {
            Ok(_) => {
                result.total_pages_written = total_pages;
                result.processed_file_names = merged_names;
                result.success = true;
            }
            Err(err) => {
                tracing::debug!(output = %output.display(), error = %err, "failed to write merged pdf");
                result.write_error = Some(err.to_string());
            }
        }

        observer.on_complete(&result);
        result
    }
}

/// Merge `paths` into `output`, optionally natural-sorting them first.
pub fn merge_pdfs(paths: Vec<PathBuf>, output: &Path, sort: bool) -> MergeResult {
    PdfMerger::new().with_sort(sort).merge(paths, output)
}
