//! Output formatting and display for pdfmerge.
//!
//! This module handles all user-facing output:
//! - [`OutputFormatter`] prints leveled, quiet/verbose aware messages
//! - [`ConsoleReporter`] turns merge progress into the familiar progress lines
//! - [`report`] renders a finished [`MergeResult`] as JSON
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::merge::PdfMerger;
//! use pdfmerge::output::{ConsoleReporter, OutputFormatter};
//! use std::path::{Path, PathBuf};
//!
//! let mut reporter = ConsoleReporter::new(OutputFormatter::default());
//! PdfMerger::new().merge_with_observer(
//!     vec![PathBuf::from("a.pdf")],
//!     Path::new("out.pdf"),
//!     &mut reporter,
//! );
//! ```

pub mod formatter;
pub mod report;

pub use formatter::{MessageLevel, OutputFormatter};

use std::path::{Path, PathBuf};

use crate::merge::{MergeObserver, MergeOutcome, MergeResult};
use crate::utils::display_name;

/// Prints merge progress to stdout as it happens.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    formatter: OutputFormatter,
    decrypted: bool,
}

impl ConsoleReporter {
    /// Create a reporter printing through `formatter`.
    pub fn new(formatter: OutputFormatter) -> Self {
        Self {
            formatter,
            decrypted: false,
        }
    }
}

impl MergeObserver for ConsoleReporter {
    fn on_start(&mut self, candidates: &[PathBuf], output: &Path) {
        self.formatter.info("Starting PDF merge process...");
        self.formatter
            .info(&format!("Output file will be: {}", output.display()));
        self.formatter
            .debug(&format!("{} candidate file(s)", candidates.len()));
    }

    fn on_decrypted(&mut self, _path: &Path) {
        self.decrypted = true;
    }

    fn on_file_outcome(&mut self, path: &Path, outcome: &MergeOutcome) {
        let decrypted = std::mem::take(&mut self.decrypted);
        for (level, line) in outcome_lines(path, outcome, decrypted) {
            self.formatter.emit(level, &line);
        }
    }

    fn on_write(&mut self, output: &Path, total_pages: usize) {
        self.formatter.blank_line();
        self.formatter.info(&format!(
            "Writing merged PDF ({total_pages} total pages) to: {} ...",
            output.display()
        ));
    }

    fn on_complete(&mut self, result: &MergeResult) {
        for (level, line) in completion_lines(result) {
            self.formatter.emit(level, &line);
        }

        if result.success {
            self.formatter.section("Files merged (in order):");
            for (index, name) in result.processed_file_names.iter().enumerate() {
                self.formatter.list_item(index + 1, name);
            }
        }
    }
}

/// Lines printed for one candidate's outcome.
///
/// `decrypted` adds a notice to the processing line for a file that only
/// opened with the empty password.
pub fn outcome_lines(
    path: &Path,
    outcome: &MergeOutcome,
    decrypted: bool,
) -> Vec<(MessageLevel, String)> {
    let notice = if decrypted { " (decrypted with empty password)" } else { "" };
    let processing = format!("Processing: {} ...{notice}", display_name(path));
    let shown = path.display();

    match outcome {
        MergeOutcome::Merged(pages) => {
            vec![(MessageLevel::Info, format!("{processing} Added {pages} pages."))]
        }
        MergeOutcome::SkippedNotFound => vec![(
            MessageLevel::Warning,
            format!("Warning: File not found, skipping: {shown}"),
        )],
        MergeOutcome::SkippedNotPdf => vec![(
            MessageLevel::Warning,
            format!("Warning: File is not a PDF, skipping: {shown}"),
        )],
        MergeOutcome::SkippedEncryptedUndecryptable => vec![
            (MessageLevel::Info, processing),
            (
                MessageLevel::Error,
                format!("Error: File is encrypted and could not be decrypted: {shown}. Skipping."),
            ),
        ],
        MergeOutcome::SkippedEmptyOrCorrupt => vec![
            (MessageLevel::Info, processing),
            (
                MessageLevel::Warning,
                format!("Warning: File seems empty or corrupted (0 pages): {shown}. Skipping."),
            ),
        ],
        MergeOutcome::SkippedUnexpectedError(reason) => vec![
            (MessageLevel::Info, processing),
            (
                MessageLevel::Error,
                format!(
                    "Error: Could not read PDF (possibly corrupted): {shown}. Skipping. Details: {reason}"
                ),
            ),
        ],
    }
}

/// Lines printed once the run has finished, before the merged-file list.
pub fn completion_lines(result: &MergeResult) -> Vec<(MessageLevel, String)> {
    if result.success {
        return vec![(MessageLevel::Success, "Merge successful!".to_string())];
    }

    match &result.write_error {
        Some(err) => vec![(MessageLevel::Error, err.clone())],
        None => vec![(
            MessageLevel::Error,
            "Error: No valid PDF files were found or processed. No output file created."
                .to_string(),
        )],
    }
}
