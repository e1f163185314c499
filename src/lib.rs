//! pdfmerge - Merge PDF files into a single document.
//!
//! This library merges an ordered list of PDF files, or every PDF in a
//! directory, into one output file. Files that cannot be used are skipped
//! and reported instead of aborting the run:
//!
//! - missing paths and non-`.pdf` names
//! - corrupted or unparsable documents
//! - documents encrypted with a password other than the empty one
//! - documents without pages
//!
//! # Examples
//!
//! ## Basic Merge
//!
//! ```no_run
//! use pdfmerge::merge::PdfMerger;
//! use std::path::{Path, PathBuf};
//!
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let result = PdfMerger::new().merge(inputs, Path::new("merged.pdf"));
//!
//! for file in &result.outcomes {
//!     println!("{}: {}", file.path.display(), file.outcome);
//! }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfmerge::discovery::discover_pdfs;
//! use pdfmerge::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! for path in discover_pdfs(Path::new("scans"))? {
//!     let opened = PdfReader::new().open(&path)?;
//!     println!("{} has {} pages", path.display(), opened.page_count);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Config, ReportFormat, SourceSpec};
pub use error::{PdfMergeError, Result};
pub use merge::{MergeOutcome, MergeResult, PdfMerger, merge_pdfs};

use clap::CommandFactory;

use crate::output::{ConsoleReporter, OutputFormatter, report};

/// Run one merge from parsed command-line arguments.
///
/// Prints help when no input method was given. Progress goes to stdout as
/// text lines, or a single JSON document with `--report json`.
///
/// # Errors
///
/// Returns an error when no input was given, or the directory is missing or
/// holds no PDFs. A merge that runs but
/// produces no output is reported through [`MergeResult::success`].
pub fn run(cli: &Cli) -> Result<MergeResult> {
    if !cli.has_input() {
        Cli::command().print_help()?;
        println!();
    }

    let config = Config::try_from(cli)?;
    let formatter = OutputFormatter::from_config(&config);

    if let Some(dir) = config.directory() {
        formatter.info(&format!("Scanning directory: {}", dir.display()));
    }
    let inputs = config.resolve_inputs()?;
    tracing::debug!(candidates = inputs.len(), sort = config.sort, "resolved inputs");

    let merger = PdfMerger::new().with_sort(config.sort);

    let result = match config.report {
        ReportFormat::Text => {
            let mut reporter = ConsoleReporter::new(formatter);
            merger.merge_with_observer(inputs, &config.output, &mut reporter)
        }
        ReportFormat::Json => {
            let result = merger.merge(inputs, &config.output);
            report::print_json(&result)?;
            result
        }
    };

    Ok(result)
}
