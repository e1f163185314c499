//! CLI argument parsing for pdfmerge.
//!
//! This module defines the command-line interface structure using `clap`.
//! Turning the parsed arguments into a [`Config`](crate::config::Config)
//! happens in [`crate::config`].
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Merging {} inputs", cli.inputs.len());
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default output path when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "merged_output.pdf";

/// Merge multiple PDF files into a single document.
///
/// Inputs are processed in the order given. Files that are missing, not
/// PDFs, corrupted, empty or encrypted with a real password are skipped
/// with a warning; the remaining pages are written to the output.
#[derive(Parser, Debug, Clone)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge multiple PDF files into a single document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// Paths to the input PDF files to merge
    ///
    /// Glob patterns are expanded in place.
    ///
    /// Examples:
    ///   pdfmerge file1.pdf file2.pdf file3.pdf
    ///   pdfmerge 'chapter*.pdf' -o book.pdf
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Directory containing PDF files to merge
    ///
    /// All PDFs directly inside this directory are merged.
    /// This overrides any individual files listed as inputs.
    #[arg(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Path for the output merged PDF file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Sort the input files naturally by path before merging
    ///
    /// Digit runs compare numerically, so file2.pdf comes before
    /// file10.pdf. Useful mainly with --directory.
    #[arg(short, long)]
    pub sort: bool,

    /// Verbose output - show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    ///
    /// Warnings and errors are still printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Format of the run report
    ///
    /// - text: human-readable progress lines (default)
    /// - json: a single JSON document describing the result
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,
}

impl Cli {
    /// Whether any input method was given.
    pub fn has_input(&self) -> bool {
        self.directory.is_some() || !self.inputs.is_empty()
    }
}

/// How the run is reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Progress lines as the merge runs.
    #[default]
    Text,
    /// The final result as JSON.
    Json,
}
