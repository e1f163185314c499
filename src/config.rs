//! Configuration module for pdfmerge.
//!
//! This module normalizes CLI arguments into a [`Config`] that drives a
//! merge run. It decides which input method wins and resolves the chosen
//! source into the ordered candidate list.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::discovery::{discover_pdfs, expand_inputs};
use crate::error::{PdfMergeError, Result};

pub use crate::cli::ReportFormat;

/// Message used when neither inputs nor a directory were given.
pub const MISSING_INPUT_MESSAGE: &str =
    "You must provide input PDF files or specify an input directory using -d/--directory.";

/// Where the candidate files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// Positional inputs, possibly glob patterns, in the order given.
    Files(Vec<String>),
    /// Every PDF directly inside a directory.
    Directory(PathBuf),
}

/// Complete configuration for a merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Candidate source.
    pub source: SourceSpec,

    /// Output file path.
    pub output: PathBuf,

    /// Natural-sort candidates before merging.
    pub sort: bool,

    /// Show debug diagnostics.
    pub verbose: bool,

    /// Suppress progress output.
    pub quiet: bool,

    /// Report format on stdout.
    pub report: ReportFormat,
}

impl TryFrom<&Cli> for Config {
    type Error = PdfMergeError;

    /// Build a config from parsed arguments.
    ///
    /// A directory overrides positional inputs entirely.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::NoValidInput`] when no input method was
    /// given, and [`PdfMergeError::InvalidConfig`] for an empty output path.
    fn try_from(cli: &Cli) -> Result<Self> {
        let source = match (&cli.directory, cli.inputs.is_empty()) {
            (Some(dir), _) => SourceSpec::Directory(dir.clone()),
            (None, false) => SourceSpec::Files(cli.inputs.clone()),
            (None, true) => return Err(PdfMergeError::no_valid_input(MISSING_INPUT_MESSAGE)),
        };

        if cli.output.as_os_str().is_empty() {
            return Err(PdfMergeError::invalid_config("Output path must not be empty"));
        }

        Ok(Self {
            source,
            output: cli.output.clone(),
            sort: cli.sort,
            verbose: cli.verbose,
            quiet: cli.quiet,
            report: cli.report,
        })
    }
}

impl Config {
    /// Resolve the source into the ordered candidate list.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::DirectoryNotFound`] if the directory does not exist
    /// - [`PdfMergeError::NoValidInput`] if the directory holds no PDFs
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        match &self.source {
            SourceSpec::Files(inputs) => expand_inputs(inputs),
            SourceSpec::Directory(dir) => {
                let pdfs = discover_pdfs(dir)?;
                if pdfs.is_empty() {
                    return Err(PdfMergeError::no_valid_input(format!(
                        "No PDF files found in directory: {}",
                        dir.display()
                    )));
                }
                Ok(pdfs)
            }
        }
    }

    /// Directory being scanned, if the source is a directory.
    pub fn directory(&self) -> Option<&Path> {
        match &self.source {
            SourceSpec::Directory(dir) => Some(dir),
            SourceSpec::Files(_) => None,
        }
    }

    /// Whether progress lines should be printed.
    pub fn should_print(&self) -> bool {
        !self.quiet && self.report == ReportFormat::Text
    }
}
