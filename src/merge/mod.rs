//! PDF merging.
//!
//! [`PdfMerger`] walks the candidate list in order, opens each file with
//! [`PdfReader`](crate::io::PdfReader), classifies the attempt into a
//! [`MergeOutcome`] and appends usable documents to a [`PageAccumulator`].
//! The accumulated pages are written once at the end.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::merge::merge_pdfs;
//! use std::path::{Path, PathBuf};
//!
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let result = merge_pdfs(inputs, Path::new("merged.pdf"), false);
//! println!("{} pages written", result.total_pages_written);
//! ```

pub mod accumulator;
pub mod merger;
pub mod observer;
pub mod outcome;

#[cfg(test)]
pub(crate) mod fixtures;

pub use accumulator::PageAccumulator;
pub use merger::{MergeResult, PdfMerger, merge_pdfs};
pub use observer::{MergeObserver, NoopObserver, RecordingObserver};
pub use outcome::{FileOutcome, MergeOutcome};
