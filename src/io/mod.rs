//! I/O operations for pdfmerge.
//!
//! - [`PdfReader`] opens one candidate and reports why it cannot be used
//! - [`PdfWriter`] persists the merged document
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut opened = PdfReader::new().open(Path::new("input.pdf"))?;
//! println!("{} pages", opened.page_count);
//!
//! PdfWriter::new().save(&mut opened.document, Path::new("copy.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{OpenedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions};
