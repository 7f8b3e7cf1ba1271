//! office2text - plain text extraction for office documents
//!
//! This library reads Office Open XML (.docx, .pptx, .xlsx) and OpenDocument
//! (.odt, .odp, .ods) files and returns their textual content as a single
//! UTF-8 string, without the originating office suite.
//!
//! Document structure is flattened into delimited text:
//!
//! - **Paragraphs** and **slide text runs** end with a newline
//! - **Spreadsheet cells** are separated by tabs, one row per line (.xlsx)
//! - **Tab** and **line-break** elements become `\t` and `\n`
//!
//! # Example
//!
//! ```no_run
//! use office2text::{Document, Error};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // One call
//! let text = office2text::extract_text("report.docx")?;
//! println!("{}", text);
//!
//! // Or check the file first and extract later
//! let doc = Document::open("figures.xlsx")?;
//! match doc.text() {
//!     Ok(text) => println!("{}", text),
//!     Err(Error::CouldNotExtractText(cause)) => eprintln!("unreadable: {}", cause),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

/// ZIP container access
pub mod archive;
/// Error types
pub mod error;
/// Extraction entry points
mod extract;
/// Supported formats and dispatch
pub mod format;
/// Markup normalization for word-processing bodies
pub mod markup;
/// OpenDocument (.odt, .odp, .ods)
pub mod odf;
/// Office Open XML (.docx, .pptx, .xlsx)
pub mod ooxml;
/// Output text builder
pub mod text;
/// Namespace-aware XML tree
pub mod xml;

pub use error::{Error, ErrorKind, ExtractError, Result};
pub use extract::{Document, extract_text};
pub use format::Format;
