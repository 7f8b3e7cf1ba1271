//! Office Open XML (OOXML) text extraction.
//!
//! Word (.docx), PowerPoint (.pptx) and Excel (.xlsx) files are ZIP
//! packages of XML parts. Text is read straight from the parts at their
//! conventional locations; relationships and content types are not
//! consulted.
//!
//! - `docx`: `word/document.xml`, flattened by the markup normalizer
//! - `pptx`: `ppt/slides/slideN.xml`, every DrawingML text run
//! - `xlsx`: `xl/worksheets/sheetN.xml`, row by row, resolving shared strings

pub mod docx;
pub mod pptx;
pub mod xlsx;
