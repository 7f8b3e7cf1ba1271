//! OpenDocument Spreadsheet (.ods) text extraction.
//!
//! Cell paragraphs from every table are collected into one tab-separated
//! line; rows are not delimited.

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::text::TextBuffer;
use crate::xml::names::{TABLE_CELL, TEXT_P};
use std::io::{Read, Seek};

/// Append the trimmed, non-empty cell paragraphs of the document to `out`
/// as a single tab-joined line.
pub fn extract<R: Read + Seek>(archive: &Archive<R>, out: &mut TextBuffer) -> ExtractResult<()> {
    let root = super::content(archive)?;
    let values: Vec<String> = root
        .descendants_inside(&TABLE_CELL, &TEXT_P)
        .into_iter()
        .map(|p| p.own_text().trim().to_string())
        .collect();
    out.push_row(&values);
    tracing::debug!(cells = out.fragments(), "extracted ods cells");
    Ok(())
}
