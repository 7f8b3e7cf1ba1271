//! Excel workbook (.xlsx) text extraction.
//!
//! Worksheets are read in index order. Each row becomes one line with its
//! non-empty cell values separated by tabs; rows without any value produce
//! no line at all.

mod shared_strings;

pub use shared_strings::SharedStrings;

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::text::TextBuffer;
use crate::xml::names::{X_C, X_IS, X_ROW, X_SHEET_DATA, X_V};
use crate::xml::{self, Element};
use shared_strings::string_item_text;
use std::io::{Read, Seek};

/// Shared strings part of a SpreadsheetML package.
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

const SHEET_PREFIX: &str = "xl/worksheets/sheet";
const SHEET_SUFFIX: &str = ".xml";

/// Append the cell text of every worksheet to `out`.
///
/// A missing shared strings part is treated as an empty table. A worksheet
/// that is not well-formed is skipped.
pub fn extract<R: Read + Seek>(archive: &Archive<R>, out: &mut TextBuffer) -> ExtractResult<()> {
    let shared = match archive.read_entry(SHARED_STRINGS_PART)? {
        Some(bytes) => SharedStrings::parse(SHARED_STRINGS_PART, &bytes)?,
        None => SharedStrings::new(),
    };
    tracing::debug!(shared_strings = shared.len(), "loaded shared strings");

    let mut sheets = 0;
    for part in archive.numbered_parts(SHEET_PREFIX, SHEET_SUFFIX) {
        let part = part?;
        sheets += 1;
        let root = match xml::parse(&part.name, &part.data) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(sheet = %part.name, error = %e, "skipping unreadable worksheet");
                continue;
            },
        };
        extract_sheet(&root, &shared, out);
    }

    let listed = archive.entries_matching(SHEET_PREFIX, SHEET_SUFFIX).len();
    if listed > sheets {
        tracing::debug!(
            listed,
            read = sheets,
            "worksheet parts outside the sequential numbering were not read"
        );
    }
    tracing::debug!(sheets, cells = out.fragments(), "extracted xlsx worksheets");
    Ok(())
}

fn extract_sheet(root: &Element, shared: &SharedStrings, out: &mut TextBuffer) {
    for row in root.path(&[X_SHEET_DATA, X_ROW]) {
        out.push_row(row.children_named(&X_C).map(|cell| cell_value(cell, shared)));
    }
}

/// Resolve the text of one cell.
///
/// An inline string wins; otherwise a shared-string cell is looked up by
/// index (an index outside the table is empty); otherwise the raw value.
fn cell_value(cell: &Element, shared: &SharedStrings) -> String {
    if let Some(inline) = cell.child(&X_IS) {
        return string_item_text(inline);
    }

    let value = cell.child(&X_V).map(|v| v.own_text());
    if cell.attribute("t") == Some("s") {
        return value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .and_then(|index| shared.get(index))
            .unwrap_or_default()
            .to_string();
    }
    value.unwrap_or_default()
}
