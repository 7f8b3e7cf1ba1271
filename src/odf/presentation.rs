//! OpenDocument Presentation (.odp) text extraction.

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::text::TextBuffer;
use crate::xml::names::{self, Name};
use std::io::{Read, Seek};

/// Text-bearing elements, queried together in document order.
const TEXT_ELEMENTS: &[Name] = &[names::TEXT_P, names::TEXT_SPAN, names::TEXT_H];

/// Append the text of every paragraph, span and heading to `out`.
///
/// Each match contributes its own character data followed by a newline, so
/// a span's text appears on the line after the text of its paragraph.
pub fn extract<R: Read + Seek>(archive: &Archive<R>, out: &mut TextBuffer) -> ExtractResult<()> {
    let root = super::content(archive)?;
    for element in root.descendants_any(TEXT_ELEMENTS) {
        out.push_line(&element.own_text());
    }
    tracing::debug!(elements = out.fragments(), "extracted odp text");
    Ok(())
}
