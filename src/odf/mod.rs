//! OpenDocument Format (ODF) text extraction.
//!
//! Text (.odt), presentation (.odp) and spreadsheet (.ods) documents keep
//! their whole body in the `content.xml` part of the package.

/// ODF text document (.odt) support
pub mod text;
/// ODF presentation (.odp) support
pub mod presentation;
/// ODF spreadsheet (.ods) support
pub mod spreadsheet;

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::xml::{self, Element};
use std::io::{Read, Seek};

/// Body part of every ODF package.
pub const CONTENT_PART: &str = "content.xml";

/// Read and parse `content.xml`.
fn content<R: Read + Seek>(archive: &Archive<R>) -> ExtractResult<Element> {
    let bytes = archive.require_entry(CONTENT_PART)?;
    xml::parse(CONTENT_PART, &bytes)
}

#[cfg(test)]
pub(crate) mod tests {
    /// Wrap `body` in an `office:document-content` root declaring the
    /// office, text, table and draw namespaces.
    pub(crate) fn content_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:draw="urn:oasis:names:tc:opendocument:xmlns:drawing:1.0">
    <office:body>
{}
    </office:body>
</office:document-content>"#,
            body
        )
    }
}
