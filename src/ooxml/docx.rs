//! Word document (.docx) text extraction.

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::markup::{self, DOCX};
use crate::text::TextBuffer;
use crate::xml;
use std::io::{Read, Seek};

/// Main document part of a WordprocessingML package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Append the body text of the document to `out`.
///
/// Fails when `word/document.xml` is absent or not well-formed.
pub fn extract<R: Read + Seek>(archive: &Archive<R>, out: &mut TextBuffer) -> ExtractResult<()> {
    let bytes = archive.require_entry(DOCUMENT_PART)?;
    let root = xml::parse(DOCUMENT_PART, &bytes)?;
    markup::normalize(&root, &DOCX, out);
    tracing::debug!(paragraphs = out.fragments(), "extracted docx body");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::tests::archive;
    use crate::error::ErrorKind;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body>
        <w:p><w:r><w:t>Test Document Content</w:t></w:r></w:p>
        <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    </w:body>
</w:document>"#;

    #[test]
    fn extracts_paragraphs() {
        let archive = archive(&[(DOCUMENT_PART, DOCUMENT)]);
        let mut out = TextBuffer::new();
        extract(&archive, &mut out).unwrap();
        assert_eq!(out.finish(), "Test Document Content\nCell\n");
    }

    #[test]
    fn missing_document_part() {
        let archive = archive(&[("[Content_Types].xml", "<Types/>")]);
        let err = extract(&archive, &mut TextBuffer::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveOpenFailure);
        assert_eq!(err.to_string(), "word/document.xml not found");
    }

    #[test]
    fn malformed_document_part() {
        let archive = archive(&[(DOCUMENT_PART, "<w:document><w:body>")]);
        let err = extract(&archive, &mut TextBuffer::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMarkup);
    }
}
