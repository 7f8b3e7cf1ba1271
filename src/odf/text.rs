//! OpenDocument Text (.odt) text extraction.

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::markup::{self, ODT};
use crate::text::TextBuffer;
use std::io::{Read, Seek};

/// Append the body text of the document to `out`, one paragraph per line.
pub fn extract<R: Read + Seek>(archive: &Archive<R>, out: &mut TextBuffer) -> ExtractResult<()> {
    let root = super::content(archive)?;
    markup::normalize(&root, &ODT, out);
    tracing::debug!(paragraphs = out.fragments(), "extracted odt body");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::tests::archive;
    use crate::error::ErrorKind;
    use crate::odf::CONTENT_PART;
    use crate::odf::tests::content_xml;

    #[test]
    fn paragraphs_and_headings() {
        let xml = content_xml(
            r#"<office:text>
            <text:h>Heading</text:h>
            <text:p>Test ODT Content</text:p>
            <text:list><text:list-item><text:p>Item</text:p></text:list-item></text:list>
        </office:text>"#,
        );
        let archive = archive(&[(CONTENT_PART, xml.as_str())]);
        let mut out = TextBuffer::new();
        extract(&archive, &mut out).unwrap();
        assert_eq!(out.finish(), "Heading\nTest ODT Content\nItem\n");
    }

    #[test]
    fn missing_content_part() {
        let archive = archive(&[("mimetype", "application/vnd.oasis.opendocument.text")]);
        let err = extract(&archive, &mut TextBuffer::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArchiveOpenFailure);
        assert_eq!(err.to_string(), "content.xml not found");
    }
}
