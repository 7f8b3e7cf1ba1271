//! Tree-based markup normalization for word-processing documents.
//!
//! `.docx` and `.odt` bodies are flattened by walking the parsed tree and
//! emitting delimiters at element boundaries: a tab for tab elements, a
//! newline for line breaks and a newline after every paragraph. Character
//! data is emitted only inside the format's text-bearing elements, so
//! indentation between elements and property subtrees never reach the
//! output.

use crate::text::TextBuffer;
use crate::xml::names::{self, Name};
use crate::xml::{Element, Node};

/// Upper bound on the spaces a single `text:s` expands to.
const MAX_SPACES: usize = 1024;

/// Element sets that drive [`normalize`] for one format.
#[derive(Debug, Clone, Copy)]
pub struct Markers {
    /// Elements closed by a newline
    pub paragraphs: &'static [Name],
    /// Elements replaced by a tab
    pub tabs: &'static [Name],
    /// Elements replaced by a newline
    pub line_breaks: &'static [Name],
    /// Element replaced by spaces, with its repeat-count attribute
    pub spaces: Option<(Name, Name)>,
    /// Elements whose character data is document text
    pub text: &'static [Name],
    /// Subtrees that never contribute text
    pub skip: &'static [Name],
}

/// WordprocessingML body markers.
pub const DOCX: Markers = Markers {
    paragraphs: &[names::W_P],
    tabs: &[names::W_TAB],
    line_breaks: &[names::W_BR, names::W_CR],
    spaces: None,
    // Equation runs carry their text in OMML `m:t`.
    text: &[names::W_T, names::M_T],
    // Tab stops inside paragraph properties are also named `w:tab`.
    skip: &[
        names::W_PPR,
        names::W_RPR,
        names::W_INSTR_TEXT,
        names::W_DEL_TEXT,
    ],
};

/// OpenDocument text markers.
pub const ODT: Markers = Markers {
    paragraphs: &[names::TEXT_P, names::TEXT_H],
    tabs: &[names::TEXT_TAB],
    line_breaks: &[names::TEXT_LINE_BREAK],
    spaces: Some((names::TEXT_S, names::TEXT_C)),
    text: &[names::TEXT_P, names::TEXT_H],
    skip: &[],
};

/// Append the plain text of `root` to `out`.
pub fn normalize(root: &Element, markers: &Markers, out: &mut TextBuffer) {
    walk(root, markers, false, out);
}

fn walk(element: &Element, markers: &Markers, in_text: bool, out: &mut TextBuffer) {
    if element.is_any(markers.skip) {
        return;
    }
    if element.is_any(markers.tabs) {
        out.push_char('\t');
        return;
    }
    if element.is_any(markers.line_breaks) {
        out.push_char('\n');
        return;
    }
    if let Some((space, count)) = &markers.spaces
        && element.is(space)
    {
        let n = element
            .attribute_ns(count)
            .and_then(|c| c.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .min(MAX_SPACES);
        out.push_str(&" ".repeat(n));
        return;
    }

    let in_text = in_text || element.is_any(markers.text);
    for child in element.children() {
        match child {
            Node::Text(t) if in_text => out.push_str(t),
            Node::Text(_) => {},
            Node::Element(e) => walk(e, markers, in_text, out),
        }
    }

    if element.is_any(markers.paragraphs) {
        out.push_char('\n');
        out.count_fragment();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse;

    fn docx(body: &str) -> String {
        let xml = format!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        let root = parse("word/document.xml", xml.as_bytes()).unwrap();
        let mut out = TextBuffer::new();
        normalize(&root, &DOCX, &mut out);
        out.finish()
    }

    fn odt(body: &str) -> String {
        let xml = format!(
            r#"<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"><office:body><office:text>{}</office:text></office:body></office:document-content>"#,
            body
        );
        let root = parse("content.xml", xml.as_bytes()).unwrap();
        let mut out = TextBuffer::new();
        normalize(&root, &ODT, &mut out);
        out.finish()
    }

    #[test]
    fn docx_paragraphs_become_lines() {
        let text = docx(
            "<w:p><w:r><w:t>First</w:t></w:r></w:p>\n  <w:p><w:r><w:t>Second</w:t></w:r></w:p>",
        );
        assert_eq!(text, "First\nSecond\n");
    }

    #[test]
    fn docx_tabs_and_breaks() {
        let text = docx(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t xml:space="preserve">c </w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "a\tb\nc \n");
    }

    #[test]
    fn docx_paragraph_attributes_do_not_matter() {
        let text = docx(r#"<w:p w:rsidR="00A1"><w:r w:rsidR="00B2"><w:t>x &amp; y</w:t></w:r></w:p>"#);
        assert_eq!(text, "x & y\n");
    }

    #[test]
    fn docx_field_codes_are_skipped() {
        let text = docx(
            r#"<w:p><w:r><w:instrText> PAGE </w:instrText></w:r><w:r><w:t>1</w:t></w:r></w:p>"#,
        );
        assert_eq!(text, "1\n");
    }

    #[test]
    fn odt_paragraph_with_spans_and_markers() {
        let text = odt(
            r#"<text:h text:outline-level="1">Title</text:h><text:p text:style-name="P1">a<text:tab/>b<text:s text:c="2"/>c<text:line-break/><text:span>d</text:span><text:s/>e</text:p>"#,
        );
        assert_eq!(text, "Title\na\tb  c\nd e\n");
    }

    #[test]
    fn docx_equation_text_is_kept() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math"><w:body><w:p><w:r><w:t xml:space="preserve">Area: </w:t></w:r><m:oMath><m:r><m:t>A=πr</m:t></m:r><m:sSup><m:e><m:r><m:t>2</m:t></m:r></m:e></m:sSup></m:oMath></w:p></w:body></w:document>"#;
        let root = parse("word/document.xml", xml.as_bytes()).unwrap();
        let mut out = TextBuffer::new();
        normalize(&root, &DOCX, &mut out);
        assert_eq!(out.finish(), "Area: A=πr2\n");
    }

    #[test]
    fn odt_space_count_is_capped() {
        let text = odt(r#"<text:p>a<text:s text:c="18446744073709551615"/>b</text:p>"#);
        assert_eq!(text, format!("a{}b\n", " ".repeat(MAX_SPACES)));

        let text = odt(r#"<text:p>a<text:s text:c="99999999999999999999999"/>b</text:p>"#);
        assert_eq!(text, "a b\n");
    }

    #[test]
    fn odt_empty_paragraph_still_ends_a_line() {
        assert_eq!(odt("<text:p/><text:p>x</text:p>"), "\nx\n");
    }
}
