//! PowerPoint presentation (.pptx) text extraction.

use crate::archive::Archive;
use crate::error::ExtractResult;
use crate::text::TextBuffer;
use crate::xml::{self, names};
use std::io::{Read, Seek};

const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";

/// Append the text runs of every slide to `out`, one run per line.
///
/// Slides are read in index order starting at `slide1.xml` and stop at the
/// first missing index. A slide that is not well-formed is skipped.
pub fn extract<R: Read + Seek>(archive: &Archive<R>, out: &mut TextBuffer) -> ExtractResult<()> {
    let mut slides = 0;
    for part in archive.numbered_parts(SLIDE_PREFIX, SLIDE_SUFFIX) {
        let part = part?;
        slides += 1;
        let root = match xml::parse(&part.name, &part.data) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(slide = %part.name, error = %e, "skipping unreadable slide");
                continue;
            },
        };

        for run in root.descendants_named(&names::A_T) {
            out.push_line(&run.own_text());
        }
    }

    let listed = archive.entries_matching(SLIDE_PREFIX, SLIDE_SUFFIX).len();
    if listed > slides {
        tracing::debug!(
            listed,
            read = slides,
            "slide parts outside the sequential numbering were not read"
        );
    }
    tracing::debug!(slides, runs = out.fragments(), "extracted pptx slides");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::tests::archive;

    fn slide(runs: &[&str]) -> String {
        let runs: String = runs
            .iter()
            .map(|r| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", r))
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld><p:spTree><p:sp><p:txBody>{}</p:txBody></p:sp></p:spTree></p:cSld>
</p:sld>"#,
            runs
        )
    }

    fn run(entries: &[(&str, &str)]) -> String {
        let archive = archive(entries);
        let mut out = TextBuffer::new();
        extract(&archive, &mut out).unwrap();
        out.finish()
    }

    #[test]
    fn slides_in_index_order() {
        let one = slide(&["Slide 1"]);
        let two = slide(&["Slide 2"]);
        let text = run(&[
            ("ppt/slides/slide2.xml", two.as_str()),
            ("ppt/slides/slide1.xml", one.as_str()),
        ]);
        assert_eq!(text, "Slide 1\nSlide 2\n");
    }

    #[test]
    fn every_run_on_its_own_line() {
        let one = slide(&["Title", "Body &amp; more"]);
        assert_eq!(run(&[("ppt/slides/slide1.xml", one.as_str())]), "Title\nBody & more\n");
    }

    #[test]
    fn malformed_slide_is_skipped() {
        let one = slide(&["first"]);
        let three = slide(&["third"]);
        let text = run(&[
            ("ppt/slides/slide1.xml", one.as_str()),
            ("ppt/slides/slide2.xml", "<p:sld><unclosed>"),
            ("ppt/slides/slide3.xml", three.as_str()),
        ]);
        assert_eq!(text, "first\nthird\n");
    }

    #[test]
    fn probing_stops_at_gap() {
        let one = slide(&["kept"]);
        let three = slide(&["unreachable"]);
        let text = run(&[
            ("ppt/slides/slide1.xml", one.as_str()),
            ("ppt/slides/slide3.xml", three.as_str()),
        ]);
        assert_eq!(text, "kept\n");
    }

    #[test]
    fn no_slides_is_empty_text() {
        assert_eq!(run(&[("ppt/presentation.xml", "<p:presentation/>")]), "");
    }
}
