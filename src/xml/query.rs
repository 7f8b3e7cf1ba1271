//! Path queries over an [`Element`] tree.
//!
//! All queries return elements in document order and never deduplicate
//! text: the caller decides how matched elements map to output.

use super::names::Name;
use super::{Element, Node};

impl Element {
    /// Check whether this element has the given qualified name.
    #[inline]
    pub fn is(&self, name: &Name) -> bool {
        name.matches(self.namespace(), self.local_name())
    }

    /// Check whether this element has any of the given qualified names.
    #[inline]
    pub fn is_any(&self, names: &[Name]) -> bool {
        names.iter().any(|name| self.is(name))
    }

    /// Child elements, skipping character data.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children().iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &Name) -> impl Iterator<Item = &'a Element> + use<'a> {
        let name = *name;
        self.child_elements().filter(move |e| e.is(&name))
    }

    /// First child element with the given name.
    pub fn child(&self, name: &Name) -> Option<&Element> {
        self.children_named(name).next()
    }

    /// Elements reached by following `path` one child step at a time.
    ///
    /// `root.path(&[X_SHEET_DATA, X_ROW])` is every `row` of every
    /// `sheetData` child of `root`.
    pub fn path(&self, path: &[Name]) -> Vec<&Element> {
        let mut current = vec![self];
        for step in path {
            current = current
                .into_iter()
                .flat_map(|e| e.children_named(step))
                .collect();
        }
        current
    }

    /// This element and all elements below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Every element named `name` in this subtree (including self).
    pub fn descendants_named<'a>(&'a self, name: &Name) -> impl Iterator<Item = &'a Element> + use<'a> {
        let name = *name;
        self.descendants().filter(move |e| e.is(&name))
    }

    /// Every element matching any of `names`, as one document-order sequence.
    pub fn descendants_any<'a>(&'a self, names: &'a [Name]) -> impl Iterator<Item = &'a Element> {
        self.descendants().filter(move |e| e.is_any(names))
    }

    /// Every `target` element that has a `container` ancestor within this
    /// subtree. Each match is reported once even under nested containers.
    pub fn descendants_inside(&self, container: &Name, target: &Name) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_inside(self, container, target, false, &mut found);
        found
    }

    /// Text of the direct character-data children only.
    pub fn own_text(&self) -> String {
        self.children()
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Value of an unqualified attribute.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|a| a.namespace.is_none() && a.local == local)
            .map(|a| a.value.as_str())
    }

    /// Value of a namespace-qualified attribute.
    pub fn attribute_ns(&self, name: &Name) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|a| name.matches(a.namespace.as_deref(), &a.local))
            .map(|a| a.value.as_str())
    }
}

fn collect_inside<'a>(
    element: &'a Element,
    container: &Name,
    target: &Name,
    inside: bool,
    found: &mut Vec<&'a Element>,
) {
    if inside && element.is(target) {
        found.push(element);
    }
    let inside = inside || element.is(container);
    for child in element.child_elements() {
        collect_inside(child, container, target, inside, found);
    }
}

/// Pre-order iterator over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Push in reverse so the first child is visited next.
        self.stack
            .extend(element.children().iter().rev().filter_map(|node| match node {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            }));
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use crate::xml::names::*;
    use crate::xml::parse;

    const ODS: &str = r#"<office:document-content
    xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0"
    xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0"
    xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">
  <office:body>
    <text:p>outside</text:p>
    <table:table>
      <table:table-row>
        <table:table-cell><text:p>a</text:p><text:p>b</text:p></table:table-cell>
        <table:table-cell><table:table><table:table-row><table:table-cell>
          <text:p>nested</text:p>
        </table:table-cell></table:table-row></table:table></table:table-cell>
      </table:table-row>
    </table:table>
  </office:body>
</office:document-content>"#;

    #[test]
    fn descendants_inside_reports_each_match_once() {
        let root = parse("content.xml", ODS.as_bytes()).unwrap();
        let texts: Vec<String> = root
            .descendants_inside(&TABLE_CELL, &TEXT_P)
            .into_iter()
            .map(|p| p.own_text().trim().to_string())
            .collect();
        assert_eq!(texts, ["a", "b", "nested"]);
    }

    #[test]
    fn descendants_any_keeps_document_order() {
        let xml = r#"<r xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0">
<text:h>H</text:h><text:p>P1 <text:span>S</text:span> tail</text:p><text:p>P2</text:p></r>"#;
        let root = parse("content.xml", xml.as_bytes()).unwrap();
        let found: Vec<(String, String)> = root
            .descendants_any(&[TEXT_P, TEXT_SPAN, TEXT_H])
            .map(|e| (e.local_name().to_string(), e.own_text()))
            .collect();
        assert_eq!(
            found,
            [
                ("h".to_string(), "H".to_string()),
                ("p".to_string(), "P1  tail".to_string()),
                ("span".to_string(), "S".to_string()),
                ("p".to_string(), "P2".to_string()),
            ]
        );
    }

    #[test]
    fn path_follows_child_steps() {
        let xml = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData><row r="1"><c/></row><row r="2"/></sheetData></worksheet>"#;
        let root = parse("sheet1.xml", xml.as_bytes()).unwrap();
        let rows = root.path(&[X_SHEET_DATA, X_ROW]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].attribute("r"), Some("2"));
        assert!(root.path(&[X_ROW]).is_empty());
    }

    #[test]
    fn own_text_skips_child_elements() {
        let xml = "<a>x<b>y<c>z</c></b>w</a>";
        let root = parse("x.xml", xml.as_bytes()).unwrap();
        assert_eq!(root.own_text(), "xw");
        assert_eq!(root.descendants().count(), 3);
    }
}
