//! Namespace-aware XML tree shared by all format extractors.
//!
//! Parts are small enough to be held in memory, so each required part is
//! parsed once into an [`Element`] tree with every element and attribute
//! name resolved to its namespace URI. Extractors then query the tree by
//! [`Name`](names::Name) instead of by literal prefix, which keeps them
//! independent of the prefixes a particular serializer chooses.

pub mod names;
mod query;

pub use query::Descendants;

use crate::error::{ExtractError, ExtractResult};
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Deepest element nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 1024;

/// A node in the tree: an element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An attribute with its namespace resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    pub local: String,
    pub value: String,
}

/// An XML element with resolved namespace, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    local: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Namespace URI of this element, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name (without prefix).
    pub fn local_name(&self) -> &str {
        &self.local
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Entity references arrive as separate events; merge adjacent runs.
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// Parse an XML part into its root element.
///
/// `part` names the archive entry and is only used in error messages.
/// Documents nested deeper than [`MAX_DEPTH`] elements are rejected as
/// invalid markup.
pub fn parse(part: &str, bytes: &[u8]) -> ExtractResult<Element> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        buf.clear();
        let (resolved, event) = reader
            .read_resolved_event_into(&mut buf)
            .map_err(|e| ExtractError::invalid_markup(part, e))?;
        let namespace = owned_namespace(resolved);

        match event {
            Event::Start(ref e) => {
                check_depth(part, stack.len())?;
                let element = start_element(part, &reader, namespace, e)?;
                stack.push(element);
            },
            Event::Empty(ref e) => {
                check_depth(part, stack.len())?;
                let element = start_element(part, &reader, namespace, e)?;
                attach(part, &mut stack, &mut root, element)?;
            },
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ExtractError::invalid_markup(part, "unexpected closing tag"))?;
                attach(part, &mut stack, &mut root, element)?;
            },
            Event::Text(ref t) => {
                if let Some(current) = stack.last_mut() {
                    let raw = std::str::from_utf8(t)
                        .map_err(|e| ExtractError::invalid_markup(part, e))?;
                    current.push_text(&unescape_lenient(raw));
                }
            },
            Event::CData(ref t) => {
                if let Some(current) = stack.last_mut() {
                    let raw = std::str::from_utf8(t)
                        .map_err(|e| ExtractError::invalid_markup(part, e))?;
                    current.push_text(raw);
                }
            },
            Event::GeneralRef(ref r) => {
                if let Some(current) = stack.last_mut() {
                    let name = std::str::from_utf8(r)
                        .map_err(|e| ExtractError::invalid_markup(part, e))?;
                    current.push_text(&unescape_lenient(&format!("&{};", name)));
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    if !stack.is_empty() {
        return Err(ExtractError::invalid_markup(part, "unexpected end of document"));
    }
    root.ok_or_else(|| ExtractError::invalid_markup(part, "no root element found"))
}

fn check_depth(part: &str, open: usize) -> ExtractResult<()> {
    if open >= MAX_DEPTH {
        return Err(ExtractError::invalid_markup(
            part,
            format!("elements nested deeper than {}", MAX_DEPTH),
        ));
    }
    Ok(())
}

fn owned_namespace(resolved: ResolveResult<'_>) -> Option<String> {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) => Some(String::from_utf8_lossy(ns).into_owned()),
        // Undeclared prefixes are tolerated and treated as unqualified.
        ResolveResult::Unbound | ResolveResult::Unknown(_) => None,
    }
}

fn start_element<R>(
    part: &str,
    reader: &NsReader<R>,
    namespace: Option<String>,
    e: &BytesStart<'_>,
) -> ExtractResult<Element> {
    let local = std::str::from_utf8(e.local_name().as_ref())
        .map_err(|err| ExtractError::invalid_markup(part, err))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ExtractError::invalid_markup(part, err))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, attr_local) = reader.resolve_attribute(attr.key);
        let attr_namespace = owned_namespace(resolved);
        let attr_local = String::from_utf8_lossy(attr_local.as_ref()).into_owned();
        let value = std::str::from_utf8(&attr.value)
            .map(unescape_lenient)
            .map_err(|err| ExtractError::invalid_markup(part, err))?;
        attributes.push(Attribute {
            namespace: attr_namespace,
            local: attr_local,
            value,
        });
    }

    Ok(Element {
        namespace,
        local,
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    part: &str,
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> ExtractResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(ExtractError::invalid_markup(part, "multiple root elements"));
    }
    Ok(())
}

/// Decode predefined entities and character references, keeping the input
/// unchanged when it contains a reference that cannot be resolved.
fn unescape_lenient(raw: &str) -> String {
    match quick_xml::escape::unescape(raw) {
        Ok(text) => text.into_owned(),
        Err(_) => raw.to_string(),
    }
}
