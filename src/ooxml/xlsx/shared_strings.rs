//! Shared strings table for Excel files.
//!
//! Excel stores each distinct cell string once in `xl/sharedStrings.xml`
//! and cells refer to it by position.

use crate::error::ExtractResult;
use crate::xml::names::{X_R, X_SI, X_T};
use crate::xml::{self, Element};

/// Shared strings table, indexed by position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SharedStrings {
    strings: Vec<String>,
}

impl SharedStrings {
    /// Create a new empty shared strings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the shared strings part.
    ///
    /// Every `si` item takes one slot, even when it carries no text, so
    /// positions stay aligned with the indices cells refer to.
    pub fn parse(part: &str, bytes: &[u8]) -> ExtractResult<Self> {
        let root = xml::parse(part, bytes)?;
        let strings = root.children_named(&X_SI).map(string_item_text).collect();
        Ok(Self { strings })
    }

    /// Get a string by its index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the number of strings in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Text of a string item (`si`, or an inline `is`).
///
/// A plain item has a single `t` child. A rich-text item has one `r` run per
/// formatting change, each with its own `t`.
pub(crate) fn string_item_text(item: &Element) -> String {
    if let Some(t) = item.child(&X_T) {
        return t.own_text();
    }
    item.children_named(&X_R)
        .filter_map(|run| run.child(&X_T))
        .map(|t| t.own_text())
        .collect()
}
