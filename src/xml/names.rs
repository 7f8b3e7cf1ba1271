//! Namespace URIs and qualified element names used by the extractors.
//!
//! OOXML names accept both the transitional and the strict namespace URI,
//! so documents saved in either conformance class resolve to the same name.

// ============================================================================
// NAMESPACES
// ============================================================================

/// WordprocessingML main namespace (transitional, strict)
pub const WORDPROCESSINGML: &[&str] = &[
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    "http://purl.oclc.org/ooxml/wordprocessingml/main",
];

/// DrawingML main namespace (transitional, strict)
pub const DRAWINGML: &[&str] = &[
    "http://schemas.openxmlformats.org/drawingml/2006/main",
    "http://purl.oclc.org/ooxml/drawingml/main",
];

/// SpreadsheetML main namespace (transitional, strict)
pub const SPREADSHEETML: &[&str] = &[
    "http://schemas.openxmlformats.org/spreadsheetml/2006/main",
    "http://purl.oclc.org/ooxml/spreadsheetml/main",
];

/// Office Math Markup Language namespace (transitional, strict)
pub const OMML: &[&str] = &[
    "http://schemas.openxmlformats.org/officeDocument/2006/math",
    "http://purl.oclc.org/ooxml/officeDocument/math",
];

/// ODF text namespace
pub const ODF_TEXT: &[&str] = &["urn:oasis:names:tc:opendocument:xmlns:text:1.0"];

/// ODF table namespace
pub const ODF_TABLE: &[&str] = &["urn:oasis:names:tc:opendocument:xmlns:table:1.0"];

/// A namespace-qualified element or attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name {
    /// Namespace URIs under which this name is recognized
    pub namespaces: &'static [&'static str],
    /// Local part of the name
    pub local: &'static str,
}

impl Name {
    pub const fn new(namespaces: &'static [&'static str], local: &'static str) -> Self {
        Self { namespaces, local }
    }

    /// Check whether a resolved `(namespace, local)` pair is this name.
    pub fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        self.local == local && namespace.is_some_and(|ns| self.namespaces.contains(&ns))
    }
}

// ============================================================================
// WORDPROCESSINGML (.docx)
// ============================================================================

pub const W_P: Name = Name::new(WORDPROCESSINGML, "p");
pub const W_T: Name = Name::new(WORDPROCESSINGML, "t");
pub const W_TAB: Name = Name::new(WORDPROCESSINGML, "tab");
pub const W_BR: Name = Name::new(WORDPROCESSINGML, "br");
pub const W_CR: Name = Name::new(WORDPROCESSINGML, "cr");
pub const W_PPR: Name = Name::new(WORDPROCESSINGML, "pPr");
pub const W_RPR: Name = Name::new(WORDPROCESSINGML, "rPr");
pub const W_INSTR_TEXT: Name = Name::new(WORDPROCESSINGML, "instrText");
pub const W_DEL_TEXT: Name = Name::new(WORDPROCESSINGML, "delText");
/// Equation text run
pub const M_T: Name = Name::new(OMML, "t");

// ============================================================================
// DRAWINGML (.pptx)
// ============================================================================

/// Text run content
pub const A_T: Name = Name::new(DRAWINGML, "t");

// ============================================================================
// SPREADSHEETML (.xlsx)
// ============================================================================

pub const X_SST: Name = Name::new(SPREADSHEETML, "sst");
pub const X_SI: Name = Name::new(SPREADSHEETML, "si");
pub const X_R: Name = Name::new(SPREADSHEETML, "r");
pub const X_T: Name = Name::new(SPREADSHEETML, "t");
pub const X_SHEET_DATA: Name = Name::new(SPREADSHEETML, "sheetData");
pub const X_ROW: Name = Name::new(SPREADSHEETML, "row");
pub const X_C: Name = Name::new(SPREADSHEETML, "c");
pub const X_IS: Name = Name::new(SPREADSHEETML, "is");
pub const X_V: Name = Name::new(SPREADSHEETML, "v");

// ============================================================================
// OPENDOCUMENT (.odt, .odp, .ods)
// ============================================================================

pub const TEXT_P: Name = Name::new(ODF_TEXT, "p");
pub const TEXT_H: Name = Name::new(ODF_TEXT, "h");
pub const TEXT_SPAN: Name = Name::new(ODF_TEXT, "span");
pub const TEXT_TAB: Name = Name::new(ODF_TEXT, "tab");
pub const TEXT_LINE_BREAK: Name = Name::new(ODF_TEXT, "line-break");
pub const TEXT_S: Name = Name::new(ODF_TEXT, "s");
/// Repeat count attribute of `text:s`
pub const TEXT_C: Name = Name::new(ODF_TEXT, "c");
pub const TABLE_CELL: Name = Name::new(ODF_TABLE, "table-cell");
