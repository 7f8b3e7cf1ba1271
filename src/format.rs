//! Supported document formats and dispatch by file extension.

use crate::archive::Archive;
use crate::error::{ExtractError, ExtractResult};
use crate::text::TextBuffer;
use crate::{odf, ooxml};
use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;
use std::str::FromStr;

/// A supported document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Microsoft Word Document (OOXML format, .docx)
    Docx,
    /// Microsoft PowerPoint Presentation (OOXML format, .pptx)
    Pptx,
    /// Microsoft Excel Spreadsheet (OOXML format, .xlsx)
    Xlsx,
    /// OpenDocument Text (.odt)
    Odt,
    /// OpenDocument Presentation (.odp)
    Odp,
    /// OpenDocument Spreadsheet (.ods)
    Ods,
}

/// How a format's text is recovered from its XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Flatten one body part, emitting delimiters at paragraph, tab and
    /// break elements
    Normalize,
    /// Query the parsed part(s) for text-bearing elements
    Query,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 6] = [
        Format::Docx,
        Format::Pptx,
        Format::Xlsx,
        Format::Odt,
        Format::Odp,
        Format::Ods,
    ];

    /// Select the format for an extension, ignoring ASCII case.
    pub fn from_extension(extension: &str) -> ExtractResult<Self> {
        let lower = extension.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == lower)
            .ok_or(ExtractError::UnsupportedFileType(lower))
    }

    /// Select the format from the text after the last dot of the file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        Self::from_extension(&extension_of(path.as_ref()))
    }

    /// Canonical lowercase extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Docx => "docx",
            Format::Pptx => "pptx",
            Format::Xlsx => "xlsx",
            Format::Odt => "odt",
            Format::Odp => "odp",
            Format::Ods => "ods",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Format::Docx | Format::Odt => Strategy::Normalize,
            Format::Pptx | Format::Xlsx | Format::Odp | Format::Ods => Strategy::Query,
        }
    }

    /// Run this format's extraction routine against an open archive.
    pub fn extract<R: Read + Seek>(
        self,
        archive: &Archive<R>,
        out: &mut TextBuffer,
    ) -> ExtractResult<()> {
        match self {
            Format::Docx => ooxml::docx::extract(archive, out),
            Format::Pptx => ooxml::pptx::extract(archive, out),
            Format::Xlsx => ooxml::xlsx::extract(archive, out),
            Format::Odt => odf::text::extract(archive, out),
            Format::Odp => odf::presentation::extract(archive, out),
            Format::Ods => odf::spreadsheet::extract(archive, out),
        }
    }
}

impl FromStr for Format {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Lowercased text after the last dot of the final path segment, or an
/// empty string when there is none.
pub(crate) fn extension_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
