//! Error types for office2text.
//!
//! Two layers of errors exist. [`ExtractError`] is raised by the archive,
//! XML and per-format routines. [`Error`] is what the public entry points
//! return: a missing input file is reported as [`Error::FileNotFound`] and
//! every other failure is wrapped, with its message preserved, as
//! [`Error::CouldNotExtractText`].
use std::path::PathBuf;
use thiserror::Error;

/// Closed set of failure kinds a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input path does not exist
    FileNotFound,
    /// The file extension is not one of the recognized formats
    UnsupportedFileType,
    /// The file is not a ZIP container, cannot be read, or lacks a required part
    ArchiveOpenFailure,
    /// A required XML part is not well-formed
    InvalidMarkup,
}

/// Errors raised while extracting text from a single document.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Extension outside the recognized set
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The container could not be opened or read as a ZIP archive
    #[error("Could not open file as zip: {0}")]
    ArchiveOpen(String),

    /// A required part is absent from the archive
    #[error("{0} not found")]
    PartNotFound(String),

    /// XML parsing error in a named part
    #[error("Invalid XML content in {part}: {message}")]
    InvalidMarkup { part: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::UnsupportedFileType(_) => ErrorKind::UnsupportedFileType,
            ExtractError::ArchiveOpen(_) | ExtractError::PartNotFound(_) | ExtractError::Io(_) => {
                ErrorKind::ArchiveOpenFailure
            },
            ExtractError::InvalidMarkup { .. } => ErrorKind::InvalidMarkup,
        }
    }

    pub(crate) fn invalid_markup(part: &str, message: impl ToString) -> Self {
        ExtractError::InvalidMarkup {
            part: part.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => ExtractError::Io(e),
            other => ExtractError::ArchiveOpen(other.to_string()),
        }
    }
}

/// Main error type returned by the extraction entry points.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not reference an existing filesystem entry
    #[error("Could not find document file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any failure past the existence check; the message is the cause's
    #[error("{0}")]
    CouldNotExtractText(#[from] ExtractError),
}

impl Error {
    /// Kind of this failure, looking through the extraction wrapper.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound(_) => ErrorKind::FileNotFound,
            Error::CouldNotExtractText(cause) => cause.kind(),
        }
    }

    /// Whether the document was rejected because of its extension.
    pub fn is_unsupported_file_type(&self) -> bool {
        self.kind() == ErrorKind::UnsupportedFileType
    }
}

/// Result type for format-level operations.
pub(crate) type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type for office2text operations.
pub type Result<T> = std::result::Result<T, Error>;
