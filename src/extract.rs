//! Extraction entry points.

use crate::archive::Archive;
use crate::error::{Error, ExtractResult, Result};
use crate::format::{Format, extension_of};
use crate::text::TextBuffer;
use std::path::{Path, PathBuf};

/// A document file whose existence has been checked.
///
/// Opening a `Document` does not read it; each call to [`text`](Self::text)
/// opens the archive, extracts, and closes it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    extension: String,
}

impl Document {
    /// Reference the document at `path`.
    ///
    /// Fails with [`Error::FileNotFound`] if nothing exists at `path`. The
    /// extension is not validated until text is requested.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            extension: extension_of(path),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowercased file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Extract the document's plain text.
    ///
    /// Every failure past the existence check is reported as
    /// [`Error::CouldNotExtractText`]; no partial text is ever returned.
    pub fn text(&self) -> Result<String> {
        self.extract().map_err(|e| {
            tracing::debug!(path = %self.path.display(), error = %e, "extraction failed");
            Error::CouldNotExtractText(e)
        })
    }

    fn extract(&self) -> ExtractResult<String> {
        let format = Format::from_extension(&self.extension)?;
        tracing::debug!(
            path = %self.path.display(),
            %format,
            strategy = ?format.strategy(),
            "extracting text"
        );

        let archive = Archive::open(&self.path)?;
        let mut out = TextBuffer::new();
        format.extract(&archive, &mut out)?;
        drop(archive);

        if out.is_empty() {
            tracing::debug!(path = %self.path.display(), "document contains no text");
        }
        tracing::debug!(bytes = out.len(), fragments = out.fragments(), "extraction finished");
        Ok(out.finish())
    }
}

/// Extract the plain text of the document at `path`.
///
/// ```no_run
/// let text = office2text::extract_text("report.docx")?;
/// println!("{}", text);
/// # Ok::<(), office2text::Error>(())
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Document::open(path)?.text()
}
