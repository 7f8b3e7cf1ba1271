//! ZIP container access.
//!
//! This module opens the ZIP archive that backs every supported document
//! format and hands out decompressed entries by name. It has no knowledge of
//! any document schema.

use crate::error::{ExtractError, ExtractResult};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::result::ZipError;

/// A named member of an archive together with its decompressed bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the entry inside the container
    pub name: String,
    /// Decompressed content
    pub data: Vec<u8>,
}

/// An open ZIP container.
///
/// The underlying file handle is owned by the archive and released when the
/// archive is dropped, so a handle never outlives the extraction routine
/// that opened it.
pub struct Archive<R = BufReader<File>> {
    archive: RefCell<zip::ZipArchive<R>>,
}

impl Archive {
    /// Open the ZIP container at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        tracing::debug!(path = %path.display(), "opening archive");
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> Archive<R> {
    /// Open a ZIP container from any seekable reader.
    pub fn from_reader(reader: R) -> ExtractResult<Self> {
        let archive = zip::ZipArchive::new(reader)
            .map_err(|e| ExtractError::ArchiveOpen(e.to_string()))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an entry by name.
    ///
    /// Returns `Ok(None)` when the archive has no such entry; absence is left
    /// for the caller to judge.
    pub fn read_entry(&self, name: &str) -> ExtractResult<Option<Vec<u8>>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = match archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        tracing::trace!(entry = name, bytes = content.len(), "read archive entry");
        Ok(Some(content))
    }

    /// Read an entry that the format requires.
    pub fn require_entry(&self, name: &str) -> ExtractResult<Vec<u8>> {
        self.read_entry(name)?
            .ok_or_else(|| ExtractError::PartNotFound(name.to_string()))
    }

    /// All entry names, in archive order.
    pub fn entry_names(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        (0..archive.len())
            .filter_map(|i| archive.name_for_index(i).map(str::to_string))
            .collect()
    }

    /// Entry names starting with `prefix` and ending with `suffix`, in archive order.
    pub fn entries_matching(&self, prefix: &str, suffix: &str) -> Vec<String> {
        self.entry_names()
            .into_iter()
            .filter(|name| {
                name.len() >= prefix.len() + suffix.len()
                    && name.starts_with(prefix)
                    && name.ends_with(suffix)
            })
            .collect()
    }

    /// Probe `{prefix}1{suffix}`, `{prefix}2{suffix}`, ... in order.
    ///
    /// Slides and worksheets are numbered from 1 without gaps by convention,
    /// so the sequence ends at the first index that is absent.
    pub fn numbered_parts<'a>(&'a self, prefix: &'a str, suffix: &'a str) -> NumberedParts<'a, R> {
        NumberedParts {
            archive: self,
            prefix,
            suffix,
            next_index: 1,
            finished: false,
        }
    }
}

/// Lazy iterator over sequentially numbered archive entries.
///
/// Yields entries until the first missing index. A read failure is yielded
/// once as an error and ends the sequence.
pub struct NumberedParts<'a, R> {
    archive: &'a Archive<R>,
    prefix: &'a str,
    suffix: &'a str,
    next_index: usize,
    finished: bool,
}

impl<R> NumberedParts<'_, R> {
    /// Index the next call to `next` will probe.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Start probing again from index 1.
    pub fn restart(&mut self) {
        self.next_index = 1;
        self.finished = false;
    }
}

impl<R: Read + Seek> Iterator for NumberedParts<'_, R> {
    type Item = ExtractResult<ArchiveEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let name = format!("{}{}{}", self.prefix, self.next_index, self.suffix);
        match self.archive.read_entry(&name) {
            Ok(Some(data)) => {
                self.next_index += 1;
                Some(Ok(ArchiveEntry { name, data }))
            },
            Ok(None) => {
                tracing::trace!(entry = %name, "numbered part absent, probe finished");
                self.finished = true;
                None
            },
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
        }
    }
}

impl<R: Read + Seek> std::iter::FusedIterator for NumberedParts<'_, R> {}
