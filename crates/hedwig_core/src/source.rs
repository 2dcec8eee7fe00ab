//! Source files handed to the scanner.

use crate::error::CoreError;
use crate::text::TextPos;
use std::path::Path;

/// A named, immutable block of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name: a path for files, `<stdin>` or `<repl>` for interactive input.
    pub name: String,
    /// The full source text.
    pub text: String,
}

impl SourceFile {
    /// Wrap text that did not come from disk.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a source file from disk.
    ///
    /// The size limit is checked against the file's metadata before any of
    /// it is read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let io_error = |source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        check_size(path, size)?;

        let bytes = std::fs::read(path).map_err(io_error)?;
        // The file may have grown since it was measured.
        check_size(path, bytes.len() as u64)?;

        let text = String::from_utf8(bytes).map_err(|source| CoreError::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source file");
        Ok(Self {
            name: path.display().to_string(),
            text,
        })
    }
}

/// Reject sources whose offsets would not fit in a [`TextPos`].
fn check_size(path: &Path, size: u64) -> Result<(), CoreError> {
    let max = u64::from(TextPos::MAX);
    if size > max {
        return Err(CoreError::TooLarge {
            path: path.to_path_buf(),
            size,
            max,
        });
    }
    Ok(())
}
