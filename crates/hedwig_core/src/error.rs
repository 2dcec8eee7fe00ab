//! Errors raised while obtaining source text.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain source text for scanning.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The file could not be read.
    #[error("could not read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid UTF-8.
    #[error("'{}' is not valid UTF-8", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The file is larger than a span can address.
    #[error("'{}' is {size} bytes, larger than the supported maximum of {max} bytes", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}
