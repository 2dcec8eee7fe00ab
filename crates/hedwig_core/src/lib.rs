//! hedwig_core: Core utilities for the hedwig toolchain.
//!
//! Provides text spans, source-file loading and the error type
//! shared by the front-end crates.

pub mod error;
pub mod source;
pub mod text;

// Re-export commonly used types
pub use error::CoreError;
pub use source::SourceFile;
pub use text::{TextPos, TextSpan};
