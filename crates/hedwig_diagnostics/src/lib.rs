//! hedwig_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Front-end stages never print or abort on malformed input. They hand a
//! [`Diagnostic`] to an [`ErrorSink`] supplied by the caller and keep going;
//! the caller decides what a reported error means for the overall run.

mod sink;

pub use sink::ErrorSink;

use hedwig_core::text::TextSpan;
use serde::Serialize;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The human-readable message.
    pub message: &'static str,
}

/// A realized diagnostic with location information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The file this diagnostic belongs to, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based source line.
    pub line: u32,
    /// The offending source bytes, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<TextSpan>,
    /// The human-readable message.
    #[serde(rename = "message")]
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic at a line, without file or span.
    pub fn new(message: &DiagnosticMessage, line: u32) -> Self {
        Self {
            file: None,
            line,
            span: None,
            message_text: message.message.to_string(),
            code: message.code,
            category: message.category,
        }
    }

    /// Attach the byte span of the offending input.
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the file the diagnostic was reported in.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// The code as printed to users, e.g. `HW1001`.
    pub fn code_name(&self) -> String {
        format!("HW{}", self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}: ", file)?;
        }
        write!(
            f,
            "[line {}] {} {}: {}",
            self.line,
            self.category,
            self.code_name(),
            self.message_text
        )
    }
}

/// A collection of diagnostics accumulated during a run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = diag!(1001, Error, "Unexpected character.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, Error, "Unterminated string.");

    // ========================================================================
    // Driver warnings (6000-6099)
    // ========================================================================
    pub const EMPTY_SOURCE_FILE: DiagnosticMessage = diag!(6001, Warning, "Source file is empty.");
}
