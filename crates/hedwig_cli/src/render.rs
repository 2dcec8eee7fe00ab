//! Printing tokens and diagnostics.

use hedwig_core::SourceFile;
use hedwig_diagnostics::{messages, Diagnostic, DiagnosticCategory, DiagnosticCollection};
use hedwig_scanner::Token;
use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, Severity, SourceCode};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

/// One source file after scanning.
pub struct ScannedFile<'a> {
    pub source: &'a SourceFile,
    pub tokens: Vec<Token<'a>>,
    pub diagnostics: DiagnosticCollection,
}

/// JSON shape of one scanned file.
#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a str,
    tokens: &'a [Token<'a>],
    diagnostics: &'a [Diagnostic],
}

/// Write one line per token: `line | KIND lexeme [literal]`.
pub fn write_tokens_text(out: &mut impl Write, tokens: &[Token<'_>]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{:>4} | {}", token.line, token)?;
    }
    Ok(())
}

/// Write every file's tokens and diagnostics as one JSON array.
pub fn write_json(out: &mut impl Write, files: &[ScannedFile<'_>]) -> serde_json::Result<()> {
    let reports: Vec<FileReport<'_>> = files
        .iter()
        .map(|file| FileReport {
            file: &file.source.name,
            tokens: &file.tokens,
            diagnostics: file.diagnostics.diagnostics(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Renders diagnostics for one source file.
pub struct DiagnosticRenderer {
    handler: Option<GraphicalReportHandler>,
}

impl DiagnosticRenderer {
    /// Graphical output with source snippets when `pretty`, one line per
    /// diagnostic otherwise.
    pub fn new(pretty: bool, color: bool) -> Self {
        let handler = pretty.then(|| {
            let theme = if color {
                GraphicalTheme::unicode()
            } else {
                GraphicalTheme::unicode_nocolor()
            };
            GraphicalReportHandler::new_themed(theme)
        });
        Self { handler }
    }

    pub fn render_all(&self, source: &SourceFile, diagnostics: &DiagnosticCollection) -> String {
        let Some(handler) = &self.handler else {
            return diagnostics
                .iter()
                .map(|d| format!("{}\n", d))
                .collect();
        };

        let named = NamedSource::new(&source.name, source.text.clone());
        let mut out = String::new();
        for diagnostic in diagnostics {
            let snippet = SnippetDiagnostic {
                diagnostic,
                file: &named,
            };
            if handler.render_report(&mut out, &snippet).is_err() {
                out.push_str(&format!("{}\n", diagnostic));
            }
        }
        out
    }
}

/// Adapts a [`Diagnostic`] to miette's reporting interface.
#[derive(Debug, Error)]
#[error("{}", .diagnostic.message_text)]
struct SnippetDiagnostic<'a> {
    diagnostic: &'a Diagnostic,
    file: &'a NamedSource<String>,
}

impl SnippetDiagnostic<'_> {
    fn label(&self) -> &'static str {
        match self.diagnostic.code {
            c if c == messages::UNEXPECTED_CHARACTER.code => "not a recognized character",
            c if c == messages::UNTERMINATED_STRING.code => "string is never closed",
            _ => "here",
        }
    }
}

impl miette::Diagnostic for SnippetDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diagnostic.code_name()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.diagnostic.category {
            DiagnosticCategory::Error => Severity::Error,
            DiagnosticCategory::Warning => Severity::Warning,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.file)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.diagnostic.span?;
        let label = LabeledSpan::new_with_span(Some(self.label().to_string()), span.to_range());
        Some(Box::new(std::iter::once(label)))
    }
}
