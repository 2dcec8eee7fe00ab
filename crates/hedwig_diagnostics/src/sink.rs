//! The error channel between front-end stages and their callers.

use crate::{Diagnostic, DiagnosticCollection};

/// Receives diagnostics as they are found.
///
/// Reporting is fire-and-forget: a stage never reads anything back from its
/// sink, and nothing a sink does changes how the stage proceeds.
pub trait ErrorSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl ErrorSink for DiagnosticCollection {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
