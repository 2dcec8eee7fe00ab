//! hedwig_scanner: Lexer for hedwig source text.
//!
//! Turns a source buffer into an ordered `Vec` of [`Token`]s ending in a
//! single `Eof` sentinel. Recognizes:
//! - single-character punctuation and `! = < >` with their `=` forms
//! - `/` and `//` line comments
//! - double-quoted string literals, which may span lines
//!
//! Anything else is reported to the caller's [`ErrorSink`] and skipped.

mod char_codes;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};

use hedwig_diagnostics::ErrorSink;

/// Scan `source` in one pass, reporting malformed input to `sink`.
pub fn scan_tokens<'src, S>(source: &'src str, sink: &mut S) -> Vec<Token<'src>>
where
    S: ErrorSink + ?Sized,
{
    Scanner::new(source).scan_tokens(sink)
}
