//! The hedwig scanner.
//!
//! A single left-to-right pass over the source. Each iteration marks the
//! start of a lexeme, consumes one character and dispatches on it. Malformed
//! input is reported to the caller's [`ErrorSink`] and skipped; the scan
//! itself never fails.

use crate::char_codes::*;
use crate::token::{Token, TokenKind};
use hedwig_core::text::TextSpan;
use hedwig_diagnostics::{messages, Diagnostic, DiagnosticMessage, ErrorSink};

/// Cursor state for one scan of one source text.
///
/// Created by [`Scanner::new`] and consumed by [`Scanner::scan_tokens`], so
/// no state outlives or is shared between scans.
pub struct Scanner<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// Byte offset of the first character of the current lexeme.
    start: usize,
    /// Byte offset of the next character to read. Always a char boundary.
    current: usize,
    /// Newlines consumed so far, plus one.
    line: u32,
    /// Line on which the current lexeme started.
    start_line: u32,
    /// Tokens produced so far.
    tokens: Vec<Token<'src>>,
    /// Diagnostics reported so far.
    errors: usize,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            tokens: Vec::new(),
            errors: 0,
        }
    }

    /// Scan the whole source, returning its tokens terminated by one `Eof`.
    pub fn scan_tokens<S>(mut self, sink: &mut S) -> Vec<Token<'src>>
    where
        S: ErrorSink + ?Sized,
    {
        let _span = tracing::debug_span!("scan_tokens", bytes = self.source.len()).entered();

        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(sink);
        }

        self.tokens.push(Token::eof(self.line, self.source.len()));

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.line,
            "scan complete"
        );
        self.tokens
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    fn scan_token<S>(&mut self, sink: &mut S)
    where
        S: ErrorSink + ?Sized,
    {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            OPEN_PAREN => self.add_token(TokenKind::LeftParen),
            CLOSE_PAREN => self.add_token(TokenKind::RightParen),
            OPEN_BRACE => self.add_token(TokenKind::LeftBrace),
            CLOSE_BRACE => self.add_token(TokenKind::RightBrace),
            COMMA => self.add_token(TokenKind::Comma),
            DOT => self.add_token(TokenKind::Dot),
            MINUS => self.add_token(TokenKind::Minus),
            PLUS => self.add_token(TokenKind::Plus),
            SEMICOLON => self.add_token(TokenKind::Semicolon),
            ASTERISK => self.add_token(TokenKind::Star),

            EXCLAMATION => self.add_operator(TokenKind::BangEqual, TokenKind::Bang),
            EQUALS => self.add_operator(TokenKind::EqualEqual, TokenKind::Equal),
            LESS_THAN => self.add_operator(TokenKind::LessEqual, TokenKind::Less),
            GREATER_THAN => self.add_operator(TokenKind::GreaterEqual, TokenKind::Greater),

            SLASH => {
                if self.match_char(SLASH) {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            SPACE | CARRIAGE_RETURN | TAB => {}
            LINE_FEED => self.line += 1,

            DOUBLE_QUOTE => self.scan_string(sink),

            _ => {
                let span = self.lexeme_span();
                self.report(sink, &messages::UNEXPECTED_CHARACTER, span);
            }
        }
    }

    /// Emit `with_equals` if the next character is `=`, consuming it; otherwise `alone`.
    fn add_operator(&mut self, with_equals: TokenKind, alone: TokenKind) {
        let kind = if self.match_char(EQUALS) {
            with_equals
        } else {
            alone
        };
        self.add_token(kind);
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Skip up to, but not including, the next newline.
    fn skip_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.current..];
        self.current += memchr::memchr(LINE_FEED_BYTE, rest).unwrap_or(rest.len());
    }

    /// Scan a string literal; the opening quote has been consumed.
    fn scan_string<S>(&mut self, sink: &mut S)
    where
        S: ErrorSink + ?Sized,
    {
        let source = self.source;
        let bytes = source.as_bytes();
        loop {
            match memchr::memchr2(DOUBLE_QUOTE_BYTE, LINE_FEED_BYTE, &bytes[self.current..]) {
                Some(offset) => {
                    self.current += offset + 1;
                    if bytes[self.current - 1] == LINE_FEED_BYTE {
                        self.line += 1;
                        continue;
                    }
                    let literal = &source[self.start + 1..self.current - 1];
                    self.add_literal_token(TokenKind::String, literal);
                    return;
                }
                None => {
                    // The cursor is left at end of input, so the outer loop ends next.
                    self.current = bytes.len();
                    let span = self.lexeme_span();
                    self.report(sink, &messages::UNTERMINATED_STRING, span);
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Look at the next character without consuming it.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Consume and return the next character.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character only if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    #[inline]
    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    #[inline]
    fn lexeme_span(&self) -> TextSpan {
        TextSpan::from_range(self.start..self.current)
    }

    // ========================================================================
    // Output
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.start_line, self.lexeme_span());
        self.tokens.push(token);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: &'src str) {
        let token = Token::new(kind, self.lexeme(), self.start_line, self.lexeme_span())
            .with_literal(literal);
        self.tokens.push(token);
    }

    /// Report a problem at the current line.
    fn report<S>(&mut self, sink: &mut S, message: &DiagnosticMessage, span: TextSpan)
    where
        S: ErrorSink + ?Sized,
    {
        self.errors += 1;
        tracing::trace!(line = self.line, code = message.code, %span, "{}", message.message);
        sink.report(Diagnostic::new(message, self.line).with_span(span));
    }
}
