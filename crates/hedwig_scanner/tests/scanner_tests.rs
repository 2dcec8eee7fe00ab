//! Scanner integration tests.
//!
//! Verifies tokenization, line tracking and error reporting through the
//! public `scan_tokens` entry point.

use hedwig_diagnostics::{messages, Diagnostic, DiagnosticCollection, ErrorSink};
use hedwig_scanner::{scan_tokens, Token, TokenKind};

/// Helper: scan source, returning tokens and everything reported.
fn scan_all(source: &str) -> (Vec<Token<'_>>, DiagnosticCollection) {
    let mut diagnostics = DiagnosticCollection::new();
    let tokens = scan_tokens(source, &mut diagnostics);
    (tokens, diagnostics)
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).0.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_empty_source() {
    let (tokens, diagnostics) = scan_all("");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].lexeme, "");
    assert_eq!(tokens[0].literal, None);
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_grouping_punctuation() {
    assert_eq!(
        scan_kinds("(()){};"),
        vec![
            TokenKind::LeftParen,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation_maps_one_to_one() {
    let source = "(){},.-+;*";
    let (tokens, diagnostics) = scan_all(source);
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), source.len() + 1);
    for (token, ch) in tokens.iter().zip(source.chars()) {
        assert_eq!(token.lexeme, ch.to_string());
        assert_eq!(token.kind.fixed_text(), Some(token.lexeme));
    }
    assert!(tokens.last().unwrap().is_eof());
}

#[test]
fn test_two_character_operators_are_single_tokens() {
    assert_eq!(
        scan_kinds("!=<=>="),
        vec![
            TokenKind::BangEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
    assert_eq!(scan_kinds("=="), vec![TokenKind::EqualEqual, TokenKind::Eof]);
}

#[test]
fn test_one_character_operators() {
    assert_eq!(
        scan_kinds("! = < >"),
        vec![
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );
    // A space between the characters breaks the two-character form.
    assert_eq!(
        scan_kinds("< ="),
        vec![TokenKind::Less, TokenKind::Equal, TokenKind::Eof]
    );
}

#[test]
fn test_slash_versus_comment() {
    assert_eq!(
        scan_kinds("/ * /"),
        vec![TokenKind::Slash, TokenKind::Star, TokenKind::Slash, TokenKind::Eof]
    );
    assert_eq!(scan_kinds("// nothing here"), vec![TokenKind::Eof]);
}

#[test]
fn test_comment_content_never_leaks() {
    let source = "+ // \"quoted\" (parens) @#$\n-";
    let (tokens, diagnostics) = scan_all(source);
    assert!(diagnostics.is_empty());
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Plus, TokenKind::Minus, TokenKind::Eof]
    );
    for token in &tokens {
        assert!(!token.lexeme.contains("quoted"));
    }
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_line_tracking() {
    let source = "(\n)\n\n\"a\nb\"\n;";
    let (tokens, _) = scan_all(source);
    let lines: Vec<(TokenKind, u32)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::LeftParen, 1),
            (TokenKind::RightParen, 2),
            (TokenKind::String, 4),
            (TokenKind::Semicolon, 6),
            (TokenKind::Eof, 6),
        ]
    );
}

#[test]
fn test_closed_string_literal() {
    let (tokens, diagnostics) = scan_all("\"abc\"");
    assert!(diagnostics.is_empty());
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some("abc"));
    assert_eq!(tokens[0].lexeme, "\"abc\"");
}

#[test]
fn test_only_strings_carry_literals() {
    let (tokens, _) = scan_all("(\"x\") != \"y\"");
    for token in &tokens {
        assert_eq!(token.literal.is_some(), token.kind == TokenKind::String);
    }
}

#[test]
fn test_unterminated_string() {
    let (tokens, diagnostics) = scan_all("\"abc");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert!(tokens.iter().all(|t| t.kind != TokenKind::String));

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics.diagnostics()[0];
    assert_eq!(diag.code, messages::UNTERMINATED_STRING.code);
    assert_eq!(diag.message_text, "Unterminated string.");
    assert_eq!(diag.line, 1);
}

#[test]
fn test_unexpected_characters_are_skipped() {
    let (tokens, diagnostics) = scan_all("(@)\n#");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
    );
    let reported: Vec<(u32, u32)> = diagnostics.iter().map(|d| (d.code, d.line)).collect();
    assert_eq!(
        reported,
        vec![
            (messages::UNEXPECTED_CHARACTER.code, 1),
            (messages::UNEXPECTED_CHARACTER.code, 2),
        ]
    );
}

#[test]
fn test_identifiers_and_numbers_are_unexpected() {
    let (tokens, diagnostics) = scan_all("ab 12");
    assert_eq!(tokens.len(), 1);
    assert_eq!(diagnostics.len(), 4);
    assert!(diagnostics
        .iter()
        .all(|d| d.code == messages::UNEXPECTED_CHARACTER.code));
}

#[test]
fn test_errors_reported_in_source_order() {
    let (_, diagnostics) = scan_all("@\n$\n\"open");
    let reported: Vec<(u32, u32)> = diagnostics.iter().map(|d| (d.line, d.code)).collect();
    assert_eq!(
        reported,
        vec![
            (1, messages::UNEXPECTED_CHARACTER.code),
            (2, messages::UNEXPECTED_CHARACTER.code),
            (3, messages::UNTERMINATED_STRING.code),
        ]
    );
}

#[test]
fn test_lexemes_match_spans() {
    let source = "{ \"héllo\" }\n// done\n<= é ;";
    let (tokens, _) = scan_all(source);
    for token in &tokens {
        assert_eq!(&source[token.span.to_range()], token.lexeme);
    }
}

/// Keeps only a count, like a caller that just needs a pass/fail flag.
#[derive(Default)]
struct CountingSink {
    errors: usize,
}

impl ErrorSink for CountingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors += 1;
        }
    }
}

#[test]
fn test_custom_sink_through_dyn() {
    let mut counter = CountingSink::default();
    let sink: &mut dyn ErrorSink = &mut counter;
    let tokens = scan_tokens("+ ~", sink);
    assert_eq!(tokens.len(), 2);
    assert_eq!(counter.errors, 1);
}

#[test]
fn test_tokens_serialize() {
    let (tokens, _) = scan_all("\"hi\";");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["kind"], "STRING");
    assert_eq!(json[0]["lexeme"], "\"hi\"");
    assert_eq!(json[0]["literal"], "hi");
    assert_eq!(json[1]["kind"], "SEMICOLON");
    assert!(json[1].get("literal").is_none());
    assert_eq!(json[2]["kind"], "EOF");
    assert_eq!(json[2]["span"]["start"], 5);
}

#[test]
fn test_parallel_scans_are_independent() {
    let sources = ["(", "\"unterminated", "==", "@@"];
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || {
                let mut diagnostics = DiagnosticCollection::new();
                let count = scan_tokens(&source, &mut diagnostics).len();
                (count, diagnostics.len())
            })
        })
        .collect();
    let results: Vec<(usize, usize)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![(2, 0), (1, 1), (2, 0), (1, 2)]);
}
