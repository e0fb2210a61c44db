//! Integration tests for the lexer
//!
//! Tests tokenization of UFO script source.

use ufoscript_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_delimiters() {
    assert_eq!(
        kinds("{ } ( ) ; ,"),
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_numbers() {
    let tokens = kinds("0 42 -17 0.5 -.25");
    assert!(matches!(tokens[0], TokenKind::Int(0)));
    assert!(matches!(tokens[1], TokenKind::Int(42)));
    assert!(matches!(tokens[2], TokenKind::Int(-17)));
    assert!(matches!(tokens[3], TokenKind::Float(f) if (f - 0.5).abs() < f64::EPSILON));
    assert!(matches!(tokens[4], TokenKind::Float(f) if (f + 0.25).abs() < f64::EPSILON));
}

#[test]
fn number_like_words_are_identifiers() {
    assert_eq!(kinds("2d6")[0], TokenKind::Ident("2d6".into()));
    assert_eq!(kinds("2dobj")[0], TokenKind::Ident("2dobj".into()));
}

#[test]
fn tokenize_words() {
    assert_eq!(
        kinds("window *cvar:mn_x <1> node:root.x@string"),
        vec![
            TokenKind::Ident("window".into()),
            TokenKind::Ident("*cvar:mn_x".into()),
            TokenKind::Ident("<1>".into()),
            TokenKind::Ident("node:root.x@string".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn words_stop_at_delimiters() {
    assert_eq!(
        kinds("cmd\"echo\";"),
        vec![
            TokenKind::Ident("cmd".into()),
            TokenKind::String("echo".into()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

// =============================================================================
// Strings and Comments
// =============================================================================

#[test]
fn tokenize_string_escapes() {
    assert_eq!(
        kinds(r#""a\"b\\c\nd""#)[0],
        TokenKind::String("a\"b\\c\nd".into())
    );
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(matches!(kinds("\"open")[0], TokenKind::Error(_)));
}

#[test]
fn comments_are_trivia() {
    assert_eq!(
        kinds("// line\nrange /* block */ foo"),
        vec![
            TokenKind::Ident("range".into()),
            TokenKind::Ident("foo".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comment_markers_inside_words_are_kept() {
    assert_eq!(kinds("http://x")[0], TokenKind::Ident("http://x".into()));
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_track_lines_and_columns() {
    let tokens = Lexer::tokenize_all("window main\n{\n\tstring \"_Hi\"\n}");
    let string = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Ident("string".into()))
        .unwrap();
    assert_eq!(string.span.line, 3);
    assert_eq!(string.span.column, 2);
}
