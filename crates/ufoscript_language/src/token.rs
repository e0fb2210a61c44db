//! Token types for UFO script source.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token opens a group (`{` or `(`).
    #[must_use]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(self.kind, TokenKind::LBrace | TokenKind::LParen)
    }

    /// Returns true if this token closes a group (`}` or `)`).
    #[must_use]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(self.kind, TokenKind::RBrace | TokenKind::RParen)
    }
}

/// Token types for UFO script source.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // Words and literals
    /// Bare word like `window`, `*cvar:mn_x` or `<1>`
    Ident(String),
    /// Quoted string like `"_Options"` (escapes already resolved)
    String(String),
    /// Integer literal like `42` or `-3`
    Int(i64),
    /// Float literal like `0.5` or `1e3`
    Float(f64),

    // Meta
    /// Comment text including its markers
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns true if this token can be a property value on its own.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Ident(_) | Self::String(_) | Self::Int(_) | Self::Float(_)
        )
    }

    /// Returns the identifier text, or None if not an identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Ident(_) => "identifier",
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
