//! Token stream with lookahead.
//!
//! Comments are dropped and lexer errors are turned into diagnostics up
//! front, so the parser only ever sees structural tokens. The stream always
//! ends with [`TokenKind::Eof`] and never advances past it.

use ufoscript_language::{Lexer, Span, Token, TokenKind};

use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};

/// Lookahead buffer over the tokens of one source file.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    previous: Span,
}

impl TokenStream {
    /// Lexes `source`, reporting lexer errors into `diagnostics`.
    #[must_use]
    pub fn lex(source: &str, diagnostics: &mut Diagnostics) -> Self {
        let mut tokens = Vec::new();
        for token in Lexer::tokenize_all(source) {
            match token.kind {
                TokenKind::Comment(_) => {}
                TokenKind::Error(message) => {
                    diagnostics.push(Diagnostic::error(DiagnosticKind::Lex, message, token.span));
                }
                _ => tokens.push(token),
            }
        }
        Self {
            tokens,
            pos: 0,
            previous: Span::default(),
        }
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions ahead, clamped to the final `Eof`.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous = token.span;
        token
    }

    /// Returns true if the current token is `Eof`.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Returns the span of the most recently consumed token.
    #[must_use]
    pub const fn previous_span(&self) -> Span {
        self.previous
    }

    /// Returns the number of structural tokens, including `Eof`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds only `Eof`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }
}
