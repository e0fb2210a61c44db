//! Parsing context shared by every sub-parser of one parse session.
//!
//! The context owns the token stream, the diagnostic sink, and the scope
//! stack. Each scope holds the registry of the sub-parser whose block is
//! being read, so identifier resolution always consults the innermost
//! block's registrations and nothing else.

use std::rc::Rc;

use ufoscript_foundation::ErrorContext;
use ufoscript_language::{Span, Token};

use crate::config::ParserConfig;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
use crate::factory::SubParserFactory;
use crate::registry::SubParserRegistry;
use crate::stream::TokenStream;

/// One level of the scope stack.
#[derive(Clone, Debug)]
pub struct Scope {
    /// Node type owning this scope (`document` at the top).
    pub node_type: String,
    /// Registry consulted for identifiers inside this scope.
    pub registry: Rc<SubParserRegistry>,
    /// Span of the opening brace (or the start of the file).
    pub span: Span,
}

/// Mutable state threaded through a parse.
#[derive(Debug)]
pub struct ParserContext<'src> {
    source: &'src str,
    stream: TokenStream,
    diagnostics: Diagnostics,
    config: ParserConfig,
    scopes: Vec<Scope>,
    nesting: usize,
    halted: bool,
}

impl<'src> ParserContext<'src> {
    /// Creates a context for `source`, lexing it immediately.
    #[must_use]
    pub fn new(source: &'src str, config: ParserConfig) -> Self {
        let mut diagnostics = Diagnostics::new();
        let stream = TokenStream::lex(source, &mut diagnostics);
        let halted = config.stop_on_first_error && diagnostics.has_errors();
        Self {
            source,
            stream,
            diagnostics,
            config,
            scopes: Vec::new(),
            nesting: 0,
            halted,
        }
    }

    /// Returns the source text.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the diagnostics reported so far.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    /// Returns the current token.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.stream.peek()
    }

    /// Returns the token `n` positions ahead.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> &Token {
        self.stream.peek_nth(n)
    }

    /// Consumes the current token.
    pub fn advance(&mut self) -> Token {
        self.stream.advance()
    }

    /// Returns true at end of input.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.stream.is_at_end()
    }

    /// Returns the span of the last consumed token.
    #[must_use]
    pub const fn previous_span(&self) -> Span {
        self.stream.previous_span()
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Records a diagnostic.
    ///
    /// A malformed block halts the parse. Any other error halts it only when
    /// the configuration asks to stop at the first error.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.kind == DiagnosticKind::MalformedBlock
            || (diagnostic.severity == Severity::Error && self.config.stop_on_first_error)
        {
            self.halted = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns true once parsing must stop.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Builds an error context for `span` carrying the scope path.
    #[must_use]
    pub fn error_context(&self, span: Span) -> ErrorContext {
        let mut context = ErrorContext::new().with_position(span.line as usize, span.column as usize);
        if let Some(name) = &self.config.source_name {
            context = context.with_source(name.clone());
        }
        for scope in &self.scopes {
            context = context.with_scope(scope.node_type.clone());
        }
        context
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    /// Pushes a scope whose identifiers resolve against `registry`.
    pub fn enter_scope(
        &mut self,
        node_type: impl Into<String>,
        registry: Rc<SubParserRegistry>,
        span: Span,
    ) {
        self.scopes.push(Scope {
            node_type: node_type.into(),
            registry,
            span,
        });
    }

    /// Pops the innermost scope.
    pub fn exit_scope(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    /// Returns the innermost scope.
    #[must_use]
    pub fn current_scope(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Returns the node types of all open scopes, outermost first.
    #[must_use]
    pub fn scope_path(&self) -> Vec<&str> {
        self.scopes.iter().map(|s| s.node_type.as_str()).collect()
    }

    /// Returns the number of open scopes.
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Resolves `word` against the innermost scope only.
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<SubParserFactory> {
        self.scopes
            .last()
            .and_then(|scope| scope.registry.resolve(word))
            .copied()
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Enters a brace group, reporting a depth-limit error if it is too deep.
    ///
    /// Returns false (and does not count the group) when the limit is hit.
    pub fn try_open_group(&mut self, span: Span) -> bool {
        if self.nesting >= self.config.max_depth {
            let max = self.config.max_depth;
            self.report(Diagnostic::error(
                DiagnosticKind::DepthLimit,
                format!("nesting deeper than {max} levels"),
                span,
            ));
            return false;
        }
        self.nesting += 1;
        true
    }

    /// Leaves a brace group entered by [`Self::try_open_group`].
    pub fn close_group(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Returns the current brace nesting.
    #[must_use]
    pub const fn nesting(&self) -> usize {
        self.nesting
    }

    /// Consumes the context, returning the collected diagnostics.
    #[must_use]
    pub fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}
