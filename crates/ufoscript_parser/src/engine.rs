//! The parse engine.
//!
//! Reads a token stream into a [`Document`]. At every entry of a block body
//! the current word is resolved against the innermost scope's registry:
//!
//! - a match followed by `[name] [extends parent] {` opens a nested block,
//!   read by the sub-parser the factory builds
//! - anything else is read as a `key value` property, where the value is a
//!   scalar or a brace-delimited list
//!
//! Function and event bodies are read as `;`-separated action statements.
//! Problems are reported as diagnostics and parsing carries on, except for
//! an unterminated block, which stops the parse.

use std::rc::Rc;

use log::{debug, trace, warn};
use thiserror::Error;
use ufoscript_foundation::{Result, Value};
use ufoscript_language::{Document, Item, Property, Span, Statement, TokenKind, UfoNode};

use crate::catalog::{self, DOCUMENT_SCOPE};
use crate::config::ParserConfig;
use crate::context::ParserContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::factory::SubParserFactory;
use crate::registry::SubParserRegistry;
use crate::subparser::BodyMode;

/// Parses UFO script sources with a fixed document registry.
#[derive(Clone, Debug)]
pub struct ScriptParser {
    registry: Rc<SubParserRegistry>,
    config: ParserConfig,
}

impl ScriptParser {
    /// Creates a parser for the full script language.
    ///
    /// # Errors
    ///
    /// Fails if the built-in registrations conflict.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(catalog::document_registry()?))
    }

    /// Creates a parser whose document scope uses `registry`.
    #[must_use]
    pub fn with_registry(registry: SubParserRegistry) -> Self {
        Self {
            registry: Rc::new(registry),
            config: ParserConfig::default(),
        }
    }

    /// Builder method to replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the document-scope registry.
    #[must_use]
    pub fn registry(&self) -> &SubParserRegistry {
        &self.registry
    }

    /// Parses `source` into a document plus diagnostics.
    #[must_use]
    pub fn parse(&self, source: &str) -> ParseOutcome {
        let mut ctx = ParserContext::new(source, self.config.clone());
        let document = parse_document(&mut ctx, Rc::clone(&self.registry));
        let diagnostics = ctx.finish();
        debug!(
            "parsed {} top-level items, {} diagnostics",
            document.items.len(),
            diagnostics.len()
        );
        ParseOutcome {
            document,
            diagnostics,
        }
    }
}

/// Parses `source` with the full script language and default settings.
///
/// # Errors
///
/// Fails only if the built-in registrations conflict; problems in the
/// source are reported in [`ParseOutcome::diagnostics`].
pub fn parse_source(source: &str) -> Result<ParseOutcome> {
    Ok(ScriptParser::new()?.parse(source))
}

/// Result of parsing one source.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutcome {
    /// The tree, partial if parsing stopped early.
    pub document: Document,
    /// Everything reported while parsing.
    pub diagnostics: Diagnostics,
}

impl ParseOutcome {
    /// Returns true if any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Returns the document if no error was reported.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailed`] carrying the diagnostics otherwise.
    pub fn into_result(self) -> std::result::Result<Document, ParseFailed> {
        if self.has_errors() {
            Err(ParseFailed {
                diagnostics: self.diagnostics,
            })
        } else {
            Ok(self.document)
        }
    }
}

/// A parse that reported errors.
#[derive(Debug, Error)]
#[error("parse failed with {} error(s)", .diagnostics.error_count())]
pub struct ParseFailed {
    /// Everything reported while parsing.
    pub diagnostics: Diagnostics,
}

// =============================================================================
// Blocks
// =============================================================================

/// What follows a block keyword, up to but excluding the `{`.
#[derive(Debug)]
struct Header {
    name: Option<String>,
    extends: Option<String>,
    len: usize,
}

fn parse_document(ctx: &mut ParserContext<'_>, registry: Rc<SubParserRegistry>) -> Document {
    let span = Span::new(0, ctx.source().len(), 1, 1);
    ctx.enter_scope(DOCUMENT_SCOPE, registry, Span::at_start());
    let items = parse_entries(ctx, None);
    ctx.exit_scope();
    Document { items, span }
}

/// Reads properties and nested blocks until `}` (left unconsumed) or end of
/// input. `open` is the brace that began the body, `None` at document level.
fn parse_entries(ctx: &mut ParserContext<'_>, open: Option<Span>) -> Vec<Item> {
    let mut items = Vec::new();
    while !ctx.is_halted() {
        let token = ctx.peek().clone();
        match token.kind {
            TokenKind::Eof => {
                if let Some(open) = open {
                    report_unterminated(ctx, open, "block");
                }
                break;
            }
            TokenKind::RBrace => {
                if open.is_some() {
                    break;
                }
                ctx.advance();
                ctx.report(Diagnostic::error(
                    DiagnosticKind::UnexpectedToken,
                    "unmatched '}'",
                    token.span,
                ));
            }
            TokenKind::Semicolon | TokenKind::Comma => {
                ctx.advance();
            }
            TokenKind::LBrace => items.extend(parse_anonymous_group(ctx)),
            TokenKind::Ident(word) => parse_entry(ctx, word, token.span, &mut items),
            TokenKind::String(key) => parse_property(ctx, key, true, &mut items),
            TokenKind::Int(_) | TokenKind::Float(_) => {
                let key = token.text(ctx.source()).to_string();
                parse_property(ctx, key, false, &mut items);
            }
            kind => {
                ctx.advance();
                ctx.report(Diagnostic::error(
                    DiagnosticKind::UnexpectedToken,
                    format!("expected a property or block, found {}", kind.name()),
                    token.span,
                ));
            }
        }
    }
    items
}

/// Reads an entry that starts with a bare word.
fn parse_entry(ctx: &mut ParserContext<'_>, word: String, span: Span, items: &mut Vec<Item>) {
    if let Some(factory) = ctx.resolve(&word) {
        if let Some(header) = block_header(ctx) {
            if let Some(node) = parse_block(ctx, factory, header) {
                items.push(Item::Node(node));
            }
            return;
        }
        trace!("'{word}' names a sub-parser but opens no block; reading a property");
    } else if block_header(ctx).is_some() {
        trace!("'{word}' is not registered here; reading a property");
        if ctx.config().report_unresolved {
            let scope = current_scope_name(ctx);
            ctx.report(Diagnostic::info(
                DiagnosticKind::UnresolvedIdentifier,
                format!("'{word}' does not open a block inside {scope}; read as a property"),
                span,
            ));
        }
    }
    parse_property(ctx, word, false, items);
}

/// Recognises `[name] [extends parent] {` after the current keyword.
fn block_header(ctx: &ParserContext<'_>) -> Option<Header> {
    if matches!(ctx.peek_nth(1).kind, TokenKind::LBrace) {
        return Some(Header {
            name: None,
            extends: None,
            len: 0,
        });
    }
    let name = header_word(&ctx.peek_nth(1).kind)?;
    match &ctx.peek_nth(2).kind {
        TokenKind::LBrace => Some(Header {
            name: Some(name),
            extends: None,
            len: 1,
        }),
        TokenKind::Ident(keyword) if keyword == "extends" => {
            let parent = header_word(&ctx.peek_nth(3).kind)?;
            matches!(ctx.peek_nth(4).kind, TokenKind::LBrace).then_some(Header {
                name: Some(name),
                extends: Some(parent),
                len: 3,
            })
        }
        _ => None,
    }
}

fn header_word(kind: &TokenKind) -> Option<String> {
    match kind {
        TokenKind::Ident(s) | TokenKind::String(s) => Some(s.clone()),
        TokenKind::Int(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a block whose keyword is the current token.
fn parse_block(
    ctx: &mut ParserContext<'_>,
    factory: SubParserFactory,
    header: Header,
) -> Option<UfoNode> {
    let keyword = ctx.advance();
    for _ in 0..header.len {
        ctx.advance();
    }
    let open = ctx.peek().span;

    let sub_parser = match factory.create(ctx) {
        Ok(sub_parser) => sub_parser,
        Err(err) => {
            warn!(
                "cannot build sub-parser '{}': {err} {}",
                factory.id(),
                ctx.error_context(keyword.span)
            );
            ctx.report(Diagnostic::from_error(&err, keyword.span));
            skip_balanced(ctx);
            return None;
        }
    };
    if !ctx.try_open_group(open) {
        skip_balanced(ctx);
        return None;
    }
    ctx.advance();

    let (node_type, body_mode, registry) = sub_parser.into_parts();
    debug!(
        "{node_type} {} at {}:{}",
        header.name.as_deref().unwrap_or("<anonymous>"),
        keyword.span.line,
        keyword.span.column
    );

    ctx.enter_scope(node_type, Rc::new(registry), open);
    let body = match body_mode {
        BodyMode::Entries => parse_entries(ctx, Some(open)),
        BodyMode::Actions => parse_statements(ctx, open)
            .into_iter()
            .map(Item::Statement)
            .collect(),
    };
    ctx.exit_scope();
    ctx.close_group();
    if matches!(ctx.peek().kind, TokenKind::RBrace) {
        ctx.advance();
    }

    let mut node = UfoNode::new(node_type, keyword.span.to(ctx.previous_span()));
    node.name = header.name;
    node.extends = header.extends;
    node.body = body;
    Some(node)
}

/// Reads a `{ ... }` group in entry position. Its entries belong to the
/// enclosing block.
fn parse_anonymous_group(ctx: &mut ParserContext<'_>) -> Vec<Item> {
    let open = ctx.peek().span;
    if !ctx.try_open_group(open) {
        skip_balanced(ctx);
        return Vec::new();
    }
    ctx.advance();
    let items = parse_entries(ctx, Some(open));
    ctx.close_group();
    if matches!(ctx.peek().kind, TokenKind::RBrace) {
        ctx.advance();
    }
    items
}

// =============================================================================
// Properties
// =============================================================================

/// Reads `key value` where the key is the current token.
fn parse_property(ctx: &mut ParserContext<'_>, key: String, quoted: bool, items: &mut Vec<Item>) {
    let key_span = ctx.advance().span;
    match parse_value(ctx) {
        Some(value) => {
            let span = key_span.to(ctx.previous_span());
            let property = Property::new(key, value, span).with_quoted_key(quoted);
            items.push(Item::Property(property));
        }
        None => ctx.report(Diagnostic::warning(
            DiagnosticKind::MissingValue,
            format!("property '{key}' has no value"),
            key_span,
        )),
    }
}

/// Reads a property value: a scalar, a list, or `name { ... }` after a key
/// that opens no block here.
fn parse_value(ctx: &mut ParserContext<'_>) -> Option<Value> {
    let token = ctx.peek().clone();
    match token.kind {
        TokenKind::LBrace => Some(parse_value_list(ctx)),
        TokenKind::Ident(_) | TokenKind::String(_) => {
            ctx.advance();
            let value = token_value(token.kind);
            if matches!(ctx.peek().kind, TokenKind::LBrace) {
                let body = parse_value_list(ctx);
                return Some(Value::List(vec![value, body]));
            }
            Some(value)
        }
        TokenKind::Int(_) | TokenKind::Float(_) => {
            ctx.advance();
            Some(token_value(token.kind))
        }
        _ => None,
    }
}

/// Reads `{ ... }` as a list of values. Separators are dropped.
fn parse_value_list(ctx: &mut ParserContext<'_>) -> Value {
    let open = ctx.peek().span;
    if !ctx.try_open_group(open) {
        skip_balanced(ctx);
        return Value::List(Vec::new());
    }
    ctx.advance();

    let mut values = Vec::new();
    while !ctx.is_halted() {
        let token = ctx.peek().clone();
        match token.kind {
            TokenKind::RBrace => {
                ctx.advance();
                break;
            }
            TokenKind::Eof => {
                report_unterminated(ctx, open, "list");
                break;
            }
            TokenKind::LBrace => values.push(parse_value_list(ctx)),
            TokenKind::Semicolon | TokenKind::Comma => {
                ctx.advance();
            }
            kind => {
                ctx.advance();
                values.push(token_value(kind));
            }
        }
    }
    ctx.close_group();
    Value::List(values)
}

// =============================================================================
// Actions
// =============================================================================

/// Reads statements until `}` (left unconsumed) or end of input.
fn parse_statements(ctx: &mut ParserContext<'_>, open: Span) -> Vec<Statement> {
    let mut statements = Vec::new();
    while !ctx.is_halted() {
        match ctx.peek().kind {
            TokenKind::RBrace => break,
            TokenKind::Eof => {
                report_unterminated(ctx, open, "block");
                break;
            }
            TokenKind::Semicolon => {
                ctx.advance();
            }
            _ => statements.push(parse_statement(ctx)),
        }
    }
    statements
}

/// Reads one statement. It ends at `;`, before `}`, or after a brace group
/// unless `else`/`elif` follows.
fn parse_statement(ctx: &mut ParserContext<'_>) -> Statement {
    let start = ctx.peek().span;
    let mut words = Vec::new();
    while !ctx.is_halted() {
        let token = ctx.peek().clone();
        match token.kind {
            TokenKind::Semicolon => {
                ctx.advance();
                break;
            }
            TokenKind::RBrace | TokenKind::Eof => break,
            TokenKind::LBrace => {
                words.push(parse_action_group(ctx));
                let continues = matches!(
                    &ctx.peek().kind,
                    TokenKind::Ident(w) if w == "else" || w == "elif"
                );
                if !continues {
                    break;
                }
            }
            kind => {
                ctx.advance();
                words.push(token_value(kind));
            }
        }
    }
    Statement::new(words, start.to(ctx.previous_span()))
}

/// Reads `{ ... }` inside a statement as a list of statements.
fn parse_action_group(ctx: &mut ParserContext<'_>) -> Value {
    let open = ctx.peek().span;
    if !ctx.try_open_group(open) {
        skip_balanced(ctx);
        return Value::List(Vec::new());
    }
    ctx.advance();
    let inner = parse_statements(ctx, open);
    ctx.close_group();
    if matches!(ctx.peek().kind, TokenKind::RBrace) {
        ctx.advance();
    }
    Value::List(inner.into_iter().map(|s| Value::List(s.words)).collect())
}

// =============================================================================
// Helpers
// =============================================================================

fn token_value(kind: TokenKind) -> Value {
    match kind {
        TokenKind::Ident(s) => Value::Ident(s),
        TokenKind::String(s) => Value::String(s),
        TokenKind::Int(n) => Value::Int(n),
        TokenKind::Float(n) => Value::Float(n),
        TokenKind::LParen => Value::Ident("(".into()),
        TokenKind::RParen => Value::Ident(")".into()),
        TokenKind::Comma => Value::Ident(",".into()),
        TokenKind::Semicolon => Value::Ident(";".into()),
        TokenKind::LBrace => Value::Ident("{".into()),
        TokenKind::RBrace => Value::Ident("}".into()),
        TokenKind::Comment(s) | TokenKind::Error(s) => Value::Ident(s),
        TokenKind::Eof => Value::Ident(String::new()),
    }
}

fn current_scope_name(ctx: &ParserContext<'_>) -> String {
    ctx.current_scope()
        .map_or(DOCUMENT_SCOPE, |scope| scope.node_type.as_str())
        .to_string()
}

fn report_unterminated(ctx: &mut ParserContext<'_>, open: Span, what: &str) {
    let scope = current_scope_name(ctx);
    ctx.report(Diagnostic::error(
        DiagnosticKind::MalformedBlock,
        format!("unterminated {what} in '{scope}' opened here"),
        open,
    ));
}

/// Skips a brace group starting at the current `{`, nested groups included.
fn skip_balanced(ctx: &mut ParserContext<'_>) {
    let open = ctx.peek().span;
    let mut depth = 0usize;
    loop {
        match ctx.peek().kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    ctx.advance();
                    return;
                }
            }
            TokenKind::Eof => {
                report_unterminated(ctx, open, "block");
                return;
            }
            _ => {}
        }
        ctx.advance();
    }
}
