//! Diagnostics collected while parsing one file.
//!
//! Problems in the input never abort the parse with an `Err`; they are
//! accumulated here so a single pass reports every independent issue.

use std::fmt;

use ufoscript_foundation::{Error, ErrorKind};
use ufoscript_language::Span;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational note about tolerated input.
    Info,
    /// Suspicious input that was still parsed.
    Warning,
    /// Input that could not be parsed as written.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Categories of diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A block keyword did not match any sub-parser in the active scope.
    UnresolvedIdentifier,
    /// A block was opened but never closed.
    MalformedBlock,
    /// A token appeared where it cannot be used.
    UnexpectedToken,
    /// A property name had no value.
    MissingValue,
    /// The lexer rejected part of the source.
    Lex,
    /// Nesting exceeded the configured limit.
    DepthLimit,
    /// A sub-parser failed to construct (framework bug).
    Internal,
}

impl DiagnosticKind {
    /// Returns a short stable name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UnresolvedIdentifier => "unresolved-identifier",
            Self::MalformedBlock => "malformed-block",
            Self::UnexpectedToken => "unexpected-token",
            Self::MissingValue => "missing-value",
            Self::Lex => "lex",
            Self::DepthLimit => "depth-limit",
            Self::Internal => "internal",
        }
    }
}

/// A single diagnostic message.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Severity of the problem.
    pub severity: Severity,
    /// Category of the problem.
    pub kind: DiagnosticKind,
    /// Human-readable description.
    pub message: String,
    /// Where the problem was found.
    pub span: Span,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
            span,
        }
    }

    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            span,
        }
    }

    /// Creates an info diagnostic.
    #[must_use]
    pub fn info(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Info,
            kind,
            message: message.into(),
            span,
        }
    }

    /// Converts a framework error into a diagnostic at `span`.
    #[must_use]
    pub fn from_error(err: &Error, span: Span) -> Self {
        let kind = match err.kind {
            ErrorKind::UnresolvedIdentifier(_) => DiagnosticKind::UnresolvedIdentifier,
            ErrorKind::MalformedBlock { .. } => DiagnosticKind::MalformedBlock,
            ErrorKind::DuplicateRegistration { .. }
            | ErrorKind::Capability { .. }
            | ErrorKind::Io { .. }
            | ErrorKind::Serialization(_)
            | ErrorKind::Internal(_) => DiagnosticKind::Internal,
        };
        Self::error(kind, err.to_string(), span)
    }

    /// Returns true if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}[{}]: {}",
            self.span.line,
            self.span.column,
            self.severity,
            self.kind.name(),
            self.message
        )
    }
}

/// Diagnostic sink for one parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Iterates over the diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns the number of diagnostics with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|d| d.severity == severity).count()
    }

    /// Returns the diagnostics of a given kind.
    #[must_use]
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.items.iter().filter(|d| d.kind == kind).collect()
    }

    /// Consumes the sink, returning the diagnostics.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Renders every diagnostic with its source line and a caret.
    #[must_use]
    pub fn render(&self, source: &str, source_name: Option<&str>) -> String {
        let mut out = String::new();
        for diagnostic in &self.items {
            if let Some(name) = source_name {
                out.push_str(name);
                out.push(':');
            }
            out.push_str(&diagnostic.to_string());
            out.push('\n');

            let line = diagnostic.span.line_text(source);
            if !line.is_empty() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
                out.push_str("    ");
                let column = diagnostic.span.column as usize;
                for c in line.chars().take(column.saturating_sub(1)) {
                    out.push(if c == '\t' { '\t' } else { ' ' });
                }
                out.push('^');
                out.push('\n');
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
