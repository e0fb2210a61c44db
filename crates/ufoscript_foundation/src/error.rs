//! Error types for the UFO script toolkit.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Per-file problems found while parsing are reported as diagnostics by the
//! parser crate; the errors here cover failures of the framework itself.

use std::fmt;

use thiserror::Error;

/// The main error type for toolkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a duplicate registration error.
    #[must_use]
    pub fn duplicate_registration(id: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateRegistration {
            id: id.into(),
            scope: scope.into(),
        })
    }

    /// Creates an unresolved identifier error.
    #[must_use]
    pub fn unresolved_identifier(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedIdentifier(name.into()))
    }

    /// Creates a malformed block error.
    #[must_use]
    pub fn malformed_block(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::MalformedBlock {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a missing capability error.
    #[must_use]
    pub fn capability(scope: impl Into<String>, capability: &'static str) -> Self {
        Self::new(ErrorKind::Capability {
            scope: scope.into(),
            capability,
        })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: err.to_string(),
        })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error is a framework bug rather than bad input.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::DuplicateRegistration { .. }
                | ErrorKind::Capability { .. }
                | ErrorKind::Internal(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Two factories were registered under the same identifier in one scope.
    #[error("duplicate sub-parser registration: '{id}' in scope {scope}")]
    DuplicateRegistration {
        /// The identifier registered twice.
        id: String,
        /// The scope (node type or `document`) the registration targeted.
        scope: String,
    },

    /// An identifier did not match any factory in the active scope.
    #[error("unresolved identifier: {0}")]
    UnresolvedIdentifier(String),

    /// A block was opened but never closed.
    #[error("malformed block at {line}:{column}: {message}")]
    MalformedBlock {
        /// Description of the problem.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A sub-parser was asked for something its capability set forbids.
    #[error("sub-parser {scope} does not accept {capability}")]
    Capability {
        /// The node type of the sub-parser.
        scope: String,
        /// The missing capability.
        capability: &'static str,
    },

    /// Reading a script file failed.
    #[error("cannot read {path}: {message}")]
    Io {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Writing a document or report in another format failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Enclosing scopes, outermost first.
    pub scopes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds an enclosing scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.scopes.is_empty() {
            writeln!(f)?;
            for scope in self.scopes.iter().rev() {
                writeln!(f, "  in {scope}")?;
            }
        }
        Ok(())
    }
}
