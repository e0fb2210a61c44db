//! Sub-parser factories.
//!
//! A factory pairs the identifier that opens a block with a function that
//! builds the sub-parser for that block. Factories are plain `Copy` values
//! so they can live in `const` tables and be registered in many scopes.

use std::fmt;

use ufoscript_foundation::Result;

use crate::context::ParserContext;
use crate::subparser::SubParser;

/// How a factory's identifier is compared against source tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The token must equal the identifier exactly.
    Exact,
    /// The token may differ from the identifier in letter case.
    IdName,
}

/// Function that builds a sub-parser for one block.
pub type CreateFn = fn(&ParserContext<'_>) -> Result<SubParser>;

/// A named, matchable constructor for a sub-parser.
#[derive(Clone, Copy)]
pub struct SubParserFactory {
    id: &'static str,
    match_mode: MatchMode,
    create: CreateFn,
}

impl SubParserFactory {
    /// Creates a factory matched exactly.
    #[must_use]
    pub const fn new(id: &'static str, create: CreateFn) -> Self {
        Self {
            id,
            match_mode: MatchMode::Exact,
            create,
        }
    }

    /// Creates a factory matched case-insensitively.
    #[must_use]
    pub const fn id_name(id: &'static str, create: CreateFn) -> Self {
        Self {
            id,
            match_mode: MatchMode::IdName,
            create,
        }
    }

    /// Returns the canonical identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the match mode.
    #[must_use]
    pub const fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Returns true if this factory matches case-insensitively.
    #[must_use]
    pub const fn is_id_name(&self) -> bool {
        matches!(self.match_mode, MatchMode::IdName)
    }

    /// Returns true if `token` selects this factory.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        match self.match_mode {
            MatchMode::Exact => token == self.id,
            MatchMode::IdName => token.to_lowercase() == self.id.to_lowercase(),
        }
    }

    /// Builds a sub-parser for a block opened in `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sub-parser's own registrations conflict.
    pub fn create(&self, ctx: &ParserContext<'_>) -> Result<SubParser> {
        (self.create)(ctx)
    }
}

impl fmt::Debug for SubParserFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubParserFactory")
            .field("id", &self.id)
            .field("match_mode", &self.match_mode)
            .finish_non_exhaustive()
    }
}
