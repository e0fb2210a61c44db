//! Parser configuration.

/// Configuration for one parse session.
///
/// Controls nesting limits and how much the parser reports about input it
/// tolerates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum brace nesting (blocks, anonymous groups and value lists).
    pub max_depth: usize,

    /// Emit an info diagnostic when a block-shaped entry (`key {` or
    /// `key name {`) does not resolve to a sub-parser.
    pub report_unresolved: bool,

    /// Stop at the first error diagnostic instead of recovering.
    pub stop_on_first_error: bool,

    /// File name used in rendered diagnostics.
    pub source_name: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            report_unresolved: false,
            stop_on_first_error: false,
            source_name: None,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration that reports unresolved block keywords.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            report_unresolved: true,
            ..Self::default()
        }
    }

    /// Creates a configuration that gives up at the first error.
    #[must_use]
    pub fn fail_fast() -> Self {
        Self {
            stop_on_first_error: true,
            ..Self::default()
        }
    }

    /// Builder method to set the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to enable/disable unresolved-keyword reports.
    #[must_use]
    pub fn with_report_unresolved(mut self, enabled: bool) -> Self {
        self.report_unresolved = enabled;
        self
    }

    /// Builder method to enable/disable stopping at the first error.
    #[must_use]
    pub fn with_stop_on_first_error(mut self, enabled: bool) -> Self {
        self.stop_on_first_error = enabled;
        self
    }

    /// Builder method to name the source in diagnostics.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}
