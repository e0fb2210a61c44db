//! Per-file checking.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use ufoscript_foundation::{Error, Result};
use ufoscript_language::{Document, PrettyConfig, pretty_print_with_config};
use ufoscript_outline::{LabelProvider, Outline, OutlineConfig, build_outline};
use ufoscript_parser::{Diagnostics, ParserConfig, ScriptParser};

/// Everything learned from parsing one file.
#[derive(Clone, Debug)]
pub struct FileReport {
    /// Path the source was read from (or a display name).
    pub path: PathBuf,
    /// Source text.
    pub source: String,
    /// Parsed tree, partial if parsing stopped early.
    pub document: Document,
    /// Diagnostics reported while parsing.
    pub diagnostics: Diagnostics,
}

impl FileReport {
    /// Returns true if any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Renders the diagnostics with source excerpts.
    #[must_use]
    pub fn render_diagnostics(&self) -> String {
        let name = self.path.display().to_string();
        self.diagnostics.render(&self.source, Some(&name))
    }

    /// Builds the outline of the document.
    #[must_use]
    pub fn outline(&self, labels: &LabelProvider, config: &OutlineConfig) -> Outline {
        build_outline(&self.document, labels, config)
    }

    /// Re-serializes the document.
    #[must_use]
    pub fn format(&self, config: &PrettyConfig) -> String {
        pretty_print_with_config(&self.document, config)
    }
}

/// Totals over several reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files checked.
    pub files: usize,
    /// Files with at least one error.
    pub failed: usize,
    /// Errors across all files.
    pub errors: usize,
    /// Warnings across all files.
    pub warnings: usize,
}

impl CheckSummary {
    /// Adds one report to the totals.
    pub fn add(&mut self, report: &FileReport) {
        self.files += 1;
        if report.has_errors() {
            self.failed += 1;
        }
        self.errors += report.diagnostics.error_count();
        self.warnings += report.diagnostics.warning_count();
    }

    /// Returns true if no file had errors.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Parses script files with one shared parser.
#[derive(Debug)]
pub struct Checker {
    parser: ScriptParser,
}

impl Checker {
    /// Creates a checker with the given parser configuration.
    ///
    /// # Errors
    ///
    /// Fails if the built-in registrations conflict.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            parser: ScriptParser::new()?.with_config(config),
        })
    }

    /// Returns the parser configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        self.parser.config()
    }

    /// Reads and parses one file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read. Problems in its contents are
    /// reported in the returned diagnostics.
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        let source =
            fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), &e))?;
        Ok(self.check_source(path, source))
    }

    /// Parses `source` as if read from `path`.
    #[must_use]
    pub fn check_source(&self, path: impl Into<PathBuf>, source: String) -> FileReport {
        let path = path.into();
        debug!("checking {}", path.display());
        let outcome = self.parser.parse(&source);
        info!(
            "{}: {} errors, {} warnings",
            path.display(),
            outcome.diagnostics.error_count(),
            outcome.diagnostics.warning_count()
        );
        FileReport {
            path,
            source,
            document: outcome.document,
            diagnostics: outcome.diagnostics,
        }
    }
}
