//! JSON output using `serde_json`.
//!
//! Documents serialize through the `serde` feature of the language crate.
//! Diagnostics are flattened into [`JsonDiagnostic`] records with line and
//! column fields so editors can consume them directly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use ufoscript_foundation::{Error, Result};
use ufoscript_language::Document;
use ufoscript_outline::Outline;
use ufoscript_parser::Diagnostic;

use crate::check::FileReport;

/// A diagnostic in machine-readable form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    /// `error`, `warning` or `info`.
    pub severity: String,
    /// Stable kind name such as `malformed-block`.
    pub kind: String,
    /// Human-readable description.
    pub message: String,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity.to_string(),
            kind: diagnostic.kind.name().to_string(),
            message: diagnostic.message.clone(),
            line: diagnostic.span.line,
            column: diagnostic.span.column,
        }
    }
}

/// A file report in machine-readable form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// Path the source was read from.
    pub path: String,
    /// Parsed tree.
    pub document: Document,
    /// Diagnostics reported while parsing.
    pub diagnostics: Vec<JsonDiagnostic>,
    /// Outline, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

impl JsonReport {
    /// Builds a JSON report from a file report.
    #[must_use]
    pub fn new(report: &FileReport, outline: Option<Outline>) -> Self {
        Self {
            path: report.path.display().to_string(),
            document: report.document.clone(),
            diagnostics: report.diagnostics.iter().map(JsonDiagnostic::from).collect(),
            outline,
        }
    }
}

/// Serializes a document to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn document_to_json(document: &Document) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a document from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not describe a document.
pub fn document_from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))
}

/// Serializes a report to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn report_to_json(report: &JsonReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| Error::serialization(e.to_string()))
}

/// Writes a report as JSON to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_report<P: AsRef<Path>>(report: &JsonReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::io(display.clone(), &e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| Error::serialization(e.to_string()))?;
    writer.write_all(b"\n").map_err(|e| Error::io(display.clone(), &e))?;
    writer.flush().map_err(|e| Error::io(display, &e))
}
