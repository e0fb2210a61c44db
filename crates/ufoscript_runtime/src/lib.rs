//! Checking, outlining, and formatting of UFO script files.
//!
//! This crate provides:
//! - [`Checker`] - Parses files and collects per-file reports
//! - [`serialize`] - JSON output of documents, outlines, and diagnostics
//! - The `ufoscript` command-line tool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod serialize;

pub use check::{CheckSummary, Checker, FileReport};
pub use serialize::{JsonDiagnostic, JsonReport};
