//! Sub-parser framework and parse engine for UFO script files.
//!
//! This crate provides:
//! - [`SubParserFactory`] / [`SubParserRegistry`] - Scoped factories keyed by
//!   the identifier that opens a block, matched exactly or case-insensitively
//! - [`SubParser`] - Per-block rules: node type, body mode, nested registrations
//! - [`behaviour`] - UI node behaviours and the event properties they inherit
//! - [`subparsers`] - The concrete UI, entity and data sub-parsers
//! - [`ScriptParser`] - The engine turning source into a [`Document`] plus
//!   [`Diagnostics`]
//!
//! # Example
//!
//! ```
//! use ufoscript_parser::parse_source;
//!
//! let outcome = parse_source("range angle { min 0 max 360 }").unwrap();
//! assert!(!outcome.has_errors());
//! let range = outcome.document.nodes().next().unwrap();
//! assert_eq!(range.node_type, "range");
//! ```
//!
//! [`Document`]: ufoscript_language::Document

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod behaviour;
pub mod catalog;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod engine;
pub mod factory;
pub mod registry;
pub mod stream;
pub mod subparser;
pub mod subparsers;


pub use catalog::{DOCUMENT_SCOPE, document_registry};
pub use config::ParserConfig;
pub use context::ParserContext;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use engine::{ParseFailed, ParseOutcome, ScriptParser, parse_source};
pub use factory::{MatchMode, SubParserFactory};
pub use registry::SubParserRegistry;
pub use subparser::{BodyMode, Capabilities, SubParser};
