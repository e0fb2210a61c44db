//! ufoscript - sub-parser driven parsing for UFO:AI script files
//!
//! This crate re-exports all layers of the toolkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: ufoscript_runtime    - checker, JSON reports, CLI
//! Layer 3: ufoscript_outline    - labels, icons, document outline
//! Layer 2: ufoscript_parser     - sub-parser registry, scopes, diagnostics
//! Layer 1: ufoscript_language   - lexer, syntax tree, pretty printer
//! Layer 0: ufoscript_foundation - core types (Value, Error)
//! ```

pub use ufoscript_foundation as foundation;
pub use ufoscript_language as language;
pub use ufoscript_outline as outline;
pub use ufoscript_parser as parser;
pub use ufoscript_runtime as runtime;
