//! Integration tests for Layer 2: Parser
//!
//! Tests for the sub-parser framework and the parse engine:
//! - Factory registration and resolution
//! - Node behaviours and event properties
//! - Property fallback for unresolved identifiers
//! - Action statements
//! - Diagnostics and recovery

mod behaviours;
mod diagnostics;
mod fallback;
mod registry;
