//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value and Error.

mod values;
