//! Core error and value types for the UFO script toolkit.
//!
//! This crate provides:
//! - [`Value`] - Property values read from script files
//! - [`Error`] - Rich error types with context
//! - [`Result`] - Result alias used across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use value::Value;

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;
