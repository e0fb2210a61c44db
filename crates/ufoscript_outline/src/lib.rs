//! Labels, icons, and outline trees for parsed UFO script documents.
//!
//! This crate provides:
//! - [`LabelProvider`] - Display text (`"window main"`) and icon paths
//!   (`"icons/window.png"`) for nodes
//! - [`Outline`] - A flattened, depth-annotated view of every node in a
//!   document, ready for tree views or terminal output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod label;
pub mod outline;

pub use label::LabelProvider;
pub use outline::{Outline, OutlineConfig, OutlineEntry, build_outline};
