//! Concrete sub-parsers for the script dialects.
//!
//! - [`ui`]: windows, components and the UI nodes they contain
//! - [`events`]: event-handler properties such as `onclick`
//! - [`entity`]: map entity definitions and their `range` blocks
//! - [`data`]: campaign, equipment and other data definitions

pub mod data;
pub mod entity;
pub mod events;
pub mod ui;
