//! Integration tests for labels and outlines

mod labels;
mod outline;
