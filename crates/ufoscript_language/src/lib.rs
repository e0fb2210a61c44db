//! Lexer, node tree, and serializer for UFO script files.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of UFO script source
//! - [`Token`] / [`TokenKind`] - Lexical tokens with source spans
//! - [`Document`] / [`UfoNode`] - The typed node tree produced by the parser
//! - [`pretty`] - Re-serialization of node trees into script source
//! - [`visitor`] - Read-only traversal of node trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod node;
pub mod pretty;
pub mod span;
pub mod token;
pub mod visitor;


pub use lexer::Lexer;
pub use node::{Document, Item, Property, Statement, UfoNode};
pub use pretty::{IndentStyle, PrettyConfig, pretty_print, pretty_print_with_config};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use visitor::{NodeVisitor, walk_document, walk_node};
