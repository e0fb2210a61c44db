//! Pretty-printer for node trees.
//!
//! Converts a [`Document`] back into UFO script source. Formatting is
//! normalized (one item per line, braces on their own line by default), and
//! parsing the output again yields the same tree shape.
//!
//! # Example
//!
//! ```
//! use ufoscript_foundation::Value;
//! use ufoscript_language::{Document, Item, Property, Span, UfoNode, pretty_print};
//!
//! let mut range = UfoNode::new("range", Span::default()).with_name("foo");
//! range.push_property(Property::new("min", Value::Int(1), Span::default()));
//! let mut doc = Document::default();
//! doc.items.push(Item::Node(range));
//!
//! assert_eq!(pretty_print(&doc), "range foo\n{\n\tmin 1\n}\n");
//! ```

use ufoscript_foundation::Value;
use ufoscript_foundation::value::write_quoted;

use crate::lexer::Lexer;
use crate::node::{Document, Item, Property, UfoNode};
use crate::token::TokenKind;

/// Indentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// One tab per level (the style of the game's own script files).
    Tabs,
    /// The given number of spaces per level.
    Spaces(usize),
}

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Indentation unit.
    pub indent: IndentStyle,
    /// Put the opening brace of a block on its own line.
    pub brace_on_new_line: bool,
    /// Separate top-level blocks with an empty line.
    pub blank_line_between_blocks: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::Tabs,
            brace_on_new_line: true,
            blank_line_between_blocks: true,
        }
    }
}

impl PrettyConfig {
    /// A compact style: spaces, braces on the header line.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            indent: IndentStyle::Spaces(2),
            brace_on_new_line: false,
            blank_line_between_blocks: false,
        }
    }

    /// Builder method to set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Builder method to choose the brace placement.
    #[must_use]
    pub fn with_brace_on_new_line(mut self, enabled: bool) -> Self {
        self.brace_on_new_line = enabled;
        self
    }
}

/// Pretty-print a document with the default configuration.
#[must_use]
pub fn pretty_print(document: &Document) -> String {
    pretty_print_with_config(document, &PrettyConfig::default())
}

/// Pretty-print a document with a custom configuration.
#[must_use]
pub fn pretty_print_with_config(document: &Document, config: &PrettyConfig) -> String {
    let mut printer = PrettyPrinter::new(config);
    printer.print_items(&document.items, 0);
    printer.output
}

/// Pretty-print a single node with the default configuration.
#[must_use]
pub fn pretty_print_node(node: &UfoNode) -> String {
    let config = PrettyConfig::default();
    let mut printer = PrettyPrinter::new(&config);
    printer.print_node(node, 0);
    printer.output
}

/// Returns true if `word` lexes back as exactly this identifier.
#[must_use]
pub fn is_bare_word(word: &str) -> bool {
    let tokens = Lexer::tokenize_all(word);
    tokens.len() == 2 && matches!(&tokens[0].kind, TokenKind::Ident(w) if w == word)
}

/// Pretty-printer state.
struct PrettyPrinter<'a> {
    config: &'a PrettyConfig,
    output: String,
}

impl<'a> PrettyPrinter<'a> {
    fn new(config: &'a PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            match self.config.indent {
                IndentStyle::Tabs => self.output.push('\t'),
                IndentStyle::Spaces(n) => {
                    self.output.extend(std::iter::repeat_n(' ', n));
                }
            }
        }
    }

    fn print_items(&mut self, items: &[Item], level: usize) {
        for (i, item) in items.iter().enumerate() {
            if level == 0 && i > 0 && self.config.blank_line_between_blocks {
                let after_block = matches!(items[i - 1], Item::Node(_));
                if after_block || matches!(item, Item::Node(_)) {
                    self.output.push('\n');
                }
            }
            match item {
                Item::Property(p) => self.print_property(p, level),
                Item::Node(n) => self.print_node(n, level),
                Item::Statement(s) => self.print_statement(&s.words, level),
            }
        }
    }

    fn print_node(&mut self, node: &UfoNode, level: usize) {
        self.indent(level);
        self.output.push_str(&node.node_type);
        if let Some(name) = &node.name {
            self.output.push(' ');
            self.print_word(name);
        }
        if let Some(parent) = &node.extends {
            self.output.push_str(" extends ");
            self.print_word(parent);
        }
        self.open_block(level);
        self.print_items(&node.body, level + 1);
        self.close_block(level);
    }

    fn open_block(&mut self, level: usize) {
        if self.config.brace_on_new_line {
            self.output.push('\n');
            self.indent(level);
            self.output.push_str("{\n");
        } else {
            self.output.push_str(" {\n");
        }
    }

    fn close_block(&mut self, level: usize) {
        self.indent(level);
        self.output.push_str("}\n");
    }

    fn print_property(&mut self, property: &Property, level: usize) {
        self.indent(level);
        if property.quoted_key {
            // Writing into a String cannot fail
            let _ = write_quoted(&mut self.output, &property.key);
        } else {
            self.print_word(&property.key);
        }
        self.output.push(' ');
        self.output.push_str(&property.value.to_string());
        self.output.push('\n');
    }

    fn print_statement(&mut self, words: &[Value], level: usize) {
        self.indent(level);
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            match word {
                Value::List(inner) => {
                    self.output.push_str("{\n");
                    for stmt in inner {
                        match stmt {
                            Value::List(stmt_words) => self.print_statement(stmt_words, level + 1),
                            other => self.print_statement(std::slice::from_ref(other), level + 1),
                        }
                    }
                    self.indent(level);
                    self.output.push('}');
                }
                other => self.output.push_str(&other.to_string()),
            }
        }
        if !words.last().is_some_and(Value::is_list) {
            self.output.push(';');
        }
        self.output.push('\n');
    }

    fn print_word(&mut self, word: &str) {
        if is_bare_word(word) {
            self.output.push_str(word);
        } else {
            // Writing into a String cannot fail
            let _ = write_quoted(&mut self.output, word);
        }
    }
}
