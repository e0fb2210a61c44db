//! Node tree for parsed UFO script files.
//!
//! The parser produces a [`Document`] whose items are properties and typed
//! [`UfoNode`]s. Bodies keep source order so the tree can be written back out
//! by [`crate::pretty`].

use ufoscript_foundation::Value;

use crate::span::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A `key value` pair inside a block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Property {
    /// Property name as written in source.
    pub key: String,
    /// Property value.
    pub value: Value,
    /// Span from key to the end of the value.
    pub span: Span,
    /// True if the key was written as a quoted string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quoted_key: bool,
}

impl Property {
    /// Creates a new property.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Value, span: Span) -> Self {
        Self {
            key: key.into(),
            value,
            span,
            quoted_key: false,
        }
    }

    /// Builder method to mark the key as quoted in source.
    #[must_use]
    pub fn with_quoted_key(mut self, quoted: bool) -> Self {
        self.quoted_key = quoted;
        self
    }
}

/// An action statement inside an event handler or function body.
///
/// Words are kept verbatim: `cmd "echo hi";` becomes two words. A nested
/// `{ ... }` group is stored as a [`Value::List`] whose elements are the
/// inner statements, each itself a list of words.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Statement {
    /// Words of the statement, without the terminating `;`.
    pub words: Vec<Value>,
    /// Span of the statement.
    pub span: Span,
}

impl Statement {
    /// Creates a new statement.
    #[must_use]
    pub fn new(words: Vec<Value>, span: Span) -> Self {
        Self { words, span }
    }

    /// Returns the first word, which names the action (`cmd`, `call`, `if`, ...).
    #[must_use]
    pub fn head(&self) -> Option<&str> {
        self.words.first().and_then(Value::as_text)
    }

    /// Returns true if the statement ends with a nested block.
    #[must_use]
    pub fn ends_with_block(&self) -> bool {
        self.words.last().is_some_and(Value::is_list)
    }
}

/// One entry of a block body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Item {
    /// A property such as `size "120 24"`
    Property(Property),
    /// A nested block such as `button ok { ... }`
    Node(UfoNode),
    /// An action statement such as `cmd "echo hi";`
    Statement(Statement),
}

impl Item {
    /// Returns the source span of this item.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Property(p) => p.span,
            Self::Node(n) => n.span,
            Self::Statement(s) => s.span,
        }
    }

    /// Returns the node, or None if this item is a property.
    #[must_use]
    pub const fn as_node(&self) -> Option<&UfoNode> {
        match self {
            Self::Node(n) => Some(n),
            Self::Property(_) | Self::Statement(_) => None,
        }
    }

    /// Returns the statement, or None if this item is not a statement.
    #[must_use]
    pub const fn as_statement(&self) -> Option<&Statement> {
        match self {
            Self::Statement(s) => Some(s),
            Self::Property(_) | Self::Node(_) => None,
        }
    }

    /// Returns the property, or None if this item is not a property.
    #[must_use]
    pub const fn as_property(&self) -> Option<&Property> {
        match self {
            Self::Property(p) => Some(p),
            Self::Node(_) | Self::Statement(_) => None,
        }
    }
}

/// A typed block from a script file, e.g. `window main { ... }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UfoNode {
    /// Canonical identifier of the sub-parser that produced this node.
    pub node_type: String,
    /// Optional name following the type keyword.
    pub name: Option<String>,
    /// Optional parent named by `extends`.
    pub extends: Option<String>,
    /// Properties and child nodes in source order.
    pub body: Vec<Item>,
    /// Span from the type keyword to the closing brace.
    pub span: Span,
}

impl UfoNode {
    /// Creates an empty node of the given type.
    #[must_use]
    pub fn new(node_type: impl Into<String>, span: Span) -> Self {
        Self {
            node_type: node_type.into(),
            name: None,
            extends: None,
            body: Vec::new(),
            span,
        }
    }

    /// Sets the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the `extends` parent.
    #[must_use]
    pub fn with_extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Appends a property.
    pub fn push_property(&mut self, property: Property) {
        self.body.push(Item::Property(property));
    }

    /// Appends a child node.
    pub fn push_child(&mut self, child: UfoNode) {
        self.body.push(Item::Node(child));
    }

    /// Iterates over the child nodes.
    pub fn children(&self) -> impl Iterator<Item = &UfoNode> {
        self.body.iter().filter_map(Item::as_node)
    }

    /// Iterates over the properties.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.body.iter().filter_map(Item::as_property)
    }

    /// Iterates over the action statements.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.body.iter().filter_map(Item::as_statement)
    }

    /// Returns the number of child nodes.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// Returns the first property with the given key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties().find(|p| p.key == key)
    }

    /// Returns the first child of the given type.
    #[must_use]
    pub fn child(&self, node_type: &str) -> Option<&UfoNode> {
        self.children().find(|n| n.node_type == node_type)
    }

    /// Returns the first child with the given name.
    #[must_use]
    pub fn child_named(&self, name: &str) -> Option<&UfoNode> {
        self.children().find(|n| n.name.as_deref() == Some(name))
    }
}

/// A parsed script file.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    /// Top-level items in source order.
    pub items: Vec<Item>,
    /// Span of the whole source.
    pub span: Span,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            items: Vec::new(),
            span,
        }
    }

    /// Iterates over the top-level nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &UfoNode> {
        self.items.iter().filter_map(Item::as_node)
    }

    /// Iterates over top-level properties (unrecognised top-level words).
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.items.iter().filter_map(Item::as_property)
    }

    /// Returns the first top-level node with the given type and name.
    #[must_use]
    pub fn find(&self, node_type: &str, name: &str) -> Option<&UfoNode> {
        self.nodes()
            .find(|n| n.node_type == node_type && n.name.as_deref() == Some(name))
    }

    /// Returns true if the document has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
