//! Read-only traversal of node trees.
//!
//! # Example
//!
//! ```
//! use ufoscript_language::{Document, Item, Span, UfoNode};
//! use ufoscript_language::visitor::{NodeVisitor, walk_document};
//!
//! struct TypeCounter(usize);
//!
//! impl NodeVisitor for TypeCounter {
//!     fn enter_node(&mut self, _node: &UfoNode, _depth: usize) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut doc = Document::default();
//! doc.items.push(Item::Node(UfoNode::new("range", Span::default())));
//! let mut counter = TypeCounter(0);
//! walk_document(&mut counter, &doc);
//! assert_eq!(counter.0, 1);
//! ```

use crate::node::{Document, Item, Property, Statement, UfoNode};

/// Trait for read-only node tree visitors.
///
/// `depth` is 0 for top-level items. The default implementations do nothing.
#[allow(unused_variables)]
pub trait NodeVisitor {
    /// Called before a node's body is visited.
    fn enter_node(&mut self, node: &UfoNode, depth: usize) {}

    /// Called after a node's body is visited.
    fn leave_node(&mut self, node: &UfoNode, depth: usize) {}

    /// Visit a property.
    fn visit_property(&mut self, property: &Property, depth: usize) {}

    /// Visit an action statement.
    fn visit_statement(&mut self, statement: &Statement, depth: usize) {}
}

/// Walks every item of a document depth-first.
pub fn walk_document<V: NodeVisitor>(visitor: &mut V, document: &Document) {
    walk_items(visitor, &document.items, 0);
}

/// Walks a node and its body depth-first, starting at `depth`.
pub fn walk_node<V: NodeVisitor>(visitor: &mut V, node: &UfoNode, depth: usize) {
    visitor.enter_node(node, depth);
    walk_items(visitor, &node.body, depth + 1);
    visitor.leave_node(node, depth);
}

fn walk_items<V: NodeVisitor>(visitor: &mut V, items: &[Item], depth: usize) {
    for item in items {
        match item {
            Item::Property(property) => visitor.visit_property(property, depth),
            Item::Node(node) => walk_node(visitor, node, depth),
            Item::Statement(statement) => visitor.visit_statement(statement, depth),
        }
    }
}

/// Collects every node of a given type, in document order.
#[must_use]
pub fn find_all<'a>(document: &'a Document, node_type: &str) -> Vec<&'a UfoNode> {
    fn collect<'a>(items: &'a [Item], node_type: &str, out: &mut Vec<&'a UfoNode>) {
        for node in items.iter().filter_map(Item::as_node) {
            if node.node_type == node_type {
                out.push(node);
            }
            collect(&node.body, node_type, out);
        }
    }

    let mut out = Vec::new();
    collect(&document.items, node_type, &mut out);
    out
}
