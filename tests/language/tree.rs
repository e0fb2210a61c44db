//! Integration tests for the node tree and visitor
//!
//! Tests node accessors, document lookup, and traversal order.

use ufoscript_foundation::Value;
use ufoscript_language::visitor::find_all;
use ufoscript_language::{
    Document, Item, NodeVisitor, Property, Span, Statement, UfoNode, walk_document,
};

fn sample() -> Document {
    let mut entry = UfoNode::new("textentry", Span::default()).with_name("name");
    entry.push_property(Property::new("size", Value::String("200 20".into()), Span::default()));
    let mut abort = UfoNode::new("onabort", Span::default());
    abort.body.push(Item::Statement(Statement::new(
        vec![Value::Ident("cmd".into()), Value::String("echo".into())],
        Span::default(),
    )));
    entry.push_child(abort);

    let mut window = UfoNode::new("window", Span::default()).with_name("main");
    window.push_child(entry);
    window.push_child(UfoNode::new("button", Span::default()).with_name("ok"));

    let mut document = Document::default();
    document.items.push(Item::Node(window));
    document.items.push(Item::Property(Property::new(
        "version",
        Value::Int(2),
        Span::default(),
    )));
    document
}

#[test]
fn node_accessors() {
    let document = sample();
    let window = document.find("window", "main").unwrap();
    assert_eq!(window.child_count(), 2);
    assert_eq!(window.child_named("ok").map(|n| n.node_type.as_str()), Some("button"));

    let entry = window.child("textentry").unwrap();
    assert_eq!(
        entry.property("size").map(|p| &p.value),
        Some(&Value::String("200 20".into()))
    );
    assert_eq!(entry.properties().count(), 1);
    let abort = entry.child("onabort").unwrap();
    assert_eq!(abort.statements().next().and_then(Statement::head), Some("cmd"));
}

#[test]
fn document_accessors() {
    let document = sample();
    assert!(!document.is_empty());
    assert_eq!(document.nodes().count(), 1);
    assert_eq!(document.properties().count(), 1);
    assert!(document.find("window", "other").is_none());
    assert!(Document::default().is_empty());
}

#[test]
fn find_all_descends() {
    let document = sample();
    assert_eq!(find_all(&document, "onabort").len(), 1);
    assert_eq!(find_all(&document, "button").len(), 1);
    assert!(find_all(&document, "panel").is_empty());
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl NodeVisitor for Recorder {
    fn enter_node(&mut self, node: &UfoNode, depth: usize) {
        self.events.push(format!("enter {} {depth}", node.node_type));
    }

    fn leave_node(&mut self, node: &UfoNode, _depth: usize) {
        self.events.push(format!("leave {}", node.node_type));
    }

    fn visit_property(&mut self, property: &Property, depth: usize) {
        self.events.push(format!("property {} {depth}", property.key));
    }

    fn visit_statement(&mut self, statement: &Statement, depth: usize) {
        self.events
            .push(format!("statement {} {depth}", statement.head().unwrap_or("")));
    }
}

#[test]
fn visitor_order() {
    let mut recorder = Recorder::default();
    walk_document(&mut recorder, &sample());
    assert_eq!(
        recorder.events,
        vec![
            "enter window 0",
            "enter textentry 1",
            "property size 2",
            "enter onabort 2",
            "statement cmd 3",
            "leave onabort",
            "leave textentry",
            "enter button 1",
            "leave button",
            "leave window",
            "property version 0",
        ]
    );
}
