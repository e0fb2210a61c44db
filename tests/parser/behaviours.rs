//! Integration tests for node behaviours and event properties

use ufoscript_parser::behaviour::{BEHAVIOURS, events_for, lineage};
use ufoscript_parser::subparsers::ui;
use ufoscript_parser::{ParserConfig, ParserContext, parse_source};

#[test]
fn textentry_pre_registers_onabort() {
    let ctx = ParserContext::new("", ParserConfig::default());
    let parser = ui::TEXTENTRY.create(&ctx).unwrap();
    assert!(parser.accepts("onabort"));
}

#[test]
fn only_textentry_accepts_onabort() {
    let ctx = ParserContext::new("", ParserConfig::default());
    for factory in ui::NODES {
        let parser = factory.create(&ctx).unwrap();
        assert_eq!(
            parser.accepts("onabort"),
            factory.id() == "textentry",
            "{}",
            factory.id()
        );
    }
}

#[test]
fn every_node_accepts_mouse_events() {
    let ctx = ParserContext::new("", ParserConfig::default());
    for factory in ui::NODES {
        let parser = factory.create(&ctx).unwrap();
        assert!(parser.accepts("onclick"), "{}", factory.id());
        assert!(parser.accepts("onMouseEnter"), "{}", factory.id());
    }
}

#[test]
fn abstract_behaviours_form_chains() {
    let chain: Vec<_> = lineage("selectbox").iter().map(|b| b.name).collect();
    assert_eq!(chain, vec!["selectbox", "abstractoption", "abstractnode"]);
    assert!(events_for("vscrollbar").contains(&"onviewchange"));
    assert!(lineage("abstractnode")[0].extends.is_none());
}

#[test]
fn every_concrete_behaviour_reaches_abstractnode() {
    for behaviour in BEHAVIOURS {
        let chain = lineage(behaviour.name);
        assert_eq!(chain.last().map(|b| b.name), Some("abstractnode"), "{}", behaviour.name);
    }
}

#[test]
fn wheel_events_parse_on_option_lists() {
    let outcome = parse_source(
        "window w {\n\toptionlist l {\n\t\tonWheelUp { cmd \"up\"; }\n\t\tonWheelDown { cmd \"down\"; }\n\t\tonViewChange { cmd \"view\"; }\n\t}\n}",
    )
    .unwrap();
    assert!(outcome.diagnostics.is_empty());
    let list = outcome.document.nodes().next().and_then(|w| w.child("optionlist")).unwrap();
    let types: Vec<_> = list.children().map(|n| n.node_type.as_str()).collect();
    assert_eq!(types, vec!["onwheelup", "onwheeldown", "onviewchange"]);
}

#[test]
fn standalone_textentry_resolves_its_events() {
    let outcome = parse_source("textentry { onabort { cmd \"x\"; } }").unwrap();
    assert!(outcome.diagnostics.is_empty());
    let nodes: Vec<_> = outcome.document.nodes().collect();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].node_type, "textentry");
    assert!(nodes[0].name.is_none());
    let handler = nodes[0].child("onabort").unwrap();
    assert_eq!(handler.statements().next().and_then(|s| s.head()), Some("cmd"));
}
