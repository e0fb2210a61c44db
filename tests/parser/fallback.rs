//! Integration tests for best-effort parsing of unresolved identifiers

use ufoscript_foundation::Value;
use ufoscript_parser::{ParserConfig, ScriptParser, SubParserRegistry, parse_source};

#[test]
fn unknown_top_level_word_is_a_property() {
    let outcome = parse_source("rangex foo").unwrap();
    assert!(outcome.diagnostics.is_empty());
    let property = outcome.document.properties().next().unwrap();
    assert_eq!(property.key, "rangex");
    assert_eq!(property.value, Value::Ident("foo".into()));
}

#[test]
fn empty_scope_never_fails() {
    let parser = ScriptParser::with_registry(SubParserRegistry::new("document"));
    let outcome = parser.parse(
        "window main\n{\n\ttextentry name { onabort { cmd \"x\"; } }\n}\nentity e { range r { min 1 } }\n",
    );
    assert!(!outcome.has_errors(), "{:?}", outcome.diagnostics);
    assert_eq!(outcome.document.nodes().count(), 0);
    let keys: Vec<_> = outcome.document.properties().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["window", "entity"]);
}

#[test]
fn node_keyword_in_wrong_scope_is_a_property() {
    let outcome = parse_source("tech rs_x { button ok { } }").unwrap();
    let tech = outcome.document.nodes().next().unwrap();
    assert_eq!(tech.child_count(), 0);
    assert!(tech.property("button").unwrap().value.is_list());
}

#[test]
fn component_instances_keep_their_body() {
    let outcome = parse_source("window main { cmpSlider volume { pos \"10 10\" } }").unwrap();
    assert!(outcome.diagnostics.is_empty());
    let window = outcome.document.nodes().next().unwrap();
    assert_eq!(
        window.property("cmpSlider").unwrap().value.to_string(),
        "{ volume { pos \"10 10\" } }"
    );
}

#[test]
fn strict_mode_notes_unresolved_blocks() {
    let parser = ScriptParser::new()
        .unwrap()
        .with_config(ParserConfig::strict());
    let outcome = parser.parse("window main { cmpSlider volume { } }");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(!outcome.has_errors());
    let message = &outcome.diagnostics.iter().next().unwrap().message;
    assert!(message.contains("cmpSlider"));
    assert!(message.contains("window"));
}

proptest::proptest! {
    #[test]
    fn range_keyword_in_any_case(flips in proptest::collection::vec(proptest::bool::ANY, 5)) {
        let keyword: String = "range"
            .chars()
            .zip(flips)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        let outcome = parse_source(&format!("{keyword} r {{ min 0 }}")).unwrap();
        proptest::prop_assert!(outcome.diagnostics.is_empty());
        let node = outcome.document.nodes().next().unwrap();
        proptest::prop_assert_eq!(node.node_type.as_str(), "range");
    }
}
