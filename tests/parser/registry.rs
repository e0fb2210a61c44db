//! Integration tests for factory registration and resolution

use ufoscript_foundation::{ErrorKind, Result};
use ufoscript_parser::subparsers::{entity, events, ui};
use ufoscript_parser::{
    MatchMode, ParserConfig, ParserContext, SubParser, SubParserFactory, SubParserRegistry,
    document_registry,
};

fn create_custom(_ctx: &ParserContext<'_>) -> Result<SubParser> {
    let mut parser = SubParser::block("custom");
    parser.register_sub_parser(entity::RANGE)?;
    Ok(parser)
}

const CUSTOM: SubParserFactory = SubParserFactory::new("custom", create_custom);

// =============================================================================
// Matching
// =============================================================================

#[test]
fn range_resolves_in_any_case() {
    let mut registry = SubParserRegistry::new("document");
    registry.register(entity::RANGE).unwrap();
    for token in ["range", "RANGE", "Range", "rAnGe"] {
        assert_eq!(registry.resolve(token).map(|f| f.id()), Some("range"), "{token}");
    }
}

#[test]
fn range_does_not_resolve_near_misses() {
    let mut registry = SubParserRegistry::new("document");
    registry.register(entity::RANGE).unwrap();
    for token in ["rangex", "rang", "ranges", " range", ""] {
        assert!(registry.resolve(token).is_none(), "{token:?}");
    }
}

#[test]
fn exact_factories_require_exact_case() {
    assert_eq!(ui::WINDOW.match_mode(), MatchMode::Exact);
    assert!(ui::WINDOW.matches("window"));
    assert!(!ui::WINDOW.matches("Window"));
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = SubParserRegistry::new("document");
    assert!(registry.resolve("window").is_none());
    assert!(registry.resolve("range").is_none());
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn duplicate_registration_fails_fast() {
    let mut registry = SubParserRegistry::new("window");
    registry.register(ui::BUTTON).unwrap();
    let err = registry.register(ui::BUTTON).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateRegistration { .. }));
    assert!(err.is_programming_error());
}

#[test]
fn duplicate_event_property_fails_fast() {
    let mut parser = SubParser::node("textentry");
    parser.register_event_property(events::ONABORT).unwrap();
    assert!(parser.register_event_property(events::ONABORT).is_err());
}

#[test]
fn custom_factories_plug_in() {
    let mut registry = document_registry().unwrap();
    registry.register(CUSTOM).unwrap();
    let ctx = ParserContext::new("", ParserConfig::default());
    let parser = registry.resolve("custom").unwrap().create(&ctx).unwrap();
    assert_eq!(parser.node_type(), "custom");
    assert!(parser.accepts("RANGE"));
}

#[test]
fn document_registry_has_no_conflicts() {
    let registry = document_registry().unwrap();
    assert!(registry.len() > 20);
    let ids: Vec<_> = registry.ids().collect();
    for (i, id) in ids.iter().enumerate() {
        assert!(!ids[i + 1..].contains(id), "{id} registered twice");
    }
}
