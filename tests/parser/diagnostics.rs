//! Integration tests for diagnostics and recovery

use ufoscript_parser::{DiagnosticKind, ParserConfig, ScriptParser, Severity, parse_source};

#[test]
fn unterminated_block_is_malformed() {
    let outcome = parse_source("window main\n{\n\tbutton ok\n\t{\n").unwrap();
    let malformed = outcome.diagnostics.of_kind(DiagnosticKind::MalformedBlock);
    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].severity, Severity::Error);
    assert_eq!((malformed[0].span.line, malformed[0].span.column), (4, 2));
}

#[test]
fn parse_stops_after_malformed_block() {
    let outcome = parse_source("range a { min { 1 \n").unwrap();
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.document.nodes().count(), 1);
}

#[test]
fn recovers_from_local_problems() {
    let outcome = parse_source("range a { min }\n)\nrange b { max 2 }\n").unwrap();
    assert_eq!(outcome.diagnostics.warning_count(), 1);
    assert_eq!(outcome.diagnostics.error_count(), 1);
    assert_eq!(outcome.document.nodes().count(), 2);
}

#[test]
fn render_includes_source_line() {
    let source = "range a {\n\tmin\n}\n";
    let outcome = parse_source(source).unwrap();
    let text = outcome.diagnostics.render(source, Some("ranges.ufo"));
    assert!(text.starts_with("ranges.ufo:2:2: warning[missing-value]: property 'min' has no value\n"));
    assert!(text.contains("\tmin\n"));
}

#[test]
fn depth_limit_is_configurable() {
    let source = "tech t { a { b { c { } } } }";
    assert!(parse_source(source).unwrap().diagnostics.is_empty());

    let parser = ScriptParser::new()
        .unwrap()
        .with_config(ParserConfig::default().with_max_depth(3));
    let outcome = parser.parse(source);
    assert_eq!(outcome.diagnostics.of_kind(DiagnosticKind::DepthLimit).len(), 1);
}

#[test]
fn into_result() {
    assert!(parse_source("range a { }").unwrap().into_result().is_ok());
    let err = parse_source("}").unwrap().into_result().unwrap_err();
    assert_eq!(err.diagnostics.error_count(), 1);
}
