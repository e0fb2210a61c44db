//! Integration tests for Value
//!
//! Tests accessors, translation markers, and script-syntax display.

use ufoscript_foundation::Value;

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn type_names() {
    assert_eq!(Value::Ident("a".into()).type_name(), "identifier");
    assert_eq!(Value::String("a".into()).type_name(), "string");
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Float(1.0).type_name(), "float");
    assert_eq!(Value::List(vec![]).type_name(), "list");
}

#[test]
fn text_accessors() {
    let ident = Value::Ident("true".into());
    let string = Value::String("_Save".into());
    assert_eq!(ident.as_text(), Some("true"));
    assert_eq!(string.as_text(), Some("_Save"));
    assert_eq!(ident.as_str(), None);
    assert_eq!(string.as_ident(), None);
}

#[test]
fn numeric_accessors() {
    assert_eq!(Value::Int(7).as_int(), Some(7));
    assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
    assert_eq!(Value::Int(7).as_float(), None);
}

#[test]
fn conversions() {
    assert_eq!(Value::from("x"), Value::String("x".into()));
    assert_eq!(Value::from(3_i64), Value::Int(3));
    assert_eq!(Value::from(vec![Value::Int(1)]).as_list(), Some(&[Value::Int(1)][..]));
}

// =============================================================================
// Translation markers
// =============================================================================

#[test]
fn translatable_strings() {
    let value = Value::String("_Options".into());
    assert!(value.is_translatable());
    assert_eq!(value.translation_key(), Some("Options"));
}

#[test]
fn plain_strings_and_idents_are_not_translatable() {
    assert!(!Value::String("Options".into()).is_translatable());
    assert!(!Value::String("_".into()).is_translatable());
    assert!(!Value::Ident("_Options".into()).is_translatable());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_in_script_syntax() {
    assert_eq!(Value::Ident("*cvar:x".into()).to_string(), "*cvar:x");
    assert_eq!(Value::String("a \"b\"".into()).to_string(), r#""a \"b\"""#);
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::List(vec![]).to_string(), "{ }");
    assert_eq!(
        Value::List(vec![Value::Ident("a".into()), Value::List(vec![Value::Int(1)])]).to_string(),
        "{ a { 1 } }"
    );
}
