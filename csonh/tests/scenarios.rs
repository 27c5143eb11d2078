//! Black-box scenarios exercising the public `csonh::parse` entry point
//! end to end, covering the lexer and parser together.

use csonh::{parse, CsonhError, ParseError};

#[test]
fn flat_object_with_single_quoted_string() {
    let value = parse("key: 'value'").unwrap();
    assert_eq!(value["key"].as_str(), Some("value"));
}

#[test]
fn nested_indented_object() {
    let value = parse("server:\n  host: 'localhost'\n  port: 8080\n").unwrap();
    assert_eq!(value["server"]["host"].as_str(), Some("localhost"));
    assert_eq!(value["server"]["port"].as_i64(), Some(8080));
}

#[test]
fn bracketed_array_with_commas_succeeds() {
    let value = parse("[1, 2, 3]").unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array[0].as_i64(), Some(1));
    assert_eq!(array[2].as_i64(), Some(3));
}

#[test]
fn bracketed_array_missing_separator_fails() {
    let err = parse("[1 2]").unwrap_err();
    assert!(matches!(
        err,
        CsonhError::Parse(ParseError::ExpectedSeparator { .. })
    ));
}

#[test]
fn bareword_keyword_coercion_and_quoted_bareword_stays_string() {
    let value = parse("a: yes\nb: 'NO'\n").unwrap();
    assert_eq!(value["a"].as_bool(), Some(true));
    assert_eq!(value["b"].as_str(), Some("NO"));
}

#[test]
fn triple_quoted_string_is_dedented() {
    let value = parse("msg: '''\n  Line 1\n  Line 2\n  '''\n").unwrap();
    assert_eq!(value["msg"].as_str(), Some("Line 1\nLine 2"));
}

#[test]
fn trailing_content_after_a_scalar_value_fails() {
    let err = parse("a: 1 + 2").unwrap_err();
    assert!(err.to_string().len() > 0);
    assert!(matches!(
        err,
        CsonhError::Lex(_) | CsonhError::Parse(ParseError::TrailingJunk { .. })
    ));
}

#[test]
fn string_interpolation_marker_is_rejected() {
    let err = parse("a: \"val #{x}\"").unwrap_err();
    assert!(matches!(err, CsonhError::Lex(_)));
}

#[test]
fn trailing_junk_after_root_entry_fails() {
    let err = parse("key: 1\ngarbage").unwrap_err();
    match err {
        CsonhError::Parse(ParseError::TrailingJunk { position }) => {
            assert_eq!(position.line, 2);
        }
        other => panic!("expected TrailingJunk, got {other:?}"),
    }
}

#[test]
fn whitespace_and_comments_only_yield_empty_object() {
    let value = parse("# just a comment\n\n   \n").unwrap();
    assert_eq!(value.as_object().unwrap().len(), 0);
}

#[test]
fn integer_bases_agree_numerically() {
    let decimal = parse("a: 255").unwrap();
    let hex = parse("a: 0xFF").unwrap();
    let bin = parse("a: 0b11111111").unwrap();
    let oct = parse("a: 0o377").unwrap();
    assert_eq!(decimal["a"].as_i64(), hex["a"].as_i64());
    assert_eq!(hex["a"].as_i64(), bin["a"].as_i64());
    assert_eq!(bin["a"].as_i64(), oct["a"].as_i64());
}

#[test]
fn leading_zero_integer_is_rejected() {
    let err = parse("a: 0123").unwrap_err();
    assert!(matches!(err, CsonhError::Lex(_)));
}

#[test]
fn duplicate_keys_keep_last_value_and_first_order_position() {
    let value = parse("a: 1\nb: 2\na: 3\n").unwrap();
    let object = value.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(value["a"].as_i64(), Some(3));
}
