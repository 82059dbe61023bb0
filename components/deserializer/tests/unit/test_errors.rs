//! Syntax errors and their positions

use deserializer::{
    deserialize, DeserializeError, DeserializeOptions, SyntaxError, SyntaxErrorKind,
    MAX_NESTING_DEPTH,
};

fn syntax_error(source: &str) -> SyntaxError {
    match deserialize(source, &DeserializeOptions::new()) {
        Err(DeserializeError::Syntax(err)) => err,
        other => panic!("expected syntax error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_missing_value_points_at_brace() {
    let err = syntax_error(r#"{"a":}"#);
    assert_eq!(err.position.offset, 5);
    assert_eq!(err.found, Some('}'));
}

#[test]
fn test_lone_dot() {
    let err = syntax_error(".");
    assert_eq!(err.position.offset, 0);
}

#[test]
fn test_dot_without_fraction() {
    let err = syntax_error("1.");
    assert_eq!(err.kind, SyntaxErrorKind::MalformedNumber);
    assert!((1..=2).contains(&err.position.offset));
}

#[test]
fn test_exponent_without_digits() {
    assert_eq!(syntax_error("1e").kind, SyntaxErrorKind::MalformedNumber);
}

#[test]
fn test_unterminated_string_at_end() {
    let err = syntax_error(r#"["abc"#);
    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);
    assert!(err.is_at_end());
}

#[test]
fn test_invalid_escape() {
    let err = syntax_error(r#""\x41""#);
    assert_eq!(err.kind, SyntaxErrorKind::InvalidEscape);
    assert_eq!(err.position.offset, 2);
}

#[test]
fn test_invalid_hex_digit() {
    assert_eq!(syntax_error(r#""\u12z4""#).kind, SyntaxErrorKind::InvalidHexDigit);
}

#[test]
fn test_empty_regex() {
    assert_eq!(syntax_error("//").kind, SyntaxErrorKind::EmptyRegex);
}

#[test]
fn test_unterminated_regex() {
    assert_eq!(syntax_error("/abc").kind, SyntaxErrorKind::UnterminatedRegex);
}

#[test]
fn test_regex_pattern_is_not_validated() {
    let value = deserialize("[1, /(unclosed/]", &DeserializeOptions::new()).unwrap();
    assert_eq!(value.to_string(), "[1,/(unclosed/]");
}

#[test]
fn test_unknown_flag_is_trailing_input() {
    let err = syntax_error("/a/gx");
    assert_eq!(err.kind, SyntaxErrorKind::TrailingInput);
    assert_eq!(err.found, Some('x'));
}

#[test]
fn test_bare_dollar() {
    assert_eq!(syntax_error("[$]").kind, SyntaxErrorKind::MissingReferenceIndex);
}

#[test]
fn test_unclosed_array() {
    let err = syntax_error("[1, 2");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEnd);
    assert_eq!(err.position.offset, 5);
}

#[test]
fn test_missing_colon() {
    let err = syntax_error(r#"{"a" 1}"#);
    assert_eq!(err.found, Some('1'));
    assert_eq!(err.position.offset, 5);
}

#[test]
fn test_error_position_has_line_and_column() {
    let err = syntax_error("[\n  1,\n  ?]");
    assert_eq!(err.position.line, 3);
    assert_eq!(err.position.column, 3);
    assert_eq!(err.position.offset, 9);
}

#[test]
fn test_trailing_garbage() {
    let err = syntax_error("{} x");
    assert_eq!(err.kind, SyntaxErrorKind::TrailingInput);
    assert_eq!(err.position.offset, 3);
}

#[test]
fn test_deep_nesting_at_limit_resolves() {
    let depth = MAX_NESTING_DEPTH;
    let value = deserialize(
        &("[".repeat(depth) + &"]".repeat(depth)),
        &DeserializeOptions::new(),
    )
    .unwrap();
    let mut innermost = value;
    for _ in 1..depth {
        innermost = innermost.index(0).unwrap();
    }
    assert_eq!(innermost.to_string(), "[]");
}

#[test]
fn test_deep_nesting_is_a_syntax_error() {
    let err = syntax_error(&("[".repeat(500) + &"]".repeat(500)));
    assert_eq!(err.kind, SyntaxErrorKind::NestingTooDeep);
    assert_eq!(err.position.offset, MAX_NESTING_DEPTH);
}
