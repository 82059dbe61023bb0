//! Unit tests for SyntaxError and DeserializeError

use core_types::{DeserializeError, SourcePosition, SyntaxError, SyntaxErrorKind};

fn error_at(kind: SyntaxErrorKind, found: Option<char>, offset: usize) -> SyntaxError {
    SyntaxError::new(kind, found, SourcePosition::new(1, offset as u32 + 1, offset))
}

#[test]
fn test_syntax_error_keeps_offset() {
    let err = error_at(SyntaxErrorKind::UnexpectedToken, Some('}'), 5);
    assert_eq!(err.position.offset, 5);
    assert_eq!(err.found, Some('}'));
    assert!(!err.is_at_end());
}

#[test]
fn test_syntax_error_message_names_kind() {
    let err = error_at(SyntaxErrorKind::MalformedNumber, Some('x'), 2);
    let message = err.to_string();
    assert!(message.starts_with("SyntaxError: malformed number"));
    assert!(message.contains("'x'"));
}

#[test]
fn test_nesting_kind_message() {
    let err = SyntaxError::new(
        SyntaxErrorKind::NestingTooDeep,
        Some('['),
        SourcePosition::new(1, 130, 129),
    );
    assert_eq!(
        err.to_string(),
        "SyntaxError: nesting too deep '[' at 129 (line 1, column 130)"
    );
}

#[test]
fn test_unknown_identifier_kind_names_word() {
    let kind = SyntaxErrorKind::UnknownIdentifier("nope".to_string());
    assert!(kind.to_string().contains("`nope`"));
}

#[test]
fn test_deserialize_error_is_transparent_over_syntax() {
    let syntax = error_at(SyntaxErrorKind::EmptyRegex, Some('/'), 1);
    let err = DeserializeError::from(syntax.clone());
    assert_eq!(err.to_string(), syntax.to_string());
}

#[test]
fn test_deserialize_error_implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DeserializeError::UnresolvedReference {
        index: 9,
        statements: 1,
    });
    assert!(err.to_string().starts_with("ReferenceError"));
}
