//! Error types for extended JSON deserialization.
//!
//! Every grammar violation surfaces as a [`SyntaxError`] carrying the offending
//! character (or the end-of-input marker) and the cursor position at the point
//! of failure. [`DeserializeError`] wraps it together with the one failure the
//! resolver can report when strict reference checking is requested.

use thiserror::Error;

use crate::SourcePosition;

/// The kind of syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// No production starts with the character found
    #[error("unexpected token")]
    UnexpectedToken,
    /// Input ended where a value or delimiter was required
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// End of input inside a string literal
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Backslash followed by a character that is not an escape
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Non-hex character inside a `\uXXXX` escape
    #[error("invalid hex digit in unicode escape")]
    InvalidHexDigit,
    /// Number literal missing digits after `.`, `e` or `-`
    #[error("malformed number")]
    MalformedNumber,
    /// Regular expression literal with an empty pattern (`//`)
    #[error("empty regular expression")]
    EmptyRegex,
    /// End of input inside a regular expression literal
    #[error("unterminated regular expression")]
    UnterminatedRegex,
    /// Arrays and objects nested deeper than the parser allows
    #[error("nesting too deep")]
    NestingTooDeep,
    /// Bareword that is neither a keyword nor followed by `{`
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),
    /// `$` not followed by any digit
    #[error("reference is missing its index")]
    MissingReferenceIndex,
    /// Content left over after the last statement
    #[error("unexpected trailing input")]
    TrailingInput,
}

/// A grammar violation at a known position.
///
/// `found` is `None` when the parser ran out of input.
///
/// # Examples
///
/// ```
/// use core_types::{SyntaxError, SyntaxErrorKind, SourcePosition};
///
/// let error = SyntaxError::new(
///     SyntaxErrorKind::UnexpectedToken,
///     Some('}'),
///     SourcePosition::new(1, 6, 5),
/// );
///
/// assert_eq!(
///     error.to_string(),
///     "SyntaxError: unexpected token '}' at 5 (line 1, column 6)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SyntaxError: {kind} {} at {position}", describe_found(.found))]
pub struct SyntaxError {
    /// What went wrong
    pub kind: SyntaxErrorKind,
    /// The character at the failure point, `None` at end of input
    pub found: Option<char>,
    /// Where the failure was detected
    pub position: SourcePosition,
}

impl SyntaxError {
    /// Creates a new syntax error.
    pub fn new(kind: SyntaxErrorKind, found: Option<char>, position: SourcePosition) -> Self {
        Self {
            kind,
            found,
            position,
        }
    }

    /// Whether the error was raised at end of input.
    pub fn is_at_end(&self) -> bool {
        self.found.is_none()
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "<end of input>".to_string(),
    }
}

/// Errors returned by the deserialize entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeserializeError {
    /// The input does not match the grammar
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A `$n` reference points past the last statement (strict mode only)
    #[error("ReferenceError: ${index} does not name a statement (document has {statements})")]
    UnresolvedReference {
        /// The referenced index
        index: usize,
        /// Number of statements in the document
        statements: usize,
    },
}

/// Result of the grammar phase.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Result of a complete deserialize call.
pub type DeserializeResult<T> = Result<T, DeserializeError>;
