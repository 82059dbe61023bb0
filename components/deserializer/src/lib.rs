//! Extended JSON Deserializer Component
//!
//! Parses a superset of JSON that can express `NaN`, the infinities,
//! `undefined`, big integers, regular expression literals, class-tagged
//! objects and `$n` back-references between `;`-separated statements.
//!
//! # Overview
//!
//! - [`Scanner`] - Cursor over the input, source of error positions
//! - [`Parser`] - Recursive descent parser producing [`ParsedValue`] trees
//! - [`ClassRegistry`] - Known class tags and their factories
//! - [`Resolver`] - Replaces `$n` placeholders, yielding a [`Value`] graph
//! - [`deserialize`] / [`deserialize_all`] - Both phases in one call
//!
//! # Example
//!
//! ```
//! use deserializer::{deserialize, DeserializeOptions};
//!
//! let value = deserialize(r#"{"self": $0, "big": 10n}"#, &DeserializeOptions::new()).unwrap();
//! assert!(value.get("self").unwrap().same(&value));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classes;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod scanner;

pub use classes::{ClassFactory, ClassRegistry};
pub use core_types::{
    DeserializeError, DeserializeResult, ParseResult, ParsedValue, Properties, SyntaxError,
    SyntaxErrorKind, Value,
};
pub use options::{DeserializeOptions, ReferencePolicy};
pub use parser::{Parser, MAX_NESTING_DEPTH};
pub use resolver::Resolver;
pub use scanner::Scanner;

/// Parse `source` without resolving references.
///
/// Tags not present in `classes` are downgraded to plain objects.
pub fn parse_document(source: &str, classes: &ClassRegistry) -> ParseResult<Vec<ParsedValue>> {
    Parser::new(source, classes).parse_document()
}

/// Deserialize every statement of `source`, in order.
pub fn deserialize_all(source: &str, options: &DeserializeOptions) -> DeserializeResult<Vec<Value>> {
    let table = parse_document(source, &options.classes)?;
    Resolver::new(options).resolve(table)
}

/// Deserialize `source` and return its first statement.
///
/// Later statements only matter as targets of `$n` references.
pub fn deserialize(source: &str, options: &DeserializeOptions) -> DeserializeResult<Value> {
    let values = deserialize_all(source, options)?;
    Ok(values.into_iter().next().unwrap_or(Value::Undefined))
}
