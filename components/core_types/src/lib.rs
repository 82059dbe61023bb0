//! Core value types and error handling for extended JSON documents.
//!
//! This crate provides the foundational types shared by the deserializer and
//! its tooling, including both value representations, error types, and source
//! location tracking.
//!
//! # Overview
//!
//! - [`ParsedValue`] - Tree produced by the grammar, with `$n` placeholders
//! - [`Value`] - Resolved object graph (shared, possibly cyclic)
//! - [`RegExpValue`] - Compiled regular expression literal
//! - [`SyntaxError`] - Grammar violation with its position
//! - [`DeserializeError`] - Everything a deserialize call can fail with
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use core_types::{Value, SyntaxError, SyntaxErrorKind, SourcePosition};
//!
//! let num = Value::Number(42.0);
//! assert_eq!(num.type_of(), "number");
//!
//! let error = SyntaxError::new(
//!     SyntaxErrorKind::UnexpectedToken,
//!     Some('}'),
//!     SourcePosition::new(1, 6, 5),
//! );
//! assert_eq!(error.position.offset, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod parsed;
mod regexp;
mod source;
mod value;

pub use error::{DeserializeError, DeserializeResult, ParseResult, SyntaxError, SyntaxErrorKind};
pub use parsed::{ParsedValue, Properties};
pub use regexp::{RegExpFlags, RegExpValue};
pub use source::SourcePosition;
pub use value::{ArrayRef, ClassInstance, ObjectData, ObjectRef, Value};
