//! Tree produced by the grammar phase, before references are resolved.

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::RegExpValue;

/// Field mapping of an object literal, in insertion order.
pub type Properties<V> = IndexMap<String, V>;

/// One node of a parsed statement.
///
/// Containers own their children outright; sharing and cycles only exist
/// through [`ParsedValue::Reference`] placeholders, which name a top-level
/// statement by index and are replaced during resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `true` / `false`
    Bool(bool),
    /// Any non-`n` number, including `NaN` and the infinities
    Number(f64),
    /// Integer literal with an `n` suffix
    BigInt(BigInt),
    /// Double-quoted string
    String(String),
    /// `/pattern/flags`
    Regex(RegExpValue),
    /// `[a, b, ...]`
    Array(Vec<ParsedValue>),
    /// `{"k": v, ...}`
    Object(Properties<ParsedValue>),
    /// `Name{"k": v, ...}` where `Name` is a registered class
    TaggedObject {
        /// The class tag as written
        name: String,
        /// The parsed field set
        fields: Properties<ParsedValue>,
    },
    /// `$n`
    Reference(usize),
}

impl ParsedValue {
    /// Whether this node becomes a shared container once resolved.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ParsedValue::Array(_) | ParsedValue::Object(_) | ParsedValue::TaggedObject { .. }
        )
    }

    /// Whether any `$n` placeholder remains in this subtree.
    pub fn has_references(&self) -> bool {
        match self {
            ParsedValue::Reference(_) => true,
            ParsedValue::Array(items) => items.iter().any(ParsedValue::has_references),
            ParsedValue::Object(fields) | ParsedValue::TaggedObject { fields, .. } => {
                fields.values().any(ParsedValue::has_references)
            }
            _ => false,
        }
    }
}
