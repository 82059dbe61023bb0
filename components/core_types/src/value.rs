//! Resolved value graph.
//!
//! Containers are shared handles (`Rc<RefCell<..>>`) so that a document can
//! describe cycles and shared structure through `$n` references. Two values
//! compare equal with `==` when they are the same primitive or the same
//! container handle; use [`Value::deep_eq`] for structural comparison.

use std::any::Any;
use std::cell::RefCell;
use std::fmt::{self, Write};
use std::rc::Rc;

use num_bigint::BigInt;

use crate::{Properties, RegExpValue};

/// Shared handle to array storage.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Shared handle to object storage.
pub type ObjectRef = Rc<RefCell<ObjectData>>;

/// Typed value built by a registered class factory.
pub struct ClassInstance {
    /// The class tag the object was written with
    pub name: String,
    /// Whatever the factory produced
    pub data: Box<dyn Any>,
}

impl fmt::Debug for ClassInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassInstance")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Internal object data
#[derive(Debug, Default)]
pub struct ObjectData {
    /// Fields in insertion order
    pub properties: Properties<Value>,
    /// Set when the object was written with a registered class tag
    pub class: Option<ClassInstance>,
}

impl ObjectData {
    /// Creates a plain object with the given fields.
    pub fn new(properties: Properties<Value>) -> Self {
        Self {
            properties,
            class: None,
        }
    }

    /// Looks up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// The class tag, if the object is a class instance.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_ref().map(|c| c.name.as_str())
    }

    /// The factory-built value, if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.class.as_ref().and_then(|c| c.data.downcast_ref::<T>())
    }
}

/// A fully resolved value.
///
/// Arrays and objects are reference counted. A graph that contains a cycle
/// (for example `{"self":$0}`) keeps itself alive after the last outside
/// handle is dropped; call [`Value::clear`] on a container in the cycle to
/// release it.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let array = Value::array(vec![Value::Number(1.0), Value::Null]);
/// assert_eq!(array.type_of(), "object");
/// assert_eq!(array.to_string(), "[1,null]");
/// ```
#[derive(Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// Arbitrary precision integer
    BigInt(BigInt),
    /// String value
    String(String),
    /// Regular expression
    RegExp(Rc<RegExpValue>),
    /// Array
    Array(ArrayRef),
    /// Object, possibly a class instance
    Object(ObjectRef),
}

impl Value {
    /// Wraps elements in a new array handle.
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(elements)))
    }

    /// Wraps fields in a new plain object handle.
    pub fn object(properties: Properties<Value>) -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData::new(properties))))
    }

    /// Returns the JavaScript `typeof` name of this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::RegExp(_) | Value::Array(_) | Value::Object(_) => "object",
        }
    }

    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Array handle, if this is an array.
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Object handle, if this is an object.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Reads a field of an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object()?.borrow().get(key).cloned()
    }

    /// Reads an element of an array. Returns `None` for non-arrays.
    pub fn index(&self, index: usize) -> Option<Value> {
        self.as_array()?.borrow().get(index).cloned()
    }

    /// Whether both values are the same container handle.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Empties an array or object in place, dropping the handles it held.
    ///
    /// Every holder of the handle sees the container empty. A class instance
    /// built for the object is dropped as well. Primitives are left as is.
    pub fn clear(&self) {
        match self {
            Value::Array(items) => items.borrow_mut().clear(),
            Value::Object(object) => {
                let mut object = object.borrow_mut();
                object.properties.clear();
                object.class = None;
            }
            _ => {}
        }
    }

    /// Structural equality that terminates on cyclic graphs.
    ///
    /// `NaN` equals `NaN` here, and class instances must carry the same tag.
    pub fn deep_eq(&self, other: &Value) -> bool {
        deep_eq_inner(self, other, &mut Vec::new())
    }

    fn identity(&self) -> Option<*const ()> {
        match self {
            Value::Array(a) => Some(Rc::as_ptr(a) as *const ()),
            Value::Object(o) => Some(Rc::as_ptr(o) as *const ()),
            _ => None,
        }
    }
}

fn deep_eq_inner(a: &Value, b: &Value, seen: &mut Vec<(*const (), *const ())>) -> bool {
    if let (Some(pa), Some(pb)) = (a.identity(), b.identity()) {
        if pa == pb || seen.contains(&(pa, pb)) {
            return true;
        }
        seen.push((pa, pb));
    }
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            (x.is_nan() && y.is_nan()) || (x == y && x.is_sign_negative() == y.is_sign_negative())
        }
        (Value::RegExp(x), Value::RegExp(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| deep_eq_inner(l, r, seen))
        }
        (Value::Object(x), Value::Object(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            x.class_name() == y.class_name()
                && x.properties.len() == y.properties.len()
                && x.properties.iter().all(|(k, l)| {
                    y.properties
                        .get(k)
                        .map_or(false, |r| deep_eq_inner(l, r, seen))
                })
        }
        _ => a == b,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::RegExp(_), Value::RegExp(_))
            | (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_)) => self.same(other),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::RegExp(r) => write!(f, "RegExp({})", r),
            Value::Array(_) => write!(f, "Array({})", self),
            Value::Object(_) => write!(f, "Object({})", self),
        }
    }
}

/// Renders the value in document notation.
///
/// A container that is reached again while it is still being rendered
/// prints as `[Circular]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, &mut Vec::new())
    }
}

fn render<W: Write>(value: &Value, out: &mut W, stack: &mut Vec<*const ()>) -> fmt::Result {
    if let Some(id) = value.identity() {
        if stack.contains(&id) {
            return out.write_str("[Circular]");
        }
        stack.push(id);
    }
    match value {
        Value::Undefined => out.write_str("undefined")?,
        Value::Null => out.write_str("null")?,
        Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" })?,
        Value::Number(n) => render_number(*n, out)?,
        Value::BigInt(n) => write!(out, "{}n", n)?,
        Value::String(s) => render_string(s, out)?,
        Value::RegExp(r) => write!(out, "{}", r)?,
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                render(item, out, stack)?;
            }
            out.write_char(']')?;
        }
        Value::Object(object) => {
            let object = object.borrow();
            if let Some(name) = object.class_name() {
                out.write_str(name)?;
            }
            out.write_char('{')?;
            for (i, (key, field)) in object.properties.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                render_string(key, out)?;
                out.write_char(':')?;
                render(field, out, stack)?;
            }
            out.write_char('}')?;
        }
    }
    if value.identity().is_some() {
        stack.pop();
    }
    Ok(())
}

fn render_number<W: Write>(n: f64, out: &mut W) -> fmt::Result {
    if n.is_nan() {
        out.write_str("NaN")
    } else if n.is_infinite() {
        out.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 && n.is_sign_negative() {
        out.write_str("-0")
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(out, "{}", n as i64)
    } else {
        write!(out, "{}", n)
    }
}

fn render_string<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}
