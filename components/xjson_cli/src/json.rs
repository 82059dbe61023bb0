//! Conversion of deserialized values to plain JSON

use serde_json::{Map, Number, Value as JsonValue};

use core_types::Value;

use crate::error::{CliError, CliResult};

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a value to plain JSON.
///
/// Mirrors `JSON.stringify`: non-finite numbers become `null`, `undefined`
/// is `null` inside arrays and dropped from objects, regular expressions
/// become `{}`. Big integers are written as decimal strings. Class tags are
/// not represented. A cyclic value is an error.
pub fn to_json(value: &Value) -> CliResult<JsonValue> {
    let mut stack = Vec::new();
    convert(value, &mut stack)
}

fn convert(value: &Value, stack: &mut Vec<*const ()>) -> CliResult<JsonValue> {
    Ok(match value {
        Value::Undefined | Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Number(n) => number(*n),
        Value::BigInt(n) => JsonValue::String(n.to_string()),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::RegExp(_) => JsonValue::Object(Map::new()),
        Value::Array(handle) => {
            let ptr = std::rc::Rc::as_ptr(handle) as *const ();
            enter(stack, ptr)?;
            let elements = handle
                .borrow()
                .iter()
                .map(|element| convert(element, stack))
                .collect::<CliResult<Vec<_>>>()?;
            stack.pop();
            JsonValue::Array(elements)
        }
        Value::Object(handle) => {
            let ptr = std::rc::Rc::as_ptr(handle) as *const ();
            enter(stack, ptr)?;
            let mut map = Map::new();
            for (key, field) in handle.borrow().properties.iter() {
                if matches!(field, Value::Undefined) {
                    continue;
                }
                map.insert(key.clone(), convert(field, stack)?);
            }
            stack.pop();
            JsonValue::Object(map)
        }
    })
}

fn enter(stack: &mut Vec<*const ()>, ptr: *const ()) -> CliResult<()> {
    if stack.contains(&ptr) {
        return Err(CliError::Json("value contains a cycle".to_string()));
    }
    stack.push(ptr);
    Ok(())
}

fn number(n: f64) -> JsonValue {
    if !n.is_finite() {
        JsonValue::Null
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // Integral doubles print without a fraction; -0 prints as 0
        JsonValue::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
    }
}
