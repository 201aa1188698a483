//! JSON front-end for the aggregator.
//!
//! The presentation layer that consumes this crate (via the CLI or the WASM
//! binding) expresses its class arguments as JSON, e.g.
//! `["btn", {"btn-active": true}, null]`. This module converts
//! `serde_json::Value` trees into [`ClassValue`] and exposes a one-call
//! string-to-string entry point.
//!
//! Object key order is preserved end to end: `serde_json` is built with the
//! `preserve_order` feature, so its map iterates in insertion order, matching
//! the aggregator's ordering invariant.

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::value::{ClassValue, Condition};
use serde_json::Value;

/// Parse a JSON class expression and aggregate it into a class string.
///
/// A top-level JSON array is treated as the argument list; any other
/// top-level value is treated as a single argument. Returns an error only
/// when the input is not valid JSON.
///
/// # Example
/// ```
/// use classname_core::aggregate_json;
/// let out = aggregate_json(r#"["btn", {"btn-active": true, "hidden": false}]"#).unwrap();
/// assert_eq!(out, "btn btn-active");
/// ```
pub fn aggregate_json(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    let inputs = match &value {
        Value::Array(items) => items.iter().map(from_json).collect(),
        other => vec![from_json(other)],
    };
    Ok(aggregate(&inputs))
}

/// Convert a JSON value into the aggregator's class-value union.
///
/// Arrays become lists; objects become condition maps. JSON has no
/// `undefined`, so `null` covers the whole nil case.
pub fn from_json(value: &Value) -> ClassValue {
    match value {
        Value::Null => ClassValue::Null,
        Value::Bool(b) => ClassValue::Bool(*b),
        Value::Number(n) => number_value(n),
        Value::String(s) => ClassValue::Text(s.clone()),
        Value::Array(items) => ClassValue::List(items.iter().map(from_json).collect()),
        Value::Object(map) => ClassValue::Map(
            map.iter()
                .map(|(key, val)| (key.clone(), condition_from_json(val)))
                .collect(),
        ),
    }
}

/// Convert a JSON value in condition position. Composites (arrays, objects)
/// carry no primitive to keep, and are truthy under the host rule, so they
/// collapse to `Bool(true)`.
fn condition_from_json(value: &Value) -> Condition {
    match value {
        Value::Null => Condition::Null,
        Value::Bool(b) => Condition::Bool(*b),
        Value::Number(n) => match number_value(n) {
            ClassValue::Integer(i) => Condition::Integer(i),
            ClassValue::Float(f) => Condition::Float(f),
            _ => Condition::Null,
        },
        Value::String(s) => Condition::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => Condition::Bool(true),
    }
}

/// Map a JSON number to the integer variant when it fits, float otherwise.
fn number_value(n: &serde_json::Number) -> ClassValue {
    if let Some(i) = n.as_i64() {
        return ClassValue::Integer(i);
    }
    if let Some(u) = n.as_u64() {
        // Larger than i64::MAX; lossy but out of any realistic class range.
        return ClassValue::Float(u as f64);
    }
    ClassValue::Float(n.as_f64().unwrap_or(f64::NAN))
}
