//! The class-list aggregator — flattens class values into one token string.
//!
//! The traversal is depth-first and left-to-right over the argument list, so
//! output tokens appear in exactly the order their sources appear in the
//! input. The accumulator is an explicit `Vec<String>` threaded through the
//! recursive calls rather than shared closure state.
//!
//! The function is total: every `ClassValue` shape either contributes tokens
//! or contributes nothing. A missing class is preferable to a thrown fault in
//! a presentation-layer helper, so there is no error path at all.
//!
//! # Example
//! ```
//! use classname_core::{aggregate, ClassValue, Condition};
//!
//! let out = aggregate(&[
//!     ClassValue::from("btn"),
//!     ClassValue::Map(vec![
//!         ("btn-active".to_string(), Condition::Bool(true)),
//!         ("btn-hidden".to_string(), Condition::Bool(false)),
//!     ]),
//! ]);
//! assert_eq!(out, "btn btn-active");
//! ```

use crate::value::ClassValue;

/// Flatten zero or more class values into a single space-joined token string.
///
/// Returns the empty string when nothing contributes (including for an empty
/// argument slice).
pub fn aggregate(inputs: &[ClassValue]) -> String {
    let mut bucket = Vec::new();
    for input in inputs {
        collect(input, &mut bucket);
    }
    bucket.join(" ")
}

/// Recursive descent over one class value, pushing tokens onto `bucket`.
fn collect(value: &ClassValue, bucket: &mut Vec<String>) {
    if is_omitted(value) {
        return;
    }
    match value {
        ClassValue::Text(s) => bucket.push(s.clone()),
        ClassValue::Integer(i) => bucket.push(i.to_string()),
        ClassValue::Float(f) => bucket.push(format_number(*f)),
        ClassValue::List(items) => {
            for item in items {
                collect(item, bucket);
            }
        }
        ClassValue::Map(entries) => {
            for (key, condition) in entries {
                if condition.is_truthy() {
                    bucket.push(key.clone());
                }
            }
        }
        // `Bool(true)` reaches here: it survives the falsy short-circuit but
        // is neither text, number, list, nor map, so it is dropped silently.
        ClassValue::Null | ClassValue::Bool(_) => {}
    }
}

/// The falsy short-circuit, as one explicit classification instead of host
/// truthiness coercion: omitted when the value is falsy AND not numeric zero.
///
/// The zero exemption means `Integer(0)` and `Float(0.0)` (including `-0.0`,
/// which compares equal to zero) fall through to the scalar branch and emit
/// `"0"`. NaN is falsy and is not zero, so it is omitted. The check applies
/// to scalar variants only — an empty list or map must still reach its own
/// branch and contribute nothing there, never short-circuit here.
fn is_omitted(value: &ClassValue) -> bool {
    match value {
        ClassValue::Null => true,
        ClassValue::Bool(b) => !b,
        ClassValue::Text(s) => s.is_empty(),
        ClassValue::Integer(_) => false,
        ClassValue::Float(f) => f.is_nan(),
        ClassValue::List(_) | ClassValue::Map(_) => false,
    }
}

/// Format a float token the way the source presentation layer stringifies
/// numbers: integer form for whole values, no trailing fractional zeros,
/// `-0` normalized to `0`.
fn format_number(f: f64) -> String {
    // -0 compares equal to 0 and renders as 0
    let f = if f == 0.0 { 0.0 } else { f };
    if !f.is_finite() {
        // Infinities are truthy non-zero numbers; render their display form.
        return f.to_string();
    }
    if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) {
        return (f as i64).to_string();
    }
    let s = format!("{}", f);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
