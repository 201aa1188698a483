//! The `ClassValue` union accepted by the aggregator.
//!
//! The consuming presentation layer composes class lists from a loose mix of
//! strings, numbers, nested lists, and `{class: condition}` maps. This module
//! pins that duck-typed union down as an explicit sum type so every shape the
//! aggregator handles is visible in one place.

/// A single argument to [`aggregate`](crate::aggregate). Recursive: lists may
/// contain further class values at any depth. Maps use `Vec<(String, Condition)>`
/// to maintain insertion order without depending on `IndexMap`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Contributes nothing.
    Null,
    /// Contributes nothing either way. `false` is dropped by the falsy
    /// short-circuit; `true` survives it but matches no emitting branch.
    Bool(bool),
    /// Contributes its decimal form. Zero is exempt from the falsy
    /// short-circuit and still renders as `"0"`.
    Integer(i64),
    /// Contributes its normalized decimal form (whole floats render in
    /// integer form, `-0` renders as `0`). NaN contributes nothing.
    Float(f64),
    /// Contributes itself verbatim when non-empty.
    Text(String),
    /// Contributes the flattened contributions of its elements, in order.
    List(Vec<ClassValue>),
    /// For each `(key, condition)` pair in insertion order, contributes the
    /// key when the condition is truthy. Condition values themselves are
    /// never emitted.
    Map(Vec<(String, Condition)>),
}

/// The primitive condition attached to a map key. Only its truthiness
/// matters; the value is never stringified.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Condition {
    /// General truthiness rule: `null` and `false` are falsy, text is truthy
    /// iff non-empty, numbers are truthy iff non-zero and non-NaN.
    ///
    /// Note the asymmetry with scalar class values: a zero *condition* keeps
    /// its key out of the output, while a zero *class value* still emits `"0"`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Condition::Null => false,
            Condition::Bool(b) => *b,
            Condition::Integer(i) => *i != 0,
            Condition::Float(f) => *f != 0.0 && !f.is_nan(),
            Condition::Text(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Text(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Text(s)
    }
}

impl From<i64> for ClassValue {
    fn from(i: i64) -> Self {
        ClassValue::Integer(i)
    }
}

impl From<i32> for ClassValue {
    fn from(i: i32) -> Self {
        ClassValue::Integer(i64::from(i))
    }
}

impl From<f64> for ClassValue {
    fn from(f: f64) -> Self {
        ClassValue::Float(f)
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        ClassValue::Bool(b)
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => ClassValue::Null,
        }
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::List(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Condition {
    fn from(s: &str) -> Self {
        Condition::Text(s.to_string())
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        Condition::Text(s)
    }
}

impl From<i64> for Condition {
    fn from(i: i64) -> Self {
        Condition::Integer(i)
    }
}

impl From<f64> for Condition {
    fn from(f: f64) -> Self {
        Condition::Float(f)
    }
}

impl From<bool> for Condition {
    fn from(b: bool) -> Self {
        Condition::Bool(b)
    }
}

impl<T: Into<Condition>> From<Option<T>> for Condition {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Condition::Null,
        }
    }
}
