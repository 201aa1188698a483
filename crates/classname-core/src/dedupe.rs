//! Duplicate-token removal for already-joined class strings.
//!
//! Composed class lists routinely repeat tokens when a base class appears in
//! both a shared component and a call site (`"btn" + {"btn": isButton}`).
//! Browsers ignore repeats, so deduplication is an optional post-pass rather
//! than part of the aggregation contract — ordering of first occurrences is
//! all that is preserved.

use std::collections::HashSet;

use crate::aggregate::aggregate;
use crate::value::ClassValue;

/// Remove repeated tokens from a class string, keeping the first occurrence
/// of each and collapsing any whitespace runs to single spaces.
pub fn dedupe(class: &str) -> String {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for token in class.split_ascii_whitespace() {
        if seen.insert(token) {
            kept.push(token);
        }
    }
    kept.join(" ")
}

/// Aggregate and deduplicate in one call.
pub fn aggregate_dedup(inputs: &[ClassValue]) -> String {
    dedupe(&aggregate(inputs))
}
