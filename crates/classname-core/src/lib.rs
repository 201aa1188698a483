//! # classname-core
//!
//! Conditional CSS class-list composition: flatten a heterogeneous mix of
//! class values (strings, numbers, nested lists, `{class: condition}` maps)
//! into a single space-separated token string.
//!
//! Tokens appear in depth-first, left-to-right traversal order of the
//! arguments. Falsy values contribute nothing, with one deliberate carve-out:
//! numeric zero still renders as `"0"`. The aggregator is a total function;
//! only the JSON front-end can fail, and only on malformed JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use classname_core::{aggregate, aggregate_json, ClassValue, Condition};
//!
//! // Typed values
//! let out = aggregate(&[
//!     ClassValue::from("card"),
//!     ClassValue::Map(vec![("card-open".to_string(), Condition::Bool(true))]),
//! ]);
//! assert_eq!(out, "card card-open");
//!
//! // JSON class expressions (the CLI and WASM surface)
//! let out = aggregate_json(r#"["card", {"card-open": true}]"#).unwrap();
//! assert_eq!(out, "card card-open");
//! ```
//!
//! ## Modules
//!
//! - [`aggregate`](crate::aggregate()) — class values → class string
//! - [`json`] — JSON class expressions → class string (`aggregate_json`, `from_json`)
//! - [`dedupe`](crate::dedupe()) — optional duplicate-token removal post-pass
//! - [`error`] — error type for the JSON parsing path
//! - [`value`] — the `ClassValue` / `Condition` union

pub mod aggregate;
pub mod dedupe;
pub mod error;
pub mod json;
pub mod value;

pub use aggregate::aggregate;
pub use dedupe::{aggregate_dedup, dedupe};
pub use error::ClassError;
pub use json::{aggregate_json, from_json};
pub use value::{ClassValue, Condition};
