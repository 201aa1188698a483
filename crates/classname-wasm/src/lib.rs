//! WASM bindings for classname-core.
//!
//! Exposes `cn` and `cn_dedupe` as `#[wasm_bindgen]` functions so the
//! JavaScript presentation layer can call the composer directly. Built with
//! `wasm-bindgen-cli` (not wasm-pack, which was archived in July 2025).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p classname-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/classname-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/classname_wasm.wasm
//! ```
//!
//! Callers serialize their argument list to JSON (`JSON.stringify([...])`)
//! and receive the joined class string back.

use wasm_bindgen::prelude::*;

/// Compose a class string from a JSON class expression.
///
/// Returns the space-joined class string, or throws a JS error if the input
/// is not valid JSON.
#[wasm_bindgen]
pub fn cn(json: &str) -> std::result::Result<String, JsValue> {
    classname_core::aggregate_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compose a class string and drop repeated tokens, keeping the first
/// occurrence of each.
#[wasm_bindgen]
pub fn cn_dedupe(json: &str) -> std::result::Result<String, JsValue> {
    classname_core::aggregate_json(json)
        .map(|class| classname_core::dedupe(&class))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
