//! Operator-facing introspection for authoring provider specs
//!
//! Wiring up an unfamiliar API means guessing where its results array lives
//! and what the items look like. These helpers answer both questions from a
//! captured raw response, without writing any code. Read-only.

use crate::config::ProviderSpec;
use crate::json;
use serde_json::Value;

/// List the object keys of the first item in the detected results list.
///
/// Applies the spec's results path to `raw`; when the path misses, the array
/// is empty, or the first element is not an object, the list is empty.
pub fn describe_first_item(spec: &ProviderSpec, raw: &Value) -> Vec<String> {
    let entries = match json::extract(raw, &spec.results_path) {
        Some(Value::Array(entries)) => entries,
        _ => return Vec::new(),
    };

    match entries.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// List the keys of the response root object, for diagnosing a results path
/// that resolves nowhere.
pub fn describe_root(raw: &Value) -> Vec<String> {
    match raw {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
