//! The response normalizer: a recursive key-filtering pass over
//! `serde_json::Value`.
//!
//! Total over the JSON domain: no error conditions, no panics, input is
//! never mutated. Filtering happens at object-key granularity only; arrays
//! keep their length and order.

use serde_json::{Map, Value};

use crate::fields::{is_pagination_field, is_url_field};
use crate::policy::FilterPolicy;

/// Returns a copy of `value` with unwanted object keys removed at every
/// nesting depth. Scalars and null come back unchanged.
pub fn filter_value(value: &Value, policy: &FilterPolicy) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| filter_value(v, policy)).collect())
        }
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                if removes(policy, key) {
                    continue;
                }
                out.insert(key.clone(), filter_value(child, policy));
            }
            Value::Object(out)
        }
    }
}

/// Unwraps a `data` envelope before filtering. When `response` is an object
/// with a `data` key, only `data` is filtered and returned; sibling keys
/// (top-level pagination links and the like) are discarded wholesale.
/// Any other shape is filtered as-is.
pub fn extract_data(response: &Value, policy: &FilterPolicy) -> Value {
    if let Value::Object(map) = response {
        if let Some(inner) = map.get("data") {
            return filter_value(inner, policy);
        }
    }
    filter_value(response, policy)
}

/// Entry point for callers shaping an API response: unwraps the `data`
/// envelope when `extract_only` is set, otherwise filters the whole
/// response. Current call sites pass `extract_only = true`.
pub fn normalize_response(response: &Value, extract_only: bool, policy: &FilterPolicy) -> Value {
    if extract_only {
        extract_data(response, policy)
    } else {
        filter_value(response, policy)
    }
}

// The five removal checks from the policy, independent ORs. Any match
// drops the key without recursing into its value.
fn removes(policy: &FilterPolicy, key: &str) -> bool {
    if !policy.fields_to_keep.is_empty() && !policy.fields_to_keep.contains(key) {
        return true;
    }
    if policy.remove_pagination_meta && is_pagination_field(key) {
        return true;
    }
    if policy.remove_urls && is_url_field(key) {
        return true;
    }
    policy.custom_fields_to_remove.contains(key)
}
