#![doc = include_str!("../README.md")]

pub mod error;
pub mod fields;
pub mod filter;
pub mod policy;

pub use crate::error::{Error, Result};
pub use crate::filter::{extract_data, filter_value, normalize_response};
pub use crate::policy::FilterPolicy;

use std::io::Read;

use serde_json::Value;

/// Parses `s` as JSON and normalizes it.
pub fn normalize_from_str(s: &str, extract_only: bool, policy: &FilterPolicy) -> Result<Value> {
    let response: Value = serde_json::from_str(s)?;
    Ok(normalize_response(&response, extract_only, policy))
}

/// Reads a JSON document from `reader` and normalizes it.
pub fn normalize_from_reader<R: Read>(
    mut reader: R,
    extract_only: bool,
    policy: &FilterPolicy,
) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    normalize_from_str(&s, extract_only, policy)
}

/// Normalizes `response` and serializes the result to compact JSON.
pub fn normalize_to_string(
    response: &Value,
    extract_only: bool,
    policy: &FilterPolicy,
) -> Result<String> {
    let v = normalize_response(response, extract_only, policy);
    Ok(serde_json::to_string(&v)?)
}

/// Normalizes `response` and serializes the result to pretty-printed JSON.
pub fn normalize_to_string_pretty(
    response: &Value,
    extract_only: bool,
    policy: &FilterPolicy,
) -> Result<String> {
    let v = normalize_response(response, extract_only, policy);
    Ok(serde_json::to_string_pretty(&v)?)
}
