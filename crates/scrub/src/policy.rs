use std::collections::HashSet;

/// Filtering policy applied by the normalizer.
///
/// The same policy value is applied at every nesting depth of the input,
/// including `fields_to_keep`: a nested object under a kept key is
/// re-restricted by the allow-list if its own keys don't appear in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterPolicy {
    /// Drop keys in the fixed URL table and keys ending in `_url`.
    pub remove_urls: bool,
    /// Drop keys in the fixed pagination-metadata table.
    pub remove_pagination_meta: bool,
    /// Additional keys to drop, exact match.
    pub custom_fields_to_remove: HashSet<String>,
    /// When non-empty, only these keys survive in any object. Keys listed
    /// here are still subject to the removal rules above.
    pub fields_to_keep: HashSet<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            remove_urls: true,
            remove_pagination_meta: true,
            custom_fields_to_remove: HashSet::new(),
            fields_to_keep: HashSet::new(),
        }
    }
}

impl FilterPolicy {
    /// Policy under which filtering is the identity transform.
    pub fn passthrough() -> Self {
        Self {
            remove_urls: false,
            remove_pagination_meta: false,
            ..Self::default()
        }
    }
}
