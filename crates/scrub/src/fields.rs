//! Fixed field-name tables used by the filter.
//!
//! These match the upstream API's pagination envelope and URL-bearing
//! fields exactly (case-sensitive). They are constants, not configuration;
//! caller-specific removals go through `FilterPolicy::custom_fields_to_remove`.

/// Pagination metadata keys, as emitted by Laravel-style paginated endpoints.
pub const PAGINATION_FIELDS: &[&str] = &[
    "links",
    "meta",
    "first_page_url",
    "last_page_url",
    "next_page_url",
    "prev_page_url",
    "path",
    "current_page",
    "from",
    "to",
    "per_page",
    "last_page",
];

/// Keys that carry URLs. Mostly redundant with [`URL_SUFFIX`]; the bare
/// `url` key is the one this table exists for.
pub const URL_FIELDS: &[&str] = &["url", "avatar_url", "webhook_url", "callback_url"];

/// Suffix rule applied in addition to [`URL_FIELDS`] when URL removal is on.
pub const URL_SUFFIX: &str = "_url";

pub fn is_pagination_field(key: &str) -> bool {
    PAGINATION_FIELDS.contains(&key)
}

pub fn is_url_field(key: &str) -> bool {
    URL_FIELDS.contains(&key) || key.ends_with(URL_SUFFIX)
}
