#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrub::{FilterPolicy, normalize_response};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    remove_urls: bool,
    remove_pagination_meta: bool,
    custom: Vec<String>,
    keep: Vec<String>,
    extract_only: bool,
    json: &'a [u8],
}

fuzz_target!(|input: Input| {
    if let Ok(v) = serde_json::from_slice::<serde_json::Value>(input.json) {
        let policy = FilterPolicy {
            remove_urls: input.remove_urls,
            remove_pagination_meta: input.remove_pagination_meta,
            custom_fields_to_remove: input.custom.into_iter().collect(),
            fields_to_keep: input.keep.into_iter().collect(),
        };
        let _ = normalize_response(&v, input.extract_only, &policy);
    }
});
