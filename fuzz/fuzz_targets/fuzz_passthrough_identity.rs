#![no_main]
use libfuzzer_sys::fuzz_target;
use scrub::{FilterPolicy, filter_value};

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = serde_json::from_slice::<serde_json::Value>(data) {
        let policy = FilterPolicy::passthrough();
        let out = filter_value(&v, &policy);
        assert_eq!(out, v);
    }
});
