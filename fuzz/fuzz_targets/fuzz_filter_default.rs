#![no_main]
use libfuzzer_sys::fuzz_target;
use scrub::{FilterPolicy, normalize_response};

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = serde_json::from_slice::<serde_json::Value>(data) {
        let policy = FilterPolicy::default();
        let _ = normalize_response(&v, true, &policy);
        let _ = normalize_response(&v, false, &policy);
    }
});
