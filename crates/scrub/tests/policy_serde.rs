#![cfg(feature = "serde")]
use scrub::FilterPolicy;

#[test]
fn missing_fields_take_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let policy: FilterPolicy = serde_json::from_str(r#"{ "remove_urls": false }"#)?;
    assert!(!policy.remove_urls);
    assert!(policy.remove_pagination_meta);
    assert!(policy.custom_fields_to_remove.is_empty());
    assert!(policy.fields_to_keep.is_empty());
    Ok(())
}

#[test]
fn full_policy_roundtrips() -> Result<(), Box<dyn std::error::Error>> {
    let policy: FilterPolicy = serde_json::from_str(
        r#"{
            "remove_urls": true,
            "remove_pagination_meta": false,
            "custom_fields_to_remove": ["debug"],
            "fields_to_keep": ["id", "name"]
        }"#,
    )?;
    assert!(policy.custom_fields_to_remove.contains("debug"));
    assert_eq!(policy.fields_to_keep.len(), 2);

    let back: FilterPolicy = serde_json::from_str(&serde_json::to_string(&policy)?)?;
    assert_eq!(back, policy);
    Ok(())
}
