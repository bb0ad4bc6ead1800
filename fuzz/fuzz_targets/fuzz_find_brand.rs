//! Fuzz target for brand identification.
//!
//! Tests that identification never panics and its operations agree.

#![no_main]

use cc_identifier::Validator;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn validator() -> &'static Validator {
    static VALIDATOR: OnceLock<Validator> = OnceLock::new();
    VALIDATOR.get_or_init(|| Validator::new().unwrap())
}

fuzz_target!(|data: &str| {
    let v = validator();

    let brand = v.find_brand(data);
    assert_eq!(v.is_supported(data), brand.is_some());

    if let Some(detailed) = v.find_brand_detailed(data) {
        assert_eq!(Some(&*detailed.scheme), brand);
        assert!(detailed.accepts_length(data.len()));
    }

    if let Some(valid) = v.validate(data) {
        assert_eq!(Some(valid), brand);
    }

    // Only plain digit strings are ever recognised
    if brand.is_some() {
        assert!(data.bytes().all(|b| b.is_ascii_digit()));
    }
});
