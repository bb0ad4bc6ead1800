//! Fuzz target for CVV validation.
//!
//! Tests that CVV checks never panic and agree with the declared lengths.

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

    // Arbitrary brand names must never panic
    let _ = v.validate_cvv(data, data);

    for detailed in &v.catalog().detailed {
        if v.validate_cvv(data, &detailed.scheme) {
            assert!(data.bytes().all(|b| b.is_ascii_digit()));
            assert!(detailed.accepts_cvv_length(data.len()));
        }
    }
});
