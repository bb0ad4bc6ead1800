//! Fuzz target for the Luhn checksum.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use cc_identifier::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let accepted = luhn::luhn(text);
        if accepted {
            assert!(text.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();
    if digits.is_empty() {
        return;
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    assert_eq!(luhn::luhn(&text), luhn::validate(&digits), "string/slice mismatch");

    if digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
