//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use cc_identifier::{luhn, luhn::generate_check_digit, Validator};
use proptest::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

// =============================================================================
// SHARED STATE
// =============================================================================

fn validator() -> &'static Validator {
    static VALIDATOR: OnceLock<Validator> = OnceLock::new();
    VALIDATOR.get_or_init(|| Validator::new().unwrap())
}

fn full_patterns() -> &'static [(String, Regex)] {
    static PATTERNS: OnceLock<Vec<(String, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        validator()
            .catalog()
            .brands
            .iter()
            .map(|b| {
                let re = Regex::new(&format!("^(?:{})$", b.regexp_full)).unwrap();
                (b.name.to_string(), re)
            })
            .collect()
    })
}

/// One prefix per brand that stays inside the brand for every declared length.
const SAMPLE_PREFIXES: &[(&str, &str)] = &[
    ("amex", "34"),
    ("aura", "507860"),
    ("diners", "36"),
    ("discover", "6445"),
    ("elo", "509123"),
    ("hipercard", "384140"),
    ("jcb", "3566"),
    ("maestro", "6304"),
    ("mastercard", "2221"),
    ("unionpay", "6240"),
    ("visa", "4556"),
];

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Appends the Luhn check digit.
fn with_check_digit(prefix: &str) -> String {
    let mut digits = to_digits(prefix);
    digits.push(generate_check_digit(&digits));
    digits_to_string(&digits)
}

/// Generates a Luhn-valid card number for a random brand and declared length.
fn branded_card_strategy() -> impl Strategy<Value = (&'static str, String)> {
    (0..SAMPLE_PREFIXES.len(), any::<prop::sample::Index>())
        .prop_flat_map(|(brand, length_index)| {
            let (scheme, prefix) = SAMPLE_PREFIXES[brand];
            let lengths = &validator().brand_info_detailed(scheme).unwrap().number.lengths;
            let len = lengths[length_index.index(lengths.len())] as usize;
            digit_string(len - 1 - prefix.len())
                .prop_map(move |body| (scheme, with_check_digit(&format!("{}{}", prefix, body))))
        })
}

/// Inserts one separator at a random position.
fn with_separator(card: String) -> impl Strategy<Value = String> {
    let len = card.len();
    (0..=len, prop_oneof![Just(' '), Just('-'), Just('.'), Just('/')]).prop_map(
        move |(pos, sep)| {
            let mut result = card.clone();
            result.insert(pos, sep);
            result
        },
    )
}

// =============================================================================
// LUHN ALGORITHM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Adding a check digit makes any digit sequence valid.
    #[test]
    fn check_digit_makes_valid(prefix in digit_string_range(1..=18)) {
        let card = with_check_digit(&prefix);
        prop_assert!(luhn(&card), "Adding check digit should make {} valid", card);
        prop_assert!(luhn::validate(&to_digits(&card)));
    }

    /// Property: Changing any single digit invalidates Luhn.
    #[test]
    fn single_digit_change_invalidates_luhn(
        prefix in digit_string_range(11..=18),
        change_pos in any::<prop::sample::Index>(),
        delta in 1u8..=9u8,
    ) {
        let mut digits = to_digits(&with_check_digit(&prefix));
        let pos = change_pos.index(digits.len());
        digits[pos] = (digits[pos] + delta) % 10;

        prop_assert!(!luhn::validate(&digits),
            "Changing digit at position {} should invalidate Luhn", pos);
        prop_assert!(!luhn(&digits_to_string(&digits)));
    }

    /// Property: All zeros of any length passes Luhn (sum = 0).
    #[test]
    fn all_zeros_passes_luhn(len in 1usize..=19usize) {
        prop_assert!(luhn(&"0".repeat(len)));
        prop_assert!(luhn::validate(&vec![0; len]));
    }

    /// Property: The string and digit-slice forms agree.
    #[test]
    fn string_and_slice_agree(card in digit_string_range(1..=19)) {
        let digits = to_digits(&card);
        prop_assert_eq!(luhn(&card), luhn::validate(&digits));
        prop_assert_eq!(luhn(&card), luhn::compute_checksum(&digits) % 10 == 0);
    }

    /// Property: Any non-digit character makes Luhn fail.
    #[test]
    fn separators_fail_luhn(card in digit_string_range(12..=19).prop_map(|p| with_check_digit(&p))
        .prop_flat_map(with_separator))
    {
        prop_assert!(!luhn(&card), "Separator should reject {:?}", card);
    }

    /// Property: Luhn never panics on arbitrary input.
    #[test]
    fn luhn_never_panics(input in ".*") {
        let _ = luhn(&input);
    }
}

// =============================================================================
// IDENTIFICATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: At most one full-number pattern matches any digit string.
    #[test]
    fn full_patterns_are_disjoint(pan in digit_string_range(12..=19)) {
        let matching: Vec<&str> = full_patterns()
            .iter()
            .filter(|(_, re)| re.is_match(&pan))
            .map(|(name, _)| name.as_str())
            .collect();

        prop_assert!(matching.len() <= 1, "{} matched {:?}", pan, matching);
        prop_assert_eq!(validator().find_brand(&pan), matching.first().copied());
    }

    /// Property: Generated cards are identified as their brand and validate.
    #[test]
    fn generated_cards_identify_their_brand((scheme, card) in branded_card_strategy()) {
        let v = validator();
        prop_assert_eq!(v.find_brand(&card), Some(scheme), "card {}", card);
        prop_assert_eq!(v.validate(&card), Some(scheme));
        prop_assert!(v.matches_bin(&card, scheme));
    }

    /// Property: A separator anywhere makes a card unrecognised.
    #[test]
    fn separators_are_not_normalized(
        card in branded_card_strategy().prop_flat_map(|(_, card)| with_separator(card))
    ) {
        prop_assert_eq!(validator().find_brand(&card), None);
    }

    /// Property: The identification operations agree with each other.
    #[test]
    fn operations_are_consistent(pan in prop_oneof![".*", digit_string_range(0..=20)]) {
        let v = validator();
        let brand = v.find_brand(&pan);

        prop_assert_eq!(v.is_supported(&pan), brand.is_some());
        match v.find_brand_detailed(&pan) {
            Some(detailed) => {
                prop_assert_eq!(Some(&*detailed.scheme), brand);
            }
            None => {
                prop_assert!(brand.is_none());
            }
        }
        if let Some(valid) = v.validate(&pan) {
            prop_assert_eq!(Some(valid), brand);
        }
    }

    /// Property: Repeated calls give the same answer.
    #[test]
    fn identification_is_pure(pan in digit_string_range(12..=19)) {
        let v = validator();
        let first = v.find_brand(&pan);
        for _ in 0..3 {
            prop_assert_eq!(v.find_brand(&pan), first);
        }
    }
}

// =============================================================================
// CVV PROPERTIES
// =============================================================================

proptest! {
    /// Property: A CVV is accepted iff its length is declared for the brand.
    #[test]
    fn cvv_follows_declared_lengths(
        brand in any::<prop::sample::Index>(),
        cvv in digit_string_range(0..=6),
    ) {
        let v = validator();
        let detailed = &v.catalog().detailed[brand.index(v.catalog().detailed.len())];
        let expected = !cvv.is_empty() && detailed.accepts_cvv_length(cvv.len());
        prop_assert_eq!(v.validate_cvv(&cvv, &detailed.scheme), expected);
    }

    /// Property: Unknown brands never accept a CVV.
    #[test]
    fn cvv_unknown_brand_is_false(cvv in ".*", brand in "[a-z]{1,12}") {
        let v = validator();
        prop_assume!(v.brand_info(&brand).is_none());
        prop_assert!(!v.validate_cvv(&cvv, &brand));
    }

    /// Property: validate_cvv never panics.
    #[test]
    fn cvv_never_panics(cvv in ".*", brand in ".*") {
        let _ = validator().validate_cvv(&cvv, &brand);
    }
}
