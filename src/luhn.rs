//! Luhn algorithm implementation for card number checksums.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used by the major card schemes to catch single-digit typos and most
//! adjacent transpositions.
//!
//! # Performance
//!
//! Every function here is O(n) with a fixed-size accumulator and a lookup
//! table for the doubling step. Nothing allocates.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a card number string with the Luhn algorithm.
///
/// The input must consist of ASCII digits only. An empty string, or one
/// containing anything else (spaces, hyphens, signs, non-ASCII digits),
/// is rejected rather than normalized.
///
/// # Example
///
/// ```
/// use cc_identifier::luhn::luhn;
///
/// assert!(luhn("4012001037141112"));
/// assert!(!luhn("4012001037141113"));
/// assert!(!luhn("4012-0010-3714-1112"));
/// assert!(!luhn(""));
/// ```
#[inline]
pub fn luhn(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let mut sum: u32 = 0;
    for (i, byte) in number.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let digit = byte - b'0';
        sum += if i % 2 == 1 {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
    }

    sum % 10 == 0
}

/// Validates a slice of digits (values 0-9) using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the card number.
///
/// # Returns
///
/// `true` if the checksum is valid, `false` otherwise. Empty input and any
/// element above 9 are rejected, as [`luhn`] rejects non-digit characters.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cc_identifier::luhn::validate;
///
/// let digits = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert!(validate(&digits));
///
/// let invalid = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 6];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() || digits.iter().any(|&d| d > 9) {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum for a sequence of digits.
///
/// # Returns
///
/// The Luhn sum (not modulo 10).
///
/// # Panics
///
/// Panics if any element is above 9. Use [`validate`] for unchecked input.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    assert_digits(digits);
    // Rightmost digit is position 0 (kept), position 1 is doubled, and so on.
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Panics
///
/// Panics if any element is above 9.
///
/// # Example
///
/// ```
/// use cc_identifier::luhn::generate_check_digit;
///
/// // 401200103714111 + 2 = 4012001037141112
/// let partial = [4, 0, 1, 2, 0, 0, 1, 0, 3, 7, 1, 4, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 2);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    assert_digits(digits);
    // Every existing digit moves one position left once the check digit is
    // appended, so the rightmost one here lands on a doubled position.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[inline]
fn assert_digits(digits: &[u8]) {
    assert!(
        digits.iter().all(|&d| d <= 9),
        "Luhn input must hold digit values 0-9"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(luhn("4012001037141112"));
        assert!(luhn("5533798818319497"));
        assert!(luhn("378282246310005"));
        assert!(luhn("6011236044609927"));
        assert!(luhn("30066909048113"));
        assert!(luhn("6362970000457013"));
        assert!(luhn("6062825624254001"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!luhn("4012001037141113"));
        assert!(!luhn("1234567890123456"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!luhn(""));
        assert!(!validate(&[]));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(!luhn("4012 0010 3714 1112"));
        assert!(!luhn("4012-0010-3714-1112"));
        assert!(!luhn("+4012001037141112"));
        assert!(!luhn("401200103714111a"));
        // Arabic-Indic digits are not ASCII digits
        assert!(!luhn("٤٠١٢"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_elements() {
        assert!(!validate(&[4, 0, 1, 2, 10]));
        assert!(!validate(&[255]));
        // Raw ASCII bytes rather than digit values
        assert!(!validate(b"4012001037141112"));
    }

    #[test]
    #[should_panic(expected = "digit values 0-9")]
    fn test_compute_checksum_panics_on_out_of_range_element() {
        compute_checksum(&[1, 10]);
    }

    #[test]
    #[should_panic(expected = "digit values 0-9")]
    fn test_generate_check_digit_panics_on_out_of_range_element() {
        generate_check_digit(&[4, 0, 12]);
    }

    #[test]
    fn test_single_digit() {
        // 0 % 10 == 0
        assert!(luhn("0"));
        assert!(validate(&[0]));
        assert!(!luhn("1"));
        assert!(!validate(&[5]));
    }

    #[test]
    fn test_string_and_slice_agree() {
        let number = "5533798818319497";
        let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        assert_eq!(luhn(number), validate(&digits));

        let number = "5533798818319498";
        let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        assert_eq!(luhn(number), validate(&digits));
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);

        let partial = [5, 5, 3, 3, 7, 9, 8, 8, 1, 8, 3, 1, 9, 4, 9];
        assert_eq!(generate_check_digit(&partial), 7);
    }

    #[test]
    fn test_compute_checksum() {
        let digits = [4, 0, 1, 2, 0, 0, 1, 0, 3, 7, 1, 4, 1, 1, 1, 2];
        assert_eq!(compute_checksum(&digits), 40);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
