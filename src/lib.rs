//! # cc_identifier
//!
//! Credit card brand identification and syntactic validation for Rust.
//!
//! ## Features
//!
//! - Luhn checksum over digit strings
//! - Brand identification from a catalog of full-number patterns (11 brands)
//! - Brand-aware CVV validation
//! - Static brand metadata: display name, card type, lengths, Luhn requirement
//! - Custom catalogs, hand-built or loaded from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_identifier::{luhn, Validator};
//!
//! let validator = Validator::new().unwrap();
//!
//! assert_eq!(validator.find_brand("4012001037141112"), Some("visa"));
//! assert_eq!(validator.find_brand("6362970000457013"), Some("elo"));
//! assert_eq!(validator.find_brand("1234567890123456"), None);
//!
//! assert!(luhn("4012001037141112"));
//! assert!(!luhn("4012001037141113"));
//! ```
//!
//! ## CVV Validation
//!
//! ```rust
//! use cc_identifier::Validator;
//!
//! let validator = Validator::new().unwrap();
//!
//! // Amex takes 4 digits, everyone else 3
//! assert!(validator.validate_cvv("1234", "amex"));
//! assert!(validator.validate_cvv("123", "visa"));
//! assert!(!validator.validate_cvv("1234", "visa"));
//! assert!(!validator.validate_cvv("123", "unknown"));
//! ```
//!
//! ## Brand Metadata
//!
//! ```rust
//! use cc_identifier::{CardType, Validator};
//!
//! let validator = Validator::new().unwrap();
//!
//! let detailed = validator.find_brand_detailed("5533798818319497").unwrap();
//! assert_eq!(detailed.brand, "Mastercard");
//! assert_eq!(detailed.card_type, CardType::Credit);
//! assert!(detailed.accepts_length(16));
//!
//! assert_eq!(validator.brand_info_detailed("maestro").unwrap().card_type, CardType::Debit);
//! assert_eq!(validator.list_brands().len(), 11);
//! ```
//!
//! ## Input Format
//!
//! Card numbers and CVVs must be plain ASCII digits. Nothing is stripped:
//!
//! ```rust
//! use cc_identifier::{luhn, Validator};
//!
//! let validator = Validator::new().unwrap();
//! assert_eq!(validator.find_brand("4012 0010 3714 1112"), None);
//! assert!(!luhn("4012-0010-3714-1112"));
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length | CVV |
//! |-------|--------|--------|-----|
//! | American Express | 34, 37 | 15 | 4 |
//! | Aura | 500-508 | 16, 19 | 3 |
//! | Diners Club | 300-305, 309, 36, 38 | 14 | 3 |
//! | Discover | 6011, 644-649, 65 | 16-19 | 3 |
//! | Elo | 4011, 4312, 4389, 4514, 4573, 504, 506, 509, 6277, 636, 650, 651, 655 | 16 | 3 |
//! | Hipercard | 606282, 3841 | 16, 19 | 3 |
//! | JCB | 3528-3589 | 16-19 | 3 |
//! | Maestro | 5893, 6304, 6759, 6761-6763 | 12-19 | 3 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 3 |
//! | UnionPay | 62 | 16-19 | 3 |
//! | Visa | 4, 6367 | 13, 16, 19 | 3 |
//!
//! Elo BINs are carved out of the Visa, Aura, Discover and UnionPay ranges,
//! so a card number belongs to at most one brand.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `catalog-json` | Load catalogs from JSON; serde derives on catalog records |
//! | `parallel` | Rayon-based batch identification |
//! | `full` | All of the above |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod catalog;
pub mod error;
pub mod luhn;
pub mod validator;

// Re-export main types at crate root
pub use catalog::{
    BinInfo, BinPattern, Brand, BrandDetailed, CardType, Catalog, CvvRules, NumberRules,
};
pub use error::{CatalogError, PatternField};
pub use luhn::luhn;
pub use validator::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_brand_table() {
        let validator = Validator::new().unwrap();
        let cases = [
            ("4012001037141112", Some("visa")),
            ("5533798818319497", Some("mastercard")),
            ("378282246310005", Some("amex")),
            ("6011236044609927", Some("discover")),
            ("30066909048113", Some("diners")),
            ("6362970000457013", Some("elo")),
            ("6062825624254001", Some("hipercard")),
            ("1234567890123456", None),
            ("", None),
        ];

        for (pan, expected) in cases {
            assert_eq!(validator.find_brand(pan), expected, "pan {}", pan);
        }
    }

    #[test]
    fn test_luhn_table() {
        assert!(luhn("4012001037141112"));
        assert!(!luhn("4012001037141113"));
        assert!(!luhn(""));
    }

    #[test]
    fn test_validate_cvv_table() {
        let validator = Validator::new().unwrap();
        assert!(validator.validate_cvv("123", "visa"));
        assert!(validator.validate_cvv("1234", "amex"));
        assert!(!validator.validate_cvv("12", "visa"));
        assert!(!validator.validate_cvv("1234", "visa"));
        assert!(!validator.validate_cvv("123", "unknown"));
    }

    #[test]
    fn test_brand_info_detailed_display_name() {
        let validator = Validator::new().unwrap();
        assert_eq!(validator.brand_info_detailed("visa").unwrap().brand, "Visa");
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
        assert_send_sync::<Catalog>();
        assert_send_sync::<CatalogError>();
        assert_send_sync::<CardType>();
    }
}
