//! Brand catalog: the static tables that drive brand identification.
//!
//! The catalog is two parallel tables keyed by the same brand name:
//!
//! - [`Brand`] - the *basic* record with three pattern strings (BIN prefix,
//!   full number, CVV).
//! - [`BrandDetailed`] - the *detailed* record with display name, card type,
//!   accepted number lengths, Luhn requirement and accepted CVV lengths.
//!
//! The built-in tables live in [`BRANDS`] and [`BRANDS_DETAILED`] and are
//! compile-time constants. A [`Catalog`] is the owned form handed to
//! [`Validator`](crate::Validator); it can be built from the built-in tables,
//! assembled by hand, or (with the `catalog-json` feature) loaded from JSON.
//!
//! # Example
//!
//! ```
//! use cc_identifier::catalog::{Catalog, CardType};
//!
//! let catalog = Catalog::builtin();
//! let visa = catalog.detailed("visa").unwrap();
//! assert_eq!(visa.brand, "Visa");
//! assert_eq!(visa.card_type, CardType::Credit);
//! assert!(visa.accepts_length(16));
//! ```

mod builtin;

#[cfg(feature = "catalog-json")]
mod json;

pub use builtin::{BRANDS, BRANDS_DETAILED};

use std::borrow::Cow;
use std::fmt;

/// Basic brand record: a name and its three pattern strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "catalog-json", serde(rename_all = "camelCase"))]
pub struct Brand {
    /// Short lowercase machine identifier, unique within a catalog.
    pub name: Cow<'static, str>,
    /// Pattern matching the leading digits that identify the brand.
    ///
    /// Exposed as metadata only; brand identification never uses it.
    pub regexp_bin: Cow<'static, str>,
    /// Pattern matching a complete, well-formed card number (prefix and length).
    pub regexp_full: Cow<'static, str>,
    /// Pattern matching an acceptable CVV.
    pub regexp_cvv: Cow<'static, str>,
}

impl Brand {
    /// Creates a basic brand record.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        regexp_bin: impl Into<Cow<'static, str>>,
        regexp_full: impl Into<Cow<'static, str>>,
        regexp_cvv: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            regexp_bin: regexp_bin.into(),
            regexp_full: regexp_full.into(),
            regexp_cvv: regexp_cvv.into(),
        }
    }
}

/// Type of payment card product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "catalog-json", serde(rename_all = "lowercase"))]
pub enum CardType {
    /// Credit card - line of credit from issuer.
    Credit,
    /// Debit card - direct access to bank account.
    Debit,
    /// Prepaid card - preloaded with funds.
    Prepaid,
    /// Unknown card type.
    #[default]
    #[cfg_attr(feature = "catalog-json", serde(other))]
    Unknown,
}

impl CardType {
    /// Returns the lowercase identifier used in catalog data.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Prepaid => "prepaid",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a catalog type string. Anything unrecognised is `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "credit" => Self::Credit,
            "debit" => Self::Debit,
            "prepaid" => Self::Prepaid,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
            Self::Prepaid => "Prepaid",
            Self::Unknown => "Unknown",
        })
    }
}

/// Card number rules of a detailed brand record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberRules {
    /// Accepted total digit counts, ascending.
    pub lengths: Cow<'static, [u8]>,
    /// Whether the Luhn check is mandatory for this brand.
    pub luhn: bool,
}

/// CVV rules of a detailed brand record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
pub struct CvvRules {
    /// Accepted CVV lengths, ascending.
    ///
    /// JSON input may also give a single `length` number.
    #[cfg_attr(
        feature = "catalog-json",
        serde(alias = "length", deserialize_with = "json::one_or_many")
    )]
    pub lengths: Cow<'static, [u8]>,
}

/// A source rule a brand's patterns were generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "catalog-json", serde(rename_all = "camelCase"))]
pub struct BinPattern {
    /// Prefix pattern, such as `^6367`.
    pub bin: String,
    /// Number lengths this prefix is issued in. JSON may give a single number.
    #[cfg_attr(feature = "catalog-json", serde(deserialize_with = "json::one_or_many"))]
    pub length: Vec<u8>,
    /// CVV length for this prefix.
    pub cvv_length: u8,
    /// Whether numbers under this prefix carry a Luhn check digit.
    pub luhn: bool,
}

/// Issuer metadata for a single BIN.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
pub struct BinInfo {
    /// The BIN digits, usually 6 to 8 of them.
    pub bin: String,
    /// Product type issued under this BIN.
    #[cfg_attr(feature = "catalog-json", serde(rename = "type", default))]
    pub card_type: Option<CardType>,
    /// Product category, such as `classic` or `platinum`.
    #[cfg_attr(feature = "catalog-json", serde(default))]
    pub category: Option<String>,
    /// Issuing bank.
    #[cfg_attr(feature = "catalog-json", serde(default))]
    pub issuer: Option<String>,
    /// Issuing countries.
    #[cfg_attr(feature = "catalog-json", serde(default))]
    pub countries: Option<Vec<String>>,
}

/// Country code marking a brand issued worldwide.
pub const GLOBAL: &str = "GLOBAL";

/// Detailed brand record, joined 1:1 with [`Brand`] on `scheme == name`.
///
/// Only `number` and `cvv` take part in validation. The remaining fields are
/// descriptive metadata and are empty when a catalog does not provide them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
pub struct BrandDetailed {
    /// Machine identifier; equals the `name` of the matching [`Brand`].
    pub scheme: Cow<'static, str>,
    /// Human display name.
    pub brand: Cow<'static, str>,
    /// Card product type.
    #[cfg_attr(feature = "catalog-json", serde(rename = "type", default))]
    pub card_type: CardType,
    /// Number length and checksum rules.
    pub number: NumberRules,
    /// CVV length rules.
    pub cvv: CvvRules,
    /// Issuing countries: ISO 3166-1 alpha-2 codes, or [`GLOBAL`].
    #[cfg_attr(feature = "catalog-json", serde(default))]
    pub countries: Cow<'static, [Cow<'static, str>]>,
    /// Source rules the brand's patterns were generated from.
    #[cfg_attr(feature = "catalog-json", serde(default))]
    pub patterns: Vec<BinPattern>,
    /// Per-BIN issuer metadata.
    #[cfg_attr(
        feature = "catalog-json",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub bins: Vec<BinInfo>,
}

impl BrandDetailed {
    /// Returns true if `length` is one of the accepted number lengths.
    #[inline]
    pub fn accepts_length(&self, length: usize) -> bool {
        self.number.lengths.iter().any(|&l| l as usize == length)
    }

    /// Returns true if `length` is one of the accepted CVV lengths.
    #[inline]
    pub fn accepts_cvv_length(&self, length: usize) -> bool {
        self.cvv.lengths.iter().any(|&l| l as usize == length)
    }

    /// Returns true if numbers of this brand must pass the Luhn check.
    #[inline]
    pub fn requires_luhn(&self) -> bool {
        self.number.luhn
    }

    /// Returns true if the brand is issued in `country` or worldwide.
    ///
    /// ```
    /// use cc_identifier::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert!(catalog.detailed("elo").unwrap().is_issued_in("BR"));
    /// assert!(!catalog.detailed("elo").unwrap().is_issued_in("US"));
    /// assert!(catalog.detailed("visa").unwrap().is_issued_in("US"));
    /// ```
    pub fn is_issued_in(&self, country: &str) -> bool {
        self.countries
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country) || *c == GLOBAL)
    }

    /// Looks up issuer metadata for an exact BIN.
    pub fn bin_info(&self, bin: &str) -> Option<&BinInfo> {
        self.bins.iter().find(|b| b.bin == bin)
    }
}

/// An owned brand catalog: basic records in catalog order plus detailed records.
///
/// Catalog order is the order of `brands`. It defines the order of
/// [`Validator::list_brands`](crate::Validator::list_brands) and breaks ties
/// if two full-number patterns ever match the same input.
///
/// Building a `Catalog` performs no validation; that happens when a
/// [`Validator`](crate::Validator) is constructed from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "catalog-json", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Basic records, in catalog order.
    pub brands: Vec<Brand>,
    /// Detailed records.
    #[cfg_attr(feature = "catalog-json", serde(default))]
    pub detailed: Vec<BrandDetailed>,
}

impl Catalog {
    /// Creates a catalog from basic and detailed records.
    pub fn new<B, D>(brands: B, detailed: D) -> Self
    where
        B: IntoIterator<Item = Brand>,
        D: IntoIterator<Item = BrandDetailed>,
    {
        Self {
            brands: brands.into_iter().collect(),
            detailed: detailed.into_iter().collect(),
        }
    }

    /// Returns the built-in catalog.
    ///
    /// The records borrow from the static tables, so this does not copy any
    /// pattern text.
    pub fn builtin() -> Self {
        Self::new(BRANDS.iter().cloned(), BRANDS_DETAILED.iter().cloned())
    }

    /// Looks up a basic record by exact name.
    pub fn brand(&self, name: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.name == name)
    }

    /// Looks up a detailed record by exact scheme.
    pub fn detailed(&self, scheme: &str) -> Option<&BrandDetailed> {
        self.detailed.iter().find(|d| d.scheme == scheme)
    }

    /// Iterates over brand names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.brands.iter().map(|b| &*b.name)
    }

    /// Returns the number of basic records.
    #[inline]
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    /// Returns true if the catalog has no brands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}
