//! The brand identification engine.
//!
//! A [`Validator`] is built once from a [`Catalog`], compiling every pattern
//! up front. After that it is immutable: every operation is a pure read over
//! the compiled patterns, so one instance can be shared across threads
//! without locking.
//!
//! # Matching policy
//!
//! [`Validator::find_brand`] dispatches on the full-number pattern only, so
//! length is part of brand assignment: a 15-digit number starting with 4 is
//! not Visa. The BIN pattern is kept as metadata ([`Validator::matches_bin`]).
//!
//! Inputs are not normalized. Spaces, hyphens or any other non-digit make a
//! card number unrecognised.
//!
//! # Pattern dialect
//!
//! Catalog patterns are compiled by `regex` with Unicode classes turned off,
//! so `\d` means `[0-9]` and never matches a non-ASCII digit. Patterns with
//! look-around, such as the `^(?=.{13,19}$)(?:4|6367)[0-9]*$` form found in
//! generated brand data files, are compiled by `fancy-regex` instead; those
//! never match input containing non-ASCII characters.

use crate::catalog::{Brand, BrandDetailed, Catalog};
use crate::error::{CatalogError, PatternField};
use crate::luhn::luhn;
use regex::bytes::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, warn};

/// Longest CVV tried when cross-checking patterns against declared lengths.
const MAX_CHECKED_CVV_LENGTH: usize = 8;

/// Look-around openers that `regex` does not support.
const LOOK_AROUND: [&str; 4] = ["(?=", "(?!", "(?<=", "(?<!"];

/// One compiled catalog pattern.
#[derive(Debug, Clone)]
enum Matcher {
    Plain(Regex),
    LookAround(fancy_regex::Regex),
}

impl Matcher {
    fn new(pattern: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        if LOOK_AROUND.iter().any(|op| pattern.contains(op)) {
            return Ok(Self::LookAround(fancy_regex::Regex::new(pattern)?));
        }
        let re = RegexBuilder::new(pattern).unicode(false).build()?;
        Ok(Self::Plain(re))
    }

    #[inline]
    fn is_match(&self, input: &str) -> bool {
        match self {
            Self::Plain(re) => re.is_match(input.as_bytes()),
            // A backtracking limit hit counts as no match
            Self::LookAround(re) => input.is_ascii() && re.is_match(input).unwrap_or(false),
        }
    }
}

/// Compiled patterns for one brand, parallel to `Catalog::brands`.
#[derive(Debug, Clone)]
struct BrandMatcher {
    bin: Matcher,
    full: Matcher,
    cvv: Matcher,
    /// Index of the matching record in `Catalog::detailed`.
    detailed: Option<usize>,
}

/// Card brand identifier and validator over a compiled brand catalog.
///
/// # Example
///
/// ```
/// use cc_identifier::Validator;
///
/// let validator = Validator::new().unwrap();
///
/// assert_eq!(validator.find_brand("4012001037141112"), Some("visa"));
/// assert_eq!(validator.find_brand("378282246310005"), Some("amex"));
/// assert_eq!(validator.find_brand("1234567890123456"), None);
///
/// assert!(validator.validate_cvv("1234", "amex"));
/// assert!(!validator.validate_cvv("1234", "visa"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Catalog,
    compiled: Vec<BrandMatcher>,
}

impl Validator {
    /// Builds a validator over the built-in catalog.
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_catalog(Catalog::builtin())
    }

    /// Builds a validator over an explicit catalog given as two tables.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_identifier::{Brand, BrandDetailed, CardType, Validator};
    /// use cc_identifier::catalog::{CvvRules, NumberRules};
    ///
    /// let brands = vec![Brand::new("troy", "^9792", "^9792[0-9]{12}$", "^[0-9]{3}$")];
    /// let detailed = vec![BrandDetailed {
    ///     scheme: "troy".into(),
    ///     brand: "Troy".into(),
    ///     card_type: CardType::Credit,
    ///     number: NumberRules { lengths: vec![16].into(), luhn: true },
    ///     cvv: CvvRules { lengths: vec![3].into() },
    ///     ..Default::default()
    /// }];
    ///
    /// let validator = Validator::with_catalog(brands, detailed).unwrap();
    /// assert_eq!(validator.find_brand("9792000000000000"), Some("troy"));
    /// assert_eq!(validator.list_brands(), vec!["troy"]);
    /// ```
    pub fn with_catalog<B, D>(brands: B, detailed: D) -> Result<Self, CatalogError>
    where
        B: IntoIterator<Item = Brand>,
        D: IntoIterator<Item = BrandDetailed>,
    {
        Self::from_catalog(Catalog::new(brands, detailed))
    }

    /// Builds a validator over a catalog.
    ///
    /// Checks the catalog's structure, then compiles every pattern. The
    /// full-number and CVV patterns are anchored at both ends, whether or not
    /// the catalog anchors them itself.
    ///
    /// # Errors
    ///
    /// Fails on an empty or duplicate brand name, a duplicate or orphaned
    /// detailed scheme, an empty length list, or a pattern that does not
    /// compile.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        check_structure(&catalog)?;

        let mut compiled = Vec::with_capacity(catalog.brands.len());
        for brand in &catalog.brands {
            let detailed = catalog
                .detailed
                .iter()
                .position(|d| d.scheme == brand.name);

            if detailed.is_none() {
                debug!(brand = %brand.name, "brand has no detailed record");
            }

            compiled.push(BrandMatcher {
                bin: compile(brand, PatternField::Bin, &brand.regexp_bin)?,
                full: compile(brand, PatternField::Full, &anchored(&brand.regexp_full))?,
                cvv: compile(brand, PatternField::Cvv, &anchored(&brand.regexp_cvv))?,
                detailed,
            });
        }

        let validator = Self { catalog, compiled };
        validator.check_cvv_lengths();

        debug!(brands = validator.compiled.len(), "validator ready");
        Ok(validator)
    }

    /// Returns the name of the brand whose full-number pattern matches `pan`.
    ///
    /// Returns `None` for an empty input or when no brand matches. If a
    /// catalog ever lets two patterns match, the first in catalog order wins.
    #[inline]
    pub fn find_brand(&self, pan: &str) -> Option<&str> {
        self.find_index(pan).map(|i| &*self.catalog.brands[i].name)
    }

    /// Identifies `pan` and returns the brand's detailed record.
    pub fn find_brand_detailed(&self, pan: &str) -> Option<&BrandDetailed> {
        let index = self.find_index(pan)?;
        self.compiled[index]
            .detailed
            .map(|d| &self.catalog.detailed[d])
    }

    /// Returns true if `pan` belongs to a known brand.
    #[inline]
    pub fn is_supported(&self, pan: &str) -> bool {
        self.find_index(pan).is_some()
    }

    /// Identifies `pan` and checks its Luhn digit where the brand requires it.
    ///
    /// A brand without a detailed record is treated as requiring Luhn.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_identifier::Validator;
    ///
    /// let validator = Validator::new().unwrap();
    /// assert_eq!(validator.validate("4012001037141112"), Some("visa"));
    /// // Right shape for Visa, wrong check digit
    /// assert_eq!(validator.validate("4012001037141113"), None);
    /// ```
    pub fn validate(&self, pan: &str) -> Option<&str> {
        let index = self.find_index(pan)?;
        let requires_luhn = self.compiled[index]
            .detailed
            .map_or(true, |d| self.catalog.detailed[d].requires_luhn());

        if requires_luhn && !luhn(pan) {
            return None;
        }
        Some(&*self.catalog.brands[index].name)
    }

    /// Returns true if `brand_name` exists and its CVV pattern matches `cvv`.
    ///
    /// The CVV pattern is authoritative; the detailed `cvv.lengths` list is
    /// not consulted.
    pub fn validate_cvv(&self, cvv: &str, brand_name: &str) -> bool {
        if cvv.is_empty() {
            return false;
        }

        self.position(brand_name)
            .map(|i| self.compiled[i].cvv.is_match(cvv))
            .unwrap_or(false)
    }

    /// Returns true if `brand_name` exists and its BIN pattern matches the
    /// start of `pan`.
    pub fn matches_bin(&self, pan: &str, brand_name: &str) -> bool {
        if pan.is_empty() {
            return false;
        }

        self.position(brand_name)
            .map(|i| self.compiled[i].bin.is_match(pan))
            .unwrap_or(false)
    }

    /// Looks up a basic record by exact name.
    #[inline]
    pub fn brand_info(&self, name: &str) -> Option<&Brand> {
        self.catalog.brand(name)
    }

    /// Looks up a detailed record by exact scheme.
    #[inline]
    pub fn brand_info_detailed(&self, scheme: &str) -> Option<&BrandDetailed> {
        self.catalog.detailed(scheme)
    }

    /// Returns every brand name in catalog order.
    pub fn list_brands(&self) -> Vec<&str> {
        self.catalog.names().collect()
    }

    /// Returns the catalog this validator was built from.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn find_index(&self, pan: &str) -> Option<usize> {
        if pan.is_empty() {
            return None;
        }

        self.compiled.iter().position(|c| c.full.is_match(pan))
    }

    fn position(&self, brand_name: &str) -> Option<usize> {
        self.catalog.brands.iter().position(|b| b.name == brand_name)
    }

    /// Warns about brands whose CVV pattern disagrees with `cvv.lengths`.
    fn check_cvv_lengths(&self) {
        for (brand, compiled) in self.catalog.brands.iter().zip(&self.compiled) {
            let Some(detailed) = compiled.detailed.map(|d| &self.catalog.detailed[d]) else {
                continue;
            };

            let mismatched: Vec<usize> = (1..=MAX_CHECKED_CVV_LENGTH)
                .filter(|&len| {
                    let sample = "0".repeat(len);
                    compiled.cvv.is_match(&sample) != detailed.accepts_cvv_length(len)
                })
                .collect();

            if !mismatched.is_empty() {
                warn!(
                    brand = %brand.name,
                    lengths = ?mismatched,
                    declared = ?detailed.cvv.lengths,
                    "CVV pattern disagrees with declared CVV lengths"
                );
            }
        }
    }
}

/// Wraps a pattern so it only matches the whole input.
fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

fn compile(brand: &Brand, field: PatternField, pattern: &str) -> Result<Matcher, CatalogError> {
    Matcher::new(pattern).map_err(|source| CatalogError::InvalidPattern {
        brand: brand.name.to_string(),
        field,
        source,
    })
}

fn check_structure(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut names: HashSet<&str> = HashSet::with_capacity(catalog.brands.len());
    for (index, brand) in catalog.brands.iter().enumerate() {
        let name: &str = &brand.name;
        if name.is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if !names.insert(name) {
            return Err(CatalogError::DuplicateBrand {
                name: name.to_string(),
            });
        }
    }

    let mut schemes: HashSet<&str> = HashSet::with_capacity(catalog.detailed.len());
    for detailed in &catalog.detailed {
        let scheme: &str = &detailed.scheme;
        if !schemes.insert(scheme) {
            return Err(CatalogError::DuplicateScheme {
                scheme: scheme.to_string(),
            });
        }
        if !names.contains(scheme) {
            return Err(CatalogError::UnknownScheme {
                scheme: scheme.to_string(),
            });
        }
        if detailed.number.lengths.is_empty() {
            return Err(CatalogError::EmptyLengths {
                scheme: scheme.to_string(),
            });
        }
    }

    Ok(())
}
