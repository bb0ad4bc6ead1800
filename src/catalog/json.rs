//! JSON catalog loader.
//!
//! # Feature
//!
//! Requires the `catalog-json` feature.
//!
//! # Format
//!
//! ```json
//! {
//!   "brands": [
//!     {
//!       "name": "troy",
//!       "regexpBin": "^9792",
//!       "regexpFull": "^9792[0-9]{12}$",
//!       "regexpCvv": "^[0-9]{3}$"
//!     }
//!   ],
//!   "detailed": [
//!     {
//!       "scheme": "troy",
//!       "brand": "Troy",
//!       "type": "credit",
//!       "number": { "lengths": [16], "luhn": true },
//!       "cvv": { "lengths": [3] }
//!     }
//!   ]
//! }
//! ```
//!
//! `detailed` may be omitted, and so may `type` (read as `unknown`). Loading
//! only parses; the catalog is checked when a
//! [`Validator`](crate::Validator) is built from it.
//!
//! Records from generated brand data files load as they are. Their
//! look-ahead `regexpFull` patterns compile, `cvv.length` may be a single
//! number, and the `countries`, `patterns` and `bins` metadata is kept.
//! Fields this crate has no use for, such as `priorityOver` and `metadata`,
//! are ignored.

use super::Catalog;
use crate::error::CatalogError;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a length list given either as one number or as an array.
pub(super) fn one_or_many<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<Vec<u8>>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lengths {
        One(u8),
        Many(Vec<u8>),
    }

    Ok(match Lengths::deserialize(deserializer)? {
        Lengths::One(n) => vec![n],
        Lengths::Many(v) => v,
    }
    .into())
}

impl Catalog {
    /// Parses a catalog from a JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_identifier::{Catalog, Validator};
    ///
    /// let json = r#"{
    ///     "brands": [{
    ///         "name": "troy",
    ///         "regexpBin": "^9792",
    ///         "regexpFull": "^9792[0-9]{12}$",
    ///         "regexpCvv": "^[0-9]{3}$"
    ///     }]
    /// }"#;
    ///
    /// let catalog = Catalog::from_json_str(json).unwrap();
    /// let validator = Validator::from_catalog(catalog).unwrap();
    /// assert_eq!(validator.find_brand("9792000000000000"), Some("troy"));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        debug!(
            brands = catalog.brands.len(),
            detailed = catalog.detailed.len(),
            "parsed JSON catalog"
        );
        Ok(catalog)
    }

    /// Parses a catalog from a reader.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// ```rust,ignore
    /// use cc_identifier::{Catalog, Validator};
    ///
    /// let catalog = Catalog::from_json_file("brands.json")?;
    /// let validator = Validator::from_catalog(catalog)?;
    /// ```
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
