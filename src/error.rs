//! Startup errors raised while building a [`Validator`](crate::Validator).
//!
//! Lookups never fail: an unknown card number, brand name or CVV is a plain
//! `None`/`false`. The only failure point is construction, when the catalog
//! is checked and its patterns are compiled.

use std::fmt;

/// Which pattern of a brand record failed to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternField {
    /// The BIN prefix pattern (`regexp_bin`).
    Bin,
    /// The full-number pattern (`regexp_full`).
    Full,
    /// The CVV pattern (`regexp_cvv`).
    Cvv,
}

impl PatternField {
    /// Returns the catalog field name.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bin => "regexp_bin",
            Self::Full => "regexp_full",
            Self::Cvv => "regexp_cvv",
        }
    }
}

impl fmt::Display for PatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that make a catalog unusable.
#[derive(Debug)]
pub enum CatalogError {
    /// A basic record has an empty name.
    EmptyName {
        /// Position of the record in catalog order.
        index: usize,
    },

    /// Two basic records share a name.
    DuplicateBrand {
        /// The repeated name.
        name: String,
    },

    /// Two detailed records share a scheme.
    DuplicateScheme {
        /// The repeated scheme.
        scheme: String,
    },

    /// A detailed record refers to a scheme with no basic record.
    UnknownScheme {
        /// The orphaned scheme.
        scheme: String,
    },

    /// A detailed record lists no accepted number lengths.
    EmptyLengths {
        /// The scheme of the offending record.
        scheme: String,
    },

    /// A pattern string is not a valid regular expression.
    InvalidPattern {
        /// Name of the brand owning the pattern.
        brand: String,
        /// Which of the brand's patterns failed.
        field: PatternField,
        /// The underlying compile error, from `regex` or, for look-around
        /// patterns, from `fancy-regex`.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to read a catalog file.
    #[cfg(feature = "catalog-json")]
    Io(std::io::Error),

    /// Failed to parse a JSON catalog.
    #[cfg(feature = "catalog-json")]
    Json(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName { index } => {
                write!(f, "brand at position {} has an empty name", index)
            }

            Self::DuplicateBrand { name } => {
                write!(f, "brand '{}' appears more than once", name)
            }

            Self::DuplicateScheme { scheme } => {
                write!(f, "detailed scheme '{}' appears more than once", scheme)
            }

            Self::UnknownScheme { scheme } => {
                write!(f, "detailed scheme '{}' has no matching brand", scheme)
            }

            Self::EmptyLengths { scheme } => {
                write!(f, "scheme '{}' lists no accepted number lengths", scheme)
            }

            Self::InvalidPattern {
                brand,
                field,
                source,
            } => {
                write!(f, "invalid {} for brand '{}': {}", field, brand, source)
            }

            #[cfg(feature = "catalog-json")]
            Self::Io(e) => write!(f, "IO error: {}", e),

            #[cfg(feature = "catalog-json")]
            Self::Json(e) => write!(f, "JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(&**source),
            #[cfg(feature = "catalog-json")]
            Self::Io(e) => Some(e),
            #[cfg(feature = "catalog-json")]
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "catalog-json")]
impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "catalog-json")]
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CatalogError::DuplicateBrand {
                name: "visa".to_string()
            }
            .to_string(),
            "brand 'visa' appears more than once"
        );

        assert_eq!(
            CatalogError::UnknownScheme {
                scheme: "aura".to_string()
            }
            .to_string(),
            "detailed scheme 'aura' has no matching brand"
        );

        assert_eq!(
            CatalogError::EmptyName { index: 3 }.to_string(),
            "brand at position 3 has an empty name"
        );
    }

    #[test]
    fn test_invalid_pattern_has_source() {
        let source = regex::Regex::new("[0-9").unwrap_err();
        let err = CatalogError::InvalidPattern {
            brand: "visa".to_string(),
            field: PatternField::Full,
            source: Box::new(source),
        };
        assert!(err.to_string().starts_with("invalid regexp_full for brand 'visa'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
    }
}
