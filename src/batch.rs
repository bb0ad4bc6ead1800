//! Batch brand identification.
//!
//! A [`Validator`] is immutable after construction, so one instance can be
//! shared by reference across a batch, and across rayon worker threads with
//! the `parallel` feature.

use crate::validator::Validator;

/// Identifies the brand of every card number in a batch.
///
/// Returns one entry per input, in input order.
///
/// # Example
///
/// ```
/// use cc_identifier::{batch::find_brands, Validator};
///
/// let validator = Validator::new().unwrap();
/// let pans = ["4012001037141112", "1234567890123456", "378282246310005"];
/// let brands = find_brands(&validator, &pans);
/// assert_eq!(brands, vec![Some("visa"), None, Some("amex")]);
/// ```
#[inline]
pub fn find_brands<'v, S: AsRef<str>>(
    validator: &'v Validator,
    pans: &[S],
) -> Vec<Option<&'v str>> {
    pans.iter().map(|p| validator.find_brand(p.as_ref())).collect()
}

/// Identifies brands in parallel using rayon.
///
/// Same result as [`find_brands`].
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn find_brands_parallel<'v, S: AsRef<str> + Sync>(
    validator: &'v Validator,
    pans: &[S],
) -> Vec<Option<&'v str>> {
    use rayon::prelude::*;
    pans.par_iter()
        .map(|p| validator.find_brand(p.as_ref()))
        .collect()
}

/// Counts supported and unsupported card numbers in a batch.
///
/// Doesn't allocate for results.
///
/// # Returns
///
/// Tuple of (supported_count, unsupported_count)
///
/// # Example
///
/// ```
/// use cc_identifier::{batch::count_supported, Validator};
///
/// let validator = Validator::new().unwrap();
/// let pans = ["4012001037141112", "1234567890123456", "5533798818319497"];
/// assert_eq!(count_supported(&validator, &pans), (2, 1));
/// ```
pub fn count_supported<S: AsRef<str>>(validator: &Validator, pans: &[S]) -> (usize, usize) {
    let supported = pans
        .iter()
        .filter(|p| validator.is_supported(p.as_ref()))
        .count();

    (supported, pans.len() - supported)
}
