//! Open-unit-interval validation for uniform variates.
//!
//! Every transform in the engine takes logarithms of `u`, `1 - u`, or both,
//! so the contract for a uniform variate is the strictly open interval
//! `0 < u < 1`. Both endpoints are rejected everywhere; there is no
//! half-open variant.

use crate::types::VariateError;

/// Returns `true` when `x` lies strictly inside the open interval (0, 1).
///
/// NaN is never inside the interval.
///
/// # Examples
/// ```
/// use variate_core::unit::is_unit_open;
///
/// assert!(is_unit_open(0.5));
/// assert!(!is_unit_open(0.0));
/// assert!(!is_unit_open(1.0));
/// assert!(!is_unit_open(f64::NAN));
/// ```
#[inline]
pub fn is_unit_open(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

/// Validates that `x` lies strictly inside the open interval (0, 1).
///
/// Returns the value unchanged on success so the check composes with `?`
/// at the top of a transform.
///
/// # Errors
/// Returns [`VariateError::UniformOutOfRange`] when `x` is an endpoint,
/// outside the interval, or NaN.
#[inline]
pub fn ensure_unit_open(x: f64) -> Result<f64, VariateError> {
    if is_unit_open(x) {
        Ok(x)
    } else {
        Err(VariateError::UniformOutOfRange { value: x })
    }
}
