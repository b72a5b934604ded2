//! Error types for structured error handling.
//!
//! This module provides `VariateError`, the single error taxonomy used by
//! every uniform source and distribution generator. All variants belong to
//! the invalid-argument class: they are raised synchronously before any
//! computation, and there is no recovery path inside the library.

use thiserror::Error;

/// Categorised variate generation errors.
///
/// Every variant reports an invalid argument: a uniform value outside the
/// open unit interval, a distribution parameter outside its domain, or a
/// malformed linear-congruential configuration. Construction-time validation
/// means a successfully built generator can never fail to sample.
///
/// Composite generators propagate the first failure from a primitive
/// dependency unchanged, so callers always see the original failure kind.
///
/// # Examples
/// ```
/// use variate_core::types::VariateError;
///
/// let err = VariateError::UniformOutOfRange { value: 1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "uniform value 1 outside the open interval (0, 1)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariateError {
    /// Uniform value outside the open interval (0, 1).
    ///
    /// The endpoints are rejected because the transforms take logarithms of
    /// both `u` and `1 - u`. NaN is rejected for the same reason.
    #[error("uniform value {value} outside the open interval (0, 1)")]
    UniformOutOfRange {
        /// The offending value.
        value: f64,
    },

    /// Distribution parameter outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// LCG seed outside the configuration's valid range.
    #[error("seed {seed} outside the valid range (1, {modulus})")]
    SeedOutOfRange {
        /// The rejected seed.
        seed: u64,
        /// Modulus of the configuration the seed was checked against.
        modulus: u64,
    },

    /// Degenerate linear-congruential parameterisation.
    #[error("invalid LCG parameter '{name}': got {value}")]
    InvalidLcgParameter {
        /// Parameter name (`modulus` or `multiplier`).
        name: &'static str,
        /// The rejected value.
        value: u64,
    },
}

impl VariateError {
    /// Convenience constructor for [`VariateError::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
