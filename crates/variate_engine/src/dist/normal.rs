//! Standard-normal generators and the affine normal distribution.
//!
//! Two independent algorithms produce standard-normal variates:
//!
//! - The **polar method** (default): exact rejection sampling over the unit
//!   disc. Unbounded but almost-surely-terminating loop; acceptance
//!   probability is π/4 per pair.
//! - The **crude method**: the Abramowitz–Stegun 26.2.23 rational
//!   approximation of the inverse normal CDF. One draw per variate, at the
//!   cost of an absolute error of at most 4.5e-4.
//!
//! [`Normal`] scales a standard-normal variate to arbitrary mean and
//! variance.

use variate_core::types::VariateError;
use variate_core::unit::ensure_unit_open;

use crate::source::UniformSource;

// Abramowitz & Stegun 26.2.23 rational polynomial coefficients.
const C0: f64 = 2.515517;
const C1: f64 = 0.802853;
const C2: f64 = 0.010328;
const D1: f64 = 1.432788;
const D2: f64 = 0.189269;
const D3: f64 = 0.001308;

/// Maximum absolute error of [`standard_normal_crude`] against the exact
/// inverse normal CDF.
pub const CRUDE_ABSOLUTE_ERROR: f64 = 4.5e-4;

/// Draws one standard-normal variate via the polar method.
///
/// Half of the work is discarded: the polar method always produces an
/// antithetic pair, and this convenience form returns only the first
/// member. Use [`standard_normal_pair`] when both are wanted.
pub fn standard_normal<S: UniformSource>(source: &mut S) -> f64 {
    standard_normal_pair(source).0
}

/// Draws an antithetic pair of standard-normal variates via the polar
/// method.
///
/// Draws pairs `(u1, u2)`, centres them onto `[-1, 1]²` and rejects any
/// pair landing outside the open unit disc. The centre point `w = 0`
/// (possible when both draws are exactly 0.5) is rejected along with the
/// overflow region, since it would feed `ln(0)`. Rejection redraws the
/// whole pair; the loop is iterative and deliberately uncapped — a cap
/// would change the distribution.
pub fn standard_normal_pair<S: UniformSource>(source: &mut S) -> (f64, f64) {
    loop {
        let v1 = 2.0 * source.next_uniform() - 1.0;
        let v2 = 2.0 * source.next_uniform() - 1.0;
        let w = v1 * v1 + v2 * v2;
        if w >= 1.0 || w == 0.0 {
            continue;
        }
        let y = (-2.0 * w.ln() / w).sqrt();
        return (v1 * y, v2 * y);
    }
}

#[inline]
fn crude_transform(u: f64) -> f64 {
    let t = (-2.0 * u.min(1.0 - u).ln()).sqrt();
    let numerator = C0 + C1 * t + C2 * t * t;
    let denominator = 1.0 + D1 * t + D2 * t * t + D3 * t * t * t;
    let magnitude = t - numerator / denominator;
    if u > 0.5 {
        magnitude
    } else if u < 0.5 {
        -magnitude
    } else {
        0.0
    }
}

/// Maps an explicit uniform draw to an approximate standard-normal variate.
///
/// Rational approximation of the inverse normal CDF
/// (Abramowitz & Stegun 26.2.23): `t = sqrt(-2 ln(min(u, 1-u)))`, corrected
/// by a fixed-coefficient rational polynomial and signed by `u - 0.5`. The
/// absolute error is at most [`CRUDE_ABSOLUTE_ERROR`] — an explicit
/// accuracy tradeoff against the exact polar method in exchange for a
/// single draw and no rejection loop.
///
/// # Errors
/// Returns [`VariateError::UniformOutOfRange`] unless `0 < u < 1`.
pub fn standard_normal_crude(u: f64) -> Result<f64, VariateError> {
    Ok(crude_transform(ensure_unit_open(u)?))
}

/// Draws one approximate standard-normal variate via the crude method.
pub fn sample_crude<S: UniformSource>(source: &mut S) -> f64 {
    crude_transform(source.next_uniform())
}

/// Normal distribution with the given mean and variance.
///
/// The variate is the affine transform `mean + sqrt(variance) · z` of a
/// standard-normal `z`, drawn via the polar method or supplied by the
/// caller.
///
/// # Examples
///
/// ```rust
/// use variate_engine::dist::Normal;
///
/// let normal = Normal::new(10.0, 4.0).unwrap();
/// assert_eq!(normal.from_standard(0.0), 10.0);
/// assert_eq!(normal.from_standard(1.0), 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    mean: f64,
    variance: f64,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `mean` is finite
    /// and `variance` is positive and finite.
    pub fn new(mean: f64, variance: f64) -> Result<Self, VariateError> {
        if !mean.is_finite() {
            return Err(VariateError::invalid_parameter(
                "mean",
                format!("must be finite, got {mean}"),
            ));
        }
        if !(variance.is_finite() && variance > 0.0) {
            return Err(VariateError::invalid_parameter(
                "variance",
                format!("must be positive and finite, got {variance}"),
            ));
        }
        Ok(Self { mean, variance })
    }

    /// Returns the mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the variance.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Scales a caller-supplied standard-normal variate.
    #[inline]
    pub fn from_standard(&self, z: f64) -> f64 {
        self.mean + self.variance.sqrt() * z
    }

    /// Draws a variate, generating the underlying standard normal via the
    /// polar method.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        self.from_standard(standard_normal(source))
    }
}
