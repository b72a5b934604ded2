//! Primitive inverse-CDF transforms.
//!
//! Each distribution here maps one uniform draw (two for Laplace) to a
//! variate through a closed-form expression. These are the leaves of the
//! composition graph: the composite generators in
//! [`composite`](super::composite) are built from them.

use variate_core::types::VariateError;
use variate_core::unit::ensure_unit_open;

use crate::source::UniformSource;

/// Weibull distribution with rate `lambda` and shape `beta`.
///
/// Commonly used to model time to failure. The inverse-CDF map is
/// `x = (-1/λ) · ln(u)^(1/β)`.
///
/// # Examples
///
/// ```rust
/// use variate_engine::dist::Weibull;
///
/// let weibull = Weibull::new(2.0, 1.0).unwrap();
/// let x = weibull.inverse_cdf(0.5).unwrap();
/// assert!((x - (-0.5) * 0.5_f64.ln()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weibull {
    lambda: f64,
    beta: f64,
}

impl Weibull {
    /// Creates a Weibull distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `lambda` is a
    /// positive finite rate and `beta` a non-zero finite shape.
    pub fn new(lambda: f64, beta: f64) -> Result<Self, VariateError> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(VariateError::invalid_parameter(
                "lambda",
                format!("rate must be positive and finite, got {lambda}"),
            ));
        }
        if !(beta.is_finite() && beta != 0.0) {
            return Err(VariateError::invalid_parameter(
                "beta",
                format!("shape must be non-zero and finite, got {beta}"),
            ));
        }
        Ok(Self { lambda, beta })
    }

    /// Returns the rate parameter λ.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the shape parameter β.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline]
    fn transform(&self, u: f64) -> f64 {
        (-1.0 / self.lambda) * u.ln().powf(1.0 / self.beta)
    }

    /// Maps an explicit uniform draw through the inverse CDF.
    ///
    /// # Errors
    /// Returns [`VariateError::UniformOutOfRange`] unless `0 < u < 1`.
    pub fn inverse_cdf(&self, u: f64) -> Result<f64, VariateError> {
        Ok(self.transform(ensure_unit_open(u)?))
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        self.transform(source.next_uniform())
    }
}

/// Exponential distribution with rate `lambda`.
///
/// Models the time between events in a Poisson process. Implemented as the
/// Weibull special case β = 1.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponential {
    inner: Weibull,
}

impl Exponential {
    /// Creates an exponential distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `lambda` is a
    /// positive finite rate.
    pub fn new(lambda: f64) -> Result<Self, VariateError> {
        Ok(Self {
            inner: Weibull::new(lambda, 1.0)?,
        })
    }

    /// Returns the rate parameter λ.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.inner.lambda()
    }

    /// Maps an explicit uniform draw through the inverse CDF
    /// `x = (-1/λ) · ln(u)`.
    ///
    /// # Errors
    /// Returns [`VariateError::UniformOutOfRange`] unless `0 < u < 1`.
    pub fn inverse_cdf(&self, u: f64) -> Result<f64, VariateError> {
        self.inner.inverse_cdf(u)
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        self.inner.sample(source)
    }
}

/// Laplace distribution centred at `mu` with scale `b`.
///
/// Two exponential distributions with rate `1/b` mirrored around `mu`:
/// the variate is `mu + Exp(1/b) - Exp(1/b)` over two independent draws.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Laplace {
    mu: f64,
    tail: Exponential,
}

impl Laplace {
    /// Creates a Laplace distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `mu` is finite and
    /// `b` is a positive finite scale.
    pub fn new(mu: f64, b: f64) -> Result<Self, VariateError> {
        if !mu.is_finite() {
            return Err(VariateError::invalid_parameter(
                "mu",
                format!("location must be finite, got {mu}"),
            ));
        }
        if !(b.is_finite() && b > 0.0) {
            return Err(VariateError::invalid_parameter(
                "b",
                format!("scale must be positive and finite, got {b}"),
            ));
        }
        Ok(Self {
            mu,
            tail: Exponential::new(1.0 / b)?,
        })
    }

    /// Returns the location parameter μ.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the scale parameter b.
    #[inline]
    pub fn b(&self) -> f64 {
        1.0 / self.tail.lambda()
    }

    /// Maps two explicit uniform draws to a variate.
    ///
    /// # Errors
    /// Returns [`VariateError::UniformOutOfRange`] unless both draws are
    /// strictly inside (0, 1).
    pub fn from_uniforms(&self, u1: f64, u2: f64) -> Result<f64, VariateError> {
        Ok(self.mu + self.tail.inverse_cdf(u1)? - self.tail.inverse_cdf(u2)?)
    }

    /// Draws a variate using two independent draws from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        self.mu + self.tail.sample(source) - self.tail.sample(source)
    }
}

/// Triangular distribution on `[min, max]` peaking at `mode`.
///
/// Useful when only the measures of central tendency of a process are
/// known. The inverse CDF is piecewise, split at
/// `u_mid = (mode - min) / (max - min)`; a draw equal to the split point is
/// routed to the lower branch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangular {
    min: f64,
    mode: f64,
    max: f64,
}

impl Triangular {
    /// Creates a triangular distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless all bounds are
    /// finite, `max > min` and `min <= mode <= max`.
    pub fn new(min: f64, mode: f64, max: f64) -> Result<Self, VariateError> {
        if !(min.is_finite() && mode.is_finite() && max.is_finite()) {
            return Err(VariateError::invalid_parameter(
                "bounds",
                format!("all bounds must be finite, got {min}, {mode}, {max}"),
            ));
        }
        if min >= max {
            return Err(VariateError::invalid_parameter(
                "max",
                format!("must exceed min, got min={min}, max={max}"),
            ));
        }
        if mode < min || mode > max {
            return Err(VariateError::invalid_parameter(
                "mode",
                format!("must lie in [min, max], got min={min}, mode={mode}, max={max}"),
            ));
        }
        Ok(Self { min, mode, max })
    }

    /// Returns the lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the mode.
    #[inline]
    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Returns the upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    fn transform(&self, u: f64) -> f64 {
        let range = self.max - self.min;
        let u_mid = (self.mode - self.min) / range;
        if u <= u_mid {
            self.min + (u * range * (self.mode - self.min)).sqrt()
        } else {
            self.max - ((1.0 - u) * range * (self.max - self.mode)).sqrt()
        }
    }

    /// Maps an explicit uniform draw through the piecewise inverse CDF.
    ///
    /// # Errors
    /// Returns [`VariateError::UniformOutOfRange`] unless `0 < u < 1`.
    pub fn inverse_cdf(&self, u: f64) -> Result<f64, VariateError> {
        Ok(self.transform(ensure_unit_open(u)?))
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        self.transform(source.next_uniform())
    }
}

/// Bernoulli distribution with success probability `p`.
///
/// The outcome of a single binary event: 1 when `u <= p`, 0 otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a Bernoulli distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `0 <= p <= 1`.
    pub fn new(p: f64) -> Result<Self, VariateError> {
        if !(p.is_finite() && (0.0..=1.0).contains(&p)) {
            return Err(VariateError::invalid_parameter(
                "p",
                format!("probability must lie in [0, 1], got {p}"),
            ));
        }
        Ok(Self { p })
    }

    /// Returns the success probability p.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Maps an explicit uniform draw to 0 or 1.
    ///
    /// # Errors
    /// Returns [`VariateError::UniformOutOfRange`] unless `0 < u < 1`.
    pub fn from_uniform(&self, u: f64) -> Result<u64, VariateError> {
        let u = ensure_unit_open(u)?;
        Ok(u64::from(u <= self.p))
    }

    /// Draws a trial outcome from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> u64 {
        u64::from(source.next_uniform() <= self.p)
    }
}

/// Geometric distribution with success probability `p`.
///
/// The number of trials up to and including the first success in a
/// sequence of independent Bernoulli trials:
/// `x = ceil(ln(1 - u) / ln(1 - p))`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates a geometric distribution.
    ///
    /// The probability must be strictly inside (0, 1): both endpoints make
    /// `ln(1 - p)` degenerate in the inverse-CDF map.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `0 < p < 1`.
    pub fn new(p: f64) -> Result<Self, VariateError> {
        if !(p.is_finite() && p > 0.0 && p < 1.0) {
            return Err(VariateError::invalid_parameter(
                "p",
                format!("probability must lie strictly inside (0, 1), got {p}"),
            ));
        }
        Ok(Self { p })
    }

    /// Returns the success probability p.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    #[inline]
    fn transform(&self, u: f64) -> u64 {
        ((1.0 - u).ln() / (1.0 - self.p).ln()).ceil() as u64
    }

    /// Maps an explicit uniform draw to a trial count.
    ///
    /// # Errors
    /// Returns [`VariateError::UniformOutOfRange`] unless `0 < u < 1`.
    pub fn from_uniform(&self, u: f64) -> Result<u64, VariateError> {
        Ok(self.transform(ensure_unit_open(u)?))
    }

    /// Draws a trial count from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> u64 {
        self.transform(source.next_uniform())
    }
}
