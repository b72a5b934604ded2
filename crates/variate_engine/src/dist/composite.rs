//! Composite generators built from the primitives and normals.
//!
//! Each distribution here is a convolution (sum of independent simpler
//! variates), an acceptance loop, or a ratio of simpler variates. A
//! composite holds its primitive dependencies as plain fields and passes
//! the same source capability down to them, so every trial draws fresh
//! independent uniforms and the dependency graph stays explicit.
//!
//! Parameter validation happens in the primitives: a composite constructor
//! forwards the failure unchanged, so callers always see the original
//! failure kind.

use variate_core::types::VariateError;

use super::normal::standard_normal;
use super::primitive::{Bernoulli, Geometric};
use crate::source::UniformSource;

/// Largest rate at which [`Poisson`] uses the multiplicative acceptance
/// method; above it the normal approximation takes over.
///
/// The value is part of the generator's observable behaviour and is kept
/// fixed for compatibility.
pub const POISSON_DIRECT_LIMIT: f64 = 20.0;

/// Poisson distribution with rate `lambda`.
///
/// The number of events in a unit interval of a Poisson process. For
/// `lambda <= 20` the variate is produced by multiplicative acceptance
/// counting: a running product of uniform draws starting at 1 is
/// accumulated until it falls below `exp(-lambda)`, and the variate is the
/// number of completed multiplications minus one. For larger rates the
/// normal approximation `max(0, floor(lambda + sqrt(lambda)·Z + 0.5))` is
/// used instead — an accuracy/performance tradeoff, since the acceptance
/// loop draws on the order of `lambda` uniforms per variate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a Poisson distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `lambda` is a
    /// positive finite rate.
    pub fn new(lambda: f64) -> Result<Self, VariateError> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(VariateError::invalid_parameter(
                "lambda",
                format!("rate must be positive and finite, got {lambda}"),
            ));
        }
        Ok(Self { lambda })
    }

    /// Returns the rate parameter λ.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Draws an event count from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> u64 {
        if self.lambda <= POISSON_DIRECT_LIMIT {
            self.sample_multiplicative(source)
        } else {
            self.sample_normal_approximation(source)
        }
    }

    /// Multiplicative acceptance counting (Knuth).
    ///
    /// The loop is uncapped: its iteration count is itself
    /// Poisson-distributed and terminates almost surely.
    fn sample_multiplicative<S: UniformSource>(&self, source: &mut S) -> u64 {
        let threshold = (-self.lambda).exp();
        let mut product = 1.0;
        let mut draws: u64 = 0;
        while product >= threshold {
            product *= source.next_uniform();
            draws += 1;
        }
        // the first completed multiplication represents zero events
        draws - 1
    }

    fn sample_normal_approximation<S: UniformSource>(&self, source: &mut S) -> u64 {
        let z = standard_normal(source);
        let x = (self.lambda + self.lambda.sqrt() * z + 0.5).floor();
        if x > 0.0 {
            x as u64
        } else {
            0
        }
    }
}

/// Binomial distribution: successes in `n` Bernoulli(p) trials.
///
/// Convolutional method: the sum of `n` independent Bernoulli trial
/// outcomes, each drawing its own uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binomial {
    n: u64,
    trial: Bernoulli,
}

impl Binomial {
    /// Creates a binomial distribution over `n` trials.
    ///
    /// # Errors
    /// Propagates the [`Bernoulli`] validation failure unchanged when `p`
    /// is outside [0, 1].
    pub fn new(n: u64, p: f64) -> Result<Self, VariateError> {
        Ok(Self {
            n,
            trial: Bernoulli::new(p)?,
        })
    }

    /// Returns the trial count n.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the success probability p.
    #[inline]
    pub fn p(&self) -> f64 {
        self.trial.p()
    }

    /// Draws a success count from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> u64 {
        (0..self.n).map(|_| self.trial.sample(source)).sum()
    }
}

/// Negative binomial distribution: trials to the `n`-th success.
///
/// Convolutional method: the sum of `n` independent geometric(p) variates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeBinomial {
    n: u64,
    trial: Geometric,
}

impl NegativeBinomial {
    /// Creates a negative binomial distribution waiting for `n` successes.
    ///
    /// # Errors
    /// - Propagates the [`Geometric`] validation failure unchanged when `p`
    ///   is outside (0, 1)
    /// - Returns [`VariateError::InvalidParameter`] when `n` is zero
    pub fn new(n: u64, p: f64) -> Result<Self, VariateError> {
        let trial = Geometric::new(p)?;
        if n == 0 {
            return Err(VariateError::invalid_parameter(
                "n",
                "success count must be at least 1",
            ));
        }
        Ok(Self { n, trial })
    }

    /// Returns the success count n.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the success probability p.
    #[inline]
    pub fn p(&self) -> f64 {
        self.trial.p()
    }

    /// Draws a trial count from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> u64 {
        (0..self.n).map(|_| self.trial.sample(source)).sum()
    }
}

/// Erlang distribution: time to the `n`-th event of a Poisson process.
///
/// Inverse-transform shortcut: `(-1/λ) · ln(∏ of n uniforms)` is
/// mathematically equivalent to summing `n` exponential variates but takes
/// one logarithm instead of `n`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Erlang {
    lambda: f64,
    n: u64,
}

impl Erlang {
    /// Creates an Erlang distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] unless `lambda` is a
    /// positive finite rate and `n >= 1`.
    pub fn new(lambda: f64, n: u64) -> Result<Self, VariateError> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(VariateError::invalid_parameter(
                "lambda",
                format!("rate must be positive and finite, got {lambda}"),
            ));
        }
        if n == 0 {
            return Err(VariateError::invalid_parameter(
                "n",
                "event count must be at least 1",
            ));
        }
        Ok(Self { lambda, n })
    }

    /// Returns the rate parameter λ.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the event count n.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        let product: f64 = (0..self.n).map(|_| source.next_uniform()).product();
        (-1.0 / self.lambda) * product.ln()
    }
}

/// Chi-square distribution with `n` degrees of freedom.
///
/// Convolutional method: the sum of `n` independent squared standard
/// normals, each drawn fresh via the polar method.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChiSquare {
    n: u64,
}

impl ChiSquare {
    /// Creates a chi-square distribution.
    ///
    /// # Errors
    /// Returns [`VariateError::InvalidParameter`] when `n` is zero.
    pub fn new(n: u64) -> Result<Self, VariateError> {
        if n == 0 {
            return Err(VariateError::invalid_parameter(
                "n",
                "degrees of freedom must be at least 1",
            ));
        }
        Ok(Self { n })
    }

    /// Returns the degrees of freedom n.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        (0..self.n)
            .map(|_| {
                let z = standard_normal(source);
                z * z
            })
            .sum()
    }
}

/// Student's t distribution with `n` degrees of freedom.
///
/// One standard normal divided by `sqrt(chi²(n)/n)`, with the normal and
/// the chi-square drawn independently from the same source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StudentT {
    n: u64,
    denominator: ChiSquare,
}

impl StudentT {
    /// Creates a t distribution.
    ///
    /// # Errors
    /// Propagates the [`ChiSquare`] validation failure unchanged when `n`
    /// is zero.
    pub fn new(n: u64) -> Result<Self, VariateError> {
        Ok(Self {
            n,
            denominator: ChiSquare::new(n)?,
        })
    }

    /// Returns the degrees of freedom n.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        let z = standard_normal(source);
        let chi = self.denominator.sample(source);
        z / (chi / self.n as f64).sqrt()
    }
}

/// Cauchy distribution.
///
/// The t distribution with one degree of freedom; heavy-tailed with no
/// finite moments.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cauchy {
    inner: StudentT,
}

impl Cauchy {
    /// Creates a Cauchy distribution.
    pub fn new() -> Self {
        Self {
            inner: StudentT {
                n: 1,
                denominator: ChiSquare { n: 1 },
            },
        }
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        self.inner.sample(source)
    }
}

impl Default for Cauchy {
    fn default() -> Self {
        Self::new()
    }
}

/// F distribution with `n` and `m` degrees of freedom.
///
/// The ratio of two independent chi-square variates, each scaled by its
/// degrees of freedom: `(chi²(n)/n) / (chi²(m)/m)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FisherF {
    numerator: ChiSquare,
    denominator: ChiSquare,
}

impl FisherF {
    /// Creates an F distribution.
    ///
    /// # Errors
    /// Propagates the [`ChiSquare`] validation failure unchanged when
    /// either degrees-of-freedom count is zero.
    pub fn new(n: u64, m: u64) -> Result<Self, VariateError> {
        Ok(Self {
            numerator: ChiSquare::new(n)?,
            denominator: ChiSquare::new(m)?,
        })
    }

    /// Returns the numerator degrees of freedom n.
    #[inline]
    pub fn n(&self) -> u64 {
        self.numerator.n()
    }

    /// Returns the denominator degrees of freedom m.
    #[inline]
    pub fn m(&self) -> u64 {
        self.denominator.n()
    }

    /// Draws a variate from the source.
    pub fn sample<S: UniformSource>(&self, source: &mut S) -> f64 {
        let scaled_num = self.numerator.sample(source) / self.n() as f64;
        let scaled_den = self.denominator.sample(source) / self.m() as f64;
        scaled_num / scaled_den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::primitive::Exponential;
    use crate::source::{Lcg, SystemSource};
    use crate::testutil::ScriptedSource;
    use approx::assert_relative_eq;
    use variate_core::types::VariateError;

    #[test]
    fn test_poisson_multiplicative_counts_draws() {
        // u = 0.1 each draw: product falls below exp(-4) ≈ 0.0183 after
        // two multiplications (0.1, then 0.01), so the variate is 1
        let poisson = Poisson::new(4.0).unwrap();
        let mut source = ScriptedSource::new(vec![0.1]);
        assert_eq!(poisson.sample(&mut source), 1);
        assert_eq!(source.draws(), 2);
    }

    #[test]
    fn test_poisson_zero_events_possible() {
        // exp(-1) ≈ 0.368; a single draw of 0.2 already falls below it
        let poisson = Poisson::new(1.0).unwrap();
        let mut source = ScriptedSource::new(vec![0.2]);
        assert_eq!(poisson.sample(&mut source), 0);
        assert_eq!(source.draws(), 1);
    }

    #[test]
    fn test_poisson_threshold_selects_method() {
        // at the threshold the multiplicative method runs: draw count is
        // variate + 1 and every draw feeds the running product
        let at_limit = Poisson::new(POISSON_DIRECT_LIMIT).unwrap();
        let mut source = ScriptedSource::new(vec![0.5]);
        let x = at_limit.sample(&mut source);
        assert_eq!(source.draws(), x as usize + 1);

        // just above the threshold the normal approximation runs: exactly
        // one polar pair (two draws here) regardless of the rate
        let above_limit = Poisson::new(20.0001).unwrap();
        let mut scripted = ScriptedSource::new(vec![0.2, 0.8]);
        let x = above_limit.sample(&mut scripted);
        assert_eq!(scripted.draws(), 2);

        let mut reference = ScriptedSource::new(vec![0.2, 0.8]);
        let z = crate::dist::normal::standard_normal(&mut reference);
        let expected = (20.0001_f64 + 20.0001_f64.sqrt() * z + 0.5).floor();
        assert_eq!(x, expected as u64);
    }

    #[test]
    fn test_poisson_normal_approximation_clamps_at_zero() {
        // (0.4995, 0.5) centres to (-0.001, 0), giving z = -sqrt(-4 ln 0.001)
        // ≈ -5.26 and an unclamped value of about -2.6
        let mut reference = ScriptedSource::new(vec![0.4995, 0.5]);
        let z = crate::dist::normal::standard_normal(&mut reference);
        assert!(21.0 + 21.0_f64.sqrt() * z + 0.5 < 0.0);

        // the clamp keeps the variate at zero rather than wrapping
        let poisson = Poisson::new(21.0).unwrap();
        let mut source = ScriptedSource::new(vec![0.4995, 0.5]);
        assert_eq!(poisson.sample(&mut source), 0);
    }

    #[test]
    fn test_poisson_invalid_rate() {
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-2.0).is_err());
        assert!(Poisson::new(f64::NAN).is_err());
    }

    #[test]
    fn test_binomial_degenerate_probabilities() {
        let mut source = SystemSource::from_seed(5);
        let never = Binomial::new(20, 0.0).unwrap();
        let always = Binomial::new(20, 1.0).unwrap();
        for _ in 0..50 {
            assert_eq!(never.sample(&mut source), 0);
            assert_eq!(always.sample(&mut source), 20);
        }
    }

    #[test]
    fn test_binomial_zero_trials() {
        let binomial = Binomial::new(0, 0.5).unwrap();
        let mut source = SystemSource::from_seed(5);
        assert_eq!(binomial.sample(&mut source), 0);
    }

    #[test]
    fn test_binomial_within_trial_count() {
        let binomial = Binomial::new(10, 0.3).unwrap();
        let mut source = Lcg::minstd(1234).unwrap();
        for _ in 0..500 {
            assert!(binomial.sample(&mut source) <= 10);
        }
    }

    #[test]
    fn test_binomial_propagates_bernoulli_failure_unchanged() {
        let composite_err = Binomial::new(5, 1.5).unwrap_err();
        let primitive_err = Bernoulli::new(1.5).unwrap_err();
        assert_eq!(composite_err, primitive_err);
    }

    #[test]
    fn test_negative_binomial_propagates_geometric_failure_unchanged() {
        let composite_err = NegativeBinomial::new(3, 0.0).unwrap_err();
        let primitive_err = Geometric::new(0.0).unwrap_err();
        assert_eq!(composite_err, primitive_err);
    }

    #[test]
    fn test_negative_binomial_at_least_n_trials() {
        // each geometric variate is at least 1
        let negative_binomial = NegativeBinomial::new(7, 0.4).unwrap();
        let mut source = SystemSource::from_seed(11);
        for _ in 0..500 {
            assert!(negative_binomial.sample(&mut source) >= 7);
        }
    }

    #[test]
    fn test_negative_binomial_rejects_zero_successes() {
        assert!(matches!(
            NegativeBinomial::new(0, 0.5),
            Err(VariateError::InvalidParameter { name: "n", .. })
        ));
    }

    #[test]
    fn test_erlang_single_event_matches_exponential() {
        // for n = 1 the product collapses to one uniform and the transform
        // is exactly the exponential inverse CDF
        let erlang = Erlang::new(2.5, 1).unwrap();
        let exponential = Exponential::new(2.5).unwrap();
        let mut a = Lcg::minstd(42).unwrap();
        let mut b = Lcg::minstd(42).unwrap();
        for _ in 0..50 {
            assert_relative_eq!(erlang.sample(&mut a), exponential.sample(&mut b));
        }
    }

    #[test]
    fn test_erlang_draws_one_uniform_per_event() {
        let erlang = Erlang::new(1.0, 6).unwrap();
        let mut source = ScriptedSource::new(vec![0.3, 0.6, 0.9]);
        let x = erlang.sample(&mut source);
        assert_eq!(source.draws(), 6);
        let expected = -(0.3_f64 * 0.6 * 0.9 * 0.3 * 0.6 * 0.9).ln();
        assert_relative_eq!(x, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_erlang_invalid_parameters() {
        assert!(Erlang::new(0.0, 3).is_err());
        assert!(Erlang::new(1.0, 0).is_err());
    }

    #[test]
    fn test_chi_square_non_negative() {
        let chi_square = ChiSquare::new(5).unwrap();
        let mut source = SystemSource::from_seed(23);
        for _ in 0..500 {
            assert!(chi_square.sample(&mut source) >= 0.0);
        }
    }

    #[test]
    fn test_chi_square_rejects_zero_dof() {
        assert!(matches!(
            ChiSquare::new(0),
            Err(VariateError::InvalidParameter { name: "n", .. })
        ));
    }

    #[test]
    fn test_student_t_propagates_chi_square_failure_unchanged() {
        assert_eq!(
            StudentT::new(0).unwrap_err(),
            ChiSquare::new(0).unwrap_err()
        );
    }

    #[test]
    fn test_student_t_finite() {
        let student_t = StudentT::new(4).unwrap();
        let mut source = SystemSource::from_seed(31);
        for _ in 0..500 {
            assert!(student_t.sample(&mut source).is_finite());
        }
    }

    #[test]
    fn test_cauchy_is_t_with_one_dof() {
        let cauchy = Cauchy::new();
        let student_t = StudentT::new(1).unwrap();
        let mut a = SystemSource::from_seed(7);
        let mut b = SystemSource::from_seed(7);
        for _ in 0..50 {
            assert_eq!(cauchy.sample(&mut a), student_t.sample(&mut b));
        }
    }

    #[test]
    fn test_fisher_f_positive() {
        let fisher_f = FisherF::new(3, 8).unwrap();
        let mut source = SystemSource::from_seed(13);
        for _ in 0..500 {
            assert!(fisher_f.sample(&mut source) > 0.0);
        }
    }

    #[test]
    fn test_fisher_f_propagates_chi_square_failure_unchanged() {
        assert_eq!(
            FisherF::new(0, 5).unwrap_err(),
            ChiSquare::new(0).unwrap_err()
        );
        assert_eq!(
            FisherF::new(5, 0).unwrap_err(),
            ChiSquare::new(0).unwrap_err()
        );
    }

    #[test]
    fn test_composites_share_one_stream() {
        // the same seeded stream drives dependent draws in order, so two
        // identically seeded sources give identical composite variates
        let fisher_f = FisherF::new(2, 3).unwrap();
        let mut a = Lcg::minstd(555).unwrap();
        let mut b = Lcg::minstd(555).unwrap();
        for _ in 0..20 {
            assert_eq!(fisher_f.sample(&mut a), fisher_f.sample(&mut b));
        }
    }
}
