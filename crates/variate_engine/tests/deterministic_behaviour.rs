//! End-to-end deterministic behaviour of the public API.
//!
//! These tests drive the engine the way an embedding simulation would:
//! seeded sources, explicit uniform injection, and exact reproduction of
//! the documented algorithms.

use variate_engine::dist::{
    standard_normal, standard_normal_pair, Bernoulli, Erlang, Exponential, Poisson, Weibull,
};
use variate_engine::source::{Lcg, SystemSource, UniformSource, MINSTD_MODULUS};
use variate_engine::VariateError;

/// Scripted uniform source built on the public trait.
struct Replay {
    values: Vec<f64>,
    cursor: usize,
}

impl Replay {
    fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl UniformSource for Replay {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[test]
fn lcg_streams_are_reproducible() {
    let first: Vec<f64> = Lcg::minstd(4321).unwrap().uniforms(5).collect();
    let second: Vec<f64> = Lcg::minstd(4321).unwrap().uniforms(5).collect();
    assert_eq!(first, second);
}

#[test]
fn lcg_seed_at_modulus_boundary_fails() {
    let err = Lcg::minstd(1 << 31).unwrap_err();
    assert_eq!(
        err,
        VariateError::SeedOutOfRange {
            seed: 1 << 31,
            modulus: MINSTD_MODULUS
        }
    );
}

#[test]
fn weibull_closed_form_through_public_api() {
    let lambda = 3.0;
    let beta = 1.0;
    let u: f64 = 0.42;
    let weibull = Weibull::new(lambda, beta).unwrap();
    let expected = (-1.0 / lambda) * u.ln();
    assert_eq!(weibull.inverse_cdf(u).unwrap(), expected);
}

#[test]
fn exponential_equals_unit_shape_weibull() {
    let exponential = Exponential::new(0.5).unwrap();
    let weibull = Weibull::new(0.5, 1.0).unwrap();
    for &u in &[0.05, 0.3, 0.77] {
        assert_eq!(
            exponential.inverse_cdf(u).unwrap(),
            weibull.inverse_cdf(u).unwrap()
        );
    }
}

#[test]
fn erlang_with_one_event_matches_exponential_on_one_stream() {
    let erlang = Erlang::new(1.25, 1).unwrap();
    let exponential = Exponential::new(1.25).unwrap();
    let mut a = SystemSource::from_seed(2024);
    let mut b = SystemSource::from_seed(2024);
    for _ in 0..100 {
        assert_eq!(erlang.sample(&mut a), exponential.sample(&mut b));
    }
}

#[test]
fn bernoulli_threshold_behaviour() {
    let bernoulli = Bernoulli::new(0.5).unwrap();
    assert_eq!(bernoulli.from_uniform(0.4).unwrap(), 1);
    assert_eq!(bernoulli.from_uniform(0.6).unwrap(), 0);
}

#[test]
fn explicit_uniform_endpoints_fail() {
    let bernoulli = Bernoulli::new(0.5).unwrap();
    for &u in &[0.0, 1.0] {
        assert_eq!(
            bernoulli.from_uniform(u).unwrap_err(),
            VariateError::UniformOutOfRange { value: u }
        );
    }
}

#[test]
fn polar_method_survives_degenerate_centre_draws() {
    // (0.5, 0.5) centres to w = 0; the generator must redraw, not crash
    let mut source = Replay::new(vec![0.5, 0.5, 0.25, 0.75]);
    let (z1, z2) = standard_normal_pair(&mut source);
    assert!(z1.is_finite() && z2.is_finite());
    assert!(z1 != 0.0 || z2 != 0.0);
}

#[test]
fn poisson_at_threshold_uses_multiplicative_counting() {
    // replicate the acceptance loop by hand on an identically seeded
    // stream and require the engine to match it draw for draw
    let poisson = Poisson::new(20.0).unwrap();
    let mut engine_stream = Lcg::minstd(31_337).unwrap();
    let variate = poisson.sample(&mut engine_stream);

    let mut manual_stream = Lcg::minstd(31_337).unwrap();
    let threshold = (-20.0_f64).exp();
    let mut product = 1.0;
    let mut draws: u64 = 0;
    while product >= threshold {
        product *= manual_stream.next_uniform();
        draws += 1;
    }
    assert_eq!(variate, draws - 1);

    // both streams must have consumed the same number of draws
    assert_eq!(engine_stream.state(), manual_stream.state());
}

#[test]
fn poisson_above_threshold_uses_normal_approximation() {
    let lambda = 20.0001;
    let poisson = Poisson::new(lambda).unwrap();
    let mut engine_stream = Lcg::minstd(31_337).unwrap();
    let variate = poisson.sample(&mut engine_stream);

    let mut manual_stream = Lcg::minstd(31_337).unwrap();
    let z = standard_normal(&mut manual_stream);
    let expected = (lambda + lambda.sqrt() * z + 0.5).floor().max(0.0) as u64;
    assert_eq!(variate, expected);
    assert_eq!(engine_stream.state(), manual_stream.state());
}

#[test]
fn composite_validation_failures_preserve_the_primitive_kind() {
    use variate_engine::dist::{Binomial, FisherF, NegativeBinomial};

    assert!(matches!(
        Binomial::new(10, -0.5).unwrap_err(),
        VariateError::InvalidParameter { name: "p", .. }
    ));
    assert!(matches!(
        NegativeBinomial::new(4, 1.0).unwrap_err(),
        VariateError::InvalidParameter { name: "p", .. }
    ));
    assert!(matches!(
        FisherF::new(0, 4).unwrap_err(),
        VariateError::InvalidParameter { name: "n", .. }
    ));
}
