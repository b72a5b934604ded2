//! # Uniform Source Infrastructure
//!
//! This module provides the uniform(0, 1) sources that feed every
//! distribution generator in the engine.
//!
//! ## Design Rationale
//!
//! - **Open-interval contract**: every value a source yields lies strictly
//!   inside (0, 1). The transforms downstream take logarithms of `u` and
//!   `1 - u`, so neither endpoint is ever produced.
//! - **Explicit ownership**: a source instance owns its state exclusively
//!   and is threaded through sampling calls as `&mut`. One instance per
//!   logical stream; sharing an instance across threads requires external
//!   synchronisation.
//! - **Reproducibility**: both source families are seedable and
//!   deterministic for a given seed.
//!
//! ## Module Structure
//!
//! - [`system`]: [`SystemSource`], a wrapper over the `rand` standard
//!   generator
//! - [`lcg`]: [`Lcg`], the linear-congruential generator family

mod lcg;
mod system;

pub use lcg::{Lcg, MINSTD_MODULUS, RANDU_MODULUS};
pub use system::SystemSource;

/// Capability for producing independent uniform(0, 1) variates.
///
/// Implementations guarantee that every returned value satisfies
/// `0 < u < 1`; callers may feed the draws straight into logarithmic
/// transforms without re-validation.
///
/// Sampling functions accept any `S: UniformSource`, so a deterministic
/// scripted source can stand in for a real generator in tests.
pub trait UniformSource {
    /// Draws the next uniform variate, strictly inside (0, 1).
    ///
    /// Successive calls yield independent values and advance the source's
    /// internal state; a sequence is never replayed.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
