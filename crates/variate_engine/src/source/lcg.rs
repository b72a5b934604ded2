//! Linear congruential generator family.
//!
//! An LCG advances an integer state through the recurrence
//! `x' = (a·x + c) mod m` and yields either the raw state or the
//! normalised value `x'/m`. Two named parameterisations are provided:
//! `minstd` (the Lehmer minimal-standard generator) and `randu` (kept for
//! study of its notoriously poor lattice structure), alongside the fully
//! caller-parameterised recurrence.

use std::time::{SystemTime, UNIX_EPOCH};

use variate_core::types::VariateError;

use super::UniformSource;

/// Modulus of the `minstd` configuration: `2^31 - 1` (a Mersenne prime).
pub const MINSTD_MODULUS: u64 = (1 << 31) - 1;

/// Modulus of the `randu` configuration: `2^31`.
pub const RANDU_MODULUS: u64 = 1 << 31;

const MINSTD_MULTIPLIER: u64 = 16807;
const RANDU_MULTIPLIER: u64 = 65539;

/// Stateful linear congruential generator.
///
/// Each instance owns its state exclusively and advances it in place on
/// every draw. The state is never reset; to replay a stream, construct a
/// new instance with the same seed. Concurrent use of one instance from
/// multiple threads requires external synchronisation — the intended
/// pattern is one instance per logical stream.
///
/// Construction validates the seed against the configuration's modulus and
/// fails fast; the recurrence itself never fails once an instance exists.
///
/// # Examples
///
/// ```rust
/// use variate_engine::source::Lcg;
///
/// let mut a = Lcg::minstd(42).unwrap();
/// let mut b = Lcg::minstd(42).unwrap();
/// assert_eq!(
///     a.raws(5).collect::<Vec<_>>(),
///     b.raws(5).collect::<Vec<_>>(),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lcg {
    /// Current state `x_n`; mutated on every draw.
    state: u64,
    /// Multiplier `a`.
    multiplier: u64,
    /// Additive increment `c`.
    increment: u64,
    /// Modulus `m`.
    modulus: u64,
}

impl Lcg {
    /// Creates a generator with the `minstd` parameterisation:
    /// `a = 16807, c = 0, m = 2^31 - 1`.
    ///
    /// # Errors
    /// Returns [`VariateError::SeedOutOfRange`] unless `1 < seed < 2^31 - 1`.
    pub fn minstd(seed: u64) -> Result<Self, VariateError> {
        Self::configured(seed, MINSTD_MULTIPLIER, 0, MINSTD_MODULUS)
    }

    /// Creates a `minstd` generator seeded from the UNIX timestamp.
    ///
    /// The wall-clock seconds are folded into the valid seed range
    /// `(1, 2^31 - 1)`, so construction cannot fail. Two generators built
    /// within the same second share a stream; supply an explicit seed via
    /// [`Lcg::minstd`] when that matters.
    pub fn minstd_from_clock() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        Self {
            state: 2 + secs % (MINSTD_MODULUS - 3),
            multiplier: MINSTD_MULTIPLIER,
            increment: 0,
            modulus: MINSTD_MODULUS,
        }
    }

    /// Creates a generator with the `randu` parameterisation:
    /// `a = 65539, c = 0, m = 2^31`.
    ///
    /// RANDU is a historically infamous generator: consecutive triples fall
    /// on 15 planes in the unit cube. It is retained for studying exactly
    /// that defect. Selecting it emits one warning-level `tracing` event
    /// and then behaves like any other configuration — the poor quality is
    /// advisory, not an error.
    ///
    /// # Errors
    /// Returns [`VariateError::SeedOutOfRange`] unless `1 < seed < 2^31`.
    pub fn randu(seed: u64) -> Result<Self, VariateError> {
        let lcg = Self::configured(seed, RANDU_MULTIPLIER, 0, RANDU_MODULUS)?;
        tracing::warn!(
            multiplier = RANDU_MULTIPLIER,
            modulus = RANDU_MODULUS,
            "randu has poor statistical quality (consecutive triples are coplanar); \
             do not use it for production streams"
        );
        Ok(lcg)
    }

    /// Creates a generator with a caller-supplied parameterisation.
    ///
    /// The seed is reduced modulo `modulus`. For a multiplicative
    /// parameterisation (`increment == 0`) the reduced seed must be
    /// non-zero, since zero is an absorbing state of the recurrence.
    ///
    /// # Errors
    /// - [`VariateError::InvalidLcgParameter`] when `modulus < 2` or
    ///   `multiplier == 0`
    /// - [`VariateError::SeedOutOfRange`] when `increment == 0` and the
    ///   seed reduces to zero
    pub fn generic(
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, VariateError> {
        if modulus < 2 {
            return Err(VariateError::InvalidLcgParameter {
                name: "modulus",
                value: modulus,
            });
        }
        if multiplier == 0 {
            return Err(VariateError::InvalidLcgParameter {
                name: "multiplier",
                value: multiplier,
            });
        }
        let state = seed % modulus;
        if increment == 0 && state == 0 {
            return Err(VariateError::SeedOutOfRange { seed, modulus });
        }
        Ok(Self {
            state,
            multiplier,
            increment,
            modulus,
        })
    }

    /// Shared constructor for the named configurations.
    fn configured(
        seed: u64,
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, VariateError> {
        if seed <= 1 || seed >= modulus {
            return Err(VariateError::SeedOutOfRange { seed, modulus });
        }
        Ok(Self {
            state: seed,
            multiplier,
            increment,
            modulus,
        })
    }

    /// Returns the current state `x_n`.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the multiplier `a`.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the increment `c`.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Returns the modulus `m`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Advances the state and returns the raw integer draw
    /// `x' = (a·x + c) mod m`.
    ///
    /// The product is widened to 128 bits, so arbitrary 64-bit
    /// parameterisations cannot overflow.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let product = u128::from(self.multiplier) * u128::from(self.state)
            + u128::from(self.increment);
        self.state = (product % u128::from(self.modulus)) as u64;
        self.state
    }

    /// Returns a lazy sequence of `count` raw integer draws.
    ///
    /// The iterator borrows the generator mutably and advances its shared
    /// state: a second call continues the stream rather than replaying it.
    pub fn raws(&mut self, count: usize) -> impl Iterator<Item = u64> + '_ {
        std::iter::from_fn(move || Some(self.next_raw())).take(count)
    }

    /// Returns a lazy sequence of `count` normalised draws `x'/m`.
    ///
    /// Like [`Lcg::raws`], the sequence is finite, non-restartable and
    /// continues across calls. Values come from the open interval (0, 1)
    /// for the named configurations; see the [`UniformSource`] impl for the
    /// contract-checked form.
    pub fn uniforms(&mut self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let modulus = self.modulus as f64;
        std::iter::from_fn(move || Some(self.next_raw() as f64 / modulus)).take(count)
    }
}

impl UniformSource for Lcg {
    /// Draws `x'/m`, skipping a zero state so the value lies in (0, 1).
    ///
    /// The named configurations never produce a zero state from a valid
    /// seed. A caller-parameterised recurrence can pass through zero when
    /// `multiplier` and `modulus` share a factor; with a non-zero increment
    /// the stream escapes on the next step.
    ///
    /// # Panics
    /// Panics if a multiplicative parameterisation reaches the absorbing
    /// zero state, which indicates `multiplier` and `modulus` were chosen
    /// with a common factor.
    fn next_uniform(&mut self) -> f64 {
        loop {
            let x = self.next_raw();
            if x != 0 {
                return x as f64 / self.modulus as f64;
            }
            assert!(
                self.increment != 0,
                "multiplicative LCG absorbed at zero state (multiplier {} shares a factor with modulus {})",
                self.multiplier,
                self.modulus
            );
        }
    }
}
