//! Lehmer linear-congruential generator and the [`Seed`] state it threads.
//!
//! The recurrence is the Park–Miller "minimal standard" generator
//!
//! ```text
//! seed' = 16807 * seed mod (2^31 - 1)
//! ```
//!
//! evaluated with Schrage's decomposition (`q = 127773`, `r = 2836`) so every
//! intermediate fits in 32 signed bits. The output value is
//! `seed' * 4.656612875e-10`, a close approximation of `seed' / (2^31 - 1)`.
//!
//! # Reference Values
//!
//! | Input seed  | Output seed | Value    |
//! |-------------|-------------|----------|
//! | 12345       | 207482415   | 0.096616 |
//! | 207482415   | 1790989824  | 0.833995 |
//! | 1790989824  | 2035175616  | 0.947702 |

use crate::types::SamplingError;

/// Modulus `2^31 - 1`.
pub const MODULUS: i64 = 2_147_483_647;

/// Multiplier `7^5`.
pub const MULTIPLIER: i64 = 16_807;

/// Schrage quotient `MODULUS div MULTIPLIER`.
const SCHRAGE_Q: i64 = 127_773;

/// Schrage remainder `MODULUS mod MULTIPLIER`.
const SCHRAGE_R: i64 = 2_836;

/// Scale mapping a state to the unit interval.
pub const UNIT_SCALE: f64 = 4.656_612_875e-10;

/// Generator state, always in `[1, 2^31 - 2]`.
///
/// A `Seed` is a plain value: every primitive consumes one and returns its
/// successor. There is no hidden generator, so two streams started from equal
/// seeds produce identical output, and independent streams are obtained by
/// handing each consumer its own seed.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Seed;
///
/// let seed = Seed::new(12345).unwrap();
/// let next = seed.next();
/// assert_eq!(next.state(), 207482415);
/// assert!((next.value() - 0.096616).abs() < 1e-6);
///
/// // Negative seeds are folded into range; zero is rejected.
/// assert_eq!(Seed::new(-1).unwrap().state(), 2147483646);
/// assert!(Seed::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Seed(i32);

impl Seed {
    /// Folds a raw seed into `[1, 2^31 - 2]`.
    ///
    /// The raw value is reduced modulo `2^31 - 1`, negative residues are
    /// shifted up by `2^31 - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidSeed`] when the folded value is zero
    /// (raw `0` or `±(2^31 - 1)`).
    pub fn new(raw: i32) -> Result<Self, SamplingError> {
        let mut state = i64::from(raw) % MODULUS;
        if state < 0 {
            state += MODULUS;
        }
        if state == 0 {
            return Err(SamplingError::InvalidSeed {
                seed: i64::from(raw),
            });
        }
        Ok(Self(state as i32))
    }

    /// Current 32-bit state.
    #[inline]
    pub fn state(self) -> i32 {
        self.0
    }

    /// Current state mapped into `(0, 1)`.
    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.0) * UNIT_SCALE
    }

    /// Advances the generator by one step.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Self {
        Self(step(i64::from(self.0)) as i32)
    }

    /// Advances by one step and returns the new state's unit value with it.
    #[inline]
    pub fn draw(self) -> (f64, Self) {
        let next = self.next();
        (next.value(), next)
    }
}

impl TryFrom<i32> for Seed {
    type Error = SamplingError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Seed::new(raw)
    }
}

impl From<Seed> for i32 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Schrage step on a state already in `[1, 2^31 - 2]`.
#[inline]
fn step(state: i64) -> i64 {
    let k = state / SCHRAGE_Q;
    let mut next = MULTIPLIER * (state - k * SCHRAGE_Q) - k * SCHRAGE_R;
    if next < 0 {
        next += MODULUS;
    }
    next
}

/// One raw LCG step on an untyped 32-bit seed.
///
/// Normalises the input exactly as [`Seed::new`] does before stepping.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidSeed`] when the seed normalises to zero.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::lcg_step;
///
/// assert_eq!(lcg_step(12345).unwrap(), 207482415);
/// assert_eq!(lcg_step(207482415).unwrap(), 1790989824);
/// assert!(lcg_step(0).is_err());
/// ```
pub fn lcg_step(seed: i32) -> Result<i32, SamplingError> {
    Ok(Seed::new(seed)?.next().state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schrage_constants() {
        assert_eq!(SCHRAGE_Q, MODULUS / MULTIPLIER);
        assert_eq!(SCHRAGE_R, MODULUS % MULTIPLIER);
    }

    #[test]
    fn test_step_matches_direct_modular_product() {
        for state in [1_i64, 2, 12345, 127_773, 127_774, 1_000_000_007, MODULUS - 1] {
            assert_eq!(step(state), (MULTIPLIER * state) % MODULUS);
        }
    }

    #[test]
    fn test_seed_folding() {
        assert_eq!(Seed::new(1).unwrap().state(), 1);
        assert_eq!(Seed::new(-5).unwrap().state(), 2_147_483_642);
        assert_eq!(Seed::new(i32::MIN).unwrap().state(), 2_147_483_646);
        assert!(Seed::new(i32::MAX).is_err());
        assert!(Seed::new(-i32::MAX).is_err());
    }

    #[test]
    fn test_zero_seed_rejected() {
        assert_eq!(Seed::new(0), Err(SamplingError::InvalidSeed { seed: 0 }));
        assert_eq!(lcg_step(0), Err(SamplingError::InvalidSeed { seed: 0 }));
    }

    #[test]
    fn test_value_strictly_inside_unit_interval() {
        let low = Seed::new(1).unwrap().value();
        let high = Seed::new((MODULUS - 1) as i32).unwrap().value();
        assert!(low > 0.0);
        assert!(high < 1.0);
        assert_relative_eq!(high, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_draw_returns_successor_value() {
        let seed = Seed::new(12345).unwrap();
        let (value, next) = seed.draw();
        assert_eq!(next, seed.next());
        assert_eq!(value, next.value());
    }

    #[test]
    fn test_try_from_and_display() {
        let seed = Seed::try_from(42).unwrap();
        assert_eq!(i32::from(seed), 42);
        assert_eq!(seed.to_string(), "42");
    }
}
