//! Standard normal variates via the Box-Muller transform.
//!
//! Each variate consumes two uniform draws `r1, r2` and returns
//! `sqrt(-2 ln r1) * cos(2π r2)`; the sine partner is discarded so that one
//! call always advances the seed by exactly two steps.

use std::f64::consts::PI;

use super::lcg::Seed;

/// Single standard normal draw. Advances the seed twice.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{normal_scalar, Seed};
///
/// let start = Seed::new(123456789).unwrap();
/// let (x, end) = normal_scalar(start);
/// assert!(x.is_finite());
/// assert_eq!(end, start.next().next());
/// ```
#[inline]
pub fn normal_scalar(seed: Seed) -> (f64, Seed) {
    let (r1, seed) = seed.draw();
    let (r2, seed) = seed.draw();
    // r1 > 0 for every valid seed, so the logarithm is finite.
    let x = (-2.0 * r1.ln()).sqrt() * (2.0 * PI * r2).cos();
    (x, seed)
}

/// `n` sequential standard normal draws.
pub fn normal_vector(n: usize, mut seed: Seed) -> (Vec<f64>, Seed) {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        let (x, next) = normal_scalar(seed);
        values.push(x);
        seed = next;
    }
    (values, seed)
}
