//! Uniform primitives layered on the Lehmer step.
//!
//! Every function takes the current [`Seed`] by value and returns its output
//! together with the successor seed. Vector and matrix builders are plain
//! loops over [`Seed::draw`], so a batch of `n` values consumes exactly `n`
//! generator steps in a fixed order.

use super::lcg::Seed;
use crate::types::PointSet;

/// Single uniform draw in `(0, 1)`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform_scalar, Seed};
///
/// let (r, seed) = uniform_scalar(Seed::new(12345).unwrap());
/// assert_eq!(seed.state(), 207482415);
/// assert!((r - 0.096616).abs() < 1e-6);
/// ```
#[inline]
pub fn uniform_scalar(seed: Seed) -> (f64, Seed) {
    seed.draw()
}

/// Single uniform draw scaled into `[a, b)`.
#[inline]
pub fn uniform_scalar_ab(a: f64, b: f64, seed: Seed) -> (f64, Seed) {
    let (r, seed) = seed.draw();
    (a + (b - a) * r, seed)
}

/// `n` sequential uniform draws.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform_scalar, uniform_vector, Seed};
///
/// let seed = Seed::new(123456789).unwrap();
/// let (values, end) = uniform_vector(2, seed);
///
/// let (r0, s1) = uniform_scalar(seed);
/// let (r1, s2) = uniform_scalar(s1);
/// assert_eq!(values, vec![r0, r1]);
/// assert_eq!(end, s2);
/// ```
pub fn uniform_vector(n: usize, seed: Seed) -> (Vec<f64>, Seed) {
    let mut values = vec![0.0; n];
    let seed = fill_uniform(&mut values, seed);
    (values, seed)
}

/// `n` sequential uniform draws scaled into `[a, b)`.
pub fn uniform_vector_ab(n: usize, a: f64, b: f64, seed: Seed) -> (Vec<f64>, Seed) {
    let (mut values, seed) = uniform_vector(n, seed);
    for value in values.iter_mut() {
        *value = a + (b - a) * *value;
    }
    (values, seed)
}

/// Fills `buffer` with uniform draws, returning the successor seed.
///
/// Empty buffers leave the seed unchanged.
#[inline]
pub fn fill_uniform(buffer: &mut [f64], mut seed: Seed) -> Seed {
    for value in buffer.iter_mut() {
        let (r, next) = seed.draw();
        *value = r;
        seed = next;
    }
    seed
}

/// `rows × cols` matrix of uniform draws.
///
/// Filled column by column (outer loop over columns, inner over rows), which
/// is also the storage order of [`PointSet`].
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform_matrix, uniform_vector, Seed};
///
/// let seed = Seed::new(42).unwrap();
/// let (m, end_m) = uniform_matrix(3, 2, seed);
/// let (v, end_v) = uniform_vector(6, seed);
///
/// assert_eq!(m.as_slice(), v.as_slice());
/// assert_eq!(m.get(1, 1), v[4]);
/// assert_eq!(end_m, end_v);
/// ```
pub fn uniform_matrix(rows: usize, cols: usize, seed: Seed) -> (PointSet, Seed) {
    uniform_matrix_ab(rows, cols, 0.0, 1.0, seed)
}

/// `rows × cols` matrix of uniform draws scaled into `[a, b)`.
pub fn uniform_matrix_ab(
    rows: usize,
    cols: usize,
    a: f64,
    b: f64,
    mut seed: Seed,
) -> (PointSet, Seed) {
    let mut matrix = PointSet::zeros(rows, cols);
    for j in 0..cols {
        for i in 0..rows {
            let (r, next) = seed.draw();
            matrix.set(i, j, a + (b - a) * r);
            seed = next;
        }
    }
    (matrix, seed)
}

/// `n` integers drawn uniformly from `[min(lo, hi), max(lo, hi)]`.
///
/// Each draw `r` is stretched onto `[min - 0.5, max + 0.5]`, rounded to the
/// nearest integer (ties to even) and clamped, so both endpoints get the
/// same half-unit share as interior values.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{uniform_int_range, Seed};
///
/// let (values, _) = uniform_int_range(20, 200, -100, Seed::new(123456789).unwrap());
/// assert!(values.iter().all(|&v| (-100..=200).contains(&v)));
/// ```
pub fn uniform_int_range(n: usize, lo: i32, hi: i32, mut seed: Seed) -> (Vec<i32>, Seed) {
    let min = f64::from(lo.min(hi));
    let max = f64::from(lo.max(hi));
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        let (r, next) = seed.draw();
        seed = next;
        let stretched = (1.0 - r) * (min - 0.5) + r * (max + 0.5);
        let value = stretched.round_ties_even().clamp(min, max);
        values.push(value as i32);
    }
    (values, seed)
}
