//! Uniform sampling of the unit tetrahedron `{x, y, z ≥ 0, x + y + z ≤ 1}`.
//!
//! Four uniform draws `e_0..e_3` give i.i.d. Exponential(1) variates
//! `l_i = −ln e_i`. Normalised by their sum they are Dirichlet(1, 1, 1, 1)
//! distributed, i.e. uniform on the 3-simplex; the first three components
//! are the sample coordinates.

use sampler_core::rng::Seed;
use sampler_core::PointSet;

/// Spatial dimension of the tetrahedron.
const DIM: usize = 3;

/// Samples `n` points uniformly from the unit tetrahedron.
///
/// Returns a `3 × n` batch (one point per column) and the successor seed.
/// Each point consumes exactly four generator steps.
///
/// Every valid [`Seed`] maps to a strictly positive uniform value, so the
/// logarithms are always finite; no draw is retried.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Seed;
/// use sampler_domains::samplers::sample_unit_tetrahedron;
///
/// let (points, _) = sample_unit_tetrahedron(500, Seed::new(123456789).unwrap());
/// for p in points.iter_points() {
///     assert!(p.iter().all(|&x| x >= 0.0));
///     assert!(p.iter().sum::<f64>() <= 1.0 + 1e-12);
/// }
/// ```
pub fn sample_unit_tetrahedron(n: usize, mut seed: Seed) -> (PointSet, Seed) {
    let mut points = PointSet::zeros(DIM, n);
    let mut exponentials = [0.0_f64; DIM + 1];
    for j in 0..n {
        for l in exponentials.iter_mut() {
            let (e, next) = seed.draw();
            debug_assert!(e > 0.0, "uniform draw must be positive");
            *l = -e.ln();
            seed = next;
        }
        let total: f64 = exponentials.iter().sum();
        for (x, l) in points.point_mut(j).iter_mut().zip(&exponentials) {
            *x = l / total;
        }
    }
    (points, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sampler_core::rng::uniform_vector;

    fn seed() -> Seed {
        Seed::new(123456789).unwrap()
    }

    #[test]
    fn test_four_draws_per_sample() {
        let (_, end) = sample_unit_tetrahedron(25, seed());
        let (_, end_uniform) = uniform_vector(100, seed());
        assert_eq!(end, end_uniform);
    }

    #[test]
    fn test_first_point_from_exponentials() {
        let (points, _) = sample_unit_tetrahedron(1, seed());
        let (e, _) = uniform_vector(4, seed());
        let l: Vec<f64> = e.iter().map(|x| -x.ln()).collect();
        let total: f64 = l.iter().sum();
        for i in 0..3 {
            assert_relative_eq!(points.get(i, 0), l[i] / total, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_mean_near_centroid() {
        let n = 20_000;
        let (points, _) = sample_unit_tetrahedron(n, seed());
        for i in 0..3 {
            let mean = points.coordinate(i).sum::<f64>() / n as f64;
            assert!((mean - 0.25).abs() < 0.01, "coordinate {} mean {}", i, mean);
        }
    }
}
