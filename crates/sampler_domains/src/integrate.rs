//! Monte-Carlo integral estimates from uniform sample batches.
//!
//! For a domain of measure `V` and `n` uniform samples `x_j`,
//! `∫ f ≈ V · mean(f(x_j))`, with standard error `V · s / √n` where `s` is
//! the sample standard deviation of `f(x_j)`.

use sampler_core::rng::Seed;
use sampler_core::{PointSet, SamplingError};

use crate::geometry::{triangle_area, Triangle};
use crate::monomial::monomial_value;
use crate::samplers::sample_general_triangle;

/// Monte-Carlo estimate of an integral.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    /// Estimated integral.
    pub value: f64,
    /// Standard error of the estimate (zero for fewer than two samples).
    pub std_error: f64,
    /// Number of samples used.
    pub n: usize,
}

impl Estimate {
    /// Absolute deviation from a reference value.
    #[inline]
    pub fn error_against(&self, exact: f64) -> f64 {
        (self.value - exact).abs()
    }
}

/// Scales the sample mean of `values` by the domain measure `volume`.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidInput`] for an empty slice.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::integrate::estimate_from_values;
///
/// let estimate = estimate_from_values(0.5, &[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(estimate.value, 0.5);
/// assert_eq!(estimate.std_error, 0.0);
/// ```
pub fn estimate_from_values(volume: f64, values: &[f64]) -> Result<Estimate, SamplingError> {
    let n = values.len();
    if n == 0 {
        return Err(SamplingError::InvalidInput(
            "cannot estimate an integral from zero samples".to_string(),
        ));
    }
    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    let std_error = if n < 2 {
        0.0
    } else {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1.0);
        volume.abs() * (variance / count).sqrt()
    };
    Ok(Estimate {
        value: volume * mean,
        std_error,
        n,
    })
}

/// Estimates `∫ ∏ x_i^{e_i}` over a domain of measure `volume` from a
/// uniform batch of that domain.
///
/// # Errors
///
/// Propagates [`monomial_value`] errors and rejects empty batches.
pub fn monomial_estimate(
    volume: f64,
    exponents: &[u32],
    points: &PointSet,
) -> Result<Estimate, SamplingError> {
    let values = monomial_value(exponents, points)?;
    estimate_from_values(volume, &values)
}

/// Estimates `∫_t f` with `n` uniform samples of triangle `t`.
///
/// The integrand receives each physical point as a two-element slice.
///
/// # Errors
///
/// Returns [`SamplingError::DegenerateGeometry`] for a zero-area triangle and
/// [`SamplingError::InvalidInput`] for `n == 0`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Seed;
/// use sampler_domains::integrate::triangle_monte_carlo;
///
/// let t = [[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]];
/// let (estimate, _) = triangle_monte_carlo(&t, 64, |_| 1.0, Seed::new(123456789).unwrap()).unwrap();
/// assert!((estimate.value - 2.0).abs() < 1e-12);
/// ```
pub fn triangle_monte_carlo<F>(
    t: &Triangle,
    n: usize,
    f: F,
    seed: Seed,
) -> Result<(Estimate, Seed), SamplingError>
where
    F: Fn(&[f64]) -> f64,
{
    let (points, seed) = sample_general_triangle(t, n, seed)?;
    let values: Vec<f64> = points.iter_points().map(f).collect();
    let estimate = estimate_from_values(triangle_area(t), &values)?;
    Ok((estimate, seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{
        tetrahedron_unit_monomial_integral, tetrahedron_unit_volume,
        triangle_unit_monomial_integral,
    };
    use crate::samplers::{sample_unit_tetrahedron, sample_unit_triangle};
    use approx::assert_relative_eq;

    fn seed() -> Seed {
        Seed::new(123456789).unwrap()
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(estimate_from_values(1.0, &[]).is_err());
    }

    #[test]
    fn test_std_error_of_known_values() {
        // values 0, 2: mean 1, sample variance 2, std error sqrt(2/2) = 1
        let estimate = estimate_from_values(3.0, &[0.0, 2.0]).unwrap();
        assert_relative_eq!(estimate.value, 3.0);
        assert_relative_eq!(estimate.std_error, 3.0, epsilon = 1e-12);
        assert_eq!(estimate.n, 2);
        assert_relative_eq!(estimate.error_against(2.5), 0.5);
    }

    #[test]
    fn test_tetrahedron_monomials_within_error_bars() {
        let (points, _) = sample_unit_tetrahedron(20_000, seed());
        for e in [[0, 0, 0], [1, 0, 0], [0, 2, 1], [3, 0, 2]] {
            let estimate = monomial_estimate(tetrahedron_unit_volume(), &e, &points).unwrap();
            let exact = tetrahedron_unit_monomial_integral(e);
            assert!(
                estimate.error_against(exact) <= 5.0 * estimate.std_error + 1e-12,
                "e={:?} estimate={} exact={} se={}",
                e,
                estimate.value,
                exact,
                estimate.std_error
            );
        }
    }

    #[test]
    fn test_unit_triangle_monomials() {
        let (points, _) = sample_unit_triangle(20_000, seed());
        for e in [[1, 0], [0, 1], [2, 0], [1, 1], [1, 3]] {
            let estimate = monomial_estimate(0.5, &e, &points).unwrap();
            let exact = triangle_unit_monomial_integral(e);
            assert!(
                estimate.error_against(exact) <= 5.0 * estimate.std_error,
                "e={:?} estimate={} exact={}",
                e,
                estimate.value,
                exact
            );
        }
    }

    #[test]
    fn test_triangle_monte_carlo_seed_and_area() {
        let t = [[2.0, 0.0], [3.0, 4.0], [0.0, 3.0]];
        let (estimate, end) = triangle_monte_carlo(&t, 100, |_| 1.0, seed()).unwrap();
        let (_, end_sampler) = sample_unit_triangle(100, seed());
        assert_eq!(end, end_sampler);
        assert_relative_eq!(estimate.value, triangle_area(&t), epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_monte_carlo_zero_samples() {
        let t = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        assert!(triangle_monte_carlo(&t, 0, |_| 1.0, seed()).is_err());
    }
}
