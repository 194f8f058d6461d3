//! Monomial test integrands `∏ x_i^{e_i}`.
//!
//! Zero exponents are skipped rather than evaluated, so `0^0` is treated as
//! `1` without relying on the floating-point `powi` convention.

use num_traits::Float;
use sampler_core::{PointSet, SamplingError};

/// Evaluates a monomial at a single point.
///
/// # Errors
///
/// Returns [`SamplingError::DimensionMismatch`] if `exponents.len()` differs
/// from `point.len()`.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::monomial::monomial_at;
///
/// assert_eq!(monomial_at(&[1, 3], &[2.0_f64, 0.5]).unwrap(), 0.25);
/// assert_eq!(monomial_at(&[0, 2], &[0.0_f32, 3.0]).unwrap(), 9.0);
/// ```
pub fn monomial_at<T: Float>(exponents: &[u32], point: &[T]) -> Result<T, SamplingError> {
    check_dimension(exponents, point.len())?;
    let mut value = T::one();
    for (&e, &x) in exponents.iter().zip(point) {
        if e != 0 {
            value = value * x.powi(to_power(e)?);
        }
    }
    Ok(value)
}

/// Evaluates a monomial at every point of a batch.
///
/// `v[j] = ∏_i x[i][j]^{e[i]}` with `0^0 = 1`.
///
/// # Errors
///
/// Returns [`SamplingError::DimensionMismatch`] if `exponents.len()` differs
/// from `points.dim()`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::PointSet;
/// use sampler_domains::monomial::monomial_value;
///
/// let points = PointSet::from_points(&[[0.0, 2.0], [3.0, 0.5]]);
/// assert_eq!(monomial_value(&[0, 0], &points).unwrap(), vec![1.0, 1.0]);
/// assert_eq!(monomial_value(&[2, 1], &points).unwrap(), vec![0.0, 4.5]);
/// ```
pub fn monomial_value(exponents: &[u32], points: &PointSet) -> Result<Vec<f64>, SamplingError> {
    check_dimension(exponents, points.dim())?;
    let mut values = vec![1.0; points.len()];
    for (i, &e) in exponents.iter().enumerate() {
        if e == 0 {
            continue;
        }
        let power = to_power(e)?;
        for (v, x) in values.iter_mut().zip(points.coordinate(i)) {
            *v *= x.powi(power);
        }
    }
    Ok(values)
}

fn check_dimension(exponents: &[u32], dim: usize) -> Result<(), SamplingError> {
    if exponents.len() != dim {
        return Err(SamplingError::DimensionMismatch {
            expected: dim,
            got: exponents.len(),
        });
    }
    Ok(())
}

fn to_power(e: u32) -> Result<i32, SamplingError> {
    i32::try_from(e).map_err(|_| SamplingError::InvalidInput(format!("exponent {} too large", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_exponents_give_ones() {
        let points = PointSet::from_points(&[[0.0, 0.0, 0.0], [-2.0, 5.0, 0.1]]);
        assert_eq!(monomial_value(&[0, 0, 0], &points).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_zero_base_nonzero_exponent() {
        let points = PointSet::from_points(&[[0.0, 4.0]]);
        assert_eq!(monomial_value(&[1, 0], &points).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_batch_matches_pointwise() {
        let points = PointSet::from_points(&[[0.5, -2.0, 3.0], [1.5, 0.25, -1.0], [10.0, 1.0, 0.0]]);
        let e = [3, 2, 1];
        let batch = monomial_value(&e, &points).unwrap();
        for (j, p) in points.iter_points().enumerate() {
            assert_relative_eq!(batch[j], monomial_at(&e, p).unwrap(), epsilon = 1e-12);
        }
        assert_relative_eq!(batch[0], 0.125 * 4.0 * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let points = PointSet::zeros(2, 3);
        assert_eq!(
            monomial_value(&[1, 1, 1], &points),
            Err(SamplingError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
        assert!(monomial_at(&[1], &[1.0_f64, 2.0]).is_err());
    }

    #[test]
    fn test_oversized_exponent_rejected() {
        let points = PointSet::from_points(&[[0.5]]);
        assert!(matches!(
            monomial_value(&[u32::MAX], &points),
            Err(SamplingError::InvalidInput(_))
        ));
    }
}
