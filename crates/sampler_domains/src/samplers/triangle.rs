//! Uniform sampling of the reference triangle and of general triangles.
//!
//! # Reference Element
//!
//! ```text
//!   η
//!   1  2
//!   |  |\
//!   |  | \
//!   |  |  \
//!   0  0---1
//!   +--0---1--> ξ
//! ```
//!
//! A uniform pair `(r0, r1)` on the unit square is folded into the triangle
//! `{ξ, η ≥ 0, ξ + η ≤ 1}` by reflecting through `(1/2, 1/2)` whenever
//! `r0 + r1 > 1`. The reflection maps the upper half of the square onto the
//! lower half with unit Jacobian, so the result is exactly uniform and no
//! draw is ever discarded.

use sampler_core::rng::Seed;
use sampler_core::{PointSet, SamplingError};

use crate::geometry::{is_degenerate, triangle_area, Triangle};

/// One reference-triangle sample from two uniform draws.
#[inline]
pub(crate) fn unit_triangle_point(seed: Seed) -> ([f64; 2], Seed) {
    let (mut r0, seed) = seed.draw();
    let (mut r1, seed) = seed.draw();
    if r0 + r1 > 1.0 {
        r0 = 1.0 - r0;
        r1 = 1.0 - r1;
    }
    ([r0, r1], seed)
}

/// Affine image of a reference point `(ξ, η)` in triangle `t`.
#[inline]
pub(crate) fn map_point(t: &Triangle, [xi, eta]: [f64; 2]) -> [f64; 2] {
    let w0 = 1.0 - xi - eta;
    [
        w0 * t[0][0] + xi * t[1][0] + eta * t[2][0],
        w0 * t[0][1] + xi * t[1][1] + eta * t[2][1],
    ]
}

/// Samples `n` points uniformly from the unit triangle.
///
/// Returns a `2 × n` batch (one point per column) and the successor seed.
/// Each point consumes exactly two generator steps.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Seed;
/// use sampler_domains::samplers::sample_unit_triangle;
///
/// let (points, _) = sample_unit_triangle(1000, Seed::new(123456789).unwrap());
/// assert!(points.iter_points().all(|p| p[0] >= 0.0 && p[1] >= 0.0 && p[0] + p[1] <= 1.0));
/// ```
pub fn sample_unit_triangle(n: usize, mut seed: Seed) -> (PointSet, Seed) {
    let mut points = PointSet::zeros(2, n);
    for j in 0..n {
        let (p, next) = unit_triangle_point(seed);
        points.point_mut(j).copy_from_slice(&p);
        seed = next;
    }
    (points, seed)
}

/// Maps a batch of reference-triangle points into triangle `t`.
///
/// Computes `T0 (1 − ξ − η) + T1 ξ + T2 η` for every column of `reference`.
/// The map is affine, so a uniform reference batch stays uniform.
///
/// # Errors
///
/// Returns [`SamplingError::DimensionMismatch`] if `reference` is not
/// two-dimensional.
pub fn reference_to_physical_t3(
    t: &Triangle,
    reference: &PointSet,
) -> Result<PointSet, SamplingError> {
    if reference.dim() != 2 {
        return Err(SamplingError::DimensionMismatch {
            expected: 2,
            got: reference.dim(),
        });
    }
    let mut physical = PointSet::zeros(2, reference.len());
    for (j, p) in reference.iter_points().enumerate() {
        physical
            .point_mut(j)
            .copy_from_slice(&map_point(t, [p[0], p[1]]));
    }
    Ok(physical)
}

/// Samples `n` points uniformly from the triangle `t`.
///
/// Draws a unit-triangle batch and maps it with
/// [`reference_to_physical_t3`], so the seed advances exactly as for
/// [`sample_unit_triangle`].
///
/// # Errors
///
/// Returns [`SamplingError::DegenerateGeometry`] for a zero-area triangle.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Seed;
/// use sampler_domains::samplers::{sample_general_triangle, sample_unit_triangle};
///
/// let t = [[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]];
/// let seed = Seed::new(123456789).unwrap();
/// let (points, end) = sample_general_triangle(&t, 4, seed).unwrap();
/// let (reference, end_ref) = sample_unit_triangle(4, seed);
///
/// assert_eq!(end, end_ref);
/// assert!((points.get(0, 0) - 3.0 * reference.get(0, 0)).abs() < 1e-12);
/// ```
pub fn sample_general_triangle(
    t: &Triangle,
    n: usize,
    seed: Seed,
) -> Result<(PointSet, Seed), SamplingError> {
    if is_degenerate(t) {
        return Err(SamplingError::DegenerateGeometry(format!(
            "triangle {:?} has area {}",
            t,
            triangle_area(t)
        )));
    }
    let (reference, seed) = sample_unit_triangle(n, seed);
    let physical = reference_to_physical_t3(t, &reference)?;
    Ok((physical, seed))
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
    fn test_reflection_applied_only_above_diagonal() {
        let (raw, _) = uniform_vector(200, seed());
        let (points, _) = sample_unit_triangle(100, seed());
        for (j, p) in points.iter_points().enumerate() {
            let (r0, r1) = (raw[2 * j], raw[2 * j + 1]);
            if r0 + r1 > 1.0 {
                assert_eq!(p, &[1.0 - r0, 1.0 - r1]);
            } else {
                assert_eq!(p, &[r0, r1]);
            }
        }
    }

    #[test]
    fn test_unit_triangle_seed_advance() {
        let (_, end) = sample_unit_triangle(50, seed());
        let (_, end_uniform) = uniform_vector(100, seed());
        assert_eq!(end, end_uniform);
    }

    #[test]
    fn test_map_vertices() {
        let t = [[1.0, 0.0], [2.0, 4.0], [0.0, 5.0]];
        assert_eq!(map_point(&t, [0.0, 0.0]), t[0]);
        assert_eq!(map_point(&t, [1.0, 0.0]), t[1]);
        assert_eq!(map_point(&t, [0.0, 1.0]), t[2]);
        let centroid = map_point(&t, [1.0 / 3.0, 1.0 / 3.0]);
        assert_relative_eq!(centroid[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(centroid[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_general_triangle_points_inside() {
        let t = [[0.0, 0.0], [3.0, 4.0], [0.0, 3.0]];
        let (points, _) = sample_general_triangle(&t, 2_000, seed()).unwrap();
        let area = triangle_area(&t);
        for p in points.iter_points() {
            let q = [p[0], p[1]];
            let sub = triangle_area(&[t[0], t[1], q])
                + triangle_area(&[t[1], t[2], q])
                + triangle_area(&[t[2], t[0], q]);
            assert_relative_eq!(sub, area, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_triangle_rejected() {
        let t = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let err = sample_general_triangle(&t, 10, seed()).unwrap_err();
        assert!(matches!(err, SamplingError::DegenerateGeometry(_)));
    }

    #[test]
    fn test_reference_dimension_checked() {
        let t = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let wrong = PointSet::zeros(3, 4);
        assert_eq!(
            reference_to_physical_t3(&t, &wrong),
            Err(SamplingError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
    }
}
