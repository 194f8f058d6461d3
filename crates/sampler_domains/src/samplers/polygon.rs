//! Uniform sampling of a simple polygon.
//!
//! # Algorithm
//!
//! 1. Triangulate the polygon through the injected [`PolygonGeometry`]
//! 2. Normalise triangle areas and accumulate them into a table `c[0..n_v-2)`
//! 3. Per sample, draw `u`; select the first triangle with `u ≤ c[i]`
//! 4. Draw a reference-triangle point and map it into triangle `i`
//!
//! Choosing the triangle with probability equal to its area fraction is what
//! makes the union uniform; sampling a fixed triangle alone would not be.
//! Each sample consumes three generator steps: selector, `r0`, `r1`.

use sampler_core::rng::Seed;
use sampler_core::{PointSet, SamplingError};

use super::triangle::{map_point, unit_triangle_point};
use crate::geometry::{is_degenerate, Point2, PolygonGeometry, Triangle};

/// Area-weighted triangle table built from a polygon triangulation.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleTable {
    triangles: Vec<Triangle>,
    cumulative: Vec<f64>,
    area: f64,
}

impl TriangleTable {
    /// Triangulates `vertices` and builds the cumulative area table.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::InvalidInput`] if fewer than three vertices are
    ///   given or a triangle index is out of range
    /// - [`SamplingError::InvalidTriangulation`] if the triangulation does not
    ///   contain exactly `n_v - 2` triangles
    /// - [`SamplingError::DegenerateGeometry`] if any triangle area is not
    ///   strictly positive, or the triangle fails [`is_degenerate`]
    pub fn build<G>(geometry: &G, vertices: &[Point2]) -> Result<Self, SamplingError>
    where
        G: PolygonGeometry + ?Sized,
    {
        let nv = vertices.len();
        if nv < 3 {
            return Err(SamplingError::InvalidInput(format!(
                "polygon needs at least 3 vertices, got {}",
                nv
            )));
        }

        let indices = geometry.triangulate(vertices)?;
        if indices.len() != nv - 2 {
            return Err(SamplingError::InvalidTriangulation {
                expected: nv - 2,
                got: indices.len(),
            });
        }

        let mut triangles = Vec::with_capacity(indices.len());
        let mut areas = Vec::with_capacity(indices.len());
        for (k, &[a, b, c]) in indices.iter().enumerate() {
            if a >= nv || b >= nv || c >= nv {
                return Err(SamplingError::InvalidInput(format!(
                    "triangle {} references vertex outside 0..{}: {:?}",
                    k,
                    nv,
                    [a, b, c]
                )));
            }
            let t = [vertices[a], vertices[b], vertices[c]];
            let area = geometry.triangle_area(t[0], t[1], t[2]);
            if !area.is_finite() || area <= 0.0 || is_degenerate(&t) {
                return Err(SamplingError::DegenerateGeometry(format!(
                    "triangle {} {:?} has non-positive area {}",
                    k,
                    [a, b, c],
                    area
                )));
            }
            triangles.push(t);
            areas.push(area);
        }

        let total: f64 = areas.iter().sum();
        let mut running = 0.0;
        let cumulative = areas
            .iter()
            .map(|area| {
                running += area / total;
                running
            })
            .collect();

        Ok(Self {
            triangles,
            cumulative,
            area: total,
        })
    }

    /// Sum of the triangle areas.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Cumulative relative areas; the last entry is `1` up to rounding.
    #[inline]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// The physical triangles, in triangulation order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Index of the first triangle whose cumulative share is `≥ u`.
    ///
    /// Falls back to the last triangle if rounding leaves `u` above every
    /// entry.
    #[inline]
    pub fn select(&self, u: f64) -> usize {
        self.cumulative
            .iter()
            .position(|&c| u <= c)
            .unwrap_or(self.cumulative.len() - 1)
    }

    /// Draws `n` uniform points from the tabulated polygon.
    pub fn sample(&self, n: usize, mut seed: Seed) -> (PointSet, Seed) {
        let mut points = PointSet::zeros(2, n);
        for j in 0..n {
            let (u, next) = seed.draw();
            let i = self.select(u);
            let (reference, next) = unit_triangle_point(next);
            points
                .point_mut(j)
                .copy_from_slice(&map_point(&self.triangles[i], reference));
            seed = next;
        }
        (points, seed)
    }
}

/// Samples `n` points uniformly from a simple counter-clockwise polygon.
///
/// Returns a `2 × n` batch (one point per column) and the successor seed.
///
/// # Errors
///
/// See [`TriangleTable::build`].
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::Seed;
/// use sampler_domains::geometry::PrescribedTriangulation;
/// use sampler_domains::samplers::sample_polygon;
///
/// let v = [[-0.5, -0.5], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
/// let geometry = PrescribedTriangulation::new(vec![[0, 1, 2], [0, 2, 3]]);
///
/// let (points, _) = sample_polygon(&geometry, &v, 1024, Seed::new(123456789).unwrap()).unwrap();
/// assert_eq!((points.dim(), points.len()), (2, 1024));
/// ```
pub fn sample_polygon<G>(
    geometry: &G,
    vertices: &[Point2],
    n: usize,
    seed: Seed,
) -> Result<(PointSet, Seed), SamplingError>
where
    G: PolygonGeometry + ?Sized,
{
    let table = TriangleTable::build(geometry, vertices)?;
    Ok(table.sample(n, seed))
}
