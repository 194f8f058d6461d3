//! Planar geometry needed by the samplers.
//!
//! Polygon triangulation is not computed here. It is an injected capability,
//! [`PolygonGeometry`]. [`PrescribedTriangulation`] wraps a triangle list
//! computed elsewhere, and any `Fn(&[[f64; 2]]) -> Vec<[usize; 3]>` works too.

use sampler_core::SamplingError;

/// A point in the plane.
pub type Point2 = [f64; 2];

/// Triangle given by its three vertices.
///
/// Vertex `0`, `1`, `2` are the images of the reference vertices
/// `(0,0)`, `(1,0)`, `(0,1)` respectively.
pub type Triangle = [Point2; 3];

/// Triangulation and area capability consumed by the polygon sampler.
///
/// # Contract
///
/// For a simple polygon with `n_v` counter-clockwise vertices,
/// `triangulate` returns `n_v - 2` index triples into `vertices`, each triple
/// counter-clockwise. `triangle_area` returns the signed area, positive for
/// counter-clockwise vertex order.
pub trait PolygonGeometry {
    /// Decomposes the polygon into triangles.
    fn triangulate(&self, vertices: &[Point2]) -> Result<Vec<[usize; 3]>, SamplingError>;

    /// Signed area of the triangle `(p0, p1, p2)`.
    fn triangle_area(&self, p0: Point2, p1: Point2, p2: Point2) -> f64 {
        triangle_signed_area(&[p0, p1, p2])
    }
}

impl<F> PolygonGeometry for F
where
    F: Fn(&[Point2]) -> Vec<[usize; 3]>,
{
    fn triangulate(&self, vertices: &[Point2]) -> Result<Vec<[usize; 3]>, SamplingError> {
        Ok(self(vertices))
    }
}

/// Triangulation supplied up front by an external geometry kernel.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::geometry::{PolygonGeometry, PrescribedTriangulation};
///
/// let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
/// let geometry = PrescribedTriangulation::new(vec![[0, 1, 2], [0, 2, 3]]);
/// assert_eq!(geometry.triangulate(&square).unwrap().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrescribedTriangulation {
    triangles: Vec<[usize; 3]>,
}

impl PrescribedTriangulation {
    /// Wraps a precomputed list of vertex-index triples.
    pub fn new(triangles: Vec<[usize; 3]>) -> Self {
        Self { triangles }
    }

    /// The stored triangles.
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }
}

impl PolygonGeometry for PrescribedTriangulation {
    fn triangulate(&self, _vertices: &[Point2]) -> Result<Vec<[usize; 3]>, SamplingError> {
        Ok(self.triangles.clone())
    }
}

/// Signed area of a triangle, positive when counter-clockwise.
#[inline]
pub fn triangle_signed_area(t: &Triangle) -> f64 {
    let [p0, p1, p2] = *t;
    0.5 * ((p1[0] - p0[0]) * (p2[1] - p0[1]) - (p2[0] - p0[0]) * (p1[1] - p0[1]))
}

/// Unsigned area of a triangle.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::geometry::triangle_area;
///
/// assert_eq!(triangle_area(&[[0.0, 0.0], [3.0, 0.0], [0.0, 4.0]]), 6.0);
/// ```
#[inline]
pub fn triangle_area(t: &Triangle) -> f64 {
    triangle_signed_area(t).abs()
}

/// Unsigned polygon area by the shoelace formula.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::geometry::polygon_area;
///
/// let v = [[-0.5, -0.5], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
/// assert!((polygon_area(&v) - 3.0).abs() < 1e-12);
/// ```
pub fn polygon_area(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let [x0, y0] = vertices[i];
            let [x1, y1] = vertices[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    0.5 * twice.abs()
}

/// Returns `true` if the triangle's area is negligible relative to its size.
///
/// A triangle is degenerate when its area is not finite or does not exceed
/// `f64::EPSILON` times its squared diameter. Every sampler and configuration
/// check uses this one predicate.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::geometry::is_degenerate;
///
/// assert!(is_degenerate(&[[0.0, 0.0], [1.0, 0.0], [2.0, 1e-17]]));
/// assert!(!is_degenerate(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]));
/// ```
pub fn is_degenerate(t: &Triangle) -> bool {
    let area = triangle_area(t);
    let scale = t
        .iter()
        .flat_map(|p| t.iter().map(move |q| (p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2)))
        .fold(0.0_f64, f64::max);
    !area.is_finite() || area <= f64::EPSILON * scale
}
