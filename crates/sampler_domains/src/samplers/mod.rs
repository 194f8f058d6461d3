//! Uniform samplers over elementary domains.
//!
//! Every sampler takes an explicit [`Seed`](sampler_core::rng::Seed) and
//! returns a `dimension × count` [`PointSet`](sampler_core::PointSet) together
//! with the successor seed. Samplers never keep the seed; continuing a stream
//! means passing the returned seed into the next call.
//!
//! | Sampler | Dimension | Steps per point |
//! |---|---|---|
//! | [`sample_unit_triangle`] | 2 | 2 |
//! | [`sample_general_triangle`] | 2 | 2 |
//! | [`sample_polygon`] | 2 | 3 |
//! | [`sample_unit_tetrahedron`] | 3 | 4 |

mod polygon;
mod tetrahedron;
mod triangle;

pub use polygon::{sample_polygon, TriangleTable};
pub use tetrahedron::sample_unit_tetrahedron;
pub use triangle::{reference_to_physical_t3, sample_general_triangle, sample_unit_triangle};
