//! # sampler_domains: Uniform Sampling over Elementary Domains
//!
//! ## Layer 2 (Kernel) Role
//!
//! sampler_domains composes the seeded primitives of `sampler_core` into
//! uniform samples of geometric domains, and provides the references needed
//! to check Monte-Carlo estimates built from them:
//! - Unit triangle, general triangle, polygon and unit tetrahedron samplers (`samplers`)
//! - Injected triangulation capability and planar areas (`geometry`)
//! - Monomial test integrands (`monomial`)
//! - Closed-form simplex integrals (`exact`)
//! - Monte-Carlo estimates with standard errors (`integrate`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::rng::Seed;
//! use sampler_domains::exact::{tetrahedron_unit_monomial_integral, tetrahedron_unit_volume};
//! use sampler_domains::integrate::monomial_estimate;
//! use sampler_domains::samplers::sample_unit_tetrahedron;
//!
//! let seed = Seed::new(123456789)?;
//! let (points, _next_seed) = sample_unit_tetrahedron(4192, seed);
//!
//! let estimate = monomial_estimate(tetrahedron_unit_volume(), &[1, 1, 0], &points)?;
//! let exact = tetrahedron_unit_monomial_integral([1, 1, 0]);
//! assert!(estimate.error_against(exact) < 5.0 * estimate.std_error);
//! # Ok::<(), sampler_core::SamplingError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Estimate`, `PrescribedTriangulation` and `PointSet`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod exact;
pub mod geometry;
pub mod integrate;
pub mod monomial;
pub mod samplers;

pub use sampler_core;
