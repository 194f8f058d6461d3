//! # sampler_core: Seeded Random Foundation for Monte-Carlo Sampling
//!
//! ## Layer 1 (Foundation) Role
//!
//! sampler_core serves as the bottom layer of the sampling workspace, providing:
//! - The Lehmer generator and its explicit [`Seed`](rng::Seed) state (`rng::lcg`)
//! - Uniform scalar/vector/matrix and integer-range draws (`rng::uniform`)
//! - Box-Muller normal draws (`rng::normal`)
//! - Column-major sample container `PointSet` (`types::point_set`)
//! - Error type `SamplingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other sampler_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::rng::{uniform_vector, Seed};
//!
//! let seed = Seed::new(123456789).unwrap();
//! let (values, next_seed) = uniform_vector(4, seed);
//!
//! // Resuming from `next_seed` continues the same stream.
//! let (more, _) = uniform_vector(4, next_seed);
//! let (all, _) = uniform_vector(8, seed);
//! assert_eq!([values, more].concat(), all);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Seed` and `PointSet`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
pub mod types;

pub use rng::Seed;
pub use types::{PointSet, SamplingError};
