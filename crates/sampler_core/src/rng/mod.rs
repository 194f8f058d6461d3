//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded Lehmer generator and the primitives built
//! on it. It is the only source of randomness in the workspace.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Output is a pure function of the input [`Seed`]
//! - **Explicit state**: Every primitive takes a seed and returns its successor;
//!   there is no generator object held behind the caller's back
//! - **Bit compatibility**: Multiplier 16807, modulus 2^31 - 1 and the output
//!   scale `4.656612875e-10` are fixed, so any conforming implementation
//!   reproduces the same stream from the same seed
//!
//! ## Module Structure
//!
//! - [`lcg`]: [`Seed`] and the raw Schrage step
//! - [`uniform`]: Scalar/vector/matrix uniform draws and integer ranges
//! - [`normal`]: Box-Muller standard normal draws
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{normal_vector, uniform_matrix, uniform_scalar, Seed};
//!
//! let seed = Seed::new(123456789)?;
//!
//! let (r, seed) = uniform_scalar(seed);
//! let (m, seed) = uniform_matrix(2, 10, seed);
//! let (z, _seed) = normal_vector(4, seed);
//!
//! assert!(r > 0.0 && r < 1.0);
//! assert_eq!(m.cols(), 10);
//! assert_eq!(z.len(), 4);
//! # Ok::<(), sampler_core::types::SamplingError>(())
//! ```

pub mod lcg;
pub mod normal;
pub mod uniform;

// Public re-exports
pub use lcg::{lcg_step, Seed, MODULUS, MULTIPLIER, UNIT_SCALE};
pub use normal::{normal_scalar, normal_vector};
pub use uniform::{
    fill_uniform, uniform_int_range, uniform_matrix, uniform_matrix_ab, uniform_scalar,
    uniform_scalar_ab, uniform_vector, uniform_vector_ab,
};
