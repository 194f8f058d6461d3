//! Core types for the sampling pipeline.
//!
//! This module provides:
//! - `SamplingError`: Structured error type shared by every sampler
//! - `PointSet`: Column-major numeric buffer with explicit shape

pub mod error;
pub mod point_set;

pub use error::SamplingError;
pub use point_set::PointSet;
