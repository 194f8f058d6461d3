//! Error types for structured error handling.
//!
//! This module provides:
//! - `SamplingError`: Errors from seed construction, sampling and evaluation

use thiserror::Error;

/// Categorised sampling errors.
///
/// Every failure is reported to the caller unchanged. Nothing in the
/// sampling pipeline retries or substitutes a default.
///
/// # Variants
/// - `InvalidSeed`: Raw seed normalises to zero
/// - `DegenerateGeometry`: Zero or negative area where a positive one is required
/// - `InvalidInput`: Malformed parameters (e.g. fewer than three polygon vertices)
/// - `InvalidTriangulation`: Triangulation with the wrong number of triangles
/// - `DimensionMismatch`: Exponent vector and point dimension disagree, or a
///   point set's data does not fill its shape
///
/// # Examples
/// ```
/// use sampler_core::types::SamplingError;
///
/// let err = SamplingError::InvalidSeed { seed: 0 };
/// assert_eq!(format!("{}", err), "Invalid seed 0: must not normalise to zero");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// Seed is zero after folding into `[1, 2^31 - 2]`.
    #[error("Invalid seed {seed}: must not normalise to zero")]
    InvalidSeed {
        /// The raw seed supplied by the caller
        seed: i64,
    },

    /// Geometry has zero or negative area.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Triangulation does not decompose the polygon into `n_v - 2` triangles.
    #[error("Invalid triangulation: expected {expected} triangles, got {got}")]
    InvalidTriangulation {
        /// Number of triangles required (`n_v - 2`)
        expected: usize,
        /// Number of triangles returned
        got: usize,
    },

    /// Exponent vector length differs from the point dimension, or a
    /// serialised point set holds the wrong number of values.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Point dimension, or `rows × cols`
        expected: usize,
        /// Exponent vector length, or data length
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_error_display() {
        let err = SamplingError::InvalidSeed { seed: 2147483647 };
        assert!(err.to_string().contains("2147483647"));

        let err = SamplingError::DegenerateGeometry("zero-area triangle".to_string());
        assert_eq!(err.to_string(), "Degenerate geometry: zero-area triangle");

        let err = SamplingError::InvalidTriangulation {
            expected: 2,
            got: 3,
        };
        assert!(err.to_string().contains("expected 2 triangles, got 3"));

        let err = SamplingError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3, got 2");
    }

    #[test]
    fn test_sampling_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&SamplingError::InvalidInput("x".to_string()));
    }
}
