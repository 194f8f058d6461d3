//! Error types for study runs.

use sampler_core::SamplingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while configuring, running or reporting a study.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sampler or estimator rejected its input.
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// The report could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
