//! Convergence studies for the Lehmer sampling library
//!
//! This crate runs the reference convergence studies (polygon doubling,
//! tetrahedron exponent grid, triangle `x·y³` doubling) on top of
//! `sampler_domains`, with TOML/environment configuration and `tracing`
//! based reporting.

pub mod config;
pub mod error;
pub mod study;

pub use config::{build_config, ConfigError, LogLevel, StudyConfig};
pub use error::StudyError;
pub use study::{
    polygon_study, run_all, tetrahedron_study, triangle_study, write_report, ConvergenceRow,
    StudyReport, StudyTable,
};

// Re-export sampling crates for downstream users
pub use sampler_core;
pub use sampler_domains;

/// Study binary version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
