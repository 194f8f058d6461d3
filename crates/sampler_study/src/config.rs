//! Study configuration management
//!
//! Handles loading configuration from TOML files and `SAMPLER_*` environment
//! variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use sampler_core::rng::Seed;
use sampler_domains::geometry::{is_degenerate, PrescribedTriangulation, Triangle};
use sampler_domains::samplers::TriangleTable;

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "SAMPLER_CONFIG";

const SEED_VAR: &str = "SAMPLER_SEED";
const LOG_LEVEL_VAR: &str = "SAMPLER_LOG_LEVEL";
const OUTPUT_VAR: &str = "SAMPLER_OUTPUT";
const POLYGON_N_START_VAR: &str = "SAMPLER_POLYGON_N_START";
const POLYGON_N_END_VAR: &str = "SAMPLER_POLYGON_N_END";
const TETRAHEDRON_N_VAR: &str = "SAMPLER_TETRAHEDRON_N";
const TRIANGLE_N_END_VAR: &str = "SAMPLER_TRIANGLE_N_END";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed: {0}. Must not be a multiple of 2147483647")]
    InvalidSeed(i32),

    #[error("Invalid sample range for {study}: start {start}, end {end}")]
    InvalidSampleRange {
        study: &'static str,
        start: usize,
        end: usize,
    },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Invalid triangle {index}: degenerate")]
    DegenerateTriangle { index: usize },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the study binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Polygon doubling study
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolygonStudyConfig {
    /// Counter-clockwise polygon vertices
    pub vertices: Vec<[f64; 2]>,
    /// Triangulation of `vertices` (`vertices.len() - 2` index triples)
    pub triangles: Vec<[usize; 3]>,
    /// Monomial exponents to estimate
    pub exponents: Vec<[u32; 2]>,
    /// First sample count
    pub n_start: usize,
    /// Last sample count (inclusive upper bound of the doubling sequence)
    pub n_end: usize,
}

impl Default for PolygonStudyConfig {
    fn default() -> Self {
        Self {
            vertices: vec![[-0.5, -0.5], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
            exponents: vec![[0, 0], [2, 0], [0, 2], [4, 0], [2, 2], [0, 4], [6, 0]],
            n_start: 1 << 10,
            n_end: 1 << 17,
        }
    }
}

/// Unit tetrahedron exponent-grid study
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TetrahedronStudyConfig {
    /// Batch size
    pub n: usize,
    /// Largest exponent per coordinate
    pub max_exponent: u32,
}

impl Default for TetrahedronStudyConfig {
    fn default() -> Self {
        Self {
            n: 4192,
            max_exponent: 3,
        }
    }
}

/// `x·y³` doubling study over general triangles
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TriangleStudyConfig {
    /// Triangles to integrate over
    pub triangles: Vec<Triangle>,
    /// Last sample count (the sequence starts at 1)
    pub n_end: usize,
}

impl Default for TriangleStudyConfig {
    fn default() -> Self {
        Self {
            triangles: vec![
                [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
                [[1.0, 0.0], [2.0, 4.0], [0.0, 5.0]],
                [[2.0, 0.0], [3.0, 4.0], [0.0, 3.0]],
            ],
            n_end: 65_536,
        }
    }
}

/// Study configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Raw generator seed
    pub seed: i32,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Optional JSON report path
    pub output: Option<PathBuf>,
    /// Polygon study settings
    pub polygon: PolygonStudyConfig,
    /// Tetrahedron study settings
    pub tetrahedron: TetrahedronStudyConfig,
    /// Triangle study settings
    pub triangle: TriangleStudyConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            seed: 123456789,
            log_level: LogLevel::Info,
            output: None,
            polygon: PolygonStudyConfig::default(),
            tetrahedron: TetrahedronStudyConfig::default(),
            triangle: TriangleStudyConfig::default(),
        }
    }
}

impl StudyConfig {
    /// Create a new StudyConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StudyConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SAMPLER_*` overrides from `lookup`; unset keys keep their value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(SEED_VAR) {
            self.seed = parse_var(SEED_VAR, &seed)?;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(output) = lookup(OUTPUT_VAR) {
            self.output = Some(PathBuf::from(output));
        }
        if let Some(n) = lookup(POLYGON_N_START_VAR) {
            self.polygon.n_start = parse_var(POLYGON_N_START_VAR, &n)?;
        }
        if let Some(n) = lookup(POLYGON_N_END_VAR) {
            self.polygon.n_end = parse_var(POLYGON_N_END_VAR, &n)?;
        }
        if let Some(n) = lookup(TETRAHEDRON_N_VAR) {
            self.tetrahedron.n = parse_var(TETRAHEDRON_N_VAR, &n)?;
        }
        if let Some(n) = lookup(TRIANGLE_N_END_VAR) {
            self.triangle.n_end = parse_var(TRIANGLE_N_END_VAR, &n)?;
        }
        Ok(())
    }

    /// Validated generator seed
    pub fn seed(&self) -> Result<Seed, ConfigError> {
        Seed::new(self.seed).map_err(|_| ConfigError::InvalidSeed(self.seed))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seed()?;

        let polygon = &self.polygon;
        if polygon.n_start == 0 || polygon.n_start > polygon.n_end {
            return Err(ConfigError::InvalidSampleRange {
                study: "polygon",
                start: polygon.n_start,
                end: polygon.n_end,
            });
        }
        let geometry = PrescribedTriangulation::new(polygon.triangles.clone());
        TriangleTable::build(&geometry, &polygon.vertices)
            .map_err(|e| ConfigError::InvalidPolygon(e.to_string()))?;

        if self.tetrahedron.n == 0 {
            return Err(ConfigError::InvalidSampleRange {
                study: "tetrahedron",
                start: 0,
                end: 0,
            });
        }

        if self.triangle.n_end == 0 {
            return Err(ConfigError::InvalidSampleRange {
                study: "triangle",
                start: 1,
                end: 0,
            });
        }
        for (index, t) in self.triangle.triangles.iter().enumerate() {
            if is_degenerate(t) {
                return Err(ConfigError::DegenerateTriangle { index });
            }
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={:?} is not a valid number", key, value)))
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(config_file: Option<&Path>) -> Result<StudyConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => StudyConfig::from_file(path)?,
        None => StudyConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;

    // Final validation
    config.validate()?;

    Ok(config)
}
