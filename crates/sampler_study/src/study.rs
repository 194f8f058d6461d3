//! Convergence studies: Monte-Carlo estimates against exact values as the
//! sample count grows.
//!
//! Each study threads one seed through all of its batches, so a table is
//! fully determined by the configured seed. Tables are returned as data and
//! logged through `tracing`; the binary optionally dumps them as JSON.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use sampler_core::rng::Seed;
use sampler_domains::exact::{
    tetrahedron_unit_monomial_integral, tetrahedron_unit_volume, triangle_unit_monomial_integral,
};
use sampler_domains::geometry::{triangle_area, PrescribedTriangulation, Triangle};
use sampler_domains::integrate::{monomial_estimate, triangle_monte_carlo, Estimate};
use sampler_domains::samplers::{sample_unit_tetrahedron, TriangleTable};

use crate::config::StudyConfig;
use crate::error::StudyError;

/// Exponents of the triangle study integrand `x·y³`.
const TRIANGLE_EXPONENTS: [u32; 2] = [1, 3];

const UNIT_TRIANGLE: Triangle = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];

/// One estimate in a convergence table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceRow {
    /// Sample count of the batch.
    pub n: usize,
    /// Monomial exponents of the integrand.
    pub exponents: Vec<u32>,
    /// Monte-Carlo estimate.
    pub estimate: Estimate,
    /// Exact integral, when a closed form is available.
    pub exact: Option<f64>,
}

impl ConvergenceRow {
    /// Absolute error against the exact integral, if known.
    pub fn error(&self) -> Option<f64> {
        self.exact.map(|exact| self.estimate.error_against(exact))
    }
}

/// Convergence table for a single domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyTable {
    /// Human-readable domain name.
    pub domain: String,
    /// Area or volume of the domain.
    pub measure: f64,
    /// Estimates in the order they were computed.
    pub rows: Vec<ConvergenceRow>,
}

/// All tables of a study run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    /// Raw seed the run started from.
    pub seed: i32,
    /// One table per studied domain.
    pub tables: Vec<StudyTable>,
}

/// `start, 2·start, 4·start, …` while not above `end`.
fn doubling(start: usize, end: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(start), |&n| n.checked_mul(2)).take_while(move |&n| n <= end)
}

fn log_row(domain: &str, row: &ConvergenceRow) {
    debug!(
        domain,
        n = row.n,
        exponents = ?row.exponents,
        estimate = row.estimate.value,
        std_error = row.estimate.std_error,
        error = ?row.error(),
        "estimate"
    );
}

/// Polygon doubling study.
///
/// For each `n` in the doubling sequence, samples the configured polygon
/// (continuing the seed from the previous batch) and estimates every
/// configured monomial. Only the constant monomial has a known exact value,
/// the polygon area.
pub fn polygon_study(config: &StudyConfig) -> Result<StudyTable, StudyError> {
    let polygon = &config.polygon;
    let geometry = PrescribedTriangulation::new(polygon.triangles.clone());
    let table = TriangleTable::build(&geometry, &polygon.vertices)?;
    let area = table.area();

    info!(
        vertices = polygon.vertices.len(),
        area,
        n_start = polygon.n_start,
        n_end = polygon.n_end,
        "Polygon study"
    );

    let mut seed = config.seed()?;
    let mut rows = Vec::new();
    for n in doubling(polygon.n_start, polygon.n_end) {
        let (points, next) = table.sample(n, seed);
        seed = next;
        for e in &polygon.exponents {
            let row = ConvergenceRow {
                n,
                exponents: e.to_vec(),
                estimate: monomial_estimate(area, e, &points)?,
                exact: (*e == [0, 0]).then_some(area),
            };
            log_row("polygon", &row);
            rows.push(row);
        }
    }

    Ok(StudyTable {
        domain: "polygon".to_string(),
        measure: area,
        rows,
    })
}

/// Unit tetrahedron exponent-grid study.
///
/// Draws one batch and estimates every monomial with exponents in
/// `{0..=max_exponent}³` against its closed form.
pub fn tetrahedron_study(config: &StudyConfig) -> Result<StudyTable, StudyError> {
    let n = config.tetrahedron.n;
    let max = config.tetrahedron.max_exponent;
    let volume = tetrahedron_unit_volume();
    info!(n, max_exponent = max, "Tetrahedron study");

    let (points, _) = sample_unit_tetrahedron(n, config.seed()?);

    let mut rows = Vec::new();
    for a in 0..=max {
        for b in 0..=max {
            for c in 0..=max {
                let e = [a, b, c];
                let row = ConvergenceRow {
                    n,
                    exponents: e.to_vec(),
                    estimate: monomial_estimate(volume, &e, &points)?,
                    exact: Some(tetrahedron_unit_monomial_integral(e)),
                };
                log_row("tetrahedron", &row);
                rows.push(row);
            }
        }
    }

    Ok(StudyTable {
        domain: "unit tetrahedron".to_string(),
        measure: volume,
        rows,
    })
}

/// `x·y³` doubling study over each configured triangle.
///
/// Every triangle restarts from the configured seed and continues it across
/// `n = 1, 2, 4, …`. The exact value is reported for the unit triangle.
pub fn triangle_study(config: &StudyConfig) -> Result<Vec<StudyTable>, StudyError> {
    let integrand = |p: &[f64]| p[0] * p[1].powi(3);
    let mut tables = Vec::with_capacity(config.triangle.triangles.len());

    for t in &config.triangle.triangles {
        let domain = format!("triangle {:?}", t);
        let measure = triangle_area(t);
        let exact =
            (*t == UNIT_TRIANGLE).then(|| triangle_unit_monomial_integral(TRIANGLE_EXPONENTS));
        info!(domain = %domain, area = measure, n_end = config.triangle.n_end, "Triangle study");

        let mut seed: Seed = config.seed()?;
        let mut rows = Vec::new();
        for n in doubling(1, config.triangle.n_end) {
            let (estimate, next) = triangle_monte_carlo(t, n, integrand, seed)?;
            seed = next;
            let row = ConvergenceRow {
                n,
                exponents: TRIANGLE_EXPONENTS.to_vec(),
                estimate,
                exact,
            };
            log_row(&domain, &row);
            rows.push(row);
        }

        tables.push(StudyTable {
            domain,
            measure,
            rows,
        });
    }

    Ok(tables)
}

/// Runs the polygon, tetrahedron and triangle studies in order.
pub fn run_all(config: &StudyConfig) -> Result<StudyReport, StudyError> {
    config.validate()?;

    let mut tables = vec![polygon_study(config)?, tetrahedron_study(config)?];
    tables.extend(triangle_study(config)?);

    info!(tables = tables.len(), "Study complete");
    Ok(StudyReport {
        seed: config.seed,
        tables,
    })
}

/// Writes `report` as pretty-printed JSON.
pub fn write_report(report: &StudyReport, path: &Path) -> Result<(), StudyError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_config() -> StudyConfig {
        let mut config = StudyConfig::default();
        config.polygon.n_start = 256;
        config.polygon.n_end = 2048;
        config.tetrahedron.n = 2000;
        config.tetrahedron.max_exponent = 2;
        config.triangle.n_end = 1024;
        config
    }

    #[test]
    fn test_doubling_sequence() {
        assert_eq!(doubling(1, 16).collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
        assert_eq!(doubling(1024, 3000).collect::<Vec<_>>(), vec![1024, 2048]);
        assert_eq!(doubling(5, 4).count(), 0);
        assert_eq!(doubling(usize::MAX / 2 + 1, usize::MAX).count(), 1);
    }

    #[test]
    fn test_polygon_study_shape() {
        let config = small_config();
        let table = polygon_study(&config).unwrap();
        assert_relative_eq!(table.measure, 3.0, epsilon = 1e-12);
        // 4 sample counts × 7 exponent vectors
        assert_eq!(table.rows.len(), 4 * 7);

        for row in table.rows.iter().filter(|r| r.exponents == vec![0, 0]) {
            assert_relative_eq!(row.estimate.value, 3.0, epsilon = 1e-12);
            assert_eq!(row.error(), Some(0.0));
        }
        assert!(table
            .rows
            .iter()
            .filter(|r| r.exponents != vec![0, 0])
            .all(|r| r.exact.is_none()));
    }

    #[test]
    fn test_tetrahedron_study_against_exact() {
        let config = small_config();
        let table = tetrahedron_study(&config).unwrap();
        assert_eq!(table.rows.len(), 27);
        for row in &table.rows {
            let error = row.error().unwrap();
            assert!(
                error <= 5.0 * row.estimate.std_error + 1e-12,
                "exponents {:?} error {}",
                row.exponents,
                error
            );
        }
    }

    #[test]
    fn test_triangle_study_tables() {
        let config = small_config();
        let tables = triangle_study(&config).unwrap();
        assert_eq!(tables.len(), 3);
        for table in &tables {
            assert_eq!(table.rows.len(), 11);
            assert_eq!(table.rows[0].n, 1);
            assert_eq!(table.rows.last().map(|r| r.n), Some(1024));
        }
        assert_relative_eq!(tables[0].measure, 0.5);
        assert_relative_eq!(tables[0].rows[0].exact.unwrap(), 1.0 / 120.0, epsilon = 1e-15);
        assert!(tables[1].rows.iter().all(|r| r.exact.is_none()));
    }

    #[test]
    fn test_run_all_is_deterministic() {
        let config = small_config();
        let first = run_all(&config).unwrap();
        let second = run_all(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.tables.len(), 5);
        assert_eq!(first.seed, 123456789);
    }

    #[test]
    fn test_report_serialises() {
        let mut config = small_config();
        config.triangle.triangles.truncate(1);
        let report = run_all(&config).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], 123456789);
        assert_eq!(json["tables"][0]["domain"], "polygon");
        assert!(json["tables"][1]["rows"][0]["estimate"]["std_error"].is_number());
    }
}
