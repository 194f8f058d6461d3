//! End-to-end tests: configuration file to JSON report.

use std::io::Write;

use sampler_core::types::PointSet;
use sampler_study::config::{LogLevel, StudyConfig};
use sampler_study::study::{run_all, write_report};
use sampler_study::StudyError;

const SMALL_STUDY: &str = r#"
seed = 123456789
log_level = "warn"

[polygon]
n_start = 128
n_end = 512

[tetrahedron]
n = 1000
max_exponent = 1

[triangle]
triangles = [[[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]]]
n_end = 64
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_to_report() {
    let file = write_config(SMALL_STUDY);
    let config = StudyConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);

    let report = run_all(&config).unwrap();
    // polygon, tetrahedron, one triangle
    assert_eq!(report.tables.len(), 3);
    assert_eq!(report.tables[0].rows.len(), 3 * 7);
    assert_eq!(report.tables[1].rows.len(), 8);
    assert_eq!(report.tables[2].rows.len(), 7);
    assert!((report.tables[2].measure - 4.5).abs() < 1e-12);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");
    write_report(&report, &out).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["tables"].as_array().map(|t| t.len()), Some(3));
    assert_eq!(json["tables"][1]["domain"], "unit tetrahedron");
}

#[test]
fn test_same_seed_same_report() {
    let file = write_config(SMALL_STUDY);
    let config = StudyConfig::from_file(file.path()).unwrap();

    let mut other = config.clone();
    other.seed = 12345;

    let a = run_all(&config).unwrap();
    let b = run_all(&config).unwrap();
    let c = run_all(&other).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.tables[1], c.tables[1]);
}

#[test]
fn test_invalid_config_rejected() {
    let file = write_config("[polygon]\nvertices = [[0.0, 0.0], [1.0, 0.0]]\ntriangles = []\n");
    assert!(StudyConfig::from_file(file.path()).is_err());

    let mut config = StudyConfig::default();
    config.seed = 0;
    assert!(matches!(run_all(&config), Err(StudyError::Config(_))));
}

#[test]
fn test_near_collinear_triangle_rejected() {
    let mut config = StudyConfig::default();
    config.triangle.triangles = vec![[[0.0, 0.0], [1.0, 0.0], [2.0, 1e-17]]];
    assert!(matches!(run_all(&config), Err(StudyError::Config(_))));
}

#[test]
fn test_point_set_json_shape_checked() {
    let truncated = r#"{"rows":2,"cols":5,"data":[]}"#;
    assert!(serde_json::from_str::<PointSet>(truncated).is_err());

    let ok = r#"{"rows":2,"cols":1,"data":[0.25,0.5]}"#;
    let points: PointSet = serde_json::from_str(ok).unwrap();
    assert_eq!(points.point(0), &[0.25, 0.5]);
}

#[test]
fn test_unwritable_report_path() {
    let file = write_config(SMALL_STUDY);
    let config = StudyConfig::from_file(file.path()).unwrap();
    let report = run_all(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("report.json");
    assert!(matches!(
        write_report(&report, &missing),
        Err(StudyError::Io(_))
    ));
}
