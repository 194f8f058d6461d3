//! Lehmer Sampling Study
//!
//! Runs the convergence studies and logs estimate-vs-exact tables.

use std::path::PathBuf;

use sampler_study::config::{build_config, CONFIG_PATH_VAR};
use sampler_study::study::{run_all, write_report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let config = build_config(config_path.as_deref())?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Lehmer Sampling Study v{}", sampler_study::VERSION);
    tracing::info!(
        seed = config.seed,
        log_level = %config.log_level,
        config_file = ?config_path,
        output = ?config.output,
        "Study configuration loaded"
    );

    let report = run_all(&config)?;

    for table in &report.tables {
        let worst = table
            .rows
            .iter()
            .filter_map(|row| row.error())
            .fold(0.0_f64, f64::max);
        tracing::info!(
            domain = %table.domain,
            measure = table.measure,
            rows = table.rows.len(),
            worst_error = worst,
            "Table summary"
        );
    }

    if let Some(path) = &config.output {
        write_report(&report, path)?;
    }

    Ok(())
}
