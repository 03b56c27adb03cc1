//! Parity runner.
//!
//! Usage:
//!   cargo run -p vecmath_tests --bin parity_runner -- [--config parity.json]
//!       [--samples 256] [--seed 24301] [--tolerance 1e-9] [--range 100] [--out parity-reports]
//!
//! Runs the tuple/class parity suite, prints a summary and writes
//! `parity.json` into the report directory. Exits with status 1 if any
//! check failed.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};
use vecmath_tests::config::{config_path, ParityConfig};
use vecmath_tests::parity;

fn load_config(args: &[String]) -> anyhow::Result<ParityConfig> {
    let mut cfg = match config_path(args) {
        Some(path) => ParityConfig::load(&path)?,
        None => ParityConfig::default(),
    };
    cfg.apply_args(args);
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = load_config(&args).context("load parity config")?;
    info!(
        samples = cfg.samples,
        seed = cfg.seed,
        tolerance = cfg.tolerance,
        component_range = cfg.component_range,
        report_dir = %cfg.report_dir,
        "Starting parity run"
    );

    let report = parity::run(&cfg);
    let stats = report.overall_stats();
    println!("{}", report);

    let out_dir = PathBuf::from(&cfg.report_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create report dir {}", out_dir.display()))?;
    let json_path = out_dir.join("parity.json");
    report
        .save_json(&json_path)
        .with_context(|| format!("write {}", json_path.display()))?;
    info!(path = %json_path.display(), "Report saved");

    if stats.failed > 0 {
        warn!(failed = stats.failed, "Parity run failed");
        std::process::exit(1);
    }
    Ok(())
}
