//! Parity run configuration.
//!
//! Loaded from JSON (every field optional), then overridden by command-line
//! flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Settings for one parity run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParityConfig {
    /// Random vector pairs per dimension.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Seed for the sample generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Absolute tolerance when comparing the two APIs.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Sample components are drawn from `[-range, range)`.
    #[serde(default = "default_component_range")]
    pub component_range: f64,
    /// Directory the JSON report is written to.
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_samples() -> usize {
    256
}

fn default_seed() -> u64 {
    0x5EED
}

fn default_tolerance() -> f64 {
    1e-9
}

fn default_component_range() -> f64 {
    100.0
}

fn default_report_dir() -> String {
    "parity-reports".to_string()
}

impl Default for ParityConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            seed: default_seed(),
            tolerance: default_tolerance(),
            component_range: default_component_range(),
            report_dir: default_report_dir(),
        }
    }
}

impl ParityConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    /// Applies `--samples`, `--seed`, `--tolerance`, `--range` and `--out`.
    ///
    /// Unknown flags are skipped. A value that does not parse leaves the
    /// field unchanged.
    pub fn apply_args(&mut self, args: &[String]) {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--samples" if i + 1 < args.len() => {
                    parse_into(&mut self.samples, "--samples", &args[i + 1]);
                    i += 2;
                }
                "--seed" if i + 1 < args.len() => {
                    parse_into(&mut self.seed, "--seed", &args[i + 1]);
                    i += 2;
                }
                "--tolerance" if i + 1 < args.len() => {
                    parse_into(&mut self.tolerance, "--tolerance", &args[i + 1]);
                    i += 2;
                }
                "--range" if i + 1 < args.len() => {
                    parse_into(&mut self.component_range, "--range", &args[i + 1]);
                    i += 2;
                }
                "--out" if i + 1 < args.len() => {
                    self.report_dir = args[i + 1].clone();
                    i += 2;
                }
                _ => i += 1,
            }
        }
    }
}

/// Value of `--config`, if present.
pub fn config_path(args: &[String]) -> Option<PathBuf> {
    args.windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| PathBuf::from(&w[1]))
}

fn parse_into<T: std::str::FromStr>(slot: &mut T, flag: &str, value: &str) {
    match value.parse() {
        Ok(v) => *slot = v,
        Err(_) => warn!(flag, value, "Ignoring unparsable flag value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = ParityConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, ParityConfig::default());
        assert_eq!(cfg.samples, 256);
        assert_eq!(cfg.seed, 0x5EED);
    }

    #[test]
    fn json_overrides_selected_fields() {
        let cfg = ParityConfig::from_json_str(r#"{"samples": 8, "tolerance": 1e-6}"#).unwrap();
        assert_eq!(cfg.samples, 8);
        assert_eq!(cfg.tolerance, 1e-6);
        assert_eq!(cfg.report_dir, "parity-reports");
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = ParityConfig::default();
        cfg.apply_args(&args(&["--samples", "10", "--seed", "42", "--out", "out", "--range", "2.5"]));
        assert_eq!(cfg.samples, 10);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.report_dir, "out");
        assert_eq!(cfg.component_range, 2.5);
    }

    #[test]
    fn bad_flag_value_keeps_previous() {
        let mut cfg = ParityConfig::default();
        cfg.apply_args(&args(&["--samples", "many", "--tolerance"]));
        assert_eq!(cfg.samples, 256);
        assert_eq!(cfg.tolerance, 1e-9);
    }

    #[test]
    fn finds_config_path() {
        assert_eq!(
            config_path(&args(&["--seed", "1", "--config", "p.json"])),
            Some(PathBuf::from("p.json"))
        );
        assert_eq!(config_path(&args(&["--config"])), None);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ParityConfig::load(Path::new("/nonexistent/parity.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/parity.json"));
    }
}
