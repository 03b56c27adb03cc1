//! Parity run reports.
//!
//! Results are grouped by category (one per dimension plus the property
//! checks), summarized as [`RunStats`] and written out as JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Test result status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✓",
            TestStatus::Failed => "✗",
            TestStatus::Skipped => "○",
        }
    }
}

/// A single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Check ID, e.g. `"V2-ADD"`.
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub status: TestStatus,
    pub duration: Duration,
    /// Samples evaluated.
    pub samples: usize,
    /// First mismatch, if the check failed.
    pub error_message: Option<String>,
}

impl TestResult {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        TestResult {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            samples: 0,
            error_message: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn pass(mut self, duration: Duration) -> Self {
        self.status = TestStatus::Passed;
        self.duration = duration;
        self
    }

    pub fn fail(mut self, duration: Duration, error: &str) -> Self {
        self.status = TestStatus::Failed;
        self.duration = duration;
        self.error_message = Some(error.to_string());
        self
    }

    pub fn skip(mut self, reason: &str) -> Self {
        self.status = TestStatus::Skipped;
        self.error_message = Some(reason.to_string());
        self
    }
}

/// Summary counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total_duration: Duration,
}

impl RunStats {
    /// Percentage of checks that passed; 0 for an empty run.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }

    pub fn add_result(&mut self, result: &TestResult) {
        self.total += 1;
        self.total_duration += result.duration;
        match result.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Skipped => self.skipped += 1,
        }
    }
}

/// Full parity report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub subtitle: String,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub results: Vec<TestResult>,
    pub metadata: BTreeMap<String, String>,
}

impl Report {
    pub fn new(title: &str, subtitle: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Report {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            timestamp,
            results: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn add_result(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn overall_stats(&self) -> RunStats {
        let mut stats = RunStats::default();
        for result in &self.results {
            stats.add_result(result);
        }
        stats
    }

    pub fn stats_by_category(&self) -> BTreeMap<String, RunStats> {
        let mut map: BTreeMap<String, RunStats> = BTreeMap::new();
        for result in &self.results {
            map.entry(result.category.clone())
                .or_default()
                .add_result(result);
        }
        map
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results
            .iter()
            .filter(|r| r.status == TestStatus::Failed)
    }

    /// Skipped checks do not count against the run.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status != TestStatus::Failed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save_json(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.subtitle.is_empty() {
            writeln!(f, "{}", self.subtitle)?;
        }
        for (category, stats) in self.stats_by_category() {
            writeln!(
                f,
                "  {:<12} {:>4}/{:<4} passed",
                category, stats.passed, stats.total
            )?;
        }
        for failure in self.failures() {
            writeln!(
                f,
                "  {} {} {}: {}",
                failure.status.icon(),
                failure.id,
                failure.name,
                failure.error_message.as_deref().unwrap_or("")
            )?;
        }
        let stats = self.overall_stats();
        write!(
            f,
            "Total {} | passed {} | failed {} | skipped {} | {:.1}%",
            stats.total,
            stats.passed,
            stats.failed,
            stats.skipped,
            stats.pass_rate()
        )
    }
}

/// Report builder with fluent API.
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new(title: &str) -> Self {
        ReportBuilder {
            report: Report::new(title, ""),
        }
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.report.subtitle = subtitle.to_string();
        self
    }

    pub fn metadata(mut self, key: &str, value: &str) -> Self {
        self.report
            .metadata
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn add_test(mut self, result: TestResult) -> Self {
        self.report.add_result(result);
        self
    }

    pub fn add_tests(mut self, results: impl IntoIterator<Item = TestResult>) -> Self {
        self.report.results.extend(results);
        self
    }

    pub fn build(self) -> Report {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_generation() {
        let report = ReportBuilder::new("Parity")
            .subtitle("tuple vs Vec")
            .metadata("seed", "1")
            .add_test(TestResult::new("V2-ADD", "add", "Vec2").pass(Duration::from_millis(2)))
            .add_test(TestResult::new("V3-ADD", "add", "Vec3").pass(Duration::from_millis(3)))
            .build();

        assert_eq!(report.results.len(), 2);
        assert!(report.all_passed());
        let stats = report.overall_stats();
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.total_duration, Duration::from_millis(5));
        assert_eq!(stats.pass_rate(), 100.0);
        assert_eq!(report.metadata["seed"], "1");
    }

    #[test]
    fn failed_report() {
        let report = ReportBuilder::new("Parity")
            .add_test(TestResult::new("A", "ok", "Vec2").pass(Duration::ZERO))
            .add_test(TestResult::new("B", "bad", "Vec2").fail(Duration::ZERO, "mismatch"))
            .add_test(TestResult::new("C", "later", "Vec4").skip("not run"))
            .build();

        assert!(!report.all_passed());
        let stats = report.overall_stats();
        assert_eq!((stats.passed, stats.failed, stats.skipped), (1, 1, 1));
        assert_eq!(report.failures().count(), 1);

        let text = report.to_string();
        assert!(text.contains("✗ B bad: mismatch"));
        assert!(text.contains("failed 1"));
    }

    #[test]
    fn category_stats() {
        let report = ReportBuilder::new("Category Test")
            .add_tests([
                TestResult::new("A-1", "a1", "Vec2").pass(Duration::ZERO),
                TestResult::new("A-2", "a2", "Vec2").pass(Duration::ZERO),
                TestResult::new("B-1", "b1", "Vec3").fail(Duration::ZERO, "error"),
            ])
            .build();

        let by_cat = report.stats_by_category();
        assert_eq!(by_cat["Vec2"].passed, 2);
        assert_eq!(by_cat["Vec3"].failed, 1);
    }

    #[test]
    fn empty_run_has_zero_pass_rate() {
        assert_eq!(RunStats::default().pass_rate(), 0.0);
    }

    #[test]
    fn json_round_trip_keeps_results() {
        let report = ReportBuilder::new("Parity")
            .add_test(
                TestResult::new("P-1", "prop", "Properties")
                    .with_samples(4)
                    .pass(Duration::from_micros(7)),
            )
            .build();
        let back: Report = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back.results[0].id, "P-1");
        assert_eq!(back.results[0].samples, 4);
        assert_eq!(back.results[0].status, TestStatus::Passed);
    }
}
