//! `vecmath_tests`
//!
//! Parity suite for `vecmath_core`: checks that the tuple functions and the
//! `Vec2/3/4` types agree, and reports the outcome.

pub mod config;
pub mod parity;
pub mod report;

pub use config::ParityConfig;
pub use report::{Report, ReportBuilder, RunStats, TestResult, TestStatus};
