use vecmath_tests::{parity, ParityConfig, TestStatus};

fn small_run(seed: u64) -> vecmath_tests::Report {
    let cfg = ParityConfig {
        samples: 64,
        seed,
        ..ParityConfig::default()
    };
    parity::run(&cfg)
}

#[test]
fn tuple_and_class_apis_agree() {
    let report = small_run(ParityConfig::default().seed);
    for failure in report.failures() {
        eprintln!("{} {}: {:?}", failure.id, failure.name, failure.error_message);
    }
    assert!(report.all_passed());
    assert!(report.results.iter().all(|r| r.status == TestStatus::Passed));
}

#[test]
fn every_dimension_is_covered() {
    let report = small_run(7);
    let categories = report.stats_by_category();
    for name in ["Vec2", "Vec3", "Vec4", "Properties"] {
        assert!(categories.contains_key(name), "missing category {name}");
    }
    assert!(report.all_passed());
}

#[test]
fn report_serializes() {
    let report = small_run(11);
    let json = report.to_json().unwrap();
    assert!(json.contains("\"V2-ADD\""));
    assert!(json.contains("\"P-SLERP\""));
}
