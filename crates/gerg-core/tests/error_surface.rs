use gerg_core::errors::{ErrorInfo, GergError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node_count", 3)
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = GergError::InvalidArgument(sample_info("sigma-non-positive", "sigma must be > 0"));
    assert_eq!(err.info().code, "sigma-non-positive");
    assert_eq!(err.info().context.get("node_count").map(String::as_str), Some("3"));
}

#[test]
fn capacity_surface() {
    let err = GergError::CapacityExceeded(sample_info("trail-full", "no free slot"));
    assert_eq!(err.info().code, "trail-full");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn numeric_surface() {
    let err = GergError::NumericDegeneracy(sample_info("zero-mass", "truncation mass vanished"));
    assert_eq!(err.info().code, "zero-mass");
}

#[test]
fn display_includes_context_and_hint() {
    let err = GergError::Serde(
        ErrorInfo::new("config-parse", "bad yaml")
            .with_context("path", "run.yaml")
            .with_hint("check indentation"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("serde error: [config-parse] bad yaml {"));
    assert!(rendered.contains("path=run.yaml"));
    assert!(rendered.ends_with("}; hint: check indentation"));
}

#[test]
fn errors_round_trip_json() {
    let err = GergError::CapacityExceeded(sample_info("capacity", "too many snapshots"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"CapacityExceeded\""));
    let decoded: GergError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
