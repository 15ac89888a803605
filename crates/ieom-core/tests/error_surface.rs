use ieom_core::errors::{ErrorInfo, IeomError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("index", 12)
        .with_context("size", 10)
}

#[test]
fn algebra_error_surface() {
    let err = IeomError::Algebra(sample_info("index-out-of-lattice", "site 12 outside lattice"));
    assert_eq!(err.info().code, "index-out-of-lattice");
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("12"));
}

#[test]
fn basis_error_surface() {
    let err = IeomError::Basis(sample_info("site-out-of-range", "three-operator index needs sites below N"));
    assert_eq!(err.info().code, "site-out-of-range");
    assert!(err.info().context.contains_key("size"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = IeomError::Config(
        ErrorInfo::new("invalid-dt", "dt must be positive")
            .with_context("dt", -0.1)
            .with_hint("use a step width like 0.01"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: dt must be positive (code: invalid-dt)"));
    assert!(rendered.contains("dt=-0.1"));
    assert!(rendered.contains("hint: use a step width like 0.01"));
}

#[test]
fn io_shorthand_keeps_message() {
    let err = IeomError::io("checkpoint-read", "no such file");
    assert!(matches!(&err, IeomError::Io(info) if info.message == "no such file"));
}

#[test]
fn errors_round_trip_json() {
    let err = IeomError::Ode(sample_info("dimension-mismatch", "vector length differs"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Ode\""));
    let decoded: IeomError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
