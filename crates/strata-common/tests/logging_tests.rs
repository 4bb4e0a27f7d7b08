//! Logging to a file.
//!
//! The global subscriber can be installed once per process, so this binary
//! holds a single test.

use strata_common::{init_logging, LogFormat, LoggingConfig};

#[test]
fn test_json_logging_to_file() {
    std::env::remove_var("RUST_LOG");
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("strata.log");

    init_logging(LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        file_path: Some(log_path.display().to_string()),
        ..LoggingConfig::default()
    })
    .unwrap();

    tracing::warn!(language = "FR", "Translation file skipped");

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let line = contents.lines().last().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "WARN");
    assert_eq!(event["fields"]["message"], "Translation file skipped");
    assert_eq!(event["fields"]["language"], "FR");

    // A second subscriber is refused
    assert!(init_logging(LoggingConfig::default()).is_err());
}
