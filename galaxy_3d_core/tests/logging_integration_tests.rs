//! Integration tests for the global logger slot
//!
//! These tests swap the process-wide logger, so they run serially.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_core::galaxy3d::log::{self, Logger, LogEntry, LogSeverity};
use galaxy_3d_core::{engine_debug, engine_error, engine_info, engine_trace, engine_warn};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    galaxy_3d_core::log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    galaxy_3d_core::log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    log::reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "test::module");
    assert_eq!(captured[0].message, "Test info message");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].message, "Test warning message");
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    galaxy_3d_core::log::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Slot table corrupted".to_string(),
        "test_file.rs",
        42,
    );

    log::reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].file, Some("test_file.rs"));
    assert_eq!(captured[0].line, Some(42));
}

#[test]
#[serial]
fn test_integration_macros_route_through_logger() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    engine_trace!("test::macros", "trace {}", 1);
    engine_debug!("test::macros", "debug {}", 2);
    engine_info!("test::macros", "info {}", 3);
    engine_warn!("test::macros", "warn {}", 4);
    engine_error!("test::macros", "error {}", 5);

    log::reset_logger();

    let captured = entries.lock().unwrap();
    let ours: Vec<&LogEntry> = captured.iter().filter(|e| e.source == "test::macros").collect();
    assert_eq!(ours.len(), 5);

    let severities: Vec<LogSeverity> = ours.iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            LogSeverity::Trace,
            LogSeverity::Debug,
            LogSeverity::Info,
            LogSeverity::Warn,
            LogSeverity::Error,
        ]
    );
    assert_eq!(ours[2].message, "info 3");

    // Only engine_error! carries the call site
    assert!(ours[..4].iter().all(|e| e.file.is_none() && e.line.is_none()));
    assert!(ours[4].file.unwrap().ends_with("logging_integration_tests.rs"));
    assert!(ours[4].line.is_some());
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    galaxy_3d_core::log::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    log::reset_logger();

    // Goes to the default logger, not captured
    galaxy_3d_core::log::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_integration_logger_replaced() {
    let (first, first_entries) = TestLogger::new();
    let (second, second_entries) = TestLogger::new();

    log::set_logger(first);
    galaxy_3d_core::log::log(LogSeverity::Debug, "test", "to first".to_string());
    log::set_logger(second);
    galaxy_3d_core::log::log(LogSeverity::Debug, "test", "to second".to_string());
    log::reset_logger();

    assert_eq!(first_entries.lock().unwrap().len(), 1);
    assert_eq!(second_entries.lock().unwrap().len(), 1);
    assert_eq!(second_entries.lock().unwrap()[0].message, "to second");
}
