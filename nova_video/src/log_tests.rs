//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger, and the global
//! logger plumbing. Tests that install a custom logger are serialized because
//! the logger is process-global.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::{video_trace, video_debug, video_info, video_warn, video_error};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Info;
    let sev2 = sev1; // Copy, not move
    assert_eq!(sev1, sev2);
    assert_eq!(sev1, LogSeverity::Info);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nova::video".to_string(),
        message: "Video core initialized".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "nova::video");
    assert_eq!(entry.message, "Video core initialized");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nova::vulkan".to_string(),
        message: "boom".to_string(),
        file: Some("vulkan.rs"),
        line: Some(42),
    };

    let cloned = entry.clone();
    assert_eq!(cloned.severity, LogSeverity::Error);
    assert_eq!(cloned.file, Some("vulkan.rs"));
    assert_eq!(cloned.line, Some(42));
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

/// Captures entries into a shared vec for assertions
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(Box::new(CaptureLogger {
        entries: entries.clone(),
    }));
    entries
}

#[test]
#[serial]
fn test_macro_logs_through_global_logger() {
    let entries = install_capture_logger();

    video_info!("nova::test", "hello {}", 42);

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert_eq!(entries[0].source, "nova::test");
    assert_eq!(entries[0].message, "hello 42");
    assert!(entries[0].file.is_none());
}

#[test]
#[serial]
fn test_error_macro_captures_file_and_line() {
    let entries = install_capture_logger();

    video_error!("nova::test", "something failed: {}", "reason");

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert_eq!(entries[0].message, "something failed: reason");
    assert!(entries[0].file.is_some());
    assert!(entries[0].line.is_some());
}

#[test]
#[serial]
fn test_all_severity_macros() {
    let entries = install_capture_logger();

    video_trace!("nova::test", "t");
    video_debug!("nova::test", "d");
    video_info!("nova::test", "i");
    video_warn!("nova::test", "w");
    video_error!("nova::test", "e");

    let entries = entries.lock().unwrap();
    let severities: Vec<LogSeverity> = entries.iter().map(|e| e.severity).collect();
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

    // Restore the default logger for other tests
    log::set_logger(Box::new(DefaultLogger));
}
