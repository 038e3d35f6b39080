//! Tests for best-effort checks and sinks.

use std::cell::Cell;
use std::sync::Arc;
use std::thread;

use fluent_guard_config::{GuardConfig, ReportLevel, SinkKind};
use fluent_guard_core::{Canonical, INTERNAL_ERROR_MESSAGE};
use fluent_guard_test::{capture_logs, THIS_IS_A_TEST};
use tracing::Level;

use super::*;

#[derive(Debug)]
struct Clock;

#[test]
fn test_report_if() {
    let sink = MemorySink::new();
    assert!(report_if(&sink, true, || "msg"));
    assert_eq!(sink.messages(), vec!["msg"]);

    assert!(!report_if(&sink, false, || "msg"));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.entries()[0].severity, Severity::Recoverable);
}

#[test]
fn test_report_if_not() {
    let sink = MemorySink::new();
    assert!(!report_if_not(&sink, false, || THIS_IS_A_TEST));
    assert!(report_if_not(&sink, true, || "unused"));
    assert_eq!(sink.messages(), vec![THIS_IS_A_TEST]);
}

#[test]
fn test_fail_is_fatal() {
    let sink = MemorySink::new();
    fail(&sink, Canonical);
    let entries = sink.take();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, INTERNAL_ERROR_MESSAGE);
    assert_eq!(entries[0].severity, Severity::Fatal);
    assert!(sink.is_empty());
}

#[test]
fn test_if_not_present() {
    let sink = MemorySink::new();
    assert!(if_not_present(&sink, Some(Clock)).is_some());
    assert!(sink.is_empty());

    assert!(None::<Clock>.report_if_not_present(&sink).is_none());
    assert_eq!(
        sink.messages(),
        vec![format!(
            "Cannot find an instance of the '{}' service.",
            std::any::type_name::<Clock>()
        )]
    );
}

#[test]
fn test_fluent_forms_return_subject() {
    let sink = MemorySink::new();
    let values = vec![1, 2, 3];
    let out = values
        .clone()
        .report_if(&sink, |v| v.len() > 2, || "long")
        .report_if_not(&sink, |v| v.contains(&2), || "missing two")
        .report_fail(&sink, || THIS_IS_A_TEST);
    assert_eq!(out, values);
    assert_eq!(sink.messages(), vec!["long", THIS_IS_A_TEST]);
}

#[test]
fn test_message_produced_only_when_reported() {
    let calls = Cell::new(0);
    let sink = DiscardSink;
    report_if(&sink, false, || {
        calls.set(calls.get() + 1);
        "msg"
    });
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_memory_sink_capacity_drops_oldest() {
    let sink = MemorySink::with_capacity(2);
    for message in ["a", "b", "c"] {
        report_if(&sink, true, || message);
    }
    assert_eq!(sink.messages(), vec!["b", "c"]);

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn test_dyn_and_shared_sinks() {
    let memory = Arc::new(MemorySink::new());
    let shared: Arc<dyn ReportSink> = memory.clone();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sink = Arc::clone(&shared);
            thread::spawn(move || report_if(&*sink, true, || format!("worker {i}")))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(memory.len(), 4);

    let boxed: Box<dyn ReportSink> = Box::new(DiscardSink);
    assert!(report_if(&boxed, true, || "dropped"));
}

#[test]
fn test_tracing_sink_levels() {
    let (_, logs) = capture_logs(|| {
        let sink = TracingSink::default();
        report_if(&sink, true, || "recoverable report");
        fail(&sink, || "fatal report");
    });
    assert!(logs.contains("WARN"));
    assert!(logs.contains("recoverable report"));
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("fatal report"));

    let (_, logs) = capture_logs(|| {
        let sink = TracingSink::new(Level::ERROR);
        report_if(&sink, true, || "filtered report");
        fail(&sink, || "kept report");
    });
    assert!(!logs.contains("filtered report"));
    assert!(logs.contains("kept report"));
}

#[test]
fn test_sink_from_config() {
    let config = GuardConfig::new().with_capacity(1);
    let sink = sink_from_config(&config.report).unwrap();
    report_if(&sink, true, || "first");
    report_if(&sink, true, || "second");
    assert_eq!(sink.as_memory().map(MemorySink::messages), Some(vec!["second".to_string()]));

    let config = GuardConfig::new()
        .with_sink(SinkKind::Tracing)
        .with_level(ReportLevel::Error);
    let sink = sink_from_config(&config.report).unwrap();
    assert!(matches!(sink, ConfiguredSink::Tracing(s) if s.level() == Level::ERROR));

    let config = GuardConfig::new().with_sink(SinkKind::Discard);
    let sink = sink_from_config(&config.report).unwrap();
    assert!(sink.as_memory().is_none());

    let config = GuardConfig::new().with_capacity(0);
    assert!(sink_from_config(&config.report).is_err());
}
