//! Destinations for reported messages.
//!
//! A sink is owned by the caller and passed to every report check. The
//! checks only append; reading back and clearing belong to the owner.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fluent_guard_config::{ConfigError, ReportConfig, ReportLevel, SinkKind};
use tracing::Level;

/// How serious a reported condition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A conditional report; execution continues normally.
    Recoverable,

    /// An unconditional report of a path that should not run.
    Fatal,
}

/// Receives rendered report messages.
pub trait ReportSink: Send + Sync {
    fn record(&self, message: &str, severity: Severity);
}

impl<S: ReportSink + ?Sized> ReportSink for &S {
    fn record(&self, message: &str, severity: Severity) {
        (**self).record(message, severity);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn record(&self, message: &str, severity: Severity) {
        (**self).record(message, severity);
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Arc<S> {
    fn record(&self, message: &str, severity: Severity) {
        (**self).record(message, severity);
    }
}

/// A message held by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedMessage {
    pub message: String,
    pub severity: Severity,
}

/// Keeps reported messages in order for later inspection.
///
/// With a capacity, the oldest message is dropped once the buffer is full.
///
/// ```
/// use fluent_guard_checks::report::{self, MemorySink};
///
/// let sink = MemorySink::new();
/// assert!(report::report_if(&sink, true, || "msg"));
/// assert!(!report::report_if(&sink, false, || "other"));
/// assert_eq!(sink.messages(), vec!["msg".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<VecDeque<ReportedMessage>>,
    capacity: Option<usize>,
}

impl MemorySink {
    /// Creates an unbounded sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink retaining at most `capacity` messages.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity: Some(capacity.max(1)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ReportedMessage>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the retained messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// Returns the retained messages with their severity, oldest first.
    pub fn entries(&self) -> Vec<ReportedMessage> {
        self.lock().iter().cloned().collect()
    }

    /// Removes and returns every retained message.
    pub fn take(&self) -> Vec<ReportedMessage> {
        self.lock().drain(..).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl ReportSink for MemorySink {
    fn record(&self, message: &str, severity: Severity) {
        let mut entries = self.lock();
        if let Some(capacity) = self.capacity {
            while entries.len() >= capacity {
                entries.pop_front();
            }
        }
        entries.push_back(ReportedMessage {
            message: message.to_owned(),
            severity,
        });
    }
}

/// Emits reported messages as tracing events.
///
/// Recoverable reports are `WARN` events and fatal reports `ERROR` events.
/// Events less severe than the sink's level are dropped.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(Level::WARN)
    }
}

impl ReportSink for TracingSink {
    fn record(&self, message: &str, severity: Severity) {
        let event_level = match severity {
            Severity::Recoverable => Level::WARN,
            Severity::Fatal => Level::ERROR,
        };
        // More verbose levels compare greater.
        if event_level > self.level {
            return;
        }
        match severity {
            Severity::Recoverable => tracing::warn!(target: "fluent_guard::report", "{message}"),
            Severity::Fatal => tracing::error!(target: "fluent_guard::report", "{message}"),
        }
    }
}

/// Drops every reported message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl ReportSink for DiscardSink {
    fn record(&self, _message: &str, _severity: Severity) {}
}

/// A sink selected by configuration.
#[derive(Debug)]
pub enum ConfiguredSink {
    Memory(MemorySink),
    Tracing(TracingSink),
    Discard(DiscardSink),
}

impl ConfiguredSink {
    /// Returns the memory sink, if that is the configured kind.
    pub fn as_memory(&self) -> Option<&MemorySink> {
        match self {
            ConfiguredSink::Memory(sink) => Some(sink),
            _ => None,
        }
    }
}

impl Default for ConfiguredSink {
    fn default() -> Self {
        ConfiguredSink::Memory(MemorySink::new())
    }
}

impl ReportSink for ConfiguredSink {
    fn record(&self, message: &str, severity: Severity) {
        match self {
            ConfiguredSink::Memory(sink) => sink.record(message, severity),
            ConfiguredSink::Tracing(sink) => sink.record(message, severity),
            ConfiguredSink::Discard(sink) => sink.record(message, severity),
        }
    }
}

fn tracing_level(level: ReportLevel) -> Level {
    match level {
        ReportLevel::Trace => Level::TRACE,
        ReportLevel::Debug => Level::DEBUG,
        ReportLevel::Info => Level::INFO,
        ReportLevel::Warn => Level::WARN,
        ReportLevel::Error => Level::ERROR,
    }
}

/// Builds the sink described by `config`.
pub fn sink_from_config(config: &ReportConfig) -> Result<ConfiguredSink, ConfigError> {
    config.validate()?;
    let sink = match config.sink {
        SinkKind::Memory => ConfiguredSink::Memory(match config.capacity {
            Some(capacity) => MemorySink::with_capacity(capacity),
            None => MemorySink::new(),
        }),
        SinkKind::Tracing => ConfiguredSink::Tracing(TracingSink::new(tracing_level(config.level))),
        SinkKind::Discard => ConfiguredSink::Discard(DiscardSink),
    };
    tracing::debug!(sink = ?config.sink, capacity = ?config.capacity, "report sink configured");
    Ok(sink)
}
