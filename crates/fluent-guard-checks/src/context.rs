//! Configured guard environment.
//!
//! Bundles the caller-owned report sink with the assumption settings read
//! from a [`GuardConfig`], so call sites do not thread both separately.
//!
//! ```
//! use fluent_guard_checks::{report, GuardContext};
//! use fluent_guard_config::GuardConfig;
//!
//! let context = GuardContext::from_config(&GuardConfig::new()).unwrap();
//! report::report_if(context.sink(), true, || "cache miss");
//! assert_eq!(context.sink().as_memory().unwrap().len(), 1);
//! ```

use fluent_guard_config::{ConfigError, GuardConfig};
use fluent_guard_core::{BoxError, GuardError, MessageProducer};

use crate::assumes;
use crate::report::{sink_from_config, ConfiguredSink};

/// A report sink plus the assumption settings it was configured with.
#[derive(Debug)]
pub struct GuardContext {
    sink: ConfiguredSink,
    show_assert: bool,
}

impl GuardContext {
    pub fn new(sink: ConfiguredSink, show_assert: bool) -> Self {
        Self { sink, show_assert }
    }

    /// Builds the context described by `config`.
    pub fn from_config(config: &GuardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            sink_from_config(&config.report)?,
            config.assumes.show_assert,
        ))
    }

    pub fn sink(&self) -> &ConfiguredSink {
        &self.sink
    }

    pub fn show_assert(&self) -> bool {
        self.show_assert
    }

    /// [`assumes::fail`] with the configured `show_assert`.
    pub fn assumes_fail<M: MessageProducer>(&self, message: M) -> GuardError {
        assumes::fail(message, self.show_assert)
    }

    /// [`assumes::fail_with`] with the configured `show_assert`.
    pub fn assumes_fail_with<E, M>(&self, message: M, source: E) -> GuardError
    where
        E: Into<BoxError>,
        M: MessageProducer,
    {
        assumes::fail_with(message, source, self.show_assert)
    }
}

impl Default for GuardContext {
    /// An unbounded memory sink with assumption logging enabled.
    fn default() -> Self {
        Self::new(ConfiguredSink::default(), true)
    }
}
