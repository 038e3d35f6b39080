//! Lazily produced failure messages.

/// Produces the base message of a failure.
///
/// Guards only call [`produce`](MessageProducer::produce) on the failure path,
/// so building the message costs nothing when the condition holds. Any
/// `FnOnce() -> S` where `S: Into<String>` is a producer:
///
/// ```
/// use fluent_guard_core::message::{Canonical, MessageProducer};
///
/// assert_eq!((|| "custom").produce(), Some("custom".to_owned()));
/// assert_eq!((|| format!("{} items", 3)).produce(), Some("3 items".to_owned()));
/// assert_eq!(Canonical.produce(), None);
/// ```
pub trait MessageProducer {
    /// Returns the caller's message, or `None` to use the canonical one.
    fn produce(self) -> Option<String>;
}

impl<F, S> MessageProducer for F
where
    F: FnOnce() -> S,
    S: Into<String>,
{
    fn produce(self) -> Option<String> {
        Some(self().into())
    }
}

/// Uses the failure kind's canonical message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canonical;

impl MessageProducer for Canonical {
    fn produce(self) -> Option<String> {
        None
    }
}

/// Runs `producer`, treating an empty message as absent.
pub fn produce_non_empty<M: MessageProducer>(producer: M) -> Option<String> {
    match producer.produce() {
        Some(message) if message.is_empty() => {
            tracing::debug!("empty guard message replaced by canonical message");
            None
        }
        produced => produced,
    }
}
