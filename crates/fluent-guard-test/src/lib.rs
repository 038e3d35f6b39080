//! Shared test fixtures for fluent-guard crates.
//!
//! This crate provides subject types and helpers for testing guards.
//! It depends only on `fluent-guard-core` so every other crate can use it.
//!
//! - [`fruit`] - an open enum with undefined raw values
//! - [`resource`] - a disposable object
//! - [`logs`] - captures tracing output emitted while a closure runs
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! fluent-guard-test = { workspace = true }
//! ```

pub mod fruit;
pub mod logs;
pub mod resource;

pub use fruit::Fruit;
pub use logs::capture_logs;
pub use resource::Resource;

/// Argument name used by precondition tests.
pub const ARGUMENT_NAME: &str = "arg";

/// Object name used by disposed-object tests.
pub const OBJECT_NAME: &str = "ObjectName";

/// Caller-supplied message used by tests overriding the canonical message.
pub const THIS_IS_A_TEST: &str = "This is a test";

/// Returns `base` annotated with [`ARGUMENT_NAME`].
pub fn argument_message(base: &str) -> String {
    format!("{base}\nParameter name: {ARGUMENT_NAME}")
}

/// Returns `base` annotated with the object name `object`.
pub fn object_message(base: &str, object: &str) -> String {
    format!("{base}\nObject name: '{object}'.")
}
