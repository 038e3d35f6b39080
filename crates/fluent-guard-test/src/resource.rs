//! Disposable object fixture.
//!
//! # Example
//!
//! ```
//! use fluent_guard_core::DisposableObservable;
//! use fluent_guard_test::Resource;
//!
//! let resource = Resource::new("db");
//! assert!(!resource.is_disposed());
//! resource.dispose();
//! assert!(resource.is_disposed());
//! ```

use std::cell::Cell;

use fluent_guard_core::DisposableObservable;

/// A named object that can be disposed once.
#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    disposed: Cell<bool>,
}

impl Resource {
    /// Creates a live resource.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            disposed: Cell::new(false),
        }
    }

    /// Marks the resource disposed. Disposing twice is a no-op.
    pub fn dispose(&self) {
        self.disposed.set(true);
    }
}

impl DisposableObservable for Resource {
    fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}
