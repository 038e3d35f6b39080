//! Open enum fixture.
//!
//! # Example
//!
//! ```
//! use fluent_guard_core::Enumeration;
//! use fluent_guard_test::Fruit;
//!
//! assert!(Fruit::Apples.is_defined());
//! assert!(!Fruit::from(0).is_defined());
//! ```

fluent_guard_core::defined_enum! {
    /// Fruit, numbered from 1 so the zero value is undefined.
    pub enum Fruit: i32 {
        Apples = 1,
        Oranges = 2,
        Bananas = 3,
    }
}

impl Default for Fruit {
    fn default() -> Self {
        Fruit::from(0)
    }
}
