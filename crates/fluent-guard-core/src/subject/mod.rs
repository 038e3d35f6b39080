//! Capabilities a subject must have for a particular guard.
//!
//! Guards never inspect subjects directly. Each check asks for one narrow
//! capability, so the same check applies to owned values, references and
//! optional values without losing the argument name or type name:
//!
//! - [`Nullable`] - values that may be absent
//! - [`Emptiable`] - sequences and strings that may be absent or empty
//! - [`NullableItems`] - sequences whose elements may be absent
//! - [`Text`] - string-like values
//! - [`Enumeration`] - open enums that may hold undefined values
//! - [`DisposableObservable`] - objects that report their own disposal

mod disposable;
mod emptiable;
mod enumeration;
mod nullable;

pub use disposable::DisposableObservable;
pub use emptiable::{Emptiable, NullableItems, Presence, Text};
pub use enumeration::Enumeration;
pub use nullable::Nullable;

/// Returns the type name of `T` as used in failure messages.
///
/// Leading reference markers are dropped, so `&Connection` and `Connection`
/// both render as the fully qualified path of `Connection`.
pub fn display_type_name<T: ?Sized>() -> &'static str {
    let mut name = std::any::type_name::<T>();
    loop {
        if let Some(rest) = name.strip_prefix("&mut ") {
            name = rest;
        } else if let Some(rest) = name.strip_prefix('&') {
            name = rest;
        } else {
            return name;
        }
    }
}
