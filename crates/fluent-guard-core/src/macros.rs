//! Declarative macros for subject types.

/// Declares an open enum implementing [`Enumeration`](crate::subject::Enumeration).
///
/// The generated type is a newtype over the integer representation, with one
/// associated constant per defined value. Any raw value converts into it, and
/// [`Enumeration::is_defined`](crate::subject::Enumeration::is_defined)
/// reports whether the value is one of the declared constants.
///
/// # Example
///
/// ```
/// use fluent_guard_core::defined_enum;
/// use fluent_guard_core::subject::Enumeration;
///
/// defined_enum! {
///     pub enum Fruit: i32 {
///         Apples = 1,
///         Oranges = 2,
///     }
/// }
///
/// assert!(Fruit::Apples.is_defined());
/// assert!(!Fruit::from(0).is_defined());
/// assert_eq!(Fruit::ENUM_NAME, "Fruit");
/// assert_eq!(i32::from(Fruit::Oranges), 2);
/// ```
#[macro_export]
macro_rules! defined_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name($repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: $name = $name($value);
            )+

            /// Every defined value, in declaration order.
            pub const DEFINED: &'static [$name] = &[$($name::$variant),+];

            /// Wraps a raw value, defined or not.
            pub const fn from_raw(raw: $repr) -> Self {
                $name(raw)
            }

            /// Returns the raw value.
            pub const fn raw(self) -> $repr {
                self.0
            }
        }

        impl $crate::subject::Enumeration for $name {
            const ENUM_NAME: &'static str = stringify!($name);

            fn is_defined(&self) -> bool {
                Self::DEFINED.contains(self)
            }
        }

        impl ::std::convert::From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                $name(raw)
            }
        }

        impl ::std::convert::From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
