use super::display_type_name;

/// A value that may be absent.
pub trait Nullable {
    /// Returns true if the value is absent.
    fn is_null(&self) -> bool;

    /// Name of the type that may be absent, used by missing-component
    /// messages. `Option<Clock>` reports `Clock`.
    fn component_type_name(&self) -> &'static str {
        display_type_name::<Self>()
    }
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn component_type_name(&self) -> &'static str {
        display_type_name::<T>()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }

    fn component_type_name(&self) -> &'static str {
        display_type_name::<T>()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }

    fn component_type_name(&self) -> &'static str {
        display_type_name::<T>()
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn component_type_name(&self) -> &'static str {
        (**self).component_type_name()
    }
}
