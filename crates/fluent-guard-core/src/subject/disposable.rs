use std::rc::Rc;
use std::sync::Arc;

use super::display_type_name;

/// An object that can report whether it has been disposed.
pub trait DisposableObservable {
    fn is_disposed(&self) -> bool;

    /// Object name reported when the object is found disposed.
    fn object_name(&self) -> &'static str {
        display_type_name::<Self>()
    }
}

macro_rules! forward_disposable {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: DisposableObservable + ?Sized> DisposableObservable for $ptr {
                fn is_disposed(&self) -> bool {
                    (**self).is_disposed()
                }

                fn object_name(&self) -> &'static str {
                    (**self).object_name()
                }
            }
        )+
    };
}

forward_disposable!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
