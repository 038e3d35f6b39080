use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::kind::FailureKind;

use super::Nullable;

/// Whether a sequence-like value is absent, empty, or has content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Null,
    Empty,
    Populated,
}

impl Presence {
    fn of_len(len: usize) -> Self {
        if len == 0 {
            Presence::Empty
        } else {
            Presence::Populated
        }
    }
}

/// A sequence or string that may be absent or empty.
///
/// `EMPTY_KIND` is the failure raised for an empty value: collections report
/// [`FailureKind::EmptyCollectionArgument`], strings report
/// [`FailureKind::EmptyString`].
pub trait Emptiable {
    const EMPTY_KIND: FailureKind;

    fn presence(&self) -> Presence;
}

/// A sequence whose elements may be absent.
pub trait NullableItems: Emptiable {
    /// Returns true if any element is absent. An absent sequence has none.
    fn any_null(&self) -> bool;
}

/// A string-like value that may be absent.
pub trait Text {
    fn text(&self) -> Option<&str>;
}

macro_rules! impl_collection {
    ($($ty:ty => [$($gen:tt)*]),+ $(,)?) => {
        $(
            impl<$($gen)*> Emptiable for $ty {
                const EMPTY_KIND: FailureKind = FailureKind::EmptyCollectionArgument;

                fn presence(&self) -> Presence {
                    Presence::of_len(self.len())
                }
            }
        )+
    };
}

impl_collection! {
    Vec<T> => [T],
    [T] => [T],
    VecDeque<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    HashSet<T, S> => [T, S],
    BTreeMap<K, V> => [K, V],
    BTreeSet<T> => [T],
}

impl<T, const N: usize> Emptiable for [T; N] {
    const EMPTY_KIND: FailureKind = FailureKind::EmptyCollectionArgument;

    fn presence(&self) -> Presence {
        Presence::of_len(N)
    }
}

impl<T: Nullable> NullableItems for [T] {
    fn any_null(&self) -> bool {
        self.iter().any(Nullable::is_null)
    }
}

impl<T: Nullable> NullableItems for Vec<T> {
    fn any_null(&self) -> bool {
        self.as_slice().any_null()
    }
}

impl<T: Nullable> NullableItems for VecDeque<T> {
    fn any_null(&self) -> bool {
        self.iter().any(Nullable::is_null)
    }
}

impl<T: Nullable, const N: usize> NullableItems for [T; N] {
    fn any_null(&self) -> bool {
        self.iter().any(Nullable::is_null)
    }
}

fn text_presence(text: &str) -> Presence {
    if text.is_empty() || text.starts_with('\0') {
        Presence::Empty
    } else {
        Presence::Populated
    }
}

macro_rules! impl_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Emptiable for $ty {
                const EMPTY_KIND: FailureKind = FailureKind::EmptyString;

                fn presence(&self) -> Presence {
                    text_presence(self)
                }
            }

            impl Text for $ty {
                fn text(&self) -> Option<&str> {
                    let text: &str = self;
                    Some(text)
                }
            }
        )+
    };
}

impl_text!(str, String, Box<str>);

impl Emptiable for Cow<'_, str> {
    const EMPTY_KIND: FailureKind = FailureKind::EmptyString;

    fn presence(&self) -> Presence {
        text_presence(self)
    }
}

impl Text for Cow<'_, str> {
    fn text(&self) -> Option<&str> {
        let text: &str = self;
        Some(text)
    }
}

impl<S: Emptiable + ?Sized> Emptiable for &S {
    const EMPTY_KIND: FailureKind = S::EMPTY_KIND;

    fn presence(&self) -> Presence {
        (**self).presence()
    }
}

impl<S: NullableItems + ?Sized> NullableItems for &S {
    fn any_null(&self) -> bool {
        (**self).any_null()
    }
}

impl<S: Text + ?Sized> Text for &S {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<S: Emptiable> Emptiable for Option<S> {
    const EMPTY_KIND: FailureKind = S::EMPTY_KIND;

    fn presence(&self) -> Presence {
        self.as_ref().map_or(Presence::Null, Emptiable::presence)
    }
}

impl<S: NullableItems> NullableItems for Option<S> {
    fn any_null(&self) -> bool {
        self.as_ref().is_some_and(NullableItems::any_null)
    }
}

impl<S: Text> Text for Option<S> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::text)
    }
}
