//! Descriptors for cursors from core, alloc and std.
//!
//! Proxy cursors that hand out values rather than places use `()` as their
//! pointer accessor.

use crate::detect::Categorized;
use crate::lattice::{Bidirectional, Forward, RandomAccess, ReadOnce};
use super::SelfDescribing;

macro_rules! impl_std_cursor {
    ($(
        $(#[$meta:meta])*
        impl[$($gen:tt)*] $ty:ty => $tag:ident {
            element = $element:ty,
            pointer = $pointer:ty,
            reference = $reference:ty
            $(, writable = $writable:expr)? $(,)?
        }
    )+) => {
        $(
            $(#[$meta])*
            impl<$($gen)*> Categorized for $ty {
                type Category = $tag;
                $(const WRITABLE: bool = $writable;)?
            }

            $(#[$meta])*
            impl<$($gen)*> SelfDescribing for $ty {
                type Element = $element;
                type Pointer = $pointer;
                type Reference<'r> = $reference where Self: 'r;
                type Offset = isize;
            }
        )+
    };
}

impl_std_cursor! {
    impl['s, T] core::slice::Iter<'s, T> => RandomAccess {
        element = T,
        pointer = *const T,
        reference = &'s T,
    }

    impl['s, T] core::slice::IterMut<'s, T> => RandomAccess {
        element = T,
        pointer = *mut T,
        reference = &'s mut T,
        writable = true,
    }

    impl['s] core::str::Chars<'s> => Bidirectional {
        element = char,
        pointer = (),
        reference = char,
    }

    #[cfg(feature = "alloc")]
    impl['s, T] alloc::collections::linked_list::Iter<'s, T> => Bidirectional {
        element = T,
        pointer = *const T,
        reference = &'s T,
    }

    #[cfg(feature = "alloc")]
    impl['s, K, V] alloc::collections::btree_map::Iter<'s, K, V> => Bidirectional {
        element = (K, V),
        pointer = (),
        reference = (&'s K, &'s V),
    }

    #[cfg(feature = "std")]
    impl['s, K, V] std::collections::hash_map::Iter<'s, K, V> => Forward {
        element = (K, V),
        pointer = (),
        reference = (&'s K, &'s V),
    }

    #[cfg(feature = "std")]
    impl[R] std::io::Bytes<R> => ReadOnce {
        element = u8,
        pointer = (),
        reference = std::io::Result<u8>,
    }
}
