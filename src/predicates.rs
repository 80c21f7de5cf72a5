//! # Layer 4: Capability Predicates
//!
//! Questions about a cursor, answered as `const bool` for expressions and as
//! a type-level [`Bool`] for selection.
//!
//! ```
//! use cursor_caps::predicates::{at_least, at_least_bidirectional, is_writable};
//! use cursor_caps::{Forward, WriteOnce};
//!
//! const RA_IS_FORWARD: bool = at_least::<*const u8, Forward>();
//! assert!(RA_IS_FORWARD);
//! assert!(at_least_bidirectional::<*mut u8>());
//! assert!(is_writable::<*mut u8>());
//! assert!(!at_least::<*const u8, WriteOnce>());
//! ```
//!
//! Bounded forms here require `T: Classify`. For a concrete type that may not
//! be a cursor at all, use the probe macros ([`is_cursor!`](crate::is_cursor),
//! [`at_least!`](crate::at_least)), which answer `false` instead of erroring.

use crate::lattice::{Bidirectional, Forward, IsA, RandomAccess, ReadOnce, Tag, WriteOnce};
use crate::primitives::Bool;
use crate::traits::Classify;

/// Is `T` a cursor whose category is-a `W`?
#[inline(always)]
pub const fn at_least<T: ?Sized + Classify, W: Tag>() -> bool {
    <T::Category as Tag>::KIND.is_a(W::KIND)
}

macro_rules! at_least_tier {
    ($($name:ident => $tag:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = "[`at_least`] with the tier fixed."]
                #[inline(always)]
                pub const fn [<at_least_ $name>]<T: ?Sized + Classify>() -> bool {
                    at_least::<T, $tag>()
                }
            )+
        }
    };
}

at_least_tier! {
    read_once => ReadOnce,
    write_once => WriteOnce,
    forward => Forward,
    bidirectional => Bidirectional,
    random_access => RandomAccess,
}

/// Is `T` a read cursor or a write cursor by its tier?
///
/// Every classified type qualifies: each tag is-a `ReadOnce` or `WriteOnce`.
#[inline(always)]
pub const fn is_cursor<T: ?Sized + Classify>() -> bool {
    at_least_read_once::<T>() || at_least_write_once::<T>()
}

#[inline(always)]
pub const fn is_readable<T: ?Sized + Classify>() -> bool {
    T::READABLE
}

#[inline(always)]
pub const fn is_writable<T: ?Sized + Classify>() -> bool {
    T::WRITABLE
}

// =============================================================================
// Type-level forms
// =============================================================================

/// Type-level [`is_cursor`].
pub trait IsCursor {
    type Out: Bool;
}

impl<T: ?Sized + Classify> IsCursor for T {
    type Out = <T::Readable as Bool>::Or<<T::Category as IsA<WriteOnce>>::Out>;
}

/// `Present` when the category of `T` is-a `W`.
pub type AtLeastTier<T, W> = <<T as Classify>::Category as IsA<W>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Categorized;
    use crate::primitives::{Absent, Present};
    use core::any::TypeId;

    struct Sink;
    impl Categorized for Sink {
        type Category = WriteOnce;
    }

    struct Source;
    impl Categorized for Source {
        type Category = ReadOnce;
    }

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_write_once_is_isolated() {
        assert!(at_least_write_once::<Sink>());
        assert!(!at_least_read_once::<Sink>());
        assert!(!at_least_forward::<Sink>());
        assert!(is_writable::<Sink>());
        assert!(!is_readable::<Sink>());
        assert!(is_cursor::<Sink>());
    }

    #[test]
    fn test_raw_pointers() {
        assert!(at_least_random_access::<*const u8>());
        assert!(is_readable::<*const u8>());
        assert!(!is_writable::<*const u8>());
        assert!(is_readable::<*mut u8>());
        assert!(is_writable::<*mut u8>());
    }

    #[test]
    fn test_type_level_forms() {
        assert!(same::<AtLeastTier<*mut u8, Bidirectional>, Present>());
        assert!(same::<AtLeastTier<Source, Forward>, Absent>());
        assert!(same::<<Sink as IsCursor>::Out, Present>());
        assert!(same::<<Source as IsCursor>::Out, Present>());
    }
}
