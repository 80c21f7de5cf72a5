//! Raw contiguous-memory cursors.
//!
//! A bare `*mut E` / `*const E` is treated as a maximally capable cursor by
//! convention: `RandomAccess`, offset `isize`. Those two impls are the only
//! place raw addresses are special-cased. Code that wants a cursor *value*
//! over contiguous memory uses [`Contiguous`], which describes itself like any
//! other cursor.

use super::{Classify, CursorTraits, Raw, SelfDescribing};
use crate::detect::Categorized;
use crate::lattice::RandomAccess;
use crate::primitives::Present;

mod sealed {
    pub trait Sealed {}
    impl<E> Sealed for *const E {}
    impl<E> Sealed for *mut E {}
    impl Sealed for super::Const {}
    impl Sealed for super::Mut {}
}

/// Distinguishes `*const` from `*mut` at the type level.
pub trait Mutability: sealed::Sealed + 'static {
    const MUTABLE: bool;
}

/// Read-only memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const;

/// Mutable memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mut;

impl Mutability for Const {
    const MUTABLE: bool = false;
}

impl Mutability for Mut {
    const MUTABLE: bool = true;
}

/// `*const E` or `*mut E`.
pub trait RawPointer:
    sealed::Sealed + Copy + Ord + core::hash::Hash + core::fmt::Debug + Classify<Category = RandomAccess>
{
    type Element;
    type Mutability: Mutability;
    type Reference<'r>
    where
        Self: 'r;

    /// Address without provenance, for distance and ordering.
    fn address(self) -> usize;

    /// Move by `count` elements; never dereferences and never overflows.
    fn offset_by(self, count: isize) -> Self;
}

macro_rules! impl_raw_cursor {
    ($($ptr:ty => $m:ident, $reference:ty;)+) => {
        $(
            impl<E> Classify for $ptr {
                type Category = RandomAccess;
                type Path = Raw<$m>;
                type Readable = Present;

                const WRITABLE: bool = <$m as Mutability>::MUTABLE;
            }

            impl<E> CursorTraits for $ptr {
                type Element = E;
                type Pointer = $ptr;
                type Reference<'r> = $reference where Self: 'r;
                type Offset = isize;
            }

            impl<E> RawPointer for $ptr {
                type Element = E;
                type Mutability = $m;
                type Reference<'r> = $reference where Self: 'r;

                #[inline(always)]
                fn address(self) -> usize {
                    self.addr()
                }

                #[inline(always)]
                fn offset_by(self, count: isize) -> Self {
                    self.wrapping_offset(count)
                }
            }
        )+
    };
}

impl_raw_cursor! {
    *mut E => Mut, &'r mut E;
    *const E => Const, &'r E;
}

// =============================================================================
// Contiguous adapter
// =============================================================================

/// A cursor over contiguous memory: a base address plus its element type.
///
/// Pure address arithmetic. Moving a `Contiguous` never dereferences it, so
/// every method is safe; reading through [`as_ptr`](Self::as_ptr) is the
/// caller's business. Ordering and equality compare positions. Writable
/// exactly when the wrapped pointer is `*mut`.
///
/// ```
/// use cursor_caps::{Contiguous, Descriptor, TagKind};
///
/// let data = [10, 20, 30, 40];
/// let (first, last) = Contiguous::bounds(&data);
/// assert_eq!(last.offset_from(first), 4);
/// assert!(first < last);
/// assert_eq!(Descriptor::<Contiguous<*const i32>>::CATEGORY, TagKind::RandomAccess);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contiguous<P> {
    ptr: P,
}

impl<P: RawPointer> Contiguous<P> {
    #[inline(always)]
    pub const fn new(ptr: P) -> Self {
        Contiguous { ptr }
    }

    #[inline(always)]
    pub fn as_ptr(self) -> P {
        self.ptr
    }

    /// Jump by `count` elements in either direction.
    #[inline(always)]
    pub fn wrapping_offset(self, count: isize) -> Self {
        Contiguous { ptr: self.ptr.offset_by(count) }
    }

    #[inline(always)]
    pub fn step_forward(self) -> Self {
        self.wrapping_offset(1)
    }

    #[inline(always)]
    pub fn step_back(self) -> Self {
        self.wrapping_offset(-1)
    }

    /// Signed distance in elements from `origin` to `self`.
    ///
    /// Zero-sized elements have no distinct positions; the distance is `0`.
    pub fn offset_from(self, origin: Self) -> isize {
        let size = core::mem::size_of::<P::Element>();
        if size == 0 {
            return 0;
        }
        (self.ptr.address().wrapping_sub(origin.ptr.address()) as isize) / size as isize
    }
}

impl<E> Contiguous<*const E> {
    /// `[first, last)` over a shared slice.
    pub fn bounds(slice: &[E]) -> (Self, Self) {
        let range = slice.as_ptr_range();
        (Contiguous::new(range.start), Contiguous::new(range.end))
    }
}

impl<E> Contiguous<*mut E> {
    /// `[first, last)` over a mutable slice.
    pub fn bounds_mut(slice: &mut [E]) -> (Self, Self) {
        let range = slice.as_mut_ptr_range();
        (Contiguous::new(range.start), Contiguous::new(range.end))
    }

    /// Drop write access.
    #[inline(always)]
    pub fn cast_const(self) -> Contiguous<*const E> {
        Contiguous::new(self.ptr.cast_const())
    }
}

impl<P: RawPointer> Categorized for Contiguous<P> {
    type Category = RandomAccess;

    const WRITABLE: bool = <P::Mutability as Mutability>::MUTABLE;
}

impl<P: RawPointer> SelfDescribing for Contiguous<P> {
    type Element = P::Element;
    type Pointer = P;
    type Reference<'r> = P::Reference<'r> where Self: 'r;
    type Offset = isize;
}

#[doc(hidden)]
pub type MutabilityOf<P> = <P as RawPointer>::Mutability;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutability_markers() {
        assert!(<MutabilityOf<*mut u8> as Mutability>::MUTABLE);
        assert!(!<MutabilityOf<*const u8> as Mutability>::MUTABLE);
    }

    #[test]
    fn test_steps_round_trip_position() {
        let data = [1u64, 2, 3];
        let (first, last) = Contiguous::bounds(&data);
        let second = first.step_forward();
        assert_eq!(second.offset_from(first), 1);
        assert_eq!(first.offset_from(second), -1);
        assert_eq!(last.step_back().step_back(), second);
        assert_eq!(first.wrapping_offset(3), last);
    }

    #[test]
    fn test_zero_sized_distance() {
        let data = [(), (), ()];
        let (first, last) = Contiguous::bounds(&data);
        assert_eq!(last.offset_from(first), 0);
    }

    #[test]
    fn test_mut_bounds() {
        let mut data = [0i32; 5];
        let (first, last) = Contiguous::bounds_mut(&mut data);
        assert_eq!(last.offset_from(first), 5);
        assert_eq!(last.cast_const().offset_from(first.cast_const()), 5);
        unsafe { *first.as_ptr() = 9 };
        assert_eq!(data[0], 9);
    }
}
