//! # Layer 3: Descriptor Normalizer
//!
//! Turns any cursor type into the uniform descriptor
//! `(Category, Element, Pointer, Reference, Offset)`.
//!
//! ## Resolution
//!
//! ```text
//!   *mut E      -> Raw<Mut>       RandomAccess, E, *mut E,   &mut E, isize
//!   *const E    -> Raw<Const>     RandomAccess, E, *const E, &E,     isize
//!   T: Categorized + SelfDescribing
//!               -> SelfDescribed  copied verbatim from T
//!   anything else -> compile error naming the type
//! ```
//!
//! Two traits carry this. [`Classify`] answers "which branch, which tier" and
//! holds for every cursor, including a type that declares only its tag.
//! [`CursorTraits`] is the full descriptor and additionally needs the
//! remaining fields. The branches are disjoint impls of the same trait, so
//! the compiler rejects any type that could resolve two ways, and resolves
//! each type exactly once.
//!
//! ## Hard error
//!
//! Asking for the descriptor of a non-cursor does not compile:
//!
//! ```compile_fail
//! struct NotACursor;
//! let _ = cursor_caps::descriptor_of::<NotACursor>();
//! ```
//!
//! Nor does a type that declares only its tag:
//!
//! ```compile_fail
//! use cursor_caps::{Categorized, Forward};
//!
//! struct TagOnly;
//! impl Categorized for TagOnly { type Category = Forward; }
//!
//! let _ = cursor_caps::descriptor_of::<TagOnly>();
//! ```

pub mod raw;
mod std_impls;

use core::fmt;
use core::marker::PhantomData;

use crate::detect::Categorized;
use crate::lattice::{IsA, ReadOnce, Tag, TagKind};
use crate::primitives::Bool;

pub use raw::{Const, Contiguous, Mut, Mutability, RawPointer};

// =============================================================================
// Resolution paths
// =============================================================================

/// Value-level name of a resolution branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    RawMut,
    RawConst,
    SelfDescribed,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PathKind::RawMut => "raw mut",
            PathKind::RawConst => "raw const",
            PathKind::SelfDescribed => "self-described",
        })
    }
}

/// Type-level resolution branch.
pub trait ResolutionPath: 'static {
    const KIND: PathKind;
}

/// Branch for types declaring their own tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelfDescribed;

/// Branch for raw pointers, by mutability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Raw<M>(PhantomData<M>);

impl ResolutionPath for SelfDescribed {
    const KIND: PathKind = PathKind::SelfDescribed;
}

impl ResolutionPath for Raw<Mut> {
    const KIND: PathKind = PathKind::RawMut;
}

impl ResolutionPath for Raw<Const> {
    const KIND: PathKind = PathKind::RawConst;
}

// =============================================================================
// Traits
// =============================================================================

/// Descriptor fields a self-describing cursor declares next to its tag.
///
/// Trusted as written: nothing checks that the fields agree with each other
/// or with the tag.
pub trait SelfDescribing: Categorized {
    type Element;
    type Pointer;
    type Reference<'r>
    where
        Self: 'r;
    type Offset;
}

/// Classification of a cursor: its tier and the branch that resolved it.
///
/// Implemented for `*mut E`, `*const E`, and every [`Categorized`] type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a cursor",
    label = "`{Self}` is neither a raw pointer nor a type declaring its capability tag",
    note = "derive `Cursor` on `{Self}`, or probe with `is_cursor!` if a non-cursor is expected here"
)]
pub trait Classify {
    type Category: Tag;
    type Path: ResolutionPath;
    /// Whether the cursor can be read through.
    type Readable: Bool;

    const READABLE: bool = <Self::Readable as Bool>::VALUE;
    /// Whether the cursor can be written through.
    ///
    /// Value-level only: self-describing cursors may declare it apart from
    /// their tier (see [`Categorized::WRITABLE`]).
    const WRITABLE: bool;
}

impl<T: ?Sized + Categorized> Classify for T {
    type Category = T::Category;
    type Path = SelfDescribed;
    type Readable = <T::Category as IsA<ReadOnce>>::Out;

    const WRITABLE: bool = <T as Categorized>::WRITABLE;
}

/// The normalized descriptor of a cursor type.
///
/// `Reference<'r>` is the accessor borrowed for `'r`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no cursor descriptor",
    label = "`{Self}` is not a raw pointer and does not describe itself",
    note = "`#[derive(Cursor)]` declares the tag together with element, pointer, reference and offset"
)]
pub trait CursorTraits: Classify {
    type Element;
    type Pointer;
    type Reference<'r>
    where
        Self: 'r;
    type Offset;
}

impl<T: ?Sized + SelfDescribing> CursorTraits for T {
    type Element = T::Element;
    type Pointer = T::Pointer;
    type Reference<'r> = <T as SelfDescribing>::Reference<'r> where Self: 'r;
    type Offset = T::Offset;
}

// =============================================================================
// Field access by name
// =============================================================================

pub type CategoryOf<T> = <T as Classify>::Category;
pub type ElementOf<T> = <T as CursorTraits>::Element;
pub type PointerOf<T> = <T as CursorTraits>::Pointer;
pub type ReferenceOf<'r, T> = <T as CursorTraits>::Reference<'r>;
pub type OffsetOf<T> = <T as CursorTraits>::Offset;

/// Zero-sized handle on the descriptor of `T`.
///
/// Zero-sized: two handles for the same `T` are always equal. Compare
/// [`info`](Self::info) to check what the descriptor resolved to.
pub struct Descriptor<T>(PhantomData<fn() -> T>);

impl<T: CursorTraits> Descriptor<T> {
    pub const CATEGORY: TagKind = <T::Category as Tag>::KIND;
    pub const PATH: PathKind = <T::Path as ResolutionPath>::KIND;

    #[inline(always)]
    pub const fn new() -> Self {
        Descriptor(PhantomData)
    }

    /// The category tag as a value, for exact-tag dispatch.
    #[inline(always)]
    pub fn category(self) -> T::Category {
        T::Category::default()
    }
}

impl<T> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Descriptor<T> {}

impl<T> PartialEq for Descriptor<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Descriptor<T> {}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor<{}>", core::any::type_name::<T>())
    }
}

/// Resolve the descriptor of `T`. Fails to compile for non-cursors.
#[inline(always)]
pub const fn descriptor_of<T: CursorTraits>() -> Descriptor<T> {
    Descriptor::new()
}

// =============================================================================
// Value-level extractors
// =============================================================================

/// The category tag of a cursor value, for overloading on the exact tag.
#[inline(always)]
pub fn category_of<C: ?Sized + Classify>(_cursor: &C) -> C::Category {
    C::Category::default()
}

/// A marker carrying the element type of a cursor value.
#[inline(always)]
pub fn element_type_of<C: CursorTraits>(_cursor: &C) -> PhantomData<C::Element> {
    PhantomData
}

/// A marker carrying the offset type of a cursor value.
#[inline(always)]
pub fn offset_type_of<C: CursorTraits>(_cursor: &C) -> PhantomData<C::Offset> {
    PhantomData
}
