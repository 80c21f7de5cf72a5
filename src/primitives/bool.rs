//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Every predicate in the crate has a type-level form answering with one of
//! these, next to its `const bool` form.

use crate::dispatch::{MethodImpl, StaticMethodImpl};

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Call a static method based on this boolean value.
    /// If true (Present), calls Then::call().
    /// If false (Absent), calls Else::call().
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>;

    /// Value-taking counterpart of `static_dispatch`.
    fn method_dispatch<Then, Else, T: ?Sized, Output>(value: &T) -> Output
    where
        Then: MethodImpl<T, Output>,
        Else: MethodImpl<T, Output>;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Then::call()
    }

    #[inline(always)]
    fn method_dispatch<Then, Else, T: ?Sized, Output>(value: &T) -> Output
    where
        Then: MethodImpl<T, Output>,
        Else: MethodImpl<T, Output>,
    {
        Then::call(value)
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Else::call()
    }

    #[inline(always)]
    fn method_dispatch<Then, Else, T: ?Sized, Output>(value: &T) -> Output
    where
        Then: MethodImpl<T, Output>,
        Else: MethodImpl<T, Output>,
    {
        Else::call(value)
    }
}
