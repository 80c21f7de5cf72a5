//! Fail-closed probes for concrete types.
//!
//! Same shape throughout: a local wrapper, a fallback trait const that says
//! `false`, and an inherent const that shadows it when the bound holds.

/// Check at compile time whether a concrete type declares its own capability tag.
///
/// Never errors: a type without a declaration answers `false`.
///
/// ```
/// use cursor_caps::has_category;
///
/// assert!(!has_category!(String));
/// assert!(!has_category!(*const i32));
/// ```
#[macro_export]
macro_rules! has_category {
    ($T:ty) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $crate::Categorized> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        <__Probe<$T>>::VAL
    }};
}

/// Check whether a concrete type is the generic two-field container `(A, B)`.
///
/// ```
/// use cursor_caps::is_pair;
///
/// assert!(is_pair!((u8, String)));
/// assert!(!is_pair!((u8, u8, u8)));
/// assert!(!is_pair!([u8; 2]));
/// ```
#[macro_export]
macro_rules! is_pair {
    ($T:ty) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<A, B> __Probe<(A, B)> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        <__Probe<$T>>::VAL
    }};
}

/// Check whether a concrete type classifies as a cursor at all.
///
/// True for raw pointers and for every type declaring a tag; `false`
/// otherwise, without reaching the hard error a descriptor request raises.
///
/// ```
/// use cursor_caps::is_cursor;
///
/// assert!(is_cursor!(*mut u8));
/// assert!(!is_cursor!(u8));
/// ```
#[macro_export]
macro_rules! is_cursor {
    ($T:ty) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $crate::Classify> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = $crate::predicates::is_cursor::<T>();
        }

        <__Probe<$T>>::VAL
    }};
}

/// Check whether a concrete type is a cursor of at least the given tier.
///
/// Non-cursors answer `false` for every tier.
///
/// ```
/// use cursor_caps::{at_least, Bidirectional, WriteOnce};
///
/// assert!(at_least!(*const u8: Bidirectional));
/// assert!(!at_least!(*const u8: WriteOnce));
/// assert!(!at_least!(String: Bidirectional));
/// ```
#[macro_export]
macro_rules! at_least {
    ($T:ty : $W:ty) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $crate::Classify> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = $crate::predicates::at_least::<T, $W>();
        }

        <__Probe<$T>>::VAL
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Categorized, Forward};

    struct Declared;
    impl Categorized for Declared {
        type Category = Forward;
    }

    struct OnlyFor<T>(core::marker::PhantomData<T>);
    impl Categorized for OnlyFor<u8> {
        type Category = Forward;
    }

    #[test]
    fn test_has_category() {
        assert!(has_category!(Declared));
        assert!(!has_category!(()));
        assert!(!has_category!(*mut Declared));
    }

    #[test]
    fn test_has_category_per_instantiation() {
        assert!(has_category!(OnlyFor<u8>));
        assert!(!has_category!(OnlyFor<u16>));
    }

    #[test]
    fn test_is_pair() {
        assert!(is_pair!((Declared, ())));
        assert!(!is_pair!(Declared));
        assert!(!is_pair!((u8,)));
    }
}
