//! Type-level is-a relation between tags.
//!
//! The table below is the single declaration of the lattice; `TagKind::IS_A`
//! is its value-level mirror and the tests check the two agree.

use crate::primitives::{Absent, Bool, Present};
use super::tag::{Bidirectional, Forward, RandomAccess, ReadOnce, Tag, WriteOnce};

/// Type-level query: is `Self` at least as capable as `W`?
///
/// Implemented for all 25 ordered tag pairs.
pub trait IsA<W> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

// Each row: richer => [tags it is-a] / [tags it is not].
macro_rules! is_a_table {
    ($($richer:ident => [$($yes:ident),*] / [$($no:ident),*];)+) => {
        $(
            $( impl IsA<$yes> for $richer { type Out = Present; } )*
            $( impl IsA<$no> for $richer { type Out = Absent; } )*
        )+
    };
}

is_a_table! {
    ReadOnce      => [ReadOnce] / [WriteOnce, Forward, Bidirectional, RandomAccess];
    WriteOnce     => [WriteOnce] / [ReadOnce, Forward, Bidirectional, RandomAccess];
    Forward       => [Forward, ReadOnce] / [WriteOnce, Bidirectional, RandomAccess];
    Bidirectional => [Bidirectional, Forward, ReadOnce] / [WriteOnce, RandomAccess];
    RandomAccess  => [RandomAccess, Bidirectional, Forward, ReadOnce] / [WriteOnce];
}

/// Bound form of [`IsA`]: `C: AtLeast<Forward>` holds only for tags that are-a `Forward`.
#[diagnostic::on_unimplemented(
    message = "capability tag `{Self}` is weaker than the required `{W}`",
    label = "this cursor does not reach the `{W}` tier"
)]
pub trait AtLeast<W>: Tag {}

impl<T, W> AtLeast<W> for T where T: Tag + IsA<W, Out = Present> {}

// A richer tag converts into every weaker tag (strict pairs only, reflexive
// conversion comes from core).
macro_rules! impl_widen {
    ($($richer:ident => $weaker:ident),+ $(,)?) => {
        $(
            impl From<$richer> for $weaker {
                #[inline(always)]
                fn from(_: $richer) -> Self {
                    $weaker
                }
            }
        )+
    };
}

impl_widen! {
    Forward => ReadOnce,
    Bidirectional => Forward,
    Bidirectional => ReadOnce,
    RandomAccess => Bidirectional,
    RandomAccess => Forward,
    RandomAccess => ReadOnce,
}
