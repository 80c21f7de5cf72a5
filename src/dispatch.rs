//! Tier-Based Dispatch
//!
//! Picks an algorithm by cursor tier with no runtime branch: the category's
//! [`IsA`] answer selects one of two types through [`Bool::If`].
//!
//! ## Core Concepts
//!
//! 1. `SelectTier<W, Then, Else>` - `Then` when the category is-a `W`, else `Else`
//! 2. `TierStaticCall` / `TierMethodCall` - call the selected implementation
//! 3. `StaticSelect` - a selection that is itself an implementation, so
//!    selections nest into a chain over several tiers
//!
//! ## Example
//!
//! ```
//! use cursor_caps::dispatch::{StaticMethodImpl, StaticSelect, TierStaticCall};
//! use cursor_caps::{Bidirectional, Categorized, RandomAccess};
//!
//! struct Jump;
//! struct Walk;
//! struct Scan;
//! impl StaticMethodImpl<&'static str> for Jump { fn call() -> &'static str { "jump" } }
//! impl StaticMethodImpl<&'static str> for Walk { fn call() -> &'static str { "walk" } }
//! impl StaticMethodImpl<&'static str> for Scan { fn call() -> &'static str { "scan" } }
//!
//! fn strategy<C>() -> &'static str
//! where
//!     C: TierStaticCall<RandomAccess, Jump, StaticSelect<C, Bidirectional, Walk, Scan>, &'static str>,
//! {
//!     <C as TierStaticCall<RandomAccess, Jump, StaticSelect<C, Bidirectional, Walk, Scan>, _>>::call()
//! }
//!
//! struct Tape;
//! impl Categorized for Tape { type Category = Bidirectional; }
//!
//! assert_eq!(strategy::<*const u8>(), "jump");
//! assert_eq!(strategy::<Tape>(), "walk");
//! ```

use core::marker::PhantomData;

use crate::lattice::IsA;
use crate::primitives::Bool;
use crate::traits::Classify;

// =============================================================================
// SelectTier Trait - Core Type-Level Selector
// =============================================================================

/// Selects between two types by cursor tier.
///
/// - If the category of `Self` is-a `W`, returns `Then`
/// - Otherwise returns `Else`
pub trait SelectTier<W, Then, Else> {
    type Out;
}

impl<C, W, Then, Else> SelectTier<W, Then, Else> for C
where
    C: ?Sized + Classify,
    C::Category: IsA<W>,
{
    type Out = <<C::Category as IsA<W>>::Out as Bool>::If<Then, Else>;
}

/// Call a static method picked by tier.
///
/// Callers only need `Then`/`Else` to implement `StaticMethodImpl<Output>`;
/// they never have to prove anything about `SelectTier::Out`.
pub trait TierStaticCall<W, Then, Else, Output> {
    fn call() -> Output;
}

impl<C, W, Then, Else, Output> TierStaticCall<W, Then, Else, Output> for C
where
    C: ?Sized + Classify,
    C::Category: IsA<W>,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    #[inline(always)]
    fn call() -> Output {
        <<C::Category as IsA<W>>::Out as Bool>::static_dispatch::<Then, Else, Output>()
    }
}

/// Call a value-taking method picked by the tier of the cursor type `Self`.
pub trait TierMethodCall<W, Then, Else, Output> {
    fn call(&self) -> Output;
}

impl<C, W, Then, Else, Output> TierMethodCall<W, Then, Else, Output> for C
where
    C: ?Sized + Classify,
    C::Category: IsA<W>,
    Then: MethodImpl<C, Output>,
    Else: MethodImpl<C, Output>,
{
    #[inline(always)]
    fn call(&self) -> Output {
        <<C::Category as IsA<W>>::Out as Bool>::method_dispatch::<Then, Else, C, Output>(self)
    }
}

/// Wrapper for chaining tier selections.
///
/// Wraps a `TierStaticCall` so that it is itself a `StaticMethodImpl`,
/// usable as the `Else` of an outer selection.
pub struct StaticSelect<C: ?Sized, W, Then, Else>(PhantomData<(PhantomData<C>, W, Then, Else)>);

impl<C, W, Then, Else, Output> StaticMethodImpl<Output> for StaticSelect<C, W, Then, Else>
where
    C: ?Sized + TierStaticCall<W, Then, Else, Output>,
{
    #[inline(always)]
    fn call() -> Output {
        <C as TierStaticCall<W, Then, Else, Output>>::call()
    }
}

// =============================================================================
// Method Implementation Traits
// =============================================================================

/// Method implementations that can be type-selected.
pub trait MethodImpl<T: ?Sized, Output = ()> {
    fn call(value: &T) -> Output;
}

/// Static/associated function implementations (no self parameter).
pub trait StaticMethodImpl<Output = ()> {
    fn call() -> Output;
}

// =============================================================================
// NoImpl - Fallback for when no implementation matches
// =============================================================================

/// Marker type for a tier with no specialized implementation.
pub struct NoImpl;

impl<T: ?Sized, Output: Default> MethodImpl<T, Output> for NoImpl {
    #[inline(always)]
    fn call(_value: &T) -> Output {
        Output::default()
    }
}

impl<Output: Default> StaticMethodImpl<Output> for NoImpl {
    #[inline(always)]
    fn call() -> Output {
        Output::default()
    }
}

// =============================================================================
// tier_dispatch! - inline form
// =============================================================================

/// Pick between two expressions by cursor tier.
///
/// The condition is a `const` evaluated at compile time, so the untaken arm
/// is dead code after monomorphization. Both arms must type-check.
///
/// ```
/// use cursor_caps::{tier_dispatch, Bidirectional};
///
/// let cost = tier_dispatch!(*const u8, Bidirectional, {
///     AtLeast => "constant",
///     Below => "linear",
/// });
/// assert_eq!(cost, "constant");
/// ```
#[macro_export]
macro_rules! tier_dispatch {
    ($cursor:ty, $tier:ty, {
        AtLeast => $at_least:expr,
        Below => $below:expr $(,)?
    }) => {{
        if const { $crate::predicates::at_least::<$cursor, $tier>() } {
            $at_least
        } else {
            $below
        }
    }};
}
