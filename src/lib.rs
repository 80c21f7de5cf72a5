#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (io::Bytes, hash_map descriptors)
// - alloc: enables alloc collections descriptors in no_std

//! # cursor-caps
//!
//! Compile-time cursor capability classification.
//!
//! Every cursor (anything that walks a sequence) is assigned a capability
//! tier from a fixed lattice, and the crate derives a uniform descriptor for
//! it: `(Category, Element, Pointer, Reference, Offset)`. Generic algorithms
//! then pick an implementation by tier with zero runtime cost.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present / Absent), If, And / Or                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Lattice                                                 |
//! |  - ReadOnce, WriteOnce, Forward, Bidirectional, RandomAccess      |
//! |  - IsA<W> (type level), TagKind::is_a (const), AtLeast<W> bound   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Detection                                               |
//! |  - Categorized, has_category!, is_pair!                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Normalizer                                              |
//! |  - Classify, CursorTraits, Descriptor, raw pointers, Contiguous   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Predicates and Dispatch                                 |
//! |  - at_least / is_cursor (const fn and probe macros)               |
//! |  - SelectTier, TierStaticCall, tier_dispatch!                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cursor_caps::prelude::*;
//!
//! #[derive(Cursor)]
//! #[cursor(category = Bidirectional, element = u8, pointer = (), reference = u8)]
//! struct Tape {
//!     pos: usize,
//! }
//!
//! // Raw pointers are random-access by convention.
//! assert_eq!(Descriptor::<*const u8>::CATEGORY, TagKind::RandomAccess);
//!
//! // A self-describing cursor reports exactly what it declared.
//! assert_eq!(Descriptor::<Tape>::CATEGORY, TagKind::Bidirectional);
//! assert!(at_least!(Tape: Forward));
//! assert!(!at_least!(Tape: RandomAccess));
//!
//! // Non-cursors answer false instead of failing to compile.
//! assert!(!is_cursor!(String));
//! ```
//!
//! ## Generic code
//!
//! Bounds carry the requirement; a type that is not a cursor, or does not
//! reach the tier, is rejected where the function is called:
//!
//! ```
//! use cursor_caps::{AtLeast, Bidirectional, CursorTraits};
//!
//! fn reverse_walk<C>() -> bool
//! where
//!     C: CursorTraits,
//!     C::Category: AtLeast<Bidirectional>,
//! {
//!     true
//! }
//!
//! assert!(reverse_walk::<*mut i32>());
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// Allow generated code to use ::cursor_caps paths inside this crate
extern crate self as cursor_caps;

// Re-export paste for macro usage
pub use paste;

// =============================================================================
// Modules
// =============================================================================

pub mod primitives;
pub mod lattice;
pub mod detect;
pub mod traits;
pub mod predicates;
pub mod dispatch;
pub mod inspect;

// =============================================================================
// Re-exports
// =============================================================================

pub use primitives::{Absent, Bool, Present};

pub use lattice::{AtLeast, Bidirectional, Forward, IsA, RandomAccess, ReadOnce, Tag, TagKind, WriteOnce};

pub use detect::Categorized;

pub use traits::{
    category_of, descriptor_of, element_type_of, offset_type_of, CategoryOf, Classify, Contiguous,
    CursorTraits, Descriptor, ElementOf, OffsetOf, PathKind, PointerOf, ReferenceOf, SelfDescribing,
};

pub use dispatch::{MethodImpl, NoImpl, SelectTier, StaticMethodImpl, StaticSelect, TierMethodCall, TierStaticCall};

pub use inspect::{DescriptorInfo, Inspect};

pub use macros::{Categorized, Cursor};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{at_least, has_category, is_cursor, is_pair, tier_dispatch};
    pub use crate::{
        AtLeast, Bidirectional, Categorized, Classify, Contiguous, Cursor, CursorTraits, Descriptor, Forward,
        RandomAccess, ReadOnce, SelfDescribing, Tag, TagKind, WriteOnce,
    };
    pub use crate::{descriptor_of, Inspect};
}
