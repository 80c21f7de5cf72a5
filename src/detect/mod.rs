//! # Layer 2: Self-Description Detector
//!
//! A type is *self-describing* when it declares its own capability tag, which
//! in Rust means implementing [`Categorized`]:
//!
//! ```
//! use cursor_caps::{Categorized, Forward};
//!
//! struct Lines;
//! impl Categorized for Lines {
//!     type Category = Forward;
//! }
//! ```
//!
//! `#[derive(Categorized)]` or `#[derive(Cursor)]` write that impl for you.
//!
//! ## Detection
//!
//! Generic code states the declaration as a bound (`T: Categorized`); a type
//! without it is rejected at the call site. For a concrete type the question
//! can also be *asked* without risking an error:
//!
//! ```
//! use cursor_caps::{has_category, Categorized, RandomAccess};
//!
//! struct Declared;
//! impl Categorized for Declared { type Category = RandomAccess; }
//! struct Plain;
//!
//! assert!(has_category!(Declared));
//! assert!(!has_category!(Plain));
//! assert!(!has_category!(*mut u8)); // raw cursors are classified, not self-describing
//! ```
//!
//! The probe resolves an inherent const that only exists when the bound
//! holds; otherwise a fallback trait const answers `false`. Anything the
//! compiler cannot prove (no impl, an impl for a different instantiation, a
//! bound that only holds for some parameters) falls back, so the probe fails
//! closed.
//!
//! ## Limitation
//!
//! Probes see concrete types only. Inside `fn f<T>()` they answer from the
//! bounds `T` carries, not from the eventual instantiation.

mod probe;

use crate::lattice::{IsA, Tag, WriteOnce};

/// Nested capability-tag declaration of a self-describing type.
///
/// This is the only member required to be classified; the remaining
/// descriptor fields live on [`SelfDescribing`](crate::SelfDescribing).
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare a capability tag",
    label = "`{Self}` is not self-describing",
    note = "derive `Categorized` (tag only) or `Cursor` (full descriptor) on `{Self}`"
)]
pub trait Categorized {
    type Category: Tag;

    /// Whether the cursor can be written through.
    ///
    /// Defaults to what the tier implies (`WriteOnce` only). Cursors that
    /// hand out mutable access on a read tier, like `slice::IterMut`, set it.
    const WRITABLE: bool = <Self::Category as IsA<WriteOnce>>::VALUE;
}
