//! # Layer 1: Capability Lattice
//!
//! Five marker tags ordered by capability:
//!
//! ```text
//!   ReadOnce        WriteOnce
//!      ^
//!   Forward
//!      ^
//!   Bidirectional
//!      ^
//!   RandomAccess
//! ```
//!
//! An arrow reads "is-a". `WriteOnce` is a sibling of `ReadOnce`: no read tier
//! is-a `WriteOnce`.
//!
//! The relation is available three ways:
//! - value level: [`TagKind::is_a`] over a precomputed table (usable in `const`)
//! - type level: [`IsA<W>`](IsA) answering `Present`/`Absent`, and the
//!   [`AtLeast<W>`](AtLeast) bound
//! - conversion: every richer tag is `Into` every weaker tag

pub mod tag;
pub mod relation;

pub use tag::{Bidirectional, Forward, RandomAccess, ReadOnce, Tag, TagKind, WriteOnce};
pub use relation::{AtLeast, IsA};
