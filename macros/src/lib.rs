//! Procedural macros for cursor-caps
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Cursor)]` | struct/enum | Declare capability tag and full descriptor |
//! | `#[derive(Categorized)]` | struct/enum | Declare capability tag only |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Cursor)]
//! #[cursor(category = Bidirectional, element = u8, pointer = (), reference = u8)]
//! struct Tape { pos: usize }
//! ```
//!
//! Generated code refers to the runtime crate as `::cursor_caps`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Derive the full cursor descriptor.
///
/// # Usage
/// ```ignore
/// #[derive(Cursor)]
/// #[cursor(category = RandomAccess, element = T, mutable)]
/// struct SliceCursor<'a, T> { data: &'a mut [T], pos: usize }
/// ```
///
/// Keys: `category` and `element` are required; `pointer`, `reference`
/// (may use `'r`) and `offset` default to `*const element`, `&'r element`
/// and `isize`. `mutable` switches the defaults to `*mut` / `&'r mut` and
/// marks the cursor writable.
#[proc_macro_derive(Cursor, attributes(cursor))]
pub fn derive_cursor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_cursor(input).into()
}

/// Derive only the capability tag.
///
/// # Usage
/// ```ignore
/// #[derive(Categorized)]
/// #[cursor(category = Forward)]
/// struct Lines;
/// ```
#[proc_macro_derive(Categorized, attributes(cursor))]
pub fn derive_categorized(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_categorized(input).into()
}
