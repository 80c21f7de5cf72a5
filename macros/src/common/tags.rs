//! Capability tag resolution
//!
//! Maps the tag named in `category = ...` onto the crate's marker type.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::Path;

/// Tag names, weakest first.
pub const TAG_NAMES: [&str; 5] = ["ReadOnce", "WriteOnce", "Forward", "Bidirectional", "RandomAccess"];

/// Resolve `Forward`, `lattice::Forward`, `cursor_caps::Forward`, ... by
/// their last segment.
pub fn resolve_tag(path: &Path) -> syn::Result<TokenStream2> {
    let Some(last) = path.segments.last() else {
        return Err(syn::Error::new_spanned(path, "expected a capability tag"));
    };
    if !last.arguments.is_none() {
        return Err(syn::Error::new_spanned(path, "capability tags take no generic arguments"));
    }
    let name = last.ident.to_string();
    if TAG_NAMES.contains(&name.as_str()) {
        let ident = format_ident!("{}", name, span = last.ident.span());
        Ok(quote! { ::cursor_caps::lattice::#ident })
    } else {
        Err(syn::Error::new_spanned(
            path,
            format!("unknown capability tag `{}`, expected one of: {}", name, TAG_NAMES.join(", ")),
        ))
    }
}
