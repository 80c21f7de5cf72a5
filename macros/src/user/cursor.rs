use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::{resolve_tag, CursorArgs};

/// Lifetime the generated `Reference<'r>` is generic over.
const BORROW: &str = "r";

/// #[derive(Cursor)] implements `Categorized` and `SelfDescribing`.
pub fn expand_derive_cursor(input: DeriveInput) -> TokenStream2 {
    match derive_cursor(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

/// #[derive(Categorized)] implements `Categorized` only.
pub fn expand_derive_categorized(input: DeriveInput) -> TokenStream2 {
    match derive_categorized(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn derive_categorized(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let args = CursorArgs::from_attrs(&input.attrs)?;
    if let Some(key) = &args.extra_key {
        return Err(syn::Error::new_spanned(
            key,
            "`Categorized` only takes `category`; derive `Cursor` to declare the full descriptor",
        ));
    }
    categorized_impl(input, &args)
}

fn derive_cursor(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let args = CursorArgs::from_attrs(&input.attrs)?;
    check_borrow_lifetime_free(input)?;

    let categorized = categorized_impl(input, &args)?;

    let Some(element) = &args.element else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing `element`: add `#[cursor(element = ...)]`",
        ));
    };

    let pointer = match &args.pointer {
        Some(ty) => quote! { #ty },
        None if args.mutable => quote! { *mut #element },
        None => quote! { *const #element },
    };
    let reference = match &args.reference {
        Some(ty) => quote! { #ty },
        None if args.mutable => quote! { &'r mut #element },
        None => quote! { &'r #element },
    };
    let offset = match &args.offset {
        Some(ty) => quote! { #ty },
        None => quote! { isize },
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #categorized

        impl #impl_generics ::cursor_caps::SelfDescribing for #ident #ty_generics #where_clause {
            type Element = #element;
            type Pointer = #pointer;
            type Reference<'r> = #reference where Self: 'r;
            type Offset = #offset;
        }
    })
}

fn categorized_impl(input: &DeriveInput, args: &CursorArgs) -> syn::Result<TokenStream2> {
    let Some(category) = &args.category else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing capability tag: add `#[cursor(category = ...)]`",
        ));
    };
    let tag = resolve_tag(category)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let writable = args.mutable.then(|| quote! { const WRITABLE: bool = true; });

    Ok(quote! {
        impl #impl_generics ::cursor_caps::Categorized for #ident #ty_generics #where_clause {
            type Category = #tag;
            #writable
        }
    })
}

// `'r` names the accessor borrow; a type parameter of the same name would shadow it.
fn check_borrow_lifetime_free(input: &DeriveInput) -> syn::Result<()> {
    for lt in input.generics.lifetimes() {
        if lt.lifetime.ident == BORROW {
            return Err(syn::Error::new_spanned(
                &lt.lifetime,
                "`'r` is reserved for the accessor borrow in `#[derive(Cursor)]`; rename this lifetime",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> String {
        expand_derive_cursor(input).to_string().replace(' ', "")
    }

    #[test]
    fn test_defaults() {
        let out = expand(syn::parse_quote! {
            #[cursor(category = Forward, element = u8)]
            struct Walker;
        });
        assert!(out.contains("typeCategory=::cursor_caps::lattice::Forward;"));
        assert!(out.contains("typePointer=*constu8;"));
        assert!(out.contains("typeReference<'r>=&'ru8whereSelf:'r;"));
        assert!(out.contains("typeOffset=isize;"));
        assert!(!out.contains("WRITABLE"));
    }

    #[test]
    fn test_mutable_defaults() {
        let out = expand(syn::parse_quote! {
            #[cursor(category = RandomAccess, element = T, mutable)]
            struct Slot<'a, T>(&'a mut [T]);
        });
        assert!(out.contains("typePointer=*mutT;"));
        assert!(out.contains("typeReference<'r>=&'rmutTwhereSelf:'r;"));
        assert!(out.contains("forSlot<'a,T>"));
        assert!(out.contains("constWRITABLE:bool=true;"));
    }

    #[test]
    fn test_missing_element_is_an_error() {
        let out = expand(syn::parse_quote! {
            #[cursor(category = Forward)]
            struct Walker;
        });
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_reserved_lifetime() {
        let out = expand(syn::parse_quote! {
            #[cursor(category = Forward, element = u8)]
            struct Walker<'r>(&'r [u8]);
        });
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_categorized_rejects_descriptor_keys() {
        let out = expand_derive_categorized(syn::parse_quote! {
            #[cursor(category = Forward, element = u8)]
            struct Walker;
        });
        assert!(out.to_string().contains("compile_error"));
    }
}
