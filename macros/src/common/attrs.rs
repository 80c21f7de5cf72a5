//! `#[cursor(...)]` argument parsing.
//!
//! ```text
//! #[cursor(
//!     category = Bidirectional,   // required
//!     element = u8,               // required by Cursor
//!     pointer = *const u8,        // default: *const element (*mut with `mutable`)
//!     reference = &'r u8,         // default: &'r element (&'r mut with `mutable`)
//!     offset = isize,             // default: isize
//!     mutable,
//! )]
//! ```
//!
//! `'r` in `reference` is the borrow of the accessor.

use syn::{Attribute, Path, Type};

/// Parsed `#[cursor(...)]` arguments. Every key may appear once.
#[derive(Default)]
pub struct CursorArgs {
    pub category: Option<Path>,
    pub element: Option<Type>,
    pub pointer: Option<Type>,
    pub reference: Option<Type>,
    pub offset: Option<Type>,
    pub mutable: bool,
    /// First key other than `category`, for derives that accept nothing else.
    pub extra_key: Option<Path>,
}

impl CursorArgs {
    /// Collect every `#[cursor(...)]` on the item. Errors are combined.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = CursorArgs::default();
        let mut errors: Option<syn::Error> = None;

        for attr in attrs.iter().filter(|a| a.path().is_ident("cursor")) {
            let result = attr.parse_nested_meta(|meta| {
                let key = meta.path.clone();
                if key.is_ident("category") {
                    set_once(&mut args.category, meta.value()?.parse()?, &key)?;
                } else if key.is_ident("element") {
                    set_once(&mut args.element, meta.value()?.parse()?, &key)?;
                } else if key.is_ident("pointer") {
                    set_once(&mut args.pointer, meta.value()?.parse()?, &key)?;
                } else if key.is_ident("reference") {
                    set_once(&mut args.reference, meta.value()?.parse()?, &key)?;
                } else if key.is_ident("offset") {
                    set_once(&mut args.offset, meta.value()?.parse()?, &key)?;
                } else if key.is_ident("mutable") {
                    if args.mutable {
                        return Err(meta.error("duplicate `mutable`"));
                    }
                    args.mutable = true;
                } else {
                    return Err(meta.error(
                        "unknown cursor key, expected one of: category, element, pointer, reference, offset, mutable",
                    ));
                }
                if !key.is_ident("category") && args.extra_key.is_none() {
                    args.extra_key = Some(key);
                }
                Ok(())
            });

            if let Err(e) = result {
                match &mut errors {
                    Some(all) => all.combine(e),
                    None => errors = Some(e),
                }
            }
        }

        match errors {
            Some(e) => Err(e),
            None => Ok(args),
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &Path) -> syn::Result<()> {
    if slot.is_some() {
        let name = key.get_ident().map(|i| i.to_string()).unwrap_or_default();
        return Err(syn::Error::new_spanned(key, format!("duplicate `{}`", name)));
    }
    *slot = Some(value);
    Ok(())
}
