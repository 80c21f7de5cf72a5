#![allow(dead_code, unused)]

// Each commented line fails to compile; uncomment one to read its diagnostic.

use cursor_caps::prelude::*;

struct NotACursor;

#[derive(Categorized)]
#[cursor(category = ReadOnce)]
struct TagOnly;

#[derive(Categorized)]
#[cursor(category = WriteOnce)]
struct Sink;

fn needs_forward<C: Classify>()
where
    C::Category: AtLeast<Forward>,
{
}

fn needs_descriptor<C: CursorTraits>() {}

#[test]
fn test_hard_errors() {
    // Not a raw pointer and no declared tag:
    // "`NotACursor` has no cursor descriptor"
    // descriptor_of::<NotACursor>();

    // Tag declared, descriptor fields missing:
    // "`TagOnly` has no cursor descriptor"
    // needs_descriptor::<TagOnly>();

    // Tier too weak:
    // "capability tag `ReadOnce` is weaker than the required `Forward`"
    // needs_forward::<TagOnly>();

    // WriteOnce is not on the read chain:
    // needs_forward::<Sink>();

    // The probes never error:
    assert!(!is_cursor!(NotACursor));
    assert!(is_cursor!(TagOnly));
    needs_forward::<*const u8>();
    needs_descriptor::<*const u8>();
}

// Derive errors:
//
// #[derive(Cursor)]
// #[cursor(category = Sideways, element = u8)]      // unknown capability tag `Sideways`
// struct Bad1;
//
// #[derive(Cursor)]
// #[cursor(category = Forward)]                      // missing `element`
// struct Bad2;
//
// #[derive(Categorized)]
// #[cursor(category = Forward, element = u8)]        // `Categorized` only takes `category`
// struct Bad3;
