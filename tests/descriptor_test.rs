//! Descriptor resolution for raw and self-describing cursors.

use std::any::TypeId;

use cursor_caps::prelude::*;
use cursor_caps::{ElementOf, OffsetOf, PathKind, PointerOf, ReferenceOf};

fn same<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

#[derive(Cursor)]
#[cursor(category = Forward, element = String)]
struct Lines<'a> {
    rest: &'a str,
}

#[derive(Cursor)]
#[cursor(category = RandomAccess, element = T, offset = i64, mutable)]
struct Window<'a, T: Copy>
where
    T: 'static,
{
    data: &'a mut [T],
    pos: usize,
}

#[test]
fn test_raw_mutable_descriptor() {
    assert_eq!(Descriptor::<*mut i32>::CATEGORY, TagKind::RandomAccess);
    assert_eq!(Descriptor::<*mut i32>::PATH, PathKind::RawMut);
    assert!(same::<ElementOf<*mut i32>, i32>());
    assert!(same::<PointerOf<*mut i32>, *mut i32>());
    assert!(same::<ReferenceOf<'static, *mut i32>, &'static mut i32>());
    assert!(same::<OffsetOf<*mut i32>, isize>());
}

#[test]
fn test_raw_read_only_descriptor() {
    assert_eq!(Descriptor::<*const i32>::CATEGORY, TagKind::RandomAccess);
    assert_eq!(Descriptor::<*const i32>::PATH, PathKind::RawConst);
    assert!(same::<ElementOf<*const i32>, i32>());
    assert!(same::<PointerOf<*const i32>, *const i32>());
    assert!(same::<ReferenceOf<'static, *const i32>, &'static i32>());
    assert!(same::<OffsetOf<*const i32>, isize>());
}

#[test]
fn test_derive_defaults() {
    assert_eq!(Descriptor::<Lines<'static>>::PATH, PathKind::SelfDescribed);
    assert!(same::<ElementOf<Lines<'static>>, String>());
    assert!(same::<PointerOf<Lines<'static>>, *const String>());
    assert!(same::<ReferenceOf<'static, Lines<'static>>, &'static String>());
    assert!(same::<OffsetOf<Lines<'static>>, isize>());
    let _ = Lines { rest: "" }.rest;
}

#[test]
fn test_derive_keeps_generics_and_mutable_defaults() {
    type W = Window<'static, u16>;
    assert_eq!(Descriptor::<W>::CATEGORY, TagKind::RandomAccess);
    assert!(same::<ElementOf<W>, u16>());
    assert!(same::<PointerOf<W>, *mut u16>());
    assert!(same::<ReferenceOf<'static, W>, &'static mut u16>());
    assert!(same::<OffsetOf<W>, i64>());
}

#[test]
fn test_idempotence() {
    let first = descriptor_of::<*mut i32>().info();
    let second = descriptor_of::<*mut i32>().info();
    assert_eq!(first, second);
    assert_eq!(descriptor_of::<Lines<'static>>().info(), descriptor_of::<Lines<'static>>().info());
}

#[test]
fn test_readable_writable() {
    assert!(<*mut u8 as Classify>::READABLE && <*mut u8 as Classify>::WRITABLE);
    assert!(<*const u8 as Classify>::READABLE && !<*const u8 as Classify>::WRITABLE);
    assert!(<Lines<'static> as Classify>::READABLE);
    assert!(!<Lines<'static> as Classify>::WRITABLE);
    assert!(<Window<'static, u16> as Classify>::WRITABLE);
}

#[test]
fn test_value_extractors_select_overloads() {
    fn describe(tag: impl Into<Forward>) -> &'static str {
        let _: Forward = tag.into();
        "forward or better"
    }

    let mut data = [1u16, 2, 3];
    let cursor = Window { data: &mut data, pos: 0 };
    assert_eq!(cursor_caps::category_of(&cursor), RandomAccess);
    assert_eq!(describe(cursor_caps::category_of(&cursor)), "forward or better");
    let _: std::marker::PhantomData<u16> = cursor_caps::element_type_of(&cursor);
    let _: std::marker::PhantomData<i64> = cursor_caps::offset_type_of(&cursor);
    assert_eq!(cursor.data[cursor.pos], 1);
}
