//! Runtime inspection of cursor descriptors.
//!
//! Renders the descriptor of a cursor type by name. Useful for debugging and
//! for diagnostics in downstream code generators.

use core::any::type_name;
use core::fmt;

use crate::lattice::TagKind;
use crate::traits::{CursorTraits, Descriptor, PathKind};

/// Names of every descriptor field of one cursor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptorInfo {
    pub cursor: &'static str,
    pub category: TagKind,
    pub path: PathKind,
    pub element: &'static str,
    pub pointer: &'static str,
    pub reference: &'static str,
    pub offset: &'static str,
}

impl fmt::Display for DescriptorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}] element={} pointer={} reference={} offset={}",
            self.cursor, self.category, self.path, self.element, self.pointer, self.reference, self.offset
        )
    }
}

/// Visit descriptor fields as `(field, type name)` pairs.
pub trait Inspect {
    fn inspect<F: FnMut(&'static str, &'static str)>(&self, f: F);
}

impl<T: CursorTraits + 'static> Descriptor<T> {
    /// Field names of this descriptor. The reference is named at `'static`.
    pub fn info(self) -> DescriptorInfo {
        DescriptorInfo {
            cursor: type_name::<T>(),
            category: Self::CATEGORY,
            path: Self::PATH,
            element: type_name::<T::Element>(),
            pointer: type_name::<T::Pointer>(),
            reference: type_name::<T::Reference<'static>>(),
            offset: type_name::<T::Offset>(),
        }
    }
}

impl<T: CursorTraits + 'static> Inspect for Descriptor<T> {
    fn inspect<F: FnMut(&'static str, &'static str)>(&self, mut f: F) {
        let info = self.info();
        f("category", info.category.name());
        f("element", info.element);
        f("pointer", info.pointer);
        f("reference", info.reference);
        f("offset", info.offset);
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::descriptor_of;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn test_raw_info() {
        let info = descriptor_of::<*mut u32>().info();
        assert_eq!(info.category, TagKind::RandomAccess);
        assert_eq!(info.path, PathKind::RawMut);
        assert_eq!(info.element, "u32");
        assert_eq!(info.offset, "isize");
        assert_eq!(info.reference, "&mut u32");
    }

    #[test]
    fn test_inspect_visits_every_field() {
        let mut fields = Vec::new();
        descriptor_of::<*const u8>().inspect(|name, _| fields.push(name));
        assert_eq!(fields, ["category", "element", "pointer", "reference", "offset"]);
    }

    #[test]
    fn test_display() {
        let text = descriptor_of::<*const u8>().info().to_string();
        assert!(text.contains("RandomAccess"));
        assert!(text.contains("raw const"));
    }
}
