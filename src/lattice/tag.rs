//! The five capability tags and their value-level partial order.

use core::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Value-level name of a capability tag.
///
/// Discriminants index [`TagKind::IS_A`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagKind {
    ReadOnce = 0,
    WriteOnce = 1,
    Forward = 2,
    Bidirectional = 3,
    RandomAccess = 4,
}

impl TagKind {
    /// Every tag, weakest read tier first, `WriteOnce` second.
    pub const ALL: [TagKind; 5] = [
        TagKind::ReadOnce,
        TagKind::WriteOnce,
        TagKind::Forward,
        TagKind::Bidirectional,
        TagKind::RandomAccess,
    ];

    /// `IS_A[richer][weaker]`: reflexive, transitive, never extended.
    ///
    /// Columns: ReadOnce, WriteOnce, Forward, Bidirectional, RandomAccess.
    pub const IS_A: [[bool; 5]; 5] = [
        [true, false, false, false, false],
        [false, true, false, false, false],
        [true, false, true, false, false],
        [true, false, true, true, false],
        [true, false, true, true, true],
    ];

    /// Whether `self` can stand in wherever `weaker` is expected.
    #[inline]
    pub const fn is_a(self, weaker: TagKind) -> bool {
        Self::IS_A[self as usize][weaker as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            TagKind::ReadOnce => "ReadOnce",
            TagKind::WriteOnce => "WriteOnce",
            TagKind::Forward => "Forward",
            TagKind::Bidirectional => "Bidirectional",
            TagKind::RandomAccess => "RandomAccess",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cursor can be read once and advanced (single pass).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOnce;

/// Cursor can be written once and advanced (single pass).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WriteOnce;

/// Cursor can be re-read and advanced repeatedly (multi-pass).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// `Forward`, plus stepping backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// `Bidirectional`, plus jumping by arbitrary offset and comparing positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

/// A capability tag.
///
/// Sealed: the set of tags is closed. Every tag answers the type-level
/// [`IsA`](super::IsA) query for each of the five tags, so generic code can
/// ask `<C as IsA<Forward>>::Out` about any `C: Tag` without extra bounds.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a capability tag",
    note = "capability tags are ReadOnce, WriteOnce, Forward, Bidirectional and RandomAccess"
)]
pub trait Tag:
    sealed::Sealed
    + Copy
    + Default
    + fmt::Debug
    + Eq
    + core::hash::Hash
    + Send
    + Sync
    + 'static
    + super::IsA<ReadOnce>
    + super::IsA<WriteOnce>
    + super::IsA<Forward>
    + super::IsA<Bidirectional>
    + super::IsA<RandomAccess>
{
    const KIND: TagKind;
}

macro_rules! impl_tag {
    ($($tag:ident),+ $(,)?) => {
        $(
            impl sealed::Sealed for $tag {}
            impl Tag for $tag {
                const KIND: TagKind = TagKind::$tag;
            }
        )+
    };
}

impl_tag!(ReadOnce, WriteOnce, Forward, Bidirectional, RandomAccess);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_reflexive() {
        for k in TagKind::ALL {
            assert!(k.is_a(k), "{k} must be-a itself");
        }
    }

    #[test]
    fn test_table_is_transitive() {
        for a in TagKind::ALL {
            for b in TagKind::ALL {
                for c in TagKind::ALL {
                    if a.is_a(b) && b.is_a(c) {
                        assert!(a.is_a(c), "{a} -> {b} -> {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_write_once_is_isolated() {
        for k in TagKind::ALL {
            if k != TagKind::WriteOnce {
                assert!(!k.is_a(TagKind::WriteOnce));
                assert!(!TagKind::WriteOnce.is_a(k));
            }
        }
    }

    #[test]
    fn test_kind_matches_marker() {
        assert_eq!(RandomAccess::KIND, TagKind::RandomAccess);
        assert_eq!(WriteOnce::KIND.name(), "WriteOnce");
    }
}
