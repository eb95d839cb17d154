//! nbtag is an owned, typed model of NBT data as found inside items of
//! *Minecraft: Java Edition* servers.
//!
//! * For the tag value itself see [`Tag`].
//! * For the containers see [`Compound`] and [`List`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For building trees with SNBT-like syntax see [`nbt!`].
//!
//! Translating these trees to and from a running server's own tag objects is
//! the job of the `nbtbridge` crate. This crate knows nothing about servers.
//!
//! # Textual form
//!
//! Every tag renders through [`Display`][`std::fmt::Display`] with the
//! suffix grammar servers use in their own debug output:
//!
//! ```
//! use nbtag::{ByteArray, Tag};
//!
//! assert_eq!(Tag::Byte(1).to_string(), "1b");
//! assert_eq!(Tag::Long(5).to_string(), "5l");
//! assert_eq!(Tag::Float(2.5).to_string(), "2.5f");
//! assert_eq!(Tag::Double(2.5).to_string(), "2.5");
//! assert_eq!(Tag::from(ByteArray::new(vec![1, 2])).to_string(), "[B;1,2]");
//! ```
//!
//! # Quick example
//!
//! ```
//! use nbtag::{nbt, Compound, List, Tag};
//!
//! let mut display = Compound::new();
//! display.insert("Name", "Excalibur");
//!
//! let mut lore = List::new();
//! lore.add_string("Forged in a lake");
//! lore.add_string("Slightly damp");
//! display.insert("Lore", lore);
//!
//! let mut root = Compound::new();
//! root.insert("display", display);
//! root.insert("Unbreakable", true);
//!
//! assert_eq!(root.get_compound("display").and_then(|d| d.get_str("Name")), Some("Excalibur"));
//! assert_eq!(root["Unbreakable"], Tag::Byte(1));
//!
//! let same = nbt!({
//!     "display": {
//!         "Name": "Excalibur",
//!         "Lore": ["Forged in a lake", "Slightly damp"],
//!     },
//!     "Unbreakable": true,
//! });
//! assert_eq!(Tag::Compound(root), same);
//! ```
//!
//! # Homogeneous lists
//!
//! The binary NBT format requires every element of a list to be the same
//! kind. [`List`] does not enforce this; a list mixing kinds is accepted and
//! kept as-is. Use [`List::is_homogeneous`] when that matters.

pub mod error;

mod arrays;
mod compound;
mod list;
mod tag;

#[macro_use]
mod macros;

pub use arrays::*;
pub use compound::Compound;
pub use list::List;
pub use tag::*;

#[cfg(test)]
mod test;

/// The kind of an NBT tag. This does not carry the value or the name of the
/// data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum TagKind {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, elements are not required to be the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TagKind {
    /// Every kind that can carry a value, in the order servers test for them:
    /// leaves first, then the two containers.
    pub const VALUES: [TagKind; 12] = [
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::String,
        TagKind::ByteArray,
        TagKind::IntArray,
        TagKind::LongArray,
        TagKind::List,
        TagKind::Compound,
    ];

    pub fn is_container(self) -> bool {
        matches!(self, TagKind::List | TagKind::Compound)
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            TagKind::ByteArray | TagKind::IntArray | TagKind::LongArray
        )
    }
}

impl TryFrom<u8> for TagKind {
    type Error = error::Error;

    fn try_from(value: u8) -> Result<Self, error::Error> {
        use TagKind::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(error::Error::invalid_kind(value)),
        })
    }
}

impl From<TagKind> for u8 {
    fn from(kind: TagKind) -> Self {
        kind as u8
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
