mod de;
mod display;
mod ser;

use std::hash::{Hash, Hasher};

use crate::{error::Error, ByteArray, Compound, IntArray, List, LongArray, TagKind};

/// Tag is a complete NBT value. It owns its data, and compounds and lists
/// hold further tags recursively.
///
/// Two tags are equal only if they are the same variant and hold equal
/// payloads. Floating point payloads are compared by their bit pattern, so
/// `Tag::Float(f32::NAN) == Tag::Float(f32::NAN)` while
/// `Tag::Double(0.0) != Tag::Double(-0.0)`. This keeps [`Eq`] and [`Hash`]
/// consistent, which lets tags be used as map keys.
///
/// ```
/// # use nbtag::{Compound, Tag};
/// let mut compound = Compound::new();
/// compound.insert("DataVersion", 2730);
/// match compound["DataVersion"] {
///     Tag::Int(ver) => println!("Version: {}", ver),
///     _ => {},
/// }
/// println!("{}", compound);
/// ```
#[derive(Debug, Clone)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    List(List),
    Compound(Compound),
}

impl Tag {
    /// The kind of this tag.
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::String(_) => TagKind::String,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v as i64),
            Tag::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Tag::Byte(v) => Some(v as u64),
            Tag::Short(v) => Some(v as u64),
            Tag::Int(v) => Some(v as u64),
            Tag::Long(v) => Some(v as u64),
            Tag::Float(v) => Some(v as u64),
            Tag::Double(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tag::Byte(a), Tag::Byte(b)) => a == b,
            (Tag::Short(a), Tag::Short(b)) => a == b,
            (Tag::Int(a), Tag::Int(b)) => a == b,
            (Tag::Long(a), Tag::Long(b)) => a == b,
            (Tag::Float(a), Tag::Float(b)) => a.to_bits() == b.to_bits(),
            (Tag::Double(a), Tag::Double(b)) => a.to_bits() == b.to_bits(),
            (Tag::String(a), Tag::String(b)) => a == b,
            (Tag::ByteArray(a), Tag::ByteArray(b)) => a == b,
            (Tag::IntArray(a), Tag::IntArray(b)) => a == b,
            (Tag::LongArray(a), Tag::LongArray(b)) => a == b,
            (Tag::List(a), Tag::List(b)) => a == b,
            (Tag::Compound(a), Tag::Compound(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Tag::Byte(v) => v.hash(state),
            Tag::Short(v) => v.hash(state),
            Tag::Int(v) => v.hash(state),
            Tag::Long(v) => v.hash(state),
            Tag::Float(v) => v.to_bits().hash(state),
            Tag::Double(v) => v.to_bits().hash(state),
            Tag::String(v) => v.hash(state),
            Tag::ByteArray(v) => v.hash(state),
            Tag::IntArray(v) => v.hash(state),
            Tag::LongArray(v) => v.hash(state),
            Tag::List(v) => v.hash(state),
            Tag::Compound(v) => v.hash(state),
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Tag {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
impl From<&bool> for Tag {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

impl From<Vec<i8>> for Tag {
    fn from(val: Vec<i8>) -> Self {
        Self::ByteArray(ByteArray::new(val))
    }
}

impl From<Vec<i32>> for Tag {
    fn from(val: Vec<i32>) -> Self {
        Self::IntArray(IntArray::new(val))
    }
}

impl From<Vec<i64>> for Tag {
    fn from(val: Vec<i64>) -> Self {
        Self::LongArray(LongArray::new(val))
    }
}

impl From<Vec<Tag>> for Tag {
    fn from(val: Vec<Tag>) -> Self {
        Self::List(List::from(val))
    }
}

// ------------- TryFrom<Tag> impls -------------

macro_rules! try_from {
    ($type:ty, $variant:ident) => {
        impl TryFrom<Tag> for $type {
            type Error = Error;

            fn try_from(tag: Tag) -> Result<Self, Error> {
                match tag {
                    Tag::$variant(v) => Ok(v),
                    other => Err(Error::mismatched_kind(TagKind::$variant, other.kind())),
                }
            }
        }
    };
}
try_from!(i8, Byte);
try_from!(i16, Short);
try_from!(i32, Int);
try_from!(i64, Long);
try_from!(f32, Float);
try_from!(f64, Double);
try_from!(String, String);
try_from!(ByteArray, ByteArray);
try_from!(IntArray, IntArray);
try_from!(LongArray, LongArray);
try_from!(List, List);
try_from!(Compound, Compound);

// ------------- PartialEq with plain values -------------

fn eq_i64(tag: &Tag, other: i64) -> bool {
    tag.as_i64().map_or(false, |i| i == other)
}

fn eq_u64(tag: &Tag, other: u64) -> bool {
    tag.as_u64().map_or(false, |i| i == other)
}

fn eq_f64(tag: &Tag, other: f64) -> bool {
    tag.as_f64().map_or(false, |i| i == other)
}

fn eq_str(tag: &Tag, other: &str) -> bool {
    tag.as_str().map_or(false, |i| i == other)
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        eq_str(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<Tag> for str {
    fn eq(&self, other: &Tag) -> bool {
        eq_str(other, self)
    }
}

impl<'a> PartialEq<Tag> for &'a str {
    fn eq(&self, other: &Tag) -> bool {
        eq_str(other, self)
    }
}

impl PartialEq<String> for Tag {
    fn eq(&self, other: &String) -> bool {
        eq_str(self, other.as_str())
    }
}

impl PartialEq<Tag> for String {
    fn eq(&self, other: &Tag) -> bool {
        eq_str(other, self.as_str())
    }
}

macro_rules! partialeq_numeric {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Tag {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<Tag> for $ty {
                fn eq(&self, other: &Tag) -> bool {
                    $eq(other, *self as _)
                }
            }

            impl<'a> PartialEq<$ty> for &'a Tag {
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }
        )*)*
    }
}

partialeq_numeric! {
    eq_i64[i8 i16 i32 i64 isize]
    eq_u64[u8 u16 u32 u64 usize]
    eq_f64[f32 f64]
}
