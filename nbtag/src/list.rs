use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::{ByteArray, Compound, IntArray, LongArray, Tag, TagKind};

/// A list tag: an ordered sequence of tags.
///
/// Servers only read and write lists whose elements are all the same kind,
/// but this type accepts any mix. Nothing is validated on insertion, so a
/// caller building data for a server is responsible for keeping a list
/// homogeneous. [`List::is_homogeneous`] can check it.
///
/// Read access (`len`, `get`, `iter`, indexing, ...) comes from the slice the
/// list dereferences to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Tag>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, tag: impl Into<Tag>) {
        self.items.push(tag.into())
    }

    pub fn pop(&mut self) -> Option<Tag> {
        self.items.pop()
    }

    /// Inserts at `index`, shifting later elements. Panics if `index > len`.
    pub fn insert(&mut self, index: usize, tag: impl Into<Tag>) {
        self.items.insert(index, tag.into())
    }

    /// Replaces the element at `index`, returning the old one. Panics if out
    /// of bounds.
    pub fn set(&mut self, index: usize, tag: impl Into<Tag>) -> Tag {
        std::mem::replace(&mut self.items[index], tag.into())
    }

    /// Removes the element at `index`. Panics if out of bounds.
    pub fn remove(&mut self, index: usize) -> Tag {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear()
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Tag) -> bool,
    {
        self.items.retain(f)
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.items
    }

    pub fn add_byte(&mut self, v: i8) {
        self.items.push(Tag::Byte(v))
    }

    pub fn add_short(&mut self, v: i16) {
        self.items.push(Tag::Short(v))
    }

    pub fn add_int(&mut self, v: i32) {
        self.items.push(Tag::Int(v))
    }

    pub fn add_long(&mut self, v: i64) {
        self.items.push(Tag::Long(v))
    }

    pub fn add_float(&mut self, v: f32) {
        self.items.push(Tag::Float(v))
    }

    pub fn add_double(&mut self, v: f64) {
        self.items.push(Tag::Double(v))
    }

    pub fn add_string(&mut self, v: impl Into<String>) {
        self.items.push(Tag::String(v.into()))
    }

    pub fn add_byte_array(&mut self, v: impl Into<ByteArray>) {
        self.items.push(Tag::ByteArray(v.into()))
    }

    pub fn add_int_array(&mut self, v: impl Into<IntArray>) {
        self.items.push(Tag::IntArray(v.into()))
    }

    pub fn add_long_array(&mut self, v: impl Into<LongArray>) {
        self.items.push(Tag::LongArray(v.into()))
    }

    pub fn add_list(&mut self, v: impl Into<List>) {
        self.items.push(Tag::List(v.into()))
    }

    pub fn add_compound(&mut self, v: impl Into<Compound>) {
        self.items.push(Tag::Compound(v.into()))
    }

    /// The kind shared by every element, or `None` if the list is empty or
    /// mixes kinds.
    pub fn element_kind(&self) -> Option<TagKind> {
        let first = self.items.first()?.kind();
        self.items
            .iter()
            .all(|t| t.kind() == first)
            .then_some(first)
    }

    /// True if every element is the same kind. An empty list is homogeneous.
    pub fn is_homogeneous(&self) -> bool {
        self.items.is_empty() || self.element_kind().is_some()
    }
}

impl Deref for List {
    type Target = [Tag];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for List {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, tag) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", tag)?;
        }
        f.write_str("]")
    }
}

impl From<Vec<Tag>> for List {
    fn from(items: Vec<Tag>) -> Self {
        Self { items }
    }
}

impl<T: Into<Tag>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Tag>> Extend<T> for List {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into))
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
