use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{ByteArray, IntArray, List, LongArray, Tag};

#[cfg(not(feature = "preserve-order"))]
type Map = std::collections::HashMap<String, Tag>;

#[cfg(feature = "preserve-order")]
type Map = indexmap::IndexMap<String, Tag>;

/// A compound tag: a mapping from unique string keys to tags.
///
/// Entry order carries no meaning. With the `preserve-order` feature the
/// compound remembers insertion order and iterates and renders in it;
/// otherwise iteration order is unspecified and the textual form sorts keys
/// so that it stays deterministic.
///
/// There is no null value. A key is either present with a tag or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Compound {
    map: Map,
}

macro_rules! typed_get {
    (ref $name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&self, key: &str) -> Option<&$ty> {
            match self.map.get(key) {
                Some(Tag::$variant(v)) => Some(v),
                _ => None,
            }
        }
    };
    (mut $name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&mut self, key: &str) -> Option<&mut $ty> {
            match self.map.get_mut(key) {
                Some(Tag::$variant(v)) => Some(v),
                _ => None,
            }
        }
    };
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&self, key: &str) -> Option<$ty> {
            match self.map.get(key) {
                Some(Tag::$variant(v)) => Some(*v),
                _ => None,
            }
        }
    };
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.map.get_mut(key)
    }

    /// Inserts a tag, returning the tag previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> Option<Tag> {
        self.map.insert(key.into(), value.into())
    }

    /// Inserts a tag only if `key` is absent. Returns the tag now stored.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> &mut Tag {
        self.map.entry(key.into()).or_insert_with(|| value.into())
    }

    /// Returns the tag under `key`, inserting the result of `f` first if it
    /// is absent.
    pub fn get_or_insert_with<F>(&mut self, key: impl Into<String>, f: F) -> &mut Tag
    where
        F: FnOnce() -> Tag,
    {
        self.map.entry(key.into()).or_insert_with(f)
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        #[cfg(feature = "preserve-order")]
        {
            self.map.shift_remove(key)
        }
        #[cfg(not(feature = "preserve-order"))]
        {
            self.map.remove(key)
        }
    }

    /// Combines `value` with the tag already under `key`.
    ///
    /// If the key is absent, `value` is stored as-is. Otherwise `f` receives
    /// the old and the new tag; returning `None` removes the key. The tag
    /// stored afterwards, if any, is returned.
    pub fn merge<F>(&mut self, key: impl Into<String>, value: impl Into<Tag>, f: F) -> Option<&Tag>
    where
        F: FnOnce(Tag, Tag) -> Option<Tag>,
    {
        let key = key.into();
        let value = value.into();
        let merged = match self.map.get_mut(&key) {
            // The slot keeps its position, so insertion order survives.
            Some(slot) => f(std::mem::replace(slot, Tag::Byte(0)), value),
            None => Some(value),
        };
        match merged {
            Some(tag) => {
                self.map.insert(key.clone(), tag);
                self.map.get(&key)
            }
            None => {
                self.remove(&key);
                None
            }
        }
    }

    /// Copies every entry of `other` into this compound, replacing entries
    /// with the same key.
    pub fn put_all(&mut self, other: &Compound) {
        self.map
            .extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&String, &mut Tag) -> bool,
    {
        self.map.retain(f)
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> + '_ {
        self.map.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.map.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Tag> + '_ {
        self.map.values_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Tag)> + '_ {
        self.map.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Tag)> + '_ {
        self.map.iter_mut()
    }

    typed_get!(get_byte, Byte, i8);
    typed_get!(get_short, Short, i16);
    typed_get!(get_int, Int, i32);
    typed_get!(get_long, Long, i64);
    typed_get!(get_float, Float, f32);
    typed_get!(get_double, Double, f64);
    typed_get!(ref get_byte_array, ByteArray, ByteArray);
    typed_get!(ref get_int_array, IntArray, IntArray);
    typed_get!(ref get_long_array, LongArray, LongArray);
    typed_get!(ref get_list, List, List);
    typed_get!(ref get_compound, Compound, Compound);
    typed_get!(mut get_list_mut, List, List);
    typed_get!(mut get_compound_mut, Compound, Compound);

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(Tag::as_str)
    }

    /// Reads a Byte tag as a boolean, the way servers store flags.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_byte(key).map(|b| b != 0)
    }

    /// Entries sorted by key, used for the textual form and for hashing.
    fn sorted(&self) -> Vec<(&String, &Tag)> {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equality ignores order, so the hash must too.
        self.sorted().hash(state)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "preserve-order")]
        let entries: Vec<_> = self.map.iter().collect();
        #[cfg(not(feature = "preserve-order"))]
        let entries = self.sorted();

        f.write_str("{")?;
        for (i, (k, v)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        f.write_str("}")
    }
}

impl Index<&str> for Compound {
    type Output = Tag;

    /// Panics if the key is not present, like `HashMap`.
    fn index(&self, key: &str) -> &Tag {
        self.map
            .get(key)
            .unwrap_or_else(|| panic!("no entry found for key {:?}", key))
    }
}

impl IndexMut<&str> for Compound {
    fn index_mut(&mut self, key: &str) -> &mut Tag {
        self.map
            .get_mut(key)
            .unwrap_or_else(|| panic!("no entry found for key {:?}", key))
    }
}

impl<K: Into<String>, V: Into<Tag>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.map
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<K: Into<String>, V: Into<Tag>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut compound = Compound::new();
        compound.extend(iter);
        compound
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = <Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = <&'a Map as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl From<std::collections::HashMap<String, Tag>> for Compound {
    fn from(map: std::collections::HashMap<String, Tag>) -> Self {
        map.into_iter().collect()
    }
}
