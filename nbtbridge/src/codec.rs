use std::sync::Arc;

use log::{debug, info};
use nbtag::{Compound, List, Tag, TagKind};

use crate::binding::{Bindings, LeafBinding, Payload};
use crate::error::Result;
use crate::host::{Host, HostObject, HostValue};
use crate::table::BindingTable;
use crate::{NbtRegistry, Release};

/// Converts between nbtag trees and the tag objects of one running server.
///
/// All class and member lookups happen in [`Codec::new`]. Conversions only
/// call the handles resolved there, so a `Codec` can be shared freely
/// between threads.
///
/// Kinds the running release has no class for (LongArray before 1.12) are
/// skipped in both directions: a list or compound holding one converts
/// without that child.
pub struct Codec {
    host: Arc<dyn Host>,
    release: Release,
    bindings: Bindings,
}

impl Codec {
    /// Detects the server release and binds to its tag classes.
    pub fn new(host: Arc<dyn Host>) -> Result<Codec> {
        let release = Release::detect(&host.server_package())?;
        Codec::with_table(host, &BindingTable::for_release(release))
    }

    /// Binds using an explicit table rather than the one for the detected
    /// release.
    pub fn with_table(host: Arc<dyn Host>, table: &BindingTable) -> Result<Codec> {
        let bindings = Bindings::discover(&*host, table)?;
        info!("bound NBT classes for {}", table.release);
        Ok(Codec {
            host,
            release: table.release,
            bindings,
        })
    }

    pub fn release(&self) -> Release {
        self.release
    }

    /// Whether values of `kind` survive conversion on this server.
    pub fn supports(&self, kind: TagKind) -> bool {
        let b = &self.bindings;
        match kind {
            TagKind::Byte => b.byte.is_some(),
            TagKind::Short => b.short.is_some(),
            TagKind::Int => b.int.is_some(),
            TagKind::Long => b.long.is_some(),
            TagKind::Float => b.float.is_some(),
            TagKind::Double => b.double.is_some(),
            TagKind::String => b.string.is_some(),
            TagKind::ByteArray => b.byte_array.is_some(),
            TagKind::IntArray => b.int_array.is_some(),
            TagKind::LongArray => b.long_array.is_some(),
            TagKind::List | TagKind::Compound => true,
            TagKind::End => false,
        }
    }

    /// Converts a host tag object into a tag. `None` if the object is not of
    /// any tag class the codec is bound to.
    pub fn to_tag(&self, obj: &HostObject) -> Result<Option<Tag>> {
        let host = &*self.host;
        let b = &self.bindings;

        // Leaves first. List and Compound are tested last.
        macro_rules! leaf {
            ($binding:expr, $variant:ident) => {
                if let Some(binding) = &$binding {
                    if binding.is(host, obj) {
                        return Ok(Some(Tag::$variant(binding.read(host, obj)?.into())));
                    }
                }
            };
        }
        leaf!(b.byte, Byte);
        leaf!(b.short, Short);
        leaf!(b.int, Int);
        leaf!(b.long, Long);
        leaf!(b.float, Float);
        leaf!(b.double, Double);
        leaf!(b.string, String);
        leaf!(b.byte_array, ByteArray);
        leaf!(b.int_array, IntArray);
        leaf!(b.long_array, LongArray);

        if b.list.is(host, obj) {
            return Ok(Some(Tag::List(self.to_list(obj)?)));
        }
        if b.compound.is(host, obj) {
            return Ok(Some(Tag::Compound(self.to_compound(obj)?)));
        }

        debug!("skipping host value of unbound type");
        Ok(None)
    }

    pub fn to_list(&self, obj: &HostObject) -> Result<List> {
        let elements = self.bindings.list.elements(&*self.host, obj)?;
        let mut list = List::with_capacity(elements.len());
        for element in &elements {
            if let Some(tag) = self.to_tag(element)? {
                list.push(tag);
            }
        }
        Ok(list)
    }

    pub fn to_compound(&self, obj: &HostObject) -> Result<Compound> {
        let mut compound = Compound::new();
        for (key, value) in self.bindings.compound.entries(&*self.host, obj)? {
            let key = match key {
                HostValue::String(key) => key,
                other => {
                    debug!("skipping compound entry with non-string key {:?}", other);
                    continue;
                }
            };
            if let Some(tag) = self.to_tag(&value)? {
                compound.insert(key, tag);
            }
        }
        Ok(compound)
    }

    /// Converts a tag into a new host tag object. `None` if the tag's kind is
    /// not bound on this server.
    pub fn from_tag(&self, tag: &Tag) -> Result<Option<HostObject>> {
        let b = &self.bindings;
        match tag {
            Tag::Byte(v) => self.leaf(&b.byte, *v),
            Tag::Short(v) => self.leaf(&b.short, *v),
            Tag::Int(v) => self.leaf(&b.int, *v),
            Tag::Long(v) => self.leaf(&b.long, *v),
            Tag::Float(v) => self.leaf(&b.float, *v),
            Tag::Double(v) => self.leaf(&b.double, *v),
            Tag::String(v) => self.leaf(&b.string, v.clone()),
            Tag::ByteArray(v) => self.leaf(&b.byte_array, v.to_vec()),
            Tag::IntArray(v) => self.leaf(&b.int_array, v.to_vec()),
            Tag::LongArray(v) => self.leaf(&b.long_array, v.to_vec()),
            Tag::List(v) => self.from_list(v).map(Some),
            Tag::Compound(v) => self.from_compound(v).map(Some),
        }
    }

    pub fn from_list(&self, list: &List) -> Result<HostObject> {
        let host = &*self.host;
        let obj = self.bindings.list.create(host)?;
        for tag in list.iter() {
            match self.from_tag(tag)? {
                Some(element) => self.bindings.list.add(host, &obj, element)?,
                None => debug!("dropping {} list element, kind is not bound", tag.kind()),
            }
        }
        Ok(obj)
    }

    pub fn from_compound(&self, compound: &Compound) -> Result<HostObject> {
        let host = &*self.host;
        let obj = self.bindings.compound.create(host)?;
        for (key, tag) in compound.iter() {
            match self.from_tag(tag)? {
                Some(value) => self.bindings.compound.set(host, &obj, key, value)?,
                None => debug!("dropping {:?}, {} is not bound", key, tag.kind()),
            }
        }
        Ok(obj)
    }

    fn leaf<P: Payload>(&self, binding: &Option<LeafBinding<P>>, payload: P) -> Result<Option<HostObject>> {
        match binding {
            Some(binding) => binding.make(&*self.host, payload).map(Some),
            None => Ok(None),
        }
    }
}

impl NbtRegistry for Codec {
    fn get_tag(&self, item: &HostObject) -> Result<Option<Compound>> {
        let host = &*self.host;
        let internal = self.bindings.item.to_internal(host, item)?;
        match self.bindings.item.get_tag(host, &internal)? {
            Some(tag) => self.to_compound(&tag).map(Some),
            None => Ok(None),
        }
    }

    fn apply_tag(&self, item: &HostObject, tag: Option<&Compound>) -> Result<HostObject> {
        let host = &*self.host;
        let internal = self.bindings.item.to_internal(host, item)?;
        let root = tag.map(|c| self.from_compound(c)).transpose()?;
        self.bindings.item.set_tag(host, &internal, root)?;
        self.bindings.item.to_external(host, &internal)
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("release", &self.release)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

