//! An in-memory server for tests, benchmarks and tools.
//!
//! [`SimHost`] presents the tag and item classes of any supported release
//! under the names and signatures that release really uses, and behaves like
//! them: tags built through it can be read back, lists and compounds hold
//! other tags, and items carry a tag root that is copied whenever the item
//! crosses between its plugin-facing and internal form.
//!
//! ```
//! use nbtbridge::{sim::SimHost, Host, Release};
//!
//! let host = SimHost::new(Release::v1_17_R1);
//! assert_eq!(host.server_package(), "org.bukkit.craftbukkit.v1_17_R1");
//! assert!(host.find_class("net.minecraft.nbt.NBTTagCompound").is_some());
//! assert!(host.find_class("net.minecraft.server.v1_17_R1.NBTTagCompound").is_none());
//! ```
mod layout;
mod object;

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use nbtag::TagKind;

use crate::host::{ClassId, Host, HostFault, HostObject, HostValue, JType, MemberId};
use crate::Release;

use self::layout::{Layout, Member, Op, Signature};
use self::object::{deep_copy, lock, Body, SimObject};

/// A simulated server of one release.
#[derive(Debug)]
pub struct SimHost {
    release: Release,
    layout: Layout,
    hidden: HashSet<String>,
    faulty: HashSet<TagKind>,
    lookups: AtomicUsize,
}

impl SimHost {
    pub fn new(release: Release) -> SimHost {
        SimHost {
            release,
            layout: layout::layout(release),
            hidden: HashSet::new(),
            faulty: HashSet::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Hides a class, as if the release did not ship it.
    pub fn without_class(mut self, path: &str) -> SimHost {
        self.hidden.insert(path.to_owned());
        self
    }

    /// Makes constructing tags of `kind` raise inside the host.
    pub fn fail_on(mut self, kind: TagKind) -> SimHost {
        self.faulty.insert(kind);
        self
    }

    pub fn release(&self) -> Release {
        self.release
    }

    /// A new plugin-facing item without tag data.
    pub fn item(&self, material: &str, count: u8) -> HostObject {
        SimObject::item(self.layout.external_item, material.to_owned(), count, None)
    }

    /// Material and stack size of an item made by this host.
    pub fn describe_item(&self, item: &HostObject) -> Option<(String, u8)> {
        match SimObject::downcast(item).map(|sim| &sim.body) {
            Some(Body::Item(item)) => Some((item.material.clone(), item.count)),
            _ => None,
        }
    }

    /// Adds an entry to a compound bypassing its typed setter, so that the
    /// key can be something other than a string.
    pub fn insert_raw(&self, compound: &HostObject, key: HostValue, value: HostObject) -> bool {
        match SimObject::downcast(compound).map(|sim| &sim.body) {
            Some(Body::Compound(entries)) => {
                lock(entries).push((key, value));
                true
            }
            _ => false,
        }
    }

    /// How many class and member lookups have been made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    fn count_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    fn visible(&self, class: ClassId) -> bool {
        self.layout
            .classes
            .get(class.0 as usize)
            .map_or(false, |c| !self.hidden.contains(&c.path))
    }

    fn find_member<F>(&self, class: ClassId, matches: F) -> Option<MemberId>
    where
        F: Fn(&Signature) -> bool,
    {
        self.count_lookup();
        if !self.visible(class) {
            return None;
        }
        self.layout
            .members
            .iter()
            .position(|m| m.class == class && matches(&m.signature))
            .map(|i| MemberId(i as u32))
    }

    fn member(&self, id: MemberId) -> Result<&Member, HostFault> {
        self.layout
            .members
            .get(id.0 as usize)
            .ok_or_else(|| HostFault(format!("no such member #{}", id.0)))
    }

    fn is_a(&self, class: ClassId, mut actual: ClassId) -> bool {
        loop {
            if actual == class {
                return true;
            }
            match self.layout.classes.get(actual.0 as usize).and_then(|c| c.parent) {
                Some(parent) => actual = parent,
                None => return false,
            }
        }
    }

    fn conforms(&self, ty: &JType, value: &HostValue) -> bool {
        match (ty, value) {
            (JType::Byte, HostValue::Byte(_))
            | (JType::Short, HostValue::Short(_))
            | (JType::Int, HostValue::Int(_))
            | (JType::Long, HostValue::Long(_))
            | (JType::Float, HostValue::Float(_))
            | (JType::Double, HostValue::Double(_))
            | (JType::String, HostValue::String(_))
            | (JType::ByteArray, HostValue::ByteArray(_))
            | (JType::IntArray, HostValue::IntArray(_))
            | (JType::LongArray, HostValue::LongArray(_))
            | (JType::Object(_), HostValue::Null) => true,
            (JType::Object(class), HostValue::Object(obj)) => self.is_instance(*class, obj),
            _ => false,
        }
    }

    fn run(
        &self,
        member: &Member,
        receiver: Option<&HostObject>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, HostFault> {
        let params: &[JType] = match &member.signature {
            Signature::Constructor(params) | Signature::Method { params, .. } => params,
            Signature::Field { .. } => &[],
        };
        if params.len() != args.len()
            || !params.iter().zip(&args).all(|(ty, arg)| self.conforms(ty, arg))
        {
            return Err(HostFault("IllegalArgumentException: argument type mismatch".to_owned()));
        }

        let this = match receiver {
            Some(obj) => {
                if !self.is_instance(member.class, obj) {
                    return Err(HostFault("IllegalArgumentException: object is not an instance of declaring class".to_owned()));
                }
                SimObject::downcast(obj)
            }
            None => None,
        };
        let body = this.map(|sim| &sim.body);
        let mut args = args.into_iter();
        let class = member.class;

        match (member.op, body) {
            (Op::NewLeaf(kind), _) => {
                self.check_fault(kind)?;
                let value = args.next().unwrap_or(HostValue::Null);
                Ok(HostValue::Object(SimObject::new(class, Body::Leaf(value))))
            }
            (Op::NewList, _) => {
                self.check_fault(TagKind::List)?;
                Ok(HostValue::Object(SimObject::new(class, Body::List(Default::default()))))
            }
            (Op::NewCompound, _) => {
                self.check_fault(TagKind::Compound)?;
                Ok(HostValue::Object(SimObject::new(class, Body::Compound(Default::default()))))
            }
            (Op::ReadLeaf, Some(Body::Leaf(value))) => Ok(value.clone()),
            (Op::ListElements, Some(Body::List(items))) => Ok(HostValue::List(lock(items).clone())),
            (Op::ListAdd, Some(Body::List(items))) => {
                if let Some(HostValue::Object(element)) = args.next() {
                    lock(items).push(element);
                }
                Ok(HostValue::Void)
            }
            (Op::CompoundEntries, Some(Body::Compound(entries))) => {
                Ok(HostValue::Map(lock(entries).clone()))
            }
            (Op::CompoundSet { returns_previous }, Some(Body::Compound(entries))) => {
                let (key, value) = match (args.next(), args.next()) {
                    (Some(HostValue::String(key)), Some(HostValue::Object(value))) => (key, value),
                    _ => return Err(HostFault("NullPointerException".to_owned())),
                };
                let mut entries = lock(entries);
                let previous = match entries
                    .iter_mut()
                    .find(|(k, _)| matches!(k, HostValue::String(k) if *k == key))
                {
                    Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
                    None => {
                        entries.push((HostValue::String(key), value));
                        None
                    }
                };
                Ok(match (returns_previous, previous) {
                    (false, _) => HostValue::Void,
                    (true, Some(previous)) => HostValue::Object(previous),
                    (true, None) => HostValue::Null,
                })
            }
            (Op::ToInternal, _) => self.copy_item(args.next(), self.layout.internal_item),
            (Op::ToExternal, _) => self.copy_item(args.next(), self.layout.external_item),
            (Op::GetTag, Some(Body::Item(item))) => {
                Ok(lock(&item.tag).clone().map_or(HostValue::Null, HostValue::Object))
            }
            (Op::SetTag, Some(Body::Item(item))) => {
                *lock(&item.tag) = args.next().and_then(HostValue::into_object);
                Ok(HostValue::Void)
            }
            _ => Err(HostFault("IllegalStateException: member not callable on this object".to_owned())),
        }
    }

    fn check_fault(&self, kind: TagKind) -> Result<(), HostFault> {
        if self.faulty.contains(&kind) {
            Err(HostFault(format!("RuntimeException: {} construction failed", kind)))
        } else {
            Ok(())
        }
    }

    fn copy_item(&self, item: Option<HostValue>, class: ClassId) -> Result<HostValue, HostFault> {
        let item = item.and_then(HostValue::into_object);
        let body = item.as_ref().and_then(SimObject::downcast).map(|sim| &sim.body);
        match body {
            Some(Body::Item(item)) => {
                let tag = lock(&item.tag).as_ref().map(deep_copy);
                Ok(HostValue::Object(SimObject::item(
                    class,
                    item.material.clone(),
                    item.count,
                    tag,
                )))
            }
            _ => Ok(HostValue::Null),
        }
    }
}

impl Host for SimHost {
    fn server_package(&self) -> String {
        format!("org.bukkit.craftbukkit.{}", self.release)
    }

    fn find_class(&self, path: &str) -> Option<ClassId> {
        self.count_lookup();
        if self.hidden.contains(path) {
            return None;
        }
        self.layout
            .classes
            .iter()
            .position(|c| c.path == path)
            .map(|i| ClassId(i as u32))
    }

    fn find_constructor(&self, class: ClassId, params: &[JType]) -> Option<MemberId> {
        self.find_member(class, |sig| matches!(sig, Signature::Constructor(p) if p == params))
    }

    fn find_method(
        &self,
        class: ClassId,
        name: &str,
        params: &[JType],
        ret: &JType,
        is_static: bool,
    ) -> Option<MemberId> {
        self.find_member(class, |sig| match sig {
            Signature::Method {
                name: n,
                params: p,
                ret: r,
                is_static: s,
            } => *n == name && p == params && r == ret && *s == is_static,
            _ => false,
        })
    }

    fn find_field(&self, class: ClassId, name: &str, ty: &JType) -> Option<MemberId> {
        self.find_member(class, |sig| match sig {
            Signature::Field { name: n, ty: t } => *n == name && t == ty,
            _ => false,
        })
    }

    fn is_instance(&self, class: ClassId, obj: &HostObject) -> bool {
        SimObject::downcast(obj).map_or(false, |sim| self.is_a(class, sim.class))
    }

    fn new_object(&self, ctor: MemberId, args: Vec<HostValue>) -> Result<HostObject, HostFault> {
        let member = self.member(ctor)?;
        if !matches!(member.signature, Signature::Constructor(_)) {
            return Err(HostFault(format!("member #{} is not a constructor", ctor.0)));
        }
        match self.run(member, None, args)? {
            HostValue::Object(obj) => Ok(obj),
            _ => Err(HostFault("constructor produced no object".to_owned())),
        }
    }

    fn invoke(
        &self,
        method: MemberId,
        receiver: Option<&HostObject>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, HostFault> {
        let member = self.member(method)?;
        match member.signature {
            Signature::Method { is_static, .. } if is_static == receiver.is_none() => {
                self.run(member, receiver, args)
            }
            Signature::Method { .. } => Err(HostFault(format!(
                "member #{} called with the wrong receiver",
                method.0
            ))),
            _ => Err(HostFault(format!("member #{} is not a method", method.0))),
        }
    }

    fn get_field(&self, field: MemberId, obj: &HostObject) -> Result<HostValue, HostFault> {
        let member = self.member(field)?;
        match member.signature {
            Signature::Field { .. } => self.run(member, Some(obj), vec![]),
            _ => Err(HostFault(format!("member #{} is not a field", field.0))),
        }
    }
}
