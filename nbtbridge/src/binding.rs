//! Typed handles to the host's tag classes, resolved once per process.
//!
//! Discovery walks a [`BindingTable`] and turns every row into handles whose
//! payload type is fixed at compile time. After that the codec never touches a
//! class or member name again.
use std::marker::PhantomData;

use log::{debug, warn};
use nbtag::TagKind;

use crate::error::{Error, Result};
use crate::host::{ClassId, Host, HostObject, HostValue, JType, MemberId};
use crate::table::{Access, BindingTable, Construct, LeafRow};

/// A Rust type that travels to and from the host as a tag payload.
pub(crate) trait Payload: Sized {
    const JTYPE: JType;

    fn into_host(self) -> HostValue;
    fn from_host(value: HostValue) -> Option<Self>;
}

macro_rules! payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Payload for $ty {
                const JTYPE: JType = JType::$variant;

                fn into_host(self) -> HostValue {
                    HostValue::$variant(self)
                }

                fn from_host(value: HostValue) -> Option<Self> {
                    match value {
                        HostValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

payload! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Vec<i8> => ByteArray,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

/// A resolved way of reading a value off a host object.
#[derive(Debug, Clone)]
pub(crate) struct Accessor {
    member: MemberId,
    access: Access,
    /// `Class.member`, for error messages.
    name: String,
}

impl Accessor {
    fn resolve(host: &dyn Host, class: ClassId, path: &str, access: Access, ty: JType) -> Result<Self> {
        let member = match access {
            Access::Field(name) => host.find_field(class, name, &ty),
            Access::Method(name) => host.find_method(class, name, &[], &ty, false),
        };
        let name = format!("{}.{}", path, access.name());
        match member {
            Some(member) => Ok(Accessor {
                member,
                access,
                name,
            }),
            None => Err(Error::missing_member(path, format!("{}:{}", access.name(), ty))),
        }
    }

    pub(crate) fn read(&self, host: &dyn Host, obj: &HostObject) -> Result<HostValue> {
        let value = match self.access {
            Access::Field(_) => host.get_field(self.member, obj),
            Access::Method(_) => host.invoke(self.member, Some(obj), vec![]),
        };
        value.map_err(|fault| Error::fault(format_args!("reading {}", self.name), fault))
    }
}

/// The class, constructor and accessor of one leaf tag kind.
#[derive(Debug, Clone)]
pub(crate) struct LeafBinding<P> {
    class: ClassId,
    path: String,
    make: MemberId,
    construct: Construct,
    read: Accessor,
    payload: PhantomData<fn() -> P>,
}

impl<P: Payload> LeafBinding<P> {
    /// Resolves a row. An optional row whose class does not exist yields
    /// `None`; anything else missing is an error.
    fn resolve(host: &dyn Host, row: &LeafRow) -> Result<Option<Self>> {
        let class = match host.find_class(&row.class) {
            Some(class) => class,
            None if row.optional => {
                warn!("{} not present, {} tags will be skipped", row.class, row.kind);
                return Ok(None);
            }
            None => return Err(Error::missing_class(&row.class)),
        };

        let make = match row.construct {
            Construct::New => host.find_constructor(class, &[P::JTYPE]),
            Construct::Factory(name) => {
                host.find_method(class, name, &[P::JTYPE], &JType::Object(class), true)
            }
        };
        let make = make.ok_or_else(|| {
            let name = match row.construct {
                Construct::New => "<init>",
                Construct::Factory(name) => name,
            };
            Error::missing_member(&row.class, format!("{}({})", name, P::JTYPE))
        })?;

        let read = Accessor::resolve(host, class, &row.class, row.access, P::JTYPE)?;
        debug!("bound {} tags to {}", row.kind, row.class);

        Ok(Some(LeafBinding {
            class,
            path: row.class.clone(),
            make,
            construct: row.construct,
            read,
            payload: PhantomData,
        }))
    }

    pub(crate) fn is(&self, host: &dyn Host, obj: &HostObject) -> bool {
        host.is_instance(self.class, obj)
    }

    pub(crate) fn make(&self, host: &dyn Host, payload: P) -> Result<HostObject> {
        let what = || format!("constructing {}", self.path);
        match self.construct {
            Construct::New => host
                .new_object(self.make, vec![payload.into_host()])
                .map_err(|fault| Error::fault(what(), fault)),
            Construct::Factory(_) => host
                .invoke(self.make, None, vec![payload.into_host()])
                .map_err(|fault| Error::fault(what(), fault))?
                .into_object()
                .ok_or_else(|| Error::unexpected(what(), "an object")),
        }
    }

    pub(crate) fn read(&self, host: &dyn Host, obj: &HostObject) -> Result<P> {
        let value = self.read.read(host, obj)?;
        P::from_host(value).ok_or_else(|| Error::unexpected(&self.read.name, &P::JTYPE.to_string()))
    }
}

/// Tag list class: empty constructor, element view and append.
#[derive(Debug, Clone)]
pub(crate) struct ListBinding {
    class: ClassId,
    path: String,
    new: MemberId,
    elements: Accessor,
    add: MemberId,
}

impl ListBinding {
    pub(crate) fn is(&self, host: &dyn Host, obj: &HostObject) -> bool {
        host.is_instance(self.class, obj)
    }

    pub(crate) fn create(&self, host: &dyn Host) -> Result<HostObject> {
        host.new_object(self.new, vec![])
            .map_err(|fault| Error::fault(format_args!("constructing {}", self.path), fault))
    }

    pub(crate) fn elements(&self, host: &dyn Host, list: &HostObject) -> Result<Vec<HostObject>> {
        match self.elements.read(host, list)? {
            HostValue::List(elements) => Ok(elements),
            _ => Err(Error::unexpected(&self.elements.name, "a list")),
        }
    }

    pub(crate) fn add(&self, host: &dyn Host, list: &HostObject, element: HostObject) -> Result<()> {
        host.invoke(self.add, Some(list), vec![HostValue::Object(element)])
            .map(|_| ())
            .map_err(|fault| Error::fault(format_args!("appending to {}", self.path), fault))
    }
}

/// Tag compound class: empty constructor, entry view and store.
#[derive(Debug, Clone)]
pub(crate) struct CompoundBinding {
    class: ClassId,
    path: String,
    new: MemberId,
    entries: Accessor,
    set: MemberId,
}

impl CompoundBinding {
    pub(crate) fn is(&self, host: &dyn Host, obj: &HostObject) -> bool {
        host.is_instance(self.class, obj)
    }

    pub(crate) fn create(&self, host: &dyn Host) -> Result<HostObject> {
        host.new_object(self.new, vec![])
            .map_err(|fault| Error::fault(format_args!("constructing {}", self.path), fault))
    }

    pub(crate) fn entries(
        &self,
        host: &dyn Host,
        compound: &HostObject,
    ) -> Result<Vec<(HostValue, HostObject)>> {
        match self.entries.read(host, compound)? {
            HostValue::Map(entries) => Ok(entries),
            _ => Err(Error::unexpected(&self.entries.name, "a map")),
        }
    }

    pub(crate) fn set(
        &self,
        host: &dyn Host,
        compound: &HostObject,
        key: &str,
        value: HostObject,
    ) -> Result<()> {
        let args = vec![HostValue::String(key.to_owned()), HostValue::Object(value)];
        host.invoke(self.set, Some(compound), args)
            .map(|_| ())
            .map_err(|fault| Error::fault(format_args!("storing {:?} in {}", key, self.path), fault))
    }
}

/// Copying items in and out of the server's own representation, and the
/// tag slot on it.
#[derive(Debug, Clone)]
pub(crate) struct ItemBinding {
    to_internal: MemberId,
    to_external: MemberId,
    get_tag: MemberId,
    set_tag: MemberId,
}

impl ItemBinding {
    /// Makes a server-side copy of a plugin-facing item. The original is not
    /// touched by anything done to the copy.
    pub(crate) fn to_internal(&self, host: &dyn Host, item: &HostObject) -> Result<HostObject> {
        host.invoke(self.to_internal, None, vec![HostValue::Object(item.clone())])
            .map_err(|fault| Error::fault("copying item", fault))?
            .into_object()
            .ok_or_else(|| Error::unexpected("copying item", "an item"))
    }

    pub(crate) fn to_external(&self, host: &dyn Host, item: &HostObject) -> Result<HostObject> {
        host.invoke(self.to_external, None, vec![HostValue::Object(item.clone())])
            .map_err(|fault| Error::fault("copying item back", fault))?
            .into_object()
            .ok_or_else(|| Error::unexpected("copying item back", "an item"))
    }

    /// The tag root, or `None` if the item has no tag data.
    pub(crate) fn get_tag(&self, host: &dyn Host, item: &HostObject) -> Result<Option<HostObject>> {
        match host.invoke(self.get_tag, Some(item), vec![]) {
            Ok(HostValue::Null) => Ok(None),
            Ok(HostValue::Object(tag)) => Ok(Some(tag)),
            Ok(_) => Err(Error::unexpected("reading item tag", "a compound")),
            Err(fault) => Err(Error::fault("reading item tag", fault)),
        }
    }

    pub(crate) fn set_tag(
        &self,
        host: &dyn Host,
        item: &HostObject,
        tag: Option<HostObject>,
    ) -> Result<()> {
        let arg = tag.map_or(HostValue::Null, HostValue::Object);
        host.invoke(self.set_tag, Some(item), vec![arg])
            .map(|_| ())
            .map_err(|fault| Error::fault("writing item tag", fault))
    }
}

/// Everything the codec calls into, for one release.
///
/// Leaf kinds are optional: a kind the release does not have is left unbound
/// and values of that kind are skipped during conversion.
#[derive(Debug, Clone)]
pub(crate) struct Bindings {
    pub(crate) byte: Option<LeafBinding<i8>>,
    pub(crate) short: Option<LeafBinding<i16>>,
    pub(crate) int: Option<LeafBinding<i32>>,
    pub(crate) long: Option<LeafBinding<i64>>,
    pub(crate) float: Option<LeafBinding<f32>>,
    pub(crate) double: Option<LeafBinding<f64>>,
    pub(crate) string: Option<LeafBinding<String>>,
    pub(crate) byte_array: Option<LeafBinding<Vec<i8>>>,
    pub(crate) int_array: Option<LeafBinding<Vec<i32>>>,
    pub(crate) long_array: Option<LeafBinding<Vec<i64>>>,
    pub(crate) list: ListBinding,
    pub(crate) compound: CompoundBinding,
    pub(crate) item: ItemBinding,
}

impl Bindings {
    pub(crate) fn discover(host: &dyn Host, table: &BindingTable) -> Result<Bindings> {
        let class = |path: &str| host.find_class(path).ok_or_else(|| Error::missing_class(path));
        let base = JType::Object(class(&table.base)?);

        let list_row = &table.list;
        let list_class = class(&list_row.class)?;
        let list = ListBinding {
            class: list_class,
            path: list_row.class.clone(),
            new: host
                .find_constructor(list_class, &[])
                .ok_or_else(|| Error::missing_member(&list_row.class, "<init>()"))?,
            elements: Accessor::resolve(host, list_class, &list_row.class, list_row.elements, JType::List)?,
            add: host
                .find_method(list_class, list_row.add, &[base], &JType::Void, false)
                .ok_or_else(|| {
                    Error::missing_member(&list_row.class, format!("{}({})V", list_row.add, base))
                })?,
        };

        let compound_row = &table.compound;
        let compound_class = class(&compound_row.class)?;
        let set_ret = if compound_row.set_returns_previous {
            base
        } else {
            JType::Void
        };
        let compound = CompoundBinding {
            class: compound_class,
            path: compound_row.class.clone(),
            new: host
                .find_constructor(compound_class, &[])
                .ok_or_else(|| Error::missing_member(&compound_row.class, "<init>()"))?,
            entries: Accessor::resolve(
                host,
                compound_class,
                &compound_row.class,
                compound_row.entries,
                JType::Map,
            )?,
            set: host
                .find_method(
                    compound_class,
                    compound_row.set,
                    &[JType::String, base],
                    &set_ret,
                    false,
                )
                .ok_or_else(|| {
                    Error::missing_member(
                        &compound_row.class,
                        format!("{}({}{}){}", compound_row.set, JType::String, base, set_ret),
                    )
                })?,
        };

        let item_row = &table.item;
        let external = JType::Object(class(&item_row.external)?);
        let internal_class = class(&item_row.internal)?;
        let internal = JType::Object(internal_class);
        let bridge = class(&item_row.bridge)?;
        let compound_ty = JType::Object(compound_class);
        let method = |class: ClassId, path: &str, name: &str, params: &[JType], ret: JType, is_static: bool| {
            host.find_method(class, name, params, &ret, is_static)
                .ok_or_else(|| Error::missing_member(path, name))
        };
        let item = ItemBinding {
            to_internal: method(bridge, &item_row.bridge, item_row.to_internal, &[external], internal, true)?,
            to_external: method(bridge, &item_row.bridge, item_row.to_external, &[internal], external, true)?,
            get_tag: method(internal_class, &item_row.internal, item_row.get_tag, &[], compound_ty, false)?,
            set_tag: method(
                internal_class,
                &item_row.internal,
                item_row.set_tag,
                &[compound_ty],
                JType::Void,
                false,
            )?,
        };

        Ok(Bindings {
            byte: leaf(host, table, TagKind::Byte)?,
            short: leaf(host, table, TagKind::Short)?,
            int: leaf(host, table, TagKind::Int)?,
            long: leaf(host, table, TagKind::Long)?,
            float: leaf(host, table, TagKind::Float)?,
            double: leaf(host, table, TagKind::Double)?,
            string: leaf(host, table, TagKind::String)?,
            byte_array: leaf(host, table, TagKind::ByteArray)?,
            int_array: leaf(host, table, TagKind::IntArray)?,
            long_array: leaf(host, table, TagKind::LongArray)?,
            list,
            compound,
            item,
        })
    }
}

fn leaf<P: Payload>(host: &dyn Host, table: &BindingTable, kind: TagKind) -> Result<Option<LeafBinding<P>>> {
    match table.leaf(kind) {
        Some(row) => LeafBinding::resolve(host, row),
        None => Ok(None),
    }
}
