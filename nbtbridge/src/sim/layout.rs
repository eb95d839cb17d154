//! The classes and members each simulated release exposes.
use nbtag::TagKind;

use crate::host::{ClassId, JType};
use crate::Release;

/// What running a member does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Op {
    NewLeaf(TagKind),
    NewList,
    NewCompound,
    ReadLeaf,
    ListElements,
    ListAdd,
    CompoundEntries,
    CompoundSet { returns_previous: bool },
    ToInternal,
    ToExternal,
    GetTag,
    SetTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Signature {
    Constructor(Vec<JType>),
    Method {
        name: &'static str,
        params: Vec<JType>,
        ret: JType,
        is_static: bool,
    },
    Field {
        name: &'static str,
        ty: JType,
    },
}

#[derive(Debug, Clone)]
pub(super) struct Member {
    pub class: ClassId,
    pub signature: Signature,
    pub op: Op,
}

#[derive(Debug, Clone)]
pub(super) struct Class {
    pub path: String,
    pub parent: Option<ClassId>,
}

#[derive(Debug, Clone)]
pub(super) struct Layout {
    pub classes: Vec<Class>,
    pub members: Vec<Member>,
    pub external_item: ClassId,
    pub internal_item: ClassId,
}

impl Layout {
    fn class(&mut self, path: String, parent: Option<ClassId>) -> ClassId {
        self.classes.push(Class { path, parent });
        ClassId(self.classes.len() as u32 - 1)
    }

    fn member(&mut self, class: ClassId, signature: Signature, op: Op) {
        self.members.push(Member {
            class,
            signature,
            op,
        });
    }

    fn method(&mut self, class: ClassId, name: &'static str, params: Vec<JType>, ret: JType, op: Op) {
        let signature = Signature::Method {
            name,
            params,
            ret,
            is_static: false,
        };
        self.member(class, signature, op);
    }

    fn static_method(&mut self, class: ClassId, name: &'static str, params: Vec<JType>, ret: JType, op: Op) {
        let signature = Signature::Method {
            name,
            params,
            ret,
            is_static: true,
        };
        self.member(class, signature, op);
    }
}

const LEAVES: [(TagKind, &str, JType); 10] = [
    (TagKind::Byte, "NBTTagByte", JType::Byte),
    (TagKind::Short, "NBTTagShort", JType::Short),
    (TagKind::Int, "NBTTagInt", JType::Int),
    (TagKind::Long, "NBTTagLong", JType::Long),
    (TagKind::Float, "NBTTagFloat", JType::Float),
    (TagKind::Double, "NBTTagDouble", JType::Double),
    (TagKind::String, "NBTTagString", JType::String),
    (TagKind::ByteArray, "NBTTagByteArray", JType::ByteArray),
    (TagKind::IntArray, "NBTTagIntArray", JType::IntArray),
    (TagKind::LongArray, "NBTTagLongArray", JType::LongArray),
];

/// Builds the class layout the given release would present.
pub(super) fn layout(release: Release) -> Layout {
    let (_, minor, _) = release.version();
    let nms = |name: &str| match minor {
        0..=16 => format!("net.minecraft.server.{}.{}", release.package(), name),
        _ => format!("net.minecraft.nbt.{}", name),
    };

    let mut l = Layout {
        classes: Vec::new(),
        members: Vec::new(),
        external_item: ClassId(0),
        internal_item: ClassId(0),
    };

    let base = l.class(nms("NBTBase"), None);
    let base_ty = JType::Object(base);

    for (kind, name, ty) in LEAVES {
        if kind == TagKind::LongArray && minor < 12 {
            continue;
        }
        let class = l.class(nms(name), Some(base));
        let scalar = !kind.is_array();

        // From 1.17 scalar constructors are private behind a caching factory.
        if minor >= 17 && scalar {
            l.static_method(class, "a", vec![ty], JType::Object(class), Op::NewLeaf(kind));
        } else {
            l.member(class, Signature::Constructor(vec![ty]), Op::NewLeaf(kind));
        }

        match minor {
            0..=16 => l.member(class, Signature::Field { name: "data", ty }, Op::ReadLeaf),
            17 => {
                let name = match kind {
                    TagKind::Byte => "x",
                    TagKind::Float | TagKind::Double => "w",
                    TagKind::String => "A",
                    _ => "c",
                };
                l.member(class, Signature::Field { name, ty }, Op::ReadLeaf)
            }
            _ => {
                let name = match kind {
                    TagKind::Byte => "h",
                    TagKind::Short => "g",
                    TagKind::Long => "e",
                    TagKind::Float => "j",
                    TagKind::Double => "i",
                    TagKind::String => "e_",
                    TagKind::ByteArray => "d",
                    _ => "f",
                };
                l.method(class, name, vec![], ty, Op::ReadLeaf)
            }
        }
    }

    let list = l.class(nms("NBTTagList"), Some(base));
    l.member(list, Signature::Constructor(vec![]), Op::NewList);
    let elements = if minor >= 17 { "c" } else { "list" };
    l.member(
        list,
        Signature::Field {
            name: elements,
            ty: JType::List,
        },
        Op::ListElements,
    );
    l.method(list, "add", vec![base_ty], JType::Void, Op::ListAdd);

    let compound = l.class(nms("NBTTagCompound"), Some(base));
    let compound_ty = JType::Object(compound);
    l.member(compound, Signature::Constructor(vec![]), Op::NewCompound);
    let entries = if minor >= 17 { "x" } else { "map" };
    l.member(
        compound,
        Signature::Field {
            name: entries,
            ty: JType::Map,
        },
        Op::CompoundEntries,
    );
    let set = if minor >= 18 { "a" } else { "set" };
    let returns_previous = minor >= 14;
    let ret = if returns_previous { base_ty } else { JType::Void };
    l.method(
        compound,
        set,
        vec![JType::String, base_ty],
        ret,
        Op::CompoundSet { returns_previous },
    );

    let external = l.class("org.bukkit.inventory.ItemStack".to_owned(), None);
    let internal = l.class(
        if minor >= 17 {
            "net.minecraft.world.item.ItemStack".to_owned()
        } else {
            nms("ItemStack")
        },
        None,
    );
    let craft = l.class(
        format!("org.bukkit.craftbukkit.{}.inventory.CraftItemStack", release.package()),
        Some(external),
    );
    l.external_item = external;
    l.internal_item = internal;

    let external_ty = JType::Object(external);
    let internal_ty = JType::Object(internal);
    l.static_method(craft, "asNMSCopy", vec![external_ty], internal_ty, Op::ToInternal);
    l.static_method(craft, "asBukkitCopy", vec![internal_ty], external_ty, Op::ToExternal);

    let (get_tag, set_tag) = if minor >= 18 { ("t", "c") } else { ("getTag", "setTag") };
    l.method(internal, get_tag, vec![], compound_ty, Op::GetTag);
    l.method(internal, set_tag, vec![compound_ty], JType::Void, Op::SetTag);

    l
}
