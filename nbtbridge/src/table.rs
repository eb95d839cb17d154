//! Where each release keeps its tag classes and what their members are
//! called.
//!
//! This is plain data. Supporting a new release means adding rows here, and
//! nothing in the codec changes.
use nbtag::TagKind;

use crate::Release;

/// How a tag object is created from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// A public constructor taking the payload.
    New,
    /// A static method of the tag class taking the payload.
    Factory(&'static str),
}

/// How the payload of a tag object is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Field(&'static str),
    /// A no-argument instance method.
    Method(&'static str),
}

impl Access {
    pub fn name(self) -> &'static str {
        match self {
            Access::Field(name) | Access::Method(name) => name,
        }
    }
}

/// A scalar, string or array tag class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRow {
    pub kind: TagKind,
    pub class: String,
    pub construct: Construct,
    pub access: Access,
    /// Missing from some releases. Failing to find an optional row disables
    /// that kind rather than failing discovery.
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub class: String,
    /// Reads the backing `java.util.List`.
    pub elements: Access,
    /// Appends one element, `(NBTBase)V`.
    pub add: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRow {
    pub class: String,
    /// Reads the backing `java.util.Map`.
    pub entries: Access,
    /// Stores one entry, `(String, NBTBase)`.
    pub set: &'static str,
    /// Whether `set` hands back the previous tag instead of returning
    /// nothing.
    pub set_returns_previous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    /// The item class plugins hold.
    pub external: String,
    /// The server's own item class, which owns the tag.
    pub internal: String,
    /// Holds the static copy methods between the two item classes.
    pub bridge: String,
    pub to_internal: &'static str,
    pub to_external: &'static str,
    pub get_tag: &'static str,
    pub set_tag: &'static str,
}

/// Every class and member the codec needs for one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTable {
    pub release: Release,
    /// The common supertype of every tag class.
    pub base: String,
    /// One row per leaf kind, in [`TagKind::VALUES`] order.
    pub leaves: Vec<LeafRow>,
    pub list: ListRow,
    pub compound: CompoundRow,
    pub item: ItemRow,
}

impl BindingTable {
    pub fn for_release(release: Release) -> BindingTable {
        let internal = |name: &str| {
            if release.has_flat_packages() {
                format!("net.minecraft.nbt.{}", name)
            } else {
                format!("net.minecraft.server.{}.{}", release, name)
            }
        };

        let leaves = TagKind::VALUES
            .iter()
            .copied()
            .filter(|kind| !kind.is_container())
            .map(|kind| LeafRow {
                kind,
                class: internal(leaf_class(kind)),
                construct: construct(release, kind),
                access: access(release, kind),
                optional: kind == TagKind::LongArray,
            })
            .collect();

        let modern = release.is_at_least(Release::v1_18_R1);
        let obfuscated = release.has_flat_packages();

        BindingTable {
            release,
            base: internal("NBTBase"),
            leaves,
            list: ListRow {
                class: internal("NBTTagList"),
                elements: Access::Field(if obfuscated { "c" } else { "list" }),
                add: "add",
            },
            compound: CompoundRow {
                class: internal("NBTTagCompound"),
                entries: Access::Field(if obfuscated { "x" } else { "map" }),
                set: if modern { "a" } else { "set" },
                set_returns_previous: release.is_at_least(Release::v1_14_R1),
            },
            item: ItemRow {
                external: "org.bukkit.inventory.ItemStack".to_owned(),
                internal: if obfuscated {
                    "net.minecraft.world.item.ItemStack".to_owned()
                } else {
                    internal("ItemStack")
                },
                bridge: format!("org.bukkit.craftbukkit.{}.inventory.CraftItemStack", release),
                to_internal: "asNMSCopy",
                to_external: "asBukkitCopy",
                get_tag: if modern { "t" } else { "getTag" },
                set_tag: if modern { "c" } else { "setTag" },
            },
        }
    }

    pub fn leaf(&self, kind: TagKind) -> Option<&LeafRow> {
        self.leaves.iter().find(|row| row.kind == kind)
    }
}

fn leaf_class(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Byte => "NBTTagByte",
        TagKind::Short => "NBTTagShort",
        TagKind::Int => "NBTTagInt",
        TagKind::Long => "NBTTagLong",
        TagKind::Float => "NBTTagFloat",
        TagKind::Double => "NBTTagDouble",
        TagKind::String => "NBTTagString",
        TagKind::ByteArray => "NBTTagByteArray",
        TagKind::IntArray => "NBTTagIntArray",
        TagKind::LongArray => "NBTTagLongArray",
        TagKind::List => "NBTTagList",
        TagKind::Compound => "NBTTagCompound",
        TagKind::End => "NBTTagEnd",
    }
}

fn construct(release: Release, kind: TagKind) -> Construct {
    let scalar = !kind.is_array() && !kind.is_container();
    if scalar && release.has_flat_packages() {
        Construct::Factory("a")
    } else {
        Construct::New
    }
}

fn access(release: Release, kind: TagKind) -> Access {
    if release.is_at_least(Release::v1_18_R1) {
        Access::Method(match kind {
            TagKind::Byte => "h",
            TagKind::Short => "g",
            TagKind::Int => "f",
            TagKind::Long => "e",
            TagKind::Float => "j",
            TagKind::Double => "i",
            TagKind::String => "e_",
            TagKind::ByteArray => "d",
            _ => "f",
        })
    } else if release.has_flat_packages() {
        Access::Field(match kind {
            TagKind::Byte => "x",
            TagKind::Float | TagKind::Double => "w",
            TagKind::String => "A",
            _ => "c",
        })
    } else {
        Access::Field("data")
    }
}
