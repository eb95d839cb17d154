//! nbtbridge moves [`nbtag`] trees in and out of a running *Minecraft: Java
//! Edition* server's own tag objects.
//!
//! Servers keep NBT in internal classes whose names and members change from
//! release to release. This crate reads the server's release from its
//! package name, looks up the right classes and members once using a
//! per-release [`BindingTable`], and from then on converts whole trees in
//! either direction through typed handles.
//!
//! The server is reached through the [`Host`] trait. [`sim::SimHost`] is an
//! in-memory implementation of it that mimics every supported release.
//!
//! # Process-wide registry
//!
//! ```
//! use std::sync::Arc;
//! use nbtbridge::{sim::SimHost, Release};
//!
//! let host = Arc::new(SimHost::new(Release::v1_16_R3));
//! let sword = host.item("DIAMOND_SWORD", 1);
//!
//! nbtbridge::install(host).unwrap();
//! let registry = nbtbridge::registry().unwrap();
//!
//! assert_eq!(registry.get_tag(&sword).unwrap(), None);
//!
//! let tag = nbtag::nbt!({ "Unbreakable": true });
//! let tag = tag.as_compound().unwrap();
//! let unbreakable = registry.apply_tag(&sword, Some(tag)).unwrap();
//!
//! assert_eq!(registry.get_tag(&unbreakable).unwrap().as_ref(), Some(tag));
//! ```
//!
//! # Using a codec directly
//!
//! The registry is a [`Codec`] behind a `OnceCell`. A codec can also be made
//! on its own, which is what tests and tools holding several hosts do.
//!
//! ```
//! use std::sync::Arc;
//! use nbtag::{Tag, TagKind};
//! use nbtbridge::{sim::SimHost, Codec, Release};
//!
//! let codec = Codec::new(Arc::new(SimHost::new(Release::v1_8_R3))).unwrap();
//! assert!(!codec.supports(TagKind::LongArray));
//!
//! let obj = codec.from_tag(&Tag::Short(7)).unwrap().unwrap();
//! assert_eq!(codec.to_tag(&obj).unwrap(), Some(Tag::Short(7)));
//! ```

pub mod error;
pub mod host;
pub mod sim;
pub mod table;

mod binding;
mod codec;
mod registry;
mod release;

pub use codec::Codec;
pub use error::{Error, ErrorKind, Result};
pub use host::{Host, HostObject};
pub use registry::*;
pub use release::Release;
pub use table::BindingTable;

#[cfg(test)]
mod test;
