use std::sync::Arc;

use log::info;
use nbtag::Compound;
use once_cell::sync::OnceCell;

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::host::{Host, HostObject};

/// Reads and writes the tag data carried by host items.
pub trait NbtRegistry: Send + Sync {
    /// A fresh copy of the item's tag data, or `None` if the item carries
    /// none. An item with an empty tag gives an empty compound, not `None`.
    fn get_tag(&self, item: &HostObject) -> Result<Option<Compound>>;

    /// Returns a new item carrying `tag` as its tag data, or no tag data at
    /// all for `None`. `item` itself is left unchanged.
    fn apply_tag(&self, item: &HostObject, tag: Option<&Compound>) -> Result<HostObject>;
}

static HOST: OnceCell<Arc<dyn Host>> = OnceCell::new();
static REGISTRY: OnceCell<Result<Arc<dyn NbtRegistry>>> = OnceCell::new();

/// Registers the host runtime for the process-wide registry. Only the first
/// call succeeds.
pub fn install(host: Arc<dyn Host>) -> Result<()> {
    HOST.set(host).map_err(|_| Error::already_installed())
}

/// The process-wide registry, resolved against the installed host on first
/// use.
///
/// Resolution runs once. If it fails, the same error is returned to every
/// later caller. Calling this before [`install`] is an error but does not
/// spoil later resolution.
pub fn registry() -> Result<Arc<dyn NbtRegistry>> {
    let host = HOST.get().ok_or_else(Error::no_host)?;
    REGISTRY
        .get_or_init(|| {
            let codec = Codec::new(Arc::clone(host))?;
            info!("NBT registry ready for {}", codec.release());
            Ok(Arc::new(codec) as Arc<dyn NbtRegistry>)
        })
        .clone()
}

/// Resolves the registry now rather than on first use.
pub fn init() -> Result<()> {
    registry().map(|_| ())
}
