use std::sync::Arc;

use nbtag::{Compound, List, Tag};

use crate::{sim::SimHost, Codec, Release};


fn codec(release: Release) -> (Arc<SimHost>, Codec) {
    let host = Arc::new(SimHost::new(release));
    let codec = Codec::new(host.clone()).unwrap();
    (host, codec)
}

/// One tag of every leaf kind.
fn leaves() -> Vec<Tag> {
    vec![
        Tag::Byte(-3),
        Tag::Short(300),
        Tag::Int(-70_000),
        Tag::Long(1 << 40),
        Tag::Float(2.5),
        Tag::Double(-0.125),
        Tag::String("héllo wörld".to_owned()),
        Tag::from(vec![1_i8, -1, 127]),
        Tag::from(vec![1, 2, 3]),
        Tag::from(vec![i64::MIN, 0, i64::MAX]),
    ]
}

/// A compound using every kind, including nested containers.
fn everything() -> Compound {
    let mut compound = Compound::new();
    for (i, tag) in leaves().into_iter().enumerate() {
        compound.insert(format!("leaf{}", i), tag);
    }

    let mut nested = Compound::new();
    nested.insert("Name", "Excalibur");
    nested.insert("Lore", List::from(vec![Tag::from("a"), Tag::from("b")]));

    let mut list = List::new();
    list.add_compound(nested.clone());
    list.add_compound(Compound::new());

    compound.insert("display", nested);
    compound.insert("entries", list);
    compound.insert("empty", List::new());
    compound
}
