use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nbtag::{nbt, Compound, List, Tag};
use nbtbridge::{sim::SimHost, Codec, NbtRegistry, Release};

fn book() -> Compound {
    let mut pages = List::new();
    for i in 0..50 {
        pages.add_string(format!("page {} of a fairly long written book", i));
    }

    let tag = nbt!({
        "title": "Benchmarks",
        "author": "criterion",
        "generation": 0,
        "display": { "Lore": ["one", "two", "three"] },
        "Enchantments": [
            { "id": "minecraft:unbreaking", "lvl": 3_i16 },
            { "id": "minecraft:mending", "lvl": 1_i16 },
        ],
        "heights": [L; 1, 2, 3, 4, 5, 6, 7, 8],
    });

    let mut book = match tag {
        Tag::Compound(c) => c,
        _ => unreachable!(),
    };
    book.insert("pages", pages);
    book
}

pub fn convert_benchmark(c: &mut Criterion) {
    let host = Arc::new(SimHost::new(Release::v1_18_R2));
    let codec = Codec::new(host.clone()).unwrap();
    let book = book();
    let item = codec.apply_tag(&host.item("WRITTEN_BOOK", 1), Some(&book)).unwrap();

    c.bench_function("apply_tag", |b| {
        b.iter(|| {
            let item = codec.apply_tag(&item, Some(&book)).unwrap();
            black_box(item);
        });
    });

    c.bench_function("get_tag", |b| {
        b.iter(|| {
            let tag = codec.get_tag(&item).unwrap();
            black_box(tag);
        });
    });

    c.bench_function("discover", |b| {
        b.iter(|| {
            let codec = Codec::new(host.clone()).unwrap();
            black_box(codec);
        });
    });
}

criterion_group!(benches, convert_benchmark);
criterion_main!(benches);
