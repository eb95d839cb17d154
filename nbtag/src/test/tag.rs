use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, TagKind};

fn hash_of(tag: &Tag) -> u64 {
    let mut h = DefaultHasher::new();
    tag.hash(&mut h);
    h.finish()
}

#[test]
fn different_variants_never_equal() {
    assert_ne!(Tag::Byte(1), Tag::Short(1));
    assert_ne!(Tag::Int(1), Tag::Long(1));
    assert_ne!(Tag::Float(1.0), Tag::Double(1.0));
    assert_ne!(
        Tag::from(ByteArray::new(vec![1])),
        Tag::List(List::from(vec![Tag::Byte(1)]))
    );
    assert_ne!(
        Tag::from(IntArray::new(vec![])),
        Tag::from(LongArray::new(vec![]))
    );
}

#[test]
fn floats_compare_by_bits() {
    assert_eq!(Tag::Float(f32::NAN), Tag::Float(f32::NAN));
    assert_ne!(Tag::Double(0.0), Tag::Double(-0.0));
    assert_eq!(hash_of(&Tag::Double(f64::NAN)), hash_of(&Tag::Double(f64::NAN)));
}

#[test]
fn equal_tags_hash_equal() {
    let a: Compound = vec![("x", Tag::Int(1)), ("y", Tag::from("two"))]
        .into_iter()
        .collect();
    let b: Compound = vec![("y", Tag::from("two")), ("x", Tag::Int(1))]
        .into_iter()
        .collect();

    assert_eq!(a, b);
    assert_eq!(hash_of(&Tag::Compound(a)), hash_of(&Tag::Compound(b)));
}

#[test]
fn tags_work_as_set_members() {
    let mut set = HashSet::new();
    set.insert(Tag::Int(1));
    set.insert(Tag::Int(1));
    set.insert(Tag::Long(1));
    set.insert(Tag::from(vec![1_i8, 2]));
    assert_eq!(set.len(), 3);
}

#[test]
fn clone_is_deep() {
    let mut inner = List::new();
    inner.add_int(1);

    let mut original = Compound::new();
    original.insert("list", inner);
    original.insert("bytes", vec![1_i8, 2, 3]);

    let mut copy = original.clone();
    copy.get_list_mut("list").unwrap().add_int(2);
    if let Some(Tag::ByteArray(bytes)) = copy.get_mut("bytes") {
        bytes.push(4);
    }

    assert_eq!(original.get_list("list").unwrap().len(), 1);
    assert_eq!(original.get_byte_array("bytes").unwrap().len(), 3);
    assert_ne!(original, copy);
}

#[test]
fn kind_matches_variant() {
    assert_eq!(Tag::Byte(0).kind(), TagKind::Byte);
    assert_eq!(Tag::from("s").kind(), TagKind::String);
    assert_eq!(Tag::from(vec![0_i64]).kind(), TagKind::LongArray);
    assert_eq!(Tag::List(List::new()).kind(), TagKind::List);
    assert_eq!(Tag::Compound(Compound::new()).kind(), TagKind::Compound);
}

#[test]
fn from_primitives() {
    assert_eq!(Tag::from(1_u8), Tag::Byte(1));
    assert_eq!(Tag::from(true), Tag::Byte(1));
    assert_eq!(Tag::from(false), Tag::Byte(0));
    assert_eq!(Tag::from(1_u16), Tag::Short(1));
    assert_eq!(Tag::from(1_u32), Tag::Int(1));
    assert_eq!(Tag::from(1_u64), Tag::Long(1));
    assert_eq!(Tag::from(1.5_f32), Tag::Float(1.5));
    assert_eq!(Tag::from(&"s".to_owned()), Tag::String("s".to_owned()));
}

#[test]
fn try_from_tag() {
    assert_eq!(i32::try_from(Tag::Int(9)).unwrap(), 9);
    assert_eq!(String::try_from(Tag::from("s")).unwrap(), "s");

    let err = i32::try_from(Tag::Long(9)).unwrap_err();
    assert_eq!(err.to_string(), "expected Int tag, found Long");
}

#[test]
fn compare_with_plain_values() {
    assert_eq!(Tag::Byte(3), 3);
    assert_eq!(Tag::Double(1.5), 1.5);
    assert_eq!(Tag::from("abc"), "abc");
    assert!(Tag::from("abc") != 3);
}

#[test]
fn numeric_views() {
    assert_eq!(Tag::Short(-2).as_i64(), Some(-2));
    assert_eq!(Tag::Float(2.5).as_f64(), Some(2.5));
    assert_eq!(Tag::from("x").as_i64(), None);
    assert_eq!(Tag::from("x").as_str(), Some("x"));
    assert!(Tag::Int(1).as_compound().is_none());
}
