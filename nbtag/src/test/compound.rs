use crate::{Compound, List, Tag};

#[test]
fn insert_get_remove() {
    let mut c = Compound::new();
    assert!(c.is_empty());
    assert_eq!(c.insert("a", 1), None);
    assert_eq!(c.insert("a", 2), Some(Tag::Int(1)));
    assert_eq!(c.len(), 1);
    assert_eq!(c.get("a"), Some(&Tag::Int(2)));
    assert!(c.contains_key("a"));
    assert_eq!(c.remove("a"), Some(Tag::Int(2)));
    assert_eq!(c.remove("a"), None);
    assert!(c.get("a").is_none());
}

#[test]
fn absent_is_not_empty_value() {
    let mut c = Compound::new();
    c.insert("empty", "");
    assert_eq!(c.get_str("empty"), Some(""));
    assert_eq!(c.get_str("missing"), None);
}

#[test]
fn typed_getters_check_kind() {
    let mut c = Compound::new();
    c.insert("b", 1_i8);
    c.insert("i", 10);
    c.insert("l", 10_i64);
    c.insert("d", 0.5);
    c.insert("flag", true);
    c.insert("list", List::new());
    c.insert("ints", vec![1, 2]);

    assert_eq!(c.get_byte("b"), Some(1));
    assert_eq!(c.get_int("i"), Some(10));
    assert_eq!(c.get_int("l"), None);
    assert_eq!(c.get_long("l"), Some(10));
    assert_eq!(c.get_double("d"), Some(0.5));
    assert_eq!(c.get_float("d"), None);
    assert_eq!(c.get_bool("flag"), Some(true));
    assert!(c.get_list("list").unwrap().is_empty());
    assert!(c.get_compound("list").is_none());
    assert_eq!(&**c.get_int_array("ints").unwrap(), &vec![1, 2]);
}

#[test]
fn merge_combines_or_removes() {
    let mut c = Compound::new();
    c.merge("count", 1, |_, new| Some(new));
    assert_eq!(c["count"], Tag::Int(1));

    let sum = |old: Tag, new: Tag| Some(Tag::Int(old.as_i64()? as i32 + new.as_i64()? as i32));
    c.merge("count", 5, sum);
    assert_eq!(c["count"], Tag::Int(6));

    assert_eq!(c.merge("count", 0, |_, _| None), None);
    assert!(!c.contains_key("count"));
}

#[test]
fn merge_hands_over_the_old_subtree() {
    let mut inner = Compound::new();
    inner.insert("a", 1);
    let mut c = Compound::new();
    c.insert("nested", inner);

    let merged = c.merge("nested", "b", |old, new| match old {
        Tag::Compound(mut old) => {
            old.insert(new.as_str()?, 2);
            Some(Tag::Compound(old))
        }
        _ => None,
    });
    assert_eq!(merged.and_then(Tag::as_compound).map(Compound::len), Some(2));

    let nested = c.get_compound("nested").unwrap();
    assert_eq!(nested["a"], 1);
    assert_eq!(nested["b"], 2);
}

#[cfg(feature = "preserve-order")]
#[test]
fn merge_keeps_position() {
    let mut c = Compound::new();
    c.insert("first", 1);
    c.insert("second", 2);
    c.insert("third", 3);

    c.merge("second", 10, |old, new| {
        Some(Tag::Int(old.as_i64()? as i32 + new.as_i64()? as i32))
    });
    let keys: Vec<_> = c.keys().map(String::as_str).collect();
    assert_eq!(keys, ["first", "second", "third"]);
    assert_eq!(c["second"], 12);
}

#[test]
fn put_all_overwrites_and_adds() {
    let mut base = Compound::new();
    base.insert("keep", 1);
    base.insert("replace", 1);

    let mut other = Compound::new();
    other.insert("replace", 2);
    other.insert("new", 3);

    base.put_all(&other);
    assert_eq!(base.len(), 3);
    assert_eq!(base["keep"], 1);
    assert_eq!(base["replace"], 2);
    assert_eq!(base["new"], 3);
    // the source is untouched
    assert_eq!(other.len(), 2);
}

#[test]
fn insert_if_absent_keeps_existing() {
    let mut c = Compound::new();
    c.insert("a", 1);
    assert_eq!(*c.insert_if_absent("a", 2), Tag::Int(1));
    assert_eq!(*c.insert_if_absent("b", 2), Tag::Int(2));
}

#[test]
fn nested_mutation() {
    let mut c = Compound::new();
    c.get_or_insert_with("display", || Tag::Compound(Compound::new()))
        .as_compound_mut()
        .unwrap()
        .insert("Name", "Sword");

    assert_eq!(
        c.get_compound("display").and_then(|d| d.get_str("Name")),
        Some("Sword")
    );

    c.get_compound_mut("display").unwrap().clear();
    assert!(c.get_compound("display").unwrap().is_empty());
}

#[test]
fn retain_and_iterate() {
    let mut c: Compound = (0..5).map(|i| (format!("k{}", i), i)).collect();
    c.retain(|_, v| v.as_i64().map_or(false, |i| i % 2 == 0));

    let mut keys: Vec<_> = c.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["k0", "k2", "k4"]);

    for v in c.values_mut() {
        *v = Tag::Int(0);
    }
    assert!(c.values().all(|v| *v == Tag::Int(0)));
}

#[test]
#[should_panic]
fn index_missing_key_panics() {
    let c = Compound::new();
    let _ = &c["nope"];
}
