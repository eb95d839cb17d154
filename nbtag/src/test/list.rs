use crate::{Compound, List, Tag, TagKind};

#[test]
fn typed_appends_wrap_values() {
    let mut list = List::new();
    list.add_byte(1);
    list.add_short(2);
    list.add_int(3);
    list.add_long(4);
    list.add_float(5.0);
    list.add_double(6.0);
    list.add_string("seven");
    list.add_byte_array(vec![8_i8]);
    list.add_int_array(vec![9_i32]);
    list.add_long_array(vec![10_i64]);
    list.add_list(vec![Tag::Int(11)]);
    list.add_compound(Compound::new());

    let kinds: Vec<_> = list.iter().map(Tag::kind).collect();
    assert_eq!(kinds, TagKind::VALUES.to_vec());
}

#[test]
fn order_is_preserved() {
    let list: List = vec![1, 2, 3].into_iter().collect();
    assert_eq!(
        list.clone().into_inner(),
        vec![Tag::Int(1), Tag::Int(2), Tag::Int(3)]
    );
    assert_eq!(list[2], Tag::Int(3));
    assert_eq!(list.get(3), None);
}

#[test]
fn index_operations() {
    let mut list: List = vec!["a", "c"].into_iter().collect();
    list.insert(1, "b");
    assert_eq!(list.to_string(), "[a, b, c]");

    assert_eq!(list.set(0, "z"), Tag::from("a"));
    assert_eq!(list.remove(1), Tag::from("b"));
    assert_eq!(list.to_string(), "[z, c]");

    list[1] = Tag::from("y");
    assert_eq!(list.pop(), Some(Tag::from("y")));
    assert_eq!(list.len(), 1);
}

#[test]
fn mixed_kinds_are_accepted() {
    let mut list = List::new();
    list.add_int(1);
    list.add_string("two");
    list.push(Tag::Int(1));

    assert_eq!(list.len(), 3);
    assert!(!list.is_homogeneous());
    assert_eq!(list.element_kind(), None);
}

#[test]
fn homogeneous_lists() {
    assert!(List::new().is_homogeneous());
    assert_eq!(List::new().element_kind(), None);

    let ints: List = vec![1, 2].into_iter().collect();
    assert!(ints.is_homogeneous());
    assert_eq!(ints.element_kind(), Some(TagKind::Int));
}

#[test]
fn deep_nesting() {
    let mut leaf = Compound::new();
    leaf.insert("depth", 3);

    let mut root = Compound::new();
    root.insert(
        "a",
        List::from(vec![Tag::List(List::from(vec![Tag::Compound(leaf)]))]),
    );

    let depth = root
        .get_list("a")
        .and_then(|l| l[0].as_list())
        .and_then(|l| l[0].as_compound())
        .and_then(|c| c.get_int("depth"));
    assert_eq!(depth, Some(3));
}
