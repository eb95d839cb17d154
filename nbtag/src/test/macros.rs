use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag};

fn list(items: Vec<Tag>) -> Tag {
    Tag::List(List::from(items))
}

#[test]
fn scalars() {
    assert_eq!(nbt!(1_i8), Tag::Byte(1));
    assert_eq!(nbt!(1_u8), Tag::Byte(1));
    assert_eq!(nbt!(1_i16), Tag::Short(1));
    assert_eq!(nbt!(1), Tag::Int(1));
    assert_eq!(nbt!(1_i64), Tag::Long(1));
    assert_eq!(nbt!(1_f32), Tag::Float(1.0));
    assert_eq!(nbt!(1.0), Tag::Double(1.0));
    assert_eq!(nbt!(true), Tag::Byte(1));
    assert_eq!(nbt!("string"), Tag::String("string".to_owned()));
    assert_eq!(nbt!("string".to_owned()), Tag::String("string".to_owned()));
}

#[test]
fn lists() {
    assert_eq!(nbt!([]), list(vec![]));
    assert_eq!(nbt!([1, 3]), list(vec![Tag::Int(1), Tag::Int(3)]));
    assert_eq!(
        nbt!([[1], ["a"]]),
        list(vec![
            list(vec![Tag::Int(1)]),
            list(vec![Tag::String("a".to_owned())]),
        ])
    );
}

#[test]
fn compounds() {
    assert_eq!(nbt!({}), Tag::Compound(Compound::new()));

    let mut expected = Compound::new();
    expected.insert("key1", "value1");
    expected.insert("key2", 42);
    expected.insert("key3", List::from(vec![Tag::Int(4), Tag::Int(2)]));

    assert_eq!(
        nbt!({
            "key1": "value1",
            "key2": 42,
            "key3": [4, 2],
        }),
        Tag::Compound(expected)
    );
}

#[test]
fn arrays() {
    assert_eq!(nbt!([B;]), Tag::ByteArray(ByteArray::new(vec![])));
    assert_eq!(nbt!([I;]), Tag::IntArray(IntArray::new(vec![])));
    assert_eq!(nbt!([L;]), Tag::LongArray(LongArray::new(vec![])));
    assert_eq!(nbt!([B; 1, 2, 3]), Tag::ByteArray(ByteArray::new(vec![1, 2, 3])));
    assert_eq!(nbt!([I;1,2,3]), Tag::IntArray(IntArray::new(vec![1, 2, 3])));
    assert_eq!(nbt!([L; 1, 2, 3,]), Tag::LongArray(LongArray::new(vec![1, 2, 3])));
}
