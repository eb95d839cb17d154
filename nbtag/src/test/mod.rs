use crate::TagKind;

#[allow(clippy::float_cmp)]
mod tag;

mod compound;
mod display;
mod list;
mod macros;
mod serde;

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagKind::$kind), $val);
            assert_eq!(TagKind::try_from($val as u8).unwrap(), TagKind::$kind);
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(TagKind::try_from(value).is_err())
    }
}

#[test]
fn value_kinds_put_containers_last() {
    let kinds = TagKind::VALUES;
    assert_eq!(kinds.len(), 12);
    assert!(!kinds.contains(&TagKind::End));
    assert_eq!(&kinds[10..], &[TagKind::List, TagKind::Compound]);
    assert!(kinds[..10].iter().all(|k| !k.is_container()));
}
