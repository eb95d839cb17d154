use serde_json::json;

use crate::{nbt, Compound, List, Tag};

#[test]
fn to_json() {
    let tag = nbt!({
        "name": "Sword",
        "damage": 3_i16,
        "ints": [I; 1, 2],
        "lore": ["a", "b"],
    });

    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        json!({
            "name": "Sword",
            "damage": 3,
            "ints": [1, 2],
            "lore": ["a", "b"],
        })
    );
}

#[test]
fn from_json_widens_integers() {
    let tag: Tag = serde_json::from_str(r#"{"a": 1, "b": 1.5, "c": [true], "d": "x"}"#).unwrap();

    let c = tag.as_compound().unwrap();
    assert_eq!(c.get("a"), Some(&Tag::Long(1)));
    assert_eq!(c.get("b"), Some(&Tag::Double(1.5)));
    assert_eq!(c.get_list("c"), Some(&List::from(vec![Tag::Byte(1)])));
    assert_eq!(c.get_str("d"), Some("x"));
}

#[test]
fn json_rejects_null() {
    assert!(serde_json::from_str::<Tag>("null").is_err());
    assert!(serde_json::from_str::<Tag>(r#"{"a": null}"#).is_err());
}

#[test]
fn compound_round_trips_through_json() {
    let mut c = Compound::new();
    c.insert("s", "text");
    c.insert("l", 7_i64);
    c.insert("d", 0.25);

    let json = serde_json::to_string(&c).unwrap();
    let back: Compound = serde_json::from_str(&json).unwrap();
    assert_eq!(c, back);
}
