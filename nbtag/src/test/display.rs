use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag};

#[test]
fn scalar_suffixes() {
    assert_eq!(Tag::Byte(1).to_string(), "1b");
    assert_eq!(Tag::Byte(-128).to_string(), "-128b");
    assert_eq!(Tag::Short(300).to_string(), "300s");
    assert_eq!(Tag::Int(42).to_string(), "42");
    assert_eq!(Tag::Int(-7).to_string(), "-7");
    assert_eq!(Tag::Long(5).to_string(), "5l");
    assert_eq!(Tag::Long(i64::MIN).to_string(), "-9223372036854775808l");
}

#[test]
fn float_forms() {
    assert_eq!(Tag::Float(2.5).to_string(), "2.5f");
    assert_eq!(Tag::Float(1.0).to_string(), "1.0f");
    assert_eq!(Tag::Float(-0.0).to_string(), "-0.0f");
    assert_eq!(Tag::Float(0.1).to_string(), "0.1f");
    assert_eq!(Tag::Float(1.0e10).to_string(), "1.0E10f");
    assert_eq!(Tag::Float(1.5e-5).to_string(), "1.5E-5f");
    assert_eq!(Tag::Float(f32::NAN).to_string(), "NaNf");
    assert_eq!(Tag::Float(f32::INFINITY).to_string(), "Infinityf");
}

#[test]
fn double_forms() {
    assert_eq!(Tag::Double(2.5).to_string(), "2.5");
    assert_eq!(Tag::Double(3.0).to_string(), "3.0");
    assert_eq!(Tag::Double(0.001).to_string(), "0.001");
    assert_eq!(Tag::Double(1234567.0).to_string(), "1234567.0");
    assert_eq!(Tag::Double(1.0e7).to_string(), "1.0E7");
    assert_eq!(Tag::Double(-2.5e-4).to_string(), "-2.5E-4");
    assert_eq!(Tag::Double(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn string_is_not_quoted() {
    assert_eq!(Tag::from("hello world").to_string(), "hello world");
    assert_eq!(Tag::from("").to_string(), "");
    assert_eq!(Tag::from("a\"b").to_string(), "a\"b");
}

#[test]
fn array_forms() {
    assert_eq!(Tag::from(ByteArray::new(vec![1, 2])).to_string(), "[B;1,2]");
    assert_eq!(Tag::from(IntArray::new(vec![])).to_string(), "[I;]");
    assert_eq!(Tag::from(IntArray::new(vec![-1, 0, 1])).to_string(), "[I;-1,0,1]");
    assert_eq!(Tag::from(LongArray::new(vec![7])).to_string(), "[L;7]");
}

#[test]
fn list_form() {
    let mut list = List::new();
    list.add_byte(2);
    list.add_string("x");
    list.add_int_array(vec![1, 2]);
    assert_eq!(list.to_string(), "[2b, x, [I;1,2]]");
    assert_eq!(List::new().to_string(), "[]");
}

#[test]
fn compound_form() {
    let mut inner = Compound::new();
    inner.insert("z", 1.5_f32);

    let mut c = Compound::new();
    c.insert("a", 1);
    c.insert("b", List::from(vec![Tag::Byte(2), Tag::from("x")]));
    c.insert("c", inner);

    assert_eq!(c.to_string(), "{a=1, b=[2b, x], c={z=1.5f}}");
    assert_eq!(Compound::new().to_string(), "{}");
}
