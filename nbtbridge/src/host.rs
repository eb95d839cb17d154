//! The foreign interface through which the codec reaches into a running
//! server.
//!
//! The shape follows what a JVM embedding offers: classes and members are
//! looked up by name and signature once, and the handles they resolve to
//! are used for every later call. Nothing outside discovery looks anything up
//! by name.
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque reference to an object living in the host.
pub type HostObject = Arc<dyn Any + Send + Sync>;

/// A resolved class handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

/// A resolved constructor, method or field handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub u32);

/// Parameter, return and field types as the host declares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JType {
    Void,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    ByteArray,
    IntArray,
    LongArray,
    /// `java.util.List`
    List,
    /// `java.util.Map`
    Map,
    /// An instance of a class resolved earlier.
    Object(ClassId),
}

impl fmt::Display for JType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JType::Void => f.write_str("V"),
            JType::Byte => f.write_str("B"),
            JType::Short => f.write_str("S"),
            JType::Int => f.write_str("I"),
            JType::Long => f.write_str("J"),
            JType::Float => f.write_str("F"),
            JType::Double => f.write_str("D"),
            JType::String => f.write_str("Ljava/lang/String;"),
            JType::ByteArray => f.write_str("[B"),
            JType::IntArray => f.write_str("[I"),
            JType::LongArray => f.write_str("[J"),
            JType::List => f.write_str("Ljava/util/List;"),
            JType::Map => f.write_str("Ljava/util/Map;"),
            JType::Object(class) => write!(f, "L#{};", class.0),
        }
    }
}

/// A value crossing the boundary, in either direction.
#[derive(Debug, Clone)]
pub enum HostValue {
    /// The result of a method declared to return nothing.
    Void,
    Null,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    Object(HostObject),
    /// The elements of a host list, in order.
    List(Vec<HostObject>),
    /// The entries of a host map. Keys are whatever the map holds.
    Map(Vec<(HostValue, HostObject)>),
}

impl HostValue {
    /// Reads an object reference, treating `Null` as absent.
    pub fn into_object(self) -> Option<HostObject> {
        match self {
            HostValue::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// An exception raised inside the host while running a resolved member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFault(pub String);

impl std::error::Error for HostFault {}

impl fmt::Display for HostFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A running server, seen through its reflective surface.
///
/// Lookups return `None` when the class or member does not exist in the
/// running release. Calls return a [`HostFault`] when the host raises.
pub trait Host: Send + Sync {
    /// The package the server's own implementation classes live in, eg
    /// `org.bukkit.craftbukkit.v1_16_R3`.
    fn server_package(&self) -> String;

    fn find_class(&self, path: &str) -> Option<ClassId>;

    fn find_constructor(&self, class: ClassId, params: &[JType]) -> Option<MemberId>;

    fn find_method(
        &self,
        class: ClassId,
        name: &str,
        params: &[JType],
        ret: &JType,
        is_static: bool,
    ) -> Option<MemberId>;

    fn find_field(&self, class: ClassId, name: &str, ty: &JType) -> Option<MemberId>;

    fn is_instance(&self, class: ClassId, obj: &HostObject) -> bool;

    fn new_object(&self, ctor: MemberId, args: Vec<HostValue>) -> Result<HostObject, HostFault>;

    /// Invokes a method. `receiver` is `None` for static methods.
    fn invoke(
        &self,
        method: MemberId,
        receiver: Option<&HostObject>,
        args: Vec<HostValue>,
    ) -> Result<HostValue, HostFault>;

    fn get_field(&self, field: MemberId, obj: &HostObject) -> Result<HostValue, HostFault>;
}
