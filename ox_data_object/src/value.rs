use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::generic_data_object::GenericDataObject;
use crate::object_map::ObjectMap;
use crate::value_type::{Scalar, ValueType};

type AnyRef = dyn Any + Send + Sync;

/// A user-defined value carried opaquely under a type name.
///
/// Equality and string rendering dispatch to the wrapped type.
#[derive(Clone)]
pub struct ObjectValue {
    type_name: String,
    inner: Arc<dyn Any + Send + Sync>,
    eq_fn: fn(&AnyRef, &AnyRef) -> bool,
    display_fn: fn(&AnyRef, &mut fmt::Formatter<'_>) -> fmt::Result,
}

fn eq_as<T: Any + PartialEq>(a: &AnyRef, b: &AnyRef) -> bool {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn display_as<T: Any + fmt::Display>(v: &AnyRef, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match v.downcast_ref::<T>() {
        Some(v) => v.fmt(f),
        None => Err(fmt::Error),
    }
}

impl ObjectValue {
    pub fn new<T>(type_name: &str, value: T) -> Self
    where
        T: Any + Send + Sync + PartialEq + fmt::Display,
    {
        Self {
            type_name: type_name.to_string(),
            inner: Arc::new(value),
            eq_fn: eq_as::<T>,
            display_fn: display_as::<T>,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && (self.eq_fn)(&*self.inner, &*other.inner)
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.display_fn)(&*self.inner, f)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name, self)
    }
}

/// A constant of an enumeration type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    type_name: String,
    constant: String,
}

impl EnumValue {
    pub fn new(type_name: &str, constant: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            constant: constant.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn constant(&self) -> &str {
        &self.constant
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.constant)
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),
    List(Vec<Value>),
    Array(Vec<Value>),
    Map(ObjectMap),
    Enum(EnumValue),
    Bean(GenericDataObject),
    Object(ObjectValue),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_number(&self) -> bool {
        self.scalar().is_some_and(Scalar::is_numeric)
    }

    /// The scalar kind of a primitive-like value.
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            Value::Boolean(_) => Some(Scalar::Boolean),
            Value::Byte(_) => Some(Scalar::Byte),
            Value::Short(_) => Some(Scalar::Short),
            Value::Int(_) => Some(Scalar::Int),
            Value::Long(_) => Some(Scalar::Long),
            Value::Float(_) => Some(Scalar::Float),
            Value::Double(_) => Some(Scalar::Double),
            Value::Char(_) => Some(Scalar::Char),
            _ => None,
        }
    }

    /// A short name for the runtime type of this value, used in error reports.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::String(_) => "String".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Array(_) => "Object[]".to_string(),
            Value::Map(_) => "Map".to_string(),
            Value::Enum(e) => e.type_name().to_string(),
            Value::Bean(b) => b.type_name().to_string(),
            Value::Object(o) => o.type_name().to_string(),
            other => other
                .scalar()
                .map(|s| s.boxed_name().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a list or array.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ObjectMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Whether this value already satisfies `value_type` without conversion.
    ///
    /// Containers are instances only if every element is an instance of the
    /// declared element type. `Null` is never an instance of anything but `Any`.
    pub fn is_instance_of(&self, value_type: &ValueType) -> bool {
        match (value_type, self) {
            (ValueType::Any, _) => true,
            (_, Value::Null) => false,
            (ValueType::Primitive(s) | ValueType::Boxed(s), v) => v.scalar() == Some(*s),
            (ValueType::Number, v) => v.is_number(),
            (ValueType::String, Value::String(_)) => true,
            (ValueType::List(e), Value::List(items)) | (ValueType::Array(e), Value::Array(items)) => {
                items.iter().all(|i| i.is_instance_of(e))
            }
            (ValueType::Map(e), Value::Map(m)) => m.values().all(|v| v.is_instance_of(e)),
            (ValueType::Enum(t), Value::Enum(v)) => t.name() == v.type_name(),
            (ValueType::Bean(name), Value::Bean(b)) => name == b.type_name(),
            (ValueType::Named(name), Value::Object(o)) => name == o.type_name(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => b.fmt(f),
            Value::Byte(n) => n.fmt(f),
            Value::Short(n) => n.fmt(f),
            Value::Int(n) => n.fmt(f),
            Value::Long(n) => n.fmt(f),
            Value::Float(n) => n.fmt(f),
            Value::Double(n) => n.fmt(f),
            Value::Char(c) => c.fmt(f),
            Value::String(s) => f.write_str(s),
            Value::Enum(e) => e.fmt(f),
            Value::Object(o) => o.fmt(f),
            Value::List(_) | Value::Array(_) | Value::Map(_) | Value::Bean(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Byte(n) => serializer.serialize_i8(*n),
            Value::Short(n) => serializer.serialize_i16(*n),
            Value::Int(n) => serializer.serialize_i32(*n),
            Value::Long(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f32(*n),
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) | Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(m) => m.serialize(serializer),
            Value::Bean(b) => b.serialize(serializer),
            Value::Enum(e) => serializer.serialize_str(e.constant()),
            Value::Object(o) => serializer.collect_str(o),
        }
    }
}

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
    String => String,
    Vec<Value> => List,
    ObjectMap => Map,
    EnumValue => Enum,
    GenericDataObject => Bean,
    ObjectValue => Object,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Builds a value from parsed JSON. Integers become `Int` when they fit,
/// `Long` otherwise; other numbers become `Double`. Object keys keep their
/// document order.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i32::try_from(i).map(Value::Int).unwrap_or(Value::Long(i))
                } else {
                    n.as_f64().map(Value::Double).unwrap_or(Value::Null)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(m) => {
                Value::Map(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl fmt::Display for Point {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{},{}", self.x, self.y)
        }
    }

    #[test]
    fn test_object_value_equality_and_display() {
        let a = ObjectValue::new("Point", Point { x: 1, y: 2 });
        let b = ObjectValue::new("Point", Point { x: 1, y: 2 });
        let c = ObjectValue::new("Point", Point { x: 2, y: 1 });
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "1,2");
        assert_eq!(a.downcast_ref::<Point>(), Some(&Point { x: 1, y: 2 }));
    }

    #[test]
    fn test_is_instance_of_scalars() {
        assert!(Value::Int(1).is_instance_of(&ValueType::Primitive(Scalar::Int)));
        assert!(Value::Int(1).is_instance_of(&ValueType::Boxed(Scalar::Int)));
        assert!(Value::Int(1).is_instance_of(&ValueType::Number));
        assert!(!Value::Int(1).is_instance_of(&ValueType::Boxed(Scalar::Long)));
        assert!(!Value::Null.is_instance_of(&ValueType::String));
        assert!(Value::Null.is_instance_of(&ValueType::Any));
    }

    #[test]
    fn test_is_instance_of_containers_checks_elements() {
        let strings = Value::List(vec!["a".into(), "b".into()]);
        assert!(strings.is_instance_of(&ValueType::list(ValueType::String)));
        assert!(!strings.is_instance_of(&ValueType::list(ValueType::Boxed(Scalar::Int))));
        assert!(!strings.is_instance_of(&ValueType::array(ValueType::String)));
    }

    #[test]
    fn test_display_renders_containers_as_json() {
        let list = Value::List(vec![1.into(), "two".into(), Value::Null]);
        assert_eq!(list.to_string(), r#"[1,"two",null]"#);
        let map = Value::Map(
            ObjectMap::new()
                .append("b", 1)
                .append("a", Value::Array(vec![true.into()])),
        );
        assert_eq!(map.to_string(), r#"{"b":1,"a":[true]}"#);
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from(json!(5)), Value::Int(5));
        assert_eq!(Value::from(json!(5_000_000_000_i64)), Value::Long(5_000_000_000));
        assert_eq!(Value::from(json!(1.5)), Value::Double(1.5));
    }

    #[test]
    fn test_from_json_keeps_document_order() {
        let parsed: serde_json::Value = serde_json::from_str(r#"{"b":1,"a":2,"c":{"z":0,"y":1}}"#).unwrap();
        let value = Value::from(parsed);
        let map = value.as_map().unwrap();
        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), vec!["b", "a", "c"]);
        let Some(Value::Map(inner)) = map.get("c") else {
            panic!("expected a nested map");
        };
        assert_eq!(inner.keys().map(String::as_str).collect::<Vec<_>>(), vec!["z", "y"]);
        assert_eq!(value.to_string(), r#"{"b":1,"a":2,"c":{"z":0,"y":1}}"#);
    }
}
