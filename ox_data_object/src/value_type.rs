use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::value::Value;

/// The primitive-like scalar kinds. Each one exists both as a primitive
/// (never null) and as a boxed (nullable) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl Scalar {
    pub fn is_numeric(self) -> bool {
        !matches!(self, Scalar::Boolean | Scalar::Char)
    }

    pub fn is_integral(self) -> bool {
        matches!(self, Scalar::Byte | Scalar::Short | Scalar::Int | Scalar::Long)
    }

    pub fn primitive_name(self) -> &'static str {
        match self {
            Scalar::Boolean => "boolean",
            Scalar::Byte => "byte",
            Scalar::Short => "short",
            Scalar::Int => "int",
            Scalar::Long => "long",
            Scalar::Float => "float",
            Scalar::Double => "double",
            Scalar::Char => "char",
        }
    }

    pub fn boxed_name(self) -> &'static str {
        match self {
            Scalar::Boolean => "Boolean",
            Scalar::Byte => "Byte",
            Scalar::Short => "Short",
            Scalar::Int => "Integer",
            Scalar::Long => "Long",
            Scalar::Float => "Float",
            Scalar::Double => "Double",
            Scalar::Char => "Character",
        }
    }

    /// The default a primitive of this kind takes when there is no value.
    pub fn zero(self) -> Value {
        match self {
            Scalar::Boolean => Value::Boolean(false),
            Scalar::Byte => Value::Byte(0),
            Scalar::Short => Value::Short(0),
            Scalar::Int => Value::Int(0),
            Scalar::Long => Value::Long(0),
            Scalar::Float => Value::Float(0.0),
            Scalar::Double => Value::Double(0.0),
            Scalar::Char => Value::Char('\0'),
        }
    }
}

/// An enumeration type: a name plus its ordered constant names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumType {
    name: String,
    constants: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(name: &str, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    /// Case-sensitive lookup of a constant by name.
    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants.iter().find(|c| c.as_str() == name).map(String::as_str)
    }
}

/// Describes the type a value is converted to.
///
/// Container variants carry their element type so conversions can recurse.
/// Maps are always string-keyed; only the value type is described.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Unconstrained (`Object`). Every value is an instance.
    Any,
    Primitive(Scalar),
    Boxed(Scalar),
    /// Abstract number: any numeric scalar is an instance.
    Number,
    String,
    List(Box<ValueType>),
    Array(Box<ValueType>),
    Map(Box<ValueType>),
    Enum(Arc<EnumType>),
    Bean(String),
    /// Any other class, identified by name.
    Named(String),
}

impl ValueType {
    pub fn list(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    pub fn array(element: ValueType) -> Self {
        ValueType::Array(Box::new(element))
    }

    pub fn map(value: ValueType) -> Self {
        ValueType::Map(Box::new(value))
    }

    pub fn enumeration(enum_type: EnumType) -> Self {
        ValueType::Enum(Arc::new(enum_type))
    }

    pub fn bean(name: &str) -> Self {
        ValueType::Bean(name.to_string())
    }

    pub fn named(name: &str) -> Self {
        ValueType::Named(name.to_string())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, ValueType::Any)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, ValueType::Primitive(_))
    }

    pub fn is_numeric(&self) -> bool {
        match self {
            ValueType::Number => true,
            ValueType::Primitive(s) | ValueType::Boxed(s) => s.is_numeric(),
            _ => false,
        }
    }

    /// The scalar kind of a primitive or boxed type.
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            ValueType::Primitive(s) | ValueType::Boxed(s) => Some(*s),
            _ => None,
        }
    }

    /// The element type of a list or array, or the value type of a map.
    pub fn element_type(&self) -> Option<&ValueType> {
        match self {
            ValueType::List(e) | ValueType::Array(e) | ValueType::Map(e) => Some(e),
            _ => None,
        }
    }

    /// What a null converts to: the zero value for primitives, `Null` otherwise.
    pub fn null_value(&self) -> Value {
        match self {
            ValueType::Primitive(s) => s.zero(),
            _ => Value::Null,
        }
    }
}

impl From<Scalar> for ValueType {
    fn from(scalar: Scalar) -> Self {
        ValueType::Boxed(scalar)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => write!(f, "Object"),
            ValueType::Primitive(s) => write!(f, "{}", s.primitive_name()),
            ValueType::Boxed(s) => write!(f, "{}", s.boxed_name()),
            ValueType::Number => write!(f, "Number"),
            ValueType::String => write!(f, "String"),
            ValueType::List(e) => write!(f, "List<{}>", e),
            ValueType::Array(e) => write!(f, "{}[]", e),
            ValueType::Map(v) => write!(f, "Map<String,{}>", v),
            ValueType::Enum(e) => write!(f, "{}", e.name()),
            ValueType::Bean(name) | ValueType::Named(name) => write!(f, "{}", name),
        }
    }
}
