//! Generic conversion functions
//!
//! Typed access on top of `TypeConverter::convert`: `convert_to::<T>()` converts
//! to `T`'s value type and then unwraps the result into a Rust value.

use ox_data_object::{Scalar, Value, ValueType};

use super::TypeConverter;
use crate::error::{ConversionError, FailureReason};

/// A Rust type with a corresponding `ValueType`.
pub trait FromValue: Sized {
    fn value_type() -> ValueType;

    /// Unwrap an already converted value. `None` if it has the wrong shape.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! scalar_from_value {
    ($($t:ty => $scalar:ident),* $(,)?) => {
        $(
            impl FromValue for $t {
                fn value_type() -> ValueType {
                    ValueType::Primitive(Scalar::$scalar)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$scalar(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_from_value! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
}

impl FromValue for String {
    fn value_type() -> ValueType {
        ValueType::String
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FromValue for Value {
    fn value_type() -> ValueType {
        ValueType::Any
    }

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

/// Nullable: primitives become their boxed type, so null converts to `None`.
impl<T: FromValue> FromValue for Option<T> {
    fn value_type() -> ValueType {
        match T::value_type() {
            ValueType::Primitive(scalar) => ValueType::Boxed(scalar),
            other => other,
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::list(T::value_type())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) | Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl TypeConverter {
    /// Convert `value` to the Rust type `T`.
    pub fn convert_to<T: FromValue>(&self, value: &Value) -> Result<T, ConversionError> {
        let target = T::value_type();
        let converted = self.convert(value, &target)?;
        T::from_value(converted).ok_or_else(|| {
            ConversionError::new(value.type_name(), target.to_string(), FailureReason::UnconvertibleType)
        })
    }
}
