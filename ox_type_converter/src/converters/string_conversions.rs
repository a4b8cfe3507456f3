//! String conversion functions
//!
//! Rendering any value as a string, and building values from strings through
//! the string factories a type exposes.

use log::trace;
use ox_data_object::{Value, ValueType};

use super::{fail, TypeConverter};
use crate::error::{ConversionError, FailureReason};

/// Render a value as a string. Lists, arrays, maps and beans render as JSON text.
pub fn value_to_string(value: &Value) -> String {
    value.to_string()
}

/// Convert a single-character string to a char.
pub fn string_to_char(value: &str) -> Result<char, FailureReason> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FailureReason::UnconvertibleType),
    }
}

impl TypeConverter {
    /// Build a `target` from a string via its `from_string`, `value_of` or
    /// string constructor, whichever comes first.
    pub(crate) fn from_string_constructors(&self, value: &str, target: &ValueType, type_name: &str) -> Result<Value, ConversionError> {
        let source = Value::from(value);
        let constructors = self.beans.string_constructors(type_name).ok_or_else(|| {
            fail(
                &source,
                target,
                FailureReason::MissingConstructor {
                    detail: format!("'{}' has no string factory", type_name),
                },
            )
        })?;
        let (factory_name, factory) = constructors.resolve().ok_or_else(|| {
            fail(
                &source,
                target,
                FailureReason::MissingConstructor {
                    detail: format!("'{}' has no string factory", type_name),
                },
            )
        })?;
        trace!("Building '{}' from a string with {}", type_name, factory_name);
        factory(value).map_err(|message| fail(&source, target, FailureReason::InvocationFailed { message }))
    }
}
