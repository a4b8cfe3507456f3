//! Enum conversion functions

use ox_data_object::{EnumType, EnumValue, Value};

use crate::error::FailureReason;

/// Look up an enum constant by its exact, case-sensitive name.
pub fn string_to_enum(value: &str, enum_type: &EnumType) -> Result<Value, FailureReason> {
    enum_type
        .constant(value)
        .map(|constant| Value::Enum(EnumValue::new(enum_type.name(), constant)))
        .ok_or_else(|| FailureReason::UnknownEnumConstant {
            constant: value.to_string(),
        })
}
