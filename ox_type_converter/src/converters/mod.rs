//! Type conversion rules
//!
//! `TypeConverter::convert` applies these rules in a fixed order, first match wins:
//!
//! 1. identity (the value already is an instance of the target, or the target is `Any`)
//! 2. null handling (zero for primitives, null otherwise)
//! 3. registered transform, transformed form to normal type
//! 4. registered transform, normal type to transformed form
//! 5. numeric and other primitive-like targets, from numbers, booleans and strings
//! 6. maps, from maps and beans
//! 7. lists and arrays, from lists and arrays, element by element
//! 8. enums, from constant names
//! 9. beans, from maps
//! 10. strings, from anything
//! 11. types with string factories, from strings
//!
//! Anything else fails with `unconvertible-type`. Rules 5 to 11 only ever apply
//! to their own kind of target, so the order among them follows from the
//! target type and the shape of the input.

pub mod bean_conversions;
pub mod boolean_conversions;
pub mod collection_conversions;
pub mod enum_conversions;
pub mod generic_conversions;
pub mod numeric_conversions;
pub mod string_conversions;

pub use boolean_conversions::*;
pub use enum_conversions::*;
pub use generic_conversions::FromValue;
pub use numeric_conversions::*;
pub use string_conversions::*;

use std::sync::Arc;

use log::{debug, trace};
use ox_data_object::{Scalar, Value, ValueType};

use crate::bean_metadata::{BeanMetadataProvider, StaticBeanMetadata};
use crate::config::ConverterConfig;
use crate::error::{ConversionError, FailureReason};
use crate::registry::TransformRegistry;

/// Converts values to requested types.
///
/// Holds an immutable transform registry and bean metadata provider; both are
/// shared behind `Arc`, so one converter can serve many threads.
pub struct TypeConverter {
    config: ConverterConfig,
    registry: Arc<TransformRegistry>,
    beans: Arc<dyn BeanMetadataProvider>,
}

impl TypeConverter {
    pub fn new(config: ConverterConfig, registry: Arc<TransformRegistry>, beans: Arc<dyn BeanMetadataProvider>) -> Self {
        Self { config, registry, beans }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Convert `value` to `target`.
    pub fn convert(&self, value: &Value, target: &ValueType) -> Result<Value, ConversionError> {
        self.convert_member(None, value, target)
    }

    /// Convert `value` to `target`, where `target` may be a member type that
    /// has to be constructed with the enclosing instance `outer`.
    pub fn convert_member(&self, outer: Option<&Value>, value: &Value, target: &ValueType) -> Result<Value, ConversionError> {
        let result = self.convert_inner(outer, value, target);
        if let Err(e) = &result {
            debug!("{}", e);
        }
        result
    }

    pub(crate) fn convert_inner(&self, outer: Option<&Value>, value: &Value, target: &ValueType) -> Result<Value, ConversionError> {
        if value.is_instance_of(target) {
            trace!("'{}' is already an instance of '{}'", value.type_name(), target);
            return Ok(value.clone());
        }

        if value.is_null() {
            return Ok(target.null_value());
        }

        if let Some(transform) = self.registry.find_by_normal(target) {
            if value.is_instance_of(transform.transformed_type()) {
                trace!("Transforming '{}' back to '{}'", value.type_name(), target);
                return transform
                    .from_transformed(value)
                    .map_err(|message| fail(value, target, FailureReason::InvocationFailed { message }));
            }
        }

        if let Some(transform) = self.registry.find_reverse(target, value) {
            trace!("Transforming '{}' to '{}'", value.type_name(), target);
            return transform
                .to_transformed(value)
                .map_err(|message| fail(value, target, FailureReason::InvocationFailed { message }));
        }

        match target {
            ValueType::Any => Ok(value.clone()),
            ValueType::Primitive(scalar) | ValueType::Boxed(scalar) => self.to_scalar(value, target, *scalar),
            ValueType::Number => self.to_number(value, target),
            ValueType::Map(value_type) => self.to_map(value, target, value_type),
            ValueType::List(element) => self.to_list(value, target, element, false),
            ValueType::Array(element) => self.to_list(value, target, element, true),
            ValueType::Enum(enum_type) => match value {
                Value::String(s) => string_to_enum(s, enum_type).map_err(|reason| fail(value, target, reason)),
                _ => Err(fail(value, target, FailureReason::UnconvertibleType)),
            },
            ValueType::Bean(name) => match value {
                Value::Map(_) => self.to_bean(outer, value, target, name),
                Value::String(s) => self.from_string_constructors(s, target, name),
                _ => Err(fail(value, target, FailureReason::UnconvertibleType)),
            },
            ValueType::String => Ok(Value::String(value_to_string(value))),
            ValueType::Named(name) => match value {
                Value::String(s) => self.from_string_constructors(s, target, name),
                _ => Err(fail(value, target, FailureReason::UnconvertibleType)),
            },
        }
    }

    fn to_scalar(&self, value: &Value, target: &ValueType, scalar: Scalar) -> Result<Value, ConversionError> {
        match value {
            Value::String(s) if s.is_empty() && self.config.empty_string_as_null => Ok(target.null_value()),
            Value::String(s) => string_to_scalar(s, scalar).map_err(|reason| fail(value, target, reason)),
            other => as_numeric(other)
                .and_then(|n| numeric_to_scalar(n, scalar))
                .ok_or_else(|| fail(value, target, FailureReason::UnconvertibleType)),
        }
    }

    fn to_number(&self, value: &Value, target: &ValueType) -> Result<Value, ConversionError> {
        match value {
            Value::String(s) if s.is_empty() && self.config.empty_string_as_null => Ok(Value::Null),
            Value::String(s) => string_to_number(s).map_err(|reason| fail(value, target, reason)),
            Value::Boolean(b) => Ok(Value::Int(boolean_to_integer(*b) as i32)),
            _ => Err(fail(value, target, FailureReason::UnconvertibleType)),
        }
    }
}

impl Default for TypeConverter {
    /// Default settings, no transforms and no bean metadata.
    fn default() -> Self {
        Self::new(
            ConverterConfig::default(),
            Arc::new(TransformRegistry::empty()),
            Arc::new(StaticBeanMetadata::new()),
        )
    }
}

pub(crate) fn fail(value: &Value, target: &ValueType, reason: FailureReason) -> ConversionError {
    ConversionError::new(value.type_name(), target.to_string(), reason)
}
