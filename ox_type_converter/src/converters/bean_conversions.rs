//! Bean conversions
//!
//! A map becomes a bean by constructing the bean through its metadata and
//! assigning each entry to the writable property with the same name.

use log::{debug, trace};
use ox_data_object::{Value, ValueType};

use super::{fail, TypeConverter};
use crate::error::{ConversionError, FailureReason};

impl TypeConverter {
    pub(crate) fn to_bean(&self, outer: Option<&Value>, value: &Value, target: &ValueType, type_name: &str) -> Result<Value, ConversionError> {
        let Some(entries) = value.as_map() else {
            return Err(fail(value, target, FailureReason::UnconvertibleType));
        };
        let meta = self.beans.bean_meta(type_name).ok_or_else(|| {
            fail(
                value,
                target,
                FailureReason::MissingConstructor {
                    detail: format!("no bean metadata for '{}'", type_name),
                },
            )
        })?;
        let mut bean = meta
            .instantiate(outer)
            .map_err(|reason| fail(value, target, reason))?;

        for (key, entry) in entries.iter() {
            let property = match meta.get_property(key) {
                Some(property) if property.is_writable() => property,
                _ if self.config.ignore_unknown_properties => {
                    debug!("Ignoring unknown or read-only property '{}' on '{}'", key, type_name);
                    continue;
                }
                _ => {
                    return Err(fail(
                        value,
                        target,
                        FailureReason::UnassignableProperty { property: key.clone() },
                    ))
                }
            };
            trace!("Setting '{}.{}'", type_name, key);
            let converted = self
                .convert_inner(None, entry, property.value_type())
                .map_err(|e| e.at_key(key))?;
            property.assign(&mut bean, converted).map_err(|message| {
                fail(value, target, FailureReason::InvocationFailed { message }).at_key(key)
            })?;
        }
        Ok(Value::Bean(bean))
    }
}
