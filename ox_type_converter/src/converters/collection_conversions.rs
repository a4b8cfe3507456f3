//! Map, list and array conversions
//!
//! Elements are converted one by one through the full rule set. The first
//! element that fails aborts the whole conversion.

use log::trace;
use ox_data_object::{ObjectMap, Value, ValueType};

use super::{fail, TypeConverter};
use crate::error::{ConversionError, FailureReason};

impl TypeConverter {
    /// Convert a map or bean to an ordered map, converting each value to `value_type`.
    pub(crate) fn to_map(&self, value: &Value, target: &ValueType, value_type: &ValueType) -> Result<Value, ConversionError> {
        let source = match value {
            Value::Map(m) => m,
            Value::Bean(b) => b.attributes(),
            _ => return Err(fail(value, target, FailureReason::UnconvertibleType)),
        };
        trace!("Converting {} map entries to '{}'", source.len(), value_type);
        let mut converted = ObjectMap::with_capacity(source.len());
        for (key, entry) in source.iter() {
            let entry = self
                .convert_inner(None, entry, value_type)
                .map_err(|e| e.at_key(key))?;
            converted.insert(key.as_str(), entry);
        }
        Ok(Value::Map(converted))
    }

    /// Convert a list or array element by element, keeping order and duplicates.
    pub(crate) fn to_list(&self, value: &Value, target: &ValueType, element: &ValueType, as_array: bool) -> Result<Value, ConversionError> {
        let items = value
            .as_slice()
            .ok_or_else(|| fail(value, target, FailureReason::UnconvertibleType))?;
        trace!("Converting {} elements to '{}'", items.len(), element);
        let converted = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.convert_inner(None, item, element).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(if as_array {
            Value::Array(converted)
        } else {
            Value::List(converted)
        })
    }
}
