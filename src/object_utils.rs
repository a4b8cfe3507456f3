//! Convenience helpers for converting and comparing values.
//!
//! There is no shared default converter: callers pass the `TypeConverter`
//! configured for their context.

use ox_data_object::{Value, ValueType};
use ox_type_converter::{ConversionError, TypeConverter};

/// Converts `value` to `target` with the given converter.
pub fn convert_to_type(converter: &TypeConverter, value: &Value, target: &ValueType) -> Result<Value, ConversionError> {
    converter.convert(value, target)
}

/// Converts `value` to the member type `target`, constructed within `outer`.
pub fn convert_to_member_type(
    converter: &TypeConverter,
    outer: &Value,
    value: &Value,
    target: &ValueType,
) -> Result<Value, ConversionError> {
    converter.convert_member(Some(outer), value, target)
}

/// Returns `true` if both values are null or `a` equals `b`.
///
/// Floating-point values compare by bit pattern, so `NaN` equals `NaN` and
/// `0.0` differs from `-0.0`. Lists, arrays and maps compare element-wise
/// under the same rule.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Double(x), Value::Double(y)) => float_bits_eq(*x, *y),
        (Value::Float(x), Value::Float(y)) => float_bits_eq(f64::from(*x), f64::from(*y)),
        (Value::List(x), Value::List(y)) | (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| equals(x, y))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len() && x.iter().all(|(k, v)| y.get(k).is_some_and(|w| equals(v, w)))
        }
        _ => a == b,
    }
}

fn float_bits_eq(x: f64, y: f64) -> bool {
    (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
}

/// Returns `true` for null, empty lists, arrays and maps, empty strings, and
/// anything whose string form is empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::List(items) | Value::Array(items) => items.is_empty(),
        Value::Map(m) => m.is_empty(),
        Value::String(s) => s.is_empty(),
        other => other.to_string().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ox_data_object::ObjectMap;

    #[test]
    fn test_equals_handles_nulls() {
        assert!(equals(&Value::Null, &Value::Null));
        assert!(!equals(&Value::Null, &Value::from("x")));
        assert!(!equals(&Value::from("x"), &Value::Null));
        assert!(equals(&Value::from("x"), &Value::from("x")));
        assert!(!equals(&Value::Int(1), &Value::Long(1)));
    }

    #[test]
    fn test_equals_floats_by_bits() {
        assert!(equals(&Value::Double(f64::NAN), &Value::Double(f64::NAN)));
        assert!(equals(&Value::Float(f32::NAN), &Value::Float(f32::NAN)));
        assert!(!equals(&Value::Double(0.0), &Value::Double(-0.0)));
        assert!(equals(&Value::Double(1.5), &Value::Double(1.5)));
        assert!(equals(
            &Value::List(vec![Value::Double(f64::NAN), 1.into()]),
            &Value::List(vec![Value::Double(f64::NAN), 1.into()])
        ));
        assert!(!equals(&Value::List(vec![Value::Double(f64::NAN)]), &Value::Array(vec![Value::Double(f64::NAN)])));
        assert!(equals(
            &Value::Map(ObjectMap::new().append("a", Value::Double(f64::NAN)).append("b", 2)),
            &Value::Map(ObjectMap::new().append("b", 2).append("a", Value::Double(f64::NAN)))
        ));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&Value::List(vec![])));
        assert!(is_empty(&Value::Array(vec![])));
        assert!(is_empty(&Value::from("")));
        assert!(!is_empty(&Value::List(vec![1.into()])));
        assert!(!is_empty(&Value::Int(0)));
    }
}
