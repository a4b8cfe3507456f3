//! Stock transforms for common value types.

use chrono::{DateTime, FixedOffset};
use ox_data_object::{ObjectValue, Value, ValueType};
use uuid::Uuid;

use crate::registry::Transform;

pub const DATETIME_TYPE: &str = "DateTime";
pub const UUID_TYPE: &str = "UUID";

/// `DateTime` objects wrapping `chrono::DateTime<FixedOffset>` to and from RFC 3339 strings.
pub fn datetime_rfc3339() -> Transform {
    Transform::new(
        ValueType::named(DATETIME_TYPE),
        ValueType::String,
        |value| match value {
            Value::Object(o) => o
                .downcast_ref::<DateTime<FixedOffset>>()
                .map(|dt| Value::String(dt.to_rfc3339()))
                .ok_or_else(|| format!("'{}' does not hold a date-time", o.type_name())),
            other => Err(format!("Expected a date-time, found '{}'", other.type_name())),
        },
        |value| match value {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Value::Object(ObjectValue::new(DATETIME_TYPE, dt)))
                .map_err(|e| format!("Value '{}' is not a valid RFC 3339 date-time: {}", s, e)),
            other => Err(format!("Expected a string, found '{}'", other.type_name())),
        },
    )
}

/// `UUID` objects wrapping `uuid::Uuid` to and from their hyphenated string form.
pub fn uuid() -> Transform {
    Transform::from_str_display::<Uuid>(UUID_TYPE)
}

/// Wrap a date-time as a `DateTime` object value.
pub fn datetime_value(dt: DateTime<FixedOffset>) -> Value {
    Value::Object(ObjectValue::new(DATETIME_TYPE, dt))
}

/// Wrap a UUID as a `UUID` object value.
pub fn uuid_value(id: Uuid) -> Value {
    Value::Object(ObjectValue::new(UUID_TYPE, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_round_trip() {
        let transform = datetime_rfc3339();
        let parsed = transform
            .from_transformed(&Value::from("2024-03-01T10:30:00+02:00"))
            .unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-03-01T10:30:00+02:00").unwrap();
        assert_eq!(parsed, datetime_value(expected));
        assert_eq!(
            transform.to_transformed(&parsed).unwrap(),
            Value::from("2024-03-01T10:30:00+02:00")
        );
    }

    #[test]
    fn test_datetime_rejects_garbage() {
        assert!(datetime_rfc3339().from_transformed(&Value::from("yesterday")).is_err());
    }

    #[test]
    fn test_uuid_round_trip() {
        let id = Uuid::new_v4();
        let transform = uuid();
        let text = transform.to_transformed(&uuid_value(id)).unwrap();
        assert_eq!(text, Value::String(id.to_string()));
        assert_eq!(transform.from_transformed(&text).unwrap(), uuid_value(id));
    }
}
