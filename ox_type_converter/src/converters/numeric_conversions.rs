//! Numeric conversion functions
//!
//! This module contains all conversion functions that involve numeric types.
//! Narrowing truncates, as a cast would.

use ox_data_object::{Scalar, Value};

use super::boolean_conversions::{boolean_to_integer, numeric_to_boolean, string_to_boolean};
use super::string_conversions::string_to_char;
use crate::error::FailureReason;

/// Integral or floating-point view of a number-like value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    fn integral(self) -> i64 {
        match self {
            Numeric::Integer(i) => i,
            Numeric::Float(f) => f as i64,
        }
    }

    /// Floats saturate into `i32`. Byte and short targets wrap from this value.
    fn int32(self) -> i32 {
        match self {
            Numeric::Integer(i) => i as i32,
            Numeric::Float(f) => f as i32,
        }
    }

    fn floating(self) -> f64 {
        match self {
            Numeric::Integer(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }
}

/// Numeric view of numbers, booleans (1/0) and chars (code point).
pub fn as_numeric(value: &Value) -> Option<Numeric> {
    match *value {
        Value::Byte(n) => Some(Numeric::Integer(n.into())),
        Value::Short(n) => Some(Numeric::Integer(n.into())),
        Value::Int(n) => Some(Numeric::Integer(n.into())),
        Value::Long(n) => Some(Numeric::Integer(n)),
        Value::Float(n) => Some(Numeric::Float(n.into())),
        Value::Double(n) => Some(Numeric::Float(n)),
        Value::Boolean(b) => Some(Numeric::Integer(boolean_to_integer(b))),
        Value::Char(c) => Some(Numeric::Integer(u32::from(c).into())),
        _ => None,
    }
}

/// Convert a number to the given scalar kind.
/// Returns `None` when the number is not a valid char code point.
pub fn numeric_to_scalar(n: Numeric, scalar: Scalar) -> Option<Value> {
    let value = match scalar {
        Scalar::Byte => Value::Byte(n.int32() as i8),
        Scalar::Short => Value::Short(n.int32() as i16),
        Scalar::Int => Value::Int(n.int32()),
        Scalar::Long => Value::Long(n.integral()),
        Scalar::Float => Value::Float(n.floating() as f32),
        Scalar::Double => Value::Double(n.floating()),
        Scalar::Boolean => Value::Boolean(numeric_to_boolean(n)),
        Scalar::Char => match n {
            Numeric::Integer(i) => Value::Char(u32::try_from(i).ok().and_then(char::from_u32)?),
            Numeric::Float(_) => return None,
        },
    };
    Some(value)
}

fn unparseable(value: &str) -> FailureReason {
    FailureReason::UnparseableNumber {
        input: value.to_string(),
    }
}

/// Parse a string as the given scalar kind.
pub fn string_to_scalar(value: &str, scalar: Scalar) -> Result<Value, FailureReason> {
    match scalar {
        Scalar::Byte => value.parse::<i8>().map(Value::Byte).map_err(|_| unparseable(value)),
        Scalar::Short => value.parse::<i16>().map(Value::Short).map_err(|_| unparseable(value)),
        Scalar::Int => value.parse::<i32>().map(Value::Int).map_err(|_| unparseable(value)),
        Scalar::Long => value.parse::<i64>().map(Value::Long).map_err(|_| unparseable(value)),
        Scalar::Float => value.parse::<f32>().map(Value::Float).map_err(|_| unparseable(value)),
        Scalar::Double => value.parse::<f64>().map(Value::Double).map_err(|_| unparseable(value)),
        Scalar::Boolean => string_to_boolean(value).map(Value::Boolean),
        Scalar::Char => string_to_char(value).map(Value::Char),
    }
}

/// Parse a string as the narrowest fitting number: `Int`, then `Long`, then `Double`.
pub fn string_to_number(value: &str) -> Result<Value, FailureReason> {
    if let Ok(i) = value.parse::<i32>() {
        Ok(Value::Int(i))
    } else if let Ok(l) = value.parse::<i64>() {
        Ok(Value::Long(l))
    } else {
        value.parse::<f64>().map(Value::Double).map_err(|_| unparseable(value))
    }
}
