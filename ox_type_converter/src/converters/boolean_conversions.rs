//! Boolean conversion functions
//!
//! This module contains all conversion functions that involve boolean types.

use super::numeric_conversions::Numeric;
use crate::error::FailureReason;

/// Convert boolean to integer
pub fn boolean_to_integer(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Convert a number to boolean: anything but zero is true.
pub fn numeric_to_boolean(value: Numeric) -> bool {
    match value {
        Numeric::Integer(i) => i != 0,
        Numeric::Float(f) => f != 0.0,
    }
}

/// Convert string to boolean. Accepts `true` and `false` in any ASCII case.
pub fn string_to_boolean(value: &str) -> Result<bool, FailureReason> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FailureReason::UnparseableBoolean {
            input: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_to_integer() {
        assert_eq!(boolean_to_integer(true), 1);
        assert_eq!(boolean_to_integer(false), 0);
    }

    #[test]
    fn test_numeric_to_boolean() {
        assert!(numeric_to_boolean(Numeric::Integer(5)));
        assert!(numeric_to_boolean(Numeric::Integer(-5)));
        assert!(!numeric_to_boolean(Numeric::Integer(0)));
        assert!(numeric_to_boolean(Numeric::Float(0.5)));
        assert!(!numeric_to_boolean(Numeric::Float(0.0)));
    }

    #[test]
    fn test_string_to_boolean() {
        assert_eq!(string_to_boolean("true"), Ok(true));
        assert_eq!(string_to_boolean("FALSE"), Ok(false));
        assert_eq!(
            string_to_boolean("yes"),
            Err(FailureReason::UnparseableBoolean { input: "yes".to_string() })
        );
    }
}
