use std::fmt;

use thiserror::Error;

/// Why a conversion failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("unparseable number '{input}'")]
    UnparseableNumber { input: String },
    #[error("unparseable boolean '{input}'")]
    UnparseableBoolean { input: String },
    #[error("unknown enum constant '{constant}'")]
    UnknownEnumConstant { constant: String },
    #[error("missing constructor: {detail}")]
    MissingConstructor { detail: String },
    #[error("unassignable property '{property}'")]
    UnassignableProperty { property: String },
    #[error("invocation failed: {message}")]
    InvocationFailed { message: String },
    #[error("unconvertible type")]
    UnconvertibleType,
}

impl FailureReason {
    /// Stable kebab-case code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::UnparseableNumber { .. } => "unparseable-number",
            FailureReason::UnparseableBoolean { .. } => "unparseable-boolean",
            FailureReason::UnknownEnumConstant { .. } => "unknown-enum-constant",
            FailureReason::MissingConstructor { .. } => "missing-constructor",
            FailureReason::UnassignableProperty { .. } => "unassignable-property",
            FailureReason::InvocationFailed { .. } => "invocation-failed",
            FailureReason::UnconvertibleType => "unconvertible-type",
        }
    }
}

/// Where inside a container or bean a nested conversion failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location(Vec<String>);

impl Location {
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" at '")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 && !segment.starts_with('[') {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        f.write_str("'")
    }
}

/// A failed conversion of a value of `source_type` to `target_type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert value of type '{source_type}' to type '{target_type}'{location}: {reason}")]
pub struct ConversionError {
    pub source_type: String,
    pub target_type: String,
    pub reason: FailureReason,
    pub location: Location,
}

impl ConversionError {
    pub fn new(source_type: impl Into<String>, target_type: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            source_type: source_type.into(),
            target_type: target_type.into(),
            reason,
            location: Location::default(),
        }
    }

    /// Prefix the location with a list or array index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.location.0.insert(0, format!("[{}]", index));
        self
    }

    /// Prefix the location with a map key or bean property name.
    pub fn at_key(mut self, key: &str) -> Self {
        self.location.0.insert(0, key.to_string());
        self
    }
}
