//! jCard decode error types.

use std::fmt;

/// Result type for jCard decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// An error that occurred during jCard decoding.
#[derive(Debug, Clone)]
pub struct DecodeError {
    /// The kind of error.
    pub kind: DecodeErrorKind,
    /// Zero-based index of the offending property tuple, if any.
    pub property: Option<usize>,
    /// Additional context or message.
    pub message: String,
}

impl DecodeError {
    /// Creates a new decode error.
    #[must_use]
    pub fn new(kind: DecodeErrorKind, property: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            property,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    #[must_use]
    pub fn invalid_format(property: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidFormat, property, message)
    }

    /// Creates an invalid value type error.
    #[must_use]
    pub fn invalid_value_type(property: usize, expected: &str, found: &str) -> Self {
        Self::new(
            DecodeErrorKind::InvalidValueType,
            Some(property),
            format!("expected value type {expected}, found {found}"),
        )
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(property: usize, message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidValue, Some(property), message)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property {
            Some(index) => write!(f, "property {index}: {}: {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for DecodeError {}

/// The kind of decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The document or a property does not have the jCard shape.
    InvalidFormat,
    /// A property declares a value type that is not accepted.
    InvalidValueType,
    /// A property value could not be parsed.
    InvalidValue,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid format"),
            Self::InvalidValueType => write!(f, "invalid value type"),
            Self::InvalidValue => write!(f, "invalid value"),
        }
    }
}
