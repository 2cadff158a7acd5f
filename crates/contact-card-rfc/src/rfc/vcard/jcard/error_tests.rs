//! Tests for jCard decode errors.

use super::error::{DecodeError, DecodeErrorKind};

#[test]
fn error_new() {
    let err = DecodeError::new(DecodeErrorKind::InvalidFormat, Some(5), "test message");
    assert_eq!(err.property, Some(5));
    assert_eq!(err.kind, DecodeErrorKind::InvalidFormat);
    assert_eq!(err.message, "test message");
}

#[test]
fn error_invalid_value_type() {
    let err = DecodeError::invalid_value_type(3, "date", "date-time");
    assert_eq!(err.property, Some(3));
    assert_eq!(err.kind, DecodeErrorKind::InvalidValueType);
    assert!(err.message.contains("expected value type date"));
    assert!(err.message.contains("found date-time"));
}

#[test]
fn error_invalid_value() {
    let err = DecodeError::invalid_value(7, "bad birthday");
    assert_eq!(err.kind, DecodeErrorKind::InvalidValue);
    assert_eq!(err.message, "bad birthday");
}

#[test]
fn error_display_with_property() {
    let err = DecodeError::invalid_format(Some(12), "expected 4 components");
    let displayed = format!("{err}");
    assert!(displayed.contains("property 12"));
    assert!(displayed.contains("invalid format"));
    assert!(displayed.contains("expected 4 components"));
}

#[test]
fn error_display_document_level() {
    let err = DecodeError::invalid_format(None, "missing vcard signature");
    assert_eq!(format!("{err}"), "invalid format: missing vcard signature");
}

#[test]
fn error_kind_display() {
    assert_eq!(
        format!("{}", DecodeErrorKind::InvalidValueType),
        "invalid value type"
    );
    assert_eq!(format!("{}", DecodeErrorKind::InvalidValue), "invalid value");
}
