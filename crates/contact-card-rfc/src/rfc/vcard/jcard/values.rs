//! jCard value helpers.

use serde_json::Value;

use super::diagnostics::AnomalyKind;
use super::error::{DecodeError, DecodeResult};
use crate::rfc::vcard::core::{BirthdayProperty, Parameters};

/// Returns the JSON type name of a value, for diagnostics.
#[must_use]
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalizes a structured component to its values.
///
/// A non-empty string is one value, `""` is none, an array holds one
/// string per value.
///
/// ## Errors
/// Returns the JSON type name of the offending value when the component is
/// neither a string nor an array of strings.
pub fn component_values(value: &Value) -> Result<Vec<String>, &'static str> {
    match value {
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(json_type(other)),
            })
            .collect(),
        other => Err(json_type(other)),
    }
}

/// Normalizes a component to a single string; array values are joined
/// with `", "`.
///
/// ## Errors
/// Same as [`component_values`].
pub fn component_text(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => component_values(other).map(|values| values.join(", ")),
    }
}

/// Extracts a jCard parameter object.
///
/// An empty object stands for a parameter with no values. Parameters whose
/// value has any other shape are kept with no values and reported.
#[must_use]
pub fn extract_parameters(value: &Value) -> (Parameters, Vec<AnomalyKind>) {
    let mut params = Parameters::new();
    let mut anomalies = Vec::new();

    let Value::Object(map) = value else {
        anomalies.push(AnomalyKind::ParameterShape {
            parameter: String::new(),
            found: json_type(value).to_string(),
        });
        return (params, anomalies);
    };

    for (name, raw) in map {
        let values = match raw {
            Value::String(s) if s.is_empty() => Vec::new(),
            Value::String(s) => vec![s.clone()],
            Value::Object(o) if o.is_empty() => Vec::new(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    other => {
                        anomalies.push(AnomalyKind::ParameterShape {
                            parameter: name.clone(),
                            found: format!("{} in array", json_type(other)),
                        });
                        None
                    }
                })
                .collect(),
            other => {
                anomalies.push(AnomalyKind::ParameterShape {
                    parameter: name.clone(),
                    found: json_type(other).to_string(),
                });
                Vec::new()
            }
        };
        params.insert(name.as_str(), values);
    }

    (params, anomalies)
}

/// Parses a BDAY date string.
///
/// Accepts `--MM-DD` and `--MMDD` (no year), `YYYY-MM-DD` and `YYYYMMDD`.
///
/// ## Errors
/// Returns an invalid value error for any other shape or for a date that
/// does not exist.
pub fn parse_birthday(value: &str, index: usize) -> DecodeResult<BirthdayProperty> {
    let invalid = || DecodeError::invalid_value(index, format!("invalid birthday: {value:?}"));

    let (year, rest) = match value.strip_prefix("--") {
        Some(rest) => (None, rest),
        None => {
            let year = value.get(..4).ok_or_else(invalid)?;
            let rest = value.get(4..).ok_or_else(invalid)?;
            let rest = rest.strip_prefix('-').unwrap_or(rest);
            (Some(i32::from(parse_digits(year).ok_or_else(invalid)?)), rest)
        }
    };

    let (month, day) = match rest.len() {
        4 => (rest.get(..2), rest.get(2..)),
        5 if rest.as_bytes()[2] == b'-' => (rest.get(..2), rest.get(3..)),
        _ => return Err(invalid()),
    };
    let month = u32::from(month.and_then(parse_digits).ok_or_else(invalid)?);
    let day = u32::from(day.and_then(parse_digits).ok_or_else(invalid)?);

    BirthdayProperty::try_new(year, month, day).map_err(|e| {
        tracing::warn!(error = %e, "Birthday is not a calendar date");
        invalid()
    })
}

/// Parses an all-ASCII-digit string.
fn parse_digits(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
