//! Soft decode anomalies and the policy applied to them.

use std::fmt;

use contact_card_core::config::{AnomalyPolicy, DecodeConfig, DuplicatePolicy};

/// What went wrong in a property that was decoded anyway (or skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    /// N value did not have five components; the name is left unset.
    NameComponentCount(usize),
    /// ADR value did not have seven components; an empty address is kept.
    AddressComponentCount(usize),
    /// A parameter value was neither a string nor an array, or an array
    /// element was not a string, number or boolean.
    ParameterShape { parameter: String, found: String },
    /// A structured component was neither a string nor an array of strings.
    ComponentShape { found: String },
    /// A singular property appeared again.
    DuplicateProperty,
    /// The value-type tag is not a known jCard type.
    UnknownValueType(String),
    /// The tuple is not `[name, parameters, type, value...]`; it is skipped.
    MalformedProperty(String),
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameComponentCount(n) => write!(f, "expected 5 name components, found {n}"),
            Self::AddressComponentCount(n) => {
                write!(f, "expected 7 address components, found {n}")
            }
            Self::ParameterShape { parameter, found } => {
                write!(f, "parameter {parameter} has unsupported JSON type {found}")
            }
            Self::ComponentShape { found } => {
                write!(f, "component has unsupported JSON type {found}")
            }
            Self::DuplicateProperty => write!(f, "duplicate singular property"),
            Self::UnknownValueType(tag) => write!(f, "unknown value type {tag}"),
            Self::MalformedProperty(reason) => write!(f, "malformed property: {reason}"),
        }
    }
}

/// One swallowed anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// Zero-based index of the property tuple.
    pub index: usize,
    /// Property name, or empty when the tuple had none.
    pub property: String,
    pub kind: AnomalyKind,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property.is_empty() {
            write!(f, "property {}: {}", self.index, self.kind)
        } else {
            write!(f, "property {} ({}): {}", self.index, self.property, self.kind)
        }
    }
}

/// Collects the anomalies of one decode.
#[derive(Debug, Clone, Default)]
pub struct DecodeDiagnostics {
    pub anomalies: Vec<Anomaly>,
    /// Names of unknown properties that were skipped, in source order.
    pub skipped: Vec<String>,
}

impl DecodeDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }

    /// Returns whether an anomaly matching the predicate was recorded.
    pub fn has(&self, predicate: impl Fn(&AnomalyKind) -> bool) -> bool {
        self.anomalies.iter().any(|a| predicate(&a.kind))
    }
}

/// Decode behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub anomalies: AnomalyPolicy,
    pub duplicates: DuplicatePolicy,
}

impl DecodeOptions {
    /// Options that fail on the first anomaly or duplicate.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            anomalies: AnomalyPolicy::Strict,
            duplicates: DuplicatePolicy::Reject,
        }
    }
}

impl From<&DecodeConfig> for DecodeOptions {
    fn from(config: &DecodeConfig) -> Self {
        Self {
            anomalies: config.anomalies,
            duplicates: config.duplicates,
        }
    }
}
