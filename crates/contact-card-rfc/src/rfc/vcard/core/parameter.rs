//! Property parameters (RFC 6350 §5, RFC 7095 §3.4).

use std::collections::BTreeMap;

/// Parameter names used by the supported properties.
pub mod names {
    pub const TYPE: &str = "type";
    pub const PREF: &str = "pref";
}

/// The parameters of one property.
///
/// Maps a parameter name (normalized to lowercase) to its ordered values.
/// A name may be present with zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: BTreeMap<String, Vec<String>>,
}

impl Parameters {
    /// Creates an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping holding a single TYPE parameter.
    #[must_use]
    pub fn with_types(types: &[TypeValue]) -> Self {
        let mut params = Self::new();
        if !types.is_empty() {
            params.insert(
                names::TYPE,
                types.iter().map(|t| t.as_str().to_string()).collect(),
            );
        }
        params
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets the values of a parameter, replacing any previous values.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.entries
            .insert(name.into().to_ascii_lowercase(), values);
    }

    /// Appends one value to a parameter, creating it if needed.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// Returns the values of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// Returns the TYPE values, or an empty slice.
    #[must_use]
    pub fn types(&self) -> &[String] {
        self.get(names::TYPE).unwrap_or_default()
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, name: &str, value: &str) -> bool {
        self.get(name)
            .is_some_and(|values| values.iter().any(|v| v.eq_ignore_ascii_case(value)))
    }

    /// Returns whether TYPE contains the given value.
    #[must_use]
    pub fn has_type(&self, value: TypeValue) -> bool {
        self.has_value(names::TYPE, value.as_str())
    }

    /// Iterates parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, values) in iter {
            params.insert(name, values);
        }
        params
    }
}

/// TYPE parameter values understood by the contact mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeValue {
    Home,
    Work,
    Fax,
    Other,
    Mobile,
    Voice,
    Pager,
    ICloud,
    IPhone,
    Twitter,
    Facebook,
    LinkedIn,
}

impl TypeValue {
    /// Parses from the parameter value (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "work" => Some(Self::Work),
            "fax" => Some(Self::Fax),
            "other" => Some(Self::Other),
            "cell" => Some(Self::Mobile),
            "voice" => Some(Self::Voice),
            "pager" => Some(Self::Pager),
            "x-icloud" => Some(Self::ICloud),
            "x-iphone" => Some(Self::IPhone),
            "x-twitter" => Some(Self::Twitter),
            "x-facebook" => Some(Self::Facebook),
            "x-linkedin" => Some(Self::LinkedIn),
            _ => None,
        }
    }

    /// Returns the parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Fax => "fax",
            Self::Other => "other",
            Self::Mobile => "cell",
            Self::Voice => "voice",
            Self::Pager => "pager",
            Self::ICloud => "x-icloud",
            Self::IPhone => "x-iphone",
            Self::Twitter => "x-twitter",
            Self::Facebook => "x-facebook",
            Self::LinkedIn => "x-linkedin",
        }
    }
}
