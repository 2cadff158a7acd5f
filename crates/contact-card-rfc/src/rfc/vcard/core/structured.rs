//! Structured card properties (N, ADR, X-SOCIALPROFILE).

use super::parameter::Parameters;

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// Each of the five components can hold any number of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameProperty {
    pub parameters: Parameters,
    /// Family names (surnames).
    pub family_names: Vec<String>,
    /// Given names (first names).
    pub given_names: Vec<String>,
    /// Additional names (middle names).
    pub additional_names: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub honorific_prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub honorific_suffixes: Vec<String>,
}

impl NameProperty {
    /// Number of components in an N value.
    pub const COMPONENTS: usize = 5;

    /// Creates an empty structured name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family_names: vec![family.into()],
            given_names: vec![given.into()],
            ..Self::default()
        }
    }

    /// Builds a name from its five components in N order.
    #[must_use]
    pub fn from_components(components: [Vec<String>; Self::COMPONENTS]) -> Self {
        let [family, given, additional, prefixes, suffixes] = components;
        Self {
            parameters: Parameters::new(),
            family_names: family,
            given_names: given,
            additional_names: additional,
            honorific_prefixes: prefixes,
            honorific_suffixes: suffixes,
        }
    }

    /// Returns the components in N order: family, given, additional,
    /// prefixes, suffixes.
    #[must_use]
    pub fn components(&self) -> [&[String]; Self::COMPONENTS] {
        [
            &self.family_names,
            &self.given_names,
            &self.additional_names,
            &self.honorific_prefixes,
            &self.honorific_suffixes,
        ]
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }
}

/// Postal address (ADR property, RFC 6350 §6.3.1).
///
/// Post office box and extended address are never populated and always
/// written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressProperty {
    pub parameters: Parameters,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    /// Not written to either output format.
    pub iso_country_code: String,
}

impl AddressProperty {
    /// Number of components in an ADR value.
    pub const COMPONENTS: usize = 7;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the seven ADR components: PO box, extended, street,
    /// locality, region, postal code, country.
    #[must_use]
    pub fn components(&self) -> Vec<String> {
        vec![
            String::new(),
            String::new(),
            self.street.clone(),
            self.city.clone(),
            self.state.clone(),
            self.postal_code.clone(),
            self.country.clone(),
        ]
    }

    /// Returns whether every populated field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }
}

/// Social network profile (vendor `x-socialprofile` property).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialProfileProperty {
    pub parameters: Parameters,
    pub service: String,
    pub url_string: String,
    pub user_identifier: String,
    pub username: String,
}

impl SocialProfileProperty {
    /// Number of components in a social profile value.
    pub const COMPONENTS: usize = 4;

    #[must_use]
    pub fn new(
        service: impl Into<String>,
        url_string: impl Into<String>,
        user_identifier: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            parameters: Parameters::new(),
            service: service.into(),
            url_string: url_string.into(),
            user_identifier: user_identifier.into(),
            username: username.into(),
        }
    }

    /// Returns the four components, empty ones included.
    #[must_use]
    pub fn components(&self) -> Vec<String> {
        vec![
            self.service.clone(),
            self.url_string.clone(),
            self.user_identifier.clone(),
            self.username.clone(),
        ]
    }
}
