//! Address book contacts and their mapping to contact cards.
//!
//! [`Contact`] is the flat record an address book hands over: single name
//! parts, an organization and department, and labeled phone numbers,
//! emails, addresses and URLs. [`card_from_contact`] and
//! [`contact_from_card`] convert between it and [`ContactCard`].
//!
//! ## Example
//!
//! ```rust
//! use contact_card_rfc::rfc::contact::{Contact, ContactLabel, Labeled, card_from_contact};
//!
//! let contact = Contact {
//!     given_name: "Jane".to_string(),
//!     family_name: "Doe".to_string(),
//!     phone_numbers: vec![Labeled::new(ContactLabel::Main, "+1-555-0100")],
//!     ..Contact::default()
//! };
//!
//! let card = card_from_contact(&contact).unwrap();
//! assert_eq!(card.formatted_name(), "Jane Doe");
//! assert!(card.phone_numbers[0].parameters.has_value("pref", "1"));
//! ```
//!
//! [`ContactCard`]: crate::rfc::vcard::core::ContactCard

mod label;
mod mapping;

pub use label::{ContactLabel, social_service_type};
pub use mapping::{card_from_contact, contact_from_card};

/// Whether a contact is a person or an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactType {
    #[default]
    Person,
    Organization,
}

/// A value with an optional address book label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled<T> {
    pub label: Option<ContactLabel>,
    pub value: T,
}

impl<T> Labeled<T> {
    #[must_use]
    pub fn new(label: ContactLabel, value: impl Into<T>) -> Self {
        Self {
            label: Some(label),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn unlabeled(value: impl Into<T>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub iso_country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialProfile {
    /// Service name as the address book reports it, e.g. `Twitter`.
    pub service: String,
    pub url_string: String,
    pub user_identifier: String,
    pub username: String,
}

/// Birthday date components; the year may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayComponents {
    pub year: Option<i32>,
    pub month: u32,
    pub day: u32,
}

/// An address book contact.
///
/// Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub contact_type: ContactType,
    pub name_prefix: String,
    pub given_name: String,
    pub middle_name: String,
    pub family_name: String,
    pub name_suffix: String,
    pub nickname: String,
    pub organization_name: String,
    pub department_name: String,
    pub job_title: String,
    /// Display name; composed from the name parts when absent.
    pub formatted_name: Option<String>,
    pub birthday: Option<BirthdayComponents>,
    pub phone_numbers: Vec<Labeled<String>>,
    pub email_addresses: Vec<Labeled<String>>,
    pub postal_addresses: Vec<Labeled<PostalAddress>>,
    pub url_addresses: Vec<Labeled<String>>,
    pub social_profiles: Vec<SocialProfile>,
}

impl Contact {
    /// Returns the display name: the explicit one, else the name parts in
    /// reading order, else the organization name.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.formatted_name.as_ref().filter(|n| !n.is_empty()) {
            return Some(name.clone());
        }

        let parts = [
            self.name_prefix.as_str(),
            self.given_name.as_str(),
            self.middle_name.as_str(),
            self.family_name.as_str(),
            self.name_suffix.as_str(),
        ];
        let composed = parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !composed.is_empty() {
            return Some(composed);
        }
        if self.organization_name.is_empty() {
            None
        } else {
            Some(self.organization_name.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_explicit() {
        let contact = Contact {
            formatted_name: Some("J. Doe".to_string()),
            given_name: "John".to_string(),
            ..Contact::default()
        };
        assert_eq!(contact.display_name().as_deref(), Some("J. Doe"));
    }

    #[test]
    fn display_name_composes_parts() {
        let contact = Contact {
            name_prefix: "Dr.".to_string(),
            given_name: "John".to_string(),
            family_name: "Stevenson".to_string(),
            name_suffix: "Jr.".to_string(),
            ..Contact::default()
        };
        assert_eq!(contact.display_name().as_deref(), Some("Dr. John Stevenson Jr."));
    }

    #[test]
    fn display_name_falls_back_to_organization() {
        let contact = Contact {
            contact_type: ContactType::Organization,
            organization_name: "Viagenie".to_string(),
            ..Contact::default()
        };
        assert_eq!(contact.display_name().as_deref(), Some("Viagenie"));
        assert_eq!(Contact::default().display_name(), None);
    }
}
