//! The contact card aggregate.

use super::datetime::BirthdayProperty;
use super::property::{
    EmailProperty, KindProperty, Property, TelephoneProperty, TextListProperty, TextProperty,
    UrlProperty, VendorProperty,
};
use super::structured::{AddressProperty, NameProperty, SocialProfileProperty};
use crate::error::RfcResult;
use crate::rfc::vcard::build;
use crate::rfc::vcard::jcard::{self, DecodeResult};

/// The only vCard version this model produces.
pub const CARD_VERSION: &str = "4.0";

/// A single contact record.
///
/// VERSION and FN are always present; the other singular properties are
/// optional and the repeatable ones may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard {
    pub version: TextProperty,
    pub formatted_name: TextProperty,
    pub kind: Option<KindProperty>,
    pub name: Option<NameProperty>,
    pub nickname: Option<TextListProperty>,
    pub birthday: Option<BirthdayProperty>,
    pub organization: Option<TextListProperty>,
    pub title: Option<TextProperty>,
    pub phone_numbers: Vec<TelephoneProperty>,
    pub email_addresses: Vec<EmailProperty>,
    pub postal_addresses: Vec<AddressProperty>,
    pub url_addresses: Vec<UrlProperty>,
    pub social_profiles: Vec<SocialProfileProperty>,
    pub vendor_properties: Vec<VendorProperty>,
}

impl ContactCard {
    /// Creates an empty card with version 4.0 and an empty formatted name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: TextProperty::new(CARD_VERSION),
            formatted_name: TextProperty::default(),
            kind: None,
            name: None,
            nickname: None,
            birthday: None,
            organization: None,
            title: None,
            phone_numbers: Vec::new(),
            email_addresses: Vec::new(),
            postal_addresses: Vec::new(),
            url_addresses: Vec::new(),
            social_profiles: Vec::new(),
            vendor_properties: Vec::new(),
        }
    }

    /// Returns the FN value.
    #[must_use]
    pub fn formatted_name(&self) -> &str {
        &self.formatted_name.value
    }

    /// Returns all properties in jCard output order.
    ///
    /// VERSION, FN, then the optional singular properties, then phones,
    /// emails, addresses, URLs, social profiles and vendor properties in
    /// insertion order.
    #[must_use]
    pub fn properties(&self) -> Vec<Property<'_>> {
        let mut props = vec![
            Property::Version(&self.version),
            Property::FormattedName(&self.formatted_name),
        ];

        props.extend(self.kind.as_ref().map(Property::Kind));
        props.extend(self.name.as_ref().map(Property::Name));
        props.extend(self.nickname.as_ref().map(Property::Nickname));
        props.extend(self.birthday.as_ref().map(Property::Birthday));
        props.extend(self.organization.as_ref().map(Property::Organization));
        props.extend(self.title.as_ref().map(Property::Title));

        props.extend(self.phone_numbers.iter().map(Property::Telephone));
        props.extend(self.email_addresses.iter().map(Property::Email));
        props.extend(self.postal_addresses.iter().map(Property::Address));
        props.extend(self.url_addresses.iter().map(Property::Url));
        props.extend(self.social_profiles.iter().map(Property::SocialProfile));
        props.extend(self.vendor_properties.iter().map(Property::Vendor));

        props
    }

    /// Returns the first vendor property with the given name.
    ///
    /// Later properties with the same name are kept but not addressable here.
    #[must_use]
    pub fn vendor_property_named(&self, name: &str) -> Option<&VendorProperty> {
        self.vendor_properties.iter().find(|p| p.name == name)
    }

    /// Encodes the card as jCard JSON text.
    ///
    /// ## Errors
    /// Returns an encode error if JSON serialization fails, e.g. for a
    /// non-finite float value.
    pub fn encode_jcard(&self) -> RfcResult<String> {
        jcard::encode(self)
    }

    /// Encodes the card as vCard 3.0 text.
    #[must_use]
    pub fn encode_vcard3(&self) -> String {
        build::serialize_vcard3(self)
    }

    /// Decodes a card from jCard JSON text with default options.
    ///
    /// ## Errors
    /// Returns a decode error for a bad signature, a BDAY that is not of
    /// type `date`, or an unparsable birthday or social profile.
    pub fn from_jcard(input: &str) -> DecodeResult<Self> {
        jcard::decode(input)
    }
}

impl Default for ContactCard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{Kind, PropertyValue, ValueType};

    #[test]
    fn card_new() {
        let card = ContactCard::new();
        assert_eq!(card.version.value, "4.0");
        assert_eq!(card.formatted_name(), "");
        assert!(card.kind.is_none());
        assert!(card.vendor_properties.is_empty());
    }

    #[test]
    fn empty_card_has_version_and_fn() {
        let card = ContactCard::new();
        let names: Vec<&str> = card.properties().iter().map(Property::name).collect();
        assert_eq!(names, vec!["version", "fn"]);
    }

    #[test]
    fn properties_follow_fixed_order() {
        let mut card = ContactCard::new();
        card.vendor_properties.push(VendorProperty::new(
            "x-test",
            ValueType::Text,
            "foo".into(),
        ));
        card.url_addresses.push(UrlProperty::new("https://example.com"));
        card.phone_numbers.push(TelephoneProperty::new("+15550100"));
        card.title = Some(TextProperty::new("Engineer"));
        card.kind = Some(KindProperty::new(Kind::Individual));
        card.name = Some(NameProperty::simple("Doe", "John"));

        let names: Vec<&str> = card.properties().iter().map(Property::name).collect();
        assert_eq!(
            names,
            vec!["version", "fn", "kind", "n", "title", "tel", "url", "x-test"]
        );
    }

    #[test]
    fn vendor_property_named_returns_first() {
        let mut card = ContactCard::new();
        card.vendor_properties.push(VendorProperty::new(
            "x-test",
            ValueType::Text,
            "foo".into(),
        ));
        card.vendor_properties.push(VendorProperty::new(
            "x-test",
            ValueType::Text,
            "bar".into(),
        ));

        let found = card.vendor_property_named("x-test").unwrap();
        assert_eq!(found.value, PropertyValue::Text("foo".to_string()));
        assert_eq!(card.vendor_properties.len(), 2);
    }

    #[test]
    fn vendor_property_named_absent() {
        let card = ContactCard::new();
        assert!(card.vendor_property_named("x-missing").is_none());
    }
}
