//! Conversion between address book contacts and contact cards.

use super::label::{ContactLabel, social_service_type};
use super::{BirthdayComponents, Contact, ContactType, Labeled, PostalAddress, SocialProfile};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{
    AddressProperty, BirthdayProperty, ContactCard, EmailProperty, Kind, KindProperty,
    NameProperty, Parameters, SocialProfileProperty, TelephoneProperty, TextListProperty,
    TextProperty, UrlProperty, parameter_names,
};

/// Formatted name used when a contact has no name at all.
const UNKNOWN_NAME: &str = "?";

/// Builds a card from an address book contact.
///
/// The card always carries KIND and N; ORG, TITLE and NICKNAME only when
/// the contact has them.
///
/// ## Errors
/// Returns a validation error if the birthday is not a calendar date.
#[tracing::instrument(skip_all)]
pub fn card_from_contact(contact: &Contact) -> RfcResult<ContactCard> {
    tracing::debug!(
        phones = contact.phone_numbers.len(),
        emails = contact.email_addresses.len(),
        addresses = contact.postal_addresses.len(),
        urls = contact.url_addresses.len(),
        social_profiles = contact.social_profiles.len(),
        "Building card from contact"
    );

    let mut card = ContactCard::new();

    card.kind = Some(KindProperty::new(match contact.contact_type {
        ContactType::Person => Kind::Individual,
        ContactType::Organization => Kind::Organization,
    }));

    if let Some(birthday) = contact.birthday {
        card.birthday = Some(BirthdayProperty::try_new(
            birthday.year,
            birthday.month,
            birthday.day,
        )?);
    }

    card.name = Some(NameProperty::from_components([
        non_empty(&contact.family_name),
        non_empty(&contact.given_name),
        non_empty(&contact.middle_name),
        non_empty(&contact.name_prefix),
        non_empty(&contact.name_suffix),
    ]));

    if contact.organization_name.is_empty() {
        tracing::trace!("No organization");
    } else {
        let mut values = vec![contact.organization_name.clone()];
        if !contact.department_name.is_empty() {
            values.push(contact.department_name.clone());
        }
        card.organization = Some(TextListProperty::new(values));
    }

    if !contact.job_title.is_empty() {
        card.title = Some(TextProperty::new(contact.job_title.as_str()));
    }

    card.phone_numbers = contact
        .phone_numbers
        .iter()
        .map(|phone| {
            let mut tel = TelephoneProperty::new(phone.value.as_str());
            tel.parameters = ContactLabel::phone_parameters(phone.label.as_ref());
            tel
        })
        .collect();

    card.email_addresses = contact
        .email_addresses
        .iter()
        .map(|email| {
            let mut property = EmailProperty::new(email.value.as_str());
            property.parameters = ContactLabel::location_parameters(email.label.as_ref());
            property
        })
        .collect();

    card.postal_addresses = contact
        .postal_addresses
        .iter()
        .map(|address| AddressProperty {
            parameters: ContactLabel::location_parameters(address.label.as_ref()),
            street: address.value.street.clone(),
            city: address.value.city.clone(),
            state: address.value.state.clone(),
            postal_code: address.value.postal_code.clone(),
            country: address.value.country.clone(),
            iso_country_code: address.value.iso_country_code.clone(),
        })
        .collect();

    card.url_addresses = contact
        .url_addresses
        .iter()
        .map(|url| {
            let mut property = UrlProperty::new(url.value.as_str());
            property.parameters = ContactLabel::location_parameters(url.label.as_ref());
            property
        })
        .collect();

    card.social_profiles = contact
        .social_profiles
        .iter()
        .map(|profile| {
            let mut property = SocialProfileProperty::new(
                profile.service.as_str(),
                profile.url_string.as_str(),
                profile.user_identifier.as_str(),
                profile.username.as_str(),
            );
            property
                .parameters
                .add(parameter_names::TYPE, social_service_type(&profile.service));
            property
        })
        .collect();

    card.formatted_name = TextProperty::new(contact.display_name().unwrap_or_else(|| {
        tracing::debug!("Contact has no name, using placeholder");
        UNKNOWN_NAME.to_string()
    }));

    if !contact.nickname.is_empty() {
        card.nickname = Some(TextListProperty::new(vec![contact.nickname.clone()]));
    }

    Ok(card)
}

/// Builds an address book contact from a card.
///
/// Only the first value of each name component is kept, ORG gives the
/// organization and department names, and vendor properties are dropped.
#[must_use]
#[tracing::instrument(skip_all, fields(formatted_name = card.formatted_name()))]
pub fn contact_from_card(card: &ContactCard) -> Contact {
    let mut contact = Contact::default();

    if let Some(name) = &card.name {
        contact.family_name = first(&name.family_names);
        contact.given_name = first(&name.given_names);
        contact.middle_name = first(&name.additional_names);
        contact.name_prefix = first(&name.honorific_prefixes);
        contact.name_suffix = first(&name.honorific_suffixes);
    }

    if !card.formatted_name().is_empty() {
        contact.formatted_name = Some(card.formatted_name().to_string());
    }

    if card
        .kind
        .as_ref()
        .is_some_and(|k| k.kind == Kind::Organization)
    {
        contact.contact_type = ContactType::Organization;
    }

    contact.phone_numbers = card
        .phone_numbers
        .iter()
        .map(|tel| Labeled {
            label: ContactLabel::from_phone_parameters(&tel.parameters),
            value: tel.number.clone(),
        })
        .collect();

    contact.postal_addresses = card
        .postal_addresses
        .iter()
        .map(|address| Labeled {
            label: ContactLabel::from_location_parameters(&address.parameters),
            value: PostalAddress {
                street: address.street.clone(),
                city: address.city.clone(),
                state: address.state.clone(),
                postal_code: address.postal_code.clone(),
                country: address.country.clone(),
                iso_country_code: address.iso_country_code.clone(),
            },
        })
        .collect();

    contact.email_addresses = card
        .email_addresses
        .iter()
        .map(|email| labeled_text(&email.parameters, &email.address))
        .collect();

    contact.url_addresses = card
        .url_addresses
        .iter()
        .map(|url| labeled_text(&url.parameters, &url.url))
        .collect();

    contact.birthday = card.birthday.as_ref().map(|bday| BirthdayComponents {
        year: bday.year,
        month: bday.month,
        day: bday.day,
    });

    if let Some(title) = &card.title {
        contact.job_title.clone_from(&title.value);
    }

    if let Some(org) = &card.organization {
        let mut parts = org.values.iter();
        contact.organization_name = parts.next().cloned().unwrap_or_default();
        contact.department_name = parts.next().cloned().unwrap_or_default();
    }

    if let Some(nickname) = &card.nickname {
        contact.nickname = nickname.first().unwrap_or_default().to_string();
    }

    contact.social_profiles = card
        .social_profiles
        .iter()
        .map(|profile| SocialProfile {
            service: profile.service.clone(),
            url_string: profile.url_string.clone(),
            user_identifier: profile.user_identifier.clone(),
            username: profile.username.clone(),
        })
        .collect();

    tracing::debug!(
        phones = contact.phone_numbers.len(),
        emails = contact.email_addresses.len(),
        "Built contact from card"
    );

    contact
}

fn non_empty(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

fn first(values: &[String]) -> String {
    values.first().cloned().unwrap_or_default()
}

fn labeled_text(parameters: &Parameters, value: &str) -> Labeled<String> {
    Labeled {
        label: ContactLabel::from_location_parameters(parameters),
        value: value.to_string(),
    }
}
