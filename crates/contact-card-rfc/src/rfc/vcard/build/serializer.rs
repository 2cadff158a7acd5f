//! vCard 3.0 serialization.

use std::fmt::Write as _;

use super::escape::{
    escape_component, escape_param_value, escape_text, is_valid_name, strip_controls,
};
use super::fold::push_folded;
use crate::rfc::vcard::core::{
    AddressProperty, BirthdayProperty, Component, ContactCard, NameProperty, Parameters,
    PropertyValue, SocialProfileProperty, TextListProperty, parameter_names,
};

/// Version written to the `VERSION` line.
const OUTPUT_VERSION: &str = "3.0";

/// Serializes a card as a vCard 3.0 block.
///
/// Properties are written in the same order as in jCard. Every line,
/// `END:VCARD` included, ends with CRLF.
#[must_use]
#[tracing::instrument(skip_all, fields(formatted_name = card.formatted_name()))]
pub fn serialize_vcard3(card: &ContactCard) -> String {
    tracing::debug!("Serializing vCard 3.0");

    let mut output = String::new();
    output.push_str("BEGIN:VCARD\r\n");
    push_folded(&mut output, &format!("VERSION:{OUTPUT_VERSION}"));

    write_text(&mut output, "FN", &card.formatted_name.parameters, card.formatted_name());

    if let Some(name) = &card.name {
        write_name(&mut output, name);
    }
    if let Some(nickname) = &card.nickname {
        write_text_list(&mut output, "NICKNAME", nickname, ",");
    }
    if let Some(birthday) = &card.birthday {
        write_birthday(&mut output, birthday);
    }
    if let Some(organization) = &card.organization {
        write_text_list(&mut output, "ORG", organization, ";");
    }
    if let Some(title) = &card.title {
        write_text(&mut output, "TITLE", &title.parameters, &title.value);
    }

    for tel in &card.phone_numbers {
        write_raw(&mut output, "TEL", &tel.parameters, &strip_controls(&tel.number));
    }
    for email in &card.email_addresses {
        write_text(&mut output, "EMAIL", &email.parameters, &email.address);
    }
    for address in &card.postal_addresses {
        write_address(&mut output, address);
    }
    for url in &card.url_addresses {
        write_raw(&mut output, "URL", &url.parameters, &strip_controls(&url.url));
    }
    for profile in &card.social_profiles {
        write_social_profile(&mut output, profile);
    }
    for vendor in &card.vendor_properties {
        if !is_valid_name(&vendor.name) {
            tracing::warn!(name = %vendor.name, "Skipping vendor property with invalid name");
            continue;
        }
        let value = vendor_value(&vendor.value);
        write_raw(
            &mut output,
            &vendor.name.to_ascii_uppercase(),
            &vendor.parameters,
            &value,
        );
    }

    output.push_str("END:VCARD\r\n");

    tracing::trace!(output_len = output.len(), "vCard 3.0 serialized");
    output
}

/// Writes `NAME;PARAMS:value` with the value taken as already escaped.
fn write_raw(output: &mut String, name: &str, parameters: &Parameters, value: &str) {
    let mut line = String::from(name);
    write_parameters(&mut line, parameters);
    line.push(':');
    line.push_str(value);
    push_folded(output, &line);
}

fn write_text(output: &mut String, name: &str, parameters: &Parameters, value: &str) {
    write_raw(output, name, parameters, &escape_text(value));
}

fn write_text_list(output: &mut String, name: &str, list: &TextListProperty, separator: &str) {
    let value = list
        .values
        .iter()
        .map(|v| escape_text(v))
        .collect::<Vec<_>>()
        .join(separator);
    write_raw(output, name, &list.parameters, &value);
}

fn write_name(output: &mut String, name: &NameProperty) {
    // family;given;additional;prefixes;suffixes
    let value = name
        .components()
        .iter()
        .map(|values| escape_component(values))
        .collect::<Vec<_>>()
        .join(";");
    write_raw(output, "N", &name.parameters, &value);
}

fn write_birthday(output: &mut String, birthday: &BirthdayProperty) {
    write_raw(output, "BDAY", &birthday.parameters, &birthday.to_date_string());
}

fn write_address(output: &mut String, address: &AddressProperty) {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    let value = address
        .components()
        .iter()
        .map(|c| escape_text(c))
        .collect::<Vec<_>>()
        .join(";");
    write_raw(output, "ADR", &address.parameters, &value);
}

fn write_social_profile(output: &mut String, profile: &SocialProfileProperty) {
    let value = if profile.url_string.is_empty() {
        &profile.username
    } else {
        &profile.url_string
    };
    write_raw(output, "X-SOCIALPROFILE", &profile.parameters, &escape_text(value));
}

fn vendor_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Text(s) => escape_text(s),
        PropertyValue::Integer(i) => i.to_string(),
        PropertyValue::Boolean(b) => String::from(if *b { "TRUE" } else { "FALSE" }),
        PropertyValue::Float(f) => f.to_string(),
        PropertyValue::List(values) => escape_component(values),
        PropertyValue::Structured(components) => components
            .iter()
            .map(|component| match component {
                Component::Single(s) => escape_text(s),
                Component::Multi(values) => escape_component(values),
            })
            .collect::<Vec<_>>()
            .join(";"),
    }
}

/// Writes the parameters of one property.
///
/// TYPE values are uppercased and a `pref` parameter is folded into TYPE as
/// `PREF`. Parameters without values are left out.
fn write_parameters(line: &mut String, parameters: &Parameters) {
    let mut types: Vec<String> = parameters
        .types()
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_uppercase())
        .collect();

    let preferred = parameters
        .get(parameter_names::PREF)
        .is_some_and(|values| !values.is_empty());
    if preferred && !types.iter().any(|t| t == "PREF") {
        types.push("PREF".to_string());
    }

    if !types.is_empty() {
        line.push_str(";TYPE=");
        push_values(line, &types);
    }

    for (name, values) in parameters.iter() {
        if name == parameter_names::TYPE || name == parameter_names::PREF || values.is_empty() {
            continue;
        }
        if !is_valid_name(name) {
            tracing::warn!(name, "Skipping parameter with invalid name");
            continue;
        }
        write!(line, ";{}=", name.to_ascii_uppercase()).ok();
        push_values(line, values);
    }
}

fn push_values(line: &mut String, values: &[String]) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&escape_param_value(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{
        EmailProperty, TelephoneProperty, TextProperty, TypeValue, UrlProperty, ValueType,
        VendorProperty,
    };

    fn card_named(name: &str) -> ContactCard {
        let mut card = ContactCard::new();
        card.formatted_name = TextProperty::new(name);
        card
    }

    #[test]
    fn minimal_card() {
        let output = serialize_vcard3(&card_named("John Doe"));
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn formatted_name_is_escaped() {
        let output = serialize_vcard3(&card_named("Mr. John Q. Public, Esq."));
        assert!(output.contains("FN:Mr. John Q. Public\\, Esq.\r\n"));
    }

    #[test]
    fn structured_name() {
        let mut card = card_named("John Stevenson");
        let mut name = NameProperty::simple("Stevenson", "John");
        name.additional_names = vec!["Philip".to_string(), "Paul".to_string()];
        name.honorific_prefixes = vec!["Dr.".to_string()];
        card.name = Some(name);

        let output = serialize_vcard3(&card);
        assert!(output.contains("N:Stevenson;John;Philip,Paul;Dr.;\r\n"));
    }

    #[test]
    fn organization_units_use_semicolons() {
        let mut card = card_named("Jane");
        card.organization = Some(TextListProperty::new(vec![
            "ABC, Inc.".to_string(),
            "North American Division".to_string(),
        ]));
        card.nickname = Some(TextListProperty::new(vec![
            "Jim".to_string(),
            "Jimmie".to_string(),
        ]));

        let output = serialize_vcard3(&card);
        assert!(output.contains("ORG:ABC\\, Inc.;North American Division\r\n"));
        assert!(output.contains("NICKNAME:Jim,Jimmie\r\n"));
    }

    #[test]
    fn telephone_types_and_pref() {
        let mut card = card_named("Jane");
        let mut tel = TelephoneProperty::new("+1-555-555-0100");
        tel.parameters = Parameters::with_types(&[TypeValue::Work, TypeValue::Voice]);
        tel.parameters.insert("pref", vec!["1".to_string()]);
        card.phone_numbers.push(tel);

        let output = serialize_vcard3(&card);
        assert!(output.contains("TEL;TYPE=WORK,VOICE,PREF:+1-555-555-0100\r\n"));
    }

    #[test]
    fn email_and_address() {
        let mut card = card_named("Jane");
        let mut email = EmailProperty::new("jane@example.com");
        email.parameters = Parameters::with_types(&[TypeValue::Home]);
        card.email_addresses.push(email);
        card.postal_addresses.push(AddressProperty {
            parameters: Parameters::with_types(&[TypeValue::Work]),
            street: "1 Infinite Loop".to_string(),
            city: "Cupertino".to_string(),
            state: "CA".to_string(),
            postal_code: "95014".to_string(),
            country: "USA".to_string(),
            iso_country_code: "us".to_string(),
        });

        let output = serialize_vcard3(&card);
        assert!(output.contains("EMAIL;TYPE=HOME:jane@example.com\r\n"));
        assert!(output.contains("ADR;TYPE=WORK:;;1 Infinite Loop;Cupertino;CA;95014;USA\r\n"));
    }

    #[test]
    fn birthday_forms() {
        let mut card = card_named("Jane");
        card.birthday = Some(BirthdayProperty::new(Some(1968), 12, 30));
        assert!(serialize_vcard3(&card).contains("BDAY:1968-12-30\r\n"));

        card.birthday = Some(BirthdayProperty::new(None, 10, 8));
        assert!(serialize_vcard3(&card).contains("BDAY:--10-08\r\n"));
    }

    #[test]
    fn social_profile_prefers_url() {
        let mut card = card_named("Jane");
        let mut profile = SocialProfileProperty::new("twitter", "https://twitter.com/jane", "", "jane");
        profile.parameters = Parameters::with_types(&[TypeValue::Twitter]);
        card.social_profiles.push(profile);
        card.social_profiles
            .push(SocialProfileProperty::new("flickr", "", "", "jane_f"));

        let output = serialize_vcard3(&card);
        assert!(output.contains("X-SOCIALPROFILE;TYPE=X-TWITTER:https://twitter.com/jane\r\n"));
        assert!(output.contains("X-SOCIALPROFILE:jane_f\r\n"));
    }

    #[test]
    fn vendor_properties_are_uppercased() {
        let mut card = card_named("Jane");
        card.vendor_properties.push(VendorProperty::new(
            "x-aim",
            ValueType::Text,
            "jane;aim".into(),
        ));
        card.vendor_properties
            .push(VendorProperty::new("x-count", ValueType::Integer, 2_i64.into()));

        let output = serialize_vcard3(&card);
        assert!(output.contains("X-AIM:jane\\;aim\r\n"));
        assert!(output.contains("X-COUNT:2\r\n"));
    }

    #[test]
    fn empty_parameters_are_skipped() {
        let mut card = card_named("Jane");
        card.formatted_name.parameters.insert("label", Vec::new());
        card.formatted_name
            .parameters
            .insert("language", vec!["en".to_string()]);

        let output = serialize_vcard3(&card);
        assert!(output.contains("FN;LANGUAGE=en:Jane\r\n"));
    }

    #[test]
    fn long_lines_are_folded() {
        let output = serialize_vcard3(&card_named(&"A".repeat(100)));
        assert!(output.contains("\r\n A"));
        assert!(output.split("\r\n").all(|line| line.len() <= 75));
    }

    #[test]
    fn email_is_escaped() {
        let mut card = card_named("Jane");
        card.email_addresses
            .push(EmailProperty::new("a,b;c@example.com"));

        let output = serialize_vcard3(&card);
        assert!(output.contains("EMAIL:a\\,b\\;c@example.com\r\n"));
    }

    #[test]
    fn line_breaks_in_values_do_not_start_lines() {
        let mut card = card_named("Eve");
        card.email_addresses.push(EmailProperty::new(
            "eve@example.com\r\nEND:VCARD\r\nBEGIN:VCARD\r\nFN:Mallory",
        ));
        card.phone_numbers
            .push(TelephoneProperty::new("+1-555-0100\r\nNOTE:forged"));
        card.url_addresses
            .push(UrlProperty::new("https://example.com\nNOTE:forged"));
        card.vendor_properties.push(VendorProperty::new(
            "x-note",
            ValueType::Text,
            "one\r\nEND:VCARD".into(),
        ));

        let output = serialize_vcard3(&card);
        let lines: Vec<&str> = output.split("\r\n").collect();
        assert_eq!(lines.iter().filter(|l| **l == "BEGIN:VCARD").count(), 1);
        assert_eq!(lines.iter().filter(|l| **l == "END:VCARD").count(), 1);
        assert!(output.contains("EMAIL:eve@example.com\\nEND:VCARD\\nBEGIN:VCARD\\nFN:Mallory\r\n"));
        assert!(!output.contains("\r\nNOTE:"));
        assert!(!output.contains("\r\nFN:Mallory"));
        assert!(output.contains("TEL:+1-555-0100NOTE:forged\r\n"));
        assert!(output.contains("X-NOTE:one\\nEND:VCARD\r\n"));
        assert!(output.ends_with("\r\nEND:VCARD\r\n"));
    }

    #[test_log::test]
    fn invalid_names_are_skipped() {
        let mut card = card_named("X");
        card.formatted_name
            .parameters
            .insert("x-a:b\r\nNOTE", vec!["v".to_string()]);
        card.formatted_name
            .parameters
            .insert("language", vec!["en".to_string()]);
        card.vendor_properties.push(VendorProperty::new(
            "x-bad\r\nNOTE",
            ValueType::Text,
            "v".into(),
        ));

        let output = serialize_vcard3(&card);
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN;LANGUAGE=en:X\r\nEND:VCARD\r\n"
        );
    }
}
