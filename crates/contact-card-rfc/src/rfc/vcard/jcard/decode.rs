//! jCard decoding (RFC 7095).

use std::collections::HashSet;

use contact_card_core::config::{AnomalyPolicy, DuplicatePolicy};
use serde_json::Value;

use super::SIGNATURE;
use super::diagnostics::{Anomaly, AnomalyKind, DecodeDiagnostics, DecodeOptions};
use super::error::{DecodeError, DecodeResult};
use super::values::{
    component_text, component_values, extract_parameters, json_type, parse_birthday,
};
use crate::rfc::vcard::core::{
    AddressProperty, ContactCard, EmailProperty, Kind, KindProperty, NameProperty, Parameters,
    SocialProfileProperty, TelephoneProperty, TextListProperty, TextProperty, UrlProperty,
    ValueType, names,
};

/// Decodes a jCard document with default options.
///
/// ## Errors
/// See [`decode_with`].
pub fn decode(input: &str) -> DecodeResult<ContactCard> {
    let mut diagnostics = DecodeDiagnostics::new();
    decode_with(input, &DecodeOptions::default(), &mut diagnostics)
}

/// Decodes a jCard document, recording soft anomalies in `diagnostics`.
///
/// Unknown properties, vendor properties included, are skipped.
///
/// ## Errors
/// - `InvalidFormat` if the input is not a JSON array starting with
///   `"vcard"` and a property list, if a social profile does not have four
///   components, or if the options turn an anomaly into a failure.
/// - `InvalidValueType` if BDAY is not of type `date`.
/// - `InvalidValue` if the BDAY string cannot be parsed.
#[tracing::instrument(skip(input, diagnostics), fields(input_len = input.len()))]
pub fn decode_with(
    input: &str,
    options: &DecodeOptions,
    diagnostics: &mut DecodeDiagnostics,
) -> DecodeResult<ContactCard> {
    tracing::debug!("Decoding jCard document");

    let root: Value = serde_json::from_str(input).map_err(|e| {
        tracing::warn!(error = %e, "jCard input is not JSON");
        DecodeError::invalid_format(None, format!("invalid JSON: {e}"))
    })?;

    let Value::Array(document) = &root else {
        return Err(DecodeError::invalid_format(
            None,
            format!("expected a JSON array, found {}", json_type(&root)),
        ));
    };

    if document.first().and_then(Value::as_str) != Some(SIGNATURE) {
        tracing::warn!("Missing vcard signature");
        return Err(DecodeError::invalid_format(None, "missing vcard signature"));
    }

    let Some(Value::Array(properties)) = document.get(1) else {
        return Err(DecodeError::invalid_format(None, "missing property list"));
    };

    tracing::trace!(count = properties.len(), "Decoding properties");

    let mut decoder = Decoder::new(*options, diagnostics);
    for (index, property) in properties.iter().enumerate() {
        decoder.property(index, property)?;
    }

    tracing::debug!(
        anomalies = decoder.diagnostics.anomalies.len(),
        "jCard document decoded"
    );

    Ok(decoder.card)
}

/// Decoding state for one document.
struct Decoder<'d> {
    options: DecodeOptions,
    diagnostics: &'d mut DecodeDiagnostics,
    card: ContactCard,
    seen: HashSet<&'static str>,
}

impl<'d> Decoder<'d> {
    fn new(options: DecodeOptions, diagnostics: &'d mut DecodeDiagnostics) -> Self {
        Self {
            options,
            diagnostics,
            card: ContactCard::new(),
            seen: HashSet::new(),
        }
    }

    /// Records an anomaly, or fails under the strict policy.
    fn anomaly(&mut self, index: usize, property: &str, kind: AnomalyKind) -> DecodeResult<()> {
        if self.options.anomalies == AnomalyPolicy::Strict {
            return Err(DecodeError::invalid_format(Some(index), kind.to_string()));
        }

        tracing::warn!(index, property, anomaly = %kind, "Skipping jCard anomaly");
        self.diagnostics.anomalies.push(Anomaly {
            index,
            property: property.to_string(),
            kind,
        });
        Ok(())
    }

    /// Returns whether a singular property should be stored.
    fn admit(&mut self, index: usize, name: &'static str) -> DecodeResult<bool> {
        if self.seen.insert(name) {
            return Ok(true);
        }

        match self.options.duplicates {
            DuplicatePolicy::Reject => Err(DecodeError::invalid_format(
                Some(index),
                format!("duplicate {name} property"),
            )),
            DuplicatePolicy::KeepFirst => {
                self.anomaly(index, name, AnomalyKind::DuplicateProperty)?;
                Ok(false)
            }
            DuplicatePolicy::KeepLast => {
                self.anomaly(index, name, AnomalyKind::DuplicateProperty)?;
                Ok(true)
            }
        }
    }

    #[expect(clippy::too_many_lines)]
    fn property(&mut self, index: usize, raw: &Value) -> DecodeResult<()> {
        let Value::Array(tuple) = raw else {
            let reason = format!("expected an array, found {}", json_type(raw));
            return self.anomaly(index, "", AnomalyKind::MalformedProperty(reason));
        };

        let [Value::String(name), params, Value::String(tag), value, rest @ ..] = tuple.as_slice()
        else {
            let reason = "expected [name, parameters, type, value]".to_string();
            return self.anomaly(index, "", AnomalyKind::MalformedProperty(reason));
        };

        let name = name.to_ascii_lowercase();
        match name.as_str() {
            names::VERSION => {
                if let Some(text) = self.text(index, names::VERSION, value)? {
                    let parameters = self.parameters(index, names::VERSION, params)?;
                    if self.admit(index, names::VERSION)? {
                        self.card.version = TextProperty { parameters, value: text };
                    }
                }
            }
            names::FN => {
                if let Some(text) = self.text(index, names::FN, value)? {
                    let parameters = self.parameters(index, names::FN, params)?;
                    if self.admit(index, names::FN)? {
                        self.card.formatted_name = TextProperty { parameters, value: text };
                    }
                }
            }
            names::TITLE => {
                if let Some(text) = self.text(index, names::TITLE, value)? {
                    let parameters = self.parameters(index, names::TITLE, params)?;
                    if self.admit(index, names::TITLE)? {
                        self.card.title = Some(TextProperty { parameters, value: text });
                    }
                }
            }
            names::KIND => {
                if let Some(text) = self.text(index, names::KIND, value)? {
                    let parameters = self.parameters(index, names::KIND, params)?;
                    if self.admit(index, names::KIND)? {
                        self.card.kind = Some(KindProperty {
                            parameters,
                            kind: Kind::parse(&text),
                        });
                    }
                }
            }
            names::N => self.name(index, params, value)?,
            names::NICKNAME => {
                let values = self.text_list(index, names::NICKNAME, value, rest)?;
                let parameters = self.parameters(index, names::NICKNAME, params)?;
                if self.admit(index, names::NICKNAME)? {
                    self.card.nickname = Some(TextListProperty { parameters, values });
                }
            }
            names::ORG => {
                let values = self.text_list(index, names::ORG, value, rest)?;
                let parameters = self.parameters(index, names::ORG, params)?;
                if self.admit(index, names::ORG)? {
                    self.card.organization = Some(TextListProperty { parameters, values });
                }
            }
            names::BDAY => self.birthday(index, params, tag, value)?,
            names::TEL => {
                let Some(number) = self.text(index, names::TEL, value)? else {
                    return Ok(());
                };
                let parameters = self.parameters(index, names::TEL, params)?;
                let value_type = self.value_type(index, names::TEL, tag, ValueType::Uri)?;
                let number = number
                    .strip_prefix(TelephoneProperty::SCHEME)
                    .map(str::to_string)
                    .unwrap_or(number);
                self.card.phone_numbers.push(TelephoneProperty {
                    parameters,
                    value_type,
                    number,
                });
            }
            names::EMAIL => {
                let Some(address) = self.text(index, names::EMAIL, value)? else {
                    return Ok(());
                };
                let parameters = self.parameters(index, names::EMAIL, params)?;
                let value_type = self.value_type(index, names::EMAIL, tag, ValueType::Text)?;
                self.card.email_addresses.push(EmailProperty {
                    parameters,
                    value_type,
                    address,
                });
            }
            names::URL => {
                let Some(url) = self.text(index, names::URL, value)? else {
                    return Ok(());
                };
                let parameters = self.parameters(index, names::URL, params)?;
                let value_type = self.value_type(index, names::URL, tag, ValueType::Uri)?;
                self.card.url_addresses.push(UrlProperty {
                    parameters,
                    value_type,
                    url,
                });
            }
            names::ADR => self.address(index, params, value)?,
            names::SOCIALPROFILE => self.social_profile(index, params, value)?,
            _ => {
                tracing::trace!(index, property = %name, "Skipping unsupported property");
                self.diagnostics.skipped.push(name);
            }
        }

        Ok(())
    }

    fn parameters(
        &mut self,
        index: usize,
        property: &str,
        raw: &Value,
    ) -> DecodeResult<Parameters> {
        let (parameters, anomalies) = extract_parameters(raw);
        for kind in anomalies {
            self.anomaly(index, property, kind)?;
        }
        Ok(parameters)
    }

    /// Returns a scalar string value; other shapes are recorded and dropped.
    fn text(
        &mut self,
        index: usize,
        property: &str,
        value: &Value,
    ) -> DecodeResult<Option<String>> {
        if let Value::String(text) = value {
            return Ok(Some(text.clone()));
        }
        let found = json_type(value).to_string();
        self.anomaly(index, property, AnomalyKind::ComponentShape { found })?;
        Ok(None)
    }

    /// Parses a value-type tag, falling back to `default` for unknown tags.
    fn value_type(
        &mut self,
        index: usize,
        property: &str,
        tag: &str,
        default: ValueType,
    ) -> DecodeResult<ValueType> {
        if let Some(value_type) = ValueType::parse(tag) {
            return Ok(value_type);
        }
        self.anomaly(index, property, AnomalyKind::UnknownValueType(tag.to_string()))?;
        Ok(default)
    }

    /// Collects a text list from the value element and any further values.
    fn text_list(
        &mut self,
        index: usize,
        property: &str,
        value: &Value,
        rest: &[Value],
    ) -> DecodeResult<Vec<String>> {
        let mut values = Vec::new();
        for element in std::iter::once(value).chain(rest) {
            match element {
                Value::String(text) => values.push(text.clone()),
                other => match component_values(other) {
                    Ok(items) => values.extend(items),
                    Err(found) => {
                        let found = found.to_string();
                        self.anomaly(index, property, AnomalyKind::ComponentShape { found })?;
                    }
                },
            }
        }
        Ok(values)
    }

    fn name(&mut self, index: usize, params: &Value, value: &Value) -> DecodeResult<()> {
        let components = match value {
            Value::Array(components) if components.len() == NameProperty::COMPONENTS => components,
            Value::Array(components) => {
                let kind = AnomalyKind::NameComponentCount(components.len());
                return self.anomaly(index, names::N, kind);
            }
            other => {
                let found = json_type(other).to_string();
                return self.anomaly(index, names::N, AnomalyKind::ComponentShape { found });
            }
        };

        let mut parts: [Vec<String>; NameProperty::COMPONENTS] = Default::default();
        for (part, component) in parts.iter_mut().zip(components) {
            match component_values(component) {
                Ok(values) => *part = values,
                Err(found) => {
                    let found = found.to_string();
                    self.anomaly(index, names::N, AnomalyKind::ComponentShape { found })?;
                }
            }
        }

        let parameters = self.parameters(index, names::N, params)?;
        if self.admit(index, names::N)? {
            let mut name = NameProperty::from_components(parts);
            name.parameters = parameters;
            self.card.name = Some(name);
        }
        Ok(())
    }

    fn birthday(
        &mut self,
        index: usize,
        params: &Value,
        tag: &str,
        value: &Value,
    ) -> DecodeResult<()> {
        if tag != ValueType::Date.as_str() {
            tracing::warn!(index, tag, "BDAY is not a date");
            return Err(DecodeError::invalid_value_type(
                index,
                ValueType::Date.as_str(),
                tag,
            ));
        }

        let Value::String(text) = value else {
            return Err(DecodeError::invalid_value(
                index,
                format!("expected a date string, found {}", json_type(value)),
            ));
        };

        let mut birthday = parse_birthday(text, index)?;
        birthday.parameters = self.parameters(index, names::BDAY, params)?;
        if self.admit(index, names::BDAY)? {
            self.card.birthday = Some(birthday);
        }
        Ok(())
    }

    fn address(&mut self, index: usize, params: &Value, value: &Value) -> DecodeResult<()> {
        let mut address = AddressProperty::new();

        match value {
            Value::Array(components) if components.len() == AddressProperty::COMPONENTS => {
                // PO box and extended address are not kept.
                let mut fields: [String; 5] = Default::default();
                for (field, component) in fields.iter_mut().zip(components.iter().skip(2)) {
                    match component_text(component) {
                        Ok(text) => *field = text,
                        Err(found) => {
                            let found = found.to_string();
                            self.anomaly(index, names::ADR, AnomalyKind::ComponentShape { found })?;
                        }
                    }
                }
                let [street, city, state, postal_code, country] = fields;
                address.street = street;
                address.city = city;
                address.state = state;
                address.postal_code = postal_code;
                address.country = country;
            }
            other => {
                let count = other.as_array().map_or(1, Vec::len);
                self.anomaly(index, names::ADR, AnomalyKind::AddressComponentCount(count))?;
            }
        }

        address.parameters = self.parameters(index, names::ADR, params)?;
        self.card.postal_addresses.push(address);
        Ok(())
    }

    fn social_profile(&mut self, index: usize, params: &Value, value: &Value) -> DecodeResult<()> {
        let components = match value {
            Value::Array(components) if components.len() == SocialProfileProperty::COMPONENTS => {
                components
            }
            other => {
                let count = other.as_array().map_or(1, Vec::len);
                tracing::warn!(index, count, "Social profile has wrong component count");
                return Err(DecodeError::invalid_format(
                    Some(index),
                    format!("expected 4 social profile components, found {count}"),
                ));
            }
        };

        let mut fields = [String::new(), String::new(), String::new(), String::new()];
        for (field, component) in fields.iter_mut().zip(components) {
            match component_text(component) {
                Ok(text) => *field = text,
                Err(found) => {
                    let found = found.to_string();
                    self.anomaly(
                        index,
                        names::SOCIALPROFILE,
                        AnomalyKind::ComponentShape { found },
                    )?;
                }
            }
        }

        let [service, url_string, user_identifier, username] = fields;
        let mut profile = SocialProfileProperty::new(service, url_string, user_identifier, username);
        profile.parameters = self.parameters(index, names::SOCIALPROFILE, params)?;
        self.card.social_profiles.push(profile);
        Ok(())
    }
}
