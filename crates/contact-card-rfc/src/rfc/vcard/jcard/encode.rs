//! jCard encoding (RFC 7095).
//!
//! The card is written as `["vcard", [property...]]`, each property being
//! the tuple `[name, parameters, value-type, value]`.

use serde::ser::{Error as _, SerializeMap, SerializeSeq, SerializeTuple};
use serde::{Serialize, Serializer};

use super::SIGNATURE;
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::{Component, ContactCard, Parameters, Property, PropertyValue};

/// Values of one parameter: no values is `{}`, one is a bare string, more
/// are an array.
struct ParameterValues<'a>(&'a [String]);

impl Serialize for ParameterValues<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            [] => serializer.serialize_map(Some(0))?.end(),
            [single] => serializer.serialize_str(single),
            values => values.serialize(serializer),
        }
    }
}

impl Serialize for Parameters {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, values) in self.iter() {
            map.serialize_entry(name, &ParameterValues(values))?;
        }
        map.end()
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Single(value) => serializer.serialize_str(value),
            Self::Multi(values) => values.serialize(serializer),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            Self::Float(value) => Err(S::Error::custom(format!(
                "float value {value} cannot be represented in JSON"
            ))),
            Self::List(values) => values.serialize(serializer),
            Self::Structured(components) => {
                let mut seq = serializer.serialize_seq(Some(components.len()))?;
                for component in components {
                    seq.serialize_element(component)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for Property<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(self.name())?;
        tuple.serialize_element(self.parameters())?;
        tuple.serialize_element(self.value_type().as_str())?;
        tuple.serialize_element(&self.value())?;
        tuple.end()
    }
}

/// A card in jCard shape.
struct JCard<'a>(&'a ContactCard);

impl Serialize for JCard<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(SIGNATURE)?;
        tuple.serialize_element(&self.0.properties())?;
        tuple.end()
    }
}

/// Encodes a card as jCard JSON text.
///
/// ## Errors
/// Returns [`RfcError::Encode`] if a value cannot be written as JSON, such
/// as a non-finite float in a vendor property.
#[tracing::instrument(skip_all, fields(formatted_name = card.formatted_name()))]
pub fn encode(card: &ContactCard) -> RfcResult<String> {
    tracing::debug!("Encoding jCard");

    let output = serde_json::to_string(&JCard(card)).map_err(|e| {
        tracing::warn!(error = %e, "jCard encoding failed");
        RfcError::Encode(e)
    })?;

    tracing::trace!(output_len = output.len(), "jCard encoded");
    Ok(output)
}

/// Encodes a single property tuple as a JSON value.
///
/// ## Errors
/// Same as [`encode`].
pub fn encode_property(property: Property<'_>) -> RfcResult<serde_json::Value> {
    serde_json::to_value(property).map_err(RfcError::Encode)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::rfc::vcard::core::{
        AddressProperty, BirthdayProperty, NameProperty, SocialProfileProperty, TelephoneProperty,
        TextListProperty, TextProperty, TypeValue, ValueType, VendorProperty,
    };

    #[test]
    fn empty_card() {
        let card = ContactCard::new();
        let json: serde_json::Value = serde_json::from_str(&encode(&card).unwrap()).unwrap();
        assert_eq!(
            json,
            json!(["vcard", [["version", {}, "text", "4.0"], ["fn", {}, "text", ""]]])
        );
    }

    #[test]
    fn parameter_value_counts() {
        let mut tel = TelephoneProperty::new("+15550100");
        tel.parameters = Parameters::with_types(&[TypeValue::Work, TypeValue::Voice]);
        tel.parameters.insert("pref", vec!["1".to_string()]);
        tel.parameters.insert("label", Vec::new());

        let value = encode_property(Property::Telephone(&tel)).unwrap();
        assert_eq!(
            value,
            json!([
                "tel",
                { "type": ["work", "voice"], "pref": "1", "label": {} },
                "uri",
                "tel:+15550100"
            ])
        );
    }

    #[test]
    fn name_pads_empty_components() {
        let mut name = NameProperty::simple("Stevenson", "John");
        name.additional_names = vec!["Philip".to_string(), "Paul".to_string()];
        name.honorific_suffixes = vec!["Jr.".to_string()];

        let value = encode_property(Property::Name(&name)).unwrap();
        assert_eq!(
            value,
            json!(["n", {}, "text", ["Stevenson", "John", ["Philip", "Paul"], "", "Jr."]])
        );
    }

    #[test]
    fn address_has_seven_components() {
        let addr = AddressProperty {
            street: "123 Main Street".to_string(),
            city: "Any Town".to_string(),
            state: "CA".to_string(),
            postal_code: "91921-1234".to_string(),
            country: "U.S.A.".to_string(),
            ..AddressProperty::default()
        };
        let value = encode_property(Property::Address(&addr)).unwrap();
        assert_eq!(
            value,
            json!([
                "adr",
                {},
                "text",
                ["", "", "123 Main Street", "Any Town", "CA", "91921-1234", "U.S.A."]
            ])
        );
    }

    #[test]
    fn birthday_and_social_profile() {
        let bday = BirthdayProperty::new(None, 10, 8);
        assert_eq!(
            encode_property(Property::Birthday(&bday)).unwrap(),
            json!(["bday", {}, "date", "--10-08"])
        );

        let profile = SocialProfileProperty::new("twitter", "", "", "jdoe");
        assert_eq!(
            encode_property(Property::SocialProfile(&profile)).unwrap(),
            json!(["x-socialprofile", {}, "text", ["twitter", "", "", "jdoe"]])
        );
    }

    #[test]
    fn fixed_property_order() {
        let mut card = ContactCard::new();
        card.formatted_name = TextProperty::new("Jane Doe");
        card.url_addresses
            .push(crate::rfc::vcard::core::UrlProperty::new("https://example.com"));
        card.organization = Some(TextListProperty::new(vec!["ABC, Inc.".to_string()]));
        card.nickname = Some(TextListProperty::new(vec!["JD".to_string()]));

        let json: serde_json::Value = serde_json::from_str(&encode(&card).unwrap()).unwrap();
        let names: Vec<&str> = json[1]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p[0].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["version", "fn", "nickname", "org", "url"]);
    }

    #[test]
    fn vendor_values_keep_their_type() {
        let mut card = ContactCard::new();
        card.vendor_properties
            .push(VendorProperty::new("x-count", ValueType::Integer, 3_i64.into()));
        card.vendor_properties
            .push(VendorProperty::new("x-flag", ValueType::Boolean, true.into()));

        let json: serde_json::Value = serde_json::from_str(&encode(&card).unwrap()).unwrap();
        assert_eq!(json[1][2], json!(["x-count", {}, "integer", 3]));
        assert_eq!(json[1][3], json!(["x-flag", {}, "boolean", true]));
    }

    #[test_log::test]
    fn non_finite_float_is_an_error() {
        let mut card = ContactCard::new();
        card.vendor_properties
            .push(VendorProperty::new("x-ratio", ValueType::Float, f64::NAN.into()));

        let err = encode(&card).unwrap_err();
        assert!(matches!(err, RfcError::Encode(_)));
    }
}
