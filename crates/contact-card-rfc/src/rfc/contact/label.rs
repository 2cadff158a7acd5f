//! Address book labels and their TYPE parameter form.

use crate::rfc::vcard::core::{Parameters, TypeValue, parameter_names};

/// An address book label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactLabel {
    Home,
    Work,
    Other,
    Mobile,
    /// The main phone number.
    Main,
    IPhone,
    HomeFax,
    WorkFax,
    OtherFax,
    Pager,
    ICloud,
    Custom(String),
}

impl ContactLabel {
    /// Returns the TYPE values (and `pref`) of a phone number.
    ///
    /// Fax labels give `fax` plus their location, pager gives `pager`, any
    /// other phone gets its location or `cell` plus `voice`.
    #[must_use]
    pub fn phone_parameters(label: Option<&Self>) -> Parameters {
        let mut types = Vec::new();

        match label {
            Some(Self::HomeFax) => types.extend([TypeValue::Fax, TypeValue::Home]),
            Some(Self::WorkFax) => types.extend([TypeValue::Fax, TypeValue::Work]),
            Some(Self::OtherFax) => types.extend([TypeValue::Fax, TypeValue::Other]),
            Some(Self::Pager) => types.push(TypeValue::Pager),
            Some(Self::Home) => types.extend([TypeValue::Home, TypeValue::Voice]),
            Some(Self::Work) => types.extend([TypeValue::Work, TypeValue::Voice]),
            Some(Self::Other) => types.extend([TypeValue::Other, TypeValue::Voice]),
            Some(Self::Mobile) => types.extend([TypeValue::Mobile, TypeValue::Voice]),
            Some(Self::IPhone) => types.extend([TypeValue::Voice, TypeValue::IPhone]),
            Some(Self::Main | Self::ICloud | Self::Custom(_)) | None => {
                types.push(TypeValue::Voice);
            }
        }

        let mut params = Parameters::with_types(&types);
        if label == Some(&Self::Main) {
            params.insert(parameter_names::PREF, vec!["1".to_string()]);
        }
        params
    }

    /// Returns the TYPE values of an email, address or URL.
    #[must_use]
    pub fn location_parameters(label: Option<&Self>) -> Parameters {
        let types: &[TypeValue] = match label {
            Some(Self::Home) => &[TypeValue::Home],
            Some(Self::Work) => &[TypeValue::Work],
            Some(Self::Other) => &[TypeValue::Other],
            Some(Self::ICloud) => &[TypeValue::ICloud],
            _ => &[],
        };
        Parameters::with_types(types)
    }

    /// Recovers a phone label from TYPE and `pref`.
    ///
    /// Outside fax and pager numbers, `x-iphone` wins over `cell`, which wins
    /// over the location; a preferred number with no other hint is `Main`.
    #[must_use]
    pub fn from_phone_parameters(params: &Parameters) -> Option<Self> {
        let has = |t: TypeValue| params.has_type(t);

        if has(TypeValue::Fax) {
            return if has(TypeValue::Home) {
                Some(Self::HomeFax)
            } else if has(TypeValue::Work) {
                Some(Self::WorkFax)
            } else if has(TypeValue::Other) {
                Some(Self::OtherFax)
            } else {
                None
            };
        }

        if has(TypeValue::Pager) {
            return Some(Self::Pager);
        }

        [
            (TypeValue::IPhone, Self::IPhone),
            (TypeValue::Mobile, Self::Mobile),
            (TypeValue::Other, Self::Other),
            (TypeValue::Work, Self::Work),
            (TypeValue::Home, Self::Home),
        ]
        .into_iter()
        .find(|(t, _)| has(*t))
        .map(|(_, label)| label)
        .or_else(|| {
            params
                .get(parameter_names::PREF)
                .is_some_and(|v| !v.is_empty())
                .then_some(Self::Main)
        })
    }

    /// Recovers an email, address or URL label; the last recognized TYPE
    /// value wins.
    #[must_use]
    pub fn from_location_parameters(params: &Parameters) -> Option<Self> {
        params
            .types()
            .iter()
            .rev()
            .find_map(|t| match TypeValue::parse(t)? {
                TypeValue::Home => Some(Self::Home),
                TypeValue::Work => Some(Self::Work),
                TypeValue::Other => Some(Self::Other),
                TypeValue::ICloud => Some(Self::ICloud),
                _ => None,
            })
    }
}

/// Returns the TYPE value of a social profile for the given service name.
#[must_use]
pub fn social_service_type(service: &str) -> String {
    let known = match service.to_ascii_lowercase().as_str() {
        "facebook" => "facebook",
        "flickr" => "flickr",
        "gamecenter" => "gamecenter",
        "linkedin" => "linkedin",
        "myspace" => "myspace",
        "sinaweibo" => "sinaweibo",
        "tencentweibo" => "tencentweibo",
        "twitter" => "twitter",
        "yelp" => "yelp",
        _ => "unknownsocialprofile",
    };
    format!("x-{known}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fax_labels() {
        let params = ContactLabel::phone_parameters(Some(&ContactLabel::WorkFax));
        assert_eq!(params.types(), ["fax", "work"]);
        assert_eq!(
            ContactLabel::from_phone_parameters(&params),
            Some(ContactLabel::WorkFax)
        );
    }

    #[test]
    fn pager_label() {
        let params = ContactLabel::phone_parameters(Some(&ContactLabel::Pager));
        assert_eq!(params.types(), ["pager"]);
        assert_eq!(
            ContactLabel::from_phone_parameters(&params),
            Some(ContactLabel::Pager)
        );
    }

    #[test]
    fn voice_labels() {
        let params = ContactLabel::phone_parameters(Some(&ContactLabel::Mobile));
        assert_eq!(params.types(), ["cell", "voice"]);

        let params = ContactLabel::phone_parameters(Some(&ContactLabel::IPhone));
        assert_eq!(params.types(), ["voice", "x-iphone"]);
        assert_eq!(
            ContactLabel::from_phone_parameters(&params),
            Some(ContactLabel::IPhone)
        );

        let params = ContactLabel::phone_parameters(None);
        assert_eq!(params.types(), ["voice"]);
        assert_eq!(ContactLabel::from_phone_parameters(&params), None);
    }

    #[test]
    fn main_number_is_preferred() {
        let params = ContactLabel::phone_parameters(Some(&ContactLabel::Main));
        assert_eq!(params.types(), ["voice"]);
        assert!(params.has_value("pref", "1"));
        assert_eq!(
            ContactLabel::from_phone_parameters(&params),
            Some(ContactLabel::Main)
        );
    }

    #[test]
    fn work_phone_is_not_other() {
        let params = ContactLabel::phone_parameters(Some(&ContactLabel::Work));
        assert_eq!(
            ContactLabel::from_phone_parameters(&params),
            Some(ContactLabel::Work)
        );
    }

    #[test]
    fn location_labels() {
        let params = ContactLabel::location_parameters(Some(&ContactLabel::ICloud));
        assert_eq!(params.types(), ["x-icloud"]);
        assert!(ContactLabel::location_parameters(Some(&ContactLabel::Mobile)).is_empty());

        let params: Parameters = [("type", vec!["internet".to_string(), "work".to_string()])]
            .into_iter()
            .collect();
        assert_eq!(
            ContactLabel::from_location_parameters(&params),
            Some(ContactLabel::Work)
        );
    }

    #[test]
    fn social_service_types() {
        assert_eq!(social_service_type("Twitter"), "x-twitter");
        assert_eq!(social_service_type("GameCenter"), "x-gamecenter");
        assert_eq!(social_service_type("Mastodon"), "x-unknownsocialprofile");
    }
}
