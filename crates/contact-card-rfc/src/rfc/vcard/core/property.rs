//! Card property types (RFC 6350 §6).

use super::datetime::BirthdayProperty;
use super::parameter::Parameters;
use super::structured::{AddressProperty, NameProperty, SocialProfileProperty};
use super::value::{Component, PropertyValue, ValueType};

/// Property names as they appear in jCard.
pub mod names {
    pub const VERSION: &str = "version";
    pub const KIND: &str = "kind";
    pub const FN: &str = "fn";
    pub const N: &str = "n";
    pub const NICKNAME: &str = "nickname";
    pub const TITLE: &str = "title";
    pub const ORG: &str = "org";
    pub const BDAY: &str = "bday";
    pub const TEL: &str = "tel";
    pub const ADR: &str = "adr";
    pub const EMAIL: &str = "email";
    pub const URL: &str = "url";
    /// Vendor extension, not part of RFC 6350.
    pub const SOCIALPROFILE: &str = "x-socialprofile";
}

/// A single text value (VERSION, FN, TITLE).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextProperty {
    pub parameters: Parameters,
    pub value: String,
}

impl TextProperty {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            parameters: Parameters::new(),
            value: value.into(),
        }
    }
}

/// A list of text values (NICKNAME, ORG).
///
/// For ORG the first value is the organization name, subsequent values are
/// organizational units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextListProperty {
    pub parameters: Parameters,
    pub values: Vec<String>,
}

impl TextListProperty {
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self {
            parameters: Parameters::new(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// KIND property values (RFC 6350 §6.1.4).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Individual,
    Group,
    Organization,
    Location,
    /// Extension or unknown kind.
    Other(String),
}

impl Kind {
    /// Parses from kind string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "individual" => Self::Individual,
            "group" => Self::Group,
            "org" | "organization" => Self::Organization,
            "location" => Self::Location,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the kind string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
            Self::Organization => "org",
            Self::Location => "location",
            Self::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindProperty {
    pub parameters: Parameters,
    pub kind: Kind,
}

impl KindProperty {
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            parameters: Parameters::new(),
            kind,
        }
    }
}

/// Telephone number (TEL).
///
/// The number is stored without a `tel:` scheme; it is added when the
/// value type is `uri`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelephoneProperty {
    pub parameters: Parameters,
    pub value_type: ValueType,
    pub number: String,
}

impl TelephoneProperty {
    pub const SCHEME: &'static str = "tel:";

    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            parameters: Parameters::new(),
            value_type: ValueType::Uri,
            number: number.into(),
        }
    }

    /// Returns the value as written to jCard.
    #[must_use]
    pub fn wire_value(&self) -> String {
        if self.value_type == ValueType::Uri && !self.number.starts_with(Self::SCHEME) {
            format!("{}{}", Self::SCHEME, self.number)
        } else {
            self.number.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailProperty {
    pub parameters: Parameters,
    pub value_type: ValueType,
    pub address: String,
}

impl EmailProperty {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            parameters: Parameters::new(),
            value_type: ValueType::Text,
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlProperty {
    pub parameters: Parameters,
    pub value_type: ValueType,
    pub url: String,
}

impl UrlProperty {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            parameters: Parameters::new(),
            value_type: ValueType::Uri,
            url: url.into(),
        }
    }
}

/// A free-form extension property, preserved opaquely.
///
/// The value is trusted to match the declared value type.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProperty {
    pub name: String,
    pub parameters: Parameters,
    pub value_type: ValueType,
    pub value: PropertyValue,
}

impl VendorProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
            value_type,
            value,
        }
    }
}

/// A borrowed view of one card property, in jCard terms.
///
/// Every supported property kind is a variant here, so encoders match
/// exhaustively.
#[derive(Debug, Clone, Copy)]
pub enum Property<'a> {
    Version(&'a TextProperty),
    FormattedName(&'a TextProperty),
    Kind(&'a KindProperty),
    Name(&'a NameProperty),
    Nickname(&'a TextListProperty),
    Birthday(&'a BirthdayProperty),
    Organization(&'a TextListProperty),
    Title(&'a TextProperty),
    Telephone(&'a TelephoneProperty),
    Email(&'a EmailProperty),
    Address(&'a AddressProperty),
    Url(&'a UrlProperty),
    SocialProfile(&'a SocialProfileProperty),
    Vendor(&'a VendorProperty),
}

impl<'a> Property<'a> {
    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Version(_) => names::VERSION,
            Self::FormattedName(_) => names::FN,
            Self::Kind(_) => names::KIND,
            Self::Name(_) => names::N,
            Self::Nickname(_) => names::NICKNAME,
            Self::Birthday(_) => names::BDAY,
            Self::Organization(_) => names::ORG,
            Self::Title(_) => names::TITLE,
            Self::Telephone(_) => names::TEL,
            Self::Email(_) => names::EMAIL,
            Self::Address(_) => names::ADR,
            Self::Url(_) => names::URL,
            Self::SocialProfile(_) => names::SOCIALPROFILE,
            Self::Vendor(p) => &p.name,
        }
    }

    /// Returns the property parameters.
    #[must_use]
    pub fn parameters(&self) -> &'a Parameters {
        match *self {
            Self::Version(p) | Self::FormattedName(p) | Self::Title(p) => &p.parameters,
            Self::Kind(p) => &p.parameters,
            Self::Name(p) => &p.parameters,
            Self::Nickname(p) | Self::Organization(p) => &p.parameters,
            Self::Birthday(p) => &p.parameters,
            Self::Telephone(p) => &p.parameters,
            Self::Email(p) => &p.parameters,
            Self::Address(p) => &p.parameters,
            Self::Url(p) => &p.parameters,
            Self::SocialProfile(p) => &p.parameters,
            Self::Vendor(p) => &p.parameters,
        }
    }

    /// Returns the declared value type.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Version(_)
            | Self::FormattedName(_)
            | Self::Kind(_)
            | Self::Name(_)
            | Self::Nickname(_)
            | Self::Organization(_)
            | Self::Title(_)
            | Self::Address(_)
            | Self::SocialProfile(_) => ValueType::Text,
            Self::Birthday(_) => ValueType::Date,
            Self::Telephone(p) => p.value_type,
            Self::Email(p) => p.value_type,
            Self::Url(p) => p.value_type,
            Self::Vendor(p) => p.value_type,
        }
    }

    /// Returns the value element in the shape jCard expects.
    ///
    /// Text lists with one value collapse to a bare string; N always has
    /// five components and ADR always seven.
    #[must_use]
    pub fn value(&self) -> PropertyValue {
        match self {
            Self::Version(p) | Self::FormattedName(p) | Self::Title(p) => {
                PropertyValue::Text(p.value.clone())
            }
            Self::Kind(p) => PropertyValue::Text(p.kind.as_str().to_string()),
            Self::Name(p) => PropertyValue::Structured(
                p.components()
                    .into_iter()
                    .map(Component::from_values)
                    .collect(),
            ),
            Self::Nickname(p) | Self::Organization(p) => match p.values.as_slice() {
                [single] => PropertyValue::Text(single.clone()),
                values => PropertyValue::List(values.to_vec()),
            },
            Self::Birthday(p) => PropertyValue::Text(p.to_date_string()),
            Self::Telephone(p) => PropertyValue::Text(p.wire_value()),
            Self::Email(p) => PropertyValue::Text(p.address.clone()),
            Self::Url(p) => PropertyValue::Text(p.url.clone()),
            Self::Address(p) => PropertyValue::List(p.components()),
            Self::SocialProfile(p) => PropertyValue::List(p.components()),
            Self::Vendor(p) => p.value.clone(),
        }
    }
}
