//! Card core types (RFC 6350 properties, RFC 7095 shapes).
//!
//! This module provides the in-memory model of a contact card:
//!
//! - [`ContactCard`] - The card aggregate
//! - [`Property`] - Borrowed view of one property, one variant per kind
//! - [`Parameters`] - Property parameters
//! - [`PropertyValue`] - Property value variants
//!
//! ## Property Types
//!
//! - [`TextProperty`] - VERSION, FN, TITLE
//! - [`TextListProperty`] - NICKNAME, ORG
//! - [`NameProperty`] - N
//! - [`AddressProperty`] - ADR
//! - [`BirthdayProperty`] - BDAY
//! - [`TelephoneProperty`], [`EmailProperty`], [`UrlProperty`]
//! - [`SocialProfileProperty`] - X-SOCIALPROFILE
//! - [`VendorProperty`] - any other extension property
//!
//! ## Example
//!
//! ```rust
//! use contact_card_rfc::rfc::vcard::core::{ContactCard, NameProperty, TextProperty};
//!
//! let mut card = ContactCard::new();
//! card.formatted_name = TextProperty::new("John Doe");
//! card.name = Some(NameProperty::simple("Doe", "John"));
//! ```

mod card;
mod datetime;
mod parameter;
mod property;
mod structured;
mod value;

pub use card::{CARD_VERSION, ContactCard};
pub use datetime::BirthdayProperty;
pub use parameter::{Parameters, TypeValue, names as parameter_names};
pub use property::{
    EmailProperty, Kind, KindProperty, Property, TelephoneProperty, TextListProperty,
    TextProperty, UrlProperty, VendorProperty, names,
};
pub use structured::{AddressProperty, NameProperty, SocialProfileProperty};
pub use value::{Component, PropertyValue, ValueType};
