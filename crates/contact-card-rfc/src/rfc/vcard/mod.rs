//! Contact card model with jCard and vCard 3.0 output.
//!
//! ## Overview
//!
//! A [`ContactCard`] holds a fixed set of vCard 4.0 properties. It can be
//! written as jCard (RFC 7095) and read back, or written as a vCard 3.0
//! (RFC 2426) text block.
//!
//! ## Usage
//!
//! ```rust
//! use contact_card_rfc::rfc::vcard::{ContactCard, NameProperty, TextProperty, jcard};
//!
//! let mut card = ContactCard::new();
//! card.formatted_name = TextProperty::new("Jane Doe");
//! card.name = Some(NameProperty::simple("Doe", "Jane"));
//!
//! let json = card.encode_jcard().unwrap();
//! let decoded = jcard::decode(&json).unwrap();
//! assert_eq!(decoded.formatted_name(), "Jane Doe");
//!
//! let text = card.encode_vcard3();
//! assert!(text.contains("N:Doe;Jane;;;\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Card and property types
//! - [`jcard`] - jCard encoding and decoding
//! - [`build`] - vCard 3.0 serialization

pub mod build;
pub mod core;
pub mod jcard;

#[cfg(test)]
mod tests;

pub use self::core::{
    AddressProperty, BirthdayProperty, ContactCard, NameProperty, Parameters, Property,
    PropertyValue, SocialProfileProperty, TextProperty, ValueType,
};
pub use build::serialize_vcard3;
pub use jcard::{DecodeError, DecodeResult, decode, encode};
