pub mod contact;
pub mod vcard;
