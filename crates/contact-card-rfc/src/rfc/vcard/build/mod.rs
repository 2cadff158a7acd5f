//! vCard 3.0 serialization (RFC 2426).
//!
//! ## Usage
//!
//! ```rust
//! use contact_card_rfc::rfc::vcard::build;
//! use contact_card_rfc::rfc::vcard::core::{ContactCard, TextProperty};
//!
//! let mut card = ContactCard::new();
//! card.formatted_name = TextProperty::new("Mr. John Q. Public, Esq.");
//!
//! let output = build::serialize_vcard3(&card);
//! assert!(output.contains("FN:Mr. John Q. Public\\, Esq.\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Text escaping of backslash, newline, comma and semicolon
//! - Control characters stripped from TEL and URL values; properties and
//!   parameters with names outside `[A-Za-z0-9-]` are skipped
//! - TYPE parameters uppercased, `pref` written as the `PREF` type

mod escape;
mod fold;
mod serializer;

pub use escape::{
    escape_component, escape_param_value, escape_text, is_valid_name, strip_controls,
};
pub use fold::{fold_line, push_folded};
pub use serializer::serialize_vcard3;
