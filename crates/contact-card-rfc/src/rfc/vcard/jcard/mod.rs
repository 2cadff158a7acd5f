//! jCard codec (RFC 7095).
//!
//! ## Usage
//!
//! ```rust
//! use contact_card_rfc::rfc::vcard::jcard;
//!
//! let input = r#"["vcard", [
//!     ["version", {}, "text", "4.0"],
//!     ["fn", {}, "text", "Simon Perreault"],
//!     ["bday", {}, "date", "--02-03"]
//! ]]"#;
//!
//! let card = jcard::decode(input).unwrap();
//! assert_eq!(card.formatted_name(), "Simon Perreault");
//!
//! let output = jcard::encode(&card).unwrap();
//! assert!(output.starts_with(r#"["vcard",[["version",{},"text","4.0"]"#));
//! ```
//!
//! ## Anomalies
//!
//! Shapes the decoder can work around (a name without five components, a
//! parameter that is a number, a duplicate FN) are recorded in
//! [`DecodeDiagnostics`] instead of failing the decode, unless
//! [`DecodeOptions`] asks for strict handling.

mod decode;
mod diagnostics;
mod encode;
mod error;
mod values;

#[cfg(test)]
mod error_tests;

pub use decode::{decode, decode_with};
pub use diagnostics::{Anomaly, AnomalyKind, DecodeDiagnostics, DecodeOptions};
pub use encode::{encode, encode_property};
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use values::{component_values, extract_parameters, parse_birthday};

/// First element of every jCard document.
pub const SIGNATURE: &str = "vcard";
