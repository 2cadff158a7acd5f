use thiserror::Error;

use crate::rfc::vcard::jcard::DecodeError;

/// Card encoding and decoding errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] contact_card_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
