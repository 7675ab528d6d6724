use thiserror::Error;

use crate::codec::CodecError;

/// Result type for key decoding.
pub type Result<T> = std::result::Result<T, KeyDecodeError>;

/// Structural failures. Missing catalog entries are never reported here.
#[derive(Debug, Error)]
pub enum KeyDecodeError {
    #[error("invalid record/index key {key_hex}: {reason}")]
    InvalidKeyFormat { reason: &'static str, key_hex: String },

    #[error("malformed row handle: {reason}")]
    MalformedHandle {
        reason: &'static str,
        #[source]
        source: Option<CodecError>,
    },

    #[error("malformed index values: {0}")]
    MalformedIndexValues(#[source] CodecError),
}

impl KeyDecodeError {
    pub(crate) fn invalid(reason: &'static str, key: &[u8]) -> Self {
        Self::InvalidKeyFormat {
            reason,
            key_hex: crate::util::hex_upper(key),
        }
    }
}
