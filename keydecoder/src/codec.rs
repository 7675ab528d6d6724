//! Value codec used for composite handles and index column values.

pub mod datum;
pub mod memcomparable;

use std::fmt::{Debug, Display};

use thiserror::Error;

pub use datum::Datum;
pub use memcomparable::MemComparableCodec;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("truncated {what} at offset {offset}")]
    Truncated { what: &'static str, offset: usize },
    #[error("unsupported value flag 0x{flag:02x} at offset {offset}")]
    UnsupportedFlag { flag: u8, offset: usize },
    #[error("invalid bytes group marker 0x{marker:02x} at offset {offset}")]
    InvalidBytesGroup { marker: u8, offset: usize },
    #[error("invalid length {len} at offset {offset}")]
    InvalidLength { len: i64, offset: usize },
    #[error("varint overflows 64 bits at offset {offset}")]
    VarintOverflow { offset: usize },
}

/// Decodes an ordered byte string into a sequence of scalar values.
pub trait ValueCodec: Send + Sync {
    type Scalar: Display + Debug;

    /// Decode every value in `bytes`, in encoding order.
    fn decode_values(&self, bytes: &[u8]) -> Result<Vec<Self::Scalar>, CodecError>;

    /// Human-readable name for the codec.
    fn name(&self) -> &'static str;
}

impl<C: ValueCodec + ?Sized> ValueCodec for &C {
    type Scalar = C::Scalar;

    fn decode_values(&self, bytes: &[u8]) -> Result<Vec<Self::Scalar>, CodecError> {
        (**self).decode_values(bytes)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
