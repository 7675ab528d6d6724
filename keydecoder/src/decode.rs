use core::fmt;

use serde::Serialize;

use crate::{
    codec::ValueCodec,
    constants::ID_LEN,
    error::{KeyDecodeError, Result},
    key::ParsedKey,
    util::{decode_cmp_i64, read_cmp_i64},
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum HandleType {
    #[serde(rename = "int")]
    IntHandle,
    #[serde(rename = "common")]
    CommonHandle,
}

impl HandleType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IntHandle => "int",
            Self::CommonHandle => "common",
        }
    }
}

impl fmt::Display for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row identity carried by a record key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handle {
    Int(i64),
    /// Display form of each primary-key column, in key order.
    Common(Vec<String>),
}

impl Handle {
    pub const fn handle_type(&self) -> HandleType {
        match self {
            Self::Int(_) => HandleType::IntHandle,
            Self::Common(_) => HandleType::CommonHandle,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Common(cols) => write!(f, "{{{}}}", cols.join(", ")),
        }
    }
}

/// Decode the handle following `r`. Exactly 8 bytes is an int handle;
/// any other non-empty tail goes through the value codec.
pub fn decode_handle<V: ValueCodec>(key: &ParsedKey<'_>, codec: &V) -> Result<Handle> {
    match key.rest.len() {
        0 => Err(KeyDecodeError::MalformedHandle {
            reason: "record key has no handle",
            source: None,
        }),
        ID_LEN => {
            let mut b = [0u8; ID_LEN];
            b.copy_from_slice(key.rest);
            Ok(Handle::Int(decode_cmp_i64(b)))
        }
        _ => {
            let values = codec
                .decode_values(key.rest)
                .map_err(|e| KeyDecodeError::MalformedHandle {
                    reason: "common handle rejected by value codec",
                    source: Some(e),
                })?;
            Ok(Handle::Common(values.iter().map(ToString::to_string).collect()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub index_id: i64,
    pub values: Vec<String>,
}

/// Decode `{index_id:8}{values...}` following `i`.
pub fn decode_index<V: ValueCodec>(key: &ParsedKey<'_>, codec: &V) -> Result<IndexEntry> {
    let (index_id, tail) = read_cmp_i64(key.rest)
        .ok_or_else(|| KeyDecodeError::invalid("truncated index id", key.raw))?;
    let values = codec
        .decode_values(tail)
        .map_err(KeyDecodeError::MalformedIndexValues)?;
    Ok(IndexEntry {
        index_id,
        values: values.iter().map(ToString::to_string).collect(),
    })
}
