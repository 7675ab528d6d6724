use core::fmt;

use crate::{
    constants::{INDEX_MARKER, KIND_END, PREFIX_LEN, RECORD_MARKER, TABLE_PREFIX, TABLE_SEP},
    error::{KeyDecodeError, Result},
    util::read_cmp_i64,
};

/// What a table key addresses, taken from the byte after `t{id}_`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyKind {
    Record,
    Index,
}

impl KeyKind {
    pub const fn from_marker(b: u8) -> Option<Self> {
        match b {
            RECORD_MARKER => Some(Self::Record),
            INDEX_MARKER => Some(Self::Index),
            _ => None,
        }
    }

    /// The marker byte written into the key.
    pub const fn marker(self) -> u8 {
        match self {
            Self::Record => RECORD_MARKER,
            Self::Index => INDEX_MARKER,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A key split along its fixed prefix. `rest` starts right after the kind marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    pub table_id: i64,
    pub kind: KeyKind,
    pub raw: &'a [u8],
    pub rest: &'a [u8],
}

/// Recognize the `t{table_id:8}_{r|i}` prefix.
///
/// Layout:
///   - 0:      `t`
///   - 1..=8:  comparable table id
///   - 9:      `_`
///   - 10:     `r` (row) or `i` (index)
pub fn parse_key(key: &[u8]) -> Result<ParsedKey<'_>> {
    let Some((&TABLE_PREFIX, body)) = key.split_first() else {
        return Err(KeyDecodeError::invalid("missing table prefix", key));
    };
    let (table_id, tail) =
        read_cmp_i64(body).ok_or_else(|| KeyDecodeError::invalid("truncated table id", key))?;

    if tail.first() != Some(&TABLE_SEP) {
        return Err(KeyDecodeError::invalid("missing table separator", key));
    }

    let kind = key
        .get(PREFIX_LEN)
        .copied()
        .and_then(KeyKind::from_marker)
        .ok_or_else(|| KeyDecodeError::invalid("neither a record nor an index key", key))?;

    Ok(ParsedKey {
        table_id,
        kind,
        raw: key,
        rest: &key[KIND_END..],
    })
}
