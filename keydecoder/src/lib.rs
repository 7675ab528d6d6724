//! Recover database, table, partition, row and index identity from raw
//! table keys of the distributed storage layer.

pub mod catalog;
pub mod codec;
pub mod constants;
pub mod decode;
pub mod decoded;
pub mod error;
pub mod key;
pub mod resolve;
pub mod util;

use tracing::trace;

pub use catalog::{Catalog, SchemaSnapshot, TableInfo};
pub use codec::{MemComparableCodec, ValueCodec};
pub use decode::{Handle, HandleType};
pub use decoded::{DecodedKey, KeyPayload};
pub use error::{KeyDecodeError, Result};
pub use key::KeyKind;

use crate::{
    decode::{decode_handle, decode_index},
    key::parse_key,
    resolve::resolve_table,
};

/// Decodes keys with a fixed value codec. Holds no state between calls.
#[derive(Debug, Default, Clone)]
pub struct KeyDecoder<V = MemComparableCodec> {
    codec: V,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: ValueCodec> KeyDecoder<V> {
    pub fn with_codec(codec: V) -> Self {
        Self { codec }
    }

    /// Decode `key` and name what it refers to using `catalog`.
    ///
    /// Only structural problems with the bytes are errors; ids the catalog
    /// does not know simply leave the corresponding names empty.
    pub fn decode<C: Catalog + ?Sized>(&self, key: &[u8], catalog: &C) -> Result<DecodedKey> {
        let parsed = parse_key(key)?;

        // Decode before resolving so a malformed tail never yields a partial result.
        let payload = match parsed.kind {
            KeyKind::Record => {
                let handle = decode_handle(&parsed, &self.codec)?;
                Payload::Row(handle)
            }
            KeyKind::Index => Payload::Index(decode_index(&parsed, &self.codec)?),
        };

        let res = resolve_table(parsed.table_id, catalog);
        let payload = match payload {
            Payload::Row(handle) => KeyPayload::Row {
                handle_type: handle.handle_type(),
                handle_value: handle.to_string(),
            },
            Payload::Index(entry) => KeyPayload::Index {
                index_id: entry.index_id,
                index_name: res.index_name(entry.index_id).map(str::to_owned),
                index_values: entry.values,
            },
        };

        let (partition_id, partition_name) = res.partition.unzip();
        trace!(
            kind = %parsed.kind,
            table_id = res.table_id,
            codec = self.codec.name(),
            "decoded key"
        );
        Ok(DecodedKey {
            db_id: res.table.map(|t| t.db_id),
            db_name: res.table.map(|t| t.db_name.clone()),
            table_id: res.table_id,
            table_name: res.table.map(|t| t.name.clone()),
            partition_id,
            partition_name,
            is_partition_handle: res.is_partition_handle,
            payload,
        })
    }

    /// Like [`decode`](Self::decode), for keys copied out of logs as hex.
    /// Accepts an optional `0x` prefix and surrounding whitespace.
    pub fn decode_hex<C: Catalog + ?Sized>(&self, text: &str, catalog: &C) -> Result<DecodedKey> {
        let s = text.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let key = hex::decode(s).map_err(|_| KeyDecodeError::InvalidKeyFormat {
            reason: "key is not valid hex",
            key_hex: text.trim().to_string(),
        })?;
        self.decode(&key, catalog)
    }
}

enum Payload {
    Row(Handle),
    Index(decode::IndexEntry),
}

/// Decode `key` with the memcomparable value codec.
pub fn decode_key<C: Catalog + ?Sized>(key: &[u8], catalog: &C) -> Result<DecodedKey> {
    KeyDecoder::new().decode(key, catalog)
}

/// Decode a hex-encoded key with the memcomparable value codec.
pub fn decode_hex_key<C: Catalog + ?Sized>(text: &str, catalog: &C) -> Result<DecodedKey> {
    KeyDecoder::new().decode_hex(text, catalog)
}
