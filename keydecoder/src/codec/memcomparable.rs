//! Decoder for the storage layer's ordered ("memcomparable") key encoding.
//!
//! Every value is a one-byte flag followed by a flag-specific payload. Fixed
//! width numbers are big-endian; signed ones have their sign bit flipped so
//! byte order equals numeric order.

use crate::{
    codec::{CodecError, Datum, ValueCodec},
    util::{decode_cmp_i64, read_u64_be},
};

pub const NIL_FLAG: u8 = 0x00;
pub const BYTES_FLAG: u8 = 0x01;
pub const COMPACT_BYTES_FLAG: u8 = 0x02;
pub const INT_FLAG: u8 = 0x03;
pub const UINT_FLAG: u8 = 0x04;
pub const FLOAT_FLAG: u8 = 0x05;
pub const DECIMAL_FLAG: u8 = 0x06;
pub const DURATION_FLAG: u8 = 0x07;
pub const VARINT_FLAG: u8 = 0x08;
pub const UVARINT_FLAG: u8 = 0x09;
pub const JSON_FLAG: u8 = 0x0a;
pub const MAX_FLAG: u8 = 0xfa;

const GROUP_SIZE: usize = 8;
const GROUP_MARKER: u8 = 0xff;
const GROUP_PAD: u8 = 0x00;
const SIGN_MASK: u64 = 1u64 << 63;
const MAX_VARINT_LEN: usize = 10;

#[derive(Debug, Default, Clone, Copy)]
pub struct MemComparableCodec;

impl ValueCodec for MemComparableCodec {
    type Scalar = Datum;

    fn decode_values(&self, bytes: &[u8]) -> Result<Vec<Datum>, CodecError> {
        let mut r = Reader { buf: bytes, pos: 0 };
        let mut out = Vec::new();
        while !r.is_empty() {
            out.push(r.datum()?);
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "memcomparable"
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], CodecError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(CodecError::Truncated {
                what,
                offset: self.pos,
            })?;
        let s = &self.buf[self.pos..end];
        self.pos = end;
        Ok(s)
    }

    fn u8(&mut self, what: &'static str) -> Result<u8, CodecError> {
        Ok(self.take(1, what)?[0])
    }

    fn u64_be(&mut self, what: &'static str) -> Result<u64, CodecError> {
        let b = self.take(8, what)?;
        read_u64_be(b)
            .map(|(v, _)| v)
            .ok_or(CodecError::Truncated { what, offset: self.pos })
    }

    fn cmp_i64(&mut self, what: &'static str) -> Result<i64, CodecError> {
        let v = self.u64_be(what)?;
        Ok(decode_cmp_i64(v.to_be_bytes()))
    }

    fn datum(&mut self) -> Result<Datum, CodecError> {
        let offset = self.pos;
        let flag = self.u8("value flag")?;
        let datum = match flag {
            NIL_FLAG => Datum::Null,
            BYTES_FLAG => Datum::Bytes(self.group_bytes()?),
            COMPACT_BYTES_FLAG => Datum::Bytes(self.compact_bytes()?),
            INT_FLAG => Datum::Int(self.cmp_i64("int")?),
            UINT_FLAG => Datum::Uint(self.u64_be("uint")?),
            FLOAT_FLAG => Datum::Float(decode_cmp_f64(self.u64_be("float")?)),
            DURATION_FLAG => Datum::Duration(self.cmp_i64("duration")?),
            VARINT_FLAG => Datum::Int(self.varint()?),
            UVARINT_FLAG => Datum::Uint(self.uvarint()?),
            MAX_FLAG => Datum::MaxValue,
            // Decimal and JSON payloads are not decoded.
            _ => {
                return Err(CodecError::UnsupportedFlag { flag, offset });
            }
        };
        Ok(datum)
    }

    /// 8-byte groups, each followed by `0xFF - pad_count`.
    fn group_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let mut data = Vec::new();
        loop {
            let offset = self.pos;
            let group = self.take(GROUP_SIZE + 1, "bytes group")?;
            let marker = group[GROUP_SIZE];
            let pad = usize::from(GROUP_MARKER - marker);
            if pad > GROUP_SIZE {
                return Err(CodecError::InvalidBytesGroup { marker, offset });
            }
            let real = GROUP_SIZE - pad;
            data.extend_from_slice(&group[..real]);
            if pad != 0 {
                if group[real..GROUP_SIZE].iter().any(|&b| b != GROUP_PAD) {
                    return Err(CodecError::InvalidBytesGroup { marker, offset });
                }
                return Ok(data);
            }
        }
    }

    fn compact_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let offset = self.pos;
        let len = self.varint()?;
        let n = usize::try_from(len).map_err(|_| CodecError::InvalidLength { len, offset })?;
        Ok(self.take(n, "compact bytes")?.to_vec())
    }

    fn uvarint(&mut self) -> Result<u64, CodecError> {
        let offset = self.pos;
        let mut x = 0u64;
        let mut shift = 0u32;
        for i in 0..MAX_VARINT_LEN {
            let b = self.u8("varint")?;
            if b < 0x80 {
                if i == MAX_VARINT_LEN - 1 && b > 1 {
                    return Err(CodecError::VarintOverflow { offset });
                }
                return Ok(x | (u64::from(b) << shift));
            }
            x |= u64::from(b & 0x7f) << shift;
            shift += 7;
        }
        Err(CodecError::VarintOverflow { offset })
    }

    fn varint(&mut self) -> Result<i64, CodecError> {
        let ux = self.uvarint()?;
        let x = (ux >> 1) as i64;
        Ok(if ux & 1 != 0 { !x } else { x })
    }
}

fn decode_cmp_f64(u: u64) -> f64 {
    let bits = if u & SIGN_MASK != 0 { u & !SIGN_MASK } else { !u };
    f64::from_bits(bits)
}
