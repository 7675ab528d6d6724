use crate::constants::ID_LEN;

const SIGN_MASK: u64 = 1u64 << 63;

/// Encode an `i64` so that unsigned byte-wise order matches signed order.
#[inline]
pub fn encode_cmp_i64(v: i64) -> [u8; ID_LEN] {
    (v as u64 ^ SIGN_MASK).to_be_bytes()
}

/// Inverse of [`encode_cmp_i64`].
#[inline]
pub fn decode_cmp_i64(b: [u8; ID_LEN]) -> i64 {
    (u64::from_be_bytes(b) ^ SIGN_MASK) as i64
}

/// Read a comparable id from the front of `b`, returning it with the tail.
/// `None` when fewer than 8 bytes are available.
pub fn read_cmp_i64(b: &[u8]) -> Option<(i64, &[u8])> {
    let (head, tail) = b.split_first_chunk::<ID_LEN>()?;
    Some((decode_cmp_i64(*head), tail))
}

/// Big-endian `u64` from the front of `b`.
#[inline]
pub fn read_u64_be(b: &[u8]) -> Option<(u64, &[u8])> {
    let (head, tail) = b.split_first_chunk::<8>()?;
    Some((u64::from_be_bytes(*head), tail))
}

pub fn hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn known_encodings() {
        assert_eq!(encode_cmp_i64(1), [0x80, 0, 0, 0, 0, 0, 0, 0x01]);
        assert_eq!(encode_cmp_i64(0), [0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode_cmp_i64(-1), [0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(encode_cmp_i64(i64::MIN), [0; 8]);
        assert_eq!(encode_cmp_i64(i64::MAX), [0xff; 8]);
    }

    #[test]
    fn read_needs_eight_bytes() {
        assert_eq!(read_cmp_i64(&[0x80, 0, 0, 0, 0, 0, 0]), None);
        let bytes = [0x80, 0, 0, 0, 0, 0, 0, 0x0a, b'x'];
        assert_eq!(read_cmp_i64(&bytes), Some((10, &b"x"[..])));
    }

    proptest! {
        #[test]
        fn byte_order_matches_integer_order(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(a.cmp(&b), encode_cmp_i64(a).cmp(&encode_cmp_i64(b)));
        }

        #[test]
        fn decode_inverts_encode(v in any::<i64>()) {
            prop_assert_eq!(decode_cmp_i64(encode_cmp_i64(v)), v);
        }
    }
}
