#![allow(dead_code)]

use keydecoder::{SchemaSnapshot, TableInfo, util::encode_cmp_i64};

const BYTES_FLAG: u8 = 0x01;
const INT_FLAG: u8 = 0x03;

pub enum Val<'a> {
    Int(i64),
    Str(&'a str),
}

/// Ordered encoding of `vals`, as the storage layer writes key columns.
pub fn encode_values(vals: &[Val<'_>]) -> Vec<u8> {
    let mut out = Vec::new();
    for v in vals {
        match v {
            Val::Int(i) => {
                out.push(INT_FLAG);
                out.extend_from_slice(&encode_cmp_i64(*i));
            }
            Val::Str(s) => {
                out.push(BYTES_FLAG);
                for chunk in s.as_bytes().chunks(8) {
                    let mut group = [0u8; 8];
                    group[..chunk.len()].copy_from_slice(chunk);
                    out.extend_from_slice(&group);
                    out.push(0xff - (8 - chunk.len()) as u8);
                }
                if s.len() % 8 == 0 {
                    out.extend_from_slice(&[0u8; 8]);
                    out.push(0xf7);
                }
            }
        }
    }
    out
}

fn prefix(table_id: i64, marker: u8) -> Vec<u8> {
    let mut key = vec![b't'];
    key.extend_from_slice(&encode_cmp_i64(table_id));
    key.push(b'_');
    key.push(marker);
    key
}

pub fn int_row_key(table_id: i64, handle: i64) -> Vec<u8> {
    let mut key = prefix(table_id, b'r');
    key.extend_from_slice(&encode_cmp_i64(handle));
    key
}

pub fn common_row_key(table_id: i64, handle: &[Val<'_>]) -> Vec<u8> {
    let mut key = prefix(table_id, b'r');
    key.extend(encode_values(handle));
    key
}

pub fn index_key(table_id: i64, index_id: i64, vals: &[Val<'_>]) -> Vec<u8> {
    let mut key = prefix(table_id, b'i');
    key.extend_from_slice(&encode_cmp_i64(index_id));
    key.extend(encode_values(vals));
    key
}

/// table1 (index1), table2, and table3 partitioned into p0 (5) / p1 (6).
pub fn stub_catalog() -> SchemaSnapshot {
    SchemaSnapshot::new([
        TableInfo::new(1, "table1", 0, "test").with_index(1, "index1"),
        TableInfo::new(2, "table2", 0, "test"),
        TableInfo::new(3, "table3", 0, "test")
            .with_index(4, "index4")
            .with_partition(5, "p0")
            .with_partition(6, "p1"),
    ])
}
