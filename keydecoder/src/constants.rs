/// First byte of every table-scoped key.
pub const TABLE_PREFIX: u8 = b't';
/// Separates the table id from the key-kind marker.
pub const TABLE_SEP: u8 = b'_';
/// Key-kind marker for row (record) keys.
pub const RECORD_MARKER: u8 = b'r';
/// Key-kind marker for secondary index keys.
pub const INDEX_MARKER: u8 = b'i';

/// Width of every comparable id (table, partition, index, int handle).
pub const ID_LEN: usize = 8;
/// `t` + table id.
pub const TABLE_PREFIX_KEY_LEN: usize = 1 + ID_LEN;
/// `t` + table id + `_`.
pub const PREFIX_LEN: usize = TABLE_PREFIX_KEY_LEN + 1;
/// Bytes consumed before the handle / index id starts.
pub const KIND_END: usize = PREFIX_LEN + 1;
