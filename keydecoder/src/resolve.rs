use tracing::debug;

use crate::catalog::{Catalog, TableInfo};

/// Names attached to a table id. Every name is best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'c> {
    /// The owning table's id when resolved, otherwise the id from the key.
    pub table_id: i64,
    pub table: Option<&'c TableInfo>,
    /// `(id, name)` of the partition the key's id turned out to be.
    pub partition: Option<(i64, String)>,
    pub is_partition_handle: bool,
}

impl<'c> Resolution<'c> {
    fn unresolved(table_id: i64) -> Self {
        Self {
            table_id,
            table: None,
            partition: None,
            is_partition_handle: false,
        }
    }

    /// Index name within the owning table, if both are known.
    pub fn index_name(&self, index_id: i64) -> Option<&'c str> {
        let table = self.table?;
        let name = table.index_by_id(index_id).map(|i| i.name.as_str());
        if name.is_none() {
            debug!(table_id = table.id, index_id, "index not found in table");
        }
        name
    }
}

/// Map the id embedded in a key to its table, falling back to a scan of
/// partition definitions. A direct table match always wins.
pub fn resolve_table<C: Catalog + ?Sized>(key_id: i64, catalog: &C) -> Resolution<'_> {
    if let Some(table) = catalog.find_table_by_id(key_id) {
        return Resolution {
            table_id: table.id,
            table: Some(table),
            partition: None,
            is_partition_handle: false,
        };
    }

    debug!(table_id = key_id, "table not in catalog; scanning partitions");
    match catalog.find_table_by_partition_id(key_id) {
        Some((table, partition)) => {
            debug!(
                partition_id = key_id,
                table_id = table.id,
                partition = %partition.name,
                "resolved partition to owning table"
            );
            Resolution {
                table_id: table.id,
                table: Some(table),
                partition: Some((key_id, partition.name.clone())),
                is_partition_handle: true,
            }
        }
        None => {
            debug!(table_id = key_id, "no table or partition matches");
            Resolution::unresolved(key_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SchemaSnapshot;
    use pretty_assertions::assert_eq;

    fn snapshot() -> SchemaSnapshot {
        SchemaSnapshot::new([
            TableInfo::new(1, "table1", 10, "test").with_index(1, "index1"),
            TableInfo::new(3, "table3", 10, "test")
                .with_index(4, "index4")
                .with_partition(5, "p0")
                .with_partition(6, "p1"),
            // id 7 is both a live table and a partition of table 8
            TableInfo::new(7, "table7", 11, "other"),
            TableInfo::new(8, "table8", 11, "other").with_partition(7, "p7"),
        ])
    }

    #[test]
    fn direct_match() {
        let snap = snapshot();
        let r = resolve_table(1, &snap);
        assert_eq!(r.table_id, 1);
        assert_eq!(r.table.map(|t| t.name.as_str()), Some("table1"));
        assert_eq!(r.partition, None);
        assert!(!r.is_partition_handle);
        assert_eq!(r.index_name(1), Some("index1"));
        assert_eq!(r.index_name(2), None);
    }

    #[test]
    fn partition_fallback_substitutes_owner() {
        let snap = snapshot();
        let r = resolve_table(6, &snap);
        assert_eq!(r.table_id, 3);
        assert_eq!(r.table.map(|t| t.name.as_str()), Some("table3"));
        assert_eq!(r.partition, Some((6, "p1".to_string())));
        assert!(r.is_partition_handle);
        assert_eq!(r.index_name(4), Some("index4"));
    }

    #[test]
    fn direct_match_beats_partition() {
        let snap = snapshot();
        let r = resolve_table(7, &snap);
        assert_eq!(r.table_id, 7);
        assert_eq!(r.partition, None);
        assert!(!r.is_partition_handle);
    }

    #[test]
    fn unknown_id_keeps_raw_value() {
        let snap = snapshot();
        let r = resolve_table(4, &snap);
        assert_eq!(r, Resolution::unresolved(4));
        assert_eq!(r.index_name(1), None);
    }
}
