//! Read-only schema catalog consulted when naming a decoded key.

pub mod snapshot;
pub mod types;

pub use snapshot::SchemaSnapshot;
pub use types::{IndexInfo, PartitionDefinition, TableInfo};

/// A caller-owned, immutable view of the schema.
pub trait Catalog {
    /// Look up a live table by its own id. Partition ids do not match here.
    fn find_table_by_id(&self, id: i64) -> Option<&TableInfo>;

    /// Every table in the snapshot, in no particular order.
    fn all_tables(&self) -> Box<dyn Iterator<Item = &TableInfo> + '_>;

    /// Linear scan of every table's partition definitions.
    fn find_table_by_partition_id(&self, id: i64) -> Option<(&TableInfo, &PartitionDefinition)> {
        self.all_tables()
            .find_map(|table| table.partition_by_id(id).map(|p| (table, p)))
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn find_table_by_id(&self, id: i64) -> Option<&TableInfo> {
        (**self).find_table_by_id(id)
    }

    fn all_tables(&self) -> Box<dyn Iterator<Item = &TableInfo> + '_> {
        (**self).all_tables()
    }

    fn find_table_by_partition_id(&self, id: i64) -> Option<(&TableInfo, &PartitionDefinition)> {
        (**self).find_table_by_partition_id(id)
    }
}
