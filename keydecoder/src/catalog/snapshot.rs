use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;

use crate::catalog::{Catalog, TableInfo};

/// In-memory catalog keyed by table id.
#[derive(Debug, Clone, Default)]
pub struct SchemaSnapshot {
    tables: HashMap<i64, TableInfo>,
}

impl SchemaSnapshot {
    /// Later entries replace earlier ones with the same id.
    pub fn new(tables: impl IntoIterator<Item = TableInfo>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Parse a JSON array of tables.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let tables: Vec<TableInfo> =
            serde_json::from_str(json).context("schema snapshot is not a JSON array of tables")?;
        Ok(Self::new(tables))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading schema snapshot {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Catalog for SchemaSnapshot {
    fn find_table_by_id(&self, id: i64) -> Option<&TableInfo> {
        self.tables.get(&id)
    }

    fn all_tables(&self) -> Box<dyn Iterator<Item = &TableInfo> + '_> {
        Box::new(self.tables.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_json_with_optional_lists() {
        let snap = SchemaSnapshot::from_json_str(
            r#"[
                {"id": 1, "name": "t1", "db_id": 2, "db_name": "test"},
                {"id": 3, "name": "t3", "db_id": 2, "db_name": "test",
                 "indices": [{"id": 4, "name": "idx"}],
                 "partitions": [{"id": 5, "name": "p0"}, {"id": 6, "name": "p1"}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(snap.len(), 2);
        assert!(snap.find_table_by_id(1).unwrap().indices.is_empty());

        let (table, part) = snap.find_table_by_partition_id(6).unwrap();
        assert_eq!(table.name, "t3");
        assert_eq!(part.name, "p1");
        assert_eq!(snap.find_table_by_id(3).unwrap().index_by_id(4).unwrap().name, "idx");
    }

    #[test]
    fn partition_ids_are_not_table_ids() {
        let snap = SchemaSnapshot::new([TableInfo::new(3, "t3", 1, "db").with_partition(5, "p0")]);
        assert!(snap.find_table_by_id(5).is_none());
        assert!(snap.find_table_by_partition_id(3).is_none());
        assert!(snap.find_table_by_partition_id(7).is_none());
    }

    #[test]
    fn duplicate_ids_keep_last() {
        let snap = SchemaSnapshot::new([
            TableInfo::new(1, "old", 1, "db"),
            TableInfo::new(1, "new", 1, "db"),
        ]);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.find_table_by_id(1).unwrap().name, "new");
    }

    #[test]
    fn bad_json_reports_context() {
        let err = SchemaSnapshot::from_json_str(r#"{"id": 1}"#).unwrap_err();
        assert!(err.to_string().contains("JSON array of tables"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = SchemaSnapshot::from_json_file("/nonexistent/schema.json").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/schema.json"));
    }
}
