use serde::{Deserialize, Serialize};

/// Table identity plus the pieces of its definition a key can refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub id: i64,
    pub name: String,
    pub db_id: i64,
    pub db_name: String,
    #[serde(default)]
    pub indices: Vec<IndexInfo>,
    /// Empty for non-partitioned tables.
    #[serde(default)]
    pub partitions: Vec<PartitionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionDefinition {
    pub id: i64,
    pub name: String,
}

impl TableInfo {
    pub fn new(id: i64, name: impl Into<String>, db_id: i64, db_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            db_id,
            db_name: db_name.into(),
            indices: Vec::new(),
            partitions: Vec::new(),
        }
    }

    pub fn with_index(mut self, id: i64, name: impl Into<String>) -> Self {
        self.indices.push(IndexInfo { id, name: name.into() });
        self
    }

    pub fn with_partition(mut self, id: i64, name: impl Into<String>) -> Self {
        self.partitions.push(PartitionDefinition { id, name: name.into() });
        self
    }

    pub fn index_by_id(&self, id: i64) -> Option<&IndexInfo> {
        self.indices.iter().find(|i| i.id == id)
    }

    pub fn partition_by_id(&self, id: i64) -> Option<&PartitionDefinition> {
        self.partitions.iter().find(|p| p.id == id)
    }
}
