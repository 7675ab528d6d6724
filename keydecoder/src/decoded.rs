use core::fmt;

use serde::Serialize;

use crate::{decode::HandleType, key::KeyKind};

/// Everything recoverable from one key. Absent names mean the catalog had no
/// matching entry, which is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    pub table_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_name: Option<String>,
    /// Set when the key's id matched a partition rather than a table.
    #[serde(skip_serializing_if = "is_false")]
    pub is_partition_handle: bool,
    #[serde(flatten)]
    pub payload: KeyPayload,
}

/// Row fields and index fields never appear together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KeyPayload {
    Row {
        handle_type: HandleType,
        handle_value: String,
    },
    Index {
        index_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        index_name: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        index_values: Vec<String>,
    },
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl DecodedKey {
    pub fn kind(&self) -> KeyKind {
        match self.payload {
            KeyPayload::Row { .. } => KeyKind::Record,
            KeyPayload::Index { .. } => KeyKind::Index,
        }
    }

    pub fn handle_type(&self) -> Option<HandleType> {
        match &self.payload {
            KeyPayload::Row { handle_type, .. } => Some(*handle_type),
            KeyPayload::Index { .. } => None,
        }
    }

    pub fn handle_value(&self) -> Option<&str> {
        match &self.payload {
            KeyPayload::Row { handle_value, .. } => Some(handle_value),
            KeyPayload::Index { .. } => None,
        }
    }

    pub fn index_id(&self) -> Option<i64> {
        match &self.payload {
            KeyPayload::Index { index_id, .. } => Some(*index_id),
            KeyPayload::Row { .. } => None,
        }
    }

    pub fn index_name(&self) -> Option<&str> {
        match &self.payload {
            KeyPayload::Index { index_name, .. } => index_name.as_deref(),
            KeyPayload::Row { .. } => None,
        }
    }

    /// Empty for row keys.
    pub fn index_values(&self) -> &[String] {
        match &self.payload {
            KeyPayload::Index { index_values, .. } => index_values,
            KeyPayload::Row { .. } => &[],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn or_dash(v: Option<&str>) -> &str {
    v.unwrap_or("-")
}

impl fmt::Display for DecodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DecodedKey {{")?;
        writeln!(f, "  kind         : {}", self.kind())?;
        match self.db_id {
            Some(id) => writeln!(
                f,
                "  database     : {} (id {id})",
                or_dash(self.db_name.as_deref())
            )?,
            None => writeln!(f, "  database     : -")?,
        }
        writeln!(
            f,
            "  table        : {} (id {})",
            or_dash(self.table_name.as_deref()),
            self.table_id
        )?;
        if let Some(pid) = self.partition_id {
            writeln!(
                f,
                "  partition    : {} (id {pid})",
                or_dash(self.partition_name.as_deref())
            )?;
        }
        if self.is_partition_handle {
            writeln!(f, "  via partition: true")?;
        }
        match &self.payload {
            KeyPayload::Row {
                handle_type,
                handle_value,
            } => writeln!(f, "  handle       : {handle_type} {handle_value}")?,
            KeyPayload::Index {
                index_id,
                index_name,
                index_values,
            } => {
                writeln!(
                    f,
                    "  index        : {} (id {index_id})",
                    or_dash(index_name.as_deref())
                )?;
                writeln!(f, "  values       : [{}]", index_values.join(", "))?;
            }
        }
        write!(f, "}}")
    }
}
