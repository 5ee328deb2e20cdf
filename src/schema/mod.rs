//! Schema definitions for tabular datasets
//!
//! This module defines the declared column schema that datasets are
//! validated against.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A declared column in a dataset schema
///
/// Schemas are supplied externally as an ordered list of these records,
/// typically loaded from a YAML configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Name of the column as it appears in the dataset header
    pub name: String,
    /// Declared data type of the column
    pub dtype: String,
}

impl ColumnDef {
    /// Create a new column definition
    pub fn new(name: impl Into<String>, dtype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype: dtype.into(),
        }
    }
}

/// A name-keyed view of a declared schema
///
/// Built once from the ordered column list; duplicate names collapse to the
/// last-seen dtype.
#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    columns: FxHashMap<String, String>,
}

impl TableSchema {
    /// Build the name->dtype map from an ordered list of column definitions
    #[must_use]
    pub fn from_columns(columns: &[ColumnDef]) -> Self {
        let mut map = FxHashMap::default();
        for col in columns {
            map.insert(col.name.clone(), col.dtype.clone());
        }
        Self { columns: map }
    }

    /// Whether a column name is declared in the schema
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Declared dtype for a column, if present
    #[must_use]
    pub fn dtype(&self, name: &str) -> Option<&str> {
        self.columns.get(name).map(String::as_str)
    }

    /// Number of distinct declared columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema declares no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lookup() {
        let schema = TableSchema::from_columns(&[
            ColumnDef::new("id", "int64"),
            ColumnDef::new("name", "object"),
        ]);
        assert_eq!(schema.len(), 2);
        assert!(schema.contains("id"));
        assert_eq!(schema.dtype("name"), Some("object"));
        assert!(!schema.contains("age"));
    }

    #[test]
    fn test_duplicate_names_collapse_to_last_dtype() {
        let schema = TableSchema::from_columns(&[
            ColumnDef::new("id", "int32"),
            ColumnDef::new("id", "int64"),
        ]);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.dtype("id"), Some("int64"));
    }

    #[test]
    fn test_empty_schema() {
        let schema = TableSchema::from_columns(&[]);
        assert!(schema.is_empty());
        assert!(!schema.contains("id"));
    }
}
