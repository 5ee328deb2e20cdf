//! Configuration for the column validator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::schema::ColumnDef;

/// Configuration for a single validation run
///
/// Immutable for the duration of one `validate_all_columns` call. Loadable
/// from a YAML document via `utils::io::read_yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Path to the delimited dataset file (must have a header row)
    pub dataset_path: PathBuf,
    /// Path to the single-line status artifact, overwritten on every run
    pub status_file: PathBuf,
    /// Declared schema, in column order as supplied
    pub schema: Vec<ColumnDef>,
}
