//! Error handling for `table-check`.

use std::path::PathBuf;

/// Specialized error type for validation and file-utility operations
#[derive(Debug, thiserror::Error)]
pub enum TableCheckError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading the delimited dataset
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error parsing a YAML document
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error reading or writing a JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error encoding or decoding a binary artifact
    #[error("Binary codec error: {0}")]
    Bin(#[from] bincode::Error),

    /// A structured-config document parsed to nothing
    #[error("Empty document: {}", .0.display())]
    EmptyDocument(PathBuf),

    /// The dataset file contains no header row
    #[error("Empty dataset: {}", .0.display())]
    EmptyDataset(PathBuf),

    /// Error with the declared schema
    #[error("Schema error: {0}")]
    Schema(String),
}

/// Result type for `table-check` operations
pub type Result<T> = std::result::Result<T, TableCheckError>;
