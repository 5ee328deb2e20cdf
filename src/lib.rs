//! A Rust library for validating delimited tabular datasets against a
//! declared column schema, with load/save helpers for pipeline artifacts.

pub mod config;
pub mod error;
pub mod schema;
pub mod utils;
pub mod validate;

// Re-export the most common types for easier use
// Core types
pub use config::ValidationConfig;
pub use error::{Result, TableCheckError};
pub use schema::{ColumnDef, TableSchema};
pub use validate::ColumnValidator;

// Utility functions
pub use utils::io::{create_directories, load_bin, load_json, read_yaml, save_bin, save_json};
pub use utils::logging::init_logging;
