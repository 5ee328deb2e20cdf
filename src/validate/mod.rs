//! Column-schema validation for tabular datasets
//!
//! The validator reads the header row of a delimited dataset, checks every
//! column name against the declared schema, persists a one-line status
//! artifact and returns the overall result.

use std::fs;
use std::path::Path;

use crate::config::ValidationConfig;
use crate::error::{Result, TableCheckError};
use crate::schema::TableSchema;
use crate::utils::logging::log_io_failure;

/// Validates a dataset's column names against a declared schema
pub struct ColumnValidator {
    config: ValidationConfig,
}

impl ColumnValidator {
    /// Create a validator for one configuration
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate that every dataset column is declared in the schema
    ///
    /// Scans all columns in file order without early exit, so every mismatch
    /// is logged at error level even though only the overall boolean is
    /// persisted. After the scan the status file is overwritten with exactly
    /// one line, `Validation status: True` or `Validation status: False`.
    ///
    /// Columns declared in the schema but absent from the dataset are ignored.
    ///
    /// # Returns
    /// The overall validation status. A schema mismatch is not an error;
    /// `Err` means the dataset could not be read or the status file could not
    /// be written, in which case no status is persisted by this call.
    pub fn validate_all_columns(&self) -> Result<bool> {
        if self.config.schema.is_empty() {
            let err = TableCheckError::Schema(
                "schema contains no column definitions".to_string(),
            );
            log::error!("{err}");
            return Err(err);
        }

        let dataset_cols = read_header(&self.config.dataset_path)?;
        let schema = TableSchema::from_columns(&self.config.schema);

        let mut validation_status = true;
        for col in &dataset_cols {
            if !schema.contains(col) {
                log::error!("Column '{col}' is not in schema");
                validation_status = false;
            }
        }

        write_status(&self.config.status_file, validation_status)?;

        if validation_status {
            log::info!("All columns are valid according to the schema");
        } else {
            log::warn!("Some columns are not valid according to the schema");
        }

        Ok(validation_status)
    }
}

/// Read the header row of a delimited dataset
///
/// An empty file yields a zero-field header record; that is a malformed
/// dataset, not a valid zero-column table.
fn read_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        log_io_failure("open dataset", path, &e);
        TableCheckError::from(e)
    })?;
    let headers = reader.headers().map_err(|e| {
        log_io_failure("read dataset header from", path, &e);
        TableCheckError::from(e)
    })?;
    if headers.is_empty() {
        let err = TableCheckError::EmptyDataset(path.to_path_buf());
        log::error!("{err}");
        return Err(err);
    }
    Ok(headers.iter().map(str::to_string).collect())
}

/// Overwrite the status artifact with the validation outcome
fn write_status(path: &Path, status: bool) -> Result<()> {
    let text = if status { "True" } else { "False" };
    fs::write(path, format!("Validation status: {text}")).map_err(|e| {
        log_io_failure("write status file", path, &e);
        TableCheckError::from(e)
    })
}
