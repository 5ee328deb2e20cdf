//! IO utilities for pipeline artifacts
//!
//! Load/save helpers for structured config (YAML), JSON documents and opaque
//! binary artifacts, plus directory creation. Every function logs one info
//! line on success and logs then propagates on any underlying failure; none
//! retry.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, TableCheckError};
use crate::utils::logging::{log_io_failure, log_loaded, log_saved};

/// Read a YAML document into a typed value
///
/// A document that parses to nothing (empty file, only comments) is an
/// `EmptyDocument` error. Callers that want an untyped mapping can use
/// `T = serde_yaml::Value`.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        log_io_failure("read YAML file", path, &e);
        TableCheckError::from(e)
    })?;
    let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
        log_io_failure("parse YAML file", path, &e);
        TableCheckError::from(e)
    })?;
    if value.is_null() {
        let err = TableCheckError::EmptyDocument(path.to_path_buf());
        log::error!("{err}");
        return Err(err);
    }
    let parsed = serde_yaml::from_value(value).map_err(|e| {
        log_io_failure("deserialize YAML file", path, &e);
        TableCheckError::from(e)
    })?;
    log_loaded("YAML", path);
    Ok(parsed)
}

/// Create each directory, including parents
///
/// Idempotent: existing directories are not an error. Logs one info line per
/// entry when `verbose`.
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| {
            log_io_failure("create directory", path, &e);
            TableCheckError::from(e)
        })?;
        if verbose {
            log::info!("Created directory at: {}", path.display());
        }
    }
    Ok(())
}

/// Save a value as human-readable JSON with 4-space indentation
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        log_io_failure("create JSON file", path, &e);
        TableCheckError::from(e)
    })?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer).map_err(|e| {
        log_io_failure("save JSON file", path, &e);
        TableCheckError::from(e)
    })?;
    writer.flush().map_err(|e| {
        log_io_failure("flush JSON file", path, &e);
        TableCheckError::from(e)
    })?;
    log_saved("JSON", path);
    Ok(())
}

/// Load a JSON document into a typed value
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        log_io_failure("open JSON file", path, &e);
        TableCheckError::from(e)
    })?;
    let data = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        log_io_failure("load JSON file", path, &e);
        TableCheckError::from(e)
    })?;
    log_loaded("JSON", path);
    Ok(data)
}

/// Save a value as an opaque binary artifact
///
/// Intended for non-human-readable artifacts such as trained models.
pub fn save_bin<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        log_io_failure("create binary file", path, &e);
        TableCheckError::from(e)
    })?;
    bincode::serialize_into(BufWriter::new(file), value).map_err(|e| {
        log_io_failure("save binary file", path, &e);
        TableCheckError::from(e)
    })?;
    log_saved("Binary", path);
    Ok(())
}

/// Load a value from an opaque binary artifact
pub fn load_bin<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        log_io_failure("open binary file", path, &e);
        TableCheckError::from(e)
    })?;
    let value = bincode::deserialize_from(BufReader::new(file)).map_err(|e| {
        log_io_failure("load binary file", path, &e);
        TableCheckError::from(e)
    })?;
    log_loaded("Binary", path);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;
    use serde_json::json;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Metrics {
        rmse: f64,
        r2: f64,
    }

    #[test]
    fn test_json_round_trip_with_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let data = json!({"rmse": 0.42, "r2": 0.87});

        save_json(&path, &data).unwrap();
        let loaded: serde_json::Value = load_json(&path).unwrap();
        assert_eq!(loaded, data);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \""));
    }

    #[test]
    fn test_binary_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        let original = Metrics { rmse: 0.42, r2: 0.87 };

        save_bin(&path, &original).unwrap();
        let restored: Metrics = load_bin(&path).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_read_yaml_typed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.yaml");
        fs::write(&path, "rmse: 0.42\nr2: 0.87\n").unwrap();

        let metrics: Metrics = read_yaml(&path).unwrap();
        assert_eq!(metrics, Metrics { rmse: 0.42, r2: 0.87 });
    }

    #[test]
    fn test_read_yaml_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "").unwrap();

        let result: Result<serde_yaml::Value> = read_yaml(&path);
        assert!(matches!(result, Err(TableCheckError::EmptyDocument(_))));
    }

    #[test]
    fn test_read_yaml_missing_file() {
        let dir = tempdir().unwrap();
        let result: Result<serde_yaml::Value> = read_yaml(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(TableCheckError::Io(_))));
    }

    #[test]
    fn test_create_directories_with_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let flat = dir.path().join("c");

        create_directories(&[&nested, &flat], true).unwrap();
        assert!(nested.is_dir());
        assert!(flat.is_dir());

        // Idempotent on a second run
        create_directories(&[&nested, &flat], false).unwrap();
    }
}
