//! Logging utilities
//!
//! This module provides standardized logging functions for file operations.

use std::fmt;
use std::path::Path;

/// Initialize env_logger with an `info` default filter
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}

/// Log a successful save with consistent format
///
/// # Arguments
/// * `kind` - Kind of artifact ("JSON", "Binary", ...)
/// * `path` - Path the artifact was written to
pub fn log_saved(kind: &str, path: &Path) {
    log::info!("{kind} file saved at: {}", path.display());
}

/// Log a successful load with consistent format
pub fn log_loaded(kind: &str, path: &Path) {
    log::info!("{kind} file loaded from: {}", path.display());
}

/// Log a failed file operation with consistent format
///
/// # Arguments
/// * `action` - What was being attempted ("save JSON file", ...)
/// * `path` - Path the operation touched
/// * `err` - The underlying error
pub fn log_io_failure(action: &str, path: &Path, err: &dyn fmt::Display) {
    log::error!("Failed to {action} {}: {err}", path.display());
}
