//! Utility functions for IO and logging
//!
//! This module provides the generic infrastructure the pipeline stages call
//! into: file load/save helpers and standardized logging.

pub mod io;
pub mod logging;

// Re-export commonly used functions for convenience
pub use io::{create_directories, load_bin, load_json, read_yaml, save_bin, save_json};
pub use logging::init_logging;
