use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use log::info;
use table_check::{ColumnValidator, ValidationConfig, create_directories, read_yaml};

fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    table_check::init_logging();

    let config_path = std::env::args()
        .nth(1)
        .context("usage: table-check <config.yaml>")?;
    let config_path = Path::new(&config_path);

    info!("Loading validation config from: {}", config_path.display());
    let config: ValidationConfig = read_yaml(config_path)
        .with_context(|| format!("loading validation config {}", config_path.display()))?;

    if let Some(parent) = config.status_file.parent() {
        create_directories(&[parent], true)?;
    }

    let validator = ColumnValidator::new(config);
    let status = validator.validate_all_columns()?;

    info!("Validation finished with status: {status}");
    Ok(if status {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
