use std::path::Path;

use anyhow::{Context, Result};
use buildhooks_core::Config;
use tokio::fs::read_to_string;

use crate::get_buildhooks_dir;

/// Load `.buildhooks/config.json` under `project_dir`, falling back to defaults
/// when the file does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_buildhooks_config(project_dir: &Path) -> Result<Config> {
    let config_file = get_buildhooks_dir(project_dir).join("config.json");
    if !config_file.is_file() {
        tracing::debug!(path = %config_file.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config in {}", config_file.display()))?;
    Ok(config)
}
