// Configuration loader
//
// Reads the TOML config file; a missing or malformed file is fatal at
// startup — there is no partial-config fallback.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::settings::Config;

#[derive(Deserialize)]
struct ConfigFile {
    command_runner: Config,
}

/// Load configuration from the given TOML file.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let parsed: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    let config = parsed.command_runner;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in: {}", path.display()))?;
    Ok(config)
}
