//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use std::path::Path;
use volunteerhub_core::config::{CliConfigOverrides, LayeredConfig, CONFIG_FILE_NAME};

/// Load layered configuration: file, then environment, then CLI overrides
///
/// An explicit `config_path` must exist. Without one, `./volunteerhub.toml`
/// is read when present.
pub fn load_config(
    config_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match config_path {
        Some(path) => {
            config = config
                .load_from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        }
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.exists() {
                config = config
                    .load_from_file(default_path)
                    .context("Failed to load configuration file")?;
            }
        }
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}
