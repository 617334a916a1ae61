//! Provider configuration
//!
//! Handles loading provider specs from YAML files and environment variables.

mod providers;

pub use providers::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load the provider configuration from the first config file found, falling
/// back to the built-in provider set.
///
/// `FATHOM_PROVIDERS` overrides the search; otherwise `providers.yml` is
/// looked up in the working directory, `config/`, and the OS config dir.
pub fn load() -> Result<ProvidersConfig> {
    if let Ok(path) = std::env::var("FATHOM_PROVIDERS") {
        let path = PathBuf::from(path);
        if path.exists() {
            return load_from(&path);
        }
    }

    let paths = [
        PathBuf::from("providers.yml"),
        PathBuf::from("config/providers.yml"),
        dirs::config_dir()
            .map(|p| p.join("fathom/providers.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            return load_from(path);
        }
    }

    info!("no providers.yml found, using built-in providers");
    let mut config = ProvidersConfig::default();
    config.merge_env();
    Ok(config)
}

fn load_from(path: &Path) -> Result<ProvidersConfig> {
    info!("loading providers from: {}", path.display());
    let mut config = ProvidersConfig::from_file(path)?;
    config.merge_env();
    Ok(config)
}
