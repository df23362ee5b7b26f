//! CLI configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

use promo_catalog::prelude::{SortDirection, SortKey, ViewMode};

/// CLI configuration file (`promo.toml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Display defaults applied before command-line flags.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default presentation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Default sort key.
    #[serde(default)]
    pub sort: SortKey,
    /// Default sort direction.
    #[serde(default)]
    pub order: SortDirection,
    /// Default view mode.
    #[serde(default)]
    pub view: ViewMode,
}

/// Load the config from `path`, or discover `promo.toml` upward from the
/// working directory. A missing config file is not an error.
pub fn load(path: Option<&str>) -> Result<CliConfig> {
    if let Some(path) = path {
        return read_config(path);
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        loop {
            let candidate = dir.join("promo.toml");
            if candidate.exists() {
                return read_config(&candidate.to_string_lossy());
            }
            if !dir.pop() {
                break;
            }
        }
    }

    Ok(CliConfig::default())
}

fn read_config(path: &str) -> Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path))
}
