//! Configuration file support for cocoa-sbom.
//!
//! Provides YAML-based configuration through `cocoa-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cocoa_sbom::sbom_generation::domain::TargetDefinition;
use cocoa_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "cocoa-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub component_version: Option<String>,
    pub output: Option<PathBuf>,
    pub podfile_lock: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub download_dir: Option<PathBuf>,
    pub purl_strategy: Option<String>,
    pub always_append_download_url: Option<bool>,
    pub download_url_param: Option<String>,
    pub always_generic: Option<bool>,
    pub spec_repos: Option<Vec<PathBuf>>,
    pub target: Option<TargetConfig>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Podfile target definition restricting pods to build configurations.
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    pub name: String,
    /// Pod name to the configurations it is whitelisted for.
    #[serde(default)]
    pub configuration_whitelist: HashMap<String, Vec<String>>,
}

impl From<TargetConfig> for TargetDefinition {
    fn from(config: TargetConfig) -> Self {
        TargetDefinition::new(config.name, config.configuration_whitelist)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref strategy) = config.purl_strategy {
        if let Err(e) = strategy.parse::<cocoa_sbom::sbom_generation::policies::PurlStrategy>() {
            bail!("Invalid config: purl_strategy: {}", e);
        }
    }

    if let Some(ref target) = config.target {
        if target.name.trim().is_empty() {
            bail!(
                "Invalid config: target.name must not be empty.\n\n\
                 💡 Hint: Use the Podfile target name (e.g., \"App\")."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
