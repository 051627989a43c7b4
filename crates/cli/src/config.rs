//! Credential resolution for the CLI.
//!
//! Environment variables take priority; an optional TOML file fills in
//! whatever the environment leaves unset.

use std::path::Path;

use faxplus::FaxConfig;
use faxplus::config::{ENV_ACCESS_TOKEN, ENV_USER_ID};
use proto::ConfigError;
use serde::Deserialize;

/// Credentials and endpoint as stored in the optional config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Fax.Plus API access token.
    #[serde(default)]
    pub access_token: String,
    /// Fax.Plus account/user id.
    #[serde(default)]
    pub user_id: String,
    /// Optional base URL override.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl FileConfig {
    /// Loads and parses the TOML config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ConfigError::Toml(e.to_string()))
    }
}

/// Resolves the fax configuration from environment and optional file.
pub fn resolve(path: Option<&Path>) -> Result<FaxConfig, ConfigError> {
    let file = match path {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    resolve_with(&file, |key| std::env::var(key).ok())
}

/// Resolves the fax configuration with an explicit environment lookup.
pub fn resolve_with(
    file: &FileConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<FaxConfig, ConfigError> {
    let config = FaxConfig::from_lookup(|key| {
        env(key)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| match key {
                ENV_ACCESS_TOKEN => non_empty(&file.access_token),
                ENV_USER_ID => non_empty(&file.user_id),
                _ => None,
            })
    })?;

    Ok(match &file.base_url {
        Some(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url.trim()),
        _ => config,
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
