//! Configuration loading and service URL resolution
//!
//! Provides multi-tier configuration resolution with
//! CLI flag → environment variable → TOML file priority.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// TOML configuration file contents (`~/.config/vendhub/import.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Base URL of the import service (e.g. `https://api.vendhub.example`)
    pub api_url: Option<String>,
    /// Bearer token sent with every request
    pub api_token: Option<String>,
    /// Poll interval override in milliseconds
    pub poll_interval_ms: Option<u64>,
}

impl TomlConfig {
    /// Load configuration from a TOML file. Missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }
}

/// Default configuration file path for the platform
/// (`~/.config/vendhub/import.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vendhub").join("import.toml"))
}

/// Resolve the import service URL following the priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
pub fn resolve_api_url(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_config: &TomlConfig,
) -> Result<String> {
    let cli_url = cli_arg.filter(|u| !u.trim().is_empty());
    let env_url = std::env::var(env_var_name)
        .ok()
        .filter(|u| !u.trim().is_empty());
    let toml_url = toml_config
        .api_url
        .as_deref()
        .filter(|u| !u.trim().is_empty());

    let mut sources = Vec::new();
    if cli_url.is_some() {
        sources.push("flag");
    }
    if env_url.is_some() {
        sources.push("environment");
    }
    if toml_url.is_some() {
        sources.push("TOML");
    }

    // Warn on multiple sources (potential misconfiguration)
    if sources.len() > 1 {
        warn!(
            "Import service URL found in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    cli_url
        .map(str::to_string)
        .or(env_url)
        .or_else(|| toml_url.map(str::to_string))
        .map(|u| u.trim_end_matches('/').to_string())
        .ok_or_else(|| {
            Error::Config(format!(
                "Import service URL not configured. Please configure using one of:\n\
                 1. Flag: --api-url https://api.vendhub.example\n\
                 2. Environment: {}=https://api.vendhub.example\n\
                 3. TOML config: ~/.config/vendhub/import.toml (api_url = \"...\")",
                env_var_name
            ))
        })
}

/// Resolve the optional bearer token: flag → environment → TOML
pub fn resolve_api_token(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_config: &TomlConfig,
) -> Option<String> {
    cli_arg
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(env_var_name)
                .ok()
                .filter(|t| !t.trim().is_empty())
        })
        .or_else(|| {
            toml_config
                .api_token
                .clone()
                .filter(|t| !t.trim().is_empty())
        })
}
