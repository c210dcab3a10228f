//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::{StrsError, StrsResult};

/// Environment variable naming the store file.
pub const STORE_ENV_VAR: &str = "STRS_STORE";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrsConfig {
    /// Path to the .strs store file. Unset means "resolve the default".
    #[serde(default)]
    pub store_path: Option<String>,
    /// Output format ("text" or "json").
    #[serde(default = "default_format")]
    pub format: String,
    /// Log level used when `--verbose` is not given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StrsConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            format: default_format(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> StrsResult<StrsConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        StrsError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    let config: StrsConfig = toml::from_str(&content)
        .map_err(|e| StrsError::Config(format!("Failed to parse config: {e}")))?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolve the store file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. STRS_STORE environment variable
/// 3. `store_path` from the config file
/// 4. .strs/store.strs in current directory, if it exists
/// 5. ~/.store.strs (global default)
pub fn resolve_store_path(explicit: Option<&Path>, config: &StrsConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(env_path) = std::env::var(STORE_ENV_VAR) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    if let Some(path) = &config.store_path {
        return PathBuf::from(path);
    }

    let cwd_store = PathBuf::from(".strs/store.strs");
    if cwd_store.exists() {
        return cwd_store;
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".store.strs")
}
