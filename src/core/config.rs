//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.biblia/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_SEARCH_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BibliaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub wrap_width: Option<usize>,
    pub search_limit: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE: &str = "http://localhost:8001/api/v1";
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Env vars consulted for the API base URL, highest priority first.
pub const API_BASE_ENV_VARS: [&str; 2] = ["NUXT_PUBLIC_API_BASE", "API_BASE"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base: String,
    pub wrap_width: usize,
    pub search_limit: u32,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.biblia/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".biblia").join("config.toml"))
}

/// Load config from `~/.biblia/config.toml`.
pub fn load_config() -> Result<BibliaConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(BibliaConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BibliaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<BibliaConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BibliaConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BibliaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Biblia Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:8001/api/v1"   # Or set NUXT_PUBLIC_API_BASE / API_BASE

# [display]
# wrap_width = 80
# search_limit = 10
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_base` and `cli_width` are from CLI flags (None = not specified).
pub fn resolve(
    config: &BibliaConfig,
    cli_api_base: Option<&str>,
    cli_width: Option<usize>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_api_base, cli_width, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(
    config: &BibliaConfig,
    cli_api_base: Option<&str>,
    cli_width: Option<usize>,
    env: F,
) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // API base: CLI → env → config → default
    let api_base = cli_api_base
        .map(|s| s.to_string())
        .or_else(|| {
            API_BASE_ENV_VARS
                .iter()
                .find_map(|key| env(*key).filter(|v| !v.trim().is_empty()))
        })
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    ResolvedConfig {
        api_base,
        wrap_width: cli_width
            .or(config.display.wrap_width)
            .unwrap_or(DEFAULT_WRAP_WIDTH),
        search_limit: config
            .display
            .search_limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT),
    }
}
