//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.coursedash/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::format::DEFAULT_CURRENCY_SYMBOL;
use crate::core::route::View;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CoursedashConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_file: Option<String>,
    pub start_view: Option<String>,
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub bar_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const DEFAULT_BAR_WIDTH: u16 = 40;
pub const MIN_TICK_RATE_MS: u64 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` means the bundled demo dataset.
    pub data_file: Option<PathBuf>,
    pub start_view: View,
    pub tick_rate_ms: u64,
    pub currency_symbol: String,
    pub bar_width: u16,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub data_file: Option<&'a Path>,
    pub start_view: Option<&'a str>,
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

/// Returns the path to `~/.coursedash/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".coursedash").join("config.toml"))
}

/// Load config from `~/.coursedash/config.toml`.
pub fn load_config() -> Result<CoursedashConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(CoursedashConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CoursedashConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<CoursedashConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CoursedashConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CoursedashConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# coursedash configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "/path/to/dashboard.json"   # Or COURSEDASH_DATA; omit for demo data
# start_view = "/admin"                   # /admin, /admin/coaches, /admin/quiz,
#                                         # /admin/usage, /notifications, /profile
# tick_rate_ms = 250

# [display]
# currency_symbol = "$"
# bar_width = 40                          # Max cells of a usage bar
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CoursedashConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    // Data file: CLI → env → config → demo
    let data_file = cli
        .data_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("COURSEDASH_DATA").ok().map(PathBuf::from))
        .or_else(|| config.general.data_file.as_ref().map(PathBuf::from));

    // Start view: CLI → env → config → Overview
    let start_path = cli
        .start_view
        .map(str::to_string)
        .or_else(|| std::env::var("COURSEDASH_START_VIEW").ok())
        .or_else(|| config.general.start_view.clone());
    let start_view = match start_path {
        Some(path) => View::from_path(&path).unwrap_or_else(|e| {
            warn!("Ignoring start view: {}", e);
            View::default()
        }),
        None => View::default(),
    };

    ResolvedConfig {
        data_file,
        start_view,
        tick_rate_ms: config
            .general
            .tick_rate_ms
            .unwrap_or(DEFAULT_TICK_RATE_MS)
            .max(MIN_TICK_RATE_MS),
        currency_symbol: config
            .display
            .currency_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        bar_width: config.display.bar_width.unwrap_or(DEFAULT_BAR_WIDTH),
    }
}
