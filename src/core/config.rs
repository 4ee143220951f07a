//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.manageme/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::Credentials;
use crate::api::client::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ManagemeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AccountConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub refresh_interval_secs: Option<u64>,
    pub render_interval_secs: Option<u64>,
    pub help_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_RENDER_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_HELP_FILE: &str = "res/help.txt";

const BUNDLED_HELP: &str = include_str!("../../res/help.txt");

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh_interval: Duration,
    pub render_interval: Duration,
    pub help_file: PathBuf,
}

impl ResolvedConfig {
    /// Both username and password, or `None` if either is missing.
    pub fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            name: self.username.clone()?,
            password: self.password.clone()?,
        })
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub username: Option<&'a str>,
    pub help_file: Option<&'a str>,
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

/// Returns the path to `~/.manageme/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".manageme").join("config.toml"))
}

/// Load config from `~/.manageme/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ManagemeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ManagemeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ManagemeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ManagemeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ManagemeConfig, ConfigError> {
    let config: ManagemeConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    // Never log the password.
    debug!(
        "Config: server={:?} user={:?} ui={:?}",
        config.server, config.account.username, config.ui
    );
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Manageme Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://localhost:5000/api/"   # Or set MANAGEME_BASE_URL

# [account]
# username = "me"                           # Or set MANAGEME_USERNAME
# password = "secret"                       # Or set MANAGEME_PASSWORD

# [ui]
# refresh_interval_secs = 5                 # How often todos and reminders are re-fetched
# render_interval_secs = 5                  # How often the screen is redrawn when idle
# help_file = "res/help.txt"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ManagemeConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ManagemeConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let base_url = cli
        .base_url
        .map(str::to_string)
        .or_else(|| env("MANAGEME_BASE_URL"))
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let username = cli
        .username
        .map(str::to_string)
        .or_else(|| env("MANAGEME_USERNAME"))
        .or_else(|| config.account.username.clone());

    // No CLI flag for the password: it would end up in shell history.
    let password = env("MANAGEME_PASSWORD").or_else(|| config.account.password.clone());

    let help_file = cli
        .help_file
        .map(str::to_string)
        .or_else(|| config.ui.help_file.clone())
        .unwrap_or_else(|| DEFAULT_HELP_FILE.to_string());

    ResolvedConfig {
        base_url,
        username,
        password,
        refresh_interval: interval(
            config.ui.refresh_interval_secs,
            DEFAULT_REFRESH_INTERVAL_SECS,
        ),
        render_interval: interval(config.ui.render_interval_secs, DEFAULT_RENDER_INTERVAL_SECS),
        help_file: PathBuf::from(help_file),
    }
}

/// Intervals below one second are raised to one second.
fn interval(secs: Option<u64>, default: u64) -> Duration {
    Duration::from_secs(secs.unwrap_or(default).max(1))
}

/// Reads the help screen text, falling back to the bundled copy.
pub fn load_help_text(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => {
            info!("Loaded help text from {}", path.display());
            contents
        }
        Ok(_) => {
            warn!("Help file is empty: {}", path.display());
            BUNDLED_HELP.to_string()
        }
        Err(e) => {
            debug!("Using bundled help text ({}: {})", path.display(), e);
            BUNDLED_HELP.to_string()
        }
    }
}
