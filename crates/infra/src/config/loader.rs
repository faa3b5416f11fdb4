//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `WELLSCOPE_SERVICE_URL` is set, loads from environment variables
//! 2. Otherwise probes the standard paths for a config file
//! 3. Falls back to built-in defaults when no file exists
//!
//! ## Environment Variables
//! - `WELLSCOPE_SERVICE_URL`: Base URL of the analysis service
//! - `WELLSCOPE_TIMEOUT_SECS`: Request timeout in seconds, at least 1 (unset = none)
//! - `WELLSCOPE_ANIMATE`: Whether to animate the score (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./wellscope.toml` or `./wellscope.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wellscope_domain::{Config, DisplayConfig, ReportError, Result, ServiceConfig};

use crate::errors::InfraError;

pub const SERVICE_URL_VAR: &str = "WELLSCOPE_SERVICE_URL";
pub const TIMEOUT_VAR: &str = "WELLSCOPE_TIMEOUT_SECS";
pub const ANIMATE_VAR: &str = "WELLSCOPE_ANIMATE";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["wellscope.toml", "wellscope.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Environment first, then a probed config file, then defaults.
///
/// # Errors
/// Returns `ReportError::Config` if an environment value or the probed file
/// is invalid. A missing file is not an error.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => debug!(error = %e, "Environment configuration incomplete, trying file"),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `WELLSCOPE_SERVICE_URL` is required; the other variables are optional and
/// fall back to their defaults.
///
/// # Errors
/// Returns `ReportError::Config` if the service URL is missing, or the
/// timeout does not parse or is zero.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(SERVICE_URL_VAR)?;
    let timeout_secs = std::env::var(TIMEOUT_VAR)
        .ok()
        .map(|s| match s.trim().parse::<u64>() {
            Ok(0) => Err(ReportError::Config("Invalid timeout: must be at least 1 second".into())),
            Ok(secs) => Ok(secs),
            Err(e) => Err(ReportError::Config(format!("Invalid timeout: {e}"))),
        })
        .transpose()?;
    let animate = env_bool(ANIMATE_VAR, true);

    Ok(Config {
        service: ServiceConfig { base_url, timeout_secs },
        display: DisplayConfig { animate, ..DisplayConfig::default() },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. TOML and JSON are
/// both supported (detected by file extension).
///
/// # Errors
/// Returns `ReportError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ReportError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ReportError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.toml` or `.json`); files without
/// an extension are read as JSON.
///
/// # Errors
/// Returns `ReportError::Config` if format is unsupported or parsing fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => Ok(serde_json::from_str(contents).map_err(InfraError::from)?),
        _ => Err(ReportError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    probe_in(&dirs)
}

fn probe_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Get required environment variable
///
/// # Errors
/// Returns `ReportError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ReportError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
