// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration lives in a TOML file:
//!
//! ```toml
//! server_url = "ws://roster.example:7890"
//! connect_timeout_secs = 5
//! share_base = "https://roster.example/"
//!
//! [auto_assign]
//! min_day = 2
//! min_night = 1
//! ```
//!
//! The file is found via `--config`, then `$ROTA_CONFIG`, then
//! `<config_dir>/rota/config.toml`. A missing file yields defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use rota_core::protocol::{DEFAULT_MIN_DAY, DEFAULT_MIN_NIGHT};
use rota_core::Constraints;

use crate::error::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ROTA_CONFIG";

const CONFIG_DIR_NAME: &str = "rota";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// WebSocket URL of the roster store.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Max time to wait for the initial connection in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Base for `rota share`. Empty means a bare query string.
    #[serde(default)]
    pub share_base: String,
    #[serde(default)]
    pub auto_assign: AutoAssignConfig,
}

/// Default staffing minimums for auto-assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AutoAssignConfig {
    #[serde(default = "default_min_day")]
    pub min_day: u32,
    #[serde(default = "default_min_night")]
    pub min_night: u32,
}

fn default_server_url() -> String {
    "ws://localhost:7890".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_min_day() -> u32 {
    DEFAULT_MIN_DAY
}

fn default_min_night() -> u32 {
    DEFAULT_MIN_NIGHT
}

impl Default for AutoAssignConfig {
    fn default() -> Self {
        AutoAssignConfig {
            min_day: default_min_day(),
            min_night: default_min_night(),
        }
    }
}

impl AutoAssignConfig {
    pub fn constraints(&self) -> Constraints {
        Constraints {
            min_day: self.min_day,
            min_night: self.min_night,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: default_server_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            share_base: String::new(),
            auto_assign: AutoAssignConfig::default(),
        }
    }
}

impl Config {
    /// Loads the config at `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from the first location that applies.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match locate(explicit, env) {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_server_url(&self.server_url)?;
        if self.connect_timeout_secs == 0 {
            return Err(Error::Config(
                "connect_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Picks the config file: explicit flag, then the env path, then the user
/// config dir.
pub fn locate(explicit: Option<&Path>, env: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// The store is reached over WebSocket only.
pub fn validate_server_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("ws://")
        .or_else(|| url.strip_prefix("wss://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::InvalidServerUrl(url.to_string())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
