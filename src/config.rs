//! Top-level application configuration.
//!
//! Configuration is stored in `.ticketdesk/config.yaml` and includes:
//! - Backend base URL
//! - Optional request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DeskError, Result};
use crate::paths::config_path;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Environment variable that overrides `backend.url` from the config file.
pub const BACKEND_URL_ENV: &str = "TICKETDESK_BACKEND_URL";

/// Keys accepted by `config set` / `config get`.
pub const VALID_CONFIG_KEYS: &[&str] = &["backend.url", "backend.timeout"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default, skip_serializing_if = "BackendConfig::is_default")]
    pub backend: BackendConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the ticket backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout in seconds (unset or 0 = no timeout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl BackendConfig {
    pub fn is_default(&self) -> bool {
        self == &BackendConfig::default()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            DeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            DeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Raw backend URL string: environment variable first, then the config file, then the default.
    pub fn backend_url_raw(&self) -> String {
        if let Ok(url) = env::var(BACKEND_URL_ENV)
            && !url.trim().is_empty()
        {
            return url.trim().to_string();
        }

        self.backend
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    /// Parsed backend base URL
    pub fn backend_url(&self) -> Result<Url> {
        parse_backend_url(&self.backend_url_raw())
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        match self.backend.timeout {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }

    /// Set a value by dotted key, validating it first
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend.url" => {
                parse_backend_url(value)?;
                self.backend.url = Some(value.trim().to_string());
            }
            "backend.timeout" => {
                let secs = value.trim().parse::<u64>().map_err(|_| {
                    DeskError::Config(format!(
                        "invalid value '{value}' for backend.timeout. Expected a number of seconds"
                    ))
                })?;
                self.backend.timeout = if secs == 0 { None } else { Some(secs) };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Get the stored value for a dotted key (file contents only, no env override)
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        match key {
            "backend.url" => Ok(self.backend.url.clone()),
            "backend.timeout" => Ok(self.backend.timeout.map(|t| t.to_string())),
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> DeskError {
    DeskError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_CONFIG_KEYS.join(", ")
    ))
}

/// Parse a backend base URL. Only http and https are accepted.
pub fn parse_backend_url(value: &str) -> Result<Url> {
    let value = value.trim();
    let url = Url::parse(value).map_err(|e| DeskError::InvalidUrl(value.to_string(), e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DeskError::Config(format!(
            "unsupported URL scheme '{other}' for backend.url, expected http or https"
        ))),
    }
}
