//! Configuration commands.
//!
//! - `config show`: Display effective configuration
//! - `config set`: Set a configuration value
//! - `config get`: Print one configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{BACKEND_URL_ENV, Config};
use crate::error::{DeskError, Result};

/// Reject underscore spellings like `backend_url` with a dot-notation hint
fn validate_config_key(key: &str) -> Result<&str> {
    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        return Err(DeskError::Config(format!(
            "invalid config key '{key}'. Use dot notation: '{dot_version}'"
        )));
    }
    Ok(key)
}

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;

    let effective_url = config.backend_url_raw();
    let url_from_env = std::env::var(BACKEND_URL_ENV).is_ok_and(|v| !v.trim().is_empty());
    let timeout = config.timeout().map(|t| t.as_secs());

    let json_output = json!({
        "backend": {
            "url": effective_url,
            "url_from_env": url_from_env,
            "timeout": timeout,
        },
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}:\n", "backend".cyan()));

    let url_note = if url_from_env {
        format!(" (from {BACKEND_URL_ENV})").dimmed().to_string()
    } else if config.backend.url.is_none() {
        " (default)".dimmed().to_string()
    } else {
        String::new()
    };
    text_output.push_str(&format!("  url: {effective_url}{url_note}\n"));

    let timeout_text = match timeout {
        Some(secs) => format!("{secs}s"),
        None => "none".dimmed().to_string(),
    };
    text_output.push_str(&format!("  timeout: {timeout_text}\n\n"));
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;

    let stored = config.get_value(key)?;

    let text = match &stored {
        Some(v) => format!("Set {} to {}", key.cyan(), v),
        None => format!("Unset {}", key.cyan()),
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(text)
    .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;
    let value = config
        .get_value(key)?
        .ok_or_else(|| DeskError::Config(format!("{key} not set")))?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
        "configured": true,
    }))
    .with_text(value.clone())
    .print(output)
}
