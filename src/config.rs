//! Configuration management for the contact book.
//!
//! Handles loading settings from an optional TOML file.

use crate::app::{SessionOptions, DEFAULT_PROMPT};
use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prompt written before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the greeting once when the session starts.
    #[serde(default)]
    pub greet_on_start: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            greet_on_start: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("contacts")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ContactsError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ContactsError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Builds session options, letting `prompt_override` win over the file.
    pub fn session_options(&self, prompt_override: Option<&str>) -> SessionOptions {
        SessionOptions {
            prompt: prompt_override.unwrap_or(&self.prompt).to_string(),
            greet_on_start: self.greet_on_start,
        }
    }
}
