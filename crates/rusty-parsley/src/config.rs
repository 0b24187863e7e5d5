// File: rusty-parsley/src/config.rs
// Purpose: Configuration parsing from rusty-parsley.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::parser::{ArgumentColons, EmptyTokens};

pub const DEFAULT_CONFIG_FILE: &str = "rusty-parsley.toml";

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub translator: TranslatorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Translation behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Policy for empty tokens in rule strings (default: "fallback")
    #[serde(default)]
    pub empty_tokens: EmptyTokens,

    /// Treatment of a second `:` inside a token (default: "truncate")
    #[serde(default)]
    pub argument_colons: ArgumentColons,
}

/// Output formatting for the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::info!(?path, "loaded configuration");
        Ok(config)
    }

    /// Load configuration from default path (./rusty-parsley.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
