//! Configuration management for load-template

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template rendering configuration
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid YAML config: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?,
            _ => return Err(Error::config("Unsupported config file format")),
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::config(format!("Failed to serialize to YAML: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for name in self.render.variables.keys() {
            if !is_identifier(name) {
                return Err(Error::config(format!(
                    "Variable name '{}' is not a valid template identifier",
                    name
                )));
            }
        }

        if self.render.autoescape.iter().any(|s| s.is_empty()) {
            return Err(Error::config("Autoescape suffixes must not be empty"));
        }

        Ok(())
    }
}

/// Template rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// File name suffixes that get HTML autoescaping (none by default)
    pub autoescape: Vec<String>,
    /// Extra variables bound alongside `cert_dir` and `http_port`
    pub variables: BTreeMap<String, String>,
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
