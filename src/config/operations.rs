//! Config loading, validation, and discovery.

use super::model::Config;
use super::types::BUILTIN_PLACEHOLDERS;
use crate::error::{CgiError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Config file looked up in the server root when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "layout-cgi.yaml";

static PLACEHOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+$").expect("placeholder name pattern is valid")
});

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CgiError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CgiError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CgiError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CgiError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Find and load the config for a server root.
    ///
    /// An explicit path must exist. Without one, `<server_root>/layout-cgi.yaml`
    /// is used when present, and the built-in defaults otherwise.
    pub fn resolve(server_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let discovered = server_root.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            log::debug!("loading config from {}", discovered.display());
            return Self::load(&discovered);
        }

        Ok(Self::default())
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `layout` must be non-empty
    /// - `content_type` must be non-empty and a single header line
    /// - `page.messages` must have at least one entry
    /// - `page.extra` names must be plain identifiers and not built-in placeholders
    pub fn validate(&self) -> Result<()> {
        if self.layout.trim().is_empty() {
            return Err(CgiError::ConfigError(
                "config validation failed: layout must not be empty".to_string(),
            ));
        }

        if self.content_type.trim().is_empty() {
            return Err(CgiError::ConfigError(
                "config validation failed: content_type must not be empty".to_string(),
            ));
        }
        if self.content_type.contains(['\r', '\n']) {
            return Err(CgiError::ConfigError(
                "config validation failed: content_type must not contain line breaks".to_string(),
            ));
        }

        if self.page.messages.is_empty() {
            return Err(CgiError::ConfigError(
                "config validation failed: page.messages must have at least one entry"
                    .to_string(),
            ));
        }

        for name in self.page.extra.keys() {
            if !PLACEHOLDER_NAME.is_match(name) {
                return Err(CgiError::ConfigError(format!(
                    "config validation failed: invalid placeholder name '{}' in page.extra \
                     (use letters, digits, '_', '.', '-')",
                    name
                )));
            }
            if BUILTIN_PLACEHOLDERS.contains(&name.as_str()) {
                return Err(CgiError::ConfigError(format!(
                    "config validation failed: page.extra cannot override built-in placeholder '{}'",
                    name
                )));
            }
        }

        Ok(())
    }
}
