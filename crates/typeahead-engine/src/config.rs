//! Completion engine configuration
//!
//! Settings come from an optional TOML file, then `TYPEAHEAD__*` environment
//! variables (nested keys separated by `__`, e.g. `TYPEAHEAD__REDIS__PORT`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use typeahead_store::RedisConnectionConfig;

use crate::error::{CompleterError, Result};

/// Fixed suffix of the backing key
pub const COMPLETER_KEY: &str = "completer";

/// Default pagination window, members per round trip
pub const DEFAULT_WINDOW: usize = 50;

/// Default leaf marker
pub const DEFAULT_SENTINEL: char = '*';

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleterConfig {
    /// Prepended to [`COMPLETER_KEY`] so several corpora can share a store
    pub key_prefix: String,
    /// Character appended to mark complete words
    pub sentinel: char,
    /// Members fetched per range request
    pub window: usize,
    /// Serialize add/remove/flush within this engine instance
    pub serialize_mutations: bool,
    /// Redis server settings, used when the engine runs on Redis
    pub redis: RedisConnectionConfig,
}

impl CompleterConfig {
    /// Name of the sorted set holding this corpus
    pub fn key(&self) -> String {
        format!("{}{}", self.key_prefix, COMPLETER_KEY)
    }

    /// Builder-style key prefix override
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Builder-style window override
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Check the settings the algorithms depend on
    ///
    /// The sentinel must sort strictly below `'0'`, so below every digit,
    /// lowercase letter and multi-byte character, and must not be whitespace
    /// so that ordinary words remain storable.
    pub fn validate(&self) -> Result<()> {
        if !self.sentinel.is_ascii() {
            return Err(CompleterError::config(format!(
                "sentinel {:?} must be an ASCII character",
                self.sentinel
            )));
        }
        if self.sentinel >= '0' || self.sentinel.is_ascii_whitespace() {
            return Err(CompleterError::config(format!(
                "sentinel {:?} must sort below letters and digits and must not be whitespace",
                self.sentinel
            )));
        }
        if self.window == 0 {
            return Err(CompleterError::config("window must be at least 1"));
        }
        Ok(())
    }
}

impl Default for CompleterConfig {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            sentinel: DEFAULT_SENTINEL,
            window: DEFAULT_WINDOW,
            serialize_mutations: true,
            redis: RedisConnectionConfig::default(),
        }
    }
}

/// Loads [`CompleterConfig`] from file and environment
pub struct ConfigManager {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Environment only
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: "TYPEAHEAD".to_string(),
        }
    }

    /// File first, environment on top; a missing file is not an error
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
            ..Self::new()
        }
    }

    /// Use a different environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load and validate
    pub fn load(&self) -> Result<CompleterConfig> {
        let mut builder = Config::builder();
        if let Some(path) = &self.config_path {
            builder = builder.add_source(File::from(path.clone()).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config: CompleterConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Write `config` as TOML to the configured path
    pub fn save(&self, config: &CompleterConfig) -> Result<()> {
        let path = self
            .config_path
            .as_ref()
            .ok_or_else(|| CompleterError::config("no configuration path set"))?;
        let toml = toml::to_string(config).map_err(|e| CompleterError::config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CompleterError::config(e.to_string()))?;
        }
        std::fs::write(path, toml).map_err(|e| CompleterError::config(e.to_string()))?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
