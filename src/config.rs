//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::panel::images::DEFAULT_IMAGE_HOSTS;
use crate::panel::ImagePolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where the CLI keeps session cookies between runs
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_file")]
    pub file: String,
}

fn default_session_file() -> String {
    dirs::data_local_dir()
        .map(|p| {
            p.join("dreamworks-panel")
                .join("session")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./.dreamworks-session".to_string())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Hosts entity images may be loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,
}

fn default_allowed_domains() -> Vec<String> {
    DEFAULT_IMAGE_HOSTS.iter().map(|h| h.to_string()).collect()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
        }
    }
}

impl ImagesConfig {
    pub fn policy(&self) -> ImagePolicy {
        ImagePolicy::new(self.allowed_domains.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("dreamworks-panel").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("PANEL_API_URL") {
            self.api.base_url = url;
        }
        if let Some(file) = lookup("PANEL_SESSION_FILE") {
            self.session.file = file;
        }
        if let Some(level) = lookup("PANEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PANEL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(&self.session.file)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DreamWorks Painel Configuration
#
# Environment variables override these settings:
# - PANEL_API_URL
# - PANEL_SESSION_FILE
# - PANEL_LOG_LEVEL
# - PANEL_LOG_FORMAT

[api]
# Game backend base URL
base_url = "http://localhost:3000"

[session]
# File holding the session cookies between CLI runs
# file = "~/.local/share/dreamworks-panel/session"

[images]
# Hosts entity images may be loaded from
allowed_domains = ["res.cloudinary.com", "static.wikia.nocookie.net", "example.com"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
