//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::document::DOCUMENT_PATH;
use crate::page::PageLayout;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub layout: PageLayout,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the document comes from and where rendered pages go
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Path or http(s) URL of the portfolio document
    #[serde(default = "default_data")]
    pub data: String,

    /// Output file for `folio render`
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_data() -> String {
    DOCUMENT_PATH.to_string()
}

fn default_output() -> String {
    "index.html".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            output: default_output(),
        }
    }
}

/// Prerender server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("/etc/folio/config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Site overrides
        if let Some(data) = lookup("FOLIO_DATA") {
            self.site.data = data;
        }
        if let Some(output) = lookup("FOLIO_OUTPUT") {
            self.site.output = output;
        }

        // Server overrides
        if let Some(host) = lookup("FOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FOLIO_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid FOLIO_PORT: {}", port),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
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
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_DATA
# - FOLIO_OUTPUT
# - FOLIO_HOST
# - FOLIO_PORT
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[site]
# Portfolio document: a local path or an http(s) URL
data = "portfolio_data.json"

# Where `folio render` writes the page
output = "index.html"

[server]
# Prerender server host
host = "127.0.0.1"

# Prerender server port
port = 8080

# Allowed CORS origins (empty = any)
cors_origins = []

# Sections of the page, in order. The heading doubles as the nav label.
[[layout.sections]]
id = "profile"
heading = "Profile"

[[layout.sections]]
id = "introduce"
heading = "Introduce"

[[layout.sections]]
id = "skills"
heading = "Skills"

[[layout.sections]]
id = "experience"
heading = "Experience"

[[layout.sections]]
id = "projects"
heading = "Projects"

[[layout.sections]]
id = "education"
heading = "Education"

[[layout.sections]]
id = "contact"
heading = "Contact"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
