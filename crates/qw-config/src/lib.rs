//! QueueWise Configuration System
//!
//! TOML-based configuration with environment variable override support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub session: SessionConfig,
    pub realtime: RealtimeConfig,
    pub database: DatabaseConfig,

    /// Enable development mode (demo data seeding, debug listing)
    pub dev_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            session: SessionConfig::default(),
            realtime: RealtimeConfig::default(),
            database: DatabaseConfig::default(),
            dev_mode: false,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
    pub same_site: String,
    /// Session lifetime in seconds (default: one week)
    pub ttl_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "qw_session".to_string(),
            secure: false,
            same_site: "Lax".to_string(),
            ttl_secs: 604_800, // 7 days
        }
    }
}

/// Third-party realtime messaging provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    /// Publish to the external provider (falls back to the in-process bus
    /// when disabled or when credentials are missing)
    pub enabled: bool,
    /// Provider REST endpoint base URL
    pub base_url: String,
    /// Provider application id
    pub app_id: String,
    /// Public key, sent to browser clients
    pub key: String,
    /// Signing secret, server-side only
    pub secret: String,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.queuewise-realtime.example".to_string(),
            app_id: String::new(),
            key: String::new(),
            secret: String::new(),
        }
    }
}

impl RealtimeConfig {
    /// True when all provider credentials are present
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.key.is_empty() && !self.secret.is_empty()
    }
}

/// Database configuration
///
/// Carried for parity with the deployment environment surface; the mock
/// in-memory stores do not consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/queuewise".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable override
    pub fn load() -> Result<Self, ConfigError> {
        let loader = ConfigLoader::new();
        loader.load()
    }

    /// Generate an example TOML configuration
    pub fn example_toml() -> String {
        r#"# QueueWise Configuration
# Environment variables override these settings

[http]
port = 8080
host = "0.0.0.0"
cors_origins = ["http://localhost:3000"]

[session]
cookie_name = "qw_session"
secure = false
same_site = "Lax"
ttl_secs = 604800

[realtime]
enabled = false
base_url = "https://api.queuewise-realtime.example"
app_id = ""
key = ""
secret = ""

[database]
url = "postgres://localhost:5432/queuewise"

dev_mode = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_example_toml_parses() {
        let config: AppConfig = toml::from_str(&AppConfig::example_toml()).unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.session.ttl_secs, 604_800);
        assert!(config.dev_mode);
        assert!(!config.realtime.is_configured());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.cookie_name, "qw_session");
        assert!(!config.dev_mode);
        assert!(!config.realtime.enabled);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[http]\nport = 9999\n\n[realtime]\nenabled = true\napp_id = \"app1\"\nkey = \"k\"\nsecret = \"s\"\n"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.http.port, 9999);
        assert!(config.realtime.enabled);
        assert!(config.realtime.is_configured());
        // Missing sections fall back to defaults
        assert_eq!(config.session.ttl_secs, 604_800);
    }

    #[test]
    fn test_partial_realtime_credentials_not_configured() {
        let config: AppConfig =
            toml::from_str("[realtime]\napp_id = \"app1\"\n").unwrap();
        assert!(!config.realtime.is_configured());
    }
}
