//! Configuration loader with file and environment variable support

use crate::{AppConfig, ConfigError};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Standard config file search paths
const CONFIG_PATHS: &[&str] = &[
    "config.toml",
    "queuewise.toml",
    "./config/config.toml",
    "./config/queuewise.toml",
    "/etc/queuewise/config.toml",
];

/// Configuration loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Create a loader with a specific config file path
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    /// Load configuration from file (if found) with environment variable overrides
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(path) = self.find_config_file() {
            info!(?path, "Loading configuration from file");
            config = AppConfig::from_file(&path)?;
        }

        self.apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            if path.exists() {
                return Some(path.clone());
            }
        }

        if let Ok(path) = env::var("QUEUEWISE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        for path in CONFIG_PATHS {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, config: &mut AppConfig) {
        // HTTP
        if let Ok(val) = env::var("QUEUEWISE_HTTP_PORT") {
            if let Ok(port) = val.parse() {
                config.http.port = port;
            }
        }
        if let Ok(val) = env::var("QUEUEWISE_HTTP_HOST") {
            config.http.host = val;
        }
        if let Ok(val) = env::var("QUEUEWISE_CORS_ORIGINS") {
            config.http.cors_origins = val.split(',').map(|s| s.trim().to_string()).collect();
        }

        // Session
        if let Ok(val) = env::var("QUEUEWISE_SESSION_COOKIE") {
            config.session.cookie_name = val;
        }
        if let Ok(val) = env::var("QUEUEWISE_SESSION_SECURE") {
            config.session.secure = val == "true" || val == "1";
        }
        if let Ok(val) = env::var("QUEUEWISE_SESSION_TTL_SECS") {
            if let Ok(ttl) = val.parse() {
                config.session.ttl_secs = ttl;
            }
        }

        // Realtime provider credentials
        if let Ok(val) = env::var("QUEUEWISE_REALTIME_ENABLED") {
            config.realtime.enabled = val == "true" || val == "1";
        }
        if let Ok(val) = env::var("QUEUEWISE_REALTIME_URL") {
            config.realtime.base_url = val;
        }
        if let Ok(val) = env::var("QUEUEWISE_REALTIME_APP_ID") {
            config.realtime.app_id = val;
        }
        if let Ok(val) = env::var("QUEUEWISE_REALTIME_KEY") {
            config.realtime.key = val;
        }
        if let Ok(val) = env::var("QUEUEWISE_REALTIME_SECRET") {
            config.realtime.secret = val;
        }

        // Database
        if let Ok(val) = env::var("QUEUEWISE_DATABASE_URL") {
            config.database.url = val;
        }

        // Dev mode
        if let Ok(val) = env::var("QUEUEWISE_DEV_MODE") {
            config.dev_mode = val == "true" || val == "1";
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loader_with_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "dev_mode = true\n\n[http]\nport = 7070\n").unwrap();

        let loader = ConfigLoader::with_path(file.path());
        let config = loader.load().unwrap();
        assert_eq!(config.http.port, 7070);
        assert!(config.dev_mode);
    }

    #[test]
    fn test_loader_missing_file_uses_defaults() {
        let loader = ConfigLoader::with_path("/nonexistent/queuewise.toml");
        let config = loader.load().unwrap();
        assert_eq!(config.http.port, 8080);
    }
}
