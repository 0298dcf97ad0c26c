//! Configuration management for the access control service
//!
//! This module handles loading, validation, and merging of all service
//! configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authorization policy configuration
    #[serde(default)]
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            access: AccessConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| AccessError::Config(format!("Server config error: {}", e)))?;

        self.database
            .validate()
            .map_err(|e| AccessError::Config(format!("Database config error: {}", e)))?;

        self.access
            .validate()
            .map_err(|e| AccessError::Config(format!("Access config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.database = self.database.merge(other.database);
        self.access = self.access.merge(other.access);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8080
  workers: 4

database:
  url: "sqlite::memory:"

access:
  mode: enforced
  role_management_threshold: 100
  invite_threshold: 80
  custom_role_cap: 50
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.access.mode, AuthorizationMode::Enforced);
        assert_eq!(config.access.custom_role_cap, 50);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.access.role_management_threshold, 100);
        assert_eq!(config.access.invite_threshold, 80);
    }

    #[test]
    fn test_config_merge() {
        let base = Config::default();
        let mut other = Config::default();
        other.server.port = 9000;
        other.access.mode = AuthorizationMode::AllowAll;

        let merged = base.merge(other);
        assert_eq!(merged.server.port, 9000);
        assert_eq!(merged.access.mode, AuthorizationMode::AllowAll);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.is_empty());
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let mut config = Config::default();
        config.access.custom_role_cap = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.access.invite_threshold = 200;
        assert!(config.validate().is_err());
    }
}
