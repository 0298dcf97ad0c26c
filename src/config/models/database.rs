//! Database configuration

use serde::{Deserialize, Serialize};

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Load database settings from environment variables
    ///
    /// `TEAMGATE_DATABASE_URL` takes precedence over the conventional
    /// `DATABASE_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TEAMGATE_DATABASE_URL") {
            config.url = url;
        } else if let Ok(url) = std::env::var("DATABASE_URL") {
            config.url = url;
        }
        config
    }

    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.url != default_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        self
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if self.max_connections == 0 {
            return Err("Max connections cannot be 0".to_string());
        }

        Ok(())
    }
}

fn default_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}
