//! Server Configuration
//!
//! Configuration for the HTTP server and the backing store: bind address,
//! CORS origins, database URL, and the directory the admin page is served
//! from. Values come from the environment with sensible defaults.

use std::env;

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// SQLite database URL (default: "sqlite:stockroom.db?mode=rwc")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Directory the admin client is served from (default: "static")
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite:stockroom.db?mode=rwc".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_url: default_database_url(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Reads `STOCKROOM_HOST`, `STOCKROOM_PORT`, `STOCKROOM_CORS_ORIGINS`
    /// (comma separated), `STOCKROOM_STATIC_DIR`, and `DATABASE_URL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("STOCKROOM_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origins = env::var("STOCKROOM_CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: env::var("STOCKROOM_HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            static_dir: env::var("STOCKROOM_STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }
}
