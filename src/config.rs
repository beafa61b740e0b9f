/// Configuration management for Stratus
use crate::error::{StratusError, StratusResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub hashid: HashIdConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
    pub version: String,
}

/// Opaque identifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashIdConfig {
    pub salt: String,
}

/// Session hand-off from the fronting proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Header carrying the authenticated numeric user id
    pub user_header: String,
}

/// Record source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file with users and tags loaded into the in-memory store
    pub seed_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> StratusResult<Self> {
        dotenv::dotenv().ok();

        let hostname = env::var("STRATUS_HOSTNAME").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("STRATUS_PORT")
            .unwrap_or_else(|_| "5212".to_string())
            .parse()
            .map_err(|_| StratusError::Config("Invalid port number".to_string()))?;
        let version = env::var("STRATUS_VERSION")
            .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        let salt = env::var("STRATUS_HASHID_SALT")
            .map_err(|_| StratusError::Config("Hash ID salt required".to_string()))?;

        let user_header = env::var("STRATUS_USER_HEADER")
            .unwrap_or_else(|_| "x-stratus-user".to_string())
            .to_lowercase();

        let seed_file = env::var("STRATUS_SEED_FILE").ok().map(PathBuf::from);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(ServerConfig {
            service: ServiceConfig {
                hostname,
                port,
                version,
            },
            hashid: HashIdConfig { salt },
            session: SessionConfig { user_header },
            storage: StorageConfig { seed_file },
            logging: LoggingConfig { level: log_level },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> StratusResult<()> {
        if self.service.hostname.is_empty() {
            return Err(StratusError::Config("Hostname cannot be empty".to_string()));
        }

        if self.hashid.salt.len() < 8 {
            return Err(StratusError::Config(
                "Hash ID salt must be at least 8 characters".to_string(),
            ));
        }

        if self.session.user_header.is_empty() {
            return Err(StratusError::Config("User header cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Listen address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service.hostname, self.service.port)
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> ServerConfig {
    ServerConfig {
        service: ServiceConfig {
            hostname: "127.0.0.1".to_string(),
            port: 5212,
            version: "0.1.0".to_string(),
        },
        hashid: HashIdConfig {
            salt: "unit-test-salt".to_string(),
        },
        session: SessionConfig {
            user_header: "x-stratus-user".to_string(),
        },
        storage: StorageConfig { seed_file: None },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_salt() {
        let mut config = test_config();
        config.hashid.salt = "short".to_string();
        assert!(matches!(config.validate(), Err(StratusError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_hostname() {
        let mut config = test_config();
        config.service.hostname.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_addr() {
        assert_eq!(test_config().bind_addr(), "127.0.0.1:5212");
    }
}
