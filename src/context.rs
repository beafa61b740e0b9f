/// Application context and dependency injection
use crate::{
    config::ServerConfig,
    error::StratusResult,
    hashid::{HashIdEncoder, IdentifierEncoder},
    store::{MemoryStore, UserStore},
};
use std::sync::Arc;

/// Application context holding all shared services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub store: Arc<dyn UserStore>,
    pub hashid: Arc<dyn IdentifierEncoder>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub fn new(config: ServerConfig) -> StratusResult<Self> {
        config.validate()?;

        let store = match &config.storage.seed_file {
            Some(path) => MemoryStore::from_json_file(path)?,
            None => {
                tracing::warn!("No seed file configured - starting with an empty store");
                MemoryStore::new()
            }
        };

        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build a context around an existing record source
    pub fn with_store(config: ServerConfig, store: Arc<dyn UserStore>) -> Self {
        let hashid = Arc::new(HashIdEncoder::new(config.hashid.salt.clone()));

        Self {
            config: Arc::new(config),
            store,
            hashid,
        }
    }

    /// Get service URL
    pub fn service_url(&self) -> String {
        format!("http://{}", self.config.bind_addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn test_new_with_empty_store() {
        let ctx = AppContext::new(test_config()).unwrap();
        assert!(ctx.store.get_user(1).unwrap().is_none());
        assert_eq!(ctx.service_url(), "http://127.0.0.1:5212");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = test_config();
        config.hashid.salt = "x".to_string();
        assert!(AppContext::new(config).is_err());
    }
}
