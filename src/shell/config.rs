use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_MONGODB_DATABASE: &str = "user_management_service";
pub const DEFAULT_MONGODB_COLLECTION: &str = "users";
pub const DEFAULT_MONGODB_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HTTP_ADDR {0:?}")]
    InvalidAddr(String),

    #[error("unknown USERS_BACKEND {0:?}, expected \"memory\" or \"mongodb\"")]
    UnknownBackend(String),

    #[error("invalid MONGODB_TIMEOUT_SECS {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    MongoDb,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub backend: StorageBackend,
    pub mongo: MongoSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let addr = value("HTTP_ADDR", DEFAULT_HTTP_ADDR);
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(addr))?;

        let backend = value("USERS_BACKEND", "memory").parse::<StorageBackend>()?;

        let timeout = match lookup("MONGODB_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_MONGODB_TIMEOUT_SECS,
        };

        Ok(Self {
            addr,
            backend,
            mongo: MongoSettings {
                uri: value("MONGODB_URI", DEFAULT_MONGODB_URI),
                database: value("MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
                collection: value("MONGODB_COLLECTION", DEFAULT_MONGODB_COLLECTION),
                timeout: Duration::from_secs(timeout),
            },
        })
    }
}
