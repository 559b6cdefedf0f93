//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_APP_NAME: &str = "bank-account-service";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:bank_accounts.db";

/// Loại store dùng cho server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Giữ accounts trong memory
    #[default]
    Memory,
    /// SQLite tại `database_url`
    Sqlite,
}

#[derive(Debug, Error)]
#[error("unknown store backend: {0} (expected memory or sqlite)")]
pub struct UnknownBackend(String);

impl FromStr for StoreBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub store_backend: StoreBackend,
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            store_backend: StoreBackend::default(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load config từ environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load config từ một nguồn key/value bất kỳ; giá trị sai format dùng default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            store_backend: lookup("STORE_BACKEND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.store_backend),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
        }
    }

    /// Lấy địa chỉ bind đầy đủ
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
