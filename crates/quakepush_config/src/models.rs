// --- File: crates/quakepush_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

// --- Category tables ---
// Physical table identifier per push category.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TableNames {
    #[serde(default = "default_quake_table")]
    pub quake: String,
    #[serde(default = "default_foreign_table")]
    pub foreign: String,
    #[serde(default = "default_tsunami_table")]
    pub tsunami: String,
    #[serde(default = "default_userquake_table")]
    pub userquake: String,
    #[serde(default = "default_eew_table")]
    pub eew: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            quake: default_quake_table(),
            foreign: default_foreign_table(),
            tsunami: default_tsunami_table(),
            userquake: default_userquake_table(),
            eew: default_eew_table(),
        }
    }
}

fn default_quake_table() -> String {
    "P2PQuakeMobilePushQuake".to_string()
}

fn default_foreign_table() -> String {
    "P2PQuakeMobilePushForeign".to_string()
}

fn default_tsunami_table() -> String {
    "P2PQuakeMobilePushTsunami".to_string()
}

fn default_userquake_table() -> String {
    "P2PQuakeMobilePushUserquake".to_string()
}

fn default_eew_table() -> String {
    "P2PQuakeMobilePushEEW".to_string()
}

// --- Storage Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Database URL, e.g. `sqlite://data/tokens.db`. `None` selects the in-memory store.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before the request counts as throttled.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub tables: TableNames,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            tables: TableNames::default(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    3
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
