use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub funnel: FunnelConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelConfig {
    /// Fixed dwell in the calculating stage before the result is shown.
    /// The stage transition is timer-gated, never sync-gated.
    #[serde(default = "default_calculating_delay_ms")]
    pub calculating_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Lead webhook endpoint. Sync is disabled entirely when unset.
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Lead vault file. Records stay in memory only when unset.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_vault_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_protocol_url")]
    pub protocol_url: String,
    #[serde(default = "default_booking_url")]
    pub booking_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("EXECGAP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            calculating_delay_ms: default_calculating_delay_ms(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            send_timeout_ms: default_send_timeout_ms(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            path: None,
            capacity: default_vault_capacity(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            protocol_url: default_protocol_url(),
            booking_url: default_booking_url(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_calculating_delay_ms() -> u64 {
    2_500
}

fn default_send_timeout_ms() -> u64 {
    5_000
}

fn default_queue_capacity() -> usize {
    128
}

fn default_vault_capacity() -> usize {
    100
}

fn default_protocol_url() -> String {
    "https://www.notion.so/SCALE-PROTOCOL-FORENSIC-DIAGNOSIS-1315099dddd54db1babf54fb71180417"
        .to_string()
}

fn default_booking_url() -> String {
    "https://be-extraordinary.site/book-online".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
