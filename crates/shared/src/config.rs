//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Remote API configuration.
    pub api: ApiConfig,
    /// Inventory policy configuration.
    #[serde(default)]
    pub inventory: InventoryConfig,
    /// Billing policy configuration.
    #[serde(default)]
    pub billing: BillingConfig,
}

/// Remote persistence API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the persistence API.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Inventory policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryConfig {
    /// Days before expiry at which a lot is flagged as expiring soon.
    #[serde(default = "default_expiry_horizon_days")]
    pub expiry_horizon_days: i64,
    /// Default reorder level for items without one configured.
    #[serde(default = "default_reorder_level")]
    pub default_reorder_level: u32,
}

fn default_expiry_horizon_days() -> i64 {
    30
}

fn default_reorder_level() -> u32 {
    10
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            expiry_horizon_days: default_expiry_horizon_days(),
            default_reorder_level: default_reorder_level(),
        }
    }
}

/// Billing policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Decimal places carried on intermediate line amounts.
    #[serde(default = "default_amount_scale")]
    pub amount_scale: u32,
}

fn default_amount_scale() -> u32 {
    2
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            amount_scale: default_amount_scale(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KIRANA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
