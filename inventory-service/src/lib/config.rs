use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub kafka: KafkaConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Token lifetime as a duration.
    ///
    /// # Errors
    /// * `ConfigError::Message` - `expiration_hours` is not positive or overflows
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        chrono::Duration::try_hours(self.expiration_hours)
            .filter(|ttl| *ttl > chrono::Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.expiration_hours must be a positive number of hours, got {}",
                    self.expiration_hours
                ))
            })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Updates leaving a product strictly below this quantity emit a low-stock notification.
    pub low_stock_threshold: i32,

    /// Upper bound an update waits on the notification sink.
    pub notification_timeout_ms: u64,
}

impl InventoryConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults for port, token lifetime, topic and inventory settings
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8080)?
            .set_default("jwt.expiration_hours", 72)?
            .set_default("kafka.topic", "product-notifications")?
            .set_default("inventory.low_stock_threshold", 100)?
            .set_default("inventory.notification_timeout_ms", 500)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_overrides_files() {
        env::set_var("JWT__SECRET", "from-env-secret-at-least-32-bytes-long");
        env::set_var("INVENTORY__LOW_STOCK_THRESHOLD", "7");

        let config = Config::load();

        env::remove_var("JWT__SECRET");
        env::remove_var("INVENTORY__LOW_STOCK_THRESHOLD");

        let config = config.expect("configuration loads");
        assert_eq!(config.jwt.secret, "from-env-secret-at-least-32-bytes-long");
        assert_eq!(config.inventory.low_stock_threshold, 7);
        assert_eq!(config.jwt.expiration_hours, 72);
        assert_eq!(config.inventory.notification_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_token_ttl_rejects_out_of_range_hours() {
        let jwt = |expiration_hours| JwtConfig {
            secret: "secret".to_string(),
            expiration_hours,
        };

        assert_eq!(jwt(72).token_ttl().unwrap(), chrono::Duration::hours(72));
        assert!(jwt(0).token_ttl().is_err());
        assert!(jwt(-1).token_ttl().is_err());
        assert!(jwt(i64::MAX).token_ttl().is_err());
    }
}
