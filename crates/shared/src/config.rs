//! Application configuration management.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Live price feed configuration.
    pub price_feed: PriceFeedConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
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

/// Live price feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceFeedConfig {
    /// Endpoint returning `{ success, prices: { SYM: { price_gbp } } }`.
    pub url: String,
    /// How long a fetched price is served from cache, in seconds.
    #[serde(default = "default_freshness_secs")]
    pub freshness_secs: u64,
    /// HTTP request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_freshness_secs() -> u64 {
    30
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl PriceFeedConfig {
    /// Creates a feed configuration for `url` with default timings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            freshness_secs: default_freshness_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// Freshness window as a [`Duration`].
    #[must_use]
    pub const fn freshness_window(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PRICEDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("PRICEDESK__PRICE_FEED__URL", Some("http://feed.test/prices")),
                ("PRICEDESK__SERVER__PORT", Some("9090")),
                ("RUN_MODE", Some("test-nonexistent")),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.price_feed.url, "http://feed.test/prices");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.price_feed.freshness_secs, 30);
                assert_eq!(config.price_feed.request_timeout_secs, 10);
            },
        );
    }

    #[test]
    fn test_missing_feed_url_is_an_error() {
        temp_env::with_vars(
            [
                ("PRICEDESK__PRICE_FEED__URL", None::<&str>),
                ("RUN_MODE", Some("test-nonexistent")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_feed_config_durations() {
        let config = PriceFeedConfig::new("http://feed.test");
        assert_eq!(config.freshness_window(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
