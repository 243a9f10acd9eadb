//! Bot configuration
//!
//! Defines all configurable parameters for the bot: the three required
//! secrets, the review endpoint and the polling interval.

use std::time::Duration;

/// Production review endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses";

/// Fixed delay between poll cycles unless overridden
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// One-time backfill window applied to the very first fetch
pub const BACKFILL_WINDOW_SECS: i64 = 86_400;

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret for the review API `Authorization` header
    pub api_token: String,

    /// Telegram bot token
    pub messaging_token: String,

    /// Destination chat for every notification
    pub messaging_chat_id: String,

    /// Review endpoint URL
    pub endpoint: String,

    /// How long to sleep between poll cycles
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a configuration with the default endpoint and interval
    pub fn new(
        api_token: impl Into<String>,
        messaging_token: impl Into<String>,
        messaging_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            messaging_token: messaging_token.into(),
            messaging_chat_id: messaging_chat_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - API_TOKEN (required)
    /// - MESSAGING_TOKEN (required)
    /// - MESSAGING_CHAT_ID (required)
    /// - API_ENDPOINT (optional, default: production endpoint)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = require_var("API_TOKEN")?;
        let messaging_token = require_var("MESSAGING_TOKEN")?;
        let messaging_chat_id = require_var("MESSAGING_CHAT_ID")?;

        let endpoint = std::env::var("API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            api_token,
            messaging_token,
            messaging_chat_id,
            endpoint,
            poll_interval,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_token.is_empty() {
            anyhow::bail!("API_TOKEN cannot be empty");
        }

        if self.messaging_token.is_empty() {
            anyhow::bail!("MESSAGING_TOKEN cannot be empty");
        }

        if self.messaging_chat_id.is_empty() {
            anyhow::bail!("MESSAGING_CHAT_ID cannot be empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

fn require_var(name: &'static str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{name} environment variable not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_uses_defaults() {
        let config = Config::new("api", "bot", "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("api", "bot", "42");
        assert!(config.validate().is_ok());

        // Empty secrets should fail
        config.api_token = String::new();
        assert!(config.validate().is_err());
        config.api_token = "api".to_string();

        config.messaging_chat_id = String::new();
        assert!(config.validate().is_err());
        config.messaging_chat_id = "42".to_string();

        // Invalid endpoint should fail
        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = "http://localhost:8080/statuses".to_string();

        // Zero interval should fail
        config.poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_secs(600);

        assert!(config.validate().is_ok());
    }
}
