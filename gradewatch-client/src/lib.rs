//! Gradewatch HTTP Client
//!
//! Typed HTTP clients for the two remote APIs gradewatch talks to: the
//! homework-review API (authenticated status fetch) and the Telegram Bot
//! API (text notifications).
//!
//! Both clients are thin: they surface transport, status-code and parse
//! failures as typed errors and leave retry policy entirely to the caller.
//!
//! # Example
//!
//! ```no_run
//! use gradewatch_client::StatusClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gradewatch_client::ClientError> {
//!     let client = StatusClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses",
//!         "secret-token",
//!     );
//!
//!     let payload = client.get_homework_statuses(1_700_000_000).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use gradewatch_core::domain::homework::{Homework, ReviewStatus};
pub use telegram::TelegramClient;

use reqwest::Client;

/// HTTP client for the homework-review API
///
/// Holds the fixed endpoint and the bearer-style secret loaded at startup.
/// The only operation is the timestamped status fetch; gradewatch is not a
/// general-purpose client for this API.
#[derive(Debug, Clone)]
pub struct StatusClient {
    /// Base URL of the review endpoint
    base_url: String,
    /// API secret sent as an `Authorization: OAuth <token>` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl StatusClient {
    /// Create a new status client
    ///
    /// # Arguments
    /// * `base_url` - The review endpoint URL
    /// * `token` - The API secret for the `Authorization` header
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new status client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL this client queries
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
