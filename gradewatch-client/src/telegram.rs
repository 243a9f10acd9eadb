//! Telegram Bot API endpoint
//!
//! Only the single `sendMessage` call gradewatch needs; this is not a
//! general Telegram client.

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Default Telegram Bot API host
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// `sendMessage` request body
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// HTTP client for the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Bot API host
    base_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// Destination chat for every message
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Telegram client against the production Bot API
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE, token, chat_id)
    }

    /// Create a new Telegram client against a custom API host
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client: Client::new(),
        }
    }

    /// Get the destination chat id
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send a text message to the configured chat
    ///
    /// Fire-and-forget: HTTP-level success is the only acknowledgement
    /// checked, the delivery confirmation in the body is not consumed.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        debug!("Sending message to chat {}", self.chat_id);

        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::unexpected_status(status.as_u16()));
        }

        Ok(())
    }
}
