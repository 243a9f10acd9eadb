//! Notification seam
//!
//! `BestEffortNotifier` carries the non-propagating contract: a lost
//! notification is acceptable degradation, a crashed poller is not, so
//! dispatch failures are logged and swallowed here.

use async_trait::async_trait;
use gradewatch_client::TelegramClient;
use tracing::{error, info};

/// Anything that can push a text notification to the side channel
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatches `text` to the fixed destination; must not fail outward
    async fn send(&self, text: &str);
}

/// Telegram-backed notifier with the best-effort contract
pub struct BestEffortNotifier {
    client: TelegramClient,
}

impl BestEffortNotifier {
    /// Creates a notifier over a configured Telegram client
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for BestEffortNotifier {
    async fn send(&self, text: &str) {
        match self.client.send_message(text).await {
            Ok(()) => info!(
                "Message \"{}\" sent to chat {}",
                text,
                self.client.chat_id()
            ),
            Err(e) => error!(
                "Message \"{}\" not sent to chat {}: {}",
                text,
                self.client.chat_id(),
                e
            ),
        }
    }
}
