//! Status source seam

use async_trait::async_trait;
use gradewatch_client::{Result, StatusClient};
use serde_json::Value;

/// Anything that can produce the raw review-API payload for a fetch window
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the raw payload for statuses updated since `from_date`
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.get_homework_statuses(from_date).await
    }
}
