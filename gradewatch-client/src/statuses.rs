//! Homework-status endpoint

use crate::StatusClient;
use crate::error::{ClientError, Result};
use serde_json::Value;
use tracing::debug;

impl StatusClient {
    /// Fetch review statuses updated since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Lower bound of the fetch window, seconds since epoch
    ///
    /// # Returns
    /// The raw JSON payload. Shape validation is the caller's concern; the
    /// only contract enforced here is "200 OK with a JSON body".
    pub async fn get_homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses since {}", from_date);

        let response = self
            .client
            .get(&self.base_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("OAuth {}", self.token),
            )
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::unexpected_status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::MalformedBody(format!("failed to parse JSON response: {e}")))
    }
}
