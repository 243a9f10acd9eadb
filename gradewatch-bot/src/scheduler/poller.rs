//! Status poller
//!
//! Polls the review API for the tracked submission and notifies on change.
//! One cycle: fetch the window, validate the payload shape, derive the
//! status message for the newest entry, deduplicate, notify. Any failure
//! becomes a uniform "Program failure" text that is itself deduplicated,
//! so a persistent fault is retried forever but reported once.

use anyhow::{Context as _, Result};
use chrono::Utc;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::{BACKFILL_WINDOW_SECS, Config};
use crate::service::{Notifier, StatusSource};
use gradewatch_core::codec;

/// Outcome of a cycle that made it through fetch and validation
enum CycleOutcome {
    /// Nothing in the fetch window
    Empty,

    /// Derived status text for the newest homework
    Status(String),
}

/// Poll/dedup/notify loop over a status source and a notifier
///
/// Owns all mutable state of the process: the two last-sent strings and
/// the backfill flag. Cycles are strictly sequential; there is never more
/// than one in-flight fetch or notification.
pub struct StatusPoller<S, N> {
    config: Config,
    source: S,
    notifier: N,

    /// Last status text actually sent; dedup key for the success path
    last_status: String,

    /// Last failure text actually sent; dedup key for the failure path
    last_error: String,

    /// Set once the first cycle has consumed the backfill window
    backfill_done: bool,
}

impl<S: StatusSource, N: Notifier> StatusPoller<S, N> {
    /// Creates a new poller with empty dedup state
    pub fn new(config: Config, source: S, notifier: N) -> Self {
        Self {
            config,
            source,
            notifier,
            last_status: String::new(),
            last_error: String::new(),
            backfill_done: false,
        }
    }

    /// Starts the polling loop
    ///
    /// Never returns; the only exit is process termination. The sleep
    /// between cycles is unconditional, whether the cycle succeeded or not.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;
            self.poll_once().await;
        }
    }

    /// Performs a single poll cycle, including both dedup paths
    async fn poll_once(&mut self) {
        let from_date = self.next_from_date();
        debug!("Polling for review statuses (from_date: {})", from_date);

        match self.run_cycle(from_date).await {
            Ok(CycleOutcome::Empty) => {
                debug!("No homeworks in the fetch window");
            }
            Ok(CycleOutcome::Status(message)) => {
                if message == self.last_status {
                    debug!("No new status in the response");
                } else {
                    info!("Status changed: {}", message);
                    self.last_status = message.clone();
                    self.notifier.send(&message).await;
                }
            }
            Err(e) => {
                let message = format!("Program failure: {e:#}");
                error!("{}", message);
                if message != self.last_error {
                    self.last_error = message.clone();
                    self.notifier.send(&message).await;
                }
            }
        }
    }

    /// Fetch window lower bound for the next cycle
    ///
    /// Recomputed from wall-clock "now" every cycle; only the very first
    /// cycle reaches back one day. The cursor echoed by the API is ignored.
    fn next_from_date(&mut self) -> i64 {
        let now = Utc::now().timestamp();
        if self.backfill_done {
            now
        } else {
            self.backfill_done = true;
            now - BACKFILL_WINDOW_SECS
        }
    }

    /// Fetches and validates one window
    ///
    /// Only the first homework is considered: the API returns newest
    /// first, and older entries were already reported in earlier cycles.
    async fn run_cycle(&self, from_date: i64) -> Result<CycleOutcome> {
        let response = self
            .source
            .fetch(from_date)
            .await
            .context("Failed to fetch homework statuses")?;

        let homeworks = codec::check_response(&response)?;

        match homeworks.first() {
            Some(newest) => Ok(CycleOutcome::Status(codec::parse_status(newest)?)),
            None => Ok(CycleOutcome::Empty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gradewatch_client::ClientError;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct ScriptedSource {
        responses: Mutex<VecDeque<gradewatch_client::Result<Value>>>,
        from_dates: Arc<Mutex<Vec<i64>>>,
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch(&self, from_date: i64) -> gradewatch_client::Result<Value> {
            self.from_dates.lock().unwrap().push(from_date);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, text: &str) {
            self.sent.lock().unwrap().push(text.to_string());
        }
    }

    type TestPoller = StatusPoller<ScriptedSource, RecordingNotifier>;

    fn poller_with(
        responses: Vec<gradewatch_client::Result<Value>>,
    ) -> (TestPoller, Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<i64>>>) {
        let from_dates = Arc::new(Mutex::new(Vec::new()));
        let source = ScriptedSource {
            responses: Mutex::new(responses.into()),
            from_dates: Arc::clone(&from_dates),
        };
        let notifier = RecordingNotifier::default();
        let sent = Arc::clone(&notifier.sent);
        let config = Config::new("api-token", "bot-token", "42");
        (StatusPoller::new(config, source, notifier), sent, from_dates)
    }

    fn reviewing_response() -> Value {
        json!({"homeworks": [{"homework_name": "hw1", "status": "reviewing"}]})
    }

    #[tokio::test]
    async fn test_status_change_notifies_once() {
        let (mut poller, sent, _) = poller_with(vec![Ok(reviewing_response())]);

        poller.poll_once().await;

        assert_eq!(
            *sent.lock().unwrap(),
            vec![
                "Status changed for submission \"hw1\". Работа взята на проверку ревьюером."
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_repeated_status_is_deduplicated() {
        let (mut poller, sent, _) =
            poller_with(vec![Ok(reviewing_response()), Ok(reviewing_response())]);

        poller.poll_once().await;
        poller.poll_once().await;

        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_status_transition_notifies_again() {
        let approved = json!({"homeworks": [{"homework_name": "hw1", "status": "approved"}]});
        let (mut poller, sent, _) = poller_with(vec![Ok(reviewing_response()), Ok(approved)]);

        poller.poll_once().await;
        poller.poll_once().await;

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(sent[1].contains("Ура!"));
    }

    #[tokio::test]
    async fn test_empty_window_is_silent() {
        let (mut poller, sent, _) = poller_with(vec![Ok(json!({"homeworks": []}))]);

        poller.poll_once().await;

        assert!(sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shape_error_notifies_once() {
        let (mut poller, sent, _) = poller_with(vec![Ok(json!({})), Ok(json!({}))]);

        poller.poll_once().await;
        poller.poll_once().await;

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("Program failure: "));
        assert!(sent[0].contains("missing the `homeworks` key"));
    }

    #[tokio::test]
    async fn test_unknown_status_notifies_once() {
        let bad = json!({"homeworks": [{"homework_name": "hw1", "status": "graded"}]});
        let (mut poller, sent, _) = poller_with(vec![Ok(bad.clone()), Ok(bad)]);

        poller.poll_once().await;
        poller.poll_once().await;

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("undocumented homework status `graded`"));
    }

    #[tokio::test]
    async fn test_http_failure_then_recovery() {
        let (mut poller, sent, _) = poller_with(vec![
            Err(ClientError::unexpected_status(503)),
            Ok(reviewing_response()),
        ]);

        poller.poll_once().await;
        poller.poll_once().await;

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].starts_with("Program failure: "));
        assert!(sent[0].contains("got 503, want 200"));
        assert!(sent[1].starts_with("Status changed for submission \"hw1\""));
    }

    #[tokio::test]
    async fn test_distinct_failures_each_notify() {
        let (mut poller, sent, _) = poller_with(vec![
            Err(ClientError::unexpected_status(503)),
            Err(ClientError::unexpected_status(502)),
        ]);

        poller.poll_once().await;
        poller.poll_once().await;

        assert_eq!(sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_backfill_window_only_on_first_cycle() {
        let empty = json!({"homeworks": []});
        let (mut poller, _, from_dates) = poller_with(vec![Ok(empty.clone()), Ok(empty)]);

        poller.poll_once().await;
        poller.poll_once().await;

        let from_dates = from_dates.lock().unwrap();
        let now = Utc::now().timestamp();
        assert_eq!(from_dates.len(), 2);
        assert!((from_dates[0] - (now - BACKFILL_WINDOW_SECS)).abs() <= 2);
        assert!((now - from_dates[1]).abs() <= 2);
    }
}
