//! Homework domain model
//!
//! Represents the tracked submission as reported by the review API,
//! together with the closed set of review statuses it can be in.

use serde::{Deserialize, Serialize};

/// A homework submission as the review API reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    /// Submission name as shown to the student
    #[serde(rename = "homework_name")]
    pub name: String,

    /// Current review status
    pub status: ReviewStatus,
}

/// Review status of a submission
///
/// Closed set: the API only ever reports these three keys. Any other key
/// is a decoding error, never a silent skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Reviewer accepted the submission
    Approved,

    /// Submission has been picked up for review
    Reviewing,

    /// Reviewer sent the submission back with remarks
    Rejected,
}

impl ReviewStatus {
    /// Parses a raw status key from the API
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict for this status
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_recognizes_closed_set() {
        assert_eq!(ReviewStatus::from_key("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_key("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::from_key("rejected"), Some(ReviewStatus::Rejected));
        assert_eq!(ReviewStatus::from_key("graded"), None);
        assert_eq!(ReviewStatus::from_key(""), None);
    }

    #[test]
    fn test_verdict_is_total() {
        assert_eq!(
            ReviewStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert!(ReviewStatus::Approved.verdict().ends_with("Ура!"));
        assert!(ReviewStatus::Rejected.verdict().contains("замечания"));
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let homework: Homework = serde_json::from_str(
            r#"{"homework_name": "hw1", "status": "approved"}"#,
        )
        .unwrap();
        assert_eq!(homework.name, "hw1");
        assert_eq!(homework.status, ReviewStatus::Approved);

        let serialized = serde_json::to_string(&homework.status).unwrap();
        assert_eq!(serialized, "\"approved\"");
    }
}
