//! Status codec
//!
//! Validates the shape of a raw review-API response and derives the
//! human-readable status message for a single homework record. Pure
//! functions over `serde_json::Value`; the distinct error variants let the
//! caller report exactly which expectation the payload broke.

use serde_json::Value;
use thiserror::Error;

use crate::domain::homework::{Homework, ReviewStatus};

/// Errors raised while validating a review-API payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Top-level value is not a JSON object
    #[error("API response is not a JSON object")]
    NotAnObject,

    /// The required `homeworks` key is absent
    #[error("API response is missing the `homeworks` key")]
    MissingHomeworksKey,

    /// The `homeworks` value is not an array
    #[error("`homeworks` is not a list")]
    HomeworksNotAList,

    /// A required field is absent from a homework record
    #[error("missing required field `{0}` in homework record")]
    MissingField(&'static str),

    /// The status key is outside the recognized set
    #[error("undocumented homework status `{0}`")]
    UnknownStatus(String),
}

/// Validates the top-level response shape and returns the homework list.
///
/// An empty list is valid and means there is nothing to report this cycle.
pub fn check_response(response: &Value) -> Result<&[Value], DecodeError> {
    let object = response.as_object().ok_or(DecodeError::NotAnObject)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(DecodeError::MissingHomeworksKey)?;
    let list = homeworks
        .as_array()
        .ok_or(DecodeError::HomeworksNotAList)?;
    Ok(list)
}

/// Extracts a validated [`Homework`] from a raw record
pub fn parse_homework(record: &Value) -> Result<Homework, DecodeError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField("homework_name"))?;

    let key = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField("status"))?;

    let status = ReviewStatus::from_key(key)
        .ok_or_else(|| DecodeError::UnknownStatus(key.to_string()))?;

    Ok(Homework {
        name: name.to_string(),
        status,
    })
}

/// Derives the notification text for a raw homework record
pub fn parse_status(record: &Value) -> Result<String, DecodeError> {
    let homework = parse_homework(record)?;
    Ok(format!(
        "Status changed for submission \"{}\". {}",
        homework.name,
        homework.status.verdict()
    ))
}
