//! Review statuses and the notification text built from them

use std::fmt;

use serde_json::Value;

use crate::{Result, WatchError};

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse an API status string; `None` for anything outside the fixed set
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// The human-readable verdict sentence for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Build the status-change notification text for a homework record.
///
/// The record must carry a string `homework_name` and a `status` from the
/// fixed verdict set. Pure function, no I/O.
pub fn format_status_change(record: &Value) -> Result<String> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("homework_name"))?;
    let status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(WatchError::MissingField("status"))?;
    let status =
        ReviewStatus::parse(status).ok_or_else(|| WatchError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
