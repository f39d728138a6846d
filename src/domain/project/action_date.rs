//! Normalization of incoming `action_date` values to epoch seconds

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const ACTION_DATE_FIELD: &str = "action_date";

/// Naive date-time layouts, interpreted as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `action_date` as a client may send it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionDateInput {
    /// Already an epoch-seconds timestamp
    Timestamp(i64),
    /// A textual date or date-time
    Text(String),
}

impl From<&str> for ActionDateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for ActionDateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

/// Convert an `action_date` input into integer epoch seconds.
///
/// Values without an offset are read as UTC. Sub-second precision is dropped.
pub fn parse_action_date(input: &ActionDateInput) -> Result<i64, DomainError> {
    match input {
        ActionDateInput::Timestamp(ts) => Ok(*ts),
        ActionDateInput::Text(text) => parse_text(text.trim()).ok_or_else(|| {
            DomainError::invalid_field(
                ACTION_DATE_FIELD,
                format!("'{}' is not a recognized date or date-time", text),
            )
        }),
    }
}

fn parse_text(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp());
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp())
}
