//! Acquisition-timestamp parsing.
//!
//! Image acquisition times arrive as free-form strings in job files and
//! metadata headers, almost always day-first (`15/06/2020 12:00:00`). The
//! parser tries a fixed list of day-first layouts, then ISO 8601; date-only
//! inputs resolve to midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors during timestamp parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unrecognised date/time '{0}' (expected day-first, e.g. 15/06/2020 12:00:00)")]
    Unrecognised(String),
}

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Parse a day-first timestamp string.
pub fn parse_day_first(text: &str) -> Result<NaiveDateTime, ParseError> {
    let text = text.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    Err(ParseError::Unrecognised(text.to_string()))
}
