//! Canonical chart time and the conversions that produce it.
//!
//! What this module provides:
//! - [`ChartTime`]: the single internal representation of a point in time —
//!   integer seconds since the Unix epoch, UTC.
//! - [`TimeValue`]: every input shape a caller may hand us (date text,
//!   integer/float epoch seconds, chrono date/datetime values), with `From`
//!   impls so record constructors can take `impl Into<TimeValue>`.
//! - [`ChartTime::normalize`]: the one conversion entry point.
//!
//! Notes:
//! - All math is UTC. Naive dates and datetimes are interpreted as UTC wall
//!   time; there is no platform-local interpretation anywhere in this crate,
//!   so output never depends on the host timezone.
//! - Float inputs truncate toward zero. Non-finite floats are rejected.
//! - Text accepts RFC 3339 and the common ISO-ish layouts, tried in order:
//!   `2022-01-01T09:30:00Z`, `2022-01-01T09:30:00`, `2022-01-01 09:30:00`,
//!   `2022-01-01`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// A time input that could not be converted to canonical epoch seconds.
#[derive(Debug, Error)]
pub enum TimeFormatError {
    /// Text input that none of the accepted layouts could parse.
    #[error("unparseable time text: {text:?}")]
    Unparseable {
        /// The offending input, verbatim.
        text: String,
    },

    /// A float epoch value that is NaN or infinite.
    #[error("non-finite epoch seconds value: {value}")]
    NonFinite {
        /// The offending value.
        value: f64,
    },

    /// An input whose type carries no usable time representation
    /// (e.g. a tabular column of an unsupported dtype).
    #[error("unsupported time type: {type_name}")]
    UnsupportedType {
        /// Name of the rejected type or dtype.
        type_name: String,
    },
}

/// Canonical time: integer seconds since the Unix epoch, UTC.
///
/// Serializes as a bare integer, which is exactly what the wire format's
/// `"time"` key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ChartTime(pub i64);

/// The set of accepted time inputs.
#[derive(Debug, Clone)]
pub enum TimeValue {
    /// A date/time string in one of the accepted text layouts.
    Text(String),
    /// Integer epoch seconds, passed through unchanged.
    Seconds(i64),
    /// Float epoch seconds, truncated toward zero.
    SecondsFloat(f64),
    /// A calendar date, taken as midnight UTC.
    Date(NaiveDate),
    /// A naive datetime, taken as UTC wall time.
    DateTime(NaiveDateTime),
    /// An already-zoned UTC datetime.
    Utc(DateTime<Utc>),
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        TimeValue::Text(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        TimeValue::Text(value)
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        TimeValue::Seconds(value)
    }
}

impl From<i32> for TimeValue {
    fn from(value: i32) -> Self {
        TimeValue::Seconds(value as i64)
    }
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        TimeValue::SecondsFloat(value)
    }
}

impl From<NaiveDate> for TimeValue {
    fn from(value: NaiveDate) -> Self {
        TimeValue::Date(value)
    }
}

impl From<NaiveDateTime> for TimeValue {
    fn from(value: NaiveDateTime) -> Self {
        TimeValue::DateTime(value)
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(value: DateTime<Utc>) -> Self {
        TimeValue::Utc(value)
    }
}

impl From<ChartTime> for TimeValue {
    fn from(value: ChartTime) -> Self {
        TimeValue::Seconds(value.0)
    }
}

/// Text layouts tried after RFC 3339, in order.
const TEXT_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

impl ChartTime {
    /// Convert any accepted time input to canonical epoch seconds.
    ///
    /// Example:
    /// - `"2022-01-01"` -> `ChartTime(1640995200)`
    pub fn normalize(value: impl Into<TimeValue>) -> Result<Self, TimeFormatError> {
        match value.into() {
            TimeValue::Text(text) => parse_text(&text),
            TimeValue::Seconds(secs) => Ok(ChartTime(secs)),
            TimeValue::SecondsFloat(secs) => {
                if !secs.is_finite() {
                    return Err(TimeFormatError::NonFinite { value: secs });
                }
                Ok(ChartTime(secs.trunc() as i64))
            }
            TimeValue::Date(date) => Ok(ChartTime(date_to_epoch(date))),
            TimeValue::DateTime(dt) => Ok(ChartTime(dt.and_utc().timestamp())),
            TimeValue::Utc(dt) => Ok(ChartTime(dt.timestamp())),
        }
    }

    /// The epoch-seconds value.
    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

fn date_to_epoch(date: NaiveDate) -> i64 {
    // Midnight always exists on a NaiveDate.
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Parse date/time text into epoch seconds, UTC.
fn parse_text(text: &str) -> Result<ChartTime, TimeFormatError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(ChartTime(dt.with_timezone(&Utc).timestamp()));
    }
    for layout in TEXT_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, layout) {
            return Ok(ChartTime(dt.and_utc().timestamp()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(ChartTime(date_to_epoch(date)));
    }
    Err(TimeFormatError::Unparseable {
        text: text.to_string(),
    })
}
