//! Record traits shared by every chart data point type.
//!
//! A record is one normalized data point: a canonical [`ChartTime`] plus a
//! type-specific payload. [`DataRecord`] covers direct construction and wire
//! conversion; [`FromRow`] adds what tabular ingestion needs — the explicit
//! required/optional field lists and a row constructor. Field lists are
//! declared per type rather than collected from any type hierarchy, so the
//! ingestion contract of each record is readable in one place.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::models::chart_time::{ChartTime, TimeFormatError};

/// A record-level construction failure.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field had no resolved value for this record.
    #[error("{record_type} record is missing required field `{field}`")]
    MissingField {
        /// The record type the field belongs to.
        record_type: &'static str,
        /// The unresolved field name.
        field: &'static str,
    },

    /// Time normalization failed; propagated unchanged.
    #[error(transparent)]
    Time(#[from] TimeFormatError),
}

/// One normalized chart data point.
pub trait DataRecord {
    /// Human-readable type name used in error messages.
    const RECORD_TYPE: &'static str;

    /// Canonical time of this record.
    fn time(&self) -> ChartTime;

    /// Convert to the wire mapping.
    ///
    /// The time field serializes under `"time"`, single-value payloads under
    /// `"value"`, everything else under its camelCase key. Unset optional
    /// fields are omitted entirely; non-finite numerics serialize as `0`.
    fn to_wire(&self) -> Map<String, Value>;
}

/// A record that tabular ingestion can construct row by row.
pub trait FromRow: DataRecord + Sized {
    /// Field names that must resolve to a column during ingestion.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Field names that may be absent; absence leaves the field unset.
    const OPTIONAL_FIELDS: &'static [&'static str];

    /// Build one record from a resolved row.
    fn from_row(row: &crate::ingest::RowView<'_>) -> Result<Self, RecordError>;
}

/// Serialize a numeric field value, collapsing NaN/infinity to `0`.
///
/// The in-memory field keeps whatever it holds; only the wire output is
/// sanitized, so equality checks on raw values still see the original NaN.
pub(crate) fn wire_num(value: f64) -> Value {
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::from(0))
}

/// Implement time-only equality and ordering for a record type.
///
/// Records of the same type compare solely by canonical time; payload values
/// never participate.
macro_rules! impl_time_ord {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.time == other.time
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.time.cmp(&other.time)
            }
        }
    };
}

pub(crate) use impl_time_ord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_num_sanitizes_non_finite() {
        assert_eq!(wire_num(1.5), serde_json::json!(1.5));
        assert_eq!(wire_num(f64::NAN), serde_json::json!(0));
        assert_eq!(wire_num(f64::INFINITY), serde_json::json!(0));
        assert_eq!(wire_num(f64::NEG_INFINITY), serde_json::json!(0));
    }
}
