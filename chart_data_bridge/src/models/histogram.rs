//! Single-value histogram data point.
//!
//! Same payload shape as a line point, but its own type so histogram
//! series carry histogram styling (base value, bar color) instead of line
//! styling.

use serde_json::{Map, Value};

use crate::ingest::RowView;
use crate::models::chart_time::{ChartTime, TimeFormatError, TimeValue};
use crate::models::record::{impl_time_ord, wire_num, DataRecord, FromRow, RecordError};

/// One histogram bar value, with an optional per-bar color override.
#[derive(Debug, Clone)]
pub struct HistogramPoint {
    /// Canonical time.
    pub time: ChartTime,
    /// Bar value.
    pub value: f64,
    /// Per-bar color override (e.g. up/down volume coloring).
    pub color: Option<String>,
}

impl HistogramPoint {
    /// Create a bar value, normalizing `time` first.
    pub fn new(time: impl Into<TimeValue>, value: f64) -> Result<Self, TimeFormatError> {
        Ok(Self {
            time: ChartTime::normalize(time)?,
            value,
            color: None,
        })
    }

    /// Set a per-bar color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl DataRecord for HistogramPoint {
    const RECORD_TYPE: &'static str = "HistogramPoint";

    fn time(&self) -> ChartTime {
        self.time
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::from(self.time.0));
        map.insert("value".to_string(), wire_num(self.value));
        if let Some(color) = &self.color {
            map.insert("color".to_string(), Value::from(color.clone()));
        }
        map
    }
}

impl FromRow for HistogramPoint {
    const REQUIRED_FIELDS: &'static [&'static str] = &["time", "value"];
    const OPTIONAL_FIELDS: &'static [&'static str] = &["color"];

    fn from_row(row: &RowView<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            time: row.time()?,
            value: row.required_f64("value")?,
            color: row.optional_text("color"),
        })
    }
}

impl_time_ord!(HistogramPoint);
