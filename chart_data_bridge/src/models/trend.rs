//! Trend-direction point with up to two trend-line values.

use serde_json::{Map, Value};

use crate::ingest::RowView;
use crate::models::chart_time::{ChartTime, TimeFormatError, TimeValue};
use crate::models::record::{impl_time_ord, wire_num, DataRecord, FromRow, RecordError};

/// One point of a trend overlay: a direction flag (`-1`, `0`, `1`) plus
/// optional up/down trend-line values. Whichever line is absent at a given
/// time is simply not drawn there.
#[derive(Debug, Clone)]
pub struct TrendPoint {
    /// Canonical time.
    pub time: ChartTime,
    /// Trend direction: positive = up, negative = down, zero = flat.
    pub direction: i8,
    /// Upper trend-line value, if the up line exists at this time.
    pub up_line: Option<f64>,
    /// Lower trend-line value, if the down line exists at this time.
    pub down_line: Option<f64>,
}

impl TrendPoint {
    /// Create a trend point, normalizing `time` first.
    pub fn new(time: impl Into<TimeValue>, direction: i8) -> Result<Self, TimeFormatError> {
        Ok(Self {
            time: ChartTime::normalize(time)?,
            direction,
            up_line: None,
            down_line: None,
        })
    }

    /// Set the up trend-line value.
    pub fn with_up_line(mut self, value: f64) -> Self {
        self.up_line = Some(value);
        self
    }

    /// Set the down trend-line value.
    pub fn with_down_line(mut self, value: f64) -> Self {
        self.down_line = Some(value);
        self
    }
}

impl DataRecord for TrendPoint {
    const RECORD_TYPE: &'static str = "TrendPoint";

    fn time(&self) -> ChartTime {
        self.time
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::from(self.time.0));
        map.insert("direction".to_string(), Value::from(self.direction));
        if let Some(up) = self.up_line {
            map.insert("upLine".to_string(), wire_num(up));
        }
        if let Some(down) = self.down_line {
            map.insert("downLine".to_string(), wire_num(down));
        }
        map
    }
}

impl FromRow for TrendPoint {
    const REQUIRED_FIELDS: &'static [&'static str] = &["time", "direction"];
    const OPTIONAL_FIELDS: &'static [&'static str] = &["up_line", "down_line"];

    fn from_row(row: &RowView<'_>) -> Result<Self, RecordError> {
        let direction = row.required_f64("direction")?;
        Ok(Self {
            time: row.time()?,
            direction: direction as i8,
            up_line: row.optional_f64("up_line"),
            down_line: row.optional_f64("down_line"),
        })
    }
}

impl_time_ord!(TrendPoint);
