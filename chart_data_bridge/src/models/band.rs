//! Upper/middle/lower band point, used by trend-fill band series.

use serde_json::{Map, Value};

use crate::ingest::RowView;
use crate::models::chart_time::{ChartTime, TimeFormatError, TimeValue};
use crate::models::record::{impl_time_ord, wire_num, DataRecord, FromRow, RecordError};

/// One point of a three-line band (e.g. Bollinger-style envelopes).
#[derive(Debug, Clone)]
pub struct BandPoint {
    /// Canonical time.
    pub time: ChartTime,
    /// Upper band value.
    pub upper: f64,
    /// Middle band value.
    pub middle: f64,
    /// Lower band value.
    pub lower: f64,
}

impl BandPoint {
    /// Create a band point, normalizing `time` first.
    pub fn new(
        time: impl Into<TimeValue>,
        upper: f64,
        middle: f64,
        lower: f64,
    ) -> Result<Self, TimeFormatError> {
        Ok(Self {
            time: ChartTime::normalize(time)?,
            upper,
            middle,
            lower,
        })
    }
}

impl DataRecord for BandPoint {
    const RECORD_TYPE: &'static str = "BandPoint";

    fn time(&self) -> ChartTime {
        self.time
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::from(self.time.0));
        map.insert("upper".to_string(), wire_num(self.upper));
        map.insert("middle".to_string(), wire_num(self.middle));
        map.insert("lower".to_string(), wire_num(self.lower));
        map
    }
}

impl FromRow for BandPoint {
    const REQUIRED_FIELDS: &'static [&'static str] = &["time", "upper", "middle", "lower"];
    const OPTIONAL_FIELDS: &'static [&'static str] = &[];

    fn from_row(row: &RowView<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            time: row.time()?,
            upper: row.required_f64("upper")?,
            middle: row.required_f64("middle")?,
            lower: row.required_f64("lower")?,
        })
    }
}

impl_time_ord!(BandPoint);
