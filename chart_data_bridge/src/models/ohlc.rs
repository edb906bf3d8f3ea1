//! Open/high/low/close bar, used by candlestick and bar series.

use serde_json::{Map, Value};

use crate::ingest::RowView;
use crate::models::chart_time::{ChartTime, TimeFormatError, TimeValue};
use crate::models::record::{impl_time_ord, wire_num, DataRecord, FromRow, RecordError};

/// A single OHLC bar for a given timestamp, optionally carrying volume.
#[derive(Debug, Clone)]
pub struct OhlcBar {
    /// Canonical time.
    pub time: ChartTime,
    /// Opening price.
    pub open: f64,
    /// Highest price during the bar interval.
    pub high: f64,
    /// Lowest price during the bar interval.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Volume traded during the bar interval. Not all sources supply this.
    pub volume: Option<f64>,
}

impl OhlcBar {
    /// Create a bar, normalizing `time` first.
    pub fn new(
        time: impl Into<TimeValue>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Result<Self, TimeFormatError> {
        Ok(Self {
            time: ChartTime::normalize(time)?,
            open,
            high,
            low,
            close,
            volume: None,
        })
    }

    /// Attach a volume value.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

impl DataRecord for OhlcBar {
    const RECORD_TYPE: &'static str = "OhlcBar";

    fn time(&self) -> ChartTime {
        self.time
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::from(self.time.0));
        map.insert("open".to_string(), wire_num(self.open));
        map.insert("high".to_string(), wire_num(self.high));
        map.insert("low".to_string(), wire_num(self.low));
        map.insert("close".to_string(), wire_num(self.close));
        if let Some(volume) = self.volume {
            map.insert("volume".to_string(), wire_num(volume));
        }
        map
    }
}

impl FromRow for OhlcBar {
    const REQUIRED_FIELDS: &'static [&'static str] = &["time", "open", "high", "low", "close"];
    const OPTIONAL_FIELDS: &'static [&'static str] = &["volume"];

    fn from_row(row: &RowView<'_>) -> Result<Self, RecordError> {
        Ok(Self {
            time: row.time()?,
            open: row.required_f64("open")?,
            high: row.required_f64("high")?,
            low: row.required_f64("low")?,
            close: row.required_f64("close")?,
            volume: row.optional_f64("volume"),
        })
    }
}

impl_time_ord!(OhlcBar);
