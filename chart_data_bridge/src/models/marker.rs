//! Series marker: a positioned glyph attached to one bar time.

use serde_json::{Map, Value};

use crate::models::chart_time::{ChartTime, TimeFormatError, TimeValue};
use crate::models::record::{impl_time_ord, DataRecord};
use crate::options::enums::{MarkerPosition, MarkerShape};

/// A marker drawn relative to the bar at its canonical time.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Canonical time of the bar the marker attaches to.
    pub time: ChartTime,
    /// Where the glyph sits relative to the bar.
    pub position: MarkerPosition,
    /// Glyph shape.
    pub shape: MarkerShape,
    /// Glyph color; unset means the renderer's default.
    pub color: Option<String>,
    /// Optional label next to the glyph.
    pub text: Option<String>,
}

impl Marker {
    /// Create a marker with default position/shape, normalizing `time` first.
    pub fn new(time: impl Into<TimeValue>) -> Result<Self, TimeFormatError> {
        Ok(Self {
            time: ChartTime::normalize(time)?,
            position: MarkerPosition::BelowBar,
            shape: MarkerShape::Circle,
            color: None,
            text: None,
        })
    }

    /// Set the marker position.
    pub fn with_position(mut self, position: MarkerPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the glyph shape.
    pub fn with_shape(mut self, shape: MarkerShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the glyph color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the marker label.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl DataRecord for Marker {
    const RECORD_TYPE: &'static str = "Marker";

    fn time(&self) -> ChartTime {
        self.time
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::from(self.time.0));
        map.insert("position".to_string(), Value::from(self.position.as_str()));
        map.insert("shape".to_string(), Value::from(self.shape.as_str()));
        if let Some(color) = &self.color {
            map.insert("color".to_string(), Value::from(color.clone()));
        }
        if let Some(text) = &self.text {
            map.insert("text".to_string(), Value::from(text.clone()));
        }
        map
    }
}

impl_time_ord!(Marker);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_with_defaults() {
        let marker = Marker::new("2022-01-01").unwrap();
        assert_eq!(
            Value::Object(marker.to_wire()),
            json!({"time": 1640995200, "position": "belowBar", "shape": "circle"})
        );
    }

    #[test]
    fn wire_shape_fully_specified() {
        let marker = Marker::new(0_i64)
            .unwrap()
            .with_position(MarkerPosition::AboveBar)
            .with_shape(MarkerShape::ArrowDown)
            .with_color("#e91e63")
            .with_text("sell");
        assert_eq!(
            Value::Object(marker.to_wire()),
            json!({
                "time": 0,
                "position": "aboveBar",
                "shape": "arrowDown",
                "color": "#e91e63",
                "text": "sell"
            })
        );
    }
}
