//! Positional annotation: a note pinned to a time/price coordinate.

use serde_json::{Map, Value};

use crate::models::chart_time::{ChartTime, TimeFormatError, TimeValue};
use crate::models::record::{impl_time_ord, wire_num, DataRecord};

/// An annotation pinned to a `(time, price)` point on a chart pane.
///
/// Annotations are grouped into named layers by
/// [`AnnotationLayers`](crate::annotations::AnnotationLayers).
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Canonical time coordinate.
    pub time: ChartTime,
    /// Price coordinate.
    pub price: f64,
    /// Optional annotation text.
    pub text: Option<String>,
    /// Optional color; unset means the layer/renderer default.
    pub color: Option<String>,
}

impl Annotation {
    /// Create an annotation, normalizing `time` first.
    pub fn new(time: impl Into<TimeValue>, price: f64) -> Result<Self, TimeFormatError> {
        Ok(Self {
            time: ChartTime::normalize(time)?,
            price,
            text: None,
            color: None,
        })
    }

    /// Set the annotation text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the annotation color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl DataRecord for Annotation {
    const RECORD_TYPE: &'static str = "Annotation";

    fn time(&self) -> ChartTime {
        self.time
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::from(self.time.0));
        map.insert("price".to_string(), wire_num(self.price));
        if let Some(text) = &self.text {
            map.insert("text".to_string(), Value::from(text.clone()));
        }
        if let Some(color) = &self.color {
            map.insert("color".to_string(), Value::from(color.clone()));
        }
        map
    }
}

impl_time_ord!(Annotation);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_omits_unset_fields() {
        let note = Annotation::new("2022-01-01", 101.25).unwrap();
        assert_eq!(
            Value::Object(note.to_wire()),
            json!({"time": 1640995200, "price": 101.25})
        );
    }

    #[test]
    fn wire_shape_with_text_and_color() {
        let note = Annotation::new(10_i64, 5.0)
            .unwrap()
            .with_text("entry")
            .with_color("#2196f3");
        assert_eq!(
            Value::Object(note.to_wire()),
            json!({"time": 10, "price": 5.0, "text": "entry", "color": "#2196f3"})
        );
    }

    #[test]
    fn nan_price_serializes_as_zero() {
        let note = Annotation::new(0_i64, f64::NAN).unwrap();
        assert!(note.price.is_nan());
        assert_eq!(note.to_wire()["price"], json!(0));
    }
}
