//! Horizontal price-line overlay attached to a series.

use serde::Serialize;

use crate::options::enums::LineStyle;
use crate::options::{impl_node_setters, ConfigError, ConfigNode};

/// One horizontal line drawn at a fixed price on the owning series' scale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLineOptions {
    /// Price the line is drawn at.
    pub price: f64,
    /// Line color.
    pub color: String,
    /// Stroke width in pixels; at least 1.
    pub line_width: u32,
    /// Dash style.
    pub line_style: LineStyle,
    /// Whether the price is labeled on the axis.
    pub axis_label_visible: bool,
    /// Label text on the line itself; empty means none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

impl PriceLineOptions {
    /// Create a price line at `price` with default styling.
    pub fn new(price: f64) -> Self {
        Self {
            price,
            color: "#9598a1".to_string(),
            line_width: 1,
            line_style: LineStyle::Dashed,
            axis_label_visible: true,
            title: String::new(),
        }
    }

    /// Set the stroke width; must be at least 1 pixel.
    pub fn set_line_width(&mut self, value: u32) -> Result<&mut Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidValue {
                field: "line_width",
                reason: "expected a width of at least 1 pixel, got 0".to_string(),
            });
        }
        self.line_width = value;
        Ok(self)
    }
}

impl Default for PriceLineOptions {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ConfigNode for PriceLineOptions {}

impl_node_setters!(PriceLineOptions {
    plain price: f64 => set_price;
    into color: String => set_color;
    plain line_style: LineStyle => set_line_style;
    plain axis_label_visible: bool => set_axis_label_visible;
    into title: String => set_title;
});
