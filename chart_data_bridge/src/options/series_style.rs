//! Per-series style nodes.
//!
//! Sub-option groups (fields named `*_options`) merge flat into the owning
//! series' wire mapping: the renderer reads one flat options object with
//! keys like `wickUpColor` and `priceLineVisible`. The single exception is
//! `price_format_options`, which the renderer consumes as a nested
//! `"priceFormat"` object — it must never be flattened.

use serde::Serialize;

use crate::options::enums::{LineStyle, PriceFormatKind};
use crate::options::{impl_node_setters, ConfigError, ConfigNode};

/// Options every series kind carries; flattened into the owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesBaseOptions {
    /// Whether the series is drawn at all.
    pub visible: bool,
    /// Whether the dashed line at the last price is drawn.
    pub price_line_visible: bool,
    /// Whether the last value label is drawn on the price axis.
    pub last_value_visible: bool,
    /// Series title shown on the axis label; empty means none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Price scale the series binds to; unset means the container decides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_scale_id: Option<String>,
}

impl Default for SeriesBaseOptions {
    fn default() -> Self {
        Self {
            visible: true,
            price_line_visible: true,
            last_value_visible: true,
            title: String::new(),
            price_scale_id: None,
        }
    }
}

impl ConfigNode for SeriesBaseOptions {}

impl_node_setters!(SeriesBaseOptions {
    plain visible: bool => set_visible;
    plain price_line_visible: bool => set_price_line_visible;
    plain last_value_visible: bool => set_last_value_visible;
    into title: String => set_title;
    some price_scale_id: String => set_price_scale_id;
});

/// How the series formats values on the price axis.
///
/// Stays nested under `"priceFormat"` in wire output; an all-unset group
/// is omitted entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFormatOptions {
    /// Formatting kind; wire key `"type"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PriceFormatKind>,
    /// Decimal places shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    /// Minimal price movement; must be positive when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_move: Option<f64>,
}

impl PriceFormatOptions {
    /// True when no field is set, in which case the group is omitted.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.precision.is_none() && self.min_move.is_none()
    }

    /// Set the minimal price movement; must be positive and finite.
    pub fn set_min_move(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "min_move",
                reason: format!("expected a positive price step, got {value}"),
            });
        }
        self.min_move = Some(value);
        Ok(self)
    }
}

impl ConfigNode for PriceFormatOptions {}

impl_node_setters!(PriceFormatOptions {
    some kind: PriceFormatKind => set_kind;
    some precision: u8 => set_precision;
});

/// Candle wick styling; flattened into the owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WickStyleOptions {
    /// Whether wicks are drawn.
    pub wick_visible: bool,
    /// Wick color for up candles.
    pub wick_up_color: String,
    /// Wick color for down candles.
    pub wick_down_color: String,
}

impl Default for WickStyleOptions {
    fn default() -> Self {
        Self {
            wick_visible: true,
            wick_up_color: "#26a69a".to_string(),
            wick_down_color: "#ef5350".to_string(),
        }
    }
}

impl ConfigNode for WickStyleOptions {}

impl_node_setters!(WickStyleOptions {
    plain wick_visible: bool => set_wick_visible;
    into wick_up_color: String => set_wick_up_color;
    into wick_down_color: String => set_wick_down_color;
});

/// Candle body border styling; flattened into the owner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderStyleOptions {
    /// Whether body borders are drawn.
    pub border_visible: bool,
    /// Border color for up candles.
    pub border_up_color: String,
    /// Border color for down candles.
    pub border_down_color: String,
}

impl Default for BorderStyleOptions {
    fn default() -> Self {
        Self {
            border_visible: true,
            border_up_color: "#26a69a".to_string(),
            border_down_color: "#ef5350".to_string(),
        }
    }
}

impl ConfigNode for BorderStyleOptions {}

impl_node_setters!(BorderStyleOptions {
    plain border_visible: bool => set_border_visible;
    into border_up_color: String => set_border_up_color;
    into border_down_color: String => set_border_down_color;
});

/// Line series styling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyleOptions {
    /// Stroke color.
    pub color: String,
    /// Stroke width in pixels; at least 1.
    pub line_width: u32,
    /// Dash style.
    pub line_style: LineStyle,
    /// Common series options, flattened.
    #[serde(flatten)]
    pub base_options: SeriesBaseOptions,
    /// Price-axis formatting; the one nested sub-option group.
    #[serde(rename = "priceFormat", skip_serializing_if = "PriceFormatOptions::is_empty")]
    pub price_format_options: PriceFormatOptions,
}

impl Default for LineStyleOptions {
    fn default() -> Self {
        Self {
            color: "#2196f3".to_string(),
            line_width: 2,
            line_style: LineStyle::Solid,
            base_options: SeriesBaseOptions::default(),
            price_format_options: PriceFormatOptions::default(),
        }
    }
}

impl ConfigNode for LineStyleOptions {}

impl LineStyleOptions {
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

impl_node_setters!(LineStyleOptions {
    into color: String => set_color;
    plain line_style: LineStyle => set_line_style;
    plain base_options: SeriesBaseOptions => set_base_options;
    plain price_format_options: PriceFormatOptions => set_price_format_options;
});

/// Histogram series styling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramStyleOptions {
    /// Bar color, unless a point overrides it.
    pub color: String,
    /// Baseline the bars grow from.
    pub base: f64,
    /// Common series options, flattened.
    #[serde(flatten)]
    pub base_options: SeriesBaseOptions,
    /// Price-axis formatting; the one nested sub-option group.
    #[serde(rename = "priceFormat", skip_serializing_if = "PriceFormatOptions::is_empty")]
    pub price_format_options: PriceFormatOptions,
}

impl Default for HistogramStyleOptions {
    fn default() -> Self {
        Self {
            color: "#26a69a".to_string(),
            base: 0.0,
            base_options: SeriesBaseOptions::default(),
            price_format_options: PriceFormatOptions::default(),
        }
    }
}

impl ConfigNode for HistogramStyleOptions {}

impl_node_setters!(HistogramStyleOptions {
    into color: String => set_color;
    plain base: f64 => set_base;
    plain base_options: SeriesBaseOptions => set_base_options;
    plain price_format_options: PriceFormatOptions => set_price_format_options;
});

/// Candlestick (and OHLC bar) series styling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickStyleOptions {
    /// Body color for up candles.
    pub up_color: String,
    /// Body color for down candles.
    pub down_color: String,
    /// Wick styling, flattened.
    #[serde(flatten)]
    pub wick_options: WickStyleOptions,
    /// Border styling, flattened.
    #[serde(flatten)]
    pub border_options: BorderStyleOptions,
    /// Common series options, flattened.
    #[serde(flatten)]
    pub base_options: SeriesBaseOptions,
    /// Price-axis formatting; the one nested sub-option group.
    #[serde(rename = "priceFormat", skip_serializing_if = "PriceFormatOptions::is_empty")]
    pub price_format_options: PriceFormatOptions,
}

impl Default for CandlestickStyleOptions {
    fn default() -> Self {
        Self {
            up_color: "#26a69a".to_string(),
            down_color: "#ef5350".to_string(),
            wick_options: WickStyleOptions::default(),
            border_options: BorderStyleOptions::default(),
            base_options: SeriesBaseOptions::default(),
            price_format_options: PriceFormatOptions::default(),
        }
    }
}

impl ConfigNode for CandlestickStyleOptions {}

impl_node_setters!(CandlestickStyleOptions {
    into up_color: String => set_up_color;
    into down_color: String => set_down_color;
    plain wick_options: WickStyleOptions => set_wick_options;
    plain border_options: BorderStyleOptions => set_border_options;
    plain base_options: SeriesBaseOptions => set_base_options;
    plain price_format_options: PriceFormatOptions => set_price_format_options;
});

/// Band series styling (three lines plus a fill).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandStyleOptions {
    /// Upper line color.
    pub upper_line_color: String,
    /// Middle line color.
    pub middle_line_color: String,
    /// Lower line color.
    pub lower_line_color: String,
    /// Fill between the upper and lower lines (rgba).
    pub fill_color: String,
    /// Stroke width of the band lines.
    pub line_width: u32,
    /// Common series options, flattened.
    #[serde(flatten)]
    pub base_options: SeriesBaseOptions,
    /// Price-axis formatting; the one nested sub-option group.
    #[serde(rename = "priceFormat", skip_serializing_if = "PriceFormatOptions::is_empty")]
    pub price_format_options: PriceFormatOptions,
}

impl Default for BandStyleOptions {
    fn default() -> Self {
        Self {
            upper_line_color: "#2196f3".to_string(),
            middle_line_color: "#9598a1".to_string(),
            lower_line_color: "#2196f3".to_string(),
            fill_color: "rgba(33, 150, 243, 0.1)".to_string(),
            line_width: 1,
            base_options: SeriesBaseOptions::default(),
            price_format_options: PriceFormatOptions::default(),
        }
    }
}

impl ConfigNode for BandStyleOptions {}

impl_node_setters!(BandStyleOptions {
    into upper_line_color: String => set_upper_line_color;
    into middle_line_color: String => set_middle_line_color;
    into lower_line_color: String => set_lower_line_color;
    into fill_color: String => set_fill_color;
    plain line_width: u32 => set_line_width;
    plain base_options: SeriesBaseOptions => set_base_options;
    plain price_format_options: PriceFormatOptions => set_price_format_options;
});

/// Trend overlay styling.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStyleOptions {
    /// Up trend-line color.
    pub up_color: String,
    /// Down trend-line color.
    pub down_color: String,
    /// Stroke width of the trend lines.
    pub line_width: u32,
    /// Dash style of the trend lines.
    pub line_style: LineStyle,
    /// Common series options, flattened.
    #[serde(flatten)]
    pub base_options: SeriesBaseOptions,
    /// Price-axis formatting; the one nested sub-option group.
    #[serde(rename = "priceFormat", skip_serializing_if = "PriceFormatOptions::is_empty")]
    pub price_format_options: PriceFormatOptions,
}

impl Default for TrendStyleOptions {
    fn default() -> Self {
        Self {
            up_color: "#26a69a".to_string(),
            down_color: "#ef5350".to_string(),
            line_width: 2,
            line_style: LineStyle::Solid,
            base_options: SeriesBaseOptions::default(),
            price_format_options: PriceFormatOptions::default(),
        }
    }
}

impl ConfigNode for TrendStyleOptions {}

impl_node_setters!(TrendStyleOptions {
    into up_color: String => set_up_color;
    into down_color: String => set_down_color;
    plain line_width: u32 => set_line_width;
    plain line_style: LineStyle => set_line_style;
    plain base_options: SeriesBaseOptions => set_base_options;
    plain price_format_options: PriceFormatOptions => set_price_format_options;
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sub_option_groups_flatten_into_the_owner() {
        let wire = CandlestickStyleOptions::default().to_wire();
        // Wick, border and base groups land flat next to the body colors.
        assert_eq!(wire["upColor"], json!("#26a69a"));
        assert_eq!(wire["wickUpColor"], json!("#26a69a"));
        assert_eq!(wire["borderVisible"], json!(true));
        assert_eq!(wire["priceLineVisible"], json!(true));
        assert!(!wire.contains_key("wickOptions"));
        assert!(!wire.contains_key("borderOptions"));
        assert!(!wire.contains_key("baseOptions"));
    }

    #[test]
    fn price_format_group_stays_nested() {
        let mut style = LineStyleOptions::default();
        style
            .price_format_options
            .set_kind(PriceFormatKind::Percent)
            .set_precision(1_u8);
        let wire = style.to_wire();
        assert_eq!(
            wire["priceFormat"],
            json!({"type": "percent", "precision": 1})
        );
        // None of the group's keys leak into the flat map.
        assert!(!wire.contains_key("type"));
        assert!(!wire.contains_key("precision"));
    }

    #[test]
    fn empty_price_format_group_is_omitted() {
        let wire = LineStyleOptions::default().to_wire();
        assert!(!wire.contains_key("priceFormat"));
    }

    #[test]
    fn unset_price_scale_id_is_omitted() {
        let wire = LineStyleOptions::default().to_wire();
        assert!(!wire.contains_key("priceScaleId"));

        let mut style = LineStyleOptions::default();
        style.base_options.set_price_scale_id("left");
        assert_eq!(style.to_wire()["priceScaleId"], json!("left"));
    }

    #[test]
    fn line_width_validator_rejects_zero() {
        let mut style = LineStyleOptions::default();
        assert!(style.set_line_width(0).is_err());
        assert_eq!(style.line_width, 2);
        style.set_line_width(4).unwrap();
        assert_eq!(style.line_width, 4);
    }

    #[test]
    fn min_move_validator_rejects_non_positive() {
        let mut format = PriceFormatOptions::default();
        assert!(format.set_min_move(0.0).is_err());
        assert!(format.set_min_move(-0.01).is_err());
        assert!(format.is_empty());
        format.set_min_move(0.25).unwrap();
        assert_eq!(format.min_move, Some(0.25));
    }

    #[test]
    fn identical_nodes_serialize_identically() {
        let a = BandStyleOptions::default();
        let b = BandStyleOptions::default();
        assert_eq!(
            serde_json::to_string(&a.to_wire()).unwrap(),
            serde_json::to_string(&b.to_wire()).unwrap()
        );
        assert_eq!(a.to_wire(), a.to_wire());
    }
}
