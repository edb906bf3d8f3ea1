//! Chart-level option nodes: sizing, layout, grid, crosshair, scales.

use serde::Serialize;

use crate::options::enums::{CrosshairMode, LineStyle, PriceScaleMode};
use crate::options::{impl_node_setters, ConfigError, ConfigNode};

/// Background and text styling for the whole chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Chart background color.
    pub background_color: String,
    /// Axis label and legend text color.
    pub text_color: String,
    /// Base font size in pixels.
    pub font_size: u32,
    /// Font family; empty means the renderer default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub font_family: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#191919".to_string(),
            font_size: 12,
            font_family: String::new(),
        }
    }
}

impl ConfigNode for LayoutOptions {}

impl_node_setters!(LayoutOptions {
    into background_color: String => set_background_color;
    into text_color: String => set_text_color;
    plain font_size: u32 => set_font_size;
    into font_family: String => set_font_family;
});

/// One family of grid lines (vertical or horizontal).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLineOptions {
    /// Line color.
    pub color: String,
    /// Dash style.
    pub style: LineStyle,
    /// Whether this family of lines is drawn.
    pub visible: bool,
}

impl Default for GridLineOptions {
    fn default() -> Self {
        Self {
            color: "#d6dcde".to_string(),
            style: LineStyle::Solid,
            visible: true,
        }
    }
}

impl ConfigNode for GridLineOptions {}

impl_node_setters!(GridLineOptions {
    into color: String => set_color;
    plain style: LineStyle => set_style;
    plain visible: bool => set_visible;
});

/// Grid configuration: vertical and horizontal line families.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    /// Vertical grid lines.
    pub vert_lines: GridLineOptions,
    /// Horizontal grid lines.
    pub horz_lines: GridLineOptions,
}

impl ConfigNode for GridOptions {}

impl_node_setters!(GridOptions {
    plain vert_lines: GridLineOptions => set_vert_lines;
    plain horz_lines: GridLineOptions => set_horz_lines;
});

/// One crosshair line (vertical or horizontal).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairLineOptions {
    /// Line color.
    pub color: String,
    /// Line width in pixels.
    pub width: u32,
    /// Dash style.
    pub style: LineStyle,
    /// Whether the line is drawn.
    pub visible: bool,
    /// Whether the axis label for this line is drawn.
    pub label_visible: bool,
    /// Axis label background; empty means the renderer default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label_background_color: String,
}

impl Default for CrosshairLineOptions {
    fn default() -> Self {
        Self {
            color: "#758696".to_string(),
            width: 1,
            style: LineStyle::LargeDashed,
            visible: true,
            label_visible: true,
            label_background_color: String::new(),
        }
    }
}

impl ConfigNode for CrosshairLineOptions {}

impl_node_setters!(CrosshairLineOptions {
    into color: String => set_color;
    plain width: u32 => set_width;
    plain style: LineStyle => set_style;
    plain visible: bool => set_visible;
    plain label_visible: bool => set_label_visible;
    into label_background_color: String => set_label_background_color;
});

/// Crosshair configuration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosshairOptions {
    /// Snapping behavior.
    pub mode: CrosshairMode,
    /// The vertical line.
    pub vert_line: CrosshairLineOptions,
    /// The horizontal line.
    pub horz_line: CrosshairLineOptions,
}

impl ConfigNode for CrosshairOptions {}

impl_node_setters!(CrosshairOptions {
    plain mode: CrosshairMode => set_mode;
    plain vert_line: CrosshairLineOptions => set_vert_line;
    plain horz_line: CrosshairLineOptions => set_horz_line;
});

/// Top/bottom margins of a price scale, as fractions of the pane height.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMarginsOptions {
    /// Fraction of the pane left empty above the series (0..=1).
    pub top: f64,
    /// Fraction of the pane left empty below the series (0..=1).
    pub bottom: f64,
}

impl Default for ScaleMarginsOptions {
    fn default() -> Self {
        Self { top: 0.2, bottom: 0.1 }
    }
}

impl ConfigNode for ScaleMarginsOptions {}

impl ScaleMarginsOptions {
    /// Set the top margin; must lie in `0..=1`.
    pub fn set_top(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidValue {
                field: "top",
                reason: format!("expected a fraction in 0..=1, got {value}"),
            });
        }
        self.top = value;
        Ok(self)
    }

    /// Set the bottom margin; must lie in `0..=1`.
    pub fn set_bottom(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidValue {
                field: "bottom",
                reason: format!("expected a fraction in 0..=1, got {value}"),
            });
        }
        self.bottom = value;
        Ok(self)
    }
}

/// One price scale (left or right axis).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceScaleOptions {
    /// Scaling mode.
    pub mode: PriceScaleMode,
    /// Whether the scale follows the visible data range.
    pub auto_scale: bool,
    /// Whether the scale is inverted.
    pub invert_scale: bool,
    /// Whether the axis border is drawn.
    pub border_visible: bool,
    /// Axis border color; empty means the renderer default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub border_color: String,
    /// Explicit margins; unset means the renderer default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_margins: Option<ScaleMarginsOptions>,
}

impl Default for PriceScaleOptions {
    fn default() -> Self {
        Self {
            mode: PriceScaleMode::Normal,
            auto_scale: true,
            invert_scale: false,
            border_visible: true,
            border_color: String::new(),
            scale_margins: None,
        }
    }
}

impl ConfigNode for PriceScaleOptions {}

impl_node_setters!(PriceScaleOptions {
    plain mode: PriceScaleMode => set_mode;
    plain auto_scale: bool => set_auto_scale;
    plain invert_scale: bool => set_invert_scale;
    plain border_visible: bool => set_border_visible;
    into border_color: String => set_border_color;
    some scale_margins: ScaleMarginsOptions => set_scale_margins;
});

/// The time axis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeScaleOptions {
    /// Offset from the right edge, in bars.
    pub right_offset: f64,
    /// Horizontal space per bar, in pixels; must be positive.
    pub bar_spacing: f64,
    /// Whether the leftmost bar is pinned to the pane edge.
    pub fix_left_edge: bool,
    /// Whether time-of-day labels are drawn.
    pub time_visible: bool,
    /// Whether label times include seconds.
    pub seconds_visible: bool,
    /// Whether the axis border is drawn.
    pub border_visible: bool,
    /// Axis border color; empty means the renderer default.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub border_color: String,
}

impl Default for TimeScaleOptions {
    fn default() -> Self {
        Self {
            right_offset: 0.0,
            bar_spacing: 6.0,
            fix_left_edge: false,
            time_visible: true,
            seconds_visible: false,
            border_visible: true,
            border_color: String::new(),
        }
    }
}

impl ConfigNode for TimeScaleOptions {}

impl TimeScaleOptions {
    /// Set the per-bar spacing; must be a positive, finite pixel count.
    pub fn set_bar_spacing(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "bar_spacing",
                reason: format!("expected a positive pixel count, got {value}"),
            });
        }
        self.bar_spacing = value;
        Ok(self)
    }
}

impl_node_setters!(TimeScaleOptions {
    plain right_offset: f64 => set_right_offset;
    plain fix_left_edge: bool => set_fix_left_edge;
    plain time_visible: bool => set_time_visible;
    plain seconds_visible: bool => set_seconds_visible;
    plain border_visible: bool => set_border_visible;
    into border_color: String => set_border_color;
});

/// The chart-level option tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Fixed width in pixels; unset means size to the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Fixed height in pixels; unset means size to the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Whether the chart tracks its container size.
    pub auto_size: bool,
    /// Watermark text; empty means no watermark.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub watermark: String,
    /// Layout styling.
    pub layout: LayoutOptions,
    /// Grid lines.
    pub grid: GridOptions,
    /// Crosshair behavior.
    pub crosshair: CrosshairOptions,
    /// Time axis.
    pub time_scale: TimeScaleOptions,
    /// Right price axis.
    pub right_price_scale: PriceScaleOptions,
    /// Left price axis; unset means the axis stays hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_price_scale: Option<PriceScaleOptions>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            auto_size: true,
            watermark: String::new(),
            layout: LayoutOptions::default(),
            grid: GridOptions::default(),
            crosshair: CrosshairOptions::default(),
            time_scale: TimeScaleOptions::default(),
            right_price_scale: PriceScaleOptions::default(),
            left_price_scale: None,
        }
    }
}

impl ConfigNode for ChartOptions {}

impl_node_setters!(ChartOptions {
    some width: u32 => set_width;
    some height: u32 => set_height;
    plain auto_size: bool => set_auto_size;
    into watermark: String => set_watermark;
    plain layout: LayoutOptions => set_layout;
    plain grid: GridOptions => set_grid;
    plain crosshair: CrosshairOptions => set_crosshair;
    plain time_scale: TimeScaleOptions => set_time_scale;
    plain right_price_scale: PriceScaleOptions => set_right_price_scale;
    some left_price_scale: PriceScaleOptions => set_left_price_scale;
});
