//! Enum-valued option fields and their wire primitives.
//!
//! The renderer takes enums collapsed to primitives: small style enums go
//! out as integers, positional/naming enums as camelCase strings. Each
//! `Serialize` impl here is that collapse.

use serde::{Serialize, Serializer};

/// Dash pattern of a drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Solid stroke.
    #[default]
    Solid = 0,
    /// Dotted stroke.
    Dotted = 1,
    /// Dashed stroke.
    Dashed = 2,
    /// Wide dashes.
    LargeDashed = 3,
    /// Sparse dots.
    SparseDotted = 4,
}

impl Serialize for LineStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Crosshair snapping behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrosshairMode {
    /// Free-floating crosshair.
    #[default]
    Normal = 0,
    /// Crosshair snaps to series points.
    Magnet = 1,
}

impl Serialize for CrosshairMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Price axis scaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceScaleMode {
    /// Plain price scale.
    #[default]
    Normal = 0,
    /// Logarithmic scale.
    Logarithmic = 1,
    /// Percentage change scale.
    Percentage = 2,
    /// Indexed to 100 at the first visible point.
    IndexedTo100 = 3,
}

impl Serialize for PriceScaleMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Where a marker glyph sits relative to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPosition {
    /// Above the bar.
    AboveBar,
    /// Below the bar.
    #[default]
    BelowBar,
    /// Centered on the bar.
    InBar,
}

impl MarkerPosition {
    /// The camelCase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerPosition::AboveBar => "aboveBar",
            MarkerPosition::BelowBar => "belowBar",
            MarkerPosition::InBar => "inBar",
        }
    }
}

impl Serialize for MarkerPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Marker glyph shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Upward arrow.
    ArrowUp,
    /// Downward arrow.
    ArrowDown,
}

impl MarkerShape {
    /// The camelCase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Square => "square",
            MarkerShape::ArrowUp => "arrowUp",
            MarkerShape::ArrowDown => "arrowDown",
        }
    }
}

impl Serialize for MarkerShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// How a series formats its values on the price axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFormatKind {
    /// Plain price formatting.
    #[default]
    Price,
    /// Volume-style abbreviated formatting.
    Volume,
    /// Percent formatting.
    Percent,
}

impl PriceFormatKind {
    /// The lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceFormatKind::Price => "price",
            PriceFormatKind::Volume => "volume",
            PriceFormatKind::Percent => "percent",
        }
    }
}

impl Serialize for PriceFormatKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
