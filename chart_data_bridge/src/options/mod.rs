//! Declarative configuration nodes and their wire serialization.
//!
//! Every option type here is a [`ConfigNode`]: a fixed set of declared
//! fields with defaults, serialized to a wire mapping by the rules the
//! renderer expects — camelCase keys, enums collapsed to primitives, unset
//! (`None`/empty) values omitted, nested nodes recursed into, and
//! `*_options` sub-option groups merged flat into their parent. The one
//! exception to flattening is the price-format group, which stays nested
//! under `"priceFormat"`; see [`series_style`].
//!
//! Fields are public for direct assignment; `set_<field>` chaining setters
//! are generated at type-definition time by [`impl_node_setters!`], and the
//! handful of fields with value constraints get hand-written setters that
//! return [`ConfigError`] on rejection without touching the node.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub mod chart;
pub mod enums;
pub mod price_line;
pub mod series_style;

pub use chart::{
    ChartOptions, CrosshairLineOptions, CrosshairOptions, GridLineOptions, GridOptions,
    LayoutOptions, PriceScaleOptions, ScaleMarginsOptions, TimeScaleOptions,
};
pub use enums::{
    CrosshairMode, LineStyle, MarkerPosition, MarkerShape, PriceFormatKind, PriceScaleMode,
};
pub use price_line::PriceLineOptions;
pub use series_style::{
    BandStyleOptions, BorderStyleOptions, CandlestickStyleOptions, HistogramStyleOptions,
    LineStyleOptions, PriceFormatOptions, SeriesBaseOptions, TrendStyleOptions, WickStyleOptions,
};

/// A setter rejected the supplied value; the node is unchanged.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The value failed the field's declared validator.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// The rejecting field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A configuration tree node that serializes to a wire mapping.
///
/// `to_wire` is side-effect-free and idempotent: calling it any number of
/// times with no mutation in between yields an equal mapping.
pub trait ConfigNode: Serialize {
    /// Serialize this node to its wire mapping.
    fn to_wire(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Generate `set_<field>` chaining setters for a node type.
///
/// Entry kinds: `plain` assigns the value as-is, `into` converts via
/// `Into`, `some` wraps an `Into`-converted value in `Some`.
macro_rules! impl_node_setters {
    ($ty:ty { $( $kind:ident $field:ident : $t:ty => $setter:ident; )* }) => {
        impl $ty {
            $( $crate::options::impl_node_setters!(@method $kind $field : $t => $setter); )*
        }
    };
    (@method plain $field:ident : $t:ty => $setter:ident) => {
        /// Set this field, returning the node for chaining.
        pub fn $setter(&mut self, value: $t) -> &mut Self {
            self.$field = value;
            self
        }
    };
    (@method into $field:ident : $t:ty => $setter:ident) => {
        /// Set this field, returning the node for chaining.
        pub fn $setter(&mut self, value: impl Into<$t>) -> &mut Self {
            self.$field = value.into();
            self
        }
    };
    (@method some $field:ident : $t:ty => $setter:ident) => {
        /// Set this field, returning the node for chaining.
        pub fn $setter(&mut self, value: impl Into<$t>) -> &mut Self {
            self.$field = Some(value.into());
            self
        }
    };
}

pub(crate) use impl_node_setters;
