//! Typed chart data records and their wire-format configuration tree.
//!
//! This crate models financial chart inputs — price series, markers,
//! trend-fill bands, trade annotations — as typed records, and converts
//! them into the normalized, JSON-serializable configuration tree an
//! external rendering engine consumes. The engine itself is opaque: it
//! sits behind the [`render::RenderBoundary`] seam and receives one tree
//! per render call.
//!
//! The pipeline, leaves first:
//! - [`models::ChartTime`] normalizes every accepted time input to integer
//!   epoch seconds (UTC);
//! - record types ([`models::LinePoint`], [`models::OhlcBar`], …) hold one
//!   normalized data point each and serialize themselves;
//! - [`ingest`] turns polars frames (with optional row keys) into record
//!   sequences via explicit field mappings;
//! - [`options`] nodes form the declarative configuration tree;
//! - [`series::Series`] assembles records + styling + overlays;
//! - [`render::ChartSet`] composes everything and talks to the boundary.
//!
//! Everything here is synchronous and allocation-only: no I/O, no
//! blocking, no suspension points. Independent trees may be built and
//! serialized from separate threads; a single container instance is not
//! internally synchronized.

pub mod annotations;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod options;
pub mod render;
pub mod series;

pub use annotations::{AnnotationLayer, AnnotationLayers, DEFAULT_LAYER};
pub use errors::Error;
pub use ingest::{FieldMapping, IngestError, KeyLevel, RowKey, TabularFrame};
pub use models::{
    Annotation, BandPoint, ChartTime, DataRecord, HistogramPoint, LinePoint, Marker, OhlcBar,
    TimeFormatError, TrendPoint,
};
pub use options::{ChartOptions, ConfigError, ConfigNode};
pub use render::{BoundaryError, Chart, ChartSet, RenderBoundary, SyncConfig};
pub use series::{PaneError, Series, SeriesKind};
