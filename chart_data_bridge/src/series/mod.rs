//! Series container: an ordered record sequence plus its styling and
//! overlays, assembled into one wire mapping.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::ingest::{self, FieldMapping, IngestError, TabularFrame};
use crate::models::band::BandPoint;
use crate::models::histogram::HistogramPoint;
use crate::models::line::LinePoint;
use crate::models::marker::Marker;
use crate::models::ohlc::OhlcBar;
use crate::models::record::{DataRecord, FromRow};
use crate::models::trend::TrendPoint;
use crate::options::price_line::PriceLineOptions;
use crate::options::series_style::{
    BandStyleOptions, CandlestickStyleOptions, HistogramStyleOptions, LineStyleOptions,
    TrendStyleOptions,
};
use crate::options::ConfigNode;

/// A pane identifier failed the non-negative check.
///
/// Raised by [`Series::validate_pane`], never at construction: a container
/// may hold a negative pane id temporarily and be corrected before the
/// check runs.
#[derive(Debug, Error)]
#[error("pane_id must be non-negative, got {0}")]
pub struct PaneError(pub i64);

/// The wire kind of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Single-value line.
    Line,
    /// Single-value histogram bars.
    Histogram,
    /// Filled candlesticks.
    Candlestick,
    /// OHLC bars without filled bodies.
    Bar,
    /// Three-line band with fill.
    Band,
    /// Trend overlay lines.
    Trend,
}

impl SeriesKind {
    /// The wire value of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesKind::Line => "line",
            SeriesKind::Histogram => "histogram",
            SeriesKind::Candlestick => "candlestick",
            SeriesKind::Bar => "bar",
            SeriesKind::Band => "band",
            SeriesKind::Trend => "trend",
        }
    }
}

/// Binds a record type to its style node and default wire kind.
pub trait SeriesData: DataRecord {
    /// The style node type this record kind is drawn with.
    type Style: ConfigNode + Default + Clone + std::fmt::Debug;

    /// Default wire kind for the record type.
    const KIND: SeriesKind;
}

impl SeriesData for LinePoint {
    type Style = LineStyleOptions;
    const KIND: SeriesKind = SeriesKind::Line;
}

impl SeriesData for HistogramPoint {
    type Style = HistogramStyleOptions;
    const KIND: SeriesKind = SeriesKind::Histogram;
}

impl SeriesData for OhlcBar {
    type Style = CandlestickStyleOptions;
    const KIND: SeriesKind = SeriesKind::Candlestick;
}

impl SeriesData for BandPoint {
    type Style = BandStyleOptions;
    const KIND: SeriesKind = SeriesKind::Band;
}

impl SeriesData for TrendPoint {
    type Style = TrendStyleOptions;
    const KIND: SeriesKind = SeriesKind::Trend;
}

/// An ordered sequence of records plus styling, markers and price lines.
///
/// Insertion order of records, markers and price lines is preserved all
/// the way to wire output.
#[derive(Debug, Clone)]
pub struct Series<R: SeriesData> {
    kind: SeriesKind,
    data: Vec<R>,
    /// The style node; mutate freely before serialization.
    pub options: R::Style,
    markers: Vec<Marker>,
    price_lines: Vec<PriceLineOptions>,
    price_scale_id: String,
    pane_id: i64,
}

impl<R: SeriesData> Default for Series<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SeriesData> Series<R> {
    /// An empty series of the record type's default kind.
    pub fn new() -> Self {
        Self {
            kind: R::KIND,
            data: Vec::new(),
            options: R::Style::default(),
            markers: Vec::new(),
            price_lines: Vec::new(),
            price_scale_id: "right".to_string(),
            pane_id: 0,
        }
    }

    /// An empty series with an explicit wire kind (e.g. `Bar` for OHLC
    /// records, `Histogram` for single-value records).
    pub fn with_kind(kind: SeriesKind) -> Self {
        let mut series = Self::new();
        series.kind = kind;
        series
    }

    /// A series seeded with records.
    pub fn with_data(data: Vec<R>) -> Self {
        let mut series = Self::new();
        series.data = data;
        series
    }

    /// The wire kind.
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// The records, in insertion order.
    pub fn data(&self) -> &[R] {
        &self.data
    }

    /// The markers, in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The price lines, in insertion order.
    pub fn price_lines(&self) -> &[PriceLineOptions] {
        &self.price_lines
    }

    /// The container-level price scale id.
    pub fn price_scale_id(&self) -> &str {
        &self.price_scale_id
    }

    /// The container-level pane id.
    pub fn pane_id(&self) -> i64 {
        self.pane_id
    }

    /// Append one record.
    pub fn append(&mut self, record: R) -> &mut Self {
        self.data.push(record);
        self
    }

    /// Append records in order.
    pub fn append_all(&mut self, records: impl IntoIterator<Item = R>) -> &mut Self {
        self.data.extend(records);
        self
    }

    /// Drop every record; styling and overlays stay.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Add a marker.
    pub fn add_marker(&mut self, marker: Marker) -> &mut Self {
        self.markers.push(marker);
        self
    }

    /// Drop every marker.
    pub fn clear_markers(&mut self) -> &mut Self {
        self.markers.clear();
        self
    }

    /// Add a price line.
    pub fn add_price_line(&mut self, line: PriceLineOptions) -> &mut Self {
        self.price_lines.push(line);
        self
    }

    /// Drop every price line.
    pub fn clear_price_lines(&mut self) -> &mut Self {
        self.price_lines.clear();
        self
    }

    /// Bind the series to a price scale. Always wins over any
    /// `price_scale_id` left in the style node.
    pub fn set_price_scale_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.price_scale_id = id.into();
        self
    }

    /// Assign the pane. Accepted unchecked; [`Series::validate_pane`] is
    /// the enforcement point.
    pub fn set_pane_id(&mut self, pane_id: i64) -> &mut Self {
        self.pane_id = pane_id;
        self
    }

    /// The deferred pane check: fails iff the pane id is negative.
    pub fn validate_pane(&self) -> Result<(), PaneError> {
        if self.pane_id < 0 {
            return Err(PaneError(self.pane_id));
        }
        Ok(())
    }

    /// Assemble the series wire mapping.
    ///
    /// `priceScaleId` and `paneId` are inserted into the options map after
    /// the style node serializes, so the container-level values always win.
    /// `markers`/`priceLines` appear only when non-empty.
    pub fn to_wire(&self) -> Map<String, Value> {
        let mut options = self.options.to_wire();
        options.insert(
            "priceScaleId".to_string(),
            Value::from(self.price_scale_id.clone()),
        );
        options.insert("paneId".to_string(), Value::from(self.pane_id));

        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.kind.as_str()));
        map.insert(
            "data".to_string(),
            Value::Array(self.data.iter().map(|r| Value::Object(r.to_wire())).collect()),
        );
        map.insert("options".to_string(), Value::Object(options));
        if !self.markers.is_empty() {
            map.insert(
                "markers".to_string(),
                Value::Array(
                    self.markers
                        .iter()
                        .map(|m| Value::Object(m.to_wire()))
                        .collect(),
                ),
            );
        }
        if !self.price_lines.is_empty() {
            map.insert(
                "priceLines".to_string(),
                Value::Array(
                    self.price_lines
                        .iter()
                        .map(|l| Value::Object(l.to_wire()))
                        .collect(),
                ),
            );
        }
        map
    }
}

impl<R: SeriesData + FromRow> Series<R> {
    /// A series seeded from a tabular frame.
    pub fn from_frame(frame: &TabularFrame, mapping: &FieldMapping) -> Result<Self, IngestError> {
        Ok(Self::with_data(ingest::ingest(frame, mapping)?))
    }
}

/// Object-safe view of a series, for heterogeneous chart membership.
pub trait WireSeries {
    /// The series wire mapping.
    fn to_wire(&self) -> Map<String, Value>;

    /// The deferred pane check.
    fn validate_pane(&self) -> Result<(), PaneError>;
}

impl<R: SeriesData> WireSeries for Series<R> {
    fn to_wire(&self) -> Map<String, Value> {
        Series::to_wire(self)
    }

    fn validate_pane(&self) -> Result<(), PaneError> {
        Series::validate_pane(self)
    }
}
