//! The render boundary seam and the top-level config-tree aggregator.
//!
//! The actual engine (drawing, zoom, crosshair) lives behind
//! [`RenderBoundary`]: it takes one JSON-serializable config tree and an
//! optional instance key, and either returns an opaque result or fails.
//! [`ChartSet`] owns the boundary reference — injected once at
//! construction, read-only afterwards — and assembles the tree:
//!
//! ```text
//! {
//!   "charts": [
//!     {"chartId", "chart", "series": [...], "annotations": [...]},
//!     ...
//!   ],
//!   "syncConfig": {"enabled", "crosshair", "timeRange"}
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::annotations::AnnotationLayers;
use crate::errors::Error;
use crate::options::chart::ChartOptions;
use crate::options::{impl_node_setters, ConfigNode};
use crate::series::{PaneError, WireSeries};

/// A render-boundary failure.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// No boundary was wired up; observable only at a render attempt.
    #[error("render boundary is not configured")]
    Unavailable,

    /// The boundary rejected or failed to deliver the call.
    #[error("render boundary call failed: {0}")]
    Transport(String),
}

/// The opaque external renderer.
///
/// Implementations are expected to be cheap to call from any thread; the
/// reference handed to [`ChartSet`] is never mutated after injection.
pub trait RenderBoundary {
    /// Hand a config tree (and optional instance key) to the engine.
    fn render(&self, config: &Value, key: Option<&str>) -> Result<Value, BoundaryError>;
}

/// Cross-chart synchronization flags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Whether charts in the set are synchronized at all.
    pub enabled: bool,
    /// Whether the crosshair position is shared.
    pub crosshair: bool,
    /// Whether the visible time range is shared.
    pub time_range: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            crosshair: true,
            time_range: true,
        }
    }
}

impl ConfigNode for SyncConfig {}

impl_node_setters!(SyncConfig {
    plain enabled: bool => set_enabled;
    plain crosshair: bool => set_crosshair;
    plain time_range: bool => set_time_range;
});

/// One chart: options, series and annotation layers under a stable id.
pub struct Chart {
    id: String,
    /// Chart-level options; mutate freely before serialization.
    pub options: ChartOptions,
    series: Vec<Box<dyn WireSeries>>,
    /// The chart's annotation layers.
    pub annotations: AnnotationLayers,
}

impl Chart {
    /// An empty chart with default options.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: ChartOptions::default(),
            series: Vec::new(),
            annotations: AnnotationLayers::new(),
        }
    }

    /// The chart id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add a series; insertion order is the wire order.
    pub fn add_series(&mut self, series: impl WireSeries + 'static) -> &mut Self {
        self.series.push(Box::new(series));
        self
    }

    /// Number of series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Assemble the chart wire mapping, running every series' deferred
    /// pane check first.
    pub fn to_wire(&self) -> Result<Map<String, Value>, PaneError> {
        for series in &self.series {
            series.validate_pane()?;
        }
        let mut map = Map::new();
        map.insert("chartId".to_string(), Value::from(self.id.clone()));
        map.insert("chart".to_string(), Value::Object(self.options.to_wire()));
        map.insert(
            "series".to_string(),
            Value::Array(
                self.series
                    .iter()
                    .map(|s| Value::Object(s.to_wire()))
                    .collect(),
            ),
        );
        map.insert(
            "annotations".to_string(),
            Value::Array(self.annotations.to_wire()),
        );
        Ok(map)
    }
}

/// The top-level aggregator: charts, sync flags and the injected boundary.
#[derive(Default)]
pub struct ChartSet {
    charts: Vec<Chart>,
    /// Cross-chart synchronization flags.
    pub sync: SyncConfig,
    boundary: Option<Box<dyn RenderBoundary>>,
}

impl ChartSet {
    /// An empty set with no boundary wired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the render boundary. Resolved once; read-only thereafter.
    pub fn with_boundary(mut self, boundary: Box<dyn RenderBoundary>) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Add a chart; insertion order is the wire order.
    pub fn add_chart(&mut self, chart: Chart) -> &mut Self {
        self.charts.push(chart);
        self
    }

    /// The charts, in insertion order.
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    /// Mutable access to a chart by id.
    pub fn chart_mut(&mut self, id: &str) -> Option<&mut Chart> {
        self.charts.iter_mut().find(|chart| chart.id == id)
    }

    /// Assemble the full config tree, running every deferred pane check.
    pub fn build_config(&self) -> Result<Value, PaneError> {
        let mut charts = Vec::with_capacity(self.charts.len());
        for chart in &self.charts {
            charts.push(Value::Object(chart.to_wire()?));
        }
        let mut root = Map::new();
        root.insert("charts".to_string(), Value::Array(charts));
        root.insert("syncConfig".to_string(), Value::Object(self.sync.to_wire()));
        Ok(Value::Object(root))
    }

    /// Build the config tree and hand it to the boundary.
    ///
    /// Fails with [`BoundaryError::Unavailable`] when no boundary was
    /// injected; this is the only point where absence is observable.
    pub fn render(&self, key: Option<&str>) -> Result<Value, Error> {
        let boundary = self
            .boundary
            .as_deref()
            .ok_or(BoundaryError::Unavailable)?;
        let config = self.build_config()?;
        tracing::debug!(charts = self.charts.len(), "handing config tree to render boundary");
        Ok(boundary.render(&config, key)?)
    }
}
