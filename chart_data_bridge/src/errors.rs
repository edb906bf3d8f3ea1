//! The unified error type for the `chart_data_bridge` crate.

use thiserror::Error;

use crate::ingest::IngestError;
use crate::models::chart_time::TimeFormatError;
use crate::models::record::RecordError;
use crate::options::ConfigError;
use crate::render::BoundaryError;
use crate::series::PaneError;

/// Any failure the crate can produce, for callers that want one type.
///
/// Every variant converts from its module's error via `From`, so `?` in
/// caller code collapses them here.
#[derive(Debug, Error)]
pub enum Error {
    /// A time input could not be normalized.
    #[error(transparent)]
    Time(#[from] TimeFormatError),

    /// A record could not be constructed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Tabular ingestion failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// An option setter rejected a value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A series' deferred pane check failed.
    #[error(transparent)]
    Pane(#[from] PaneError),

    /// The render boundary is missing or failed.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}
