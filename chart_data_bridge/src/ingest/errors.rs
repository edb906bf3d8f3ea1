//! Errors raised while turning tabular frames into records.

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::models::chart_time::TimeFormatError;
use crate::models::record::RecordError;

/// A tabular ingestion failure. All variants abort the whole call; no
/// partial record list is ever returned.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The field mapping omits required fields of the target record type.
    #[error("mapping for {record_type} is missing required fields: {missing:?}")]
    MappingIncomplete {
        /// The record type being ingested.
        record_type: &'static str,
        /// Every required field name absent from the mapping.
        missing: Vec<String>,
    },

    /// A mapped column resolves to neither a realized column nor a
    /// promotable row-key level.
    #[error("column `{column}` not found in frame or row key")]
    ColumnNotFound {
        /// The unresolvable column name.
        column: String,
    },

    /// A row-key level does not line up with the frame's rows.
    #[error("row key level `{column}` has {got} values but the frame has {expected} rows")]
    RowKeyLength {
        /// The column name the level was promoted under.
        column: String,
        /// The frame height.
        expected: usize,
        /// The level length.
        got: usize,
    },

    /// Record construction failed for one row.
    #[error("row {index}: {source}")]
    Row {
        /// Zero-based index of the offending row.
        index: usize,
        /// The underlying record failure.
        source: RecordError,
    },

    /// The time column's dtype carries no usable time representation.
    #[error(transparent)]
    Time(#[from] TimeFormatError),

    /// An error from the polars library.
    #[error("polars operation failed")]
    Polars(#[from] PolarsError),
}
