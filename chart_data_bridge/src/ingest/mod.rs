//! Tabular ingestion: polars frames in, record sequences out.
//!
//! [`ingest`] validates a [`FieldMapping`] against the target record type's
//! required fields, resolves every mapped column (promoting row-key levels
//! where needed, see [`frame`]), converts columns once up front, then walks
//! rows in frame order building one record per row. Row order is preserved
//! exactly — downstream consumers rely on it. An empty frame yields an
//! empty vector.

use indexmap::IndexMap;
use polars::prelude::{DataType, Series, TimeUnit};

use crate::models::chart_time::{ChartTime, TimeFormatError};
use crate::models::record::{FromRow, RecordError};

pub mod errors;
pub mod frame;

pub use errors::IngestError;
pub use frame::{KeyLevel, RowKey, TabularFrame};

const SECS_PER_DAY: i64 = 86_400;

/// Mapping from canonical record field names to frame column names.
///
/// Every required field of the target record type must be present as a
/// key; optional fields may be mapped or left out.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    entries: IndexMap<String, String>,
}

impl FieldMapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one field-to-column entry, returning the mapping for chaining.
    pub fn map(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.entries.insert(field.into(), column.into());
        self
    }

    /// Whether `field` has an entry.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// The column mapped to `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, column)| (field.as_str(), column.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(field, column)| (field.into(), column.into()))
                .collect(),
        }
    }
}

/// A column converted once for row iteration.
#[derive(Debug)]
enum ColumnValues {
    /// Canonical epoch seconds, already normalized.
    Time(Vec<Option<i64>>),
    /// Numeric payload values; NaN passes through untouched.
    Numeric(Vec<Option<f64>>),
    /// Text payload values (e.g. per-point colors).
    Text(Vec<Option<String>>),
}

/// One row of resolved columns, handed to [`FromRow::from_row`].
#[derive(Debug)]
pub struct RowView<'a> {
    index: usize,
    record_type: &'static str,
    columns: &'a IndexMap<String, ColumnValues>,
}

impl RowView<'_> {
    /// Zero-based row index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The row's canonical time; missing or null raises `MissingField`.
    pub fn time(&self) -> Result<ChartTime, RecordError> {
        match self.columns.get("time") {
            Some(ColumnValues::Time(values)) => values
                .get(self.index)
                .copied()
                .flatten()
                .map(ChartTime)
                .ok_or(RecordError::MissingField {
                    record_type: self.record_type,
                    field: "time",
                }),
            _ => Err(RecordError::MissingField {
                record_type: self.record_type,
                field: "time",
            }),
        }
    }

    /// A required numeric field; a missing column or null cell raises
    /// `MissingField` naming the field and record type.
    pub fn required_f64(&self, field: &'static str) -> Result<f64, RecordError> {
        self.optional_f64(field).ok_or(RecordError::MissingField {
            record_type: self.record_type,
            field,
        })
    }

    /// An optional numeric field; absence yields `None`.
    pub fn optional_f64(&self, field: &str) -> Option<f64> {
        match self.columns.get(field)? {
            ColumnValues::Numeric(values) => values.get(self.index).copied().flatten(),
            ColumnValues::Time(values) => values
                .get(self.index)
                .copied()
                .flatten()
                .map(|secs| secs as f64),
            ColumnValues::Text(_) => None,
        }
    }

    /// An optional text field; absence yields `None`.
    pub fn optional_text(&self, field: &str) -> Option<String> {
        match self.columns.get(field)? {
            ColumnValues::Text(values) => values.get(self.index).cloned().flatten(),
            _ => None,
        }
    }
}

/// Ingest a tabular frame into a record sequence, in frame row order.
pub fn ingest<R: FromRow>(
    frame: &TabularFrame,
    mapping: &FieldMapping,
) -> Result<Vec<R>, IngestError> {
    let missing: Vec<String> = R::REQUIRED_FIELDS
        .iter()
        .filter(|field| !mapping.contains(field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MappingIncomplete {
            record_type: R::RECORD_TYPE,
            missing,
        });
    }

    let mut columns: IndexMap<String, ColumnValues> = IndexMap::new();
    for (field, column) in mapping.iter() {
        let known = R::REQUIRED_FIELDS.contains(&field) || R::OPTIONAL_FIELDS.contains(&field);
        if !known {
            tracing::debug!(
                field,
                record_type = R::RECORD_TYPE,
                "mapped field does not belong to the record type; ignored"
            );
            continue;
        }
        let series = frame.resolve(column)?;
        let values = if field == "time" {
            ColumnValues::Time(time_column(&series)?)
        } else if matches!(series.dtype(), DataType::String) {
            ColumnValues::Text(text_column(&series)?)
        } else {
            ColumnValues::Numeric(numeric_column(&series)?)
        };
        columns.insert(field.to_string(), values);
    }

    let height = frame.height();
    let mut records = Vec::with_capacity(height);
    for index in 0..height {
        let row = RowView {
            index,
            record_type: R::RECORD_TYPE,
            columns: &columns,
        };
        let record = R::from_row(&row).map_err(|source| IngestError::Row { index, source })?;
        records.push(record);
    }

    tracing::debug!(
        rows = height,
        record_type = R::RECORD_TYPE,
        "ingested tabular frame"
    );
    Ok(records)
}

/// Convert a resolved time column to canonical epoch seconds per row.
fn time_column(series: &Series) -> Result<Vec<Option<i64>>, IngestError> {
    match series.dtype() {
        DataType::String => {
            let ca = series.str()?;
            let mut out = Vec::with_capacity(ca.len());
            for (index, text) in ca.into_iter().enumerate() {
                match text {
                    None => out.push(None),
                    Some(text) => {
                        let normalized = ChartTime::normalize(text).map_err(|source| {
                            IngestError::Row {
                                index,
                                source: RecordError::Time(source),
                            }
                        })?;
                        out.push(Some(normalized.0));
                    }
                }
            }
            Ok(out)
        }
        DataType::Date => {
            let casted = series.cast(&DataType::Int64)?;
            let ca = casted.i64()?;
            Ok(ca
                .into_iter()
                .map(|days| days.map(|days| days * SECS_PER_DAY))
                .collect())
        }
        DataType::Datetime(unit, _) => {
            let divisor = match unit {
                TimeUnit::Nanoseconds => 1_000_000_000,
                TimeUnit::Microseconds => 1_000_000,
                TimeUnit::Milliseconds => 1_000,
            };
            let casted = series.cast(&DataType::Int64)?;
            let ca = casted.i64()?;
            Ok(ca
                .into_iter()
                .map(|raw| raw.map(|raw| raw / divisor))
                .collect())
        }
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => {
            let casted = series.cast(&DataType::Int64)?;
            let ca = casted.i64()?;
            Ok(ca.into_iter().collect())
        }
        DataType::Float32 | DataType::Float64 => {
            let casted = series.cast(&DataType::Float64)?;
            let ca = casted.f64()?;
            let mut out = Vec::with_capacity(ca.len());
            for (index, value) in ca.into_iter().enumerate() {
                match value {
                    None => out.push(None),
                    Some(value) if value.is_finite() => out.push(Some(value.trunc() as i64)),
                    Some(value) => {
                        return Err(IngestError::Row {
                            index,
                            source: RecordError::Time(TimeFormatError::NonFinite { value }),
                        });
                    }
                }
            }
            Ok(out)
        }
        other => Err(IngestError::Time(TimeFormatError::UnsupportedType {
            type_name: format!("{other:?}"),
        })),
    }
}

/// Convert a numeric payload column; NaN cells survive as NaN.
fn numeric_column(series: &Series) -> Result<Vec<Option<f64>>, IngestError> {
    let casted = series.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.into_iter().collect())
}

/// Convert a text payload column.
fn text_column(series: &Series) -> Result<Vec<Option<String>>, IngestError> {
    let ca = series.str()?;
    Ok(ca.into_iter().map(|text| text.map(String::from)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::line::LinePoint;
    use crate::models::ohlc::OhlcBar;
    use polars::df;

    #[test]
    fn mapping_completeness_lists_every_missing_field() {
        let frame = TabularFrame::new(df!("datetime" => &["2022-01-01"]).unwrap());
        let mapping = FieldMapping::new().map("time", "datetime");
        let err = ingest::<OhlcBar>(&frame, &mapping).unwrap_err();
        match err {
            IngestError::MappingIncomplete { record_type, missing } => {
                assert_eq!(record_type, "OhlcBar");
                assert_eq!(missing, vec!["open", "high", "low", "close"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unmapped_column_is_reported_by_name() {
        let frame = TabularFrame::new(df!("datetime" => &["2022-01-01"]).unwrap());
        let mapping = FieldMapping::new()
            .map("time", "datetime")
            .map("value", "close");
        let err = ingest::<LinePoint>(&frame, &mapping).unwrap_err();
        match err {
            IngestError::ColumnNotFound { column } => assert_eq!(column, "close"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_frame_yields_empty_record_list() {
        let frame = TabularFrame::new(
            df!("datetime" => Vec::<&str>::new(), "close" => Vec::<f64>::new()).unwrap(),
        );
        let mapping = FieldMapping::new()
            .map("time", "datetime")
            .map("value", "close");
        let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn null_required_cell_fails_with_row_index() {
        let frame = TabularFrame::new(
            df!(
                "datetime" => &["2022-01-01", "2022-01-02"],
                "close" => &[Some(100.0), None]
            )
            .unwrap(),
        );
        let mapping = FieldMapping::new()
            .map("time", "datetime")
            .map("value", "close");
        let err = ingest::<LinePoint>(&frame, &mapping).unwrap_err();
        match err {
            IngestError::Row { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(
                    source,
                    RecordError::MissingField { record_type: "LinePoint", field: "value" }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_time_text_fails_with_row_index() {
        let frame = TabularFrame::new(
            df!(
                "datetime" => &["2022-01-01", "yesterday-ish"],
                "close" => &[1.0, 2.0]
            )
            .unwrap(),
        );
        let mapping = FieldMapping::new()
            .map("time", "datetime")
            .map("value", "close");
        let err = ingest::<LinePoint>(&frame, &mapping).unwrap_err();
        match err {
            IngestError::Row { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(source, RecordError::Time(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn integer_epoch_and_float_epoch_columns_convert() {
        let frame = TabularFrame::new(
            df!(
                "t" => &[1640995200_i64, 1641081600],
                "close" => &[1.0, 2.0]
            )
            .unwrap(),
        );
        let mapping = FieldMapping::new().map("time", "t").map("value", "close");
        let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
        assert_eq!(records[0].time.0, 1640995200);
        assert_eq!(records[1].time.0, 1641081600);

        let frame = TabularFrame::new(
            df!(
                "t" => &[1640995200.9_f64],
                "close" => &[1.0]
            )
            .unwrap(),
        );
        let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
        assert_eq!(records[0].time.0, 1640995200);
    }

    #[test]
    fn text_column_feeds_optional_color_field() {
        let frame = TabularFrame::new(
            df!(
                "datetime" => &["2022-01-01", "2022-01-02"],
                "close" => &[1.0, 2.0],
                "bar_color" => &[Some("#26a69a"), None]
            )
            .unwrap(),
        );
        let mapping = FieldMapping::new()
            .map("time", "datetime")
            .map("value", "close")
            .map("color", "bar_color");
        let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
        assert_eq!(records[0].color.as_deref(), Some("#26a69a"));
        assert_eq!(records[1].color, None);
    }

    #[test]
    fn nan_payload_cells_survive_to_the_record() {
        let frame = TabularFrame::new(
            df!(
                "datetime" => &["2022-01-01"],
                "close" => &[f64::NAN]
            )
            .unwrap(),
        );
        let mapping = FieldMapping::new()
            .map("time", "datetime")
            .map("value", "close");
        let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
        assert!(records[0].value.is_nan());
    }
}
