//! Tabular frame wrapper: a polars `DataFrame` plus an optional row key.
//!
//! A row key is the frame's label axis — a single level or a composite
//! stack of levels, each with an optional name. Field mappings resolve
//! against realized columns first; when that fails, a key level can be
//! *promoted*: handed out as an ordinary column under the mapped name.

use polars::prelude::{DataFrame, DataType, Series};

use crate::ingest::errors::IngestError;

/// One level of a row key: an optional name plus its values.
#[derive(Debug, Clone)]
pub struct KeyLevel {
    /// Level name; `None` models an unnamed label axis.
    pub name: Option<String>,
    /// The level's values, one per frame row.
    pub values: Series,
}

impl KeyLevel {
    /// A named key level.
    pub fn named(name: impl Into<String>, values: Series) -> Self {
        Self {
            name: Some(name.into()),
            values,
        }
    }

    /// An unnamed key level.
    pub fn unnamed(values: Series) -> Self {
        Self { name: None, values }
    }

    /// Whether this level can stand in for a time column.
    fn is_time_like(&self) -> bool {
        matches!(self.values.dtype(), DataType::Date | DataType::Datetime(_, _))
    }
}

/// A frame's row key: one level or a composite stack of levels.
#[derive(Debug, Clone)]
pub enum RowKey {
    /// A single label axis.
    Single(KeyLevel),
    /// A multi-level label axis.
    Composite(Vec<KeyLevel>),
}

/// A polars `DataFrame` with an optional row key.
#[derive(Debug, Clone)]
pub struct TabularFrame {
    df: DataFrame,
    row_key: Option<RowKey>,
}

impl TabularFrame {
    /// Wrap a frame with no row key.
    pub fn new(df: DataFrame) -> Self {
        Self { df, row_key: None }
    }

    /// Wrap a frame together with its row key.
    pub fn with_row_key(df: DataFrame, row_key: RowKey) -> Self {
        Self {
            df,
            row_key: Some(row_key),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// The underlying frame.
    pub fn df(&self) -> &DataFrame {
        &self.df
    }

    /// Resolve a mapped column name to a values series.
    ///
    /// Realized columns win. Otherwise promotion is attempted, in order:
    /// a single unnamed time-like key, a composite key's first unnamed
    /// time-like level, then any key level whose name equals `column`.
    pub(crate) fn resolve(&self, column: &str) -> Result<Series, IngestError> {
        if let Ok(col) = self.df.column(column) {
            return Ok(col.as_materialized_series().clone());
        }

        let level = self.promotable_level(column).ok_or_else(|| {
            IngestError::ColumnNotFound {
                column: column.to_string(),
            }
        })?;

        if level.values.len() != self.df.height() {
            return Err(IngestError::RowKeyLength {
                column: column.to_string(),
                expected: self.df.height(),
                got: level.values.len(),
            });
        }

        tracing::trace!(column, "promoted row-key level to column");
        Ok(level.values.clone().with_name(column.into()))
    }

    fn promotable_level(&self, column: &str) -> Option<&KeyLevel> {
        match self.row_key.as_ref()? {
            RowKey::Single(level) => {
                if level.name.is_none() && level.is_time_like() {
                    Some(level)
                } else if level.name.as_deref() == Some(column) {
                    Some(level)
                } else {
                    None
                }
            }
            RowKey::Composite(levels) => levels
                .iter()
                .find(|level| level.name.is_none() && level.is_time_like())
                .or_else(|| {
                    levels
                        .iter()
                        .find(|level| level.name.as_deref() == Some(column))
                }),
        }
    }
}

impl From<DataFrame> for TabularFrame {
    fn from(df: DataFrame) -> Self {
        Self::new(df)
    }
}
