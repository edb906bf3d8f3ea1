//! Chart data records and the canonical time they share.

pub mod annotation;
pub mod band;
pub mod chart_time;
pub mod histogram;
pub mod line;
pub mod marker;
pub mod ohlc;
pub mod record;
pub mod trend;

pub use annotation::Annotation;
pub use band::BandPoint;
pub use chart_time::{ChartTime, TimeFormatError, TimeValue};
pub use histogram::HistogramPoint;
pub use line::LinePoint;
pub use marker::Marker;
pub use ohlc::OhlcBar;
pub use record::{DataRecord, FromRow, RecordError};
pub use trend::TrendPoint;
