#![cfg(test)]
use chart_data_bridge::ingest::{ingest, FieldMapping, IngestError, KeyLevel, RowKey, TabularFrame};
use chart_data_bridge::models::{BandPoint, DataRecord, LinePoint, OhlcBar, TrendPoint};
use polars::df;
use polars::prelude::{DataType, NamedFrom, Series};

fn date_series(dates: &[&str]) -> Series {
    Series::new("".into(), dates)
        .cast(&DataType::Date)
        .unwrap()
}

#[test]
fn single_value_frame_ingests_in_order() {
    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01", "2022-01-02"],
            "close" => &[100.0, 105.0]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("value", "close");

    let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].time.0, 1640995200);
    assert_eq!(records[0].value, 100.0);
    assert_eq!(records[1].time.0, 1641081600);
    assert_eq!(records[1].value, 105.0);
}

#[test]
fn row_order_is_preserved_even_when_unsorted() {
    let times: Vec<i64> = vec![300, 100, 200, 0, 500];
    let values: Vec<f64> = vec![3.0, 1.0, 2.0, 0.0, 5.0];
    let frame = TabularFrame::new(df!("t" => &times, "v" => &values).unwrap());
    let mapping = FieldMapping::new().map("time", "t").map("value", "v");

    let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
    let out_times: Vec<i64> = records.iter().map(|r| r.time.0).collect();
    let out_values: Vec<f64> = records.iter().map(|r| r.value).collect();
    assert_eq!(out_times, times);
    assert_eq!(out_values, values);
}

#[test]
fn ohlc_frame_with_volume_ingests() {
    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01", "2022-01-02"],
            "o" => &[10.0, 11.0],
            "h" => &[12.0, 13.0],
            "l" => &[9.0, 10.5],
            "c" => &[11.0, 12.5],
            "vol" => &[1000.0, 1500.0]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("open", "o")
        .map("high", "h")
        .map("low", "l")
        .map("close", "c")
        .map("volume", "vol");

    let bars = ingest::<OhlcBar>(&frame, &mapping).unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].open, 10.0);
    assert_eq!(bars[1].close, 12.5);
    assert_eq!(bars[1].volume, Some(1500.0));
}

#[test]
fn ohlc_frame_without_volume_leaves_it_unset() {
    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01"],
            "o" => &[10.0],
            "h" => &[12.0],
            "l" => &[9.0],
            "c" => &[11.0]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("open", "o")
        .map("high", "h")
        .map("low", "l")
        .map("close", "c");

    let bars = ingest::<OhlcBar>(&frame, &mapping).unwrap();
    assert_eq!(bars[0].volume, None);
    assert!(!bars[0].to_wire().contains_key("volume"));
}

#[test]
fn unnamed_time_like_row_key_feeds_the_time_field() {
    let frame = TabularFrame::with_row_key(
        df!("close" => &[100.0, 105.0]).unwrap(),
        RowKey::Single(KeyLevel::unnamed(date_series(&[
            "2022-01-01",
            "2022-01-02",
        ]))),
    );
    let mapping = FieldMapping::new()
        .map("time", "time")
        .map("value", "close");

    let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
    assert_eq!(records[0].time.0, 1640995200);
    assert_eq!(records[1].time.0, 1641081600);
}

#[test]
fn composite_row_key_level_feeds_the_time_field() {
    let frame = TabularFrame::with_row_key(
        df!("close" => &[100.0, 105.0]).unwrap(),
        RowKey::Composite(vec![
            KeyLevel::named("symbol", Series::new("".into(), &["AAPL", "AAPL"])),
            KeyLevel::unnamed(date_series(&["2022-01-01", "2022-01-02"])),
        ]),
    );
    let mapping = FieldMapping::new()
        .map("time", "time")
        .map("value", "close");

    let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].time.0, 1640995200);
}

#[test]
fn named_row_key_level_resolves_by_name() {
    let frame = TabularFrame::with_row_key(
        df!("close" => &[100.0]).unwrap(),
        RowKey::Single(KeyLevel::named("stamp", date_series(&["2022-01-01"]))),
    );
    let mapping = FieldMapping::new()
        .map("time", "stamp")
        .map("value", "close");

    let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
    assert_eq!(records[0].time.0, 1640995200);
}

#[test]
fn band_and_trend_frames_ingest() {
    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01", "2022-01-02"],
            "u" => &[105.0, 106.0],
            "m" => &[100.0, 101.0],
            "l" => &[95.0, 96.0]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("upper", "u")
        .map("middle", "m")
        .map("lower", "l");
    let bands = ingest::<BandPoint>(&frame, &mapping).unwrap();
    assert_eq!(bands[1].middle, 101.0);

    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01", "2022-01-02"],
            "dir" => &[1_i64, -1],
            "up" => &[Some(99.0), None],
            "down" => &[None, Some(101.0)]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("direction", "dir")
        .map("up_line", "up")
        .map("down_line", "down");
    let trends = ingest::<TrendPoint>(&frame, &mapping).unwrap();
    assert_eq!(trends[0].direction, 1);
    assert_eq!(trends[0].up_line, Some(99.0));
    assert_eq!(trends[0].down_line, None);
    assert_eq!(trends[1].direction, -1);
    assert_eq!(trends[1].down_line, Some(101.0));
}

#[test]
fn whole_call_fails_without_partial_results_on_bad_row() {
    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01", "not a date", "2022-01-03"],
            "close" => &[1.0, 2.0, 3.0]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("value", "close");

    match ingest::<LinePoint>(&frame, &mapping) {
        Err(IngestError::Row { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected a row error, got {other:?}"),
    }
}

#[test]
fn datetime_column_converts_through_its_time_unit() {
    let micros = Series::new(
        "stamp".into(),
        &[1640995200_000_000_i64, 1641081600_000_000],
    )
    .cast(&DataType::Datetime(
        polars::prelude::TimeUnit::Microseconds,
        None,
    ))
    .unwrap();
    let frame = TabularFrame::new(
        df!("close" => &[1.0, 2.0])
            .unwrap()
            .hstack(&[micros.into()])
            .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "stamp")
        .map("value", "close");

    let records = ingest::<LinePoint>(&frame, &mapping).unwrap();
    assert_eq!(records[0].time.0, 1640995200);
    assert_eq!(records[1].time.0, 1641081600);
}
