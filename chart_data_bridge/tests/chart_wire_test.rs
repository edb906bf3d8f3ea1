#![cfg(test)]
//! End-to-end: records through containers and annotation layers into the
//! full config tree, handed across a stub render boundary.

use chart_data_bridge::ingest::{FieldMapping, TabularFrame};
use chart_data_bridge::models::{Annotation, HistogramPoint, LinePoint, Marker, OhlcBar};
use chart_data_bridge::options::enums::{MarkerPosition, MarkerShape};
use chart_data_bridge::options::price_line::PriceLineOptions;
use chart_data_bridge::render::{BoundaryError, Chart, ChartSet, RenderBoundary};
use chart_data_bridge::series::Series;
use chart_data_bridge::Error;
use polars::df;
use serde_json::{json, Value};

struct EchoBoundary;

impl RenderBoundary for EchoBoundary {
    fn render(&self, config: &Value, key: Option<&str>) -> Result<Value, BoundaryError> {
        Ok(json!({"config": config.clone(), "key": key}))
    }
}

fn candle_chart() -> Chart {
    let frame = TabularFrame::new(
        df!(
            "datetime" => &["2022-01-01", "2022-01-02"],
            "o" => &[10.0, 11.0],
            "h" => &[12.0, 13.0],
            "l" => &[9.0, 10.5],
            "c" => &[11.0, 12.5]
        )
        .unwrap(),
    );
    let mapping = FieldMapping::new()
        .map("time", "datetime")
        .map("open", "o")
        .map("high", "h")
        .map("low", "l")
        .map("close", "c");

    let mut candles = Series::<OhlcBar>::from_frame(&frame, &mapping).unwrap();
    candles
        .add_marker(
            Marker::new("2022-01-02")
                .unwrap()
                .with_position(MarkerPosition::AboveBar)
                .with_shape(MarkerShape::ArrowDown)
                .with_text("exit"),
        )
        .add_price_line(PriceLineOptions::new(11.75));

    let mut chart = Chart::new("price");
    chart.options.set_height(480_u32);
    chart.add_series(candles);
    chart
        .annotations
        .add(Annotation::new("2022-01-01", 10.5).unwrap().with_text("fill"));
    chart
}

#[test]
fn full_tree_reaches_the_boundary_intact() {
    let mut set = ChartSet::new().with_boundary(Box::new(EchoBoundary));
    set.add_chart(candle_chart());
    set.sync.set_enabled(true);

    let result = set.render(Some("page-1")).unwrap();
    assert_eq!(result["key"], json!("page-1"));

    let config = &result["config"];
    let chart = &config["charts"][0];
    assert_eq!(chart["chartId"], json!("price"));
    assert_eq!(chart["chart"]["height"], json!(480));
    assert_eq!(chart["series"][0]["type"], json!("candlestick"));
    assert_eq!(chart["series"][0]["data"][0]["open"], json!(10.0));
    assert_eq!(chart["series"][0]["markers"][0]["text"], json!("exit"));
    assert_eq!(chart["series"][0]["priceLines"][0]["price"], json!(11.75));
    assert_eq!(chart["annotations"][0]["name"], json!("default"));
    assert_eq!(
        chart["annotations"][0]["annotations"][0]["text"],
        json!("fill")
    );
    assert_eq!(config["syncConfig"]["enabled"], json!(true));
    assert_eq!(config["syncConfig"]["timeRange"], json!(true));
}

#[test]
fn two_charts_serialize_in_insertion_order() {
    let mut set = ChartSet::new();
    set.add_chart(candle_chart());

    let mut volume_chart = Chart::new("volume");
    let mut histogram = Series::<HistogramPoint>::new();
    histogram.append(
        HistogramPoint::new("2022-01-01", 1000.0)
            .unwrap()
            .with_color("#26a69a"),
    );
    volume_chart.add_series(histogram);
    set.add_chart(volume_chart);

    let config = set.build_config().unwrap();
    let charts = config["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0]["chartId"], json!("price"));
    assert_eq!(charts[1]["chartId"], json!("volume"));
    assert_eq!(charts[1]["series"][0]["type"], json!("histogram"));
    assert_eq!(
        charts[1]["series"][0]["data"][0]["color"],
        json!("#26a69a")
    );
}

#[test]
fn container_scale_and_pane_land_in_series_options() {
    let mut series = Series::<LinePoint>::new();
    series.options.base_options.set_price_scale_id("right");
    series
        .append(LinePoint::new(0_i64, 1.0).unwrap())
        .set_price_scale_id("left")
        .set_pane_id(1);

    let mut chart = Chart::new("main");
    chart.add_series(series);
    let wire = chart.to_wire().unwrap();
    let options = &wire["series"][0]["options"];
    assert_eq!(options["priceScaleId"], json!("left"));
    assert_eq!(options["paneId"], json!(1));
}

#[test]
fn negative_pane_fails_only_at_assembly() {
    let mut series = Series::<LinePoint>::new();
    series.set_pane_id(-3);

    let mut chart = Chart::new("main");
    chart.add_series(series);

    let mut set = ChartSet::new().with_boundary(Box::new(EchoBoundary));
    set.add_chart(chart);

    match set.render(None) {
        Err(Error::Pane(err)) => assert_eq!(err.0, -3),
        other => panic!("expected a pane error, got {other:?}"),
    }
}

#[test]
fn hide_on_missing_layer_keeps_wire_empty() {
    let mut chart = Chart::new("main");
    chart.annotations.hide("nonexistent");
    let wire = chart.to_wire().unwrap();
    assert_eq!(wire["annotations"], json!([]));
}

#[test]
fn build_config_is_idempotent() {
    let mut set = ChartSet::new();
    set.add_chart(candle_chart());
    assert_eq!(set.build_config().unwrap(), set.build_config().unwrap());
}
