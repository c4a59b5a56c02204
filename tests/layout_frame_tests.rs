use chrono::{DateTime, Duration, TimeZone, Utc};
use linechart_rs::ChartError;
use linechart_rs::api::{AxisLabelFormat, LayoutFrame, LineChart, format_axis_label};
use linechart_rs::core::{DataPoint, DataSet, DrawArea, ScaleConfig};

fn example_chart() -> LineChart {
    let data = DataSet::from_points(vec![
        DataPoint::new(10.4, 10.0),
        DataPoint::new(10.5, 5.0),
        DataPoint::new(50.0, 20.0),
        DataPoint::new(40.0, 25.0),
        DataPoint::new(30.0, 25.0),
        DataPoint::new(50.5, 35.0),
        DataPoint::new(60.0, 25.0),
    ])
    .expect("finite points");
    LineChart::new(ScaleConfig::new(1.0, 0.8))
        .expect("valid config")
        .with_data(data)
}

#[test]
fn layout_contains_one_entry_per_point() {
    let frame = example_chart()
        .layout(DrawArea::new(250.0, 200.0))
        .expect("layout");

    assert_eq!(frame.points.len(), 7);
    assert_eq!(frame.segments.len(), 6);
    assert_eq!(frame.markers.len(), 7);
    assert_eq!(frame.x_ticks.len(), 5);
    assert_eq!(frame.y_ticks.len(), 5);
    assert_eq!(frame.y_label_value, 35.0);

    for (marker, point) in frame.markers.iter().zip(&frame.points) {
        assert_eq!(marker.size, 12.0);
        assert!((marker.center().x - point.x).abs() <= 1e-9);
        assert!((marker.center().y - point.y).abs() <= 1e-9);
    }
    for (segment, pair) in frame.segments.iter().zip(frame.points.windows(2)) {
        assert_eq!((segment.x1, segment.y1), (pair[0].x, pair[0].y));
        assert_eq!((segment.x2, segment.y2), (pair[1].x, pair[1].y));
    }
}

#[test]
fn decimal_tick_labels_use_two_places() {
    let frame = example_chart()
        .layout(DrawArea::new(250.0, 200.0))
        .expect("layout");

    let x_labels: Vec<&str> = frame.x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(x_labels, vec!["10.40", "22.80", "35.20", "47.60", "60.00"]);

    let y_labels: Vec<&str> = frame.y_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(y_labels, vec!["35.00", "27.50", "20.00", "12.50", "5.00"]);

    let y_pixels: Vec<f64> = frame.y_ticks.iter().map(|tick| tick.pixel).collect();
    for (pixel, expected) in y_pixels.iter().zip([0.0, 50.0, 100.0, 150.0, 200.0]) {
        assert!((pixel - expected).abs() <= 1e-9);
    }
}

#[test]
fn time_axis_labels_show_time_of_day() {
    let t0 = Utc.with_ymd_and_hms(2022, 4, 5, 10, 0, 0).unwrap();
    let data: DataSet<DateTime<Utc>> = DataSet::from_points(vec![
        DataPoint::new(t0, 7.0),
        DataPoint::new(t0 + Duration::hours(8), 7.6),
    ])
    .expect("finite points");
    let chart = LineChart::new(ScaleConfig::default())
        .expect("valid config")
        .with_data(data)
        .with_label_formats(AxisLabelFormat::TimeOfDay, AxisLabelFormat::Decimal { precision: 1 });

    let frame = chart.layout(DrawArea::new(300.0, 200.0)).expect("layout");
    let x_labels: Vec<&str> = frame.x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(x_labels, vec!["10:00", "12:00", "14:00", "16:00", "18:00"]);

    // 0.6 is under the 0.8 floor, so the y axis has a single interval.
    let y_labels: Vec<&str> = frame.y_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(y_labels, vec!["7.8", "7.0"]);
}

#[test]
fn empty_chart_still_lays_out_axes() {
    let chart: LineChart = LineChart::new(ScaleConfig::new(5.0, 4.0)).expect("valid config");
    let frame = chart.layout(DrawArea::new(250.0, 200.0)).expect("layout");

    assert!(frame.points.is_empty());
    assert!(frame.segments.is_empty());
    assert_eq!(frame.scale.x_range(), 5.0);
    assert_eq!(frame.scale.y_range(), 4.0);
    assert_eq!(frame.x_ticks.len(), 2);
    assert_eq!(frame.y_ticks.len(), 2);
}

#[test]
fn mutations_are_picked_up_by_next_layout() {
    let mut chart = example_chart();
    let area = DrawArea::new(250.0, 200.0);

    chart.remove_point(0).expect("remove first");
    let frame = chart.layout(area).expect("layout");
    assert_eq!(frame.points.len(), 6);
    assert_eq!(frame.scale.min_x(), 10.5);
    assert_eq!(frame.points[0].x, 0.0);

    let id = chart.add_value(0.0, 40.0).expect("add");
    let frame = chart.layout(area).expect("layout");
    assert_eq!(frame.scale.min_x(), 0.0);
    assert_eq!(frame.scale.max_y(), 40.0);

    assert!(chart.remove_id(id).is_some());
    assert_eq!(chart.data().len(), 6);
}

#[test]
fn single_point_chart_centers_point_and_labels_together() {
    let data = DataSet::from_points(vec![DataPoint::new(3.0, 8.0)]).expect("finite point");
    let chart = LineChart::new(ScaleConfig::default())
        .expect("valid config")
        .with_data(data);

    let frame = chart.layout(DrawArea::new(250.0, 200.0)).expect("layout");
    assert_eq!(frame.points[0].y, 100.0);
    assert_eq!(frame.y_label_value, 8.4);
    assert_eq!(frame.y_ticks[0].pixel, 0.0);
}

#[test]
fn invalid_area_fails_the_pass() {
    let result = example_chart().layout(DrawArea::new(250.0, 0.0));
    assert!(matches!(result, Err(ChartError::InvalidArea { .. })));
}

#[test]
fn invalid_marker_size_is_rejected() {
    assert!(example_chart().with_marker_size(-1.0).is_err());
    let chart = example_chart().with_marker_size(6.0).expect("valid size");
    let frame = chart.layout(DrawArea::new(250.0, 200.0)).expect("layout");
    assert!(frame.markers.iter().all(|marker| marker.size == 6.0));
}

#[test]
fn chart_point_queries_match_layout() {
    let chart = example_chart();
    let area = DrawArea::new(250.0, 200.0);
    let frame = chart.layout(area).expect("layout");

    for (index, pixel) in frame.points.iter().enumerate() {
        assert_eq!(chart.map_index(index, area).expect("by index"), *pixel);
        let point = chart.data().get(index).expect("point");
        assert_eq!(chart.map_point(point, area).expect("by point"), *pixel);
    }
}

#[test]
fn frame_serializes_to_json() {
    let frame = example_chart()
        .layout(DrawArea::new(250.0, 200.0))
        .expect("layout");

    let json = frame.to_json_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["points"].as_array().map(Vec::len), Some(7));
    assert_eq!(value["x_ticks"][0]["label"], "10.40");

    let decoded = LayoutFrame::from_json_str(&json).expect("deserialize");
    assert_eq!(decoded.points.len(), frame.points.len());
    assert_eq!(decoded.y_ticks[2].label, "20.00");

    let err = LayoutFrame::from_json_str("{").expect_err("truncated");
    assert!(matches!(err, ChartError::Serialization(_)));
}

#[test]
fn frame_with_zero_range_scale_fails_to_load() {
    let frame = example_chart()
        .layout(DrawArea::new(250.0, 200.0))
        .expect("layout");
    let mut value = serde_json::to_value(&frame).expect("serialize");
    value["scale"]["x_range"] = serde_json::json!(0.0);
    value["scale"]["x_tick_step"] = serde_json::json!(0.0);

    let err = LayoutFrame::from_json_str(&value.to_string()).expect_err("zero range");
    assert!(matches!(err, ChartError::Serialization(_)));
}

#[test]
fn label_formats_cover_time_and_date() {
    let t0 = Utc.with_ymd_and_hms(2022, 4, 5, 9, 40, 0).unwrap();
    let seconds = t0.timestamp() as f64;

    assert_eq!(format_axis_label(seconds, AxisLabelFormat::TimeOfDay), "09:40");
    assert_eq!(
        format_axis_label(seconds, AxisLabelFormat::DateTime),
        "2022-04-05 09:40"
    );
    assert_eq!(
        format_axis_label(7.456, AxisLabelFormat::Decimal { precision: 1 }),
        "7.5"
    );
    assert_eq!(format_axis_label(f64::NAN, AxisLabelFormat::default()), "nan");
}
