use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::api::LineChart;
use linechart_rs::core::{
    CoordinateMapper, DataPoint, DataSet, DrawArea, ScaleConfig, compute_scale,
    project_line_segments,
};
use std::hint::black_box;

fn generated_data(count: usize) -> DataSet {
    DataSet::from_points((0..count).map(|i| {
        let t = i as f64;
        DataPoint::new(t * 60.0, 7.0 + (t * 0.1).sin())
    }))
    .expect("finite generated points")
}

fn bench_compute_scale_10k(c: &mut Criterion) {
    let data = generated_data(10_000);
    let config = ScaleConfig::default();

    c.bench_function("compute_scale_10k", |b| {
        b.iter(|| compute_scale(black_box(&data), black_box(config)).expect("scale"))
    });
}

fn bench_point_round_trip(c: &mut Criterion) {
    let data = generated_data(100);
    let scale = compute_scale(&data, ScaleConfig::default()).expect("scale");
    let mapper = CoordinateMapper::new(scale, DrawArea::new(1920.0, 1080.0)).expect("mapper");

    c.bench_function("point_round_trip", |b| {
        b.iter(|| {
            let px = mapper
                .map_values(black_box(2_345.0), black_box(7.25))
                .expect("to pixel");
            let _ = mapper.pixel_to_values(px).expect("from pixel");
        })
    });
}

fn bench_segment_projection_10k(c: &mut Criterion) {
    let data = generated_data(10_000);
    let scale = compute_scale(&data, ScaleConfig::default()).expect("scale");
    let mapper = CoordinateMapper::new(scale, DrawArea::new(1920.0, 1080.0)).expect("mapper");

    c.bench_function("segment_projection_10k", |b| {
        b.iter(|| {
            project_line_segments(black_box(&data), black_box(&mapper))
                .expect("projection should succeed")
        })
    });
}

fn bench_layout_json_2k(c: &mut Criterion) {
    let chart = LineChart::new(ScaleConfig::default())
        .expect("valid config")
        .with_data(generated_data(2_000));

    c.bench_function("layout_json_2k", |b| {
        b.iter(|| {
            let frame = chart
                .layout(black_box(DrawArea::new(1600.0, 900.0)))
                .expect("layout");
            let _ = frame.to_json_pretty().expect("json");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_scale_10k,
    bench_point_round_trip,
    bench_segment_projection_10k,
    bench_layout_json_2k
);
criterion_main!(benches);
