//! Benchmarks for the scoring and extraction kernels

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terrarisk_algorithms::prelude::*;

const SIZE: usize = 256;

fn bench_scene() -> SceneGrids {
    SceneGrids::new(
        Grid::filled(SIZE, SIZE, 0.1),
        Grid::from_fn(SIZE, SIZE, |r, c| {
            if (r / 16 + c / 16) % 3 == 0 {
                0.6
            } else {
                0.1
            }
        }),
        Grid::from_fn(SIZE, SIZE, |r, c| ((r * 13 + c * 7) % 37) as f64 * 5.0),
        Grid::from_fn(SIZE, SIZE, |r, c| ((r + c) % 200) as f64 * 2.0),
    )
    .unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let scene = bench_scene();
    let params = AssessmentParams::default();
    let issued = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();

    let change = detect_water_change(
        &scene.old_water_index,
        &scene.new_water_index,
        &params.water_change,
    )
    .unwrap();
    let slope = slope_factor(&scene.elevation, &params.slope).unwrap();
    let rainfall = rainfall_factor(&scene.rainfall).unwrap();
    let score = composite_risk(&change, &slope, &rainfall).unwrap();

    c.bench_function("composite_risk_256", |b| {
        b.iter(|| composite_risk(black_box(&change), black_box(&slope), black_box(&rainfall)))
    });

    c.bench_function("extract_regions_256", |b| {
        b.iter(|| extract_regions(black_box(&score), &params.regions))
    });

    c.bench_function("assess_risk_256", |b| {
        b.iter(|| assess_risk(black_box(&scene), 26.0, 92.0, issued, &params))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
