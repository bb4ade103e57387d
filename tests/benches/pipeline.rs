extern crate shatter;
extern crate shatter_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use shatter::path::FlattenOptions;
use shatter::svg::ImportOptions;
use shatter::tessellation::Triangulator;
use shatter::{flatten_shape_with_options, slice_polygon, Fragment};
use shatter_tests::*;

const SEGMENTS: [usize; 3] = [4, 16, 64];

fn flatten(c: &mut Criterion) {
    let shapes = [circle_descriptor(), curved_path_descriptor()];
    let mut g = c.benchmark_group("flatten");
    for segments in &SEGMENTS {
        let options = ImportOptions::DEFAULT.with_flatten_options(
            FlattenOptions::DEFAULT
                .with_curve_segments(*segments)
                .with_ellipse_segments(*segments),
        );
        g.bench_with_input(BenchmarkId::new("shapes", segments), &options, |b, options| {
            b.iter(|| {
                for shape in &shapes {
                    std::hint::black_box(flatten_shape_with_options(shape, options).ok());
                }
            })
        });
    }
}

fn slice(c: &mut Criterion) {
    let polygons = sample_polygons();
    let lines = sample_lines();
    c.bench_function("slice sample polygons", |b| {
        b.iter(|| {
            for (_, polygon) in &polygons {
                for &(p0, p1) in &lines {
                    std::hint::black_box(slice_polygon(polygon, p0, p1));
                }
            }
        })
    });
}

fn triangulate(c: &mut Criterion) {
    let polygons = sample_polygons();
    c.bench_function("triangulate sample polygons", |b| {
        let mut triangulator = Triangulator::new();
        b.iter(|| {
            for (_, polygon) in &polygons {
                std::hint::black_box(triangulator.triangulate(polygon).ok());
            }
        })
    });
}

fn slash(c: &mut Criterion) {
    let fragments: Vec<Fragment> = sample_polygons()
        .iter()
        .filter_map(|(_, polygon)| Fragment::new(polygon).ok())
        .collect();
    let lines = sample_lines();
    c.bench_function("slash sample fragments", |b| {
        b.iter(|| {
            for fragment in &fragments {
                for &(p0, p1) in &lines {
                    let pieces = fragment.slash(p0, p1, &Default::default(), || 0.5);
                    std::hint::black_box(pieces.ok());
                }
            }
        })
    });
}

criterion_group!(pipeline, flatten, slice, triangulate, slash);
criterion_main!(pipeline);
