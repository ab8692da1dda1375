use benchmarks::data::synthetic_line;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orthoreg::baseline::ordinary_least_squares;
use orthoreg::segments::perpendicular_segments;
use orthoreg::LineFitter;

const SIZES: [usize; 4] = [10, 50, 500, 5000];

fn bench_orthogonal_fit(c: &mut Criterion) {
    let fitter = LineFitter::default();
    for &n in SIZES.iter() {
        let dataset = synthetic_line(0.6, 0.0, n, (0.0, 100.0), 20.0, 42).unwrap();
        c.bench_with_input(BenchmarkId::new("orthogonal_fit", n), &dataset, |b, ds| {
            b.iter(|| black_box(fitter.fit(black_box(ds)).unwrap()));
        });
    }
}

fn bench_ordinary_fit(c: &mut Criterion) {
    for &n in SIZES.iter() {
        let dataset = synthetic_line(0.6, 0.0, n, (0.0, 100.0), 20.0, 42).unwrap();
        c.bench_with_input(BenchmarkId::new("ordinary_fit", n), &dataset, |b, ds| {
            b.iter(|| black_box(ordinary_least_squares(black_box(ds)).unwrap()));
        });
    }
}

fn bench_segments(c: &mut Criterion) {
    for &n in SIZES.iter() {
        let dataset = synthetic_line(0.6, 0.0, n, (0.0, 100.0), 20.0, 42).unwrap();
        let model = LineFitter::default().fit(&dataset).unwrap().model;
        c.bench_with_input(BenchmarkId::new("segments", n), &dataset, |b, ds| {
            b.iter(|| black_box(perpendicular_segments(&model, black_box(ds)).unwrap()));
        });
    }
}

criterion_group!(benches, bench_orthogonal_fit, bench_ordinary_fit, bench_segments);
criterion_main!(benches);
