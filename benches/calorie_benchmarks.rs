use criterion::{black_box, criterion_group, criterion_main, Criterion};
use steptrack::duration::parse_duration;
use steptrack::{day_action_info, training_info};

/// Benchmarks for the per-record path: parsing, calculation and formatting

fn bench_duration_parsing(c: &mut Criterion) {
    c.bench_function("parse_duration 2h45m10.5s", |b| {
        b.iter(|| parse_duration(black_box("2h45m10.5s")))
    });
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reports");

    group.bench_function("day_action_info", |b| {
        b.iter(|| day_action_info(black_box("6000,1h"), black_box(75.0), black_box(1.8)))
    });
    group.bench_function("training_info", |b| {
        b.iter(|| training_info(black_box("6000,Ходьба,1h"), black_box(75.0), black_box(1.8)))
    });

    group.finish();
}

criterion_group!(benches, bench_duration_parsing, bench_reports);
criterion_main!(benches);
