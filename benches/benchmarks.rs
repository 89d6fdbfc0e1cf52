use criterion::{black_box, criterion_group, criterion_main, Criterion};
use levelpool::prelude::*;

pub fn route_benchmark(c: &mut Criterion) {
    let table = EsoTable::new(&[
        (0.0, 0.0, 0.0),
        (1.0, 2_000_000.0, 150.0),
        (2.0, 4_000_000.0, 424.3),
        (3.0, 6_000_000.0, 779.4),
        (4.0, 8_000_000.0, 1200.0),
    ])
    .unwrap();
    let points: Vec<Inflow> = (0..10_000)
        .map(|i| Inflow {
            time: i as i64 * 1800,
            inflow: 100.0 + (i % 50) as f64,
        })
        .collect();
    let series = InflowSeries::new(points).unwrap();
    let router = Router::new(table);

    c.bench_function("route_10k", |b| {
        b.iter(|| router.route(black_box(&series)))
    });
}

pub fn curve_benchmark(c: &mut Criterion) {
    let rows: Vec<(f64, f64, f64)> = (0..1_000)
        .map(|i| {
            let z = i as f64 * 0.01;
            (z, 2_000_000.0 * z, 150.0 * z.powf(1.5))
        })
        .collect();
    let table = EsoTable::new(&rows).unwrap();

    c.bench_function("derived_curve_1k", |b| {
        b.iter(|| table.derived(black_box(1800.0)))
    });
}

criterion_group!(benches, route_benchmark, curve_benchmark);
criterion_main!(benches);
