use criterion::{Criterion, criterion_group, criterion_main};
use perf_post_engine::Aggregate;
use std::fmt::Write;
use std::hint::black_box;
use std::io::Cursor;
use std::path::Path;

fn sample_file(rows: usize) -> String {
    let mut body = String::with_capacity(rows * 16);
    for i in 0..rows {
        let _ = writeln!(body, "{} {}.{}", i % 512, i, i % 97);
    }
    body
}

fn benchmark_aggregate(c: &mut Criterion) {
    let body = sample_file(10_000);

    c.bench_function("aggregate_10k_lines", |b| {
        b.iter(|| {
            let mut aggregate = Aggregate::new();
            aggregate
                .extend_from_reader(Cursor::new(black_box(body.as_str())), Path::new("rc1.txt"))
                .unwrap();
            black_box(aggregate);
        })
    });

    let mut aggregate = Aggregate::new();
    aggregate
        .extend_from_reader(Cursor::new(body.as_str()), Path::new("rc1.txt"))
        .unwrap();
    c.bench_function("write_means_512_indices", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            aggregate.write_means(&mut out).unwrap();
            black_box(out);
        })
    });
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
