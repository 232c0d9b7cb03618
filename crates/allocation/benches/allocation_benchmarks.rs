use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockline_allocation::{allocate, select_batch, Batch, OrderLine, Sku};

fn build_batches(count: usize, sku: Sku) -> Vec<Batch> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            // Latest shipments first so the sort has real work to do.
            let eta = start.checked_add_days(chrono::Days::new((count - i) as u64));
            Batch::new(format!("batch-{i}"), sku, 1_000, eta)
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let sku = Sku::new(1);
    let mut group = c.benchmark_group("allocate");

    for count in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || build_batches(count, sku),
                |mut batches| {
                    let line = OrderLine::new("order-1", sku, 5);
                    black_box(allocate(&line, &mut batches).ok());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_select_batch(c: &mut Criterion) {
    let sku = Sku::new(1);
    let batches = build_batches(1_000, sku);
    let line = OrderLine::new("order-1", sku, 5);

    c.bench_function("select_batch/1000", |b| {
        b.iter(|| black_box(select_batch(black_box(&line), &batches)));
    });
}

criterion_group!(benches, bench_allocate, bench_select_batch);
criterion_main!(benches);
