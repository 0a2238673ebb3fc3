// Compares the built-in strategies against the standard library sort.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sort_strategy::input::random_values;
use sort_strategy::{BubbleSort, QuickSort, SortStrategy};

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_strategies");

    for size in [10, 100, 1000] {
        let data = random_values(size, Some(42));

        group.bench_with_input(BenchmarkId::new("bubble", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                BubbleSort.sort(black_box(&mut v));
                v
            })
        });

        group.bench_with_input(BenchmarkId::new("quick", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                QuickSort.sort(black_box(&mut v));
                v
            })
        });

        group.bench_with_input(BenchmarkId::new("std_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                black_box(&mut v).sort_unstable();
                v
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
