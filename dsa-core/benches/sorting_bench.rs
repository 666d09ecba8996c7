mod utils;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dsa_core::SortAlgorithm;
use std::hint::black_box;

fn benchmark_random_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting/random");

    for size in [utils::DatasetSize::Small, utils::DatasetSize::Medium] {
        let input = utils::random_values(size);
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size.label()),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |mut values| {
                            algorithm.sort(&mut values);
                            black_box(values)
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn benchmark_presorted_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting/presorted");

    // Insertion sort is linear here while bubble sort still does every pass
    let input: Vec<i32> = (0..utils::DatasetSize::Medium.value_count() as i32).collect();
    for algorithm in SortAlgorithm::ALL {
        group.bench_with_input(
            BenchmarkId::new(algorithm.name(), "medium"),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut values| {
                        algorithm.sort(&mut values);
                        black_box(values)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_merge_rotation_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting/merge_worst_case");

    for size in [utils::DatasetSize::Small, utils::DatasetSize::Medium] {
        // Descending input makes every merge rotate each right element across the left run
        let input: Vec<i32> = (0..size.value_count() as i32).rev().collect();
        group.bench_with_input(
            BenchmarkId::new("merge", size.label()),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut values| {
                        dsa_core::merge_sort(&mut values);
                        black_box(values)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_random_input,
    benchmark_presorted_input,
    benchmark_merge_rotation_worst_case
);
criterion_main!(benches);
