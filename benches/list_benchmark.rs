use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{distributions::Uniform, Rng};
use singly::List;
use std::collections::VecDeque;

fn random_values(size: usize) -> Vec<u32> {
    rand::thread_rng()
        .sample_iter(Uniform::new(0, 16))
        .take(size)
        .collect()
}

pub fn build(criterion: &mut Criterion) {
    // Setup
    let mut group = criterion.benchmark_group("Build");
    let size = 100_000;
    let values = random_values(size);
    // Start benchmark
    group.bench_function("append: singly", |b| {
        b.iter(|| {
            let mut list = List::new();
            for &value in &values {
                list.append(value);
            }
            list
        })
    });
    group.bench_function("prepend: singly", |b| {
        b.iter(|| {
            let mut list = List::new();
            for &value in &values {
                list.prepend(value);
            }
            list
        })
    });
    group.bench_function("push_front: VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for &value in &values {
                deque.push_front(value);
            }
            deque
        })
    });
    group.finish();
}

pub fn delete(criterion: &mut Criterion) {
    // Setup
    let mut group = criterion.benchmark_group("Delete");
    let values = random_values(100_000);
    let list = List::from_slice(&values);
    // Start benchmark
    group.bench_function("delete: singly", |b| {
        b.iter_batched(
            || list.clone(),
            |mut list| {
                list.delete(&0);
                list
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("retain: Vec", |b| {
        b.iter_batched(
            || values.clone(),
            |mut values| {
                values.retain(|&x| x != 0);
                values
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

pub fn middle(criterion: &mut Criterion) {
    let list = List::from_slice(&random_values(100_000));
    criterion.bench_function("middle: singly", |b| b.iter(|| list.middle().is_ok()));
}

criterion_group!(benches, build, delete, middle);
criterion_main!(benches);
