//! Benchmarks for comparator-driven heap operations: bulk insert/drain
//! and the position-based decrease-key path.

use std::cmp::Ordering;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use spantree::Heap;

fn min_first(a: &u64, b: &u64) -> Ordering {
    b.cmp(a)
}

fn by_distance(a: &(usize, u64), b: &(usize, u64)) -> Ordering {
    b.1.cmp(&a.1)
}

fn shuffled_keys(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<u64> = (0..len as u64).collect();
    keys.shuffle(&mut rng);
    keys
}

fn bench_insert_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_insert_drain");
    for &size in &[1_000usize, 10_000, 100_000] {
        let keys = shuffled_keys(size, 0x5EED);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = Heap::with_capacity(keys.len(), min_first);
                for &key in keys {
                    heap.insert(key);
                }
                while let Ok(key) = heap.extract() {
                    black_box(key);
                }
            });
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_decrease_key");
    for &size in &[1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(0xDECAF);
            b.iter_batched(
                || {
                    let mut setup_rng = StdRng::seed_from_u64(0xFEED);
                    let mut heap = Heap::with_capacity(size, by_distance);
                    for node in 0..size {
                        heap.insert((node, setup_rng.gen_range(1_000..1_000_000)));
                    }
                    heap
                },
                |mut heap| {
                    for _ in 0..size / 4 {
                        let target = rng.gen_range(0..size);
                        if let Some(pos) =
                            heap.collection().iter().position(|entry| entry.0 == target)
                        {
                            let (node, distance) = heap.collection()[pos];
                            heap.replace_at(pos, (node, distance / 2));
                        }
                    }
                    heap
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert_drain, bench_decrease_key);
criterion_main!(benches);
