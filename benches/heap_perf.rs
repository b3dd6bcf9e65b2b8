//! Criterion benchmarks for the core heap workloads
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```
//!
//! Three workloads:
//! - push_pop: N inserts followed by N extractions
//! - decrease_key: N inserts, decrease on every other entry, drain
//! - dijkstra_pattern: interleaved extract/decrease as in shortest-path
//!   relaxation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use fibheap::FibonacciHeap;

fn workload_push_pop(n: i32) {
    let mut heap = FibonacciHeap::new();
    for k in 0..n {
        heap.insert(k);
    }
    while heap.extract_min().is_some() {}
}

fn workload_decrease_key(n: i32) {
    let mut heap = FibonacciHeap::new();
    let mut handles = Vec::with_capacity(n as usize);

    for k in 0..n {
        handles.push(heap.insert(k * 2));
    }
    for (i, &handle) in handles.iter().enumerate().step_by(2) {
        let _ = heap.decrease_key(handle, i as i32 * 2 - 1);
    }
    while heap.extract_min().is_some() {}
}

fn workload_dijkstra_pattern(n: i32) {
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..n).map(|_| heap.insert(i32::MAX)).collect();

    let _ = heap.decrease_key(handles[0], 0);

    let mut settled = 0;
    while let Some(dist) = heap.extract_min() {
        settled += 1;
        // Simulate relaxing 3 neighbors per node.
        for offset in 1..=3 {
            let neighbor = ((settled + offset) % n) as usize;
            let _ = heap.decrease_key(handles[neighbor], dist.saturating_add(offset));
        }
    }
}

fn bench_workloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci_heap");

    for &n in &[1_000i32, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("push_pop", n), &n, |b, &n| {
            b.iter(|| workload_push_pop(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("decrease_key", n), &n, |b, &n| {
            b.iter(|| workload_decrease_key(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("dijkstra_pattern", n), &n, |b, &n| {
            b.iter(|| workload_dijkstra_pattern(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_workloads);
criterion_main!(benches);
