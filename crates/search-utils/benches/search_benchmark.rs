// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use search_utils::prelude::*;
use std::collections::VecDeque;
use std::hint::black_box;

const SIZES: [usize; 4] = [16, 1_024, 65_536, 1_048_576];
const QUERIES: usize = 1_024;

/// Builds a sorted vector with runs of duplicates plus a query set where
/// roughly half of the targets are absent.
fn build_input(len: usize, rng: &mut StdRng) -> (Vec<u64>, Vec<u64>) {
    let mut data: Vec<u64> = (0..len).map(|_| rng.gen_range(0..len as u64)).collect();
    data.sort_unstable();
    let queries = (0..QUERIES)
        .map(|_| rng.gen_range(0..2 * len as u64))
        .collect();
    (data, queries)
}

fn bench_operations(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("search_operations");

    for len in SIZES {
        let (data, queries) = build_input(len, &mut rng);
        group.throughput(Throughput::Elements(QUERIES as u64));

        group.bench_with_input(BenchmarkId::new("binary_search_index", len), &len, |b, _| {
            b.iter(|| {
                for q in &queries {
                    black_box(binary_search_index(black_box(&data), q));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("lower_bound_index", len), &len, |b, _| {
            b.iter(|| {
                for q in &queries {
                    black_box(lower_bound_index(black_box(&data), q));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("upper_bound_index", len), &len, |b, _| {
            b.iter(|| {
                for q in &queries {
                    black_box(upper_bound_index(black_box(&data), q));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std_partition_point", len), &len, |b, _| {
            b.iter(|| {
                for q in &queries {
                    black_box(black_box(&data).partition_point(|x| x < q));
                }
            })
        });
    }

    group.finish();
}

fn bench_sequences(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let len = 65_536;
    let (data, queries) = build_input(len, &mut rng);
    let ring: VecDeque<u64> = data.iter().copied().collect();

    let mut group = c.benchmark_group("sequence_kinds");
    group.throughput(Throughput::Elements(QUERIES as u64));

    group.bench_function("vec", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(contains(black_box(&data), q));
            }
        })
    });

    group.bench_function("vec_deque", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(contains(black_box(&ring), q));
            }
        })
    });

    group.bench_function("vec_with_statistics", |b| {
        let mut monitor = StatisticsMonitor::new();
        b.iter(|| {
            for q in &queries {
                black_box(contains_monitored(black_box(&data), q, &mut monitor));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_operations, bench_sequences);
criterion_main!(benches);
