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
use disks_model::row::DiskRow;
use disks_sort::algorithm::Algorithm;
use disks_sort::monitor::log::LogMonitor;
use std::hint::black_box;

const LIGHT_COUNTS: [usize; 5] = [8, 32, 128, 512, 1024];

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_benchmark");

    for light_count in LIGHT_COUNTS {
        let before = DiskRow::new(light_count);
        group.throughput(Throughput::Elements(before.total_count() as u64));

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), light_count),
                &before,
                |b, before| {
                    b.iter(|| {
                        let sorted = algorithm.sort(black_box(before));
                        if !sorted.after().is_sorted() {
                            panic!("Benchmark configuration error: {} left the row unsorted.", algorithm);
                        }
                        sorted
                    })
                },
            );
        }
    }
    group.finish();
}

/// Measures the overhead of the tracing monitor when no subscriber listens.
fn bench_log_monitor(c: &mut Criterion) {
    let before = DiskRow::new(128);
    let mut group = c.benchmark_group("log_monitor_overhead");

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| {
                let mut monitor = LogMonitor::new(true);
                algorithm.sort_monitored(black_box(&before), &mut monitor)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_log_monitor);
criterion_main!(benches);
