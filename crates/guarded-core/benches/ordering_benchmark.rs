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
use guarded_core::utils::buffer::GuardedBuffer;
use guarded_core::value::Guarded;
use std::hint::black_box;

/// Deterministic pseudo-random sequence (xorshift) so runs are comparable.
fn sample(len: usize) -> Vec<u32> {
    let mut state = 0x9E37_79B9u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for len in [1_000usize, 10_000, 100_000] {
        let raw = sample(len);
        let guarded: Vec<Guarded<u32>> = raw.iter().copied().map(Guarded::new).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("raw_u32", len), &raw, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                v.sort_unstable();
                black_box(v)
            })
        });

        group.bench_with_input(
            BenchmarkId::new("guarded_u32", len),
            &guarded,
            |b, input| {
                b.iter(|| {
                    let mut v = input.clone();
                    v.sort_unstable();
                    black_box(v)
                })
            },
        );
    }

    group.finish();
}

fn bench_buffer_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_walk");

    for len in [1_000usize, 100_000] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("guarded_index", len), |b| {
            let mut buffy = GuardedBuffer::new(Guarded::new(len), Guarded::new(b'?'));
            let end = buffy.len();
            b.iter(|| {
                let mut walker = Guarded::<usize>::zero();
                while walker < end {
                    buffy[walker] = Guarded::new(b'A' + (walker.get() % 25) as u8);
                    *walker.data_mut() += 1;
                }
                black_box(&buffy);
            })
        });

        group.bench_function(BenchmarkId::new("raw_index", len), |b| {
            let mut buffy = vec![b'?'; len];
            b.iter(|| {
                for (i, slot) in buffy.iter_mut().enumerate() {
                    *slot = b'A' + (i % 25) as u8;
                }
                black_box(&buffy);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_buffer_walk);
criterion_main!(benches);
