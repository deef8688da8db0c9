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
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seatplan_alloc::allocator::SeatAllocator;
use seatplan_model::roster::Roster;
use seatplan_model::student::{Student, Year};
use seatplan_model::topology::RoomTopology;
use std::hint::black_box;

/// Builds a reproducible synthetic roster with `size` students spread over
/// four academic years in shuffled order.
fn synthetic_roster(size: usize) -> Roster {
    let mut rng = SmallRng::seed_from_u64(0x5EA7);
    let students = (0..size)
        .map(|i| {
            let year = Year::new(rng.random_range(1..=4));
            Student::new(
                format!("Student {i}"),
                format!("R{i:06}"),
                year,
                if i % 2 == 0 { "A" } else { "B" },
            )
        })
        .collect();
    Roster::new(students)
}

fn bench_topology_for(size: usize) -> RoomTopology {
    RoomTopology::Benches {
        benches: size.div_ceil(3),
        seats_per_bench: 3,
    }
}

fn grid_topology_for(size: usize) -> RoomTopology {
    let columns = 10;
    RoomTopology::Grid {
        rows: size.div_ceil(columns),
        columns,
    }
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("seat_allocation");

    for &size in &[30usize, 120, 480, 2000] {
        let roster = synthetic_roster(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("benches", size), &roster, |b, roster| {
            let topology = bench_topology_for(size);
            b.iter(|| {
                let outcome = SeatAllocator::new(black_box(roster), size).allocate(&topology);
                black_box(outcome.arrangement().occupied_count())
            });
        });

        group.bench_with_input(BenchmarkId::new("grid", size), &roster, |b, roster| {
            let topology = grid_topology_for(size);
            b.iter(|| {
                let outcome = SeatAllocator::new(black_box(roster), size).allocate(&topology);
                black_box(outcome.arrangement().occupied_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_allocation);
criterion_main!(benches);
