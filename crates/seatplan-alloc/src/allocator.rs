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

//! The seat allocator.
//!
//! One `SeatAllocator` owns the entire mutable state of one allocation run:
//! the capacity-capped roster view, the year buckets built over it, the set
//! of placed roll numbers, and monotone pick cursors. Units are filled in
//! unit-index order and seats in slot order; per slot the allocator first
//! tries the rotation-targeted year bucket and then falls back to the first
//! unplaced student in roster order. When nobody remains the seat is
//! emitted explicitly empty, so the output always covers every declared
//! unit-slot exactly once.
//!
//! The cursors are sound because placement is monotone: a placed student
//! never becomes unplaced within a run, so members skipped by a cursor
//! never need revisiting. This keeps every pick amortized O(1) and the
//! whole run linear in seats plus students.
//!
//! Allocation is total and deterministic: it never fails over its input
//! domain, and identical inputs produce an identical seat sequence. Runs
//! share no state; concurrent arrangements for different rooms each own an
//! independent allocator.

use crate::{buckets::YearBuckets, rotation, stats::AllocationStatistics};
use rustc_hash::FxHashSet;
use seatplan_model::{
    arrangement::{Seat, SeatingArrangement},
    roster::Roster,
    student::{Student, StudentIndex, Year},
    topology::{MixingRule, RoomTopology},
};
use smallvec::SmallVec;

/// The result of one allocation run: the arrangement plus its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    arrangement: SeatingArrangement,
    stats: AllocationStatistics,
}

impl AllocationOutcome {
    /// Returns the generated seating arrangement.
    #[inline]
    pub fn arrangement(&self) -> &SeatingArrangement {
        &self.arrangement
    }

    /// Returns the statistics of the run.
    #[inline]
    pub fn statistics(&self) -> &AllocationStatistics {
        &self.stats
    }

    /// Consumes the outcome, returning the arrangement.
    #[inline]
    pub fn into_arrangement(self) -> SeatingArrangement {
        self.arrangement
    }
}

/// Fills the seats of a room from a capacity-capped roster prefix,
/// interleaving academic years within each seating unit.
///
/// # Examples
///
/// ```rust
/// # use seatplan_alloc::allocator::SeatAllocator;
/// # use seatplan_model::roster::Roster;
/// # use seatplan_model::student::{Student, Year};
/// # use seatplan_model::topology::RoomTopology;
/// let roster = Roster::new(vec![
///     Student::new("A", "r1", Year::new(1), "A"),
///     Student::new("B", "r2", Year::new(2), "A"),
/// ]);
/// let room = RoomTopology::Benches { benches: 1, seats_per_bench: 2 };
///
/// let outcome = SeatAllocator::new(&roster, 2).allocate(&room);
/// assert_eq!(outcome.arrangement().occupied_count(), 2);
/// ```
pub struct SeatAllocator<'a> {
    /// The capacity-capped roster prefix; all picks draw from this view.
    roster: &'a [Student],
    /// Year buckets over the capped prefix, rotation order ascending.
    buckets: YearBuckets,
    /// Roll numbers already seated in this run.
    placed: FxHashSet<&'a str>,
    /// Per-bucket scan positions, parallel to `buckets.years()`.
    bucket_cursors: Vec<usize>,
    /// Scan position of the fallback pass over the capped roster.
    fallback_cursor: usize,
    /// The capacity cap the run was bounded by, recorded in the output.
    capacity: usize,
    stats: AllocationStatistics,
}

impl<'a> SeatAllocator<'a> {
    /// Creates an allocator over the first `capacity` students of the
    /// roster. A capacity beyond the roster length is clamped; a capacity
    /// of zero produces an allocator that only emits empty seats.
    pub fn new(roster: &'a Roster, capacity: usize) -> Self {
        let capped = &roster.students()[..capacity.min(roster.len())];
        let buckets = YearBuckets::from_students(capped);
        let bucket_cursors = vec![0; buckets.num_years()];

        Self {
            roster: capped,
            buckets,
            placed: FxHashSet::with_capacity_and_hasher(capped.len(), Default::default()),
            bucket_cursors,
            fallback_cursor: 0,
            capacity,
            stats: AllocationStatistics::new(),
        }
    }

    /// Runs the allocation, consuming the allocator.
    ///
    /// Emits exactly one [`Seat`] per declared unit-slot of the topology,
    /// in processing order.
    pub fn allocate(mut self, topology: &RoomTopology) -> AllocationOutcome {
        let rule = topology.mixing_rule();
        let mut seats = Vec::with_capacity(topology.total_seats());

        for unit in 0..topology.unit_count() {
            let mut unit_seats: SmallVec<[Seat; 8]> = SmallVec::new();
            for slot in 0..topology.seats_per_unit() {
                let position = topology.position(unit, slot);
                let seat = match self.pick(rule, slot) {
                    Some(index) => Seat::Occupied {
                        position,
                        student: self.roster[index.get()].clone(),
                    },
                    None => {
                        self.stats.on_empty_seat();
                        Seat::Empty { position }
                    }
                };
                unit_seats.push(seat);
            }
            seats.extend(unit_seats);
        }

        debug_assert_eq!(
            seats.len(),
            topology.total_seats(),
            "allocation must emit exactly one seat per declared unit-slot"
        );

        AllocationOutcome {
            arrangement: SeatingArrangement::new(seats, self.capacity),
            stats: self.stats,
        }
    }

    /// The shared placement primitive: targeted pick first, then the
    /// fallback scan, then `None` when nobody remains unplaced.
    fn pick(&mut self, rule: MixingRule, slot: usize) -> Option<StudentIndex> {
        if let Some(target) = rotation::target_year(self.buckets.years(), rule, slot) {
            if let Some(index) = self.pick_from_bucket(target) {
                self.stats.on_targeted_pick();
                return Some(index);
            }
        }

        let picked = self.pick_fallback();
        if picked.is_some() {
            self.stats.on_fallback_pick();
        }
        picked
    }

    /// Picks the first unplaced member of the given year's bucket,
    /// preserving roster order as the tie-break.
    fn pick_from_bucket(&mut self, year: Year) -> Option<StudentIndex> {
        let slot = self.buckets.position_of(year)?;
        loop {
            let cursor = self.bucket_cursors[slot];
            let &index = self.buckets.members_at(slot).get(cursor)?;
            self.bucket_cursors[slot] = cursor + 1;
            if self.mark_placed(index) {
                return Some(index);
            }
        }
    }

    /// Scans the capped roster in source order for the first unplaced
    /// student, regardless of year.
    fn pick_fallback(&mut self) -> Option<StudentIndex> {
        while self.fallback_cursor < self.roster.len() {
            let index = StudentIndex::new(self.fallback_cursor);
            self.fallback_cursor += 1;
            if self.mark_placed(index) {
                return Some(index);
            }
        }
        None
    }

    /// Records the student's roll number as placed. Returns `false` if that
    /// roll number was already seated in this run.
    #[inline]
    fn mark_placed(&mut self, index: StudentIndex) -> bool {
        let roster: &'a [Student] = self.roster;
        self.placed.insert(roster[index.get()].roll_number())
    }
}
