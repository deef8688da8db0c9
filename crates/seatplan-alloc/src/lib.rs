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

//! # Seatplan Allocation Engine
//!
//! **The year-interleaving seat allocator.**
//!
//! Given a roster partitioned into year buckets and a room topology, this
//! crate produces a deterministic seating arrangement that avoids seating
//! same-year students next to each other within a seating unit, falling
//! back to any remaining student when the targeted year runs dry.
//!
//! ## Architecture
//!
//! * **`buckets`**: The roster partitioner. Groups students by academic
//!   year, preserving source order within each year, and exposes the
//!   ascending distinct-year rotation order.
//! * **`rotation`**: The target-year selection policy: strict alternation
//!   by slot, or the outer-inner pattern for 3-seat benches.
//! * **`allocator`**: The `SeatAllocator` itself: one run owns the
//!   capacity-capped roster view, the year buckets, the placed-roll-number
//!   set, and monotone pick cursors, and emits exactly one `Seat` per
//!   declared unit-slot.
//! * **`stats`**: Aggregate counters for one allocation run.
//!
//! ## Guarantees
//!
//! 1. **Total**: allocation never fails; surplus seats stay empty and
//!    surplus students stay unseated.
//! 2. **Unique**: no roll number occupies two seats.
//! 3. **Deterministic**: identical inputs produce an identical seat
//!    sequence, run after run.
//! 4. **Covering**: the output holds exactly `unit_count * seats_per_unit`
//!    seats, occupied or empty.

pub mod allocator;
pub mod buckets;
pub mod rotation;
pub mod stats;
