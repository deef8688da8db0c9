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

//! # Seatplan Planner
//!
//! **The high-level entry point for generating exam seating arrangements.**
//!
//! This crate orchestrates the seatplan workspace: it takes a roster, a
//! room topology, and a capacity cap, and runs the allocation engine to
//! produce a [`seatplan_model::arrangement::SeatingArrangement`]. Missing
//! collaborators (no roster uploaded yet, no room chosen) surface as a
//! `PlanningError` rather than a panic; the allocation itself never fails.
//!
//! The commonly used types of the member crates are re-exported so that
//! most callers only depend on this crate.

pub mod planner;

pub use planner::{ArrangementPlanner, PlanningError};
pub use seatplan_alloc::allocator::{AllocationOutcome, SeatAllocator};
pub use seatplan_alloc::stats::AllocationStatistics;
pub use seatplan_model::arrangement::{Seat, SeatingArrangement};
pub use seatplan_model::roster::{Roster, RosterLoadError, RosterLoader};
pub use seatplan_model::student::{Student, Year};
pub use seatplan_model::topology::{RoomTopology, SeatPosition};
