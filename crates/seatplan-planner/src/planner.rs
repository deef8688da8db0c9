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

//! The arrangement planner.
//!
//! A builder-style facade over the allocation engine. Callers supply the
//! roster, the room topology, and optionally the capacity cap, then call
//! [`ArrangementPlanner::generate`]. The only failure mode is a missing
//! collaborator: once roster and topology are present, generation is total.

use seatplan_alloc::allocator::{AllocationOutcome, SeatAllocator};
use seatplan_model::{roster::Roster, topology::RoomTopology};

/// The error type for arrangement planning.
///
/// These are preconditions, not runtime failures: the allocation core
/// itself never errors over its input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningError {
    /// No roster has been supplied yet.
    MissingRoster,
    /// No room topology has been supplied yet.
    MissingTopology,
}

impl std::fmt::Display for PlanningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRoster => write!(f, "No roster supplied: upload a student list first"),
            Self::MissingTopology => {
                write!(f, "No room topology supplied: choose a classroom first")
            }
        }
    }
}

impl std::error::Error for PlanningError {}

/// Collects the collaborators of one generation run and produces the
/// arrangement.
///
/// When no capacity cap is set, the full roster length is used. An explicit
/// cap of zero is honored and yields an all-empty arrangement.
///
/// # Examples
///
/// ```rust
/// # use seatplan_planner::planner::ArrangementPlanner;
/// # use seatplan_model::roster::{RosterLoader, sample_roster_csv};
/// # use seatplan_model::topology::RoomTopology;
/// let roster = RosterLoader::new().from_csv_str(sample_roster_csv()).unwrap();
///
/// let outcome = ArrangementPlanner::new()
///     .with_roster(roster)
///     .with_topology(RoomTopology::Benches { benches: 2, seats_per_bench: 2 })
///     .generate()
///     .unwrap();
///
/// assert_eq!(outcome.arrangement().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArrangementPlanner {
    roster: Option<Roster>,
    topology: Option<RoomTopology>,
    capacity: Option<usize>,
}

impl ArrangementPlanner {
    /// Creates an empty planner.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the student roster.
    #[inline]
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Supplies the room topology.
    #[inline]
    pub fn with_topology(mut self, topology: RoomTopology) -> Self {
        self.topology = Some(topology);
        self
    }

    /// Supplies the capacity cap (`number_of_students`).
    #[inline]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Runs the allocation and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanningError`] if the roster or the topology has not
    /// been supplied.
    pub fn generate(&self) -> Result<AllocationOutcome, PlanningError> {
        let roster = self.roster.as_ref().ok_or(PlanningError::MissingRoster)?;
        let topology = self.topology.as_ref().ok_or(PlanningError::MissingTopology)?;
        let capacity = self.capacity.unwrap_or(roster.len());

        Ok(SeatAllocator::new(roster, capacity).allocate(topology))
    }
}
