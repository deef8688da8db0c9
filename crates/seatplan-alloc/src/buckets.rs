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

//! The roster partitioner.
//!
//! Groups an ordered sequence of students by academic year. The result is a
//! Structure-of-Arrays layout: an ascending vector of the distinct years
//! present (the rotation order) and, parallel to it, the roster indices of
//! each year's members in source order. Partitioning is total: an empty
//! input yields empty buckets, never an error.

use seatplan_model::student::{Student, StudentIndex, Year};

/// The roster grouped by academic year.
///
/// `years()` is the ascending distinct-year sequence used as the rotation
/// order; `members_of(year)` preserves the source order of the roster
/// within each year.
///
/// # Examples
///
/// ```rust
/// # use seatplan_alloc::buckets::YearBuckets;
/// # use seatplan_model::student::{Student, Year};
/// let students = vec![
///     Student::new("A", "r1", Year::new(2), "A"),
///     Student::new("B", "r2", Year::new(1), "A"),
///     Student::new("C", "r3", Year::new(2), "B"),
/// ];
/// let buckets = YearBuckets::from_students(&students);
/// assert_eq!(buckets.years(), &[Year::new(1), Year::new(2)]);
/// assert_eq!(buckets.members_of(Year::new(2)).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearBuckets {
    /// Distinct years present, ascending. len = num_years.
    years: Vec<Year>,
    /// Roster indices per year, parallel to `years`, source order preserved.
    members: Vec<Vec<StudentIndex>>,
}

impl YearBuckets {
    /// Partitions an ordered slice of students by year.
    pub fn from_students(students: &[Student]) -> Self {
        let mut years: Vec<Year> = students.iter().map(Student::year).collect();
        years.sort_unstable();
        years.dedup();

        let mut members = vec![Vec::new(); years.len()];
        for (index, student) in students.iter().enumerate() {
            // The year is always present: `years` was built from this slice.
            if let Ok(slot) = years.binary_search(&student.year()) {
                members[slot].push(StudentIndex::new(index));
            }
        }

        Self { years, members }
    }

    /// Returns the ascending distinct years, the rotation order.
    #[inline]
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Returns the number of distinct years present.
    #[inline]
    pub fn num_years(&self) -> usize {
        self.years.len()
    }

    /// Returns `true` if no students were partitioned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Returns the bucket slot holding the given year, if present.
    #[inline]
    pub fn position_of(&self, year: Year) -> Option<usize> {
        self.years.binary_search(&year).ok()
    }

    /// Returns the members of the given year in source order, or an empty
    /// slice if the year is absent.
    #[inline]
    pub fn members_of(&self, year: Year) -> &[StudentIndex] {
        match self.position_of(year) {
            Some(slot) => &self.members[slot],
            None => &[],
        }
    }

    /// Returns the members of the bucket at `slot` in source order.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    #[inline]
    pub fn members_at(&self, slot: usize) -> &[StudentIndex] {
        debug_assert!(
            slot < self.num_years(),
            "called `YearBuckets::members_at` with slot out of bounds: the len is {} but the slot is {}",
            self.num_years(),
            slot
        );

        &self.members[slot]
    }
}
