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

//! Student records and the typed values attached to them.
//!
//! A `Student` is immutable once parsed from input; its `roll_number` is the
//! identity used for de-duplication across an arrangement. `Year` and
//! `StudentIndex` are distinct wrapper types so that an academic year, a
//! seat number, and a roster position can never be swapped accidentally.

use serde::{Deserialize, Serialize};

/// An academic year, 1-based.
///
/// # Examples
///
/// ```rust
/// # use seatplan_model::student::Year;
/// let y = Year::new(3);
/// assert_eq!(y.get(), 3);
/// assert_eq!(format!("{}", y), "3");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Year(u32);

impl Year {
    /// Creates a new `Year`.
    ///
    /// # Panics
    ///
    /// Panics if `year` is zero. Academic years are positive integers.
    #[inline]
    pub const fn new(year: u32) -> Self {
        assert!(
            year > 0,
            "called `Year::new` with a zero year: academic years are 1-based"
        );
        Self(year)
    }

    /// Returns the underlying year value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Year({})", self.0)
    }
}

/// A typed index into a roster.
///
/// Wraps a `usize` position so that roster indices cannot be mixed up with
/// bench, seat, or row numbers. Zero-cost: `#[repr(transparent)]` over
/// `usize`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentIndex(usize);

impl StudentIndex {
    /// Creates a new `StudentIndex` from a `usize` position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` position.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for StudentIndex {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<StudentIndex> for usize {
    #[inline(always)]
    fn from(index: StudentIndex) -> Self {
        index.get()
    }
}

impl std::fmt::Display for StudentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StudentIndex({})", self.0)
    }
}

impl std::fmt::Debug for StudentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StudentIndex({})", self.0)
    }
}

/// A single student as supplied by the roster input.
///
/// Immutable once constructed. The `roll_number` is the unique key: two
/// records with the same roll number denote the same student, and an
/// arrangement never seats the same roll number twice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    name: String,
    roll_number: String,
    year: Year,
    section: String,
}

impl Student {
    /// Constructs a new `Student`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::student::{Student, Year};
    /// let s = Student::new("John Smith", "CS2021001", Year::new(3), "A");
    /// assert_eq!(s.roll_number(), "CS2021001");
    /// assert_eq!(s.year().get(), 3);
    /// ```
    pub fn new(
        name: impl Into<String>,
        roll_number: impl Into<String>,
        year: Year,
        section: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            roll_number: roll_number.into(),
            year,
            section: section.into(),
        }
    }

    /// Returns the student's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student's roll number, the unique identity key.
    #[inline]
    pub fn roll_number(&self) -> &str {
        &self.roll_number
    }

    /// Returns the student's academic year.
    #[inline]
    pub fn year(&self) -> Year {
        self.year
    }

    /// Returns the student's section.
    #[inline]
    pub fn section(&self) -> &str {
        &self.section
    }
}
