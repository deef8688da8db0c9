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

//! The generated seating arrangement.
//!
//! A `Seat` is a tagged variant: either occupied by a full student record or
//! explicitly empty. Render and persistence collaborators pattern-match on
//! it instead of null-checking a partially populated occupant. The
//! `SeatingArrangement` is assembled by exactly one allocation run and is
//! immutable afterwards.

use crate::{student::Student, topology::SeatPosition};
use serde::{Deserialize, Serialize};

/// One seat of a generated arrangement: occupied or explicitly empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// A seat holding a student.
    Occupied {
        /// The seat coordinate.
        position: SeatPosition,
        /// The seated student.
        student: Student,
    },
    /// A seat left empty.
    Empty {
        /// The seat coordinate.
        position: SeatPosition,
    },
}

impl Seat {
    /// Returns the seat coordinate.
    #[inline]
    pub fn position(&self) -> SeatPosition {
        match self {
            Self::Occupied { position, .. } | Self::Empty { position } => *position,
        }
    }

    /// Returns the occupant, or `None` for an empty seat.
    #[inline]
    pub fn student(&self) -> Option<&Student> {
        match self {
            Self::Occupied { student, .. } => Some(student),
            Self::Empty { .. } => None,
        }
    }

    /// Returns `true` if the seat holds a student.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }

    /// Returns the human-readable position code of this seat.
    #[inline]
    pub fn label(&self) -> String {
        self.position().label()
    }
}

/// The ordered sequence of all seats generated for one (exam, classroom)
/// pair, together with the capacity cap that bounded generation.
///
/// Seats appear in processing order: unit by unit, slot by slot. The
/// arrangement is immutable after construction; persistence is the job of
/// an external collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingArrangement {
    seats: Vec<Seat>,
    capacity: usize,
}

impl SeatingArrangement {
    /// Constructs an arrangement from the generated seats and the capacity
    /// cap that bounded the run.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if two occupied seats share a roll number.
    pub fn new(seats: Vec<Seat>, capacity: usize) -> Self {
        #[cfg(debug_assertions)]
        {
            let mut rolls: Vec<&str> = seats
                .iter()
                .filter_map(|seat| seat.student().map(Student::roll_number))
                .collect();
            rolls.sort_unstable();
            let unique = rolls.windows(2).all(|pair| pair[0] != pair[1]);
            debug_assert!(
                unique,
                "called `SeatingArrangement::new` with a duplicate occupied roll number"
            );
        }

        Self { seats, capacity }
    }

    /// Returns all seats in processing order.
    #[inline]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the total number of seats (occupied and empty).
    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Returns `true` if the arrangement covers no seats at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Returns the capacity cap (`number_of_students`) that bounded this
    /// generation run.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied seats.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_occupied()).count()
    }

    /// Returns the number of empty seats.
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.len() - self.occupied_count()
    }

    /// Returns an iterator over the seats in processing order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Seat> {
        self.seats.iter()
    }
}

impl<'a> IntoIterator for &'a SeatingArrangement {
    type Item = &'a Seat;
    type IntoIter = std::slice::Iter<'a, Seat>;

    fn into_iter(self) -> Self::IntoIter {
        self.seats.iter()
    }
}

impl std::fmt::Display for SeatingArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seating Arrangement")?;
        writeln!(
            f,
            "   Seats: {} ({} occupied, {} empty)",
            self.len(),
            self.occupied_count(),
            self.empty_count()
        )?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No seats generated)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<10} | {:<12} | {:<24} | {:<4}",
            "Position", "Roll No.", "Name", "Year"
        )?;
        writeln!(f, "   {:-<10}-+-{:-<12}-+-{:-<24}-+-{:-<4}", "", "", "", "")?;
        for seat in &self.seats {
            match seat {
                Seat::Occupied { student, .. } => writeln!(
                    f,
                    "   {:<10} | {:<12} | {:<24} | {:<4}",
                    seat.label(),
                    student.roll_number(),
                    student.name(),
                    student.year()
                )?,
                Seat::Empty { .. } => writeln!(
                    f,
                    "   {:<10} | {:<12} | {:<24} | {:<4}",
                    seat.label(),
                    "-",
                    "(empty)",
                    "-"
                )?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Year;
    use crate::topology::SeatPosition;

    fn student(roll: &str, year: u32) -> Student {
        Student::new(format!("Student {roll}"), roll, Year::new(year), "A")
    }

    fn bench_pos(bench: usize, seat: usize) -> SeatPosition {
        SeatPosition::Bench { bench, seat }
    }

    #[test]
    fn test_seat_accessors() {
        let occupied = Seat::Occupied {
            position: bench_pos(1, 2),
            student: student("r1", 1),
        };
        let empty = Seat::Empty {
            position: bench_pos(2, 1),
        };

        assert!(occupied.is_occupied());
        assert_eq!(occupied.label(), "B1S2");
        assert_eq!(occupied.student().map(Student::roll_number), Some("r1"));

        assert!(!empty.is_occupied());
        assert_eq!(empty.label(), "B2S1");
        assert!(empty.student().is_none());
    }

    #[test]
    fn test_arrangement_counts() {
        let arrangement = SeatingArrangement::new(
            vec![
                Seat::Occupied {
                    position: bench_pos(1, 1),
                    student: student("r1", 1),
                },
                Seat::Empty {
                    position: bench_pos(1, 2),
                },
            ],
            5,
        );

        assert_eq!(arrangement.len(), 2);
        assert_eq!(arrangement.occupied_count(), 1);
        assert_eq!(arrangement.empty_count(), 1);
        assert_eq!(arrangement.capacity(), 5);
        assert!(!arrangement.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate occupied roll number")]
    fn test_duplicate_roll_numbers_are_rejected() {
        let _ = SeatingArrangement::new(
            vec![
                Seat::Occupied {
                    position: bench_pos(1, 1),
                    student: student("r1", 1),
                },
                Seat::Occupied {
                    position: bench_pos(1, 2),
                    student: student("r1", 2),
                },
            ],
            2,
        );
    }

    #[test]
    fn test_display_lists_every_seat() {
        let arrangement = SeatingArrangement::new(
            vec![
                Seat::Occupied {
                    position: bench_pos(1, 1),
                    student: student("r1", 3),
                },
                Seat::Empty {
                    position: bench_pos(1, 2),
                },
            ],
            2,
        );

        let rendered = format!("{arrangement}");
        assert!(rendered.contains("B1S1"));
        assert!(rendered.contains("B1S2"));
        assert!(rendered.contains("r1"));
        assert!(rendered.contains("(empty)"));
    }

    #[test]
    fn test_empty_arrangement_display() {
        let arrangement = SeatingArrangement::new(Vec::new(), 0);
        let rendered = format!("{arrangement}");
        assert!(rendered.contains("(No seats generated)"));
    }
}
