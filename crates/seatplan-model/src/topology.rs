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

//! Room topologies and seat coordinates.
//!
//! A `RoomTopology` describes the physical shape of an exam room as a
//! sequence of *seating units*: benches holding a fixed number of adjacent
//! seats, or the rows of a seminar-hall grid. The allocator fills units in
//! unit-index order and seats in slot order, so the topology is the single
//! source of truth for seat numbering, public position labels, and which
//! year-mixing rule applies within a unit.

use serde::{Deserialize, Serialize};

/// The year-mixing rule applied within one seating unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MixingRule {
    /// Strict alternation: slot `i` targets the `i mod years`-th distinct
    /// year. Used for 2-seat benches, all other bench sizes except 3, and
    /// every grid row (where the slot is the column).
    Alternate,
    /// The 3-seat bench pattern: outer seats target the first distinct
    /// year, the middle seat the second. The two outer seats of a bench
    /// intentionally share a year; bench adjacency is left-middle and
    /// middle-right, not left-right.
    OuterInner,
}

/// The coordinate of one seat inside a room, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatPosition {
    /// A seat on a bench in a classroom-style room.
    Bench {
        /// The 1-based bench number.
        bench: usize,
        /// The 1-based seat number within the bench.
        seat: usize,
    },
    /// A seat in a rows-by-columns seminar hall.
    Grid {
        /// The 1-based row number.
        row: usize,
        /// The 1-based column number.
        column: usize,
    },
}

impl SeatPosition {
    /// Returns the short human-readable position code:
    /// `B{bench}S{seat}` or `R{row}C{column}`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::topology::SeatPosition;
    /// assert_eq!(SeatPosition::Bench { bench: 2, seat: 1 }.label(), "B2S1");
    /// assert_eq!(SeatPosition::Grid { row: 3, column: 4 }.label(), "R3C4");
    /// ```
    pub fn label(&self) -> String {
        match self {
            Self::Bench { bench, seat } => format!("B{bench}S{seat}"),
            Self::Grid { row, column } => format!("R{row}C{column}"),
        }
    }
}

impl std::fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bench { bench, seat } => write!(f, "B{bench}S{seat}"),
            Self::Grid { row, column } => write!(f, "R{row}C{column}"),
        }
    }
}

/// The physical shape of an exam room.
///
/// Both variants describe a sequence of equally sized seating units. Unit
/// and slot indices are 0-based internally; the public coordinates exposed
/// by [`SeatPosition`] are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomTopology {
    /// A classroom-style room: `benches` benches, each holding
    /// `seats_per_bench` adjacent seats.
    Benches {
        /// The number of benches.
        benches: usize,
        /// The number of seats per bench.
        seats_per_bench: usize,
    },
    /// A seminar hall: `rows` rows of `columns` independent seats. Each row
    /// is one seating unit; adjacency is guarded along a row only, not down
    /// a column.
    Grid {
        /// The number of rows.
        rows: usize,
        /// The number of columns.
        columns: usize,
    },
}

impl RoomTopology {
    /// Returns the number of seating units (benches or rows).
    #[inline]
    pub fn unit_count(&self) -> usize {
        match self {
            Self::Benches { benches, .. } => *benches,
            Self::Grid { rows, .. } => *rows,
        }
    }

    /// Returns the number of seats per unit (seats per bench or columns).
    #[inline]
    pub fn seats_per_unit(&self) -> usize {
        match self {
            Self::Benches {
                seats_per_bench, ..
            } => *seats_per_bench,
            Self::Grid { columns, .. } => *columns,
        }
    }

    /// Returns the total number of seats in the room.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seatplan_model::topology::RoomTopology;
    /// let room = RoomTopology::Benches { benches: 5, seats_per_bench: 3 };
    /// assert_eq!(room.total_seats(), 15);
    /// ```
    #[inline]
    pub fn total_seats(&self) -> usize {
        self.unit_count() * self.seats_per_unit()
    }

    /// Returns the year-mixing rule for this room's units.
    ///
    /// Benches of exactly three seats use the outer-inner pattern; every
    /// other unit shape alternates strictly.
    #[inline]
    pub fn mixing_rule(&self) -> MixingRule {
        match self {
            Self::Benches {
                seats_per_bench: 3, ..
            } => MixingRule::OuterInner,
            _ => MixingRule::Alternate,
        }
    }

    /// Returns the seat coordinate for the 0-based `unit` and `slot`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `unit` or `slot` is out of bounds.
    #[inline]
    pub fn position(&self, unit: usize, slot: usize) -> SeatPosition {
        debug_assert!(
            unit < self.unit_count(),
            "called `RoomTopology::position` with unit out of bounds: the unit count is {} but the unit is {}",
            self.unit_count(),
            unit
        );
        debug_assert!(
            slot < self.seats_per_unit(),
            "called `RoomTopology::position` with slot out of bounds: the unit size is {} but the slot is {}",
            self.seats_per_unit(),
            slot
        );

        match self {
            Self::Benches { .. } => SeatPosition::Bench {
                bench: unit + 1,
                seat: slot + 1,
            },
            Self::Grid { .. } => SeatPosition::Grid {
                row: unit + 1,
                column: slot + 1,
            },
        }
    }
}

impl std::fmt::Display for RoomTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benches {
                benches,
                seats_per_bench,
            } => write!(f, "{benches} benches x {seats_per_bench} seats"),
            Self::Grid { rows, columns } => write!(f, "{rows} rows x {columns} columns"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_topology_dimensions() {
        let room = RoomTopology::Benches {
            benches: 4,
            seats_per_bench: 2,
        };
        assert_eq!(room.unit_count(), 4);
        assert_eq!(room.seats_per_unit(), 2);
        assert_eq!(room.total_seats(), 8);
    }

    #[test]
    fn test_grid_topology_dimensions() {
        let hall = RoomTopology::Grid {
            rows: 3,
            columns: 5,
        };
        assert_eq!(hall.unit_count(), 3);
        assert_eq!(hall.seats_per_unit(), 5);
        assert_eq!(hall.total_seats(), 15);
    }

    #[test]
    fn test_zero_unit_topology_has_no_seats() {
        let room = RoomTopology::Benches {
            benches: 0,
            seats_per_bench: 3,
        };
        assert_eq!(room.total_seats(), 0);
    }

    #[test]
    fn test_positions_are_one_based() {
        let room = RoomTopology::Benches {
            benches: 2,
            seats_per_bench: 2,
        };
        assert_eq!(
            room.position(0, 0),
            SeatPosition::Bench { bench: 1, seat: 1 }
        );
        assert_eq!(
            room.position(1, 1),
            SeatPosition::Bench { bench: 2, seat: 2 }
        );

        let hall = RoomTopology::Grid {
            rows: 2,
            columns: 3,
        };
        assert_eq!(
            hall.position(1, 2),
            SeatPosition::Grid { row: 2, column: 3 }
        );
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(SeatPosition::Bench { bench: 1, seat: 2 }.label(), "B1S2");
        assert_eq!(SeatPosition::Grid { row: 4, column: 1 }.label(), "R4C1");
        assert_eq!(
            format!("{}", SeatPosition::Grid { row: 4, column: 1 }),
            "R4C1"
        );
    }

    #[test]
    fn test_mixing_rule_selection() {
        let two = RoomTopology::Benches {
            benches: 1,
            seats_per_bench: 2,
        };
        let three = RoomTopology::Benches {
            benches: 1,
            seats_per_bench: 3,
        };
        let four = RoomTopology::Benches {
            benches: 1,
            seats_per_bench: 4,
        };
        let grid = RoomTopology::Grid {
            rows: 2,
            columns: 3,
        };

        assert_eq!(two.mixing_rule(), MixingRule::Alternate);
        assert_eq!(three.mixing_rule(), MixingRule::OuterInner);
        assert_eq!(four.mixing_rule(), MixingRule::Alternate);
        // A 3-column grid still alternates: the outer-inner pattern is a
        // bench rule only.
        assert_eq!(grid.mixing_rule(), MixingRule::Alternate);
    }
}
