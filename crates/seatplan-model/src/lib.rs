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

//! # Seatplan Model
//!
//! **The Core Domain Model for the Seatplan Exam Seat Allocator.**
//!
//! This crate defines the fundamental data structures used to represent
//! proctored-exam seating: the student roster, the physical room topology,
//! and the generated seating arrangement. It serves as the data interchange
//! layer between roster input (CSV upload) and the allocation engine
//! (`seatplan_alloc`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **input**, **description**, and **output**:
//!
//! * **`student`**: The immutable `Student` record plus the typed `Year` and
//!   `StudentIndex` values used throughout the workspace.
//! * **`roster`**: The ordered, immutable `Roster` and the `RosterLoader`
//!   that validates CSV input eagerly, before any allocation runs.
//! * **`topology`**: `RoomTopology` describes a room as benches-with-seats
//!   or as a rows-by-columns grid, and knows how its seats are numbered and
//!   labelled.
//! * **`arrangement`**: The `Seat` tagged variant and the immutable
//!   `SeatingArrangement` produced by one allocation run.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: Years and roster positions are distinct types. A
//!    `Year` cannot be confused with a seat number or a roster index.
//! 2. **Fail-Fast Input**: The roster loader validates rows eagerly so the
//!    allocator never encounters a malformed student.
//! 3. **Immutable Outputs**: A `SeatingArrangement` is assembled exactly
//!    once and only queried afterwards; render and persistence collaborators
//!    pattern-match on `Seat` instead of null-checking.

pub mod arrangement;
pub mod roster;
pub mod student;
pub mod topology;
