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

//! Roster input for the exam seat allocator.
//!
//! This module turns comma-separated roster files into a validated `Roster`,
//! mapping names, roll numbers, academic years, and sections into the
//! immutable records consumed by the allocation engine.
//!
//! The `RosterLoader` emphasizes clarity and robustness. The first non-blank
//! line is treated as the header; the `name`, `rollnumber`, `year`, and
//! `section` columns are matched case-insensitively and may appear in any
//! order, with a positional fallback for files that omit a header name.
//! Years must be positive integers and roll numbers must be unique, so the
//! allocator downstream never has to revalidate its input. Errors point
//! directly at the offending line.
//!
//! The loader accepts any `BufRead`, file path, or string slice, making it
//! convenient to integrate with tests, tooling, and upload handlers.

use crate::student::{Student, StudentIndex, Year};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// The error type for the roster loading process.
#[derive(Debug)]
pub enum RosterLoadError {
    /// An I/O error occurred while reading the input.
    Io(std::io::Error),
    /// The input contained no lines at all (not even a header).
    EmptyInput,
    /// A data row had fewer fields than the loader needs.
    MissingFields {
        /// The 1-based line number of the offending row.
        line: usize,
    },
    /// A year field could not be parsed as a positive integer.
    InvalidYear {
        /// The 1-based line number of the offending row.
        line: usize,
        /// The field content that failed to parse.
        token: String,
    },
    /// Two rows carried the same roll number.
    DuplicateRollNumber {
        /// The 1-based line number of the second occurrence.
        line: usize,
        /// The duplicated roll number.
        roll_number: String,
    },
}

impl std::fmt::Display for RosterLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptyInput => write!(f, "Roster input is empty (missing header line)"),
            Self::MissingFields { line } => {
                write!(
                    f,
                    "Line {line}: expected at least 4 comma-separated fields (name, roll number, year, section)"
                )
            }
            Self::InvalidYear { line, token } => {
                write!(
                    f,
                    "Line {line}: could not parse '{token}' as a positive academic year"
                )
            }
            Self::DuplicateRollNumber { line, roll_number } => {
                write!(f, "Line {line}: duplicate roll number '{roll_number}'")
            }
        }
    }
}

impl std::error::Error for RosterLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// An ordered, immutable sequence of students.
///
/// The order is the source order of the roster input and is significant:
/// the allocator uses it both as the tie-break within a year bucket and as
/// the scan order for fallback placement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Constructs a roster from an ordered list of students.
    #[inline]
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Returns the number of students in the roster.
    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns `true` if the roster holds no students.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns all students in source order.
    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns the student at the given roster position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn student(&self, index: StudentIndex) -> &Student {
        debug_assert!(
            index.get() < self.len(),
            "called `Roster::student` with index out of bounds: the len is {} but the index is {}",
            self.len(),
            index.get()
        );

        &self.students[index.get()]
    }

    /// Returns an iterator over the students in source order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }
}

impl From<Vec<Student>> for Roster {
    #[inline]
    fn from(students: Vec<Student>) -> Self {
        Self::new(students)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

/// Loads rosters from comma-separated text.
///
/// # Examples
///
/// ```rust
/// # use seatplan_model::roster::RosterLoader;
/// let csv = "Name,RollNumber,Year,Section\nJohn Smith,CS2021001,3,A\n";
/// let roster = RosterLoader::new().from_csv_str(csv).unwrap();
/// assert_eq!(roster.len(), 1);
/// assert_eq!(roster.students()[0].year().get(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RosterLoader;

/// Header names recognized by the loader, with their positional fallbacks.
const COLUMNS: [(&str, usize); 4] = [
    ("name", 0),
    ("rollnumber", 1),
    ("year", 2),
    ("section", 3),
];

impl RosterLoader {
    /// Creates a new `RosterLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads a roster from a file path.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Roster, RosterLoadError> {
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }

    /// Loads a roster from a string slice.
    pub fn from_csv_str(&self, input: &str) -> Result<Roster, RosterLoadError> {
        self.from_reader(input.as_bytes())
    }

    /// Loads a roster from any buffered reader.
    ///
    /// The first non-blank line is the header. Fields are trimmed, blank
    /// lines are skipped, and every data row must supply at least four
    /// fields.
    pub fn from_reader<R: BufRead>(&self, reader: R) -> Result<Roster, RosterLoadError> {
        let mut columns: Option<[usize; 4]> = None;
        let mut students = Vec::new();
        let mut seen_rolls: HashSet<String> = HashSet::new();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();

            let Some(columns) = columns else {
                columns = Some(Self::resolve_columns(&fields));
                continue;
            };

            if fields.len() < 4 {
                return Err(RosterLoadError::MissingFields { line: line_number });
            }

            // A resolved column can still point past the end of a short row
            // when the header carried more columns than the data line.
            let err_missing = || RosterLoadError::MissingFields { line: line_number };
            let name = *fields.get(columns[0]).ok_or_else(err_missing)?;
            let roll_number = *fields.get(columns[1]).ok_or_else(err_missing)?;
            let year_token = *fields.get(columns[2]).ok_or_else(err_missing)?;
            let section = *fields.get(columns[3]).ok_or_else(err_missing)?;

            let year: u32 = match year_token.parse() {
                Ok(y) if y > 0 => y,
                _ => {
                    return Err(RosterLoadError::InvalidYear {
                        line: line_number,
                        token: year_token.to_string(),
                    });
                }
            };

            if !seen_rolls.insert(roll_number.to_string()) {
                return Err(RosterLoadError::DuplicateRollNumber {
                    line: line_number,
                    roll_number: roll_number.to_string(),
                });
            }

            students.push(Student::new(name, roll_number, Year::new(year), section));
        }

        if columns.is_none() {
            return Err(RosterLoadError::EmptyInput);
        }

        Ok(Roster::new(students))
    }

    /// Maps each recognized column name to its position in the header,
    /// falling back to the conventional position when the name is absent.
    fn resolve_columns(header: &[&str]) -> [usize; 4] {
        let lowered: Vec<String> = header.iter().map(|h| h.to_ascii_lowercase()).collect();
        let mut resolved = [0usize; 4];
        for (slot, (column_name, fallback)) in COLUMNS.iter().enumerate() {
            resolved[slot] = lowered
                .iter()
                .position(|h| h == column_name)
                .unwrap_or(*fallback);
        }
        resolved
    }
}

/// Returns the sample roster CSV offered to users as a template.
pub fn sample_roster_csv() -> &'static str {
    "Name,RollNumber,Year,Section\n\
     John Smith,CS2021001,3,A\n\
     Alice Johnson,CS2022001,2,B\n\
     Bob Wilson,CS2023001,1,A\n\
     Carol Davis,CS2021002,3,B\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_roster() {
        let roster = RosterLoader::new()
            .from_csv_str(sample_roster_csv())
            .unwrap();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.students()[0].name(), "John Smith");
        assert_eq!(roster.students()[0].roll_number(), "CS2021001");
        assert_eq!(roster.students()[0].year(), Year::new(3));
        assert_eq!(roster.students()[3].section(), "B");
    }

    #[test]
    fn test_header_columns_in_any_order() {
        let csv = "Year,Section,Name,RollNumber\n2,A,Jane Doe,EE2022004\n";
        let roster = RosterLoader::new().from_csv_str(csv).unwrap();

        assert_eq!(roster.len(), 1);
        let s = &roster.students()[0];
        assert_eq!(s.name(), "Jane Doe");
        assert_eq!(s.roll_number(), "EE2022004");
        assert_eq!(s.year(), Year::new(2));
        assert_eq!(s.section(), "A");
    }

    #[test]
    fn test_unrecognized_header_uses_positional_fallback() {
        let csv = "a,b,c,d\nJane Doe,EE2022004,2,A\n";
        let roster = RosterLoader::new().from_csv_str(csv).unwrap();

        let s = &roster.students()[0];
        assert_eq!(s.name(), "Jane Doe");
        assert_eq!(s.year(), Year::new(2));
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_tolerated() {
        let csv = "Name,RollNumber,Year,Section\n\n  John Smith , CS2021001 , 3 , A \n\n";
        let roster = RosterLoader::new().from_csv_str(csv).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].name(), "John Smith");
        assert_eq!(roster.students()[0].section(), "A");
    }

    #[test]
    fn test_header_only_is_an_empty_roster() {
        let roster = RosterLoader::new()
            .from_csv_str("Name,RollNumber,Year,Section\n")
            .unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = RosterLoader::new().from_csv_str("").unwrap_err();
        assert!(matches!(err, RosterLoadError::EmptyInput));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let csv = "Name,RollNumber,Year,Section\nJohn Smith,CS2021001,3\n";
        let err = RosterLoader::new().from_csv_str(csv).unwrap_err();
        assert!(matches!(err, RosterLoadError::MissingFields { line: 2 }));
    }

    #[test]
    fn test_invalid_year_is_rejected() {
        let csv = "Name,RollNumber,Year,Section\nJohn Smith,CS2021001,three,A\n";
        let err = RosterLoader::new().from_csv_str(csv).unwrap_err();
        match err {
            RosterLoadError::InvalidYear { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_year_is_rejected() {
        let csv = "Name,RollNumber,Year,Section\nJohn Smith,CS2021001,0,A\n";
        let err = RosterLoader::new().from_csv_str(csv).unwrap_err();
        assert!(matches!(err, RosterLoadError::InvalidYear { .. }));
    }

    #[test]
    fn test_duplicate_roll_number_is_rejected() {
        let csv = "Name,RollNumber,Year,Section\n\
                   John Smith,CS2021001,3,A\n\
                   Jane Doe,CS2021001,2,B\n";
        let err = RosterLoader::new().from_csv_str(csv).unwrap_err();
        match err {
            RosterLoadError::DuplicateRollNumber { line, roll_number } => {
                assert_eq!(line, 3);
                assert_eq!(roll_number, "CS2021001");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_roster_preserves_source_order() {
        let csv = "Name,RollNumber,Year,Section\n\
                   B,r2,2,A\n\
                   A,r1,1,A\n\
                   C,r3,1,B\n";
        let roster = RosterLoader::new().from_csv_str(csv).unwrap();
        let rolls: Vec<&str> = roster.iter().map(|s| s.roll_number()).collect();
        assert_eq!(rolls, vec!["r2", "r1", "r3"]);
    }

    #[test]
    fn test_roster_indexing() {
        let roster = Roster::new(vec![
            Student::new("A", "r1", Year::new(1), "A"),
            Student::new("B", "r2", Year::new(2), "A"),
        ]);
        assert_eq!(roster.student(StudentIndex::new(1)).roll_number(), "r2");
    }
}
