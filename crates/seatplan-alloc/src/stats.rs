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

//! Statistics reporting for allocation runs.
//!
//! A lightweight container tracking how one allocation run filled the room:
//! how many seats were filled by the rotation-targeted pick, how many by
//! the fallback scan, and how many were left empty. Updates use saturating
//! arithmetic and inline hooks so the fill loop pays no measurable cost;
//! the result can be rendered as a block report for tooling and logs.

/// Aggregate counters for one allocation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AllocationStatistics {
    /// Seats filled by a rotation-targeted pick.
    pub targeted_picks: u64,

    /// Seats filled by the fallback scan after the targeted year was
    /// exhausted.
    pub fallback_picks: u64,

    /// Seats left empty because no unplaced student remained.
    pub empty_seats: u64,
}

impl AllocationStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a seat is filled by the rotation-targeted pick.
    #[inline]
    pub fn on_targeted_pick(&mut self) {
        self.targeted_picks = self.targeted_picks.saturating_add(1);
    }

    /// Called when a seat is filled by the fallback scan.
    #[inline]
    pub fn on_fallback_pick(&mut self) {
        self.fallback_picks = self.fallback_picks.saturating_add(1);
    }

    /// Called when a seat is left empty.
    #[inline]
    pub fn on_empty_seat(&mut self) {
        self.empty_seats = self.empty_seats.saturating_add(1);
    }

    /// Returns the number of occupied seats.
    #[inline]
    pub fn occupied_seats(&self) -> u64 {
        self.targeted_picks.saturating_add(self.fallback_picks)
    }

    /// Returns the total number of seats emitted by the run.
    #[inline]
    pub fn total_seats(&self) -> u64 {
        self.occupied_seats().saturating_add(self.empty_seats)
    }
}

impl std::fmt::Display for AllocationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seat Allocation Statistics:")?;
        writeln!(f, "   Total Seats:      {}", self.total_seats())?;
        writeln!(f, "   Occupied Seats:   {}", self.occupied_seats())?;
        writeln!(f, "   Targeted Picks:   {}", self.targeted_picks)?;
        writeln!(f, "   Fallback Picks:   {}", self.fallback_picks)?;
        writeln!(f, "   Empty Seats:      {}", self.empty_seats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooks_accumulate() {
        let mut stats = AllocationStatistics::new();
        stats.on_targeted_pick();
        stats.on_targeted_pick();
        stats.on_fallback_pick();
        stats.on_empty_seat();

        assert_eq!(stats.targeted_picks, 2);
        assert_eq!(stats.fallback_picks, 1);
        assert_eq!(stats.empty_seats, 1);
        assert_eq!(stats.occupied_seats(), 3);
        assert_eq!(stats.total_seats(), 4);
    }

    #[test]
    fn test_saturation_does_not_wrap() {
        let mut stats = AllocationStatistics {
            targeted_picks: u64::MAX,
            ..Default::default()
        };
        stats.on_targeted_pick();
        assert_eq!(stats.targeted_picks, u64::MAX);
        assert_eq!(stats.occupied_seats(), u64::MAX);
    }

    #[test]
    fn test_display_report() {
        let mut stats = AllocationStatistics::new();
        stats.on_targeted_pick();
        stats.on_empty_seat();

        let rendered = format!("{stats}");
        assert!(rendered.contains("Total Seats:      2"));
        assert!(rendered.contains("Targeted Picks:   1"));
        assert!(rendered.contains("Empty Seats:      1"));
    }
}
