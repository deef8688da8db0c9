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

//! The target-year selection policy.
//!
//! Maps a seat's 0-based slot within a seating unit to the academic year
//! the allocator should try to seat there, given the ascending rotation
//! order of distinct years. Which rule applies is decided by the topology
//! (`RoomTopology::mixing_rule`); this module only evaluates it.

use seatplan_model::{student::Year, topology::MixingRule};

/// The outer-inner slot pattern for 3-seat benches: both outer seats
/// target the first distinct year, the middle seat the second.
const OUTER_INNER_PATTERN: [usize; 3] = [0, 1, 0];

/// Returns the rotation-targeted year for the given unit slot, or `None`
/// when no years are present (empty roster).
///
/// # Examples
///
/// ```rust
/// # use seatplan_alloc::rotation::target_year;
/// # use seatplan_model::{student::Year, topology::MixingRule};
/// let years = [Year::new(1), Year::new(2)];
/// assert_eq!(target_year(&years, MixingRule::Alternate, 0), Some(Year::new(1)));
/// assert_eq!(target_year(&years, MixingRule::Alternate, 1), Some(Year::new(2)));
/// assert_eq!(target_year(&years, MixingRule::OuterInner, 2), Some(Year::new(1)));
/// ```
#[inline]
pub fn target_year(years: &[Year], rule: MixingRule, slot: usize) -> Option<Year> {
    if years.is_empty() {
        return None;
    }

    let index = match rule {
        MixingRule::Alternate => slot % years.len(),
        MixingRule::OuterInner => OUTER_INNER_PATTERN[slot % 3] % years.len(),
    };

    Some(years[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(values: &[u32]) -> Vec<Year> {
        values.iter().map(|&y| Year::new(y)).collect()
    }

    #[test]
    fn test_alternate_cycles_through_years() {
        let ys = years(&[1, 2, 3]);
        let targets: Vec<u32> = (0..6)
            .map(|slot| target_year(&ys, MixingRule::Alternate, slot).unwrap().get())
            .collect();
        assert_eq!(targets, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_outer_inner_pattern() {
        let ys = years(&[1, 2]);
        let targets: Vec<u32> = (0..3)
            .map(|slot| target_year(&ys, MixingRule::OuterInner, slot).unwrap().get())
            .collect();
        // Outer seats share the first year; the middle seat takes the second.
        assert_eq!(targets, vec![1, 2, 1]);
    }

    #[test]
    fn test_single_year_degenerates() {
        let ys = years(&[4]);
        for slot in 0..5 {
            assert_eq!(
                target_year(&ys, MixingRule::Alternate, slot),
                Some(Year::new(4))
            );
            assert_eq!(
                target_year(&ys, MixingRule::OuterInner, slot),
                Some(Year::new(4))
            );
        }
    }

    #[test]
    fn test_empty_years_yield_none() {
        assert_eq!(target_year(&[], MixingRule::Alternate, 0), None);
        assert_eq!(target_year(&[], MixingRule::OuterInner, 1), None);
    }
}
