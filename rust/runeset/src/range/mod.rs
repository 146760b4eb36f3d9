//! Position-aware rune layouts.
//!
//! Every layout in this module implements [`RuneRange`]: an immutable, strictly
//! increasing, duplicate-free sequence of runes that supports membership,
//! rank (`pos`) and select (`nth`) queries.
//!
//! - Atomic layouts: [`EmptyRange`], [`OneValue`], [`Interval`], [`PackedUniform`],
//!   [`RecordUniform`], [`RuneList`], [`Bitmap`].
//! - Composites: [`Pair`], [`SortedList`], [`Exception`], and the [`RangeList`]
//!   returned by [`new_range_list`].
//! - [`AnyRange`] is the closed sum of all of the above.
//!
//! Queries never fail: out-of-range inputs yield `false` or [`NO_RUNE`].

use itertools::Itertools;

use crate::{NO_RUNE, Rune, set::RuneSet, source::RangeRunes};

pub mod any;
pub mod bitmap;
pub mod exception;
pub mod interval;
pub mod one_value;
pub mod pair;
pub mod range_list;
pub mod rune_list;
pub mod sorted_list;
pub mod uniform;

pub use any::{AnyRange, RangeKind};
pub use bitmap::Bitmap;
pub use exception::Exception;
pub use interval::Interval;
pub use one_value::OneValue;
pub use pair::Pair;
pub use range_list::{RangeList, new_range_list};
pub use rune_list::{RuneList, SearchKind};
pub use sorted_list::SortedList;
pub use uniform::{PackedUniform, RecordUniform, Uniform6, Uniform8};

/// An ordered, duplicate-free set of runes in `[min(), max()]` with positional
/// queries. Positions start at zero.
pub trait RuneRange: RuneSet {
    /// Human-readable layout name.
    fn type_name(&self) -> &'static str;

    /// Position of `r` within the range, or `-1` if it is not a member.
    fn pos(&self, r: Rune) -> i32;

    /// The `i`-th rune of the range, or `-1` if `i` is out of bounds.
    fn nth(&self, i: i32) -> Rune;

    /// Number of runes in the range.
    fn rune_len(&self) -> i32;

    /// Smallest rune, or `-1` if the range is empty.
    fn min(&self) -> Rune;

    /// Biggest rune, or `-1` if the range is empty.
    fn max(&self) -> Rune;

    #[inline]
    fn is_empty(&self) -> bool {
        self.rune_len() == 0
    }

    /// Iterates over the runes of the range in ascending order.
    fn runes(&self) -> RangeRunes<'_, Self>
    where
        Self: Sized,
    {
        RangeRunes::new(self)
    }
}

/// A range with no runes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyRange;

impl RuneSet for EmptyRange {
    #[inline]
    fn contains(&self, _r: Rune) -> bool {
        false
    }
}

impl RuneRange for EmptyRange {
    fn type_name(&self) -> &'static str {
        "empty"
    }

    #[inline]
    fn pos(&self, _r: Rune) -> i32 {
        -1
    }

    #[inline]
    fn nth(&self, _i: i32) -> Rune {
        NO_RUNE
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        0
    }

    #[inline]
    fn min(&self) -> Rune {
        NO_RUNE
    }

    #[inline]
    fn max(&self) -> Rune {
        NO_RUNE
    }
}

/// Returns the first pair of adjacent ranges that overlap, as indices into
/// `ranges`. The ranges are expected to be sorted by [`RuneRange::min`], see
/// [`sort_ranges`].
pub fn overlap<R: RuneRange>(ranges: &[R]) -> Option<(usize, usize)> {
    ranges
        .iter()
        .enumerate()
        .tuple_windows()
        .find(|((_, prev), (_, next))| next.min() <= prev.max())
        .map(|((i, _), (j, _))| (i, j))
}

/// Sorts `ranges` by their smallest rune.
pub fn sort_ranges<R: RuneRange>(ranges: &mut [R]) {
    ranges.sort_by_key(|r| r.min());
}

/// Shared short-circuit for layouts whose bounds are cheap to compute.
#[inline]
pub(crate) fn out_of_bounds(range: &impl RuneRange, r: Rune) -> bool {
    r < range.min() || r > range.max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range() {
        let empty = EmptyRange;
        assert_eq!(empty.min(), -1);
        assert_eq!(empty.max(), -1);
        assert_eq!(empty.rune_len(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.nth(0), -1);
        assert_eq!(empty.pos(-1), -1);
        for r in [-1, 0, 1, 0x10FFFF] {
            assert!(!empty.contains(r));
        }
        assert_eq!(empty.runes().count(), 0);
    }

    #[test]
    fn test_overlap() {
        let ranges = [
            Interval::dynamic(1, 5).unwrap(),
            Interval::dynamic(6, 9).unwrap(),
            Interval::dynamic(9, 12).unwrap(),
        ];
        assert_eq!(overlap(&ranges), Some((1, 2)));
        assert_eq!(overlap(&ranges[..2]), None);
        assert_eq!(overlap::<Interval>(&[]), None);
    }

    #[test]
    fn test_sort_ranges() {
        let mut ranges = [
            Interval::dynamic(20, 30).unwrap(),
            Interval::dynamic(1, 5).unwrap(),
        ];
        sort_ranges(&mut ranges);
        assert_eq!(ranges[0].min(), 1);
        assert_eq!(ranges[1].min(), 20);
        assert_eq!(overlap(&ranges), None);
    }
}
