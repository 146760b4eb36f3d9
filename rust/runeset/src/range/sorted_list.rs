//! Many ranges combined, searched by binary search on their bounds.

use runeset_common::{Result, error::Error};

use crate::{
    NO_RUNE, Rune,
    range::{RuneRange, out_of_bounds, overlap},
    set::RuneSet,
};

/// Minimum number of sub-ranges held by a [`SortedList`].
pub const MIN_SORTED_LIST_LEN: usize = 3;

/// Three or more non-empty, sorted, pairwise non-overlapping sub-ranges.
///
/// `contains` binary-searches the sub-range bounds. `pos` and `nth` are best
/// effort: they accumulate the lengths of preceding sub-ranges linearly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedList<R> {
    ranges: Box<[R]>,
    rune_len: i32,
}

impl<R: RuneRange> SortedList<R> {
    /// Fails if fewer than [`MIN_SORTED_LIST_LEN`] ranges are given, if any of
    /// them is empty, or if two adjacent ranges overlap.
    pub fn new(ranges: Vec<R>) -> Result<SortedList<R>> {
        if ranges.len() < MIN_SORTED_LIST_LEN {
            return Err(Error::invalid_arg(
                "ranges",
                format!(
                    "at least {MIN_SORTED_LIST_LEN} ranges required, got {}",
                    ranges.len()
                ),
            ));
        }
        if let Some(index) = ranges.iter().position(|r| r.is_empty()) {
            return Err(Error::invalid_arg(
                "ranges",
                format!("range [{index}] is empty"),
            ));
        }
        if let Some((first, second)) = overlap(&ranges) {
            return Err(Error::overlap(first, second));
        }
        let total: i64 = ranges.iter().map(|r| r.rune_len() as i64).sum();
        if total > i32::MAX as i64 {
            return Err(Error::capacity_exceeded(
                "sorted list rune count",
                i32::MAX as usize,
                total as usize,
            ));
        }
        Ok(SortedList {
            ranges: ranges.into_boxed_slice(),
            rune_len: total as i32,
        })
    }

    pub fn ranges(&self) -> &[R] {
        &self.ranges
    }

    /// Index of the sub-range whose bounds enclose `r`.
    #[inline]
    fn index_of(&self, r: Rune) -> Option<usize> {
        if out_of_bounds(self, r) {
            return None;
        }
        self.index_of_slow(r)
    }

    fn index_of_slow(&self, r: Rune) -> Option<usize> {
        let (mut low, mut high) = (0usize, self.ranges.len() - 1);
        while low <= high {
            let mid = low + (high - low) / 2;
            let range = &self.ranges[mid];
            if r < range.min() {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            } else if range.max() < r {
                low = mid + 1;
            } else {
                return Some(mid);
            }
        }
        None
    }
}

impl<R: RuneRange> RuneSet for SortedList<R> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.index_of(r)
            .is_some_and(|index| self.ranges[index].contains(r))
    }
}

impl<R: RuneRange> RuneRange for SortedList<R> {
    fn type_name(&self) -> &'static str {
        "several ranges combined, using binary search"
    }

    fn pos(&self, r: Rune) -> i32 {
        let Some(index) = self.index_of(r) else {
            return -1;
        };
        match self.ranges[index].pos(r) {
            -1 => -1,
            pos => {
                pos + self.ranges[..index]
                    .iter()
                    .map(|r| r.rune_len())
                    .sum::<i32>()
            }
        }
    }

    fn nth(&self, i: i32) -> Rune {
        if i < 0 {
            return NO_RUNE;
        }
        let mut i = i;
        for range in self.ranges.iter() {
            let len = range.rune_len();
            if i < len {
                return range.nth(i);
            }
            i -= len;
        }
        NO_RUNE
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.rune_len
    }

    #[inline]
    fn min(&self) -> Rune {
        self.ranges[0].min()
    }

    #[inline]
    fn max(&self) -> Rune {
        self.ranges[self.ranges.len() - 1].max()
    }
}
