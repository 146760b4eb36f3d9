//! Two ranges combined.

use runeset_common::{Result, error::Error, verify_arg};

use crate::{
    NO_RUNE, Rune,
    range::{RuneRange, out_of_bounds},
    set::RuneSet,
};

/// Exactly two non-empty, sorted, non-overlapping sub-ranges. Cheaper than a
/// [`SortedList`](crate::range::SortedList) for the common two-part case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair<R> {
    ranges: [R; 2],
}

impl<R: RuneRange> Pair<R> {
    /// Fails if either range is empty or `first.max() >= second.min()`.
    pub fn new(first: R, second: R) -> Result<Pair<R>> {
        verify_arg!(first, !first.is_empty());
        verify_arg!(second, !second.is_empty());
        if second.min() <= first.max() {
            return Err(Error::overlap(0, 1));
        }
        let total = first.rune_len() as i64 + second.rune_len() as i64;
        if total > i32::MAX as i64 {
            return Err(Error::capacity_exceeded(
                "pair rune count",
                i32::MAX as usize,
                total as usize,
            ));
        }
        Ok(Pair {
            ranges: [first, second],
        })
    }

    pub fn first(&self) -> &R {
        &self.ranges[0]
    }

    pub fn second(&self) -> &R {
        &self.ranges[1]
    }

    /// Index of the sub-range that may hold `r`, or `None` when out of bounds.
    #[inline]
    fn index_of(&self, r: Rune) -> Option<usize> {
        if out_of_bounds(self, r) {
            None
        } else if r > self.ranges[0].max() {
            Some(1)
        } else {
            Some(0)
        }
    }
}

impl<R: RuneRange> RuneSet for Pair<R> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.index_of(r)
            .is_some_and(|index| self.ranges[index].contains(r))
    }
}

impl<R: RuneRange> RuneRange for Pair<R> {
    fn type_name(&self) -> &'static str {
        "two ranges combined"
    }

    fn pos(&self, r: Rune) -> i32 {
        match self.index_of(r) {
            Some(0) => self.ranges[0].pos(r),
            Some(_) => match self.ranges[1].pos(r) {
                -1 => -1,
                pos => pos + self.ranges[0].rune_len(),
            },
            None => -1,
        }
    }

    fn nth(&self, i: i32) -> Rune {
        let first_len = self.ranges[0].rune_len();
        if i < 0 {
            NO_RUNE
        } else if i < first_len {
            self.ranges[0].nth(i)
        } else {
            self.ranges[1].nth(i - first_len)
        }
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.ranges[0].rune_len() + self.ranges[1].rune_len()
    }

    #[inline]
    fn min(&self) -> Rune {
        self.ranges[0].min()
    }

    #[inline]
    fn max(&self) -> Rune {
        self.ranges[1].max()
    }
}
