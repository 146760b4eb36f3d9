//! Combining any number of ranges.

use runeset_common::{Result, error::Error};

use crate::{
    Rune,
    range::{EmptyRange, Pair, RuneRange, SortedList, overlap},
    set::RuneSet,
};

/// The composite chosen by [`new_range_list`] for a given number of ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeList<R> {
    Empty(EmptyRange),
    Single(R),
    Pair(Pair<R>),
    Sorted(SortedList<R>),
}

/// Combines sorted, non-overlapping, non-empty `ranges` into one range.
///
/// Zero ranges give an empty range, one range is returned as is, two make a
/// [`Pair`] and more a [`SortedList`]. Fails with an overlap error naming the
/// first two offending ranges.
pub fn new_range_list<R: RuneRange>(ranges: Vec<R>) -> Result<RangeList<R>> {
    if let Some((first, second)) = overlap(&ranges) {
        log::debug!("new_range_list: ranges [{first}] and [{second}] overlap");
        return Err(Error::overlap(first, second));
    }
    let list = if ranges.len() > 2 {
        RangeList::Sorted(SortedList::new(ranges)?)
    } else {
        let mut ranges = ranges.into_iter();
        match (ranges.next(), ranges.next()) {
            (None, _) => RangeList::Empty(EmptyRange),
            (Some(range), None) => RangeList::Single(range),
            (Some(first), Some(second)) => RangeList::Pair(Pair::new(first, second)?),
        }
    };
    log::trace!("new_range_list: {}", list.type_name());
    Ok(list)
}

macro_rules! dispatch {
    ($list:expr, $r:ident => $body:expr) => {
        match $list {
            RangeList::Empty($r) => $body,
            RangeList::Single($r) => $body,
            RangeList::Pair($r) => $body,
            RangeList::Sorted($r) => $body,
        }
    };
}

impl<R: RuneRange> RuneSet for RangeList<R> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        dispatch!(self, range => range.contains(r))
    }
}

impl<R: RuneRange> RuneRange for RangeList<R> {
    fn type_name(&self) -> &'static str {
        dispatch!(self, range => range.type_name())
    }

    fn pos(&self, r: Rune) -> i32 {
        dispatch!(self, range => range.pos(r))
    }

    fn nth(&self, i: i32) -> Rune {
        dispatch!(self, range => range.nth(i))
    }

    fn rune_len(&self) -> i32 {
        dispatch!(self, range => range.rune_len())
    }

    fn min(&self) -> Rune {
        dispatch!(self, range => range.min())
    }

    fn max(&self) -> Rune {
        dispatch!(self, range => range.max())
    }
}
