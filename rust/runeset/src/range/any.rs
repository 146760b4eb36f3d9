//! A closed sum over every range layout.

use crate::{
    Rune,
    range::{
        Bitmap, EmptyRange, Exception, Interval, OneValue, PackedUniform, Pair, RangeList,
        RuneList, RuneRange, SortedList, Uniform6, Uniform8,
    },
    set::RuneSet,
};

/// Discriminant of an [`AnyRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    Empty,
    OneValue,
    Interval,
    PackedUniform,
    Uniform6,
    Uniform8,
    RuneList,
    Bitmap,
    Pair,
    SortedList,
    Exception,
}

/// Any range layout, as returned by the dynamic selectors.
///
/// Composites of `AnyRange` are themselves `AnyRange`s, so layouts nest freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyRange {
    Empty(EmptyRange),
    OneValue(OneValue),
    Interval(Interval),
    PackedUniform(PackedUniform),
    Uniform6(Uniform6),
    Uniform8(Uniform8),
    RuneList(RuneList),
    Bitmap(Bitmap),
    Pair(Box<Pair<AnyRange>>),
    SortedList(SortedList<AnyRange>),
    Exception(Box<Exception<AnyRange, AnyRange>>),
}

impl Default for AnyRange {
    fn default() -> Self {
        AnyRange::Empty(EmptyRange)
    }
}

macro_rules! dispatch {
    ($range:expr, $r:ident => $body:expr) => {
        match $range {
            AnyRange::Empty($r) => $body,
            AnyRange::OneValue($r) => $body,
            AnyRange::Interval($r) => $body,
            AnyRange::PackedUniform($r) => $body,
            AnyRange::Uniform6($r) => $body,
            AnyRange::Uniform8($r) => $body,
            AnyRange::RuneList($r) => $body,
            AnyRange::Bitmap($r) => $body,
            AnyRange::Pair($r) => $body,
            AnyRange::SortedList($r) => $body,
            AnyRange::Exception($r) => $body,
        }
    };
}

impl AnyRange {
    pub fn kind(&self) -> RangeKind {
        match self {
            AnyRange::Empty(_) => RangeKind::Empty,
            AnyRange::OneValue(_) => RangeKind::OneValue,
            AnyRange::Interval(_) => RangeKind::Interval,
            AnyRange::PackedUniform(_) => RangeKind::PackedUniform,
            AnyRange::Uniform6(_) => RangeKind::Uniform6,
            AnyRange::Uniform8(_) => RangeKind::Uniform8,
            AnyRange::RuneList(_) => RangeKind::RuneList,
            AnyRange::Bitmap(_) => RangeKind::Bitmap,
            AnyRange::Pair(_) => RangeKind::Pair,
            AnyRange::SortedList(_) => RangeKind::SortedList,
            AnyRange::Exception(_) => RangeKind::Exception,
        }
    }

    /// Approximate number of heap bytes owned by this range, excluding the
    /// `AnyRange` value itself.
    pub fn heap_size_bytes(&self) -> usize {
        match self {
            AnyRange::Empty(_)
            | AnyRange::OneValue(_)
            | AnyRange::Interval(_)
            | AnyRange::PackedUniform(_)
            | AnyRange::Uniform6(_)
            | AnyRange::Uniform8(_) => 0,
            AnyRange::RuneList(list) => list.heap_size_bytes(),
            AnyRange::Bitmap(bitmap) => bitmap.heap_size_bytes(),
            AnyRange::Pair(pair) => {
                2 * std::mem::size_of::<AnyRange>()
                    + pair.first().heap_size_bytes()
                    + pair.second().heap_size_bytes()
            }
            AnyRange::SortedList(list) => list
                .ranges()
                .iter()
                .map(|r| std::mem::size_of::<AnyRange>() + r.heap_size_bytes())
                .sum(),
            AnyRange::Exception(exception) => {
                std::mem::size_of::<Exception<AnyRange, AnyRange>>()
                    + exception.base().heap_size_bytes()
                    + exception.exclude().heap_size_bytes()
            }
        }
    }
}

impl RuneSet for AnyRange {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        dispatch!(self, range => range.contains(r))
    }
}

impl RuneRange for AnyRange {
    fn type_name(&self) -> &'static str {
        dispatch!(self, range => range.type_name())
    }

    #[inline]
    fn pos(&self, r: Rune) -> i32 {
        dispatch!(self, range => range.pos(r))
    }

    #[inline]
    fn nth(&self, i: i32) -> Rune {
        dispatch!(self, range => range.nth(i))
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        dispatch!(self, range => range.rune_len())
    }

    #[inline]
    fn min(&self) -> Rune {
        dispatch!(self, range => range.min())
    }

    #[inline]
    fn max(&self) -> Rune {
        dispatch!(self, range => range.max())
    }
}

impl From<EmptyRange> for AnyRange {
    fn from(range: EmptyRange) -> Self {
        AnyRange::Empty(range)
    }
}

impl From<OneValue> for AnyRange {
    fn from(range: OneValue) -> Self {
        AnyRange::OneValue(range)
    }
}

impl From<Interval> for AnyRange {
    fn from(range: Interval) -> Self {
        AnyRange::Interval(range)
    }
}

impl From<PackedUniform> for AnyRange {
    fn from(range: PackedUniform) -> Self {
        AnyRange::PackedUniform(range)
    }
}

impl From<Uniform6> for AnyRange {
    fn from(range: Uniform6) -> Self {
        AnyRange::Uniform6(range)
    }
}

impl From<Uniform8> for AnyRange {
    fn from(range: Uniform8) -> Self {
        AnyRange::Uniform8(range)
    }
}

impl From<RuneList> for AnyRange {
    fn from(range: RuneList) -> Self {
        AnyRange::RuneList(range)
    }
}

impl From<Bitmap> for AnyRange {
    fn from(range: Bitmap) -> Self {
        AnyRange::Bitmap(range)
    }
}

impl From<Pair<AnyRange>> for AnyRange {
    fn from(range: Pair<AnyRange>) -> Self {
        AnyRange::Pair(Box::new(range))
    }
}

impl From<SortedList<AnyRange>> for AnyRange {
    fn from(range: SortedList<AnyRange>) -> Self {
        AnyRange::SortedList(range)
    }
}

impl From<Exception<AnyRange, AnyRange>> for AnyRange {
    fn from(range: Exception<AnyRange, AnyRange>) -> Self {
        AnyRange::Exception(Box::new(range))
    }
}

impl From<RangeList<AnyRange>> for AnyRange {
    fn from(list: RangeList<AnyRange>) -> Self {
        match list {
            RangeList::Empty(range) => range.into(),
            RangeList::Single(range) => range,
            RangeList::Pair(pair) => pair.into(),
            RangeList::Sorted(sorted) => sorted.into(),
        }
    }
}
