//! Contiguous inclusive ranges of runes.

use runeset_common::{Result, error::Error, verify_arg};

use crate::{
    NO_RUNE, Rune,
    codec::RuneWidth,
    range::{OneValue, RuneRange},
    set::RuneSet,
};

/// All the runes in `[from, to]`, stored as two [`OneValue`] endpoints of the
/// same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    from: OneValue,
    to: OneValue,
}

impl Interval {
    /// Creates an interval whose endpoints are stored with `width` bytes.
    ///
    /// Fails if `from > to`, if either endpoint does not fit `width`, or if the
    /// interval holds more runes than an `i32` can count.
    pub fn new(from: Rune, to: Rune, width: RuneWidth) -> Result<Interval> {
        verify_arg!(from, from <= to);
        if (to as i64 - from as i64) >= i32::MAX as i64 {
            return Err(Error::capacity_exceeded(
                "interval rune count",
                i32::MAX as usize,
                (to as i64 - from as i64 + 1) as usize,
            ));
        }
        Ok(Interval {
            from: OneValue::new(from, width)?,
            to: OneValue::new(to, width)?,
        })
    }

    /// Like [`Interval::new`], using the smallest width that holds both endpoints.
    pub fn dynamic(from: Rune, to: Rune) -> Result<Interval> {
        let width = RuneWidth::smallest(from).max(RuneWidth::smallest(to));
        Self::new(from, to, width)
    }

    pub fn width(&self) -> RuneWidth {
        self.from.width()
    }
}

impl RuneSet for Interval {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        r >= self.from.rune() && r <= self.to.rune()
    }
}

impl RuneRange for Interval {
    fn type_name(&self) -> &'static str {
        "simple range of from-to rune values"
    }

    #[inline]
    fn pos(&self, r: Rune) -> i32 {
        let from = self.from.rune();
        if r >= from && r <= self.to.rune() {
            r - from
        } else {
            -1
        }
    }

    #[inline]
    fn nth(&self, i: i32) -> Rune {
        if i >= 0 && i < self.rune_len() {
            self.from.rune() + i
        } else {
            NO_RUNE
        }
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.to.rune() - self.from.rune() + 1
    }

    #[inline]
    fn min(&self) -> Rune {
        self.from.rune()
    }

    #[inline]
    fn max(&self) -> Rune {
        self.to.rune()
    }
}
