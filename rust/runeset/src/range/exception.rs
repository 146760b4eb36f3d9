//! A base range minus an interior excluded range.

use runeset_common::{Result, error::Error};

use crate::{
    NO_RUNE, Rune,
    range::{RuneRange, out_of_bounds},
    set::RuneSet,
};

/// The runes of `base` that are not in `exclude`.
///
/// `exclude` must be non-empty and lie strictly inside `base`: its bounds are
/// members of `base` and differ from `base.min()`/`base.max()`. Only the bounds
/// are verified; every other rune of `exclude` must also belong to `base`.
///
/// When the excluded runes are contiguous within `base` (the usual case), `pos`
/// and `nth` are a constant number of calls into `base`/`exclude`. Otherwise,
/// base runes that fall between the bounds of `exclude` but are kept cost an
/// extra search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exception<M, E> {
    base: M,
    exclude: E,
    /// Position of `exclude.min()` within `base`.
    exclude_start: i32,
    /// Position of `exclude.max()` within `base`.
    exclude_end: i32,
}

impl<M: RuneRange, E: RuneRange> Exception<M, E> {
    pub fn new(base: M, exclude: E) -> Result<Exception<M, E>> {
        if exclude.is_empty() {
            return Err(Error::not_interior("exclusion is empty"));
        }
        let (lo, hi) = (exclude.min(), exclude.max());
        if lo <= base.min() || hi >= base.max() {
            return Err(Error::not_interior(format!(
                "exclusion [{lo}, {hi}] touches or exceeds base bounds [{}, {}]",
                base.min(),
                base.max()
            )));
        }
        let (exclude_start, exclude_end) = (base.pos(lo), base.pos(hi));
        if exclude_start < 0 || exclude_end < 0 {
            return Err(Error::not_interior(format!(
                "exclusion bounds {lo} and {hi} must be members of the base range"
            )));
        }
        if exclude.rune_len() > exclude_end - exclude_start + 1 {
            return Err(Error::not_interior(format!(
                "exclusion holds {} runes but its bounds enclose only {} base runes",
                exclude.rune_len(),
                exclude_end - exclude_start + 1
            )));
        }
        Ok(Exception {
            base,
            exclude,
            exclude_start,
            exclude_end,
        })
    }

    pub fn base(&self) -> &M {
        &self.base
    }

    pub fn exclude(&self) -> &E {
        &self.exclude
    }

    /// Base runes kept between the bounds of `exclude`.
    #[inline]
    fn kept_inside(&self) -> i32 {
        self.exclude_end - self.exclude_start + 1 - self.exclude.rune_len()
    }

    /// Number of excluded runes smaller than `r`, for `r` inside the exclusion
    /// bounds.
    fn excluded_before(&self, r: Rune) -> i32 {
        let (mut low, mut high) = (0, self.exclude.rune_len());
        while low < high {
            let mid = low + (high - low) / 2;
            if self.exclude.nth(mid) < r {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}

impl<M: RuneRange, E: RuneRange> RuneSet for Exception<M, E> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.base.contains(r) && !self.exclude.contains(r)
    }
}

impl<M: RuneRange, E: RuneRange> RuneRange for Exception<M, E> {
    fn type_name(&self) -> &'static str {
        "range with an excluded sub-range"
    }

    fn pos(&self, r: Rune) -> i32 {
        if out_of_bounds(self, r) {
            return -1;
        }
        if r < self.exclude.min() {
            return self.base.pos(r);
        }
        if r > self.exclude.max() {
            return match self.base.pos(r) {
                -1 => -1,
                pos => pos - self.exclude.rune_len(),
            };
        }
        if self.kept_inside() == 0 || self.exclude.contains(r) {
            return -1;
        }
        match self.base.pos(r) {
            -1 => -1,
            pos => pos - self.excluded_before(r),
        }
    }

    fn nth(&self, i: i32) -> Rune {
        if i < 0 || i >= self.rune_len() {
            return NO_RUNE;
        }
        if i < self.exclude_start {
            return self.base.nth(i);
        }
        let kept_inside = self.kept_inside();
        if i >= self.exclude_start + kept_inside {
            return self.base.nth(i + self.exclude.rune_len());
        }
        let mut skip = i - self.exclude_start;
        for j in self.exclude_start..=self.exclude_end {
            let r = self.base.nth(j);
            if !self.exclude.contains(r) {
                if skip == 0 {
                    return r;
                }
                skip -= 1;
            }
        }
        NO_RUNE
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.base.rune_len() - self.exclude.rune_len()
    }

    #[inline]
    fn min(&self) -> Rune {
        self.base.min()
    }

    #[inline]
    fn max(&self) -> Rune {
        self.base.max()
    }
}
