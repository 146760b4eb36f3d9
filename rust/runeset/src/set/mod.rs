//! Membership-only rune sets.
//!
//! The layouts here mirror the ones in [`crate::range`] but only answer
//! [`RuneSet::contains`], which lets them skip the bookkeeping needed for rank
//! and select queries. Every [`RuneRange`](crate::range::RuneRange) is also a
//! [`RuneSet`].

use runeset_common::{Result, verify_arg};

use crate::{Rune, codec::RuneCell};

mod bitmap;
mod slice;

pub use bitmap::{Bitmap, SET_BITMAP_HEADER_LEN};
pub use slice::{BinarySlice, LinearSlice};

/// A set of runes.
pub trait RuneSet {
    /// Whether `r` is a member of the set.
    fn contains(&self, r: Rune) -> bool;
}

impl<T: RuneSet + ?Sized> RuneSet for &T {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        (**self).contains(r)
    }
}

impl<T: RuneSet + ?Sized> RuneSet for Box<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        (**self).contains(r)
    }
}

/// Linear search over member sets. Using a single member type keeps the union
/// compact; use `Box<dyn RuneSet>` to mix layouts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Union<T> {
    sets: Vec<T>,
}

impl<T: RuneSet> Union<T> {
    pub fn new(sets: Vec<T>) -> Union<T> {
        Union { sets }
    }

    pub fn sets(&self) -> &[T] {
        &self.sets
    }
}

impl<T: RuneSet> FromIterator<T> for Union<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Union::new(iter.into_iter().collect())
    }
}

impl<T: RuneSet> RuneSet for Union<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.sets.iter().any(|set| set.contains(r))
    }
}

/// The runes in the inclusive interval `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    from: T,
    to: T,
}

impl<T: RuneCell> Interval<T> {
    /// Fails when `from` is bigger than `to`.
    pub fn new(from: T, to: T) -> Result<Interval<T>> {
        verify_arg!(from, from.to_rune() <= to.to_rune());
        Ok(Interval { from, to })
    }

    /// The `(from, to)` endpoints.
    pub fn bounds(&self) -> (T, T) {
        (self.from, self.to)
    }
}

impl<T: RuneCell> RuneSet for Interval<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        r >= self.from.to_rune() && r <= self.to.to_rune()
    }
}

/// `count` runes spaced `stride` apart, starting at `first`. For a stride of 1
/// an [`Interval`] is more compact and faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uniform<T> {
    first: T,
    stride: u16,
    count: u16,
}

impl<T: RuneCell> Uniform<T> {
    /// Fails on a zero `stride` or `count`.
    pub fn new(first: T, stride: u16, count: u16) -> Result<Uniform<T>> {
        verify_arg!(stride, stride != 0);
        verify_arg!(count, count != 0);
        Ok(Uniform {
            first,
            stride,
            count,
        })
    }

    pub fn first(&self) -> T {
        self.first
    }

    pub fn stride(&self) -> u16 {
        self.stride
    }

    pub fn count(&self) -> u16 {
        self.count
    }
}

impl<T: RuneCell> RuneSet for Uniform<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        let u = r as i64 - self.first.to_rune() as i64;
        let stride = self.stride as i64;
        u >= 0 && u < stride * self.count as i64 && u % stride == 0
    }
}
