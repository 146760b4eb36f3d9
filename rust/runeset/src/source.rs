//! Inputs for layout construction.
//!
//! A [`RuneSource`] yields runes in strictly ascending order without repetition,
//! optionally announcing how many runes it will yield and which one is the
//! biggest. Selectors use the hints to size allocations and pick element widths
//! without an extra pass; when a hint is absent they measure the input instead.
//!
//! [`merge`] and [`merge_sources`] combine several sorted inputs into a single
//! source, so the union of possibly overlapping ranges can be fed back into the
//! selectors.

use itertools::{
    Itertools,
    structs::{Dedup, KMerge},
};

use crate::{Rune, range::RuneRange};

/// A sorted, duplicate-free stream of runes with optional size hints.
pub trait RuneSource: Iterator<Item = Rune> {
    /// Number of runes still to be yielded, if known.
    fn len_hint(&self) -> Option<usize> {
        None
    }

    /// The last rune that will be yielded, if known.
    fn max_hint(&self) -> Option<Rune> {
        None
    }
}

/// Collects all remaining runes of `source`.
pub fn collect_runes(source: impl RuneSource) -> Vec<Rune> {
    let mut runes = Vec::with_capacity(source.len_hint().unwrap_or(0));
    runes.extend(source);
    runes
}

/// A [`RuneSource`] over a sorted slice; both hints are exact.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    runes: &'a [Rune],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(runes: &'a [Rune]) -> SliceSource<'a> {
        debug_assert!(
            runes.windows(2).all(|w| w[0] < w[1]),
            "runes must be strictly increasing"
        );
        SliceSource { runes, pos: 0 }
    }

    /// Rewinds the source to its first rune.
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for SliceSource<'_> {
    type Item = Rune;

    #[inline]
    fn next(&mut self) -> Option<Rune> {
        let r = self.runes.get(self.pos).copied()?;
        self.pos += 1;
        Some(r)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.runes.len() - self.pos;
        (len, Some(len))
    }
}

impl RuneSource for SliceSource<'_> {
    fn len_hint(&self) -> Option<usize> {
        Some(self.runes.len() - self.pos)
    }

    fn max_hint(&self) -> Option<Rune> {
        self.runes[self.pos..].last().copied()
    }
}

/// Attaches caller-supplied hints to an arbitrary rune iterator.
#[derive(Debug, Clone)]
pub struct Hinted<I> {
    inner: I,
    len: Option<usize>,
    max: Option<Rune>,
}

impl<I: Iterator<Item = Rune>> Hinted<I> {
    pub fn new(inner: I) -> Hinted<I> {
        Hinted {
            inner,
            len: None,
            max: None,
        }
    }

    pub fn with_len(mut self, len: usize) -> Hinted<I> {
        self.len = Some(len);
        self
    }

    pub fn with_max(mut self, max: Rune) -> Hinted<I> {
        self.max = Some(max);
        self
    }
}

impl<I: Iterator<Item = Rune>> Iterator for Hinted<I> {
    type Item = Rune;

    #[inline]
    fn next(&mut self) -> Option<Rune> {
        let r = self.inner.next()?;
        if let Some(len) = self.len.as_mut() {
            *len = len.saturating_sub(1);
        }
        Some(r)
    }
}

impl<I: Iterator<Item = Rune>> RuneSource for Hinted<I> {
    fn len_hint(&self) -> Option<usize> {
        self.len
    }

    fn max_hint(&self) -> Option<Rune> {
        self.max
    }
}

/// Iterates over the runes of a [`RuneRange`] in ascending order using `nth`.
#[derive(Debug, Clone)]
pub struct RangeRunes<'a, R: ?Sized> {
    range: &'a R,
    pos: i32,
    len: i32,
}

impl<'a, R: RuneRange + ?Sized> RangeRunes<'a, R> {
    pub fn new(range: &'a R) -> RangeRunes<'a, R> {
        RangeRunes {
            range,
            pos: 0,
            len: range.rune_len(),
        }
    }

    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl<R: RuneRange + ?Sized> Iterator for RangeRunes<'_, R> {
    type Item = Rune;

    #[inline]
    fn next(&mut self) -> Option<Rune> {
        if self.pos >= self.len {
            return None;
        }
        let r = self.range.nth(self.pos);
        self.pos += 1;
        Some(r)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.len - self.pos) as usize;
        (len, Some(len))
    }
}

impl<R: RuneRange + ?Sized> ExactSizeIterator for RangeRunes<'_, R> {}

impl<R: RuneRange + ?Sized> RuneSource for RangeRunes<'_, R> {
    fn len_hint(&self) -> Option<usize> {
        Some((self.len - self.pos) as usize)
    }

    fn max_hint(&self) -> Option<Rune> {
        (self.pos < self.len).then(|| self.range.max())
    }
}

/// The sorted union of several sources, with repetitions removed.
///
/// The length hint is the sum of the inputs' hints and therefore an upper bound
/// when inputs overlap. Either hint is absent when a non-empty input lacks it.
pub struct Merge<S: Iterator<Item = Rune>> {
    inner: Dedup<KMerge<S>>,
    len: Option<usize>,
    max: Option<Rune>,
}

impl<S: Iterator<Item = Rune>> Iterator for Merge<S> {
    type Item = Rune;

    #[inline]
    fn next(&mut self) -> Option<Rune> {
        let r = self.inner.next()?;
        if let Some(len) = self.len.as_mut() {
            *len = len.saturating_sub(1);
        }
        Some(r)
    }
}

impl<S: Iterator<Item = Rune>> RuneSource for Merge<S> {
    fn len_hint(&self) -> Option<usize> {
        self.len
    }

    fn max_hint(&self) -> Option<Rune> {
        self.max
    }
}

/// Merges sorted, duplicate-free `sources` into one.
pub fn merge_sources<S: RuneSource>(sources: impl IntoIterator<Item = S>) -> Merge<S> {
    let sources: Vec<S> = sources.into_iter().collect();
    let len = sources
        .iter()
        .map(RuneSource::len_hint)
        .sum::<Option<usize>>();
    let max = sources
        .iter()
        .filter(|source| source.len_hint() != Some(0))
        .map(RuneSource::max_hint)
        .collect::<Option<Vec<_>>>()
        .and_then(|maxes| maxes.into_iter().max());
    log::trace!(
        "merge: {} sources, len hint {len:?}, max hint {max:?}",
        sources.len()
    );
    Merge {
        inner: sources.into_iter().kmerge().dedup(),
        len,
        max,
    }
}

/// Merges the runes of `ranges`, which may overlap, into one source.
pub fn merge<R: RuneRange>(ranges: &[R]) -> Merge<RangeRunes<'_, R>> {
    merge_sources(ranges.iter().map(RuneRange::runes))
}
