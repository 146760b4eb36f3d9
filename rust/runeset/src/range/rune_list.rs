//! Explicit sorted lists of runes.

use runeset_common::{Result, error::Error};

use crate::{
    NO_RUNE, Rune,
    codec::{RuneCell, RuneWidth},
    range::RuneRange,
    search,
    set::RuneSet,
};

/// Search discipline used by [`RuneList::pos`] and [`RuneList::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Sequential scan; cheapest for small lists.
    Linear,
    /// Halving search.
    Binary,
}

/// Element storage, one variant per element width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum RuneVec {
    W1(Box<[u8]>),
    W2(Box<[u16]>),
    W3(Box<[[u8; 3]]>),
    W4(Box<[i32]>),
}

macro_rules! dispatch {
    ($values:expr, $v:ident => $body:expr) => {
        match $values {
            RuneVec::W1($v) => $body,
            RuneVec::W2($v) => $body,
            RuneVec::W3($v) => $body,
            RuneVec::W4($v) => $body,
        }
    };
}

fn to_cells<T: RuneCell>(runes: &[Rune]) -> Result<Box<[T]>> {
    runes
        .iter()
        .map(|&r| {
            T::from_rune(r).ok_or_else(|| {
                Error::invalid_arg(
                    "runes",
                    format!("rune {r} does not fit in {:?} byte(s)", T::WIDTH),
                )
            })
        })
        .collect()
}

/// A [`RuneRange`] over an explicit, strictly increasing list of runes, each
/// stored with the same width.
///
/// `pos`/`contains` reject runes outside `[min, max]` before searching; `nth`,
/// `min`, `max` and `rune_len` are O(1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuneList {
    values: RuneVec,
    search: SearchKind,
}

impl RuneList {
    /// Builds a list from strictly increasing `runes`.
    ///
    /// Fails if `runes` is empty or any rune does not fit `width`.
    pub fn new(runes: &[Rune], width: RuneWidth, search: SearchKind) -> Result<RuneList> {
        if runes.is_empty() {
            return Err(Error::invalid_arg("runes", "no runes given"));
        }
        if runes.len() > i32::MAX as usize {
            return Err(Error::capacity_exceeded(
                "rune list length",
                i32::MAX as usize,
                runes.len(),
            ));
        }
        debug_assert!(
            runes.windows(2).all(|w| w[0] < w[1]),
            "runes must be strictly increasing"
        );
        let values = match width {
            RuneWidth::One => RuneVec::W1(to_cells(runes)?),
            RuneWidth::Two => RuneVec::W2(to_cells(runes)?),
            RuneWidth::Three => RuneVec::W3(to_cells(runes)?),
            RuneWidth::Four => RuneVec::W4(to_cells(runes)?),
        };
        Ok(RuneList { values, search })
    }

    pub fn search(&self) -> SearchKind {
        self.search
    }

    pub fn width(&self) -> RuneWidth {
        match self.values {
            RuneVec::W1(_) => RuneWidth::One,
            RuneVec::W2(_) => RuneWidth::Two,
            RuneVec::W3(_) => RuneWidth::Three,
            RuneVec::W4(_) => RuneWidth::Four,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        dispatch!(&self.values, v => v.len())
    }

    #[inline]
    fn get(&self, i: usize) -> Rune {
        dispatch!(&self.values, v => v[i].to_rune())
    }

    /// Size in bytes of the element storage.
    pub fn heap_size_bytes(&self) -> usize {
        self.len() * self.width().bytes()
    }

    fn pos_slow(&self, r: Rune) -> Option<usize> {
        match self.search {
            SearchKind::Linear => dispatch!(&self.values, v => search::linear_pos(v, r)),
            SearchKind::Binary => dispatch!(&self.values, v => search::binary_pos(v, r)),
        }
    }
}

impl RuneSet for RuneList {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.pos(r) >= 0
    }
}

impl RuneRange for RuneList {
    fn type_name(&self) -> &'static str {
        match self.search {
            SearchKind::Linear => "list of runes, using linear search",
            SearchKind::Binary => "list of runes, using binary search",
        }
    }

    #[inline]
    fn pos(&self, r: Rune) -> i32 {
        if r < self.min() || r > self.max() {
            return -1;
        }
        self.pos_slow(r).map_or(-1, |i| i as i32)
    }

    #[inline]
    fn nth(&self, i: i32) -> Rune {
        if i >= 0 && (i as usize) < self.len() {
            self.get(i as usize)
        } else {
            NO_RUNE
        }
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.len() as i32
    }

    #[inline]
    fn min(&self) -> Rune {
        self.get(0)
    }

    #[inline]
    fn max(&self) -> Rune {
        self.get(self.len() - 1)
    }
}
