//! A range holding exactly one rune.

use runeset_common::{Result, error::Error};

use crate::{
    NO_RUNE, Rune,
    codec::{RuneCell, RuneWidth},
    range::RuneRange,
    set::RuneSet,
};

/// A single rune stored in 1, 2, 3 or 4 bytes.
///
/// `W1` and `W2` hold ASCII/Latin-1 and BMP runes at no decoding cost. `W3` can
/// hold any code point in 3 bytes at a small decoding cost, `W4` holds any `i32`.
/// The width only matters when many values are packed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OneValue {
    W1(u8),
    W2(u16),
    W3([u8; 3]),
    W4(i32),
}

impl OneValue {
    /// Creates a value of the given `width`. Fails if `r` does not fit.
    pub fn new(r: Rune, width: RuneWidth) -> Result<OneValue> {
        let value = match width {
            RuneWidth::One => u8::from_rune(r).map(OneValue::W1),
            RuneWidth::Two => u16::from_rune(r).map(OneValue::W2),
            RuneWidth::Three => <[u8; 3]>::from_rune(r).map(OneValue::W3),
            RuneWidth::Four => Some(OneValue::W4(r)),
        };
        value.ok_or_else(|| {
            Error::invalid_arg("r", format!("rune {r} does not fit in {width:?} byte(s)"))
        })
    }

    /// Creates a value using the smallest width that can hold `r`.
    pub fn dynamic(r: Rune) -> OneValue {
        match RuneWidth::smallest(r) {
            RuneWidth::One => OneValue::W1(r as u8),
            RuneWidth::Two => OneValue::W2(r as u16),
            RuneWidth::Three => OneValue::W3(crate::codec::encode_fixed_rune(r)),
            RuneWidth::Four => OneValue::W4(r),
        }
    }

    /// The stored rune.
    #[inline]
    pub fn rune(&self) -> Rune {
        match *self {
            OneValue::W1(v) => v.to_rune(),
            OneValue::W2(v) => v.to_rune(),
            OneValue::W3(v) => v.to_rune(),
            OneValue::W4(v) => v,
        }
    }

    pub fn width(&self) -> RuneWidth {
        match self {
            OneValue::W1(_) => RuneWidth::One,
            OneValue::W2(_) => RuneWidth::Two,
            OneValue::W3(_) => RuneWidth::Three,
            OneValue::W4(_) => RuneWidth::Four,
        }
    }
}

impl RuneSet for OneValue {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.rune() == r
    }
}

impl RuneRange for OneValue {
    fn type_name(&self) -> &'static str {
        match self {
            OneValue::W1(_) => "single rune stored in 1 byte",
            OneValue::W2(_) => "single rune stored in 2 bytes",
            OneValue::W3(_) => "single rune stored in 3 bytes",
            OneValue::W4(_) => "single rune stored in 4 bytes",
        }
    }

    #[inline]
    fn pos(&self, r: Rune) -> i32 {
        if self.rune() == r { 0 } else { -1 }
    }

    #[inline]
    fn nth(&self, i: i32) -> Rune {
        if i == 0 { self.rune() } else { NO_RUNE }
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        1
    }

    #[inline]
    fn min(&self) -> Rune {
        self.rune()
    }

    #[inline]
    fn max(&self) -> Rune {
        self.rune()
    }
}
