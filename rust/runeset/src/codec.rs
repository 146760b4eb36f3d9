//! Fixed-width code point encodings and single-byte bit helpers.
//!
//! Layout conventions shared by every byte-level encoding in this crate:
//! - A "fixed rune" is a code point packed into 3 little-endian bytes. Only the
//!   low 21 bits are stored; the 3 most significant bits of the third byte are
//!   free for metadata (the packed uniform layout keeps `stride - 1` there).
//! - 16-bit fields are little-endian.
//! - Bitmaps are LSB-first within each byte.

use byteorder::{ByteOrder, LittleEndian};

use crate::Rune;

pub const MAX_UINT8: Rune = u8::MAX as Rune;
pub const MAX_UINT16: Rune = u16::MAX as Rune;

/// Largest value a fixed (21-bit) rune can hold.
pub const MAX_FIXED_RUNE: Rune = (1 << 21) - 1;

const FIXED_RUNE_MASK: u32 = (1 << 21) - 1;

/// Number of bytes used to store a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuneWidth {
    /// `[0, 255]`
    One,
    /// `[0, 65535]`
    Two,
    /// `[0, 2^21 - 1]`, packed in 3 bytes.
    Three,
    /// Any `i32`.
    Four,
}

impl RuneWidth {
    /// Returns the smallest width that can hold `r`.
    #[inline]
    pub fn smallest(r: Rune) -> RuneWidth {
        match r as u32 {
            u if u <= MAX_UINT8 as u32 => RuneWidth::One,
            u if u <= MAX_UINT16 as u32 => RuneWidth::Two,
            u if u <= MAX_FIXED_RUNE as u32 => RuneWidth::Three,
            _ => RuneWidth::Four,
        }
    }

    #[inline]
    pub fn bytes(self) -> usize {
        match self {
            RuneWidth::One => 1,
            RuneWidth::Two => 2,
            RuneWidth::Three => 3,
            RuneWidth::Four => 4,
        }
    }

    /// Whether `r` can be stored with this width.
    #[inline]
    pub fn holds(self, r: Rune) -> bool {
        self >= RuneWidth::smallest(r)
    }
}

/// A fixed-size storage cell for one code point.
///
/// Implemented for `u8`, `u16`, `[u8; 3]` (fixed rune) and `i32`, which back the
/// width-polymorphic layouts.
pub trait RuneCell: Copy + std::fmt::Debug {
    const WIDTH: RuneWidth;

    fn to_rune(self) -> Rune;

    /// Returns `None` if `r` does not fit the cell.
    fn from_rune(r: Rune) -> Option<Self>;
}

impl RuneCell for u8 {
    const WIDTH: RuneWidth = RuneWidth::One;

    #[inline]
    fn to_rune(self) -> Rune {
        self as Rune
    }

    #[inline]
    fn from_rune(r: Rune) -> Option<Self> {
        u8::try_from(r).ok()
    }
}

impl RuneCell for u16 {
    const WIDTH: RuneWidth = RuneWidth::Two;

    #[inline]
    fn to_rune(self) -> Rune {
        self as Rune
    }

    #[inline]
    fn from_rune(r: Rune) -> Option<Self> {
        u16::try_from(r).ok()
    }
}

impl RuneCell for [u8; 3] {
    const WIDTH: RuneWidth = RuneWidth::Three;

    #[inline]
    fn to_rune(self) -> Rune {
        decode_fixed_rune(&self)
    }

    #[inline]
    fn from_rune(r: Rune) -> Option<Self> {
        RuneWidth::Three.holds(r).then(|| encode_fixed_rune(r))
    }
}

impl RuneCell for i32 {
    const WIDTH: RuneWidth = RuneWidth::Four;

    #[inline]
    fn to_rune(self) -> Rune {
        self
    }

    #[inline]
    fn from_rune(r: Rune) -> Option<Self> {
        Some(r)
    }
}

/// Encodes the low 21 bits of `r` in 3 little-endian bytes. The 3 most significant
/// bits of the last byte are left zero.
#[inline]
pub fn encode_fixed_rune(r: Rune) -> [u8; 3] {
    let mut buf = [0u8; 3];
    LittleEndian::write_u24(&mut buf, r as u32 & FIXED_RUNE_MASK);
    buf
}

/// Decodes a rune written by [`encode_fixed_rune`], ignoring the 3 metadata bits.
///
/// `bytes` must hold at least 3 bytes.
#[inline]
pub fn decode_fixed_rune(bytes: &[u8]) -> Rune {
    (LittleEndian::read_u24(&bytes[..3]) & FIXED_RUNE_MASK) as Rune
}

/// Places the 3 least significant bits of `value` in the 3 most significant bits
/// of the result.
#[inline]
pub fn encode_3msb(value: u8) -> u8 {
    (value & 7) << 5
}

/// Inverse of [`encode_3msb`].
#[inline]
pub fn decode_3msb(byte: u8) -> u8 {
    byte >> 5
}

#[inline]
pub fn encode_u16(value: u16) -> [u8; 2] {
    let mut buf = [0u8; 2];
    LittleEndian::write_u16(&mut buf, value);
    buf
}

#[inline]
pub fn decode_u16(bytes: &[u8]) -> u16 {
    LittleEndian::read_u16(&bytes[..2])
}

/// Number of set bits in a byte.
#[inline]
pub fn ones(b: u8) -> u32 {
    b.count_ones()
}

/// 1-based position of the most significant set bit, or 0 if `b == 0`.
#[inline]
pub fn leading_one_pos(b: u8) -> u32 {
    u8::BITS - b.leading_zeros()
}

/// 1-based position of the `n`-th set bit counting from the LSB (`n >= 1`), or 0
/// if the byte has fewer than `n` set bits.
pub fn nth_one_pos(b: u8, mut n: u32) -> u32 {
    for i in 0..8 {
        if b & (1 << i) != 0 {
            n -= 1;
            if n == 0 {
                return i + 1;
            }
        }
    }
    0
}

/// Mask selecting bits `0..=bit` of a byte.
#[inline]
pub fn mask_through(bit: u32) -> u8 {
    u8::MAX >> (7 - bit)
}

/// Sets one bit per rune of `runes` in `body`, LSB-first, at offset `r - min`.
/// Every rune must lie in `[min, min + 8 * body.len())`.
#[inline]
pub fn fill_bits(body: &mut [u8], min: Rune, runes: &[Rune]) {
    for &r in runes {
        let u = (r - min) as usize;
        body[u >> 3] |= 1 << (u & 7);
    }
}

/// Integer division rounding towards positive infinity.
#[inline]
pub fn ceil_div(dividend: u64, divisor: u64) -> u64 {
    dividend.div_ceil(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bits() {
        let mut body = [0u8; 3];
        fill_bits(&mut body, 100, &[100, 105, 107, 108, 123]);
        assert_eq!(body, [0b1010_0001, 0b0000_0001, 0b1000_0000]);

        let mut empty = [0u8; 1];
        fill_bits(&mut empty, 0, &[]);
        assert_eq!(empty, [0]);
    }

    #[test]
    fn test_fixed_rune() {
        for r in [0, 1, 0x7F, 0x100, 0xFFFF, 0x10000, 0x10FFFF, MAX_FIXED_RUNE] {
            let bytes = encode_fixed_rune(r);
            assert_eq!(decode_fixed_rune(&bytes), r);
            assert_eq!(decode_3msb(bytes[2]), 0);
        }
        assert_eq!(encode_fixed_rune(0x10FFFF), [0xFF, 0xFF, 0x10]);
    }

    #[test]
    fn test_fixed_rune_ignores_metadata_bits() {
        let mut bytes = encode_fixed_rune(0x1_2345);
        bytes[2] |= encode_3msb(5);
        assert_eq!(decode_fixed_rune(&bytes), 0x1_2345);
        assert_eq!(decode_3msb(bytes[2]), 5);
        assert_eq!(bytes[2] & 0b1_1111, 0x01);
    }

    #[test]
    fn test_3msb() {
        for v in 0..8u8 {
            assert_eq!(decode_3msb(encode_3msb(v)), v);
            assert_eq!(encode_3msb(v) & 0b1_1111, 0);
        }
        assert_eq!(encode_3msb(9), encode_3msb(1));
    }

    #[test]
    fn test_u16() {
        assert_eq!(encode_u16(0x1234), [0x34, 0x12]);
        assert_eq!(decode_u16(&[0x34, 0x12]), 0x1234);
    }

    #[test]
    fn test_bit_helpers() {
        assert_eq!(ones(0), 0);
        assert_eq!(ones(0b1011_0001), 4);
        assert_eq!(leading_one_pos(0), 0);
        assert_eq!(leading_one_pos(1), 1);
        assert_eq!(leading_one_pos(0b0110_0000), 7);
        assert_eq!(leading_one_pos(0xFF), 8);
        assert_eq!(nth_one_pos(0b0110_0001, 1), 1);
        assert_eq!(nth_one_pos(0b0110_0001, 2), 6);
        assert_eq!(nth_one_pos(0b0110_0001, 3), 7);
        assert_eq!(nth_one_pos(0b0110_0001, 4), 0);
        assert_eq!(mask_through(0), 0b1);
        assert_eq!(mask_through(3), 0b1111);
        assert_eq!(mask_through(7), 0xFF);
    }

    #[test]
    fn test_rune_width() {
        assert_eq!(RuneWidth::smallest(0), RuneWidth::One);
        assert_eq!(RuneWidth::smallest(255), RuneWidth::One);
        assert_eq!(RuneWidth::smallest(256), RuneWidth::Two);
        assert_eq!(RuneWidth::smallest(65535), RuneWidth::Two);
        assert_eq!(RuneWidth::smallest(65536), RuneWidth::Three);
        assert_eq!(RuneWidth::smallest(0x10FFFF), RuneWidth::Three);
        assert_eq!(RuneWidth::smallest(MAX_FIXED_RUNE + 1), RuneWidth::Four);
        assert_eq!(RuneWidth::smallest(-1), RuneWidth::Four);
        assert!(RuneWidth::Four.holds(-1));
        assert!(!RuneWidth::Two.holds(70000));
    }

    #[test]
    fn test_rune_cells() {
        assert_eq!(<u8 as RuneCell>::from_rune(300), None);
        assert_eq!(<u16 as RuneCell>::from_rune(300).map(RuneCell::to_rune), Some(300));
        assert_eq!(<[u8; 3] as RuneCell>::from_rune(-1), None);
        assert_eq!(
            <[u8; 3] as RuneCell>::from_rune(0x10FFFF).map(RuneCell::to_rune),
            Some(0x10FFFF)
        );
        assert_eq!(<i32 as RuneCell>::from_rune(-7), Some(-7));
    }
}
