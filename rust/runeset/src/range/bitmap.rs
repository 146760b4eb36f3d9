//! Bit-per-rune membership over a contiguous span.

use runeset_common::{Result, error::Error};

use crate::{
    NO_RUNE, Rune,
    codec::{self, MAX_FIXED_RUNE},
    range::RuneRange,
    set::RuneSet,
};

/// Length of the header holding the smallest rune.
pub const BITMAP_HEADER_LEN: usize = 3;

/// Maximum number of runes a [`Bitmap`] can hold.
pub const MAX_BITMAP_RUNES: usize = u16::MAX as usize;

/// A [`RuneRange`] backed by a byte string.
///
/// # Layout
///
/// - Bytes `0..3`: the smallest rune as a fixed (21-bit, little-endian) rune. The
///   3 spare bits of byte 2 are always zero.
/// - Bytes `3..`: one bit per offset from the smallest rune, LSB-first within each
///   byte. The last byte is never zero, so the biggest rune can be recovered
///   from it.
///
/// The rune count is kept next to the byte string rather than inside it, so that
/// `rune_len` is O(1).
///
/// `contains` is O(1). `pos` and `nth` are linear in the number of bitmap bytes,
/// using per-byte population counts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    bytes: Box<[u8]>,
    len: u16,
}

impl Bitmap {
    /// Builds a bitmap from strictly increasing `runes`.
    ///
    /// Fails if `runes` is empty, holds more than [`MAX_BITMAP_RUNES`] runes, or
    /// starts with a rune that cannot be stored in the 21-bit header.
    pub fn new(runes: &[Rune]) -> Result<Bitmap> {
        let (Some(&first), Some(&last)) = (runes.first(), runes.last()) else {
            return Err(Error::invalid_arg("runes", "no runes given"));
        };
        if runes.len() > MAX_BITMAP_RUNES {
            return Err(Error::capacity_exceeded(
                "bitmap rune count",
                MAX_BITMAP_RUNES,
                runes.len(),
            ));
        }
        if !(0..=MAX_FIXED_RUNE).contains(&first) {
            return Err(Error::invalid_arg(
                "runes",
                format!("first rune {first} does not fit in the bitmap header"),
            ));
        }
        debug_assert!(
            runes.windows(2).all(|w| w[0] < w[1]),
            "runes must be strictly increasing"
        );

        let span = (last as i64 - first as i64 + 1) as u64;
        let body_len = codec::ceil_div(span, 8) as usize;
        let mut bytes = vec![0u8; BITMAP_HEADER_LEN + body_len];
        bytes[..BITMAP_HEADER_LEN].copy_from_slice(&codec::encode_fixed_rune(first));

        codec::fill_bits(&mut bytes[BITMAP_HEADER_LEN..], first, runes);

        log::trace!(
            "bitmap: {} runes in [{first}, {last}], {} bytes",
            runes.len(),
            bytes.len()
        );

        Ok(Bitmap {
            bytes: bytes.into_boxed_slice(),
            len: runes.len() as u16,
        })
    }

    /// The encoded byte string (header followed by the bitmap).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes of the encoded byte string.
    pub fn heap_size_bytes(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn body(&self) -> &[u8] {
        &self.bytes[BITMAP_HEADER_LEN..]
    }

    /// Returns the body byte index and bit index for `r`, if inside the bitmap.
    #[inline]
    fn locate(&self, r: Rune) -> Option<(usize, u32)> {
        let u = r as i64 - self.min() as i64;
        if u < 0 {
            return None;
        }
        let index = (u >> 3) as usize;
        (BITMAP_HEADER_LEN + index < self.bytes.len()).then_some((index, (u & 7) as u32))
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("min", &self.min())
            .field("max", &self.max())
            .field("len", &self.len)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl RuneSet for Bitmap {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        match self.locate(r) {
            Some((index, bit)) => self.body()[index] & (1 << bit) != 0,
            None => false,
        }
    }
}

impl RuneRange for Bitmap {
    fn type_name(&self) -> &'static str {
        "bitmap of runes"
    }

    fn pos(&self, r: Rune) -> i32 {
        let Some((index, bit)) = self.locate(r) else {
            return -1;
        };
        let body = self.body();
        let byte = body[index];
        if byte & (1 << bit) == 0 {
            return -1;
        }
        let before: u32 = body[..index].iter().map(|&b| codec::ones(b)).sum();
        (before + codec::ones(byte & codec::mask_through(bit))) as i32 - 1
    }

    fn nth(&self, i: i32) -> Rune {
        if i < 0 || i >= self.len as i32 {
            return NO_RUNE;
        }
        let target = i as u32;
        let mut seen = 0u32;
        for (index, &byte) in self.body().iter().enumerate() {
            let ones = codec::ones(byte);
            if seen + ones > target {
                let bit = codec::nth_one_pos(byte, target - seen + 1) - 1;
                return self.min() + (index * 8) as Rune + bit as Rune;
            }
            seen += ones;
        }
        NO_RUNE
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.len as i32
    }

    #[inline]
    fn min(&self) -> Rune {
        codec::decode_fixed_rune(&self.bytes)
    }

    #[inline]
    fn max(&self) -> Rune {
        let body = self.body();
        let last = body.len() - 1;
        self.min() + (last * 8) as Rune + codec::leading_one_pos(body[last]) as Rune - 1
    }
}
