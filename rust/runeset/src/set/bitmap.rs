use runeset_common::{Result, error::Error};

use crate::{
    Rune,
    codec::{self, MAX_FIXED_RUNE},
    set::RuneSet,
};

/// Header length: 3-byte fixed rune holding the smallest rune, then a 2-byte
/// little-endian rune count.
pub const SET_BITMAP_HEADER_LEN: usize = 5;

/// A membership-only bitmap over a contiguous span, for patchy sets with a
/// non-trivial distribution. `contains` is O(1).
///
/// Unlike [`crate::range::Bitmap`], the body may end with zero bits and the rune
/// count lives in the header, so the whole set is a single byte string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    bytes: Box<[u8]>,
}

impl Bitmap {
    /// Builds a bitmap from strictly increasing `runes`.
    pub fn new(runes: &[Rune]) -> Result<Bitmap> {
        let (Some(&first), Some(&last)) = (runes.first(), runes.last()) else {
            return Err(Error::invalid_arg("runes", "no runes given"));
        };
        if runes.len() > u16::MAX as usize {
            return Err(Error::capacity_exceeded(
                "set bitmap rune count",
                u16::MAX as usize,
                runes.len(),
            ));
        }
        if !(0..=MAX_FIXED_RUNE).contains(&first) {
            return Err(Error::invalid_arg(
                "runes",
                format!("first rune {first} does not fit in the bitmap header"),
            ));
        }

        let span = (last as i64 - first as i64 + 1) as u64;
        let mut bytes = vec![0u8; SET_BITMAP_HEADER_LEN + codec::ceil_div(span, 8) as usize];
        bytes[..3].copy_from_slice(&codec::encode_fixed_rune(first));
        bytes[3..SET_BITMAP_HEADER_LEN].copy_from_slice(&codec::encode_u16(runes.len() as u16));

        codec::fill_bits(&mut bytes[SET_BITMAP_HEADER_LEN..], first, runes);
        Ok(Bitmap {
            bytes: bytes.into_boxed_slice(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of runes in the set, read from the header.
    pub fn rune_len(&self) -> usize {
        codec::decode_u16(&self.bytes[3..]) as usize
    }
}

impl RuneSet for Bitmap {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        let u = r as i64 - codec::decode_fixed_rune(&self.bytes) as i64;
        if u < 0 {
            return false;
        }
        self.bytes
            .get(SET_BITMAP_HEADER_LEN + (u >> 3) as usize)
            .is_some_and(|&b| b & (1 << (u & 7)) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bitmap() {
        let runes = [0x41, 0x43, 0x4A, 0x61, 0x7A];
        let set = Bitmap::new(&runes).unwrap();
        assert_eq!(set.rune_len(), 5);
        assert_eq!(&set.as_bytes()[..5], &[0x41, 0, 0, 5, 0]);
        for r in 0x30..0x80 {
            assert_eq!(set.contains(r), runes.contains(&r), "{r}");
        }
        assert!(!set.contains(-1));
        assert!(!set.contains(i32::MAX));
    }

    #[test]
    fn test_set_bitmap_errors() {
        assert!(Bitmap::new(&[]).is_err());
        assert!(Bitmap::new(&[-5, 3]).is_err());
        let too_many: Vec<Rune> = (0..70_000).collect();
        assert!(Bitmap::new(&too_many).is_err());
    }
}
