//! Throwaway membership predicates over arbitrary rune inputs.
//!
//! Unlike the layouts in [`crate::range`], the input here may be unsorted, may
//! repeat runes and may hold invalid code points (those are dropped). The result
//! only answers membership, in O(1) for every representation, and trades memory
//! for speed on sparse inputs with a wide span.

use crate::{
    Rune,
    codec::{self, MAX_FIXED_RUNE},
    set::RuneSet,
};

/// Representation chosen by [`IsPredicate::from_runes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsKind {
    Never,
    Mask64,
    Words,
    Bytes,
}

/// Header length of the [`IsPredicate::Bytes`] representation.
const BYTES_HEADER_LEN: usize = 3;

/// A membership predicate built once and queried many times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IsPredicate {
    /// No member at all.
    Never,
    /// Span below 64: one bit per offset from `min` in a single word.
    Mask64 { min: Rune, mask: u64 },
    /// One bit per offset from `min`, in `ceil((span + 1) / 64)` words.
    Words { min: Rune, words: Box<[u64]> },
    /// A single byte string: `min` as a 3-byte fixed rune, then one bit per
    /// offset from `min`, LSB-first.
    Bytes(Box<[u8]>),
}

impl IsPredicate {
    /// Builds a predicate from any runes, in any order, with any repetitions.
    /// Runes that are not valid Unicode scalar values are ignored.
    pub fn from_runes(runes: impl IntoIterator<Item = Rune>) -> IsPredicate {
        let mut runes: Vec<Rune> = runes.into_iter().filter(|&r| is_valid_rune(r)).collect();
        runes.sort_unstable();
        runes.dedup();

        let (Some(&min), Some(&max)) = (runes.first(), runes.last()) else {
            log::trace!("is: no valid runes, never matching");
            return IsPredicate::Never;
        };
        let span = (max - min) as u64;

        if span < 64 {
            let mask = runes.iter().fold(0u64, |mask, &r| mask | 1u64 << (r - min));
            log::trace!("is: {} runes, span {span}, single word", runes.len());
            return IsPredicate::Mask64 { min, mask };
        }

        let word_bytes = 8 * codec::ceil_div(span + 1, 64);
        let string_bytes = BYTES_HEADER_LEN as u64 + codec::ceil_div(span + 1, 8);
        if string_bytes < word_bytes && min <= MAX_FIXED_RUNE {
            let mut bytes = vec![0u8; string_bytes as usize];
            bytes[..BYTES_HEADER_LEN].copy_from_slice(&codec::encode_fixed_rune(min));
            codec::fill_bits(&mut bytes[BYTES_HEADER_LEN..], min, &runes);
            log::trace!(
                "is: {} runes, span {span}, byte string of {string_bytes} bytes",
                runes.len()
            );
            return IsPredicate::Bytes(bytes.into_boxed_slice());
        }

        let mut words = vec![0u64; (word_bytes / 8) as usize];
        for &r in &runes {
            let u = (r - min) as usize;
            words[u >> 6] |= 1u64 << (u & 63);
        }
        log::trace!(
            "is: {} runes, span {span}, {} words",
            runes.len(),
            words.len()
        );
        IsPredicate::Words {
            min,
            words: words.into_boxed_slice(),
        }
    }

    pub fn kind(&self) -> IsKind {
        match self {
            IsPredicate::Never => IsKind::Never,
            IsPredicate::Mask64 { .. } => IsKind::Mask64,
            IsPredicate::Words { .. } => IsKind::Words,
            IsPredicate::Bytes(_) => IsKind::Bytes,
        }
    }

    #[inline]
    pub fn contains(&self, r: Rune) -> bool {
        match self {
            IsPredicate::Never => false,
            IsPredicate::Mask64 { min, mask } => {
                let u = r as i64 - *min as i64;
                (0..64).contains(&u) && *mask & (1u64 << u) != 0
            }
            IsPredicate::Words { min, words } => {
                let u = r as i64 - *min as i64;
                u >= 0
                    && words
                        .get((u >> 6) as usize)
                        .is_some_and(|&w| w & (1u64 << (u & 63)) != 0)
            }
            IsPredicate::Bytes(bytes) => {
                let u = r as i64 - codec::decode_fixed_rune(bytes) as i64;
                u >= 0
                    && bytes
                        .get(BYTES_HEADER_LEN + (u >> 3) as usize)
                        .is_some_and(|&b| b & (1u8 << (u & 7)) != 0)
            }
        }
    }
}

impl RuneSet for IsPredicate {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        IsPredicate::contains(self, r)
    }
}

#[inline]
fn is_valid_rune(r: Rune) -> bool {
    u32::try_from(r).ok().and_then(char::from_u32).is_some()
}

/// Predicate over the distinct characters of `s`.
pub fn is_str(s: &str) -> IsPredicate {
    IsPredicate::from_runes(s.chars().map(|c| c as Rune))
}

/// Predicate over the characters of `s` decoded as UTF-8. Invalid sequences
/// decode to U+FFFD, which then is a member.
pub fn is_bytes(s: &[u8]) -> IsPredicate {
    IsPredicate::from_runes(String::from_utf8_lossy(s).chars().map(|c| c as Rune))
}

/// Predicate over the valid code points of `runes`.
pub fn is_runes(runes: &[Rune]) -> IsPredicate {
    IsPredicate::from_runes(runes.iter().copied())
}
