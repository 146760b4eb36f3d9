//! Arithmetic progressions of runes: `count` runes starting at `first`, spaced
//! `stride` apart.
//!
//! Two encodings are provided:
//! - [`PackedUniform`]: fixed 5 bytes, `stride <= 8`, `first` limited to 21 bits.
//! - [`RecordUniform`]: a plain 6-byte (`u16` first) or 8-byte (`i32` first)
//!   record, with any `u16` stride. Decoding is cheaper than for the packed form.
//!
//! For `count == 1` the stride is normalized to 1.

use runeset_common::{Result, error::Error, verify_arg};

use crate::{
    NO_RUNE, Rune,
    codec::{self, MAX_FIXED_RUNE, RuneCell},
    range::RuneRange,
    set::RuneSet,
};

/// Biggest stride representable by [`PackedUniform`].
pub const MAX_PACKED_STRIDE: u8 = 8;

#[inline]
fn uniform_pos(first: Rune, stride: u32, count: u32, r: Rune) -> i32 {
    let u = r as i64 - first as i64;
    let stride = stride as i64;
    if u >= 0 && u < stride * count as i64 && u % stride == 0 {
        (u / stride) as i32
    } else {
        -1
    }
}

#[inline]
fn uniform_nth(first: Rune, stride: u32, count: u32, i: i32) -> Rune {
    if i >= 0 && (i as u32) < count {
        (first as i64 + i as i64 * stride as i64) as Rune
    } else {
        NO_RUNE
    }
}

fn verify_last_rune(first: Rune, count: u32, stride: u32) -> Result<()> {
    let last = first as i64 + (count as i64 - 1) * stride as i64;
    if last > i32::MAX as i64 {
        return Err(Error::invalid_arg(
            "count",
            format!("last rune {last} overflows the rune domain"),
        ));
    }
    Ok(())
}

/// Uniformly spaced runes in 5 bytes: `[b0, b1, b2]` hold `first` as a fixed
/// rune with `stride - 1` in the 3 most significant bits of `b2`, and `[b3, b4]`
/// hold `count` as a little-endian `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedUniform([u8; 5]);

impl PackedUniform {
    pub fn new(first: Rune, count: u16, stride: u8) -> Result<PackedUniform> {
        verify_arg!(count, count != 0);
        verify_arg!(stride, stride != 0);
        verify_arg!(stride, stride <= MAX_PACKED_STRIDE);
        verify_arg!(first, (0..=MAX_FIXED_RUNE).contains(&first));
        let stride = if count == 1 { 1 } else { stride };

        let first_bytes = codec::encode_fixed_rune(first);
        let count_bytes = codec::encode_u16(count);
        Ok(PackedUniform([
            first_bytes[0],
            first_bytes[1],
            first_bytes[2] | codec::encode_3msb(stride - 1),
            count_bytes[0],
            count_bytes[1],
        ]))
    }

    #[inline]
    pub fn stride(&self) -> u8 {
        codec::decode_3msb(self.0[2]) + 1
    }

    #[inline]
    fn count(&self) -> u16 {
        codec::decode_u16(&self.0[3..])
    }

    /// The raw encoded bytes.
    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }
}

impl RuneSet for PackedUniform {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.pos(r) >= 0
    }
}

impl RuneRange for PackedUniform {
    fn type_name(&self) -> &'static str {
        "range of uniformly distributed runes, stored in 5 bytes"
    }

    #[inline]
    fn pos(&self, r: Rune) -> i32 {
        uniform_pos(
            self.min(),
            self.stride() as u32,
            self.count() as u32,
            r,
        )
    }

    #[inline]
    fn nth(&self, i: i32) -> Rune {
        uniform_nth(
            self.min(),
            self.stride() as u32,
            self.count() as u32,
            i,
        )
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.count() as i32
    }

    #[inline]
    fn min(&self) -> Rune {
        codec::decode_fixed_rune(&self.0)
    }

    #[inline]
    fn max(&self) -> Rune {
        self.min() + (self.count() as i32 - 1) * self.stride() as i32
    }
}

/// Storage for the first rune of a [`RecordUniform`]: `u16` or `i32`.
pub trait RecordFirst: RuneCell + Eq + std::hash::Hash {
    const TYPE_NAME: &'static str;
}

impl RecordFirst for u16 {
    const TYPE_NAME: &'static str = "range of uniformly distributed runes, stored in 6 bytes";
}

impl RecordFirst for i32 {
    const TYPE_NAME: &'static str = "range of uniformly distributed runes, stored in 8 bytes";
}

/// Uniformly spaced runes as a plain `(first, stride, count)` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordUniform<T> {
    first: T,
    stride: u16,
    count: u16,
}

/// 6-byte record.
pub type Uniform6 = RecordUniform<u16>;

/// 8-byte record.
pub type Uniform8 = RecordUniform<i32>;

impl<T: RecordFirst> RecordUniform<T> {
    pub fn new(first: Rune, count: u16, stride: u16) -> Result<RecordUniform<T>> {
        verify_arg!(count, count != 0);
        verify_arg!(stride, stride != 0);
        let first_cell = T::from_rune(first).ok_or_else(|| {
            Error::invalid_arg(
                "first",
                format!("rune {first} does not fit in {:?} byte(s)", T::WIDTH),
            )
        })?;
        let stride = if count == 1 { 1 } else { stride };
        verify_last_rune(first, count as u32, stride as u32)?;
        Ok(RecordUniform {
            first: first_cell,
            stride,
            count,
        })
    }

    pub fn stride(&self) -> u16 {
        self.stride
    }
}

impl<T: RecordFirst> RuneSet for RecordUniform<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        self.pos(r) >= 0
    }
}

impl<T: RecordFirst> RuneRange for RecordUniform<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    #[inline]
    fn pos(&self, r: Rune) -> i32 {
        uniform_pos(
            self.first.to_rune(),
            self.stride as u32,
            self.count as u32,
            r,
        )
    }

    #[inline]
    fn nth(&self, i: i32) -> Rune {
        uniform_nth(
            self.first.to_rune(),
            self.stride as u32,
            self.count as u32,
            i,
        )
    }

    #[inline]
    fn rune_len(&self) -> i32 {
        self.count as i32
    }

    #[inline]
    fn min(&self) -> Rune {
        self.first.to_rune()
    }

    #[inline]
    fn max(&self) -> Rune {
        (self.first.to_rune() as i64 + (self.count as i64 - 1) * self.stride as i64) as Rune
    }
}
