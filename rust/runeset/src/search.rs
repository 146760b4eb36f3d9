//! Search primitives over sorted slices of rune cells.
//!
//! Callers are expected to have already rejected runes outside `[first, last]`;
//! these functions only do the in-bounds search.

use crate::{Rune, codec::RuneCell};

/// Linear scan for `r`; stops early once a bigger value is seen.
pub fn linear_pos<T: RuneCell>(values: &[T], r: Rune) -> Option<usize> {
    for (i, &v) in values.iter().enumerate() {
        let v = v.to_rune();
        if v == r {
            return Some(i);
        }
        if v > r {
            break;
        }
    }
    None
}

/// Binary search for `r` with an overflow-safe midpoint.
pub fn binary_pos<T: RuneCell>(values: &[T], r: Rune) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0usize, values.len() - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        let v = values[mid].to_rune();
        if r < v {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        } else if v < r {
            low = mid + 1;
        } else {
            return Some(mid);
        }
    }
    None
}
