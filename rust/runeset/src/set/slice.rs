use crate::{
    Rune,
    codec::RuneCell,
    search::{binary_pos, linear_pos},
    set::RuneSet,
};

#[inline]
fn out_of_bounds<T: RuneCell>(values: &[T], r: Rune) -> bool {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) => r < first.to_rune() || last.to_rune() < r,
        _ => true,
    }
}

/// Sorted runes searched sequentially.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinearSlice<T> {
    values: Box<[T]>,
}

impl<T: RuneCell> LinearSlice<T> {
    /// `values` must be strictly increasing.
    pub fn new(values: Vec<T>) -> LinearSlice<T> {
        LinearSlice {
            values: values.into_boxed_slice(),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: RuneCell> RuneSet for LinearSlice<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        !out_of_bounds(&self.values, r) && linear_pos(&self.values, r).is_some()
    }
}

/// Sorted runes searched by halving.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinarySlice<T> {
    values: Box<[T]>,
}

impl<T: RuneCell> BinarySlice<T> {
    /// `values` must be strictly increasing.
    pub fn new(values: Vec<T>) -> BinarySlice<T> {
        BinarySlice {
            values: values.into_boxed_slice(),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: RuneCell> RuneSet for BinarySlice<T> {
    #[inline]
    fn contains(&self, r: Rune) -> bool {
        !out_of_bounds(&self.values, r) && binary_pos(&self.values, r).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_agree() {
        let values: Vec<u16> = vec![3, 9, 27, 81, 243, 729, 2187, 6561];
        let linear = LinearSlice::new(values.clone());
        let binary = BinarySlice::new(values.clone());
        for r in -2..7000 {
            let expected = values.contains(&(r as u16)) && r >= 0;
            assert_eq!(linear.contains(r), expected, "{r}");
            assert_eq!(binary.contains(r), expected, "{r}");
        }
    }

    #[test]
    fn test_empty_slices() {
        assert!(!LinearSlice::new(Vec::<i32>::new()).contains(0));
        assert!(!BinarySlice::new(Vec::<i32>::new()).contains(0));
        assert!(!BinarySlice::new(Vec::<i32>::new()).contains(-1));
    }
}
