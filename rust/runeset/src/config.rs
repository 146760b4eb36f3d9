//! Tunables for layout selection.

use runeset_common::{Result, error::Error};

use crate::codec::RuneWidth;

/// Maximum cardinality for which rune lists use a linear search.
pub const DEFAULT_LINEAR_SEARCH_THRESHOLD: usize = 10;

/// Storage used for code points above `u16::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighRuneWidth {
    /// 3-byte packed, 21-bit storage. Saves a quarter of the space.
    #[default]
    Packed3,
    /// Plain 4-byte storage. Slightly faster to decode.
    Plain4,
}

impl HighRuneWidth {
    /// Width to use for a value that needs at least `needed`.
    #[inline]
    pub fn resolve(self, needed: RuneWidth) -> RuneWidth {
        match (needed, self) {
            (RuneWidth::Three, HighRuneWidth::Plain4) => RuneWidth::Four,
            (needed, _) => needed,
        }
    }
}

/// Configuration for the dynamic strategy selectors.
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    /// Rune lists with at most this many elements use a linear search, bigger ones
    /// a binary search.
    pub linear_search_threshold: usize,
    /// Storage for runes that do not fit in 2 bytes.
    pub high_rune_width: HighRuneWidth,
    /// Whether the composed selector may choose a bitmap when it is smaller than
    /// a rune list.
    pub bitmap_selection: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            linear_search_threshold: DEFAULT_LINEAR_SEARCH_THRESHOLD,
            high_rune_width: HighRuneWidth::default(),
            bitmap_selection: true,
        }
    }
}

impl StrategyConfig {
    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.linear_search_threshold == 0 {
            return Err(Error::invalid_config(
                "linear_search_threshold must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Width used to store `max` and every smaller rune.
    #[inline]
    pub fn width_for(&self, max: crate::Rune) -> RuneWidth {
        self.high_rune_width.resolve(RuneWidth::smallest(max))
    }
}
