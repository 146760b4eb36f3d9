//! Compact, queryable sets of Unicode code points.
//!
//! A sorted, duplicate-free sequence of runes is turned into the cheapest of
//! several specialized layouts (single value, interval, uniform progression,
//! explicit list, bitmap, and composites of those), all exposing the same
//! [`RuneRange`] query contract: membership, rank (`pos`), select (`nth`) and
//! bounds. The [`set`] module holds membership-only variants, and [`is`] builds
//! throwaway predicates from arbitrary, unsorted input.
//!
//! Layouts are immutable once built and can be shared freely across threads.
//!
//! ```
//! use runeset::{RuneRange, RuneSet, source::SliceSource, strategy::new_dynamic_range};
//!
//! let range = new_dynamic_range(SliceSource::new(&[3, 8, 13])).unwrap();
//! assert_eq!(range.pos(8), 1);
//! assert_eq!(range.nth(2), 13);
//! assert!(!range.contains(9));
//! ```

pub mod codec;
pub mod config;
pub mod is;
pub mod range;
pub mod search;
pub mod set;
pub mod source;
pub mod strategy;

#[cfg(test)]
mod tests;

/// A Unicode code point. Negative values are never members of a range.
pub type Rune = i32;

/// The "absent" rune returned by queries that find nothing.
pub const NO_RUNE: Rune = -1;

pub use config::StrategyConfig;
pub use is::{IsKind, IsPredicate, is_bytes, is_runes, is_str};
pub use range::{AnyRange, RangeKind, RuneRange};
pub use set::RuneSet;
pub use strategy::{
    new_dynamic_interval, new_dynamic_one_value, new_dynamic_range, new_dynamic_rune_list,
    new_dynamic_uniform,
};
