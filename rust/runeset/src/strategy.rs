//! Dynamic layout selection.
//!
//! The selectors inspect the cardinality, span and spacing of a sorted input and
//! build the cheapest layout that can represent it:
//!
//! - [`new_dynamic_rune_list`]: empty, single value or rune list.
//! - [`new_dynamic_uniform`]: interval, packed uniform or record uniform, for
//!   inputs already known to be evenly spaced.
//! - [`new_dynamic_range`]: composes the two, and may also pick a bitmap.

use itertools::Itertools;
use runeset_common::{Result, error::Error};

use crate::{
    Rune,
    codec::{self, MAX_FIXED_RUNE, RuneWidth},
    config::StrategyConfig,
    range::{
        AnyRange, Bitmap, EmptyRange, Interval, OneValue, PackedUniform, RuneList, SearchKind,
        Uniform6, Uniform8,
        bitmap::{BITMAP_HEADER_LEN, MAX_BITMAP_RUNES},
        uniform::MAX_PACKED_STRIDE,
    },
    source::{RuneSource, collect_runes},
};

/// A single rune stored with the smallest adequate width.
pub fn new_dynamic_one_value(r: Rune) -> OneValue {
    OneValue::dynamic(r)
}

/// The runes of `[from, to]`, with endpoints stored in the smallest adequate
/// width.
pub fn new_dynamic_interval(from: Rune, to: Rune) -> Result<Interval> {
    Interval::dynamic(from, to)
}

/// See [`new_dynamic_rune_list_with_config`].
pub fn new_dynamic_rune_list(source: impl RuneSource) -> Result<AnyRange> {
    new_dynamic_rune_list_with_config(source, &StrategyConfig::default())
}

/// Builds an empty range, a single value or a rune list from a sorted,
/// duplicate-free `source`.
///
/// The rune list uses the width needed by the biggest rune (taken from the
/// source's max hint when present), and a linear search when it holds at most
/// `config.linear_search_threshold` runes.
pub fn new_dynamic_rune_list_with_config(
    source: impl RuneSource,
    config: &StrategyConfig,
) -> Result<AnyRange> {
    config.validate()?;
    let max_hint = source.max_hint();
    let runes = collect_runes(source);
    rune_list_from_slice(&runes, max_hint, config)
}

fn rune_list_from_slice(
    runes: &[Rune],
    max_hint: Option<Rune>,
    config: &StrategyConfig,
) -> Result<AnyRange> {
    match runes {
        [] => {
            log::debug!("dynamic rune list: no runes, empty range");
            Ok(EmptyRange.into())
        }
        [r] => {
            log::debug!("dynamic rune list: single rune {r}");
            Ok(OneValue::dynamic(*r).into())
        }
        [.., last] => {
            let width = config.width_for(max_hint.unwrap_or(*last));
            let search = if runes.len() <= config.linear_search_threshold {
                SearchKind::Linear
            } else {
                SearchKind::Binary
            };
            log::debug!(
                "dynamic rune list: {} runes, {width:?} byte(s) each, {search:?} search",
                runes.len()
            );
            Ok(RuneList::new(runes, width, search)?.into())
        }
    }
}

/// See [`new_dynamic_uniform_with_config`].
pub fn new_dynamic_uniform(first: Rune, count: u32, stride: u32) -> Result<AnyRange> {
    new_dynamic_uniform_with_config(first, count, stride, &StrategyConfig::default())
}

/// Builds the cheapest layout for `count` runes spaced `stride` apart, starting
/// at `first`.
///
/// - one rune: a single value;
/// - stride 1: an interval;
/// - stride up to 8, `first` within 21 bits and a 16-bit count: the 5-byte
///   packed uniform layout;
/// - otherwise the 6-byte (`first` fits 16 bits) or 8-byte record layout.
///
/// Fails on a zero count or stride, and when the count or the stride does not
/// fit 16 bits for a record layout.
pub fn new_dynamic_uniform_with_config(
    first: Rune,
    count: u32,
    stride: u32,
    config: &StrategyConfig,
) -> Result<AnyRange> {
    if count == 0 {
        return Err(Error::invalid_arg("count", "count must be positive"));
    }
    if stride == 0 {
        return Err(Error::invalid_arg("stride", "stride must be positive"));
    }
    if count == 1 {
        log::debug!("dynamic uniform: single rune {first}");
        return Ok(OneValue::dynamic(first).into());
    }
    if stride == 1 {
        let last = first as i64 + count as i64 - 1;
        if last > i32::MAX as i64 {
            return Err(Error::invalid_arg(
                "count",
                format!("last rune {last} overflows the rune domain"),
            ));
        }
        let last = last as Rune;
        let width = config.width_for(first).max(config.width_for(last));
        log::debug!("dynamic uniform: interval [{first}, {last}]");
        return Ok(Interval::new(first, last, width)?.into());
    }

    let Ok(count) = u16::try_from(count) else {
        return Err(Error::capacity_exceeded(
            "uniform rune count",
            u16::MAX as usize,
            count as usize,
        ));
    };
    if stride <= MAX_PACKED_STRIDE as u32 && (0..=MAX_FIXED_RUNE).contains(&first) {
        log::debug!("dynamic uniform: packed, first {first}, count {count}, stride {stride}");
        return Ok(PackedUniform::new(first, count, stride as u8)?.into());
    }
    let Ok(stride) = u16::try_from(stride) else {
        return Err(Error::capacity_exceeded(
            "uniform stride",
            u16::MAX as usize,
            stride as usize,
        ));
    };
    if RuneWidth::Two.holds(first) {
        log::debug!("dynamic uniform: 6-byte record, first {first}, count {count}, stride {stride}");
        Ok(Uniform6::new(first, count, stride)?.into())
    } else {
        log::debug!("dynamic uniform: 8-byte record, first {first}, count {count}, stride {stride}");
        Ok(Uniform8::new(first, count, stride)?.into())
    }
}

/// See [`new_dynamic_range_with_config`].
pub fn new_dynamic_range(source: impl RuneSource) -> Result<AnyRange> {
    new_dynamic_range_with_config(source, &StrategyConfig::default())
}

/// Single entry point: builds the cheapest layout for a sorted, duplicate-free
/// `source`.
///
/// Evenly spaced inputs go through [`new_dynamic_uniform_with_config`]. Other
/// inputs become a [`Bitmap`] when it is smaller than the equivalent rune list
/// (and `config.bitmap_selection` allows it), and a rune list otherwise.
pub fn new_dynamic_range_with_config(
    source: impl RuneSource,
    config: &StrategyConfig,
) -> Result<AnyRange> {
    config.validate()?;
    let max_hint = source.max_hint();
    let runes = collect_runes(source);
    let (first, last) = match runes.as_slice() {
        [] | [_] => return rune_list_from_slice(&runes, max_hint, config),
        [first, .., last] => (*first, *last),
    };

    if let Some(stride) = uniform_stride(&runes) {
        match new_dynamic_uniform_with_config(first, runes.len() as u32, stride, config) {
            Ok(range) => return Ok(range),
            Err(e) => log::debug!("dynamic range: uniform input rejected ({e}), falling back"),
        }
    }

    let width = config.width_for(max_hint.unwrap_or(last));
    let list_bytes = (runes.len() * width.bytes()) as u64;
    let span = (last as i64 - first as i64 + 1) as u64;
    let bitmap_bytes = BITMAP_HEADER_LEN as u64 + codec::ceil_div(span, 8);
    if config.bitmap_selection
        && bitmap_bytes < list_bytes
        && runes.len() <= MAX_BITMAP_RUNES
        && (0..=MAX_FIXED_RUNE).contains(&first)
    {
        log::debug!(
            "dynamic range: bitmap of {bitmap_bytes} bytes over span {span} \
             instead of a {list_bytes}-byte list"
        );
        return Ok(Bitmap::new(&runes)?.into());
    }
    rune_list_from_slice(&runes, max_hint, config)
}

/// The common difference of `runes` when it has at least two elements and they
/// are evenly spaced.
fn uniform_stride(runes: &[Rune]) -> Option<u32> {
    let mut gaps = runes
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| b as i64 - a as i64);
    let stride = gaps.next()?;
    if stride <= 0 || stride > u32::MAX as i64 || !gaps.all(|gap| gap == stride) {
        return None;
    }
    Some(stride as u32)
}
