use runeset_common::error::ErrorKind;

use crate::{
    codec::RuneWidth,
    config::{HighRuneWidth, StrategyConfig},
    range::{AnyRange, EmptyRange, Interval, RangeKind, RuneList, RuneRange, SearchKind},
    source::{Hinted, SliceSource, merge, merge_sources},
    strategy::{
        new_dynamic_interval, new_dynamic_one_value, new_dynamic_range,
        new_dynamic_range_with_config, new_dynamic_rune_list, new_dynamic_rune_list_with_config,
        new_dynamic_uniform,
    },
    tests::contract::check_range_contract,
};

fn rune_list_of(range: &AnyRange) -> (RuneWidth, SearchKind) {
    match range {
        AnyRange::RuneList(list) => (list.width(), list.search()),
        other => panic!("expected a rune list, got {:?}", other.kind()),
    }
}

#[test]
fn test_dynamic_rune_list_shapes() {
    let empty = new_dynamic_rune_list(SliceSource::new(&[])).unwrap();
    assert_eq!(empty.kind(), RangeKind::Empty);
    assert_eq!(empty.min(), -1);
    assert_eq!(empty.max(), -1);

    let single = new_dynamic_rune_list(SliceSource::new(&[0])).unwrap();
    assert_eq!(single.kind(), RangeKind::OneValue);
    check_range_contract(&single, &[0]);

    let wide = new_dynamic_rune_list(SliceSource::new(&[0, 200_000])).unwrap();
    let (width, search) = rune_list_of(&wide);
    assert!(width >= RuneWidth::Three);
    assert_eq!(search, SearchKind::Linear);
    check_range_contract(&wide, &[0, 200_000]);
}

#[test]
fn test_dynamic_rune_list_search_threshold() {
    let ten: Vec<_> = (0..10).map(|i| i * 3).collect();
    let eleven: Vec<_> = (0..11).map(|i| i * 3).collect();
    assert_eq!(
        rune_list_of(&new_dynamic_rune_list(SliceSource::new(&ten)).unwrap()),
        (RuneWidth::One, SearchKind::Linear)
    );
    assert_eq!(
        rune_list_of(&new_dynamic_rune_list(SliceSource::new(&eleven)).unwrap()),
        (RuneWidth::One, SearchKind::Binary)
    );

    let config = StrategyConfig {
        linear_search_threshold: 20,
        high_rune_width: HighRuneWidth::Plain4,
        ..Default::default()
    };
    let high: Vec<_> = (0..11).map(|i| 0x10000 + i * 3).collect();
    let range = new_dynamic_rune_list_with_config(SliceSource::new(&high), &config).unwrap();
    assert_eq!(rune_list_of(&range), (RuneWidth::Four, SearchKind::Linear));
    check_range_contract(&range, &high);
}

#[test]
fn test_dynamic_rune_list_uses_max_hint() {
    let runes = [1, 2, 3];
    let source = Hinted::new(runes.iter().copied())
        .with_len(3)
        .with_max(1000);
    let range = new_dynamic_rune_list(source).unwrap();
    assert_eq!(rune_list_of(&range).0, RuneWidth::Two);
    check_range_contract(&range, &runes);

    let unhinted = new_dynamic_rune_list(Hinted::new(runes.iter().copied())).unwrap();
    assert_eq!(rune_list_of(&unhinted).0, RuneWidth::One);
}

#[test]
fn test_dynamic_rune_list_invalid_config() {
    let config = StrategyConfig {
        linear_search_threshold: 0,
        ..Default::default()
    };
    let err = new_dynamic_rune_list_with_config(SliceSource::new(&[1, 2]), &config).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidConfig { .. }));
}

#[test]
fn test_dynamic_one_value_and_interval() {
    assert_eq!(new_dynamic_one_value(200).width(), RuneWidth::One);
    assert_eq!(new_dynamic_one_value(0x10FFFF).width(), RuneWidth::Three);
    let interval = new_dynamic_interval(0x100, 0x1FF).unwrap();
    assert_eq!(interval.width(), RuneWidth::Two);
    assert!(new_dynamic_interval(5, 4).is_err());
}

#[test]
fn test_dynamic_uniform() {
    let packed = new_dynamic_uniform(3, 3, 5).unwrap();
    assert_eq!(packed.kind(), RangeKind::PackedUniform);
    check_range_contract(&packed, &[3, 8, 13]);

    let interval = new_dynamic_uniform(10, 5, 1).unwrap();
    assert_eq!(interval.kind(), RangeKind::Interval);
    check_range_contract(&interval, &[10, 11, 12, 13, 14]);

    let record6 = new_dynamic_uniform(1, 4, 100).unwrap();
    assert_eq!(record6.kind(), RangeKind::Uniform6);
    check_range_contract(&record6, &[1, 101, 201, 301]);

    let record8 = new_dynamic_uniform(0x20000, 3, 100).unwrap();
    assert_eq!(record8.kind(), RangeKind::Uniform8);
    check_range_contract(&record8, &[0x20000, 0x20064, 0x200C8]);

    let single = new_dynamic_uniform(77, 1, 300).unwrap();
    assert_eq!(single.kind(), RangeKind::OneValue);
}

#[test]
fn test_dynamic_uniform_errors() {
    for (first, count, stride) in [(0, 0, 1), (0, 3, 0)] {
        let err = new_dynamic_uniform(first, count, stride).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }
    let err = new_dynamic_uniform(0, 70_000, 2).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::CapacityExceeded { limit: 65535, requested: 70_000, .. }
    ));
    let err = new_dynamic_uniform(16, 3, 70_000).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::CapacityExceeded { .. }));
    assert!(new_dynamic_uniform(i32::MAX - 1, 5, 1).is_err());
}

#[test]
fn test_dynamic_range_selection() {
    let uniform = new_dynamic_range(SliceSource::new(&[3, 8, 13])).unwrap();
    assert_eq!(uniform.kind(), RangeKind::PackedUniform);

    let contiguous: Vec<_> = (0x400..=0x4FF).collect();
    let interval = new_dynamic_range(SliceSource::new(&contiguous)).unwrap();
    assert_eq!(interval.kind(), RangeKind::Interval);
    check_range_contract(&interval, &contiguous);

    let sparse = new_dynamic_range(SliceSource::new(&[0, 5, 6])).unwrap();
    assert_eq!(sparse.kind(), RangeKind::RuneList);
    check_range_contract(&sparse, &[0, 5, 6]);

    let wide = new_dynamic_range(SliceSource::new(&[0, 200_000])).unwrap();
    assert_eq!(wide.kind(), RangeKind::RuneList);

    let empty = new_dynamic_range(SliceSource::new(&[])).unwrap();
    assert_eq!(empty.kind(), RangeKind::Empty);
}

#[test]
fn test_dynamic_range_bitmap() {
    let dense: Vec<_> = (0x3000..0x3100).filter(|r| r % 3 != 0).collect();
    let bitmap = new_dynamic_range(SliceSource::new(&dense)).unwrap();
    assert_eq!(bitmap.kind(), RangeKind::Bitmap);
    assert_eq!(bitmap.heap_size_bytes(), 3 + 32);
    check_range_contract(&bitmap, &dense);

    let config = StrategyConfig {
        bitmap_selection: false,
        ..Default::default()
    };
    let list = new_dynamic_range_with_config(SliceSource::new(&dense), &config).unwrap();
    assert_eq!(rune_list_of(&list), (RuneWidth::Two, SearchKind::Binary));
    check_range_contract(&list, &dense);
}

#[test]
fn test_dynamic_range_of_merged_ranges() {
    let overlapping = [
        Interval::dynamic(0x41, 0x45).unwrap(),
        Interval::dynamic(0x43, 0x4A).unwrap(),
    ];
    let joined = new_dynamic_range(merge(&overlapping)).unwrap();
    assert_eq!(joined.kind(), RangeKind::Interval);
    check_range_contract(&joined, &(0x41..=0x4A).collect::<Vec<_>>());

    let mixed: [AnyRange; 3] = [
        Interval::dynamic(1, 3).unwrap().into(),
        EmptyRange.into(),
        RuneList::new(&[3, 10, 20], RuneWidth::One, SearchKind::Linear)
            .unwrap()
            .into(),
    ];
    let list = new_dynamic_range(merge(&mixed)).unwrap();
    assert_eq!(rune_list_of(&list), (RuneWidth::One, SearchKind::Linear));
    check_range_contract(&list, &[1, 2, 3, 10, 20]);

    let empty = new_dynamic_range(merge::<AnyRange>(&[])).unwrap();
    assert_eq!(empty.kind(), RangeKind::Empty);
}

#[test]
fn test_dynamic_range_of_merged_sources() {
    let merged = merge_sources([
        SliceSource::new(&[0x1F600, 0x1F602]),
        SliceSource::new(&[0x1F601, 0x1F602, 0x1F603]),
    ]);
    let range = new_dynamic_range(merged).unwrap();
    assert_eq!(range.kind(), RangeKind::Interval);
    check_range_contract(&range, &[0x1F600, 0x1F601, 0x1F602, 0x1F603]);
}
