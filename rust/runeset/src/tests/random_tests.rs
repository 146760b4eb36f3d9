use crate::{
    Rune,
    codec::RuneWidth,
    is::is_runes,
    range::{AnyRange, Bitmap, RuneList, RuneRange, SearchKind, new_range_list},
    source::SliceSource,
    strategy::new_dynamic_range,
    tests::contract::check_range_contract,
};

/// Strictly increasing runes starting at `start`, with gaps in `1..max_gap`.
fn random_runes(start: Rune, len: usize, max_gap: Rune) -> Vec<Rune> {
    let mut r = start;
    (0..len)
        .map(|_| {
            r += fastrand::i32(1..max_gap);
            r
        })
        .collect()
}

#[test]
fn test_random_dynamic_ranges() {
    fastrand::seed(4_180_617);
    for _ in 0..200 {
        let len = fastrand::usize(0..300);
        let max_gap = [2, 3, 10, 200, 5000][fastrand::usize(0..5)];
        let start = fastrand::i32(-1..0x10000);
        let runes = random_runes(start, len, max_gap);
        let range = new_dynamic_range(SliceSource::new(&runes)).unwrap();
        check_range_contract(&range, &runes);
    }
}

#[test]
fn test_random_bitmaps_match_lists() {
    fastrand::seed(91_735_228);
    for _ in 0..100 {
        let runes = random_runes(fastrand::i32(-1..0x1_0000), fastrand::usize(1..500), 20);
        let bitmap = Bitmap::new(&runes).unwrap();
        let list = RuneList::new(&runes, RuneWidth::Three, SearchKind::Binary).unwrap();
        check_range_contract(&bitmap, &runes);
        for _ in 0..100 {
            let r = fastrand::i32(runes[0] - 10..runes[runes.len() - 1] + 10);
            assert_eq!(bitmap.pos(r), list.pos(r), "{r}");
        }
    }
}

#[test]
fn test_random_range_lists() {
    fastrand::seed(2_296_531);
    for _ in 0..100 {
        let mut runes = Vec::new();
        let mut ranges: Vec<AnyRange> = Vec::new();
        let mut next = fastrand::i32(0..1000);
        for _ in 0..fastrand::usize(0..8) {
            let part = random_runes(next, fastrand::usize(1..40), 6);
            next = part[part.len() - 1] + fastrand::i32(1..100);
            ranges.push(new_dynamic_range(SliceSource::new(&part)).unwrap());
            runes.extend(part);
        }
        let list = new_range_list(ranges).unwrap();
        check_range_contract(&list, &runes);
    }
}

#[test]
fn test_random_is_predicates() {
    fastrand::seed(771_043);
    for _ in 0..100 {
        let len = fastrand::usize(0..50);
        let base = fastrand::i32(0..0x10_0000);
        let spread = [10, 64, 1000, 100_000][fastrand::usize(0..4)];
        let input: Vec<Rune> = (0..len).map(|_| base + fastrand::i32(0..spread)).collect();
        let is = is_runes(&input);
        let valid = |r: Rune| u32::try_from(r).ok().and_then(char::from_u32).is_some();
        for &r in &input {
            assert_eq!(is.contains(r), valid(r), "{r}");
        }
        for _ in 0..200 {
            let r = base + fastrand::i32(-10..spread + 10);
            assert_eq!(is.contains(r), valid(r) && input.contains(&r), "{r}");
        }
    }
}
