use crate::{
    Rune,
    is::{IsKind, IsPredicate, is_bytes, is_runes, is_str},
    set::RuneSet,
};

#[test]
fn test_is_str() {
    let is = is_str("AB");
    assert_eq!(is.kind(), IsKind::Mask64);
    assert!(is.contains(65));
    assert!(is.contains(66));
    assert!(!is.contains(67));
    assert!(!is.contains(-1));
}

#[test]
fn test_is_never() {
    for is in [is_str(""), is_runes(&[]), is_runes(&[-1, 0xD800, 0x110000])] {
        assert_eq!(is.kind(), IsKind::Never);
        for r in [-1, 0, 0xD800, 0x10FFFF] {
            assert!(!is.contains(r));
        }
    }
}

#[test]
fn test_is_unsorted_duplicates() {
    let is = is_runes(&[40, 10, 40, 70, 10, -5, 0xDFFF]);
    assert_eq!(is.kind(), IsKind::Mask64);
    for r in 0..128 {
        assert_eq!(is.contains(r), [10, 40, 70].contains(&r), "{r}");
    }
    assert!(!is.contains(0xDFFF));
}

#[test]
fn test_is_mask64_edges() {
    let is = is_runes(&[100, 163]);
    assert_eq!(is.kind(), IsKind::Mask64);
    assert!(is.contains(100));
    assert!(is.contains(163));
    assert!(!is.contains(164));
    assert!(!is.contains(99));
    assert!(!is.contains(i32::MIN));
    assert!(!is.contains(i32::MAX));
}

#[test]
fn test_is_wide_span() {
    // Span of 64: too wide for a single word, the byte string is smaller.
    let is = is_runes(&[1000, 1064]);
    assert_eq!(is.kind(), IsKind::Bytes);
    assert!(is.contains(1000));
    assert!(is.contains(1064));
    assert!(!is.contains(1032));
    assert!(!is.contains(1065));
    assert!(!is.contains(999));
}

#[test]
fn test_is_words() {
    // A word-aligned span: the byte string would only add its header.
    let is = IsPredicate::from_runes([0x10FF00, 0x10FFFF, 0x10FF80]);
    assert_eq!(is.kind(), IsKind::Words);
    for r in 0x10FE00..=0x10FFFF {
        assert_eq!(is.contains(r), [0x10FF00, 0x10FF80, 0x10FFFF].contains(&r), "{r}");
    }
    assert!(!is.contains(0x110000));
}

#[test]
fn test_is_extreme_span() {
    let is = is_runes(&[0, 0x10FFFF]);
    assert!(is.contains(0));
    assert!(is.contains(0x10FFFF));
    assert!(!is.contains(0x8000));
    assert!(!is.contains(-1));
}

#[test]
fn test_is_bytes() {
    let is = is_bytes("héllo".as_bytes());
    for c in ['h', 'é', 'l', 'o'] {
        assert!(is.contains(c as Rune), "{c}");
    }
    assert!(!is.contains('e' as Rune));

    let lossy = is_bytes(&[b'a', 0xFF, b'b']);
    assert!(lossy.contains('a' as Rune));
    assert!(lossy.contains(char::REPLACEMENT_CHARACTER as Rune));
}

#[test]
fn test_is_as_rune_set() {
    fn count_members(set: &impl RuneSet, runes: &[Rune]) -> usize {
        runes.iter().filter(|&&r| set.contains(r)).count()
    }
    let is = is_str("aeiou");
    let text: Vec<Rune> = "programming in rust".chars().map(|c| c as Rune).collect();
    assert_eq!(count_members(&is, &text), 5);
}
