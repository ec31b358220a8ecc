// Keyflip Conversion Integration Tests
//
// These tests verify the complete conversion pipeline:
// text -> script detection -> transliteration -> ConversionResult
//
// Run with: cargo test --test conversion_test

use keyflip_core::transform::{transliterate_forward, transliterate_reverse};
use keyflip_core::{arabic_102, convert, script, ConversionResult, Direction, ScriptClass};

// =========================================================================
// Table properties
// =========================================================================

#[test]
fn test_every_forward_entry_reverses_unless_dropped() {
    let table = arabic_102();
    let dropped: Vec<&str> = table.collisions().iter().map(|c| c.dropped.as_str()).collect();

    for (source, target) in table.forward_entries() {
        let found = table
            .lookup_reverse(target)
            .unwrap_or_else(|| panic!("no reverse entry for {:?}", target));
        assert_eq!(found.chars, target.chars().count(), "target {:?}", target);

        if found.replacement != source {
            assert!(
                dropped.contains(&source),
                "{:?} -> {:?} comes back as {:?}",
                source,
                target,
                found.replacement
            );
        }
    }
}

#[test]
fn test_collision_losers() {
    let mut dropped: Vec<&str> = arabic_102()
        .collisions()
        .iter()
        .map(|c| c.dropped.as_str())
        .collect();
    dropped.sort_unstable();
    assert_eq!(dropped, vec!["M", "`", "~"]);

    let table = arabic_102();
    assert!(!table.is_reversible("M"));
    assert!(!table.is_reversible("`"));
    assert!(!table.is_reversible("~"));
    assert!(table.is_reversible("U"));
    assert!(table.is_reversible(":"));
    assert!(table.is_reversible("Z"));
}

// =========================================================================
// Conversion
// =========================================================================

#[test]
fn test_empty_is_noop() {
    assert_eq!(convert(""), ConversionResult::NoOp);
    assert_eq!(convert("").into_parts(), (String::new(), false));
}

#[test]
fn test_digits_convert_to_themselves() {
    assert_eq!(convert("12345").into_parts(), ("12345".to_string(), true));
    assert_eq!(convert("12345").direction(), Some(Direction::SourceToTarget));
}

#[test]
fn test_hello_world_round_trip() {
    let arabic = convert("hello world");
    assert_eq!(arabic.text(), "اثممخ صخقمي");
    assert_eq!(arabic.direction(), Some(Direction::SourceToTarget));

    let back = convert(arabic.text());
    assert_eq!(back.text(), "hello world");
    assert_eq!(back.direction(), Some(Direction::TargetToSource));
}

#[test]
fn test_lam_alef_ligatures() {
    assert_eq!(convert("لا").text(), "b");
    assert_eq!(convert("لإ").text(), "T");
    assert_eq!(convert("لأ").text(), "G");
    assert_eq!(convert("لآ").text(), "B");
}

#[test]
fn test_lam_followed_by_other_letter() {
    assert_eq!(convert("لم").text(), "gl");
    assert_eq!(convert("الا").text(), "hb");
}

#[test]
fn test_gh_round_trip_is_lossy() {
    // "g" then "h" produces lam + alef, which reads back as the ligature key
    assert_eq!(convert("gh").text(), "لا");
    assert_eq!(convert(convert("gh").text()).text(), "b");
}

#[test]
fn test_shifted_letters() {
    assert_eq!(convert("Hello").text(), "أثممخ");
    assert_eq!(convert("?").text(), "؟");
}

#[test]
fn test_brackets_swap() {
    assert_eq!(transliterate_forward("(x)", arabic_102()), ")ء(");
    assert_eq!(transliterate_reverse(")ء(", arabic_102()), "(x)");
}

#[test]
fn test_passthrough_both_directions() {
    assert_eq!(convert("😀 ok").text(), "😀 خن");
    assert_eq!(convert("لا😀ل").text(), "b😀g");
    assert_eq!(convert("日本").text(), "日本");
}

#[test]
fn test_mixed_text_majority_wins() {
    // Three latin letters against two arabic ones
    let result = convert("abcسش");
    assert_eq!(result.direction(), Some(Direction::SourceToTarget));
    assert_eq!(result.text(), "شلاؤسش");

    // Three arabic letters against two latin ones
    let result = convert("abسشي");
    assert_eq!(result.direction(), Some(Direction::TargetToSource));
    assert_eq!(result.text(), "abasd");
}

// =========================================================================
// Script detection
// =========================================================================

#[test]
fn test_tie_classifies_as_latin() {
    assert_eq!(script::classify("aس"), ScriptClass::Source);
    assert_eq!(script::classify(""), ScriptClass::Source);
    assert_eq!(script::classify("123"), ScriptClass::Source);
}

#[test]
fn test_arabic_majority() {
    assert_eq!(script::classify("سلام"), ScriptClass::Target);
    assert_eq!(script::classify("سلام a"), ScriptClass::Target);
}

#[test]
fn test_arabic_punctuation_counts_as_arabic() {
    // U+061F ARABIC QUESTION MARK lies inside the Arabic block
    assert_eq!(script::classify("؟"), ScriptClass::Target);
    assert_eq!(convert("؟").text(), "?");
}
