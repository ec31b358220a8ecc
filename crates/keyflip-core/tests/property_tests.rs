use keyflip_core::transform::{transliterate_forward, transliterate_reverse};
use keyflip_core::{arabic_102, convert, script, ConversionResult, Direction, ScriptClass};
use proptest::prelude::*;

// --- STRATEGIES ---

/// Lowercase keys whose Arabic letters never merge into a lam-alef ligature
fn arb_unambiguous_word() -> impl Strategy<Value = String> {
    "[a-fh-z ]{1,40}"
}

/// Codepoints outside both the table and the Arabic block
fn arb_foreign_text() -> impl Strategy<Value = String> {
    "[\u{4E00}-\u{9FFF}\u{1F600}-\u{1F64F}\u{0400}-\u{04FF}]{0,30}"
}

proptest! {
    #[test]
    fn prop_convert_never_panics(text in "\\PC*") {
        let result = convert(&text);
        prop_assert_eq!(result.did_convert(), !text.is_empty());
    }

    #[test]
    fn prop_unambiguous_words_round_trip(word in arb_unambiguous_word()) {
        let once = convert(&word);
        let twice = convert(once.text());
        prop_assert_eq!(twice.text(), word.as_str());
    }

    #[test]
    fn prop_foreign_text_passes_through(text in arb_foreign_text()) {
        prop_assert_eq!(transliterate_forward(&text, arabic_102()), text.clone());
        prop_assert_eq!(transliterate_reverse(&text, arabic_102()), text.clone());
        if !text.is_empty() {
            prop_assert_eq!(
                convert(&text),
                ConversionResult::Converted { text: text.clone(), direction: Direction::SourceToTarget }
            );
        }
    }

    #[test]
    fn prop_foreign_text_keeps_position(
        prefix in arb_foreign_text(),
        word in "[a-z]{1,10}",
        suffix in arb_foreign_text(),
    ) {
        let text = format!("{}{}{}", prefix, word, suffix);
        let converted = transliterate_forward(&text, arabic_102());
        prop_assert!(converted.starts_with(prefix.as_str()));
        prop_assert!(converted.ends_with(suffix.as_str()));
    }

    #[test]
    fn prop_arabic_letters_classify_as_arabic(text in "[\u{0621}-\u{064A}]{1,20}") {
        prop_assert_eq!(script::classify(&text), ScriptClass::Target);
        prop_assert_eq!(convert(&text).direction(), Some(Direction::TargetToSource));
    }

    #[test]
    fn prop_forward_output_has_one_or_two_chars_per_input(word in "[ -~]{0,40}") {
        let input_len = word.chars().count();
        let output_len = transliterate_forward(&word, arabic_102()).chars().count();
        prop_assert!(output_len >= input_len);
        prop_assert!(output_len <= input_len * 2);
    }
}
