// Keyflip Converter
// Entry point: pick a direction, transliterate, report what happened

use std::sync::OnceLock;

use crate::layout;
use crate::mapping::MappingTable;
use crate::script;
use crate::transform::{self, Direction};

/// Outcome of converting one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Nothing to convert
    NoOp,
    /// Text was rewritten in `direction`
    Converted { text: String, direction: Direction },
}

impl ConversionResult {
    /// Converted text, empty for a no-op
    pub fn text(&self) -> &str {
        match self {
            ConversionResult::NoOp => "",
            ConversionResult::Converted { text, .. } => text,
        }
    }

    /// Whether the caller should write the result back
    pub fn did_convert(&self) -> bool {
        matches!(self, ConversionResult::Converted { .. })
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            ConversionResult::NoOp => None,
            ConversionResult::Converted { direction, .. } => Some(*direction),
        }
    }

    /// `(output_text, did_convert)`
    pub fn into_parts(self) -> (String, bool) {
        match self {
            ConversionResult::NoOp => (String::new(), false),
            ConversionResult::Converted { text, .. } => (text, true),
        }
    }
}

/// Stateless converter over an immutable table
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    table: &'t MappingTable,
}

impl<'t> Converter<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t MappingTable {
        self.table
    }

    /// Convert `text` to the other layout.
    ///
    /// Empty input is a no-op. Anything else is converted, even when no
    /// character has a mapping: the result is then identical to the input
    /// but still reported as converted.
    pub fn convert(&self, text: &str) -> ConversionResult {
        if text.is_empty() {
            return ConversionResult::NoOp;
        }

        let counts = script::count(text);
        let direction = counts.classify().direction();
        log::debug!(
            "converting {} chars ({} latin, {} arabic): {}",
            text.chars().count(),
            counts.latin,
            counts.target,
            direction
        );

        ConversionResult::Converted {
            text: transform::transliterate(text, self.table, direction),
            direction,
        }
    }
}

impl Converter<'static> {
    /// Converter over the process-wide Arabic (102) table
    pub fn global() -> &'static Converter<'static> {
        static INSTANCE: OnceLock<Converter<'static>> = OnceLock::new();
        INSTANCE.get_or_init(|| Converter::new(layout::arabic_102()))
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        *Self::global()
    }
}

/// Convert with the process-wide converter
pub fn convert(text: &str) -> ConversionResult {
    Converter::global().convert(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_noop() {
        let result = convert("");
        assert_eq!(result, ConversionResult::NoOp);
        assert_eq!(result.into_parts(), (String::new(), false));
    }

    #[test]
    fn test_digits_convert_to_themselves() {
        assert_eq!(convert("12345").into_parts(), ("12345".to_string(), true));
    }

    #[test]
    fn test_latin_goes_forward() {
        let result = convert("salam");
        assert_eq!(result.direction(), Some(Direction::SourceToTarget));
        assert_eq!(result.text(), "سشمشة");
    }

    #[test]
    fn test_arabic_goes_back() {
        let result = convert("سشمشة");
        assert_eq!(result.direction(), Some(Direction::TargetToSource));
        assert_eq!(result.text(), "salam");
    }

    #[test]
    fn test_whitespace_only_still_converts() {
        let result = convert(" \n");
        assert!(result.did_convert());
        assert_eq!(result.text(), " \n");
    }

    #[test]
    fn test_custom_table() {
        let table = MappingTable::build([("a", "ش")]);
        let converter = Converter::new(&table);
        assert_eq!(converter.convert("ab").text(), "شb");
        assert_eq!(converter.convert("شش").text(), "aa");
    }

    #[test]
    fn test_deterministic() {
        let a = convert("The quick brown fox");
        let b = convert("The quick brown fox");
        assert_eq!(a, b);
    }

    #[test]
    fn test_converter_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| convert("hello").into_parts()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), ("اثممخ".to_string(), true));
        }
    }
}
