// Keyflip Transform Engine
// Greedy substitution over a mapping table, both directions
//
// Both passes are total: every input codepoint yields either its mapped
// sequence or itself.

use crate::mapping::MappingTable;
use crate::transform::Direction;

/// Convert `text` through `table` in the given direction.
///
/// # Arguments
/// * `text` - Input text, any content
/// * `table` - Layout table to apply
/// * `direction` - Which side of the table to read from
///
/// # Returns
/// The converted text. Unmapped codepoints are copied unchanged.
pub fn transliterate(text: &str, table: &MappingTable, direction: Direction) -> String {
    match direction {
        Direction::SourceToTarget => transliterate_forward(text, table),
        Direction::TargetToSource => transliterate_reverse(text, table),
    }
}

/// One codepoint at a time through the forward table.
///
/// Output length in codepoints is never shorter than the input, since a
/// forward target has at least one codepoint.
pub fn transliterate_forward(text: &str, table: &MappingTable) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match table.lookup_forward(c) {
            Some(mapped) => result.push_str(mapped),
            None => result.push(c),
        }
    }
    result
}

/// Cursor walk through the reverse table.
///
/// At each position the longest reverse key is tried first, so the
/// two-codepoint lam-alef sequences come back as a single Latin letter
/// instead of two separate ones.
pub fn transliterate_reverse(text: &str, table: &MappingTable) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match table.lookup_reverse(rest) {
            Some(m) => {
                result.push_str(m.replacement);
                rest = &rest[m.bytes..];
            }
            None => {
                result.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    result
}
