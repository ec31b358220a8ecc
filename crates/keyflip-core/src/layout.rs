// Keyflip Layout Data
// US QWERTY -> Arabic (102) AZERTY correspondence

use std::sync::OnceLock;

use crate::mapping::MappingTable;

/// Keystroke correspondence between the US QWERTY layout and the Arabic
/// (102) AZERTY layout, in table order.
///
/// Order matters: the reverse table keeps the first source for each target.
/// Three targets are shared and lose their later source on the way back:
/// `` ` `` (`U` kept), `'` (`:` kept), `~` (`Z` kept).
pub const ARABIC_102: &[(&str, &str)] = &[
    // Unshifted letter rows
    ("q", "ض"), ("w", "ص"), ("e", "ث"), ("r", "ق"), ("t", "ف"), ("y", "غ"),
    ("u", "ع"), ("i", "ه"), ("o", "خ"), ("p", "ح"), ("[", "ج"), ("]", "د"),
    ("a", "ش"), ("s", "س"), ("d", "ي"), ("f", "ب"), ("g", "ل"), ("h", "ا"),
    ("j", "ت"), ("k", "ن"), ("l", "م"), (";", "ك"), ("'", "ط"),
    ("z", "ئ"), ("x", "ء"), ("c", "ؤ"), ("v", "ر"), ("b", "لا"), ("n", "ى"),
    ("m", "ة"), (",", "و"), (".", "ز"), ("/", "ظ"),
    // Shifted letter rows
    ("Q", "\u{064E}"), ("W", "\u{064B}"), ("E", "\u{064F}"), ("R", "\u{064C}"),
    ("T", "لإ"), ("Y", "إ"), ("U", "`"), ("I", "÷"), ("O", "×"), ("P", "؛"),
    ("{", "<"), ("}", ">"),
    ("A", "\u{0650}"), ("S", "\u{064D}"), ("D", "]"), ("F", "["), ("G", "لأ"),
    ("H", "أ"), ("J", "ـ"), ("K", "،"), ("L", "/"), (":", "'"), ("\"", "\""),
    ("Z", "~"), ("X", "\u{0652}"), ("C", "}"), ("V", "{"), ("B", "لآ"),
    ("N", "آ"), ("M", "'"), ("<", ","), (">", "."), ("?", "؟"),
    // Number row
    ("1", "1"), ("2", "2"), ("3", "3"), ("4", "4"), ("5", "5"),
    ("6", "6"), ("7", "7"), ("8", "8"), ("9", "9"), ("0", "0"),
    ("!", "!"), ("@", "@"), ("#", "#"), ("$", "$"), ("%", "%"),
    ("^", "^"), ("&", "&"), ("*", "*"), ("(", ")"), (")", "("),
    // Remaining symbols and whitespace
    ("-", "-"), ("_", "_"), ("=", "="), ("+", "+"), ("\\", "\\"), ("|", "|"),
    ("`", "`"), ("~", "~"),
    (" ", " "), ("\n", "\n"), ("\r", "\r"), ("\t", "\t"),
];

/// Process-wide Arabic (102) table, built on first use
pub fn arabic_102() -> &'static MappingTable {
    static TABLE: OnceLock<MappingTable> = OnceLock::new();
    TABLE.get_or_init(|| MappingTable::build(ARABIC_102.iter().copied()))
}
