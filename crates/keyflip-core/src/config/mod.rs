// Keyflip Config API
// Hotkey combo string parsing

pub mod combo_parser;

pub use combo_parser::{parse_combo_string, ComboParseError, ParsedCombo};
