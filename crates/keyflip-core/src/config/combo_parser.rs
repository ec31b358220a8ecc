// Keyflip Config API - Combo String Parser
// Parses combo strings like "Ctrl-[" into structured components

use crate::key::Key;
use crate::modifier::Modifier;

/// Result of parsing a combo string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCombo {
    /// The modifiers parsed from the string (in order, de-duplicated)
    pub modifiers: Vec<Modifier>,
    /// The key (the last component after hyphens)
    pub key: Key,
}

/// Errors that can occur during combo parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ComboParseError {
    /// Empty input string
    EmptyInput,
    /// Key name not recognized
    UnknownKey(String),
    /// Modifier alias not recognized
    UnknownModifier(String),
    /// Input ends with hyphen (e.g., "Ctrl-")
    TrailingHyphen,
}

impl std::fmt::Display for ComboParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComboParseError::EmptyInput => write!(f, "combo string cannot be empty"),
            ComboParseError::UnknownKey(name) => write!(f, "unknown key name: '{}'", name),
            ComboParseError::UnknownModifier(name) => write!(f, "unknown modifier: '{}'", name),
            ComboParseError::TrailingHyphen => write!(f, "combo string cannot end with hyphen"),
        }
    }
}

impl std::error::Error for ComboParseError {}

/// Parse a combo string like "Ctrl-Shift-A" into modifiers and key
///
/// # Arguments
/// * `exp` - The combo expression string to parse
///
/// # Returns
/// A `ParsedCombo` containing the modifiers and key
///
/// # Examples
/// ```
/// use keyflip_core::config::parse_combo_string;
/// use keyflip_core::{Key, Modifier};
/// let parsed = parse_combo_string("Ctrl-[").unwrap();
/// assert_eq!(parsed.modifiers, vec![Modifier::Control]);
/// assert_eq!(parsed.key, Key::Char('['));
/// ```
pub fn parse_combo_string(exp: &str) -> Result<ParsedCombo, ComboParseError> {
    let trimmed = exp.trim();
    if trimmed.is_empty() {
        return Err(ComboParseError::EmptyInput);
    }

    if trimmed.ends_with('-') {
        return Err(ComboParseError::TrailingHyphen);
    }

    // The last part is always the key, everything before it a modifier
    let (modifier_part, key_str) = match trimmed.rsplit_once('-') {
        Some((mods, key)) => (Some(mods), key),
        None => (None, trimmed),
    };

    let key: Key = key_str
        .parse()
        .map_err(|_| ComboParseError::UnknownKey(key_str.to_string()))?;

    let mut modifiers = Vec::new();
    for alias in modifier_part.into_iter().flat_map(|m| m.split('-')) {
        let modifier = Modifier::from_alias(alias)
            .ok_or_else(|| ComboParseError::UnknownModifier(alias.to_string()))?;

        // Avoid duplicate modifiers
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(ParsedCombo { modifiers, key })
}
