// Keyflip Hotkey Combo
// A key plus a set of modifiers, e.g. Ctrl-[

use std::fmt;
use std::str::FromStr;

use crate::config::combo_parser::{parse_combo_string, ComboParseError};
use crate::key::Key;
use crate::modifier::Modifier;

/// The hotkey that triggers conversion of the current selection
pub const DEFAULT_HOTKEY: &str = "Ctrl-[";

/// A global hotkey.
///
/// Modifiers are kept sorted and de-duplicated, so equality and hashing do
/// not depend on the order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    modifiers: Vec<Modifier>,
    key: Key,
}

impl Hotkey {
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: Key) -> Self {
        let mut modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        modifiers.sort();
        modifiers.dedup();
        Self { modifiers, key }
    }

    /// Ctrl-[
    pub fn default_hotkey() -> Self {
        Self::new([Modifier::Control], Key::Char('['))
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Combined Win32 modifier flags
    pub fn modifier_mask(&self) -> u32 {
        self.modifiers.iter().fold(0, |mask, m| mask | m.flag())
    }
}

impl Default for Hotkey {
    fn default() -> Self {
        Self::default_hotkey()
    }
}

impl FromStr for Hotkey {
    type Err = ComboParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parse_combo_string(s)?;
        Ok(Hotkey::new(parsed.modifiers, parsed.key))
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}-", m.primary_alias())?;
        }
        write!(f, "{}", self.key)
    }
}
