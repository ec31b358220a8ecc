// Keyflip Modifier
// Hotkey modifiers (Alt, Ctrl, Shift, Win) and their aliases

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A hotkey modifier.
///
/// Aliases are case-sensitive, as in combo strings like `Ctrl-[` or `C-[`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
pub enum Modifier {
    #[strum(to_string = "Alt", serialize = "A", serialize = "Opt", serialize = "Option")]
    Alt,
    #[strum(to_string = "Ctrl", serialize = "C", serialize = "Control")]
    Control,
    #[strum(to_string = "Shift")]
    Shift,
    #[strum(
        to_string = "Super",
        serialize = "Win",
        serialize = "Cmd",
        serialize = "Command",
        serialize = "Meta"
    )]
    Win,
}

impl Modifier {
    /// Look up a modifier by any of its aliases
    pub fn from_alias(alias: &str) -> Option<Modifier> {
        alias.parse().ok()
    }

    /// Canonical alias, used when printing combos
    pub fn primary_alias(self) -> &'static str {
        match self {
            Modifier::Alt => "Alt",
            Modifier::Control => "Ctrl",
            Modifier::Shift => "Shift",
            Modifier::Win => "Super",
        }
    }

    /// Bit used in the `fsModifiers` argument of Win32 `RegisterHotKey`
    pub fn flag(self) -> u32 {
        match self {
            Modifier::Alt => 0x1,
            Modifier::Control => 0x2,
            Modifier::Shift => 0x4,
            Modifier::Win => 0x8,
        }
    }

    pub fn all() -> impl Iterator<Item = Modifier> {
        Modifier::iter()
    }
}
