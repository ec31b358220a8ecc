// Keyflip Key
// The non-modifier part of a hotkey

use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumString};

/// Keys that are written by name in combo strings (case-insensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NamedKey {
    #[strum(to_string = "ENTER", serialize = "RETURN")]
    Enter,
    #[strum(to_string = "TAB")]
    Tab,
    #[strum(to_string = "SPACE")]
    Space,
    #[strum(to_string = "ESC", serialize = "ESCAPE")]
    Escape,
    #[strum(to_string = "BACKSPACE")]
    Backspace,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl NamedKey {
    fn virtual_key(self) -> u32 {
        match self {
            NamedKey::Enter => 0x0D,
            NamedKey::Tab => 0x09,
            NamedKey::Space => 0x20,
            NamedKey::Escape => 0x1B,
            NamedKey::Backspace => 0x08,
            NamedKey::F1 => 0x70,
            NamedKey::F2 => 0x71,
            NamedKey::F3 => 0x72,
            NamedKey::F4 => 0x73,
            NamedKey::F5 => 0x74,
            NamedKey::F6 => 0x75,
            NamedKey::F7 => 0x76,
            NamedKey::F8 => 0x77,
            NamedKey::F9 => 0x78,
            NamedKey::F10 => 0x79,
            NamedKey::F11 => 0x7A,
            NamedKey::F12 => 0x7B,
        }
    }
}

/// A hotkey key: a printable US-layout character or a named key.
///
/// Letters are stored uppercase, so `Ctrl-a` and `Ctrl-A` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Named(NamedKey),
}

impl Key {
    /// Win32 virtual-key code for the US layout, if the key has one
    pub fn virtual_key(self) -> Option<u32> {
        let c = match self {
            Key::Named(named) => return Some(named.virtual_key()),
            Key::Char(c) => c,
        };
        let vk = match c {
            'A'..='Z' | '0'..='9' => c as u32,
            ';' => 0xBA,
            '=' => 0xBB,
            ',' => 0xBC,
            '-' => 0xBD,
            '.' => 0xBE,
            '/' => 0xBF,
            '`' => 0xC0,
            '[' => 0xDB,
            '\\' => 0xDC,
            ']' => 0xDD,
            '\'' => 0xDE,
            _ => return None,
        };
        Some(vk)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Named(named) => write!(f, "{}", named),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_whitespace() {
                return Err(format!("Unknown key: {:?}", s));
            }
            return Ok(Key::Char(c.to_ascii_uppercase()));
        }
        NamedKey::from_str(s)
            .map(Key::Named)
            .map_err(|_| format!("Unknown key: {}", s))
    }
}
