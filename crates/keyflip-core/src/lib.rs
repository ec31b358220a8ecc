// Keyflip Core Library
// QWERTY <-> Arabic (102) AZERTY layout conversion

pub mod combo;
pub mod config;
pub mod convert;
pub mod handler;
pub mod key;
pub mod layout;
pub mod mapping;
pub mod modifier;
pub mod platform;
pub mod script;
pub mod transform;

#[cfg(feature = "settings")]
pub mod settings;

pub use combo::{Hotkey, DEFAULT_HOTKEY};
pub use config::{parse_combo_string, ComboParseError, ParsedCombo};
pub use convert::{convert, ConversionResult, Converter};
pub use handler::{install, HotkeyHandler, SelectionOutcome};
pub use key::{Key, NamedKey};
pub use layout::{arabic_102, ARABIC_102};
pub use mapping::{Collision, MappingEntry, MappingTable, ReverseMatch};
pub use modifier::Modifier;
pub use platform::{
    Clipboard, ClipboardBridge, ClipboardSession, HotkeyCallback, HotkeyId, HotkeyRegistrar,
    Keystrokes, ManualHotkeys, MemoryClipboard, PlatformError, RecordingKeystrokes,
    SelectionBridge,
};
pub use script::{ScriptClass, ScriptCounts};
pub use transform::{transliterate, Direction};

#[cfg(feature = "settings")]
pub use settings::{Settings, SettingsError};
