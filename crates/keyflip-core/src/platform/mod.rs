// Keyflip Platform Capabilities
//
// The conversion core never talks to the OS. Everything it needs from the
// desktop (clipboard text, simulated copy/paste, global hotkey delivery)
// comes through the traits in this module. OS backends live outside this
// crate; `memory` provides in-process implementations.

pub mod clipboard;
pub mod memory;

use crate::combo::Hotkey;

pub use clipboard::{ClipboardBridge, ClipboardSession};
pub use memory::{ManualHotkeys, MemoryClipboard, RecordingKeystrokes};

/// Error type for platform operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// Clipboard could not be opened or read
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Simulated keystroke was rejected
    #[error("keystroke failed: {0}")]
    Keystroke(String),

    /// Hotkey could not be bound
    #[error("couldn't register the hot key {hotkey}: {reason}")]
    HotkeyRegistration { hotkey: String, reason: String },
}

/// Plain-text clipboard access
pub trait Clipboard {
    /// Current clipboard text, `None` when the clipboard holds no text
    fn get_text(&mut self) -> Result<Option<String>, PlatformError>;

    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Simulated copy and paste shortcuts sent to the focused window
pub trait Keystrokes {
    fn send_copy(&mut self) -> Result<(), PlatformError>;
    fn send_paste(&mut self) -> Result<(), PlatformError>;
}

/// Read and overwrite the selection in the focused application
pub trait SelectionBridge {
    /// Text currently selected, `None` when nothing new was selected
    fn capture_selection(&mut self) -> Result<Option<String>, PlatformError>;

    /// Replace the selection with `text`
    fn replace_selection(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Numeric identifier of a registered hotkey, allocated from 1
pub type HotkeyId = u32;

/// Invoked on the platform's hotkey thread each time the combo is pressed
pub type HotkeyCallback = Box<dyn FnMut() + Send + 'static>;

/// Global hotkey registration
pub trait HotkeyRegistrar {
    fn register_hotkey(
        &mut self,
        hotkey: &Hotkey,
        callback: HotkeyCallback,
    ) -> Result<HotkeyId, PlatformError>;

    /// Release every registered hotkey, newest first
    fn unregister_all(&mut self);
}
