// Keyflip In-Memory Platform
// Clipboard, keystrokes and hotkeys without an OS behind them

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::combo::Hotkey;

use super::{
    Clipboard, HotkeyCallback, HotkeyId, HotkeyRegistrar, Keystrokes, PlatformError,
};

#[derive(Debug, Default)]
struct ClipboardState {
    text: Option<String>,
    writes: usize,
    unavailable: bool,
}

/// Shared in-memory clipboard. Clones see the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    state: Arc<Mutex<ClipboardState>>,
}

impl MemoryClipboard {
    /// Empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::new();
        clipboard.state.lock().text = Some(text.to_string());
        clipboard
    }

    /// Current contents
    pub fn text(&self) -> Option<String> {
        self.state.lock().text.clone()
    }

    /// Number of successful `set_text` calls so far
    pub fn writes(&self) -> usize {
        self.state.lock().writes
    }

    /// Make every access fail, as when another process holds the clipboard
    pub fn set_available(&self, available: bool) {
        self.state.lock().unavailable = !available;
    }

    fn put(&self, text: &str) {
        self.state.lock().text = Some(text.to_string());
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<Option<String>, PlatformError> {
        let state = self.state.lock();
        if state.unavailable {
            return Err(PlatformError::ClipboardUnavailable("locked".to_string()));
        }
        Ok(state.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        let mut state = self.state.lock();
        if state.unavailable {
            return Err(PlatformError::ClipboardUnavailable("locked".to_string()));
        }
        state.text = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }
}

/// Simulated focused application.
///
/// Copy puts the current selection on the clipboard (or leaves it alone when
/// nothing is selected). Paste records the clipboard text and makes it the
/// new selection.
#[derive(Debug)]
pub struct RecordingKeystrokes {
    clipboard: MemoryClipboard,
    selection: Option<String>,
    copies: usize,
    pasted: Vec<String>,
    fail_paste: bool,
}

impl RecordingKeystrokes {
    pub fn new(clipboard: MemoryClipboard, selection: Option<String>) -> Self {
        Self {
            clipboard,
            selection,
            copies: 0,
            pasted: Vec::new(),
            fail_paste: false,
        }
    }

    /// Reject every paste
    pub fn failing_paste(mut self) -> Self {
        self.fail_paste = true;
        self
    }

    pub fn select(&mut self, text: &str) {
        self.selection = Some(text.to_string());
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Text pasted so far, oldest first
    pub fn pasted(&self) -> &[String] {
        &self.pasted
    }
}

impl Keystrokes for RecordingKeystrokes {
    fn send_copy(&mut self) -> Result<(), PlatformError> {
        self.copies += 1;
        if let Some(selection) = &self.selection {
            self.clipboard.put(selection);
        }
        Ok(())
    }

    fn send_paste(&mut self) -> Result<(), PlatformError> {
        if self.fail_paste {
            return Err(PlatformError::Keystroke("paste rejected".to_string()));
        }
        let text = self.clipboard.text().unwrap_or_default();
        self.selection = Some(text.clone());
        self.pasted.push(text);
        Ok(())
    }
}

/// Hotkey registrar that fires callbacks on request.
///
/// Identifiers are handed out from 1. Each combo can be bound once.
#[derive(Default)]
pub struct ManualHotkeys {
    next_id: HotkeyId,
    bindings: IndexMap<HotkeyId, (Hotkey, HotkeyCallback)>,
    released: Vec<HotkeyId>,
}

impl ManualHotkeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a press of `hotkey`. Returns false when nothing is bound.
    pub fn fire(&mut self, hotkey: &Hotkey) -> bool {
        match self.bindings.values_mut().find(|(bound, _)| bound == hotkey) {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn is_registered(&self, hotkey: &Hotkey) -> bool {
        self.bindings.values().any(|(bound, _)| bound == hotkey)
    }

    /// Registered identifiers in registration order
    pub fn ids(&self) -> Vec<HotkeyId> {
        self.bindings.keys().copied().collect()
    }

    /// Identifiers released by `unregister_all`, in release order
    pub fn released(&self) -> &[HotkeyId] {
        &self.released
    }
}

impl HotkeyRegistrar for ManualHotkeys {
    fn register_hotkey(
        &mut self,
        hotkey: &Hotkey,
        callback: HotkeyCallback,
    ) -> Result<HotkeyId, PlatformError> {
        if self.is_registered(hotkey) {
            return Err(PlatformError::HotkeyRegistration {
                hotkey: hotkey.to_string(),
                reason: "already registered".to_string(),
            });
        }
        self.next_id += 1;
        let id = self.next_id;
        log::debug!("registered hotkey {} as id {}", hotkey, id);
        self.bindings.insert(id, (hotkey.clone(), callback));
        Ok(id)
    }

    fn unregister_all(&mut self) {
        while let Some((id, (hotkey, _))) = self.bindings.pop() {
            log::debug!("unregistered hotkey {} (id {})", hotkey, id);
            self.released.push(id);
        }
    }
}

impl Drop for ManualHotkeys {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
