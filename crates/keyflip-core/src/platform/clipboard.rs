// Keyflip Clipboard Bridge
// Selection capture and replacement through the clipboard

use std::thread;
use std::time::Duration;

#[cfg(feature = "settings")]
use crate::settings::Settings;

use super::{Clipboard, Keystrokes, PlatformError, SelectionBridge};

/// Wait after simulating copy, before reading the clipboard
pub const DEFAULT_COPY_SETTLE: Duration = Duration::from_millis(100);

/// Wait after pasting, before the previous clipboard text is put back
pub const DEFAULT_RESTORE_SETTLE: Duration = Duration::from_millis(100);

/// Drives a [`Clipboard`] and [`Keystrokes`] pair to read and replace the
/// focused application's selection.
///
/// Each hotkey press opens a [`ClipboardSession`] with [`begin`](Self::begin).
/// The session remembers the clipboard text from before the press and
/// writes it back when dropped, whichever way the press ended.
pub struct ClipboardBridge<C, K> {
    clipboard: C,
    keystrokes: K,
    copy_settle: Duration,
    restore_settle: Duration,
}

impl<C: Clipboard, K: Keystrokes> ClipboardBridge<C, K> {
    /// Bridge with the default 100 ms settle delays
    pub fn new(clipboard: C, keystrokes: K) -> Self {
        Self::with_delays(clipboard, keystrokes, DEFAULT_COPY_SETTLE, DEFAULT_RESTORE_SETTLE)
    }

    pub fn with_delays(
        clipboard: C,
        keystrokes: K,
        copy_settle: Duration,
        restore_settle: Duration,
    ) -> Self {
        Self {
            clipboard,
            keystrokes,
            copy_settle,
            restore_settle,
        }
    }

    #[cfg(feature = "settings")]
    pub fn with_settings(clipboard: C, keystrokes: K, settings: &Settings) -> Self {
        Self::with_delays(
            clipboard,
            keystrokes,
            settings.copy_settle(),
            settings.restore_settle(),
        )
    }

    /// Start handling one hotkey press: back up the clipboard text
    pub fn begin(&mut self) -> Result<ClipboardSession<'_, C, K>, PlatformError> {
        let backup = self.clipboard.get_text()?.unwrap_or_default();
        log::trace!("clipboard backup: {} bytes", backup.len());
        Ok(ClipboardSession {
            bridge: self,
            backup,
        })
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn keystrokes(&self) -> &K {
        &self.keystrokes
    }

    pub fn into_parts(self) -> (C, K) {
        (self.clipboard, self.keystrokes)
    }
}

/// One hotkey press worth of clipboard use.
///
/// Dropping the session restores the text that was on the clipboard when
/// it began, unless that text was empty.
pub struct ClipboardSession<'b, C: Clipboard, K: Keystrokes> {
    bridge: &'b mut ClipboardBridge<C, K>,
    backup: String,
}

impl<C: Clipboard, K: Keystrokes> ClipboardSession<'_, C, K> {
    /// Clipboard text saved when the session began
    pub fn backup(&self) -> &str {
        &self.backup
    }
}

impl<C: Clipboard, K: Keystrokes> SelectionBridge for ClipboardSession<'_, C, K> {
    fn capture_selection(&mut self) -> Result<Option<String>, PlatformError> {
        self.bridge.keystrokes.send_copy()?;
        settle(self.bridge.copy_settle);

        let copied = self.bridge.clipboard.get_text()?.unwrap_or_default();

        // Nothing selected leaves the clipboard as it was
        if copied.is_empty() || copied == self.backup {
            log::debug!("no new selection on the clipboard");
            return Ok(None);
        }
        Ok(Some(copied))
    }

    fn replace_selection(&mut self, text: &str) -> Result<(), PlatformError> {
        self.bridge.clipboard.set_text(text)?;
        self.bridge.keystrokes.send_paste()
    }
}

impl<C: Clipboard, K: Keystrokes> Drop for ClipboardSession<'_, C, K> {
    fn drop(&mut self) {
        if self.backup.is_empty() {
            return;
        }
        // Give the target application time to read the pasted text
        settle(self.bridge.restore_settle);
        if let Err(e) = self.bridge.clipboard.set_text(&self.backup) {
            log::warn!("could not restore clipboard: {}", e);
        }
    }
}

fn settle(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryClipboard, RecordingKeystrokes};

    fn bridge(
        clipboard: &MemoryClipboard,
        selection: Option<&str>,
    ) -> ClipboardBridge<MemoryClipboard, RecordingKeystrokes> {
        let keys = RecordingKeystrokes::new(clipboard.clone(), selection.map(str::to_string));
        ClipboardBridge::with_delays(clipboard.clone(), keys, Duration::ZERO, Duration::ZERO)
    }

    #[test]
    fn test_capture_reads_copied_selection() {
        let clipboard = MemoryClipboard::with_text("old");
        let mut bridge = bridge(&clipboard, Some("hello"));
        {
            let mut session = bridge.begin().unwrap();
            assert_eq!(session.backup(), "old");
            assert_eq!(session.capture_selection().unwrap(), Some("hello".to_string()));
        }
        assert_eq!(clipboard.text(), Some("old".to_string()));
        assert_eq!(bridge.keystrokes().copies(), 1);
    }

    #[test]
    fn test_capture_without_selection() {
        let clipboard = MemoryClipboard::with_text("old");
        let mut bridge = bridge(&clipboard, None);
        let mut session = bridge.begin().unwrap();
        assert_eq!(session.capture_selection().unwrap(), None);
    }

    #[test]
    fn test_capture_same_as_clipboard_is_none() {
        let clipboard = MemoryClipboard::with_text("same");
        let mut bridge = bridge(&clipboard, Some("same"));
        let mut session = bridge.begin().unwrap();
        assert_eq!(session.capture_selection().unwrap(), None);
    }

    #[test]
    fn test_replace_pastes_and_restores() {
        let clipboard = MemoryClipboard::with_text("old");
        let mut bridge = bridge(&clipboard, Some("hello"));
        {
            let mut session = bridge.begin().unwrap();
            session.capture_selection().unwrap();
            session.replace_selection("اثممخ").unwrap();
            assert_eq!(clipboard.text(), Some("اثممخ".to_string()));
        }
        assert_eq!(bridge.keystrokes().pasted(), &["اثممخ".to_string()]);
        assert_eq!(clipboard.text(), Some("old".to_string()));
    }

    #[test]
    fn test_empty_backup_is_not_restored() {
        let clipboard = MemoryClipboard::new();
        let mut bridge = bridge(&clipboard, Some("hello"));
        {
            let mut session = bridge.begin().unwrap();
            session.capture_selection().unwrap();
            session.replace_selection("x").unwrap();
        }
        // Converted text stays on the clipboard
        assert_eq!(clipboard.text(), Some("x".to_string()));
    }

    #[test]
    fn test_restore_after_paste_failure() {
        let clipboard = MemoryClipboard::with_text("old");
        let keys = RecordingKeystrokes::new(clipboard.clone(), Some("hello".to_string()))
            .failing_paste();
        let mut bridge =
            ClipboardBridge::with_delays(clipboard.clone(), keys, Duration::ZERO, Duration::ZERO);
        {
            let mut session = bridge.begin().unwrap();
            session.capture_selection().unwrap();
            assert!(session.replace_selection("x").is_err());
        }
        assert_eq!(clipboard.text(), Some("old".to_string()));
    }

    #[test]
    fn test_begin_fails_when_clipboard_unavailable() {
        let clipboard = MemoryClipboard::with_text("old");
        clipboard.set_available(false);
        let mut bridge = bridge(&clipboard, Some("hello"));
        assert!(matches!(
            bridge.begin(),
            Err(PlatformError::ClipboardUnavailable(_))
        ));
    }
}
