// Keyflip Hotkey Handler
// Converts the focused application's selection on each hotkey press

use crate::combo::Hotkey;
use crate::convert::{ConversionResult, Converter};
use crate::platform::{
    Clipboard, ClipboardBridge, HotkeyCallback, HotkeyId, HotkeyRegistrar, Keystrokes,
    PlatformError, SelectionBridge,
};
use crate::transform::Direction;

/// What a hotkey press did to the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No selection, or nothing in it to convert
    NothingSelected,
    /// The selection was replaced by `text`
    Replaced { direction: Direction, text: String },
}

impl SelectionOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, SelectionOutcome::Replaced { .. })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HotkeyHandler<'t> {
    converter: Converter<'t>,
}

impl<'t> HotkeyHandler<'t> {
    pub fn new(converter: Converter<'t>) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &Converter<'t> {
        &self.converter
    }

    /// Convert whatever `bridge` reports as selected and write it back
    pub fn on_hotkey<B: SelectionBridge + ?Sized>(
        &self,
        bridge: &mut B,
    ) -> Result<SelectionOutcome, PlatformError> {
        let Some(selected) = bridge.capture_selection()? else {
            return Ok(SelectionOutcome::NothingSelected);
        };

        match self.converter.convert(&selected) {
            ConversionResult::NoOp => Ok(SelectionOutcome::NothingSelected),
            ConversionResult::Converted { text, direction } => {
                bridge.replace_selection(&text)?;
                log::info!("replaced {} chars ({})", selected.chars().count(), direction);
                Ok(SelectionOutcome::Replaced { direction, text })
            }
        }
    }

    /// Handle one press through the clipboard.
    ///
    /// The clipboard text from before the press is restored on return,
    /// including when capture or paste fails.
    pub fn handle_press<C: Clipboard, K: Keystrokes>(
        &self,
        bridge: &mut ClipboardBridge<C, K>,
    ) -> Result<SelectionOutcome, PlatformError> {
        let mut session = bridge.begin()?;
        self.on_hotkey(&mut session)
    }
}

impl Default for HotkeyHandler<'static> {
    fn default() -> Self {
        Self::new(*Converter::global())
    }
}

/// Register `callback` under the default hotkey (Ctrl-[)
pub fn install<R: HotkeyRegistrar + ?Sized>(
    registrar: &mut R,
    callback: HotkeyCallback,
) -> Result<HotkeyId, PlatformError> {
    let hotkey = Hotkey::default_hotkey();
    let id = registrar.register_hotkey(&hotkey, callback)?;
    log::info!("listening on {}", hotkey);
    Ok(id)
}
