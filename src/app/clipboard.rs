//! Clipboard handling with timed auto-clear.

use std::time::{Duration, Instant};

/// Lazily opened system clipboard.
///
/// Opening can fail on headless sessions; the handle is only created on the
/// first copy so the app itself never depends on a clipboard being present.
#[derive(Default)]
pub struct ClipboardHandle {
    clipboard: Option<arboard::Clipboard>,
    copied_at: Option<Instant>,
}

impl ClipboardHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, text: &str) -> Result<(), arboard::Error> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text)?;
            self.copied_at = Some(Instant::now());
        }
        Ok(())
    }

    /// Clear the clipboard once the timeout has elapsed since the last copy.
    pub fn tick(&mut self, timeout: Duration) {
        let Some(copied_at) = self.copied_at else { return };
        if copied_at.elapsed() < timeout {
            return;
        }
        self.copied_at = None;
        if let Some(clipboard) = self.clipboard.as_mut() {
            let _ = clipboard.clear();
        }
    }
}
