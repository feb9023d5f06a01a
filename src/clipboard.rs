//! Clipboard access.
//!
//! The [`Clipboard`] trait is the seam between citation export and the
//! platform clipboard, so view state can be driven without a display server.

use crate::error::{Result, VitaeError};
use std::time::Duration;
use tracing::debug;

/// Whether copied text disappears when the copying process exits (X11/Wayland).
pub const SELECTION_NEEDS_OWNER: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened on first use.
///
/// On X11 and Wayland the copied text is only served while the owning
/// process is alive. A long-lived caller such as the terminal viewer can
/// copy and move on; a one-shot command should use [`SystemClipboard::holding`]
/// so the text outlives the write.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block each write until the text is taken over by another owner
    /// (a clipboard manager or a later copy), or `hold` runs out.
    /// Only X11/Wayland need this; elsewhere writes return at once.
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: None,
            hold: (!hold.is_zero()).then_some(hold),
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold: Option<Duration>,
) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    match hold {
        Some(hold) => clipboard
            .set()
            .wait_until(std::time::Instant::now() + hold)
            .text(text.to_string()),
        None => clipboard.set_text(text.to_string()),
    }
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold: Option<Duration>,
) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let c = arboard::Clipboard::new()
                .map_err(|e| VitaeError::Clipboard(format!("Clipboard not available: {}", e)))?;
            self.inner = Some(c);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(VitaeError::Clipboard("Clipboard not available".to_string()));
        };
        write_text(clipboard, text, self.hold)
            .map_err(|e| VitaeError::Clipboard(format!("Failed to copy to clipboard: {}", e)))?;
        debug!(chars = text.chars().count(), "Copied text to clipboard");
        Ok(())
    }
}
